use envbind::Bind;

#[derive(Bind, Default)]
pub struct Config {
    pub host: String,
    pub port: i32,
    pub debug: bool,
    pub tags: Vec<String>,
    private: i64,
}

fn main() {
    let mut config = Config::default();
    let _ = envbind::load_from_environment(&mut config, "APP");
    let _ = config.private;
}
