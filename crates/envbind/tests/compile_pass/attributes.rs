use envbind::Bind;

#[derive(Bind, Default)]
pub struct Config {
    #[bind(rename = "ListenAddr")]
    pub address: String,

    #[bind(skip)]
    pub started_at: u64,

    #[bind(skip)]
    pub cache: Option<String>,

    /// Doc comments and foreign attributes are left alone.
    #[allow(dead_code)]
    pub r#type: String,
}

fn main() {
    let mut config = Config::default();
    let _ = envbind::keys(&mut config, "svc");
}
