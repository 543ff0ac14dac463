mod config {
    pub mod database {
        #[derive(envbind::Bind, Default)]
        pub struct Database {
            pub url: String,
            pub(crate) pool: i32,
        }
    }

    #[derive(envbind::Bind, Default)]
    pub struct Config {
        pub database: database::Database,
        pub(super) replicas: Vec<database::Database>,
    }
}

fn main() {
    let mut config = config::Config::default();
    envbind::must_load_from_environment(&mut config, "ENVBIND_NESTED_MODULES");
}
