//! Example: binding a nested configuration from the environment
//!
//! Run with defaults:
//!   cargo run --package envbind --example basic
//!
//! Override some values:
//!   `APP_PORT=9000 APP_DATABASE_URL=postgres://db APP_REPLICAS_HOST=r1 cargo run --package envbind --example basic`
//!
//! Trigger an error:
//!   `APP_PORT=http cargo run --package envbind --example basic`

use envbind::Bind;

#[derive(Bind, Debug)]
pub struct Config {
    pub port: i32,
    pub debug: bool,
    pub database: Database,
    pub replicas: Vec<Replica>,
}

#[derive(Bind, Debug)]
pub struct Database {
    pub url: String,
    pub max_connections: i32,
}

#[derive(Bind, Debug)]
pub struct Replica {
    pub host: String,
}

fn main() {
    let mut config = Config {
        port: 8080,
        debug: false,
        database: Database {
            url: "postgres://localhost/app".to_string(),
            max_connections: 10,
        },
        replicas: vec![
            Replica {
                host: "replica-a".to_string(),
            },
            Replica {
                host: "replica-b".to_string(),
            },
        ],
    };

    println!("Keys read:");
    for key in envbind::keys(&mut config, "app") {
        println!("  {key}");
    }

    match envbind::load_from_environment(&mut config, "app") {
        Ok(()) => {
            println!("Successfully loaded config!");
            println!("  PORT                     = {}", config.port);
            println!("  DEBUG                    = {}", config.debug);
            println!("  DATABASE_URL             = {}", config.database.url);
            println!(
                "  DATABASE_MAX_CONNECTIONS = {}",
                config.database.max_connections
            );
            for replica in &config.replicas {
                println!("  REPLICAS_HOST            = {}", replica.host);
            }
        }

        Err(e) => {
            // Use miette's Report for fancy error rendering
            eprintln!("{:?}", miette::Report::from(e));
            std::process::exit(1);
        }
    }
}
