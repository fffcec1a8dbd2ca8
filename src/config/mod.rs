use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "campus-places.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub catalog: Catalog,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Catalog {
    pub cache_ttl: Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            catalog,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Catalog { cache_ttl } = catalog.unwrap_or_default();
        let cache_ttl = match cache_ttl {
            Some(ttl) => ttl,
            None => raw::Catalog::default()
                .cache_ttl
                .ok_or_else(|| anyhow!("Missing default catalog cache TTL"))?,
        };
        let catalog = Catalog { cache_ttl };

        Ok(Self {
            db,
            webserver,
            catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg: Config = Config::try_load_from_file_or_default(file).unwrap();
        assert!(cfg.db.conn_pool_size > 0);
        assert_eq!(Duration::from_secs(300), cfg.catalog.cache_ttl);
    }

    #[test]
    fn complete_partial_config_with_defaults() {
        let raw: raw::Config = toml::from_str("[catalog]\n[webserver]\ncors = true").unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert!(cfg.webserver.enable_cors);
        assert_eq!(Duration::from_secs(300), cfg.catalog.cache_ttl);
        assert_eq!(10, cfg.db.conn_pool_size);
    }

    #[test]
    fn reject_empty_connection_pool() {
        let raw: raw::Config =
            toml::from_str("[db]\nconnection-sqlite = \":memory:\"\nconnection-pool-size = 0")
                .unwrap();
        assert!(Config::try_from(raw).is_err());
    }
}
