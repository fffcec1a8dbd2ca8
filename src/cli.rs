use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "campus-places")]
#[command(version, about = "Places and routes of university campuses with an approval workflow")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL to the database (overrides the configuration)
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,
}

impl Args {
    /// Loads the configuration and applies the command line arguments.
    pub fn into_config(self) -> Result<Config> {
        let Self {
            config,
            db_url,
            enable_cors,
        } = self;
        let mut cfg = Config::try_load_from_file_or_default(config)?;
        if let Some(db_url) = db_url {
            cfg.db.conn_sqlite = db_url;
        }
        if enable_cors {
            cfg.webserver.enable_cors = true;
        }
        Ok(cfg)
    }
}

pub async fn run(args: Args) -> Result<()> {
    let cfg = args.into_config()?;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections =
        campus_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    campus_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let web_cfg = campus_webserver::Cfg {
        catalog_cache_ttl: cfg.catalog.cache_ttl,
    };
    campus_webserver::run(connections, cfg.webserver.enable_cors, web_cfg).await;
    Ok(())
}
