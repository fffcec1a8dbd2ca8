use std::time::Duration;

use crate::adapters::json;

use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod catalog_cache;
mod guards;
mod sqlite;


pub use catalog_cache::CatalogCache;

pub const DEFAULT_CATALOG_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Maximum age of cached place and route types.
    pub catalog_cache_ttl: Duration,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            catalog_cache_ttl: DEFAULT_CATALOG_CACHE_TTL,
        }
    }
}

pub type PlaceTypesCache = CatalogCache<Vec<json::PlaceType>>;
pub type RouteTypesCache = CatalogCache<Vec<json::RouteType>>;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    info!("Caching place and route types...");
    let place_types = PlaceTypesCache::new(cfg.catalog_cache_ttl);
    if let Err(err) = place_types.refetch(|| api::load_place_types(&db)) {
        warn!("Failed to cache place types: {err}");
    }
    let route_types = RouteTypesCache::new(cfg.catalog_cache_ttl);
    if let Err(err) = route_types.refetch(|| api::load_route_types(&db)) {
        warn!("Failed to cache route types: {err}");
    }

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(place_types)
        .manage(route_types)
        .register("/", api::catchers());

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
