#![recursion_limit = "128"]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

use campus_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::{CatalogCache, Cfg};

pub async fn run(connections: Connections, enable_cors: bool, cfg: Cfg) {
    web::run(connections.into(), enable_cors, cfg).await;
}
