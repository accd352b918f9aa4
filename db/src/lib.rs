#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use r2d2::Error;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type Connection = PooledConnection<ConnectionManager<PgConnection>>;
pub mod migrations;
pub mod models;
pub mod repository;
pub mod schema;

pub fn get_conn(pool: &PgPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err
    })
}

/// Fails once `connection_timeout` passes without the initial connections
/// being established.
pub fn new_pool(
    database_url: &str,
    max_size: u32,
    connection_timeout: Duration,
) -> Result<PgPool, Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    Pool::builder()
        .max_size(max_size)
        .connection_timeout(connection_timeout)
        .build(manager)
        .map_err(|err| {
            error!("Failed to create db pool - {}", err.to_string());
            err
        })
}
