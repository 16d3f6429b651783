#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
#[cfg(any(test, feature = "test-utils"))]
use diesel::{r2d2::CustomizeConnection, Connection as _};
#[cfg(any(test, feature = "test-utils"))]
use std::env;

use errors::Error;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type Connection = PooledConnection<ConnectionManager<PgConnection>>;
pub mod models;
pub mod schema;

pub fn get_conn(pool: &PgPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err.into()
    })
}

pub fn new_pool(database_url: &str) -> Result<PgPool, Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    Pool::builder().build(manager).map_err(|err| {
        error!("Failed to create db pool - {}", err.to_string());
        err.into()
    })
}

/// Keeps every statement on the connection inside a transaction that is never
/// committed.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug)]
struct TestTransaction;

#[cfg(any(test, feature = "test-utils"))]
impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for TestTransaction {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        conn.begin_test_transaction()
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Pool for tests: a single connection living in a test transaction, so
/// handlers and the test body see the same uncommitted rows.
#[cfg(any(test, feature = "test-utils"))]
pub fn new_test_pool() -> Result<PgPool, Error> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| Error::InternalServerError("DATABASE_URL must be set".into()))?;
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    Pool::builder()
        .max_size(1)
        .connection_customizer(Box::new(TestTransaction))
        .build(manager)
        .map_err(|err| {
            error!("Failed to create test db pool - {}", err.to_string());
            err.into()
        })
}
