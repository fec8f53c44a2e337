use anyhow::{Context, Result};
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool},
};

pub type PgPoolSquad = Pool<ConnectionManager<PgConnection>>;

/// Builds the pool and waits for its first connections, so an unreachable
/// database fails startup instead of the first request.
pub fn establish_connection(database_url: &str) -> Result<PgPoolSquad> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .build(manager)
        .context("failed to build postgres connection pool")?;
    Ok(pool)
}
