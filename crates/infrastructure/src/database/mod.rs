use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use domain::DomainError;
use tracing::info;

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database and make sure the schema exists.
    ///
    /// Every connection to `:memory:` is its own database, so that path
    /// always gets a single connection that is never recycled.
    pub fn new(database_path: &str, pool_size: u32) -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let builder = SqlitePool::builder().connection_customizer(Box::new(ConnectionOptions));

        let builder = if database_path == IN_MEMORY {
            builder.max_size(1).idle_timeout(None).max_lifetime(None)
        } else {
            builder.max_size(pool_size.max(1))
        };

        let pool = builder.build(manager).map_err(DomainError::persistence)?;
        let database = Database { pool };
        database.run_migrations()?;

        info!(path = database_path, "customer database ready");
        Ok(database)
    }

    pub fn in_memory() -> Result<Self, DomainError> {
        Self::new(IN_MEMORY, 1)
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn run_migrations(&self) -> Result<(), DomainError> {
        let mut conn = self.pool.get().map_err(DomainError::persistence)?;
        conn.batch_execute(CREATE_CUSTOMERS_TABLE)
            .map_err(DomainError::persistence)
    }
}
