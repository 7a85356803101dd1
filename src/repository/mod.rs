use thiserror::Error;

use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::query::Predicate;
use crate::domain::record::{EnergyRecord, NewEnergyRecord};

pub mod energy_record;

/// Errors raised by store adapters.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be obtained from the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The store rejected or failed to run the query.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored row violated a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over the energy collections.
pub trait EnergyRecordReader {
    /// Return the first record of `category` satisfying `predicate`, or
    /// `None` when nothing matches.
    fn find_first_record(
        &self,
        category: Category,
        predicate: &Predicate,
    ) -> RepositoryResult<Option<EnergyRecord>>;
}

/// Write operations over the energy collections.
pub trait EnergyRecordWriter {
    /// Persist a new record into the collection of `category`.
    fn create_record(&self, category: Category, record: &NewEnergyRecord)
    -> RepositoryResult<usize>;
}
