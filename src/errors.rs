//! Error types for the object pool

use std::time::Duration;
use thiserror::Error;

/// Boxed error produced by a failing object factory.
pub type FactoryError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("minimum size {min_size} exceeds maximum size {max_size}")]
    InvalidSize { min_size: usize, max_size: usize },

    #[error("pool is exhausted - no objects available and the pool cannot grow")]
    Exhausted,

    #[error("no object became available after waiting {waited:?}")]
    AcquireTimeout { waited: Duration },

    #[error("object construction failed")]
    Construction(#[source] FactoryError),
}

pub type PoolResult<T> = Result<T, PoolError>;
