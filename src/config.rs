//! Pool sizing configuration

use crate::errors::{PoolError, PoolResult};

/// Population policy for a pool
///
/// # Examples
///
/// ```
/// use lendpool::{LoadMode, PoolConfig};
///
/// let config = PoolConfig::eager(8);
/// assert_eq!(config.load_mode, LoadMode::Eager);
/// assert_eq!(config.max_size, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Populate to `max_size` at construction; the pool never grows
    Eager,

    /// Populate to `min_size` at construction; grow on demand up to `max_size`
    Lazy,
}

/// Sizing parameters for an object pool
///
/// # Examples
///
/// ```
/// use lendpool::PoolConfig;
///
/// let config = PoolConfig::lazy(2, 10);
/// assert_eq!(config.min_size, 2);
/// assert_eq!(config.max_size, 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    /// Population policy
    pub load_mode: LoadMode,

    /// Number of objects constructed up front for lazy pools.
    /// Eager pools behave as if `min_size == max_size`.
    pub min_size: usize,

    /// Maximum number of objects that may exist simultaneously
    pub max_size: usize,
}

impl PoolConfig {
    /// Configuration for an eager pool, fully populated at construction
    pub fn eager(max_size: usize) -> Self {
        Self {
            load_mode: LoadMode::Eager,
            min_size: max_size,
            max_size,
        }
    }

    /// Configuration for a lazy pool, populated to `min_size` and grown on demand
    pub fn lazy(min_size: usize, max_size: usize) -> Self {
        Self {
            load_mode: LoadMode::Lazy,
            min_size,
            max_size,
        }
    }

    /// Number of objects constructed at pool creation
    pub(crate) fn initial_size(&self) -> usize {
        match self.load_mode {
            LoadMode::Eager => self.max_size,
            LoadMode::Lazy => self.min_size,
        }
    }

    pub(crate) fn validate(&self) -> PoolResult<()> {
        if self.min_size > self.max_size {
            return Err(PoolError::InvalidSize {
                min_size: self.min_size,
                max_size: self.max_size,
            });
        }
        Ok(())
    }
}
