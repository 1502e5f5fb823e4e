//! # lendpool
//!
//! Bounded, thread-safe object pool with eager and lazy population.
//!
//! ## Features
//!
//! - Fixed upper bound on the number of live objects
//! - Eager pools: fully populated at construction, never grow
//! - Lazy pools: populated to a minimum size, grown on demand up to the bound
//! - Blocking acquisition with a caller-chosen timeout
//! - Automatic return of objects via RAII (Drop trait)
//! - Caller-supplied fallible factory; construction failures propagate
//!
//! ## Quick Start
//!
//! ```rust
//! use lendpool::ObjectPool;
//!
//! let pool = ObjectPool::create_eager(3, || Ok(vec![0u8; 1024])).unwrap();
//! {
//!     let buffer = pool.acquire().unwrap();
//!     println!("Borrowed a buffer of {} bytes", buffer.len());
//!     // Returned to the pool when `buffer` goes out of scope
//! }
//! assert_eq!(pool.available_count(), 3);
//! ```

mod pool;
mod config;
mod errors;

pub use pool::{ObjectPool, PooledObject};
pub use config::{LoadMode, PoolConfig};
pub use errors::{FactoryError, PoolError, PoolResult};
