//! Core object pool implementation

use crate::config::{LoadMode, PoolConfig};
use crate::errors::{FactoryError, PoolError, PoolResult};

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

/// A loaned object that automatically returns to its pool when dropped
pub struct PooledObject<'pool, T: Send> {
    value: Option<T>,
    pool: &'pool ObjectPool<T>,
}

impl<'pool, T: Send> PooledObject<'pool, T> {
    fn new(value: T, pool: &'pool ObjectPool<T>) -> Self {
        Self {
            value: Some(value),
            pool,
        }
    }

    /// Take the inner value without returning it to the pool.
    ///
    /// The pool keeps counting the item as on loan, so the slot it occupied
    /// is gone for good. A detached item can still be handed back later with
    /// [`ObjectPool::release`].
    pub fn detach(mut self) -> T {
        self.value.take().expect("value already taken")
    }
}

impl<T: Send> Deref for PooledObject<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value.as_ref().expect("value already taken")
    }
}

impl<T: Send> DerefMut for PooledObject<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value.as_mut().expect("value already taken")
    }
}

impl<T: Send> Drop for PooledObject<'_, T> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.pool.release(value);
        }
    }
}

/// Queue of available items plus the population counter, guarded as one unit
/// so growth can check and increment the counter atomically.
struct PoolState<T> {
    items: VecDeque<T>,
    current_size: usize,
}

/// Bounded, thread-safe object pool with eager and lazy population.
///
/// An eager pool is filled to `max_size` at construction and never grows. A
/// lazy pool starts at `min_size` and constructs new items on demand until it
/// reaches `max_size`. Items are borrowed with [`acquire`](Self::acquire) or
/// [`acquire_timeout`](Self::acquire_timeout) and go back to the pool when
/// the returned [`PooledObject`] is dropped.
pub struct ObjectPool<T: Send> {
    state: Mutex<PoolState<T>>,
    item_returned: Condvar,
    factory: Box<dyn Fn() -> Result<T, FactoryError> + Send + Sync>,
    config: PoolConfig,
}

impl<T: Send> ObjectPool<T> {
    /// Create a pool populated to `max_size` up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use lendpool::ObjectPool;
    ///
    /// let pool = ObjectPool::create_eager(2, || Ok(String::from("worker"))).unwrap();
    /// assert_eq!(pool.available_count(), 2);
    ///
    /// {
    ///     let item = pool.acquire().unwrap();
    ///     assert_eq!(&*item, "worker");
    ///     // returned to the pool when `item` goes out of scope
    /// }
    ///
    /// assert_eq!(pool.available_count(), 2);
    /// ```
    pub fn create_eager<F>(max_size: usize, factory: F) -> PoolResult<Self>
    where
        F: Fn() -> Result<T, FactoryError> + Send + Sync + 'static,
    {
        Self::with_config(PoolConfig::eager(max_size), factory)
    }

    /// Create a pool populated to `min_size`, growing on demand up to `max_size`.
    ///
    /// Fails with [`PoolError::InvalidSize`] when `min_size > max_size`.
    pub fn create_lazy<F>(min_size: usize, max_size: usize, factory: F) -> PoolResult<Self>
    where
        F: Fn() -> Result<T, FactoryError> + Send + Sync + 'static,
    {
        Self::with_config(PoolConfig::lazy(min_size, max_size), factory)
    }

    /// Create a pool from an explicit [`PoolConfig`].
    ///
    /// The factory is invoked once per pre-populated item; a factory error
    /// aborts creation and no pool is returned.
    pub fn with_config<F>(config: PoolConfig, factory: F) -> PoolResult<Self>
    where
        F: Fn() -> Result<T, FactoryError> + Send + Sync + 'static,
    {
        config.validate()?;

        let mut items = VecDeque::with_capacity(config.max_size);
        for _ in 0..config.initial_size() {
            items.push_back(factory().map_err(PoolError::Construction)?);
        }
        let current_size = items.len();

        Ok(Self {
            state: Mutex::new(PoolState {
                items,
                current_size,
            }),
            item_returned: Condvar::new(),
            factory: Box::new(factory),
            config,
        })
    }

    /// Borrow an item from the pool without waiting.
    ///
    /// Fails with [`PoolError::Exhausted`] when no item is available and the
    /// pool cannot grow.
    pub fn acquire(&self) -> PoolResult<PooledObject<'_, T>> {
        self.acquire_timeout(Duration::ZERO)
    }

    /// Borrow an item from the pool, waiting up to `timeout` for one to be
    /// released.
    ///
    /// A zero timeout behaves exactly like [`acquire`](Self::acquire). When
    /// the window expires without a release, the call fails with
    /// [`PoolError::AcquireTimeout`] carrying the elapsed wait. No fairness
    /// is promised between concurrent callers: a released item goes to
    /// whichever caller dequeues it first.
    pub fn acquire_timeout(&self, timeout: Duration) -> PoolResult<PooledObject<'_, T>> {
        let start = Instant::now();
        let mut state = self.state.lock();

        loop {
            if let Some(item) = state.items.pop_front() {
                return Ok(PooledObject::new(item, self));
            }

            // Depleted but below max: construct a replacement on the spot.
            // Holding the lock across the factory call keeps the size check
            // and the increment atomic, so concurrent growth cannot push
            // current_size past max_size. The new item goes straight to the
            // caller without ever entering the queue.
            if self.config.load_mode == LoadMode::Lazy && state.current_size < self.config.max_size
            {
                let item = (self.factory)().map_err(PoolError::Construction)?;
                state.current_size += 1;
                return Ok(PooledObject::new(item, self));
            }

            if timeout.is_zero() {
                return Err(PoolError::Exhausted);
            }
            let waited = start.elapsed();
            if waited >= timeout {
                return Err(PoolError::AcquireTimeout { waited });
            }

            // Spurious wakeups and timeouts are both handled by re-checking
            // at the top of the loop.
            let _ = self.item_returned.wait_for(&mut state, timeout - waited);
        }
    }

    /// Return an item to the pool, making it visible to waiting and future
    /// acquirers.
    ///
    /// Items borrowed through [`PooledObject`] are returned automatically on
    /// drop; calling this directly is only needed for items obtained via
    /// [`PooledObject::detach`]. No provenance check is performed: releasing
    /// an item this pool never constructed, or releasing the same item
    /// twice, is accepted and pushes `available_count` past the number of
    /// items actually on loan.
    pub fn release(&self, item: T) {
        let mut state = self.state.lock();
        state.items.push_back(item);
        drop(state);
        self.item_returned.notify_one();
    }

    /// Number of items currently available for acquisition
    pub fn available_count(&self) -> usize {
        self.state.lock().items.len()
    }

    /// Number of items currently on loan.
    ///
    /// Saturates at zero if foreign releases have pushed the queue beyond
    /// the constructed population.
    pub fn active_count(&self) -> usize {
        let state = self.state.lock();
        state.current_size.saturating_sub(state.items.len())
    }

    /// Number of items constructed so far, available or on loan
    pub fn current_size(&self) -> usize {
        self.state.lock().current_size
    }

    /// Upper bound on the number of items this pool will ever hold
    pub fn max_size(&self) -> usize {
        self.config.max_size
    }

    /// Population policy of this pool
    pub fn load_mode(&self) -> LoadMode {
        self.config.load_mode
    }
}
