//! crates/logger/src/sync_cell.rs
//! Mutex-backed cell granting scoped exclusive access to one value.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};

/// A value guarded by a mutual-exclusion primitive.
///
/// Each cell protects exactly one value; the guard returned by
/// [`lock`](Self::lock) is the only way to reach it, so the value can never
/// be observed in a state other than one committed under the lock. The
/// logger keeps three independent cells (minimum level, output sink, quiet
/// flag) and always acquires them in that fixed order, so extended critical
/// sections cannot introduce a circular wait.
///
/// # Examples
///
/// ```
/// use logger::SyncCell;
///
/// let cell = SyncCell::new(1u32);
/// *cell.lock() += 41;
/// assert_eq!(cell.get(), 42);
/// ```
#[derive(Debug, Default)]
pub struct SyncCell<T> {
    inner: Mutex<T>,
}

impl<T> SyncCell<T> {
    /// Wraps `value` with an unlocked exclusion primitive.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Blocks until exclusive access is obtained, then returns the guard.
    ///
    /// The guard releases the primitive when dropped, on every exit path. A
    /// poisoned primitive means another thread panicked mid-update; there is
    /// no state worth salvaging from a logger in that condition, so this
    /// panics rather than exposing the contract surface to poisoning.
    #[must_use]
    pub fn lock(&self) -> SyncCellGuard<'_, T> {
        SyncCellGuard {
            inner: self.inner.lock().expect("sync cell mutex poisoned"),
        }
    }

    /// Replaces the stored value under the lock.
    pub fn set(&self, value: T) {
        *self.lock() = value;
    }

    /// Consumes the cell and returns the wrapped value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.inner
            .into_inner()
            .expect("sync cell mutex poisoned")
    }
}

impl<T: Copy> SyncCell<T> {
    /// Reads the stored value under the lock.
    #[must_use]
    pub fn get(&self) -> T {
        *self.lock()
    }
}

/// Exclusive access to the value inside a [`SyncCell`].
///
/// Holding the guard is holding the lock; dropping it releases the primitive
/// exactly once. `Deref`/`DerefMut` expose the protected value without extra
/// ceremony at the call sites.
#[must_use = "dropping the guard immediately releases the lock"]
#[derive(Debug)]
pub struct SyncCellGuard<'a, T> {
    inner: MutexGuard<'a, T>,
}

impl<T> Deref for SyncCellGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for SyncCellGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn lock_grants_read_and_write_access() {
        let cell = SyncCell::new(String::from("a"));
        cell.lock().push('b');
        assert_eq!(*cell.lock(), "ab");
    }

    #[test]
    fn set_replaces_value() {
        let cell = SyncCell::new(3);
        cell.set(7);
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn into_inner_returns_value() {
        let cell = SyncCell::new(vec![1, 2, 3]);
        assert_eq!(cell.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn guard_release_is_scoped() {
        let cell = SyncCell::new(0);
        {
            let mut guard = cell.lock();
            *guard = 9;
        }
        // A second acquisition would deadlock if the first were still held.
        assert_eq!(cell.get(), 9);
    }

    #[test]
    fn concurrent_increments_never_lose_updates() {
        let cell = Arc::new(SyncCell::new(0u64));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let cell = Arc::clone(&cell);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    *cell.lock() += 1;
                }
            }));
        }
        for handle in handles {
            handle.join().expect("worker thread panicked");
        }
        assert_eq!(cell.get(), 8000);
    }
}
