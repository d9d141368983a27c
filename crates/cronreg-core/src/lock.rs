//! Mutation lock serializing structural operations against the engine.
//!
//! Every register / delete call holds a [`MutationGuard`] for its whole
//! duration, including read-only existence checks. Guards release on drop,
//! so every exit path unlocks. The lock is not re-entrant: taking it again
//! from the same thread while a guard is alive deadlocks.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::lock_api::ArcMutexGuard;
use parking_lot::{Mutex, RawMutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use cronreg_config::LockStrategy;

/// The shared mutation lock.
///
/// With [`LockStrategy::Global`] every guard is exclusive. With
/// [`LockStrategy::PerGroup`] guards for different groups run concurrently,
/// while [`MutationLock::lock_all`] still excludes everything.
pub struct MutationLock {
    strategy: LockStrategy,
    epoch: RwLock<()>,
    groups: DashMap<String, Arc<Mutex<()>>>,
}

/// Proof that the mutation lock is held.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct MutationGuard<'a> {
    _inner: GuardInner<'a>,
}

enum GuardInner<'a> {
    Exclusive(RwLockWriteGuard<'a, ()>),
    Group(GroupGuard<'a>),
}

/// Holds one group mutex under the shared epoch lock. On drop the mutex is
/// released first, then its map entry is evicted if nobody else holds it,
/// then the epoch lock is released.
struct GroupGuard<'a> {
    groups: &'a DashMap<String, Arc<Mutex<()>>>,
    group: String,
    held: Option<ArcMutexGuard<RawMutex, ()>>,
    _epoch: RwLockReadGuard<'a, ()>,
}

impl Drop for GroupGuard<'_> {
    fn drop(&mut self) {
        self.held.take();
        // Clones are only handed out under the shard lock held here, so a
        // count of one means no thread is waiting on this mutex.
        self.groups.remove_if(&self.group, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}

impl MutationLock {
    pub fn new(strategy: LockStrategy) -> Self {
        Self {
            strategy,
            epoch: RwLock::new(()),
            groups: DashMap::new(),
        }
    }

    pub fn strategy(&self) -> LockStrategy {
        self.strategy
    }

    /// Lock for an operation touching a single group.
    pub fn lock_group(&self, group: &str) -> MutationGuard<'_> {
        let inner = match self.strategy {
            LockStrategy::Global => GuardInner::Exclusive(self.epoch.write()),
            LockStrategy::PerGroup => {
                let epoch = self.epoch.read();
                let mutex = self.groups.entry(group.to_string()).or_default().clone();
                GuardInner::Group(GroupGuard {
                    groups: &self.groups,
                    group: group.to_string(),
                    held: Some(mutex.lock_arc()),
                    _epoch: epoch,
                })
            }
        };
        MutationGuard { _inner: inner }
    }

    /// Lock for an operation that may touch any group.
    pub fn lock_all(&self) -> MutationGuard<'_> {
        MutationGuard {
            _inner: GuardInner::Exclusive(self.epoch.write()),
        }
    }
}

impl Default for MutationLock {
    fn default() -> Self {
        Self::new(LockStrategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;
    use std::time::Duration;

    fn max_concurrency(lock: &MutationLock, groups: &[&str]) -> usize {
        let active = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        let barrier = Barrier::new(groups.len());

        thread::scope(|s| {
            for &group in groups {
                let (active, peak, barrier) = (&active, &peak, &barrier);
                s.spawn(move || {
                    barrier.wait();
                    let _guard = lock.lock_group(group);
                    let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    thread::sleep(Duration::from_millis(20));
                    active.fetch_sub(1, Ordering::SeqCst);
                });
            }
        });

        peak.load(Ordering::SeqCst)
    }

    #[test]
    fn test_global_is_exclusive() {
        let lock = MutationLock::new(LockStrategy::Global);
        assert_eq!(max_concurrency(&lock, &["g1", "g2", "g3", "g4"]), 1);
    }

    #[test]
    fn test_per_group_serializes_same_group() {
        let lock = MutationLock::new(LockStrategy::PerGroup);
        assert_eq!(max_concurrency(&lock, &["g1", "g1", "g1"]), 1);
    }

    #[test]
    fn test_per_group_allows_distinct_groups() {
        let lock = MutationLock::new(LockStrategy::PerGroup);
        assert!(max_concurrency(&lock, &["g1", "g2", "g3", "g4"]) > 1);
    }

    #[test]
    fn test_lock_all_excludes_group_guards() {
        let lock = MutationLock::new(LockStrategy::PerGroup);
        let guard = lock.lock_all();
        assert!(lock.epoch.try_read().is_none());
        drop(guard);
        let _group = lock.lock_group("g1");
        assert!(lock.epoch.try_write().is_none());
    }

    #[test]
    fn test_group_entries_evicted_after_release() {
        let lock = MutationLock::new(LockStrategy::PerGroup);
        for id in 0..10_000 {
            let _guard = lock.lock_group(&format!("jobgroup_{id}"));
            assert_eq!(lock.groups.len(), 1);
        }
        assert_eq!(lock.groups.len(), 0);
    }

    #[test]
    fn test_group_entries_evicted_after_contention() {
        let lock = MutationLock::new(LockStrategy::PerGroup);
        assert!(max_concurrency(&lock, &["g1", "g1", "g2", "g2", "g3"]) > 1);
        assert_eq!(lock.groups.len(), 0);
    }

    #[test]
    fn test_guard_released_on_unwind() {
        let lock = MutationLock::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = lock.lock_group("g1");
            panic!("engine blew up");
        }));
        assert!(result.is_err());
        assert!(lock.epoch.try_write().is_some());
    }
}
