//! Per-engineer serialization of capacity-affecting writes.
//!
//! A create or update holds its engineer's mutex across load, validate and commit, so
//! two requests for the same engineer can never both validate against the same
//! pre-write state. Requests for different engineers take different mutexes and run
//! in parallel.
//!
//! An entry lives only while some request holds or waits on it. The last guard to
//! drop removes it, so ids that never match an engineer leave nothing behind.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, MutexGuard as StdMutexGuard, PoisonError};

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

type LockMap = HashMap<Uuid, Arc<Mutex<()>>>;

#[derive(Clone, Default)]
pub struct EngineerLocks {
    // Never held across an await
    locks: Arc<StdMutex<LockMap>>,
}

impl EngineerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `engineer_id`. Released when the guard drops.
    pub async fn lock(&self, engineer_id: Uuid) -> EngineerGuard {
        let mutex = {
            let mut locks = self.map();
            locks
                .entry(engineer_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        EngineerGuard {
            guard: Some(mutex.lock_owned().await),
            engineer_id,
            locks: self.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    fn map(&self) -> StdMutexGuard<'_, LockMap> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn release(&self, engineer_id: Uuid) {
        let mut locks = self.map();
        // Clones are only handed out under the map lock, so a count of one means idle
        if locks
            .get(&engineer_id)
            .is_some_and(|mutex| Arc::strong_count(mutex) == 1)
        {
            locks.remove(&engineer_id);
        }
    }
}

/// Exclusive access to one engineer's bookings.
pub struct EngineerGuard {
    guard: Option<OwnedMutexGuard<()>>,
    engineer_id: Uuid,
    locks: EngineerLocks,
}

impl Drop for EngineerGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks.release(self.engineer_id);
    }
}
