//! Per-entity write gates.
//!
//! Mutations of the same scheduled workout must run one at a time so the
//! second of two racing transitions observes the first one's result. Each
//! id gets its own async mutex; different ids never contend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::OwnedMutexGuard;
use uuid::Uuid;

/// Registry of async mutexes keyed by entity id.
///
/// Gates are created on first use and dropped once no caller holds or waits
/// on them, so the registry stays proportional to in-flight writes.
#[derive(Debug, Default)]
pub struct EntityLocks {
    gates: Mutex<HashMap<Uuid, Arc<tokio::sync::Mutex<()>>>>,
}

impl EntityLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `id`.
    ///
    /// The returned guard releases the gate when dropped.
    pub async fn acquire(&self, id: Uuid) -> OwnedMutexGuard<()> {
        let gate = {
            let mut gates = self.gates.lock().unwrap_or_else(PoisonError::into_inner);
            gates.retain(|_, gate| Arc::strong_count(gate) > 1);
            Arc::clone(gates.entry(id).or_default())
        };
        gate.lock_owned().await
    }

    /// Number of gates currently registered.
    pub fn len(&self) -> usize {
        self.gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
