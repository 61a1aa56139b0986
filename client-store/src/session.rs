use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use uuid::Uuid;

use crate::shared::Shared;

type Slot = Box<dyn Any + Send + Sync>;
type Cell<T> = Arc<OnceLock<Shared<T>>>;

/// State scope of one client session (one browser tab of the mini-app).
///
/// Values are created lazily on first access and live until the session is
/// dropped. Two sessions never see each other's values.
pub struct ClientSession {
    id: Uuid,
    slots: Mutex<HashMap<(&'static str, TypeId), Slot>>,
}

impl ClientSession {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session_id = %id, "Client session opened");
        Self {
            id,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the value stored under `key`, running `init` only if this is
    /// the first access in the session.
    ///
    /// The slot map lock only guards creation of the per-key cell; `init`
    /// runs outside it, so an initializer may read other keys of the same
    /// session. Concurrent callers still get the same value and `init` runs
    /// at most once per key and type.
    pub fn use_state<T, F>(&self, key: &'static str, init: F) -> Shared<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let cell = self.cell::<T>(key);
        cell.get_or_init(|| {
            tracing::debug!(session_id = %self.id, key, "Initializing session state");
            Shared::new(init())
        })
        .clone()
    }

    /// Whether `key` has been initialized for type `T` in this session.
    pub fn has_state<T: Send + Sync + 'static>(&self, key: &'static str) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(key, TypeId::of::<T>()))
            .and_then(|slot| slot.downcast_ref::<Cell<T>>())
            .is_some_and(|cell| cell.get().is_some())
    }

    fn cell<T: Send + Sync + 'static>(&self, key: &'static str) -> Cell<T> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let slot_key = (key, TypeId::of::<T>());

        if let Some(existing) = slots.get(&slot_key).and_then(|s| s.downcast_ref::<Cell<T>>()) {
            return Arc::clone(existing);
        }

        let cell: Cell<T> = Arc::new(OnceLock::new());
        slots.insert(slot_key, Box::new(Arc::clone(&cell)));
        cell
    }
}

impl Default for ClientSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ClientSession {
    fn drop(&mut self) {
        tracing::debug!(session_id = %self.id, "Client session closed");
    }
}
