use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::watch;

/// Handle to a value owned by a [`ClientSession`](crate::ClientSession).
///
/// Clones point at the same value. Every write bumps a version counter that
/// subscribers can await.
pub struct Shared<T> {
    inner: Arc<SharedInner<T>>,
}

struct SharedInner<T> {
    value: RwLock<T>,
    version: watch::Sender<u64>,
}

impl<T> Shared<T> {
    pub(crate) fn new(value: T) -> Self {
        let (version, _) = watch::channel(0);
        Self {
            inner: Arc::new(SharedInner {
                value: RwLock::new(value),
                version,
            }),
        }
    }

    /// Runs `f` against the current value without copying it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.value.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Mutates the value in place and notifies subscribers.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut guard = self.inner.value.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut guard)
        };
        self.inner.version.send_modify(|v| *v += 1);
        result
    }

    /// Swaps in a whole new value, returning the old one.
    pub fn replace(&self, value: T) -> T {
        self.update(|current| std::mem::replace(current, value))
    }

    /// Receiver that changes on every write made through any handle.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.version.subscribe()
    }

    pub fn version(&self) -> u64 {
        *self.inner.version.borrow()
    }

    /// True when both handles refer to the same underlying value.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl<T: Clone> Shared<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|value| {
            f.debug_struct("Shared")
                .field("value", value)
                .field("version", &self.version())
                .finish()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let a = Shared::new(1u32);
        let b = a.clone();

        a.update(|v| *v = 7);

        assert!(Shared::ptr_eq(&a, &b));
        assert_eq!(b.get(), 7);
    }

    #[test]
    fn test_replace_returns_previous() {
        let shared = Shared::new(String::from("old"));
        let previous = shared.replace(String::from("new"));

        assert_eq!(previous, "old");
        assert_eq!(shared.get(), "new");
        assert_eq!(shared.version(), 1);
    }

    #[test]
    fn test_distinct_values_not_ptr_eq() {
        let a = Shared::new(0u8);
        let b = Shared::new(0u8);
        assert!(!Shared::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn test_subscriber_sees_update() {
        let shared = Shared::new(0i32);
        let mut rx = shared.subscribe();

        let writer = shared.clone();
        tokio::spawn(async move {
            writer.update(|v| *v += 5);
        });

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 1);
        assert_eq!(shared.get(), 5);
    }
}
