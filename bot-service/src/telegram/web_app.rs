use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Builds mini-app links with a `t=<millis>` cache buster.
///
/// Timestamps never go backwards within one process, even if the wall clock
/// does, so a later `/start` never hands out an older link than an earlier one.
pub struct WebAppLinks {
    base_url: String,
    last_millis: AtomicI64,
}

impl WebAppLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            last_millis: AtomicI64::new(0),
        }
    }

    pub fn next_url(&self) -> String {
        let now = Utc::now().timestamp_millis();
        self.url_at(now)
    }

    fn url_at(&self, now_millis: i64) -> String {
        let previous = self.last_millis.fetch_max(now_millis, Ordering::SeqCst);
        format!("{}?t={}", self.base_url, previous.max(now_millis))
    }
}
