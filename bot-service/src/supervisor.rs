use futures::future::BoxFuture;
use shared::errors::ServiceError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use teloxide::error_handlers::ErrorHandler;

/// Last stop for handler errors: logs and counts them, then lets the
/// dispatcher carry on with the next update. The user gets no reply.
#[derive(Default)]
pub struct ErrorReporter {
    reported: AtomicU64,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self, error: &ServiceError) {
        self.reported.fetch_add(1, Ordering::Relaxed);
        shared::record_labeled_counter("bot_handler_errors_total", "kind", error.kind());
        tracing::error!(kind = error.kind(), "Update handler failed: {}", error);
    }

    pub fn reported(&self) -> u64 {
        self.reported.load(Ordering::Relaxed)
    }
}

impl ErrorHandler<ServiceError> for ErrorReporter {
    fn handle_error(self: Arc<Self>, error: ServiceError) -> BoxFuture<'static, ()> {
        self.report(&error);
        Box::pin(async {})
    }
}
