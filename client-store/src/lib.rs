//! Session-scoped profile store for the marathons mini-app.

pub mod profile;
pub mod session;
pub mod shared;
pub mod store;

pub use profile::UserProfileState;
pub use session::ClientSession;
pub use shared::Shared;
pub use store::{use_store, BASE_STORE_KEY};
