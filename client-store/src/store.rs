use crate::profile::UserProfileState;
use crate::session::ClientSession;
use crate::shared::Shared;

pub const BASE_STORE_KEY: &str = "base-store";

/// The session's profile record, created with empty defaults on first use.
pub fn use_store(session: &ClientSession) -> Shared<UserProfileState> {
    session.use_state(BASE_STORE_KEY, UserProfileState::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_returns_same_record() {
        let session = ClientSession::new();

        let first = use_store(&session);
        let second = use_store(&session);

        assert!(Shared::ptr_eq(&first, &second));

        first.update(|s| s.email = Some("anna@example.com".to_string()));
        assert_eq!(second.get().email.as_deref(), Some("anna@example.com"));
    }

    #[test]
    fn test_first_access_has_defaults() {
        let session = ClientSession::new();
        assert!(!session.has_state::<UserProfileState>(BASE_STORE_KEY));

        let store = use_store(&session);

        assert!(session.has_state::<UserProfileState>(BASE_STORE_KEY));
        assert_eq!(store.get(), UserProfileState::default());
        assert_eq!(store.version(), 0);
    }
}
