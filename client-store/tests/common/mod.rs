use client_store::{use_store, ClientSession, UserProfileState};


pub fn filled_profile(suffix: &str) -> UserProfileState {
    UserProfileState {
        email: Some(format!("user_{}@example.com", suffix)),
        is_validate_email: true,
        username: Some(format!("user_{}", suffix)),
        name: Some("Анна".to_string()),
        phone: Some("+7 900 000-00-00".to_string()),
        birthdate: Some("1994-03-12".to_string()),
        weight: Some(61.5),
        height: Some(168.0),
        password: None,
    }
}


pub fn session_with_profile(suffix: &str) -> ClientSession {
    let session = ClientSession::new();
    use_store(&session).replace(filled_profile(suffix));
    session
}
