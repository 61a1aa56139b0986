use serde::{Deserialize, Serialize};

/// Profile fields the mini-app collects while the user fills in the forms.
///
/// Nothing here is validated: `is_validate_email` is flipped by whoever
/// confirms the address, not computed from `email`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileState {
    pub email: Option<String>,
    #[serde(default)]
    pub is_validate_email: bool,
    pub username: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub birthdate: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    // Declared but never produced by the initializer; omitted from JSON while unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserProfileState {
    pub fn new() -> Self {
        Self::default()
    }
}
