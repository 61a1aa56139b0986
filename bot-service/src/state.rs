use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

/// Per-chat conversation state, loaded before every update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Name of the scene the chat is currently in, if any.
    pub scene: Option<String>,
    /// Free-form data owned by scenes.
    pub data: Map<String, Value>,
}

impl Session {
    pub fn in_scene(name: impl Into<String>) -> Self {
        Self {
            scene: Some(name.into()),
            data: Map::new(),
        }
    }
}

pub type SessionStorage = InMemStorage<Session>;
pub type SessionDialogue = Dialogue<Session, SessionStorage>;
