use crate::state::{Session, SessionDialogue};
use crate::telegram::{handlers, WebAppLinks};
use futures::future::BoxFuture;
use shared::errors::{Result, ServiceError};
use std::collections::BTreeMap;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{Me, Update, UpdateKind};

/// What a scene did with the update it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneOutcome {
    Handled,
    /// Let command routing see the update as if no scene were active.
    Pass,
}

/// Everything a scene gets for one update: any update from the chat, not
/// just text messages, so scenes also see their own button presses.
pub struct SceneContext {
    pub bot: Bot,
    pub update: Update,
    pub dialogue: SessionDialogue,
    pub session: Session,
}

impl SceneContext {
    /// Switches the chat into another scene, starting it with a clean data blob.
    pub async fn enter(&self, name: &str) -> Result<()> {
        self.dialogue
            .update(Session::in_scene(name))
            .await
            .map_err(|e| ServiceError::Session(format!("Failed to enter scene {}: {}", name, e)))
    }

    pub async fn leave(&self) -> Result<()> {
        self.dialogue
            .exit()
            .await
            .map_err(|e| ServiceError::Session(format!("Failed to leave scene: {}", e)))
    }

    /// Persists `session` as the chat's new state.
    pub async fn save(&self, session: Session) -> Result<()> {
        self.dialogue
            .update(session)
            .await
            .map_err(|e| ServiceError::Session(format!("Failed to save session: {}", e)))
    }
}

pub trait Scene: Send + Sync {
    fn handle(&self, ctx: SceneContext) -> BoxFuture<'static, Result<SceneOutcome>>;
}

#[derive(Clone, Default)]
pub struct SceneRegistry {
    scenes: BTreeMap<String, Arc<dyn Scene>>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, name: impl Into<String>, scene: impl Scene + 'static) -> Self {
        let name = name.into();
        if self.scenes.insert(name.clone(), Arc::new(scene)).is_some() {
            tracing::warn!("Scene {} registered twice, keeping the latest", name);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Scene>> {
        self.scenes.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

#[derive(Clone)]
pub struct ActiveScene {
    pub name: String,
    pub scene: Arc<dyn Scene>,
}

pub struct Stage {
    registry: SceneRegistry,
}

impl Stage {
    pub fn new(registry: SceneRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// Looks up the scene the session points at. Unknown names count as no scene.
    pub fn resolve(&self, session: &Session) -> Option<ActiveScene> {
        let name = session.scene.as_deref()?;
        match self.registry.get(name) {
            Some(scene) => Some(ActiveScene {
                name: name.to_string(),
                scene,
            }),
            None => {
                tracing::warn!("Session points at unknown scene {}, ignoring", name);
                None
            }
        }
    }
}

pub async fn dispatch_to_scene(
    bot: Bot,
    update: Update,
    dialogue: SessionDialogue,
    session: Session,
    active: ActiveScene,
    me: Me,
    links: Arc<WebAppLinks>,
) -> Result<()> {
    tracing::debug!(
        chat_id = update.chat().map(|c| c.id.0),
        scene = %active.name,
        "Dispatching update into scene"
    );

    let ctx = SceneContext {
        bot: bot.clone(),
        update: update.clone(),
        dialogue,
        session,
    };

    match active.scene.handle(ctx).await {
        Ok(SceneOutcome::Handled) => Ok(()),
        // Only messages carry commands; anything else passed on is dropped.
        Ok(SceneOutcome::Pass) => match update.kind {
            UpdateKind::Message(msg) => handlers::handle_message(bot, msg, me, links).await,
            _ => Ok(()),
        },
        Err(e) => Err(ServiceError::Scene(format!("{}: {}", active.name, e))),
    }
}
