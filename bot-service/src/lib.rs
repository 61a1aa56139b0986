pub mod scenes;
pub mod stage;
pub mod state;
pub mod supervisor;
pub mod telegram;

pub use stage::{Scene, SceneContext, SceneOutcome, SceneRegistry, Stage};
pub use state::{Session, SessionDialogue, SessionStorage};
pub use supervisor::ErrorReporter;
pub use telegram::WebAppLinks;

use shared::ServiceError;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

/// Session first, then the stage, then command routing. The stage reads the
/// session the dialogue layer has just loaded and sees every update that
/// belongs to a chat; only messages go on to command routing.
pub fn schema() -> UpdateHandler<ServiceError> {
    dptree::entry()
        .enter_dialogue::<Update, SessionStorage, Session>()
        .branch(
            dptree::filter_map(|session: Session, stage: Arc<Stage>| stage.resolve(&session))
                .endpoint(stage::dispatch_to_scene),
        )
        .branch(Update::filter_message().endpoint(telegram::handlers::handle_message))
}
