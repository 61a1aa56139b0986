use crate::stage::SceneRegistry;

/// Dialog scenes available to the stage.
///
/// The marathon questionnaires are registered here by the modules that own
/// them; the launcher itself ships none.
pub fn registry() -> SceneRegistry {
    SceneRegistry::new()
}
