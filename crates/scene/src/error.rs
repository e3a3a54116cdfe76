use crate::types::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("no scene object with id {0}")]
    NotFound(EntityId),
}
