use bevy::prelude::*;
use thiserror::Error;

/// Reasons a `DragPrompt` can fail to initialize.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PromptError {
    #[error("drag prompt {prompt} has no icon assigned")]
    MissingIcon { prompt: Entity },
    #[error("drag prompt {prompt} icon {icon} is not a UI node")]
    IconNotUi { prompt: Entity, icon: Entity },
}
