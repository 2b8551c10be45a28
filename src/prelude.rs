//! Convenient re-exports for common types and traits

pub use crate::DragPromptPlugin;
pub use crate::components::DragPrompt;
pub use crate::components::PromptPhase;
pub use crate::components::PromptState;
pub use crate::events::PromptCycleBegin;
pub use crate::events::PromptCycleEnd;
pub use crate::events::PromptHidden;
pub use crate::events::RequestPromptStop;
pub use crate::events::SetPromptEnabled;
pub use crate::events::TriggerPrompt;
pub use crate::tween::Tweens;
