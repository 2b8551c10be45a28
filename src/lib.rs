// bevy_drag_prompt
// Idle hint for draggable UI elements:
// - Hand icon slides along a curved path after an idle period
// - Fades out and loops until stopped or disabled
// - Frame-driven tween scheduler with cancellable handles

use bevy::prelude::*;

mod components;
mod curve;
mod error;
mod events;
mod observers;
pub mod prelude;
mod support;
mod tween;

// Public API - Components
pub use components::DragPrompt;
pub use components::PromptDisabled;
pub use components::PromptPhase;
pub use components::PromptState;

// Public API - Default configuration values
pub use components::DEFAULT_CURVE_OFFSET;
pub use components::DEFAULT_DURATION_SECS;
pub use components::DEFAULT_FADE_SECS;
pub use components::DEFAULT_IDLE_THRESHOLD_SECS;
pub use components::DEFAULT_VERTICAL_DISTANCE;

// Public API - Events
pub use events::PromptCycleBegin;
pub use events::PromptCycleEnd;
pub use events::PromptHidden;
pub use events::RequestPromptStop;
pub use events::SetPromptEnabled;
pub use events::TriggerPrompt;

// Public API - Errors
pub use error::PromptError;

// Public API - Path math
pub use curve::prompt_path;
pub use curve::quadratic_bezier;

// Public API - Scheduler
pub use tween::DelayElapsed;
pub use tween::TweenComplete;
pub use tween::TweenId;
pub use tween::TweenReport;
pub use tween::TweenStep;
pub use tween::Tweens;

// Internal - used by plugin, not for external use
use observers::on_delay_elapsed;
use observers::on_prompt_inserted;
use observers::on_prompt_removed;
use observers::on_request_prompt_stop;
use observers::on_set_prompt_enabled;
use observers::on_trigger_prompt;
use observers::on_tween_complete;
use observers::on_tween_step;
use tween::advance_tweens;

/// Plugin that adds drag prompt functionality
pub struct DragPromptPlugin;

impl Plugin for DragPromptPlugin {
    fn build(&self, app: &mut App) {
        app
            // Register observers for component lifecycle events
            .add_observer(on_prompt_inserted)
            .add_observer(on_prompt_removed)
            // Register observers for control events
            .add_observer(on_set_prompt_enabled)
            .add_observer(on_request_prompt_stop)
            .add_observer(on_trigger_prompt)
            // Register observers for scheduler reports
            .add_observer(on_delay_elapsed)
            .add_observer(on_tween_step)
            .add_observer(on_tween_complete)
            .add_systems(Update, advance_tweens)
            .init_resource::<Tweens>();
    }
}
