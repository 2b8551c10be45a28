//! Control and lifecycle events for drag prompts.

use bevy::prelude::*;

// ============================================================================
// Control
// ============================================================================

/// Turns automatic prompting on or off.
///
/// Enabling (re)starts the idle timer. Disabling cancels anything pending or in flight and
/// hides the icon. Sending the same value twice is harmless.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct SetPromptEnabled {
    pub entity:  Entity,
    pub enabled: bool,
}

impl SetPromptEnabled {
    pub const fn new(entity: Entity, enabled: bool) -> Self { Self { entity, enabled } }
}

/// Stops a running prompt, typically because the user started dragging the object.
/// Does nothing when the prompt is not animating.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct RequestPromptStop {
    pub entity: Entity,
}

impl RequestPromptStop {
    pub const fn new(entity: Entity) -> Self { Self { entity } }
}

/// Starts the prompt loop right away, skipping the idle timer. Ignored while the prompt is
/// disabled.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct TriggerPrompt {
    pub entity: Entity,
}

impl TriggerPrompt {
    pub const fn new(entity: Entity) -> Self { Self { entity } }
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Fired each time the icon appears at the start of its path.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct PromptCycleBegin {
    #[event_target]
    pub prompt_entity: Entity,
    pub icon:          Entity,
}

/// Fired each time the icon finishes fading out.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct PromptCycleEnd {
    #[event_target]
    pub prompt_entity: Entity,
}

/// Fired when a running prompt is stopped and its icon hidden.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct PromptHidden {
    #[event_target]
    pub prompt_entity: Entity,
}
