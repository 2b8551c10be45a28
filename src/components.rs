//! Components used by the drag prompt.

use bevy::math::curve::easing::EaseFunction;
use bevy::prelude::*;

use crate::tween::TweenId;
use crate::tween::Tweens;

pub const DEFAULT_IDLE_THRESHOLD_SECS: f32 = 5.0;
pub const DEFAULT_DURATION_SECS: f32 = 1.5;
pub const DEFAULT_VERTICAL_DISTANCE: f32 = 1000.0;
pub const DEFAULT_CURVE_OFFSET: f32 = 50.0;
pub const DEFAULT_FADE_SECS: f32 = 0.3;

/// Configuration for a drag prompt.
///
/// Inserting this component initializes the prompt: the icon's current anchored position
/// becomes the start of the path, the icon is hidden, and, when `auto_prompt` is set, the
/// idle timer starts. Removing it (or despawning the entity) cancels everything in flight.
///
/// The icon must be a UI entity with a `Node`. Its position is read and written through
/// `Node::left` and `Node::bottom`, so positive `vertical_distance` moves it down the screen.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct DragPrompt {
    pub icon:                Option<Entity>,
    pub auto_prompt:         bool,
    pub idle_threshold_secs: f32,
    pub duration_secs:       f32,
    pub vertical_distance:   f32,
    pub curve_offset:        f32,
    pub easing:              EaseFunction,
    pub fade_secs:           f32,
}

impl DragPrompt {
    pub fn new(icon: Entity) -> Self {
        Self {
            icon: Some(icon),
            ..default()
        }
    }

    pub const fn with_auto_prompt(mut self, auto_prompt: bool) -> Self {
        self.auto_prompt = auto_prompt;
        self
    }

    pub const fn with_idle_threshold(mut self, secs: f32) -> Self {
        self.idle_threshold_secs = secs;
        self
    }

    pub const fn with_duration(mut self, secs: f32) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Sets the path shape: how far the icon travels down and how far the curve bends sideways.
    pub const fn with_path(mut self, vertical_distance: f32, curve_offset: f32) -> Self {
        self.vertical_distance = vertical_distance;
        self.curve_offset = curve_offset;
        self
    }

    pub const fn with_easing(mut self, easing: EaseFunction) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for DragPrompt {
    fn default() -> Self {
        Self {
            icon:                None,
            auto_prompt:         true,
            idle_threshold_secs: DEFAULT_IDLE_THRESHOLD_SECS,
            duration_secs:       DEFAULT_DURATION_SECS,
            vertical_distance:   DEFAULT_VERTICAL_DISTANCE,
            curve_offset:        DEFAULT_CURVE_OFFSET,
            easing:              EaseFunction::SineInOut,
            fade_secs:           DEFAULT_FADE_SECS,
        }
    }
}

/// Where a prompt is in its show/fade loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum PromptPhase {
    #[default]
    Idle,
    Animating,
    FadingOut,
}

impl PromptPhase {
    pub const fn is_animating(self) -> bool { matches!(self, Self::Animating | Self::FadingOut) }
}

/// Runtime state of an initialized prompt.
///
/// Each handle slot holds at most one tween; filling a slot always cancels what was there.
/// Read-only outside the crate: drive the prompt with its control events.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct PromptState {
    pub(crate) icon:          Entity,
    pub(crate) start:         Vec2,
    pub(crate) end:           Vec2,
    pub(crate) control:       Vec2,
    pub(crate) phase:         PromptPhase,
    pub(crate) enabled:       bool,
    pub(crate) pending_delay: Option<TweenId>,
    pub(crate) movement:      Option<TweenId>,
    pub(crate) fade:          Option<TweenId>,
}

impl PromptState {
    pub(crate) const fn new(
        icon: Entity,
        start: Vec2,
        control: Vec2,
        end: Vec2,
        enabled: bool,
    ) -> Self {
        Self {
            icon,
            start,
            end,
            control,
            phase: PromptPhase::Idle,
            enabled,
            pending_delay: None,
            movement: None,
            fade: None,
        }
    }

    pub const fn icon(&self) -> Entity { self.icon }

    pub const fn start(&self) -> Vec2 { self.start }

    pub const fn end(&self) -> Vec2 { self.end }

    pub const fn control(&self) -> Vec2 { self.control }

    pub const fn phase(&self) -> PromptPhase { self.phase }

    pub const fn is_enabled(&self) -> bool { self.enabled }

    pub const fn is_animating(&self) -> bool { self.phase.is_animating() }

    pub const fn pending_delay(&self) -> Option<TweenId> { self.pending_delay }

    pub const fn movement(&self) -> Option<TweenId> { self.movement }

    pub const fn fade(&self) -> Option<TweenId> { self.fade }

    /// Replaces the pending idle trigger with a fresh one.
    pub(crate) fn schedule_delay(&mut self, owner: Entity, delay_secs: f32, tweens: &mut Tweens) {
        if let Some(previous) = self.pending_delay.take() {
            tweens.cancel(previous);
        }
        self.pending_delay = Some(tweens.delayed_call(owner, delay_secs));
    }

    /// Starts a new movement, dropping any movement or fade still running.
    pub(crate) fn begin_movement(
        &mut self,
        owner: Entity,
        prompt: &DragPrompt,
        tweens: &mut Tweens,
    ) {
        self.cancel_motion(tweens);
        self.movement = Some(tweens.value(owner, prompt.duration_secs, prompt.easing));
        self.phase = PromptPhase::Animating;
    }

    pub(crate) fn begin_fade(&mut self, owner: Entity, fade_secs: f32, tweens: &mut Tweens) {
        self.cancel_motion(tweens);
        self.fade = Some(tweens.value(owner, fade_secs, EaseFunction::Linear));
        self.phase = PromptPhase::FadingOut;
    }

    /// Cancels every handle and returns to `Idle`.
    pub(crate) fn cancel_all(&mut self, tweens: &mut Tweens) {
        if let Some(delay) = self.pending_delay.take() {
            tweens.cancel(delay);
        }
        self.cancel_motion(tweens);
        self.phase = PromptPhase::Idle;
    }

    fn cancel_motion(&mut self, tweens: &mut Tweens) {
        if let Some(movement) = self.movement.take() {
            tweens.cancel(movement);
        }
        if let Some(fade) = self.fade.take() {
            tweens.cancel(fade);
        }
    }
}

/// Marks a prompt that failed to initialize. Control events sent to it are ignored.
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct PromptDisabled;

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_state(world: &mut World) -> (Entity, PromptState) {
        let owner = world.spawn_empty().id();
        let icon = world.spawn_empty().id();
        (owner, PromptState::new(icon, Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, true))
    }

    #[test]
    fn rescheduling_replaces_pending_delay() {
        let mut world = World::new();
        let (owner, mut state) = prompt_state(&mut world);
        let mut tweens = Tweens::default();

        state.schedule_delay(owner, 5.0, &mut tweens);
        let first = state.pending_delay;
        state.schedule_delay(owner, 5.0, &mut tweens);

        assert_ne!(first, state.pending_delay);
        assert_eq!(tweens.pending_for(owner), 1);
    }

    #[test]
    fn fade_replaces_movement() {
        let mut world = World::new();
        let (owner, mut state) = prompt_state(&mut world);
        let mut tweens = Tweens::default();

        state.begin_movement(owner, &DragPrompt::default(), &mut tweens);
        assert_eq!(state.phase, PromptPhase::Animating);
        state.begin_fade(owner, DEFAULT_FADE_SECS, &mut tweens);

        assert_eq!(state.phase, PromptPhase::FadingOut);
        assert!(state.movement.is_none());
        assert_eq!(tweens.pending_for(owner), 1);
    }

    #[test]
    fn cancel_all_clears_every_handle() {
        let mut world = World::new();
        let (owner, mut state) = prompt_state(&mut world);
        let mut tweens = Tweens::default();

        state.schedule_delay(owner, 5.0, &mut tweens);
        state.begin_movement(owner, &DragPrompt::default(), &mut tweens);
        state.cancel_all(&mut tweens);

        assert_eq!(state.phase, PromptPhase::Idle);
        assert!(state.pending_delay.is_none());
        assert!(state.movement.is_none());
        assert!(state.fade.is_none());
        assert!(tweens.is_empty());
    }
}
