//! Frame-driven tween scheduler.
//! Delayed one-shot triggers and eased 0..1 value tweens, addressed by handle and owned by an
//! entity. Progress is reported back to the owner as entity events.

use bevy::math::curve::Curve;
use bevy::math::curve::easing::EaseFunction;
use bevy::prelude::*;

/// Handle to a scheduled tween. Handles are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub struct TweenId(u64);

#[derive(Clone, Copy, Debug)]
enum TweenKind {
    Delay,
    Value { easing: EaseFunction },
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    id:            TweenId,
    owner:         Entity,
    kind:          TweenKind,
    duration_secs: f32,
    elapsed_secs:  f32,
}

impl Tween {
    fn progress(&self) -> f32 {
        if self.duration_secs <= 0.0 {
            1.0
        } else {
            (self.elapsed_secs / self.duration_secs).min(1.0)
        }
    }
}

/// What a single tween did during a `Tweens::tick`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenReport {
    /// A value tween advanced. `value` is eased; the final step is exactly `1.0`.
    Step { owner: Entity, id: TweenId, value: f32 },
    /// A value tween reached the end of its duration.
    Complete { owner: Entity, id: TweenId },
    /// A delayed trigger fired.
    Elapsed { owner: Entity, id: TweenId },
}

/// Scheduler for every running tween.
///
/// Tweens are advanced once per frame by `advance_tweens`. A cancelled tween is dropped
/// immediately and never reports again.
#[derive(Resource, Default, Debug)]
pub struct Tweens {
    next_id: u64,
    active:  Vec<Tween>,
}

impl Tweens {
    /// Schedules a one-shot trigger for `owner` after `delay_secs`.
    pub fn delayed_call(&mut self, owner: Entity, delay_secs: f32) -> TweenId {
        self.push(owner, TweenKind::Delay, delay_secs)
    }

    /// Schedules a value tween from 0.0 to 1.0 over `duration_secs`, shaped by `easing`.
    pub fn value(&mut self, owner: Entity, duration_secs: f32, easing: EaseFunction) -> TweenId {
        self.push(owner, TweenKind::Value { easing }, duration_secs)
    }

    /// Cancels a tween. Returns `false` if it had already finished or been cancelled.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        let before = self.active.len();
        self.active.retain(|tween| tween.id != id);
        self.active.len() != before
    }

    /// Cancels every tween owned by `owner`, returning how many were dropped.
    pub fn cancel_owner(&mut self, owner: Entity) -> usize {
        let before = self.active.len();
        self.active.retain(|tween| tween.owner != owner);
        before - self.active.len()
    }

    pub fn contains(&self, id: TweenId) -> bool { self.active.iter().any(|tween| tween.id == id) }

    /// Number of tweens currently scheduled for `owner`.
    pub fn pending_for(&self, owner: Entity) -> usize {
        self.active
            .iter()
            .filter(|tween| tween.owner == owner)
            .count()
    }

    pub fn len(&self) -> usize { self.active.len() }

    pub fn is_empty(&self) -> bool { self.active.is_empty() }

    /// Advances every tween by `delta_secs` and removes the ones that finished.
    pub fn tick(&mut self, delta_secs: f32) -> Vec<TweenReport> {
        let mut reports = Vec::with_capacity(self.active.len());

        self.active.retain_mut(|tween| {
            tween.elapsed_secs += delta_secs;
            let progress = tween.progress();
            let finished = progress >= 1.0;

            match tween.kind {
                TweenKind::Value { easing } => {
                    // Snap the last step so observers land exactly on the end value
                    let value = if finished {
                        1.0
                    } else {
                        easing.sample_unchecked(progress)
                    };
                    reports.push(TweenReport::Step {
                        owner: tween.owner,
                        id: tween.id,
                        value,
                    });
                    if finished {
                        reports.push(TweenReport::Complete {
                            owner: tween.owner,
                            id:    tween.id,
                        });
                    }
                },
                TweenKind::Delay => {
                    if finished {
                        reports.push(TweenReport::Elapsed {
                            owner: tween.owner,
                            id:    tween.id,
                        });
                    }
                },
            }

            !finished
        });

        reports
    }

    fn push(&mut self, owner: Entity, kind: TweenKind, duration_secs: f32) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.active.push(Tween {
            id,
            owner,
            kind,
            duration_secs,
            elapsed_secs: 0.0,
        });
        id
    }
}

// ============================================================================
// Entity Events
// ============================================================================

/// Fired on the owner each frame a value tween advances.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct TweenStep {
    pub entity: Entity,
    pub tween:  TweenId,
    pub value:  f32,
}

/// Fired on the owner when a value tween finishes.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct TweenComplete {
    pub entity: Entity,
    pub tween:  TweenId,
}

/// Fired on the owner when a delayed trigger elapses.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct DelayElapsed {
    pub entity: Entity,
    pub tween:  TweenId,
}

/// System that advances the scheduler by the frame delta and dispatches reports.
pub fn advance_tweens(mut commands: Commands, time: Res<Time>, mut tweens: ResMut<Tweens>) {
    if tweens.is_empty() {
        return;
    }

    for report in tweens.tick(time.delta_secs()) {
        match report {
            TweenReport::Step { owner, id, value } => commands.trigger(TweenStep {
                entity: owner,
                tween: id,
                value,
            }),
            TweenReport::Complete { owner, id } => commands.trigger(TweenComplete {
                entity: owner,
                tween:  id,
            }),
            TweenReport::Elapsed { owner, id } => commands.trigger(DelayElapsed {
                entity: owner,
                tween:  id,
            }),
        }
    }
}
