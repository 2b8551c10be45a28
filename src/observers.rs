//! Observers that wire events to prompt behavior.

use bevy::prelude::*;

use crate::components::DragPrompt;
use crate::components::PromptDisabled;
use crate::components::PromptState;
use crate::curve::prompt_path;
use crate::curve::quadratic_bezier;
use crate::error::PromptError;
use crate::events::PromptCycleBegin;
use crate::events::PromptCycleEnd;
use crate::events::PromptHidden;
use crate::events::RequestPromptStop;
use crate::events::SetPromptEnabled;
use crate::events::TriggerPrompt;
use crate::support::IconQuery;
use crate::support::anchored_position;
use crate::support::hide_icon;
use crate::support::move_icon;
use crate::support::set_icon_alpha;
use crate::support::show_icon_at;
use crate::tween::DelayElapsed;
use crate::tween::TweenComplete;
use crate::tween::TweenStep;
use crate::tween::Tweens;

/// Resolves the prompt's icon, or explains why it can't be used.
fn validate_icon(
    prompt_entity: Entity,
    prompt: &DragPrompt,
    icons: &IconQuery,
) -> Result<Entity, PromptError> {
    let icon = prompt.icon.ok_or(PromptError::MissingIcon {
        prompt: prompt_entity,
    })?;

    if icons.contains(icon) {
        Ok(icon)
    } else {
        Err(PromptError::IconNotUi {
            prompt: prompt_entity,
            icon,
        })
    }
}

/// Observer for `Insert, DragPrompt` - captures the path from the icon's position, hides the
/// icon and starts the idle timer when auto prompting is on.
/// Re-inserting `DragPrompt` tears down the previous configuration first, so a prompt can be
/// pointed at a new icon in place.
/// A prompt without a usable icon is marked `PromptDisabled` and never animates.
pub fn on_prompt_inserted(
    insert: On<Insert, DragPrompt>,
    mut commands: Commands,
    prompts: Query<(&DragPrompt, Option<&PromptState>)>,
    mut icons: IconQuery,
    mut tweens: ResMut<Tweens>,
) {
    let entity = insert.entity;

    let Ok((prompt, previous)) = prompts.get(entity) else {
        return;
    };

    if let Some(previous) = previous {
        tweens.cancel_owner(entity);
        hide_icon(&mut icons, previous.icon);
        debug!("DragPrompt: reconfiguring {entity:?}");
    }

    let icon = match validate_icon(entity, prompt, &icons) {
        Ok(icon) => icon,
        Err(err) => {
            error!("DragPrompt: {err}; disabling prompt");
            commands
                .entity(entity)
                .try_remove::<PromptState>()
                .insert(PromptDisabled);
            return;
        },
    };

    let Ok((node, _, _)) = icons.get(icon) else {
        return;
    };
    let start = anchored_position(node);
    let (control, end) = prompt_path(start, prompt.curve_offset, prompt.vertical_distance);

    hide_icon(&mut icons, icon);

    let mut state = PromptState::new(icon, start, control, end, prompt.auto_prompt);
    if state.enabled {
        state.schedule_delay(entity, prompt.idle_threshold_secs, &mut tweens);
    }

    debug!("DragPrompt: initialized {entity:?} start={start:.1?} end={end:.1?}");

    commands
        .entity(entity)
        .try_remove::<PromptDisabled>()
        .insert(state);
}

/// Observer for `Remove, DragPrompt` - cancels everything the prompt scheduled and hides the
/// icon. Runs on despawn too, so no tween ever reports to a dead prompt.
pub fn on_prompt_removed(
    remove: On<Remove, DragPrompt>,
    mut commands: Commands,
    states: Query<&PromptState>,
    mut icons: IconQuery,
    mut tweens: ResMut<Tweens>,
) {
    let entity = remove.entity;

    let cancelled = tweens.cancel_owner(entity);
    if cancelled > 0 {
        debug!("DragPrompt: teardown of {entity:?} cancelled {cancelled} tween(s)");
    }

    if let Ok(state) = states.get(entity) {
        hide_icon(&mut icons, state.icon);
    }

    commands.entity(entity).try_remove::<PromptState>();
}

/// Observer for `SetPromptEnabled` event
pub fn on_set_prompt_enabled(
    set_enabled: On<SetPromptEnabled>,
    mut commands: Commands,
    mut prompts: Query<(&mut DragPrompt, &mut PromptState), Without<PromptDisabled>>,
    mut icons: IconQuery,
    mut tweens: ResMut<Tweens>,
) {
    let entity = set_enabled.entity;

    let Ok((mut prompt, mut state)) = prompts.get_mut(entity) else {
        return;
    };

    // Mutating through the query does not re-fire `Insert`
    prompt.auto_prompt = set_enabled.enabled;
    state.enabled = set_enabled.enabled;

    if state.enabled {
        state.schedule_delay(entity, prompt.idle_threshold_secs, &mut tweens);
    } else {
        let was_animating = state.is_animating();
        state.cancel_all(&mut tweens);
        hide_icon(&mut icons, state.icon);
        if was_animating {
            commands.trigger(PromptHidden {
                prompt_entity: entity,
            });
        }
    }
}

/// Observer for `RequestPromptStop` event - stops the loop only if it is running
pub fn on_request_prompt_stop(
    stop: On<RequestPromptStop>,
    mut commands: Commands,
    mut prompts: Query<&mut PromptState, Without<PromptDisabled>>,
    mut icons: IconQuery,
    mut tweens: ResMut<Tweens>,
) {
    let entity = stop.entity;

    let Ok(mut state) = prompts.get_mut(entity) else {
        return;
    };

    if !state.is_animating() {
        return;
    }

    state.cancel_all(&mut tweens);
    hide_icon(&mut icons, state.icon);
    commands.trigger(PromptHidden {
        prompt_entity: entity,
    });
}

/// Observer for `TriggerPrompt` event - starts a cycle immediately when enabled
pub fn on_trigger_prompt(
    trigger: On<TriggerPrompt>,
    mut commands: Commands,
    mut prompts: Query<(&DragPrompt, &mut PromptState), Without<PromptDisabled>>,
    mut icons: IconQuery,
    mut tweens: ResMut<Tweens>,
) {
    let entity = trigger.entity;

    let Ok((prompt, mut state)) = prompts.get_mut(entity) else {
        return;
    };

    if !state.enabled {
        return;
    }

    begin_cycle(&mut commands, entity, prompt, &mut state, &mut icons, &mut tweens);
}

/// Observer for `DelayElapsed` - the idle timer fired
pub fn on_delay_elapsed(
    elapsed: On<DelayElapsed>,
    mut commands: Commands,
    mut prompts: Query<(&DragPrompt, &mut PromptState)>,
    mut icons: IconQuery,
    mut tweens: ResMut<Tweens>,
) {
    let entity = elapsed.entity;

    let Ok((prompt, mut state)) = prompts.get_mut(entity) else {
        return;
    };

    if state.pending_delay != Some(elapsed.tween) {
        return;
    }
    state.pending_delay = None;

    if state.enabled && !state.is_animating() {
        begin_cycle(&mut commands, entity, prompt, &mut state, &mut icons, &mut tweens);
    }
}

/// Observer for `TweenStep` - moves the icon along its curve or fades it
pub fn on_tween_step(
    step: On<TweenStep>,
    prompts: Query<&PromptState>,
    mut icons: IconQuery,
) {
    let Ok(state) = prompts.get(step.entity) else {
        return;
    };

    if state.movement == Some(step.tween) {
        let position = quadratic_bezier(state.start, state.control, state.end, step.value);
        move_icon(&mut icons, state.icon, position);
    } else if state.fade == Some(step.tween) {
        set_icon_alpha(&mut icons, state.icon, 1.0 - step.value);
    }
}

/// Observer for `TweenComplete` - advances movement → fade → next cycle
pub fn on_tween_complete(
    complete: On<TweenComplete>,
    mut commands: Commands,
    mut prompts: Query<(&DragPrompt, &mut PromptState)>,
    mut icons: IconQuery,
    mut tweens: ResMut<Tweens>,
) {
    let entity = complete.entity;

    let Ok((prompt, mut state)) = prompts.get_mut(entity) else {
        return;
    };

    if state.movement == Some(complete.tween) {
        state.movement = None;
        state.begin_fade(entity, prompt.fade_secs, &mut tweens);
        debug!("DragPrompt: {entity:?} reached end of path, fading out");
    } else if state.fade == Some(complete.tween) {
        state.fade = None;
        commands.trigger(PromptCycleEnd {
            prompt_entity: entity,
        });

        // Disabling cancels the fade, so a fade that completes belongs to an enabled prompt
        begin_cycle(&mut commands, entity, prompt, &mut state, &mut icons, &mut tweens);
    }
}

/// Resets the icon to the start of its path at full opacity and starts the movement tween.
fn begin_cycle(
    commands: &mut Commands,
    entity: Entity,
    prompt: &DragPrompt,
    state: &mut PromptState,
    icons: &mut IconQuery,
    tweens: &mut Tweens,
) {
    show_icon_at(icons, state.icon, state.start);
    state.begin_movement(entity, prompt, tweens);

    debug!("DragPrompt: {entity:?} cycle begin");

    commands.trigger(PromptCycleBegin {
        prompt_entity: entity,
        icon:          state.icon,
    });
}
