//! Demonstrates the drag prompt hinting at a draggable card.
//!
//! - After 2 seconds of idling the hand slides down along a curve, fades out and repeats
//! - Press 'Space' to trigger the prompt immediately
//! - Press 'S' to stop it, as a drag handler would when the card is grabbed
//! - Press 'E' to toggle automatic prompting

use bevy::color::palettes::css::GOLD;
use bevy::color::palettes::css::SLATE_GRAY;
use bevy::math::curve::easing::EaseFunction;
use bevy::prelude::*;
use bevy_drag_prompt::DragPrompt;
use bevy_drag_prompt::DragPromptPlugin;
use bevy_drag_prompt::PromptCycleBegin;
use bevy_drag_prompt::PromptCycleEnd;
use bevy_drag_prompt::PromptHidden;
use bevy_drag_prompt::PromptState;
use bevy_drag_prompt::RequestPromptStop;
use bevy_drag_prompt::SetPromptEnabled;
use bevy_drag_prompt::TriggerPrompt;

const IDLE_THRESHOLD_SECS: f32 = 2.0;
const HAND_SIZE: f32 = 48.0;
const HAND_START: Vec2 = Vec2::new(320.0, 560.0);
const CARD_SIZE: Vec2 = Vec2::new(160.0, 220.0);
const VERTICAL_DISTANCE: f32 = 380.0;
const CURVE_OFFSET: f32 = 120.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(DragPromptPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, keyboard_controls)
        .add_observer(log_cycle_begin)
        .add_observer(log_cycle_end)
        .add_observer(log_hidden)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HAND_START.x - CARD_SIZE.x * 0.25),
            bottom: Val::Px(HAND_START.y - CARD_SIZE.y),
            width: Val::Px(CARD_SIZE.x),
            height: Val::Px(CARD_SIZE.y),
            ..default()
        },
        BackgroundColor(SLATE_GRAY.into()),
    ));

    let hand = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HAND_START.x),
                bottom: Val::Px(HAND_START.y),
                width: Val::Px(HAND_SIZE),
                height: Val::Px(HAND_SIZE),
                ..default()
            },
            ImageNode::solid_color(GOLD.into()),
        ))
        .id();

    commands.spawn((
        Name::new("Card Prompt"),
        DragPrompt::new(hand)
            .with_idle_threshold(IDLE_THRESHOLD_SECS)
            .with_path(VERTICAL_DISTANCE, CURVE_OFFSET)
            .with_easing(EaseFunction::SineInOut),
    ));
}

fn keyboard_controls(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    prompts: Query<(Entity, &PromptState)>,
) {
    for (entity, state) in &prompts {
        if keys.just_pressed(KeyCode::Space) {
            commands.trigger(TriggerPrompt::new(entity));
        }
        if keys.just_pressed(KeyCode::KeyS) {
            commands.trigger(RequestPromptStop::new(entity));
        }
        if keys.just_pressed(KeyCode::KeyE) {
            info!("auto prompt {}", if state.is_enabled() { "off" } else { "on" });
            commands.trigger(SetPromptEnabled::new(entity, !state.is_enabled()));
        }
    }
}

fn log_cycle_begin(begin: On<PromptCycleBegin>) {
    info!("cycle begin on {:?} (icon {:?})", begin.prompt_entity, begin.icon);
}

fn log_cycle_end(end: On<PromptCycleEnd>) {
    info!("cycle end on {:?}", end.prompt_entity);
}

fn log_hidden(hidden: On<PromptHidden>) {
    info!("prompt hidden on {:?}", hidden.prompt_entity);
}
