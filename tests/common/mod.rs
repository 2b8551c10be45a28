#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_drag_prompt::DragPrompt;
use bevy_drag_prompt::DragPromptPlugin;
use bevy_drag_prompt::PromptCycleBegin;
use bevy_drag_prompt::PromptCycleEnd;
use bevy_drag_prompt::PromptHidden;
use bevy_drag_prompt::PromptPhase;
use bevy_drag_prompt::PromptState;
use bevy_drag_prompt::Tweens;

pub const FRAME: Duration = Duration::from_millis(100);
pub const ICON_START: Vec2 = Vec2::new(200.0, 1400.0);

#[derive(Resource, Default, Debug)]
pub struct PromptLog {
    pub begins: u32,
    pub ends:   u32,
    pub hidden: u32,
}

/// Headless app advancing time by `FRAME` per update. The first update has a zero delta.
pub fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(DragPromptPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .init_resource::<PromptLog>()
        .add_observer(|_: On<PromptCycleBegin>, mut log: ResMut<PromptLog>| log.begins += 1)
        .add_observer(|_: On<PromptCycleEnd>, mut log: ResMut<PromptLog>| log.ends += 1)
        .add_observer(|_: On<PromptHidden>, mut log: ResMut<PromptLog>| log.hidden += 1);
    app.update();
    app
}

pub fn spawn_icon(app: &mut App) -> Entity { spawn_icon_at(app, ICON_START) }

pub fn spawn_icon_at(app: &mut App, position: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(position.x),
                bottom: Val::Px(position.y),
                ..default()
            },
            ImageNode::default(),
            Visibility::Visible,
        ))
        .id()
}

/// Spawns an icon and a prompt configured by `configure`. Returns `(prompt, icon)`.
pub fn spawn_prompt(app: &mut App, configure: impl FnOnce(DragPrompt) -> DragPrompt) -> (Entity, Entity) {
    let icon = spawn_icon(app);
    let prompt = app.world_mut().spawn(configure(DragPrompt::new(icon))).id();
    (prompt, icon)
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Updates until the prompt reaches `phase`, returning the number of frames it took.
pub fn run_until_phase(app: &mut App, prompt: Entity, phase: PromptPhase, max_frames: usize) -> usize {
    for frame in 1..=max_frames {
        app.update();
        if state(app, prompt).phase() == phase {
            return frame;
        }
    }
    panic!("prompt never reached {phase:?} within {max_frames} frames");
}

pub fn state(app: &App, prompt: Entity) -> PromptState {
    app.world()
        .get::<PromptState>(prompt)
        .cloned()
        .expect("prompt is initialized")
}

pub fn pending_tweens(app: &App, prompt: Entity) -> usize {
    app.world().resource::<Tweens>().pending_for(prompt)
}

pub fn visibility(app: &App, icon: Entity) -> Visibility {
    *app.world()
        .get::<Visibility>(icon)
        .expect("icon has Visibility")
}

pub fn alpha(app: &App, icon: Entity) -> f32 {
    app.world()
        .get::<ImageNode>(icon)
        .expect("icon has ImageNode")
        .color
        .alpha()
}

pub fn icon_position(app: &App, icon: Entity) -> Vec2 {
    let node = app.world().get::<Node>(icon).expect("icon has Node");
    let (Val::Px(x), Val::Px(y)) = (node.left, node.bottom) else {
        panic!("icon offsets are not in pixels: {:?} {:?}", node.left, node.bottom);
    };
    Vec2::new(x, y)
}

pub fn log(app: &App) -> &PromptLog { app.world().resource::<PromptLog>() }
