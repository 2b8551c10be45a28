//! Support utilities for reading and writing the prompt icon.
//!
//! The icon's anchored position is a y-up `Vec2` stored as `Node::left` / `Node::bottom`.

use bevy::prelude::*;

/// Everything the prompt touches on its icon. `ImageNode` is optional so any UI node can serve
/// as the icon; without one, fading only affects timing.
pub type IconQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut Node,
        &'static mut Visibility,
        Option<&'static mut ImageNode>,
    ),
>;

/// Reads the anchored position of a UI node. Non-pixel offsets read as `0.0`.
pub fn anchored_position(node: &Node) -> Vec2 {
    Vec2::new(px_or_zero(node.left), px_or_zero(node.bottom))
}

fn px_or_zero(val: Val) -> f32 {
    match val {
        Val::Px(px) => px,
        _ => 0.0,
    }
}

fn place(node: &mut Node, position: Vec2) {
    node.left = Val::Px(position.x);
    node.bottom = Val::Px(position.y);
}

/// Makes the icon visible and fully opaque at `position`.
pub fn show_icon_at(icons: &mut IconQuery, icon: Entity, position: Vec2) {
    let Ok((mut node, mut visibility, image)) = icons.get_mut(icon) else {
        return;
    };

    place(&mut node, position);
    *visibility = Visibility::Inherited;
    if let Some(mut image) = image {
        image.color.set_alpha(1.0);
    }
}

pub fn move_icon(icons: &mut IconQuery, icon: Entity, position: Vec2) {
    if let Ok((mut node, _, _)) = icons.get_mut(icon) {
        place(&mut node, position);
    }
}

pub fn set_icon_alpha(icons: &mut IconQuery, icon: Entity, alpha: f32) {
    if let Ok((_, _, Some(mut image))) = icons.get_mut(icon) {
        image.color.set_alpha(alpha);
    }
}

pub fn hide_icon(icons: &mut IconQuery, icon: Entity) {
    if let Ok((_, mut visibility, _)) = icons.get_mut(icon) {
        *visibility = Visibility::Hidden;
    }
}
