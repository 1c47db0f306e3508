use glam::Vec2;
use ledge_core::geometry::Rect;
use ledge_core::input::{InputState, Key};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::resolver::Resolution;

/// Player tuning. Velocities are in world units per step, not per second:
/// only the horizontal blend is scaled by frame time.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct KinematicsConfig {
    /// Horizontal acceleration while left/right is held. The blend settles
    /// horizontal velocity on this value.
    pub run_accel: f32,
    pub jump_impulse: f32,
    /// Vertical acceleration applied every step the player is not grounded.
    pub fall_accel: f32,
    /// Blend rate `k` of the horizontal smoothing, per second.
    pub blend_rate: f32,
    pub hitbox_width: f32,
    pub hitbox_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            run_accel: 5.0,
            jump_impulse: 15.0,
            fall_accel: -1.5,
            blend_rate: 12.0,
            hitbox_width: 60.0,
            hitbox_height: 100.0,
            spawn_x: 0.0,
            spawn_y: 1500.0,
        }
    }
}

impl KinematicsConfig {
    pub fn spawn_hitbox(&self) -> Rect {
        Rect::from_center_size(
            Vec2::new(self.spawn_x, self.spawn_y),
            Vec2::new(self.hitbox_width, self.hitbox_height),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerIntent {
    /// -1, 0 or 1.
    pub move_x: f32,
    pub jump: bool,
}

impl PlayerIntent {
    /// Right wins when both directions are held. Jump is level-triggered, so
    /// holding it re-jumps on every landing.
    pub fn from_input(input: &InputState) -> Self {
        let move_x = if input.is_held(Key::Right) {
            1.0
        } else if input.is_held(Key::Left) {
            -1.0
        } else {
            0.0
        };
        Self {
            move_x,
            jump: input.is_held(Key::Up),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub hitbox: Rect,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub grounded: bool,
}

impl PlayerState {
    pub fn new(hitbox: Rect) -> Self {
        Self {
            hitbox,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            grounded: false,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.hitbox.center()
    }
}

/// Advances the player by one step without looking at the level.
///
/// Horizontal velocity is an exponential blend toward the run acceleration,
/// `vx' = vx * (1 - dt*k) + ax * (dt*k)`, which only stays stable while
/// `dt*k < 1`. Vertical velocity accumulates acceleration with no `dt`
/// scaling, so fall speed depends on the step rate. The hitbox then moves by
/// the full new velocity.
pub fn step(
    state: &PlayerState,
    dt: f32,
    intent: PlayerIntent,
    config: &KinematicsConfig,
) -> PlayerState {
    let mut next = *state;

    next.acceleration.x = intent.move_x * config.run_accel;
    let blend = dt * config.blend_rate;
    next.velocity.x = state.velocity.x * (1.0 - blend) + next.acceleration.x * blend;

    next.velocity.y = if state.grounded {
        if intent.jump {
            config.jump_impulse
        } else {
            0.0
        }
    } else {
        state.velocity.y + state.acceleration.y
    };

    next.hitbox = state.hitbox.moved(next.velocity);
    next
}

/// Feeds a contact resolution back into the player.
pub fn apply_resolution(
    state: &mut PlayerState,
    resolution: Resolution,
    config: &KinematicsConfig,
) {
    state.hitbox = resolution.rect;
    if resolution.grounded() {
        state.grounded = true;
        state.velocity.y = 0.0;
        state.acceleration.y = 0.0;
    } else {
        state.grounded = false;
        state.acceleration.y = config.fall_accel;
    }
}

pub fn load_tuning_from_path(path: &Path) -> Result<KinematicsConfig, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let config: KinematicsConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse tuning JSON {}: {e}", path.display()))?;
    validate_tuning(&config)?;
    Ok(config)
}

fn validate_tuning(config: &KinematicsConfig) -> Result<(), String> {
    let fields = [
        ("run_accel", config.run_accel),
        ("jump_impulse", config.jump_impulse),
        ("fall_accel", config.fall_accel),
        ("blend_rate", config.blend_rate),
        ("hitbox_width", config.hitbox_width),
        ("hitbox_height", config.hitbox_height),
        ("spawn_x", config.spawn_x),
        ("spawn_y", config.spawn_y),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(format!("Tuning validation failed: {name} must be finite"));
        }
    }
    if config.blend_rate <= 0.0 {
        return Err("Tuning validation failed: blend_rate must be > 0".to_string());
    }
    if config.hitbox_width <= 0.0 || config.hitbox_height <= 0.0 {
        return Err("Tuning validation failed: hitbox size must be > 0".to_string());
    }
    Ok(())
}
