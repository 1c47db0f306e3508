//! One running game: the player, the level and the tools that edit it.
//!
//! A frame runs to completion in a fixed order:
//!   1. camera eases toward the player and applies scroll zoom
//!   2. editor consumes debug/mouse input; a finished line joins the level and
//!      is appended to the world file
//!   3. kinematics step from held movement keys
//!   4. ground-contact resolution against every platform, fed back into the
//!      player's vertical velocity, acceleration and grounded flag

use glam::Vec2;
use ledge_core::camera::Camera2D;
use ledge_core::input::InputState;
use std::path::PathBuf;

use crate::editor::Editor;
use crate::kinematics::{self, KinematicsConfig, PlayerIntent, PlayerState};
use crate::platform::Platform;
use crate::resolver::{self, Contact};
use crate::world;

pub const VIEWPORT_WIDTH: u32 = 900;
pub const VIEWPORT_HEIGHT: u32 = 700;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    pub contact: Contact,
    pub created_platform: Option<Platform>,
}

pub struct GameSession {
    player: PlayerState,
    platforms: Vec<Platform>,
    config: KinematicsConfig,
    camera: Camera2D,
    editor: Editor,
    world_path: Option<PathBuf>,
}

impl GameSession {
    /// `world_path` is where authored platforms get appended; `None` keeps
    /// edits in memory only.
    pub fn new(
        config: KinematicsConfig,
        platforms: Vec<Platform>,
        world_path: Option<PathBuf>,
    ) -> Self {
        let player = PlayerState::new(config.spawn_hitbox());
        let mut camera = Camera2D::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        camera.position = player.position();
        Self {
            player,
            platforms,
            config,
            camera,
            editor: Editor::new(),
            world_path,
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Window size in pixels. Clicks are converted to world space against it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn frame(&mut self, input: &InputState, dt: f32) -> FrameReport {
        self.camera.follow(self.player.position(), dt);
        self.camera.apply_scroll(input.scroll_delta());

        let created_platform = self.editor.update(input, &self.camera, &self.platforms);
        if let Some(platform) = created_platform {
            self.add_platform(platform);
        }

        let intent = PlayerIntent::from_input(input);
        let moved = kinematics::step(&self.player, dt, intent, &self.config);
        let resolution = resolver::resolve(moved.hitbox, moved.velocity.y, &self.platforms);

        let was_grounded = self.player.grounded;
        self.player = moved;
        kinematics::apply_resolution(&mut self.player, resolution, &self.config);
        match resolution.contact {
            Contact::Landed { index } if !was_grounded => log::debug!(
                "Landed on platform {} at ({:.2}, {:.2})",
                index,
                self.player.position().x,
                self.player.position().y
            ),
            Contact::PassingThrough { index } => {
                log::trace!("Passing up through platform {}", index)
            }
            Contact::Airborne if was_grounded => log::debug!(
                "Left ground at ({:.2}, {:.2})",
                self.player.position().x,
                self.player.position().y
            ),
            _ => {}
        }
        log::trace!(
            "Player position: ({:.2}, {:.2})",
            self.player.position().x,
            self.player.position().y
        );

        FrameReport {
            position: self.player.position(),
            velocity: self.player.velocity,
            grounded: self.player.grounded,
            contact: resolution.contact,
            created_platform,
        }
    }

    fn add_platform(&mut self, platform: Platform) {
        self.platforms.push(platform);
        log::info!("Platform {} created: {:?}", self.platforms.len() - 1, platform);
        // A failed write keeps the platform in this session only.
        if let Some(path) = &self.world_path {
            if let Err(err) = world::append_platform(path, &platform) {
                log::error!("Failed to persist platform: {err}");
            }
        }
    }
}
