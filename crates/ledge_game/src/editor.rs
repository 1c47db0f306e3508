//! In-game platform authoring. D toggles debug mode; in debug mode two left
//! clicks draw a line platform between the clicked points and a right click
//! abandons a line in progress. Clicks near an existing platform endpoint
//! snap onto it so authored lines join cleanly.

use glam::Vec2;
use ledge_core::camera::Camera2D;
use ledge_core::geometry::Circle;
use ledge_core::input::{InputState, Key, MouseBtn};

use crate::platform::Platform;

/// World-unit radius around the cursor searched for snap targets.
pub const SNAP_RADIUS: f32 = 15.0;

#[derive(Debug, Default)]
pub struct Editor {
    debug: bool,
    pending_start: Option<Vec2>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Start of the line being drawn, for the preview from here to the cursor.
    pub fn pending_start(&self) -> Option<Vec2> {
        self.pending_start
    }

    /// Processes one frame of editor input. Returns the platform completed by
    /// this frame's click, if any.
    pub fn update(
        &mut self,
        input: &InputState,
        camera: &Camera2D,
        platforms: &[Platform],
    ) -> Option<Platform> {
        if input.is_just_pressed(Key::D) {
            self.debug = !self.debug;
            if !self.debug && self.pending_start.take().is_some() {
                log::debug!("Debug mode off; pending line discarded");
            }
            log::info!("Debug mode {}", if self.debug { "on" } else { "off" });
        }

        if !self.debug {
            return None;
        }
        if input.is_mouse_just_pressed(MouseBtn::Right) {
            if let Some(start) = self.pending_start.take() {
                log::debug!("Pending line from {:?} cancelled", start);
            }
            return None;
        }
        if !input.is_mouse_just_pressed(MouseBtn::Left) {
            return None;
        }

        let cursor = camera.screen_to_world(input.mouse_position);
        let point = snap_point(cursor, platforms);
        match self.pending_start {
            None => {
                self.pending_start = Some(point);
                None
            }
            Some(start) if start == point => {
                log::warn!("Ignoring zero-length line at {:?}", point);
                None
            }
            Some(start) => {
                self.pending_start = None;
                Some(Platform::segment(start, point))
            }
        }
    }
}

/// First endpoint (in platform order) inside the snap circle, else `cursor`.
pub fn snap_point(cursor: Vec2, platforms: &[Platform]) -> Vec2 {
    let reach = Circle::new(cursor, SNAP_RADIUS);
    platforms
        .iter()
        .flat_map(|platform| platform.endpoints())
        .find(|&endpoint| reach.contains(endpoint))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera2D {
        // Screen centre (450, 350) looks at the world origin.
        Camera2D::new(900, 700)
    }

    fn click(input: &mut InputState, screen: Vec2) {
        input.end_frame();
        input.mouse_up(MouseBtn::Left);
        input.end_frame();
        input.mouse_position = screen;
        input.mouse_down(MouseBtn::Left);
    }

    fn debug_on(editor: &mut Editor, input: &mut InputState) {
        input.key_down(Key::D);
        assert!(editor.update(input, &camera(), &[]).is_none());
        input.key_up(Key::D);
        input.end_frame();
        assert!(editor.is_debug());
    }

    #[test]
    fn clicks_outside_debug_mode_are_ignored() {
        let mut editor = Editor::new();
        let mut input = InputState::new();
        click(&mut input, Vec2::new(100.0, 100.0));
        assert!(editor.update(&input, &camera(), &[]).is_none());
        assert!(editor.pending_start().is_none());
    }

    #[test]
    fn two_clicks_make_a_line_in_world_space() {
        let mut editor = Editor::new();
        let mut input = InputState::new();
        debug_on(&mut editor, &mut input);

        click(&mut input, Vec2::new(350.0, 350.0));
        assert!(editor.update(&input, &camera(), &[]).is_none());
        assert_eq!(editor.pending_start(), Some(Vec2::new(-100.0, 0.0)));

        click(&mut input, Vec2::new(550.0, 300.0));
        let created = editor.update(&input, &camera(), &[]);
        assert_eq!(
            created,
            Some(Platform::segment(Vec2::new(-100.0, 0.0), Vec2::new(100.0, -50.0)))
        );
        assert!(editor.pending_start().is_none());
    }

    #[test]
    fn clicks_snap_to_nearby_endpoints() {
        let existing = [Platform::segment(Vec2::new(-100.0, 0.0), Vec2::new(100.0, 0.0))];
        assert_eq!(
            snap_point(Vec2::new(95.0, 8.0), &existing),
            Vec2::new(100.0, 0.0)
        );
        assert_eq!(
            snap_point(Vec2::new(50.0, 8.0), &existing),
            Vec2::new(50.0, 8.0)
        );
    }

    #[test]
    fn snap_prefers_first_platform_and_a_before_b() {
        let existing = [
            Platform::segment(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)),
            Platform::segment(Vec2::new(1.0, 0.0), Vec2::new(50.0, 0.0)),
        ];
        assert_eq!(snap_point(Vec2::new(2.0, 0.0), &existing), Vec2::ZERO);
    }

    #[test]
    fn toggling_off_discards_pending_line() {
        let mut editor = Editor::new();
        let mut input = InputState::new();
        debug_on(&mut editor, &mut input);

        click(&mut input, Vec2::new(450.0, 350.0));
        editor.update(&input, &camera(), &[]);
        assert!(editor.pending_start().is_some());

        input.end_frame();
        input.key_down(Key::D);
        editor.update(&input, &camera(), &[]);
        assert!(!editor.is_debug());
        assert!(editor.pending_start().is_none());
    }

    #[test]
    fn zero_length_line_keeps_pending_start() {
        let mut editor = Editor::new();
        let mut input = InputState::new();
        debug_on(&mut editor, &mut input);

        click(&mut input, Vec2::new(450.0, 350.0));
        editor.update(&input, &camera(), &[]);
        click(&mut input, Vec2::new(450.0, 350.0));
        assert!(editor.update(&input, &camera(), &[]).is_none());
        assert_eq!(editor.pending_start(), Some(Vec2::ZERO));
    }

    #[test]
    fn right_click_cancels_pending_line() {
        let mut editor = Editor::new();
        let mut input = InputState::new();
        debug_on(&mut editor, &mut input);

        click(&mut input, Vec2::new(450.0, 350.0));
        editor.update(&input, &camera(), &[]);
        assert!(editor.pending_start().is_some());

        input.end_frame();
        input.mouse_up(MouseBtn::Left);
        input.mouse_down(MouseBtn::Right);
        assert!(editor.update(&input, &camera(), &[]).is_none());
        assert!(editor.pending_start().is_none());
        assert!(editor.is_debug());

        // The next left click starts a fresh line instead of finishing one.
        input.mouse_up(MouseBtn::Right);
        click(&mut input, Vec2::new(550.0, 350.0));
        assert!(editor.update(&input, &camera(), &[]).is_none());
        assert_eq!(editor.pending_start(), Some(Vec2::new(100.0, 0.0)));
    }
}
