use glam::Vec2;

/// Fraction of the remaining distance the camera is allowed to keep after one
/// second of following.
const FOLLOW_RESIDUAL_PER_SECOND: f32 = 1.0 / 128.0;
const ZOOM_STEP: f32 = 1.1;

pub struct Camera2D {
    pub position: Vec2,
    pub zoom: f32,
    pub viewport: (u32, u32),
}

impl Camera2D {
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            viewport: (viewport_width, viewport_height),
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Ignoring degenerate viewport {}x{}", width, height);
            return;
        }
        self.viewport = (width, height);
    }

    /// Eases toward `target` at a frame-rate independent rate.
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        let t = 1.0 - FOLLOW_RESIDUAL_PER_SECOND.powf(dt.max(0.0));
        self.position = self.position.lerp(target, t);
    }

    /// One wheel notch scales the zoom by 10%.
    pub fn apply_scroll(&mut self, delta: f32) {
        if delta != 0.0 {
            self.zoom *= ZOOM_STEP.powf(delta);
        }
    }

    fn viewport_center(&self) -> Vec2 {
        Vec2::new(self.viewport.0 as f32, self.viewport.1 as f32) * 0.5
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom + self.viewport_center()
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.viewport_center()) / self.zoom + self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_center_maps_to_camera_position() {
        let mut camera = Camera2D::new(900, 700);
        camera.position = Vec2::new(120.0, -40.0);
        camera.zoom = 2.0;
        let world = camera.screen_to_world(Vec2::new(450.0, 350.0));
        assert!((world - camera.position).length() < 1e-4);
    }

    #[test]
    fn screen_world_round_trip() {
        let mut camera = Camera2D::new(900, 700);
        camera.position = Vec2::new(10.0, 1500.0);
        camera.zoom = 0.5;
        let screen = Vec2::new(100.0, 650.0);
        let back = camera.world_to_screen(camera.screen_to_world(screen));
        assert!((back - screen).length() < 1e-3);
    }

    #[test]
    fn zoom_scales_distances_from_center() {
        let mut camera = Camera2D::new(900, 700);
        camera.zoom = 2.0;
        let world = camera.screen_to_world(Vec2::new(550.0, 350.0));
        assert!((world.x - 50.0).abs() < 1e-4);
    }

    #[test]
    fn follow_converges_without_overshoot() {
        let mut camera = Camera2D::new(900, 700);
        let target = Vec2::new(100.0, 0.0);
        let mut last = camera.position.x;
        for _ in 0..240 {
            camera.follow(target, 1.0 / 60.0);
            assert!(camera.position.x >= last);
            assert!(camera.position.x <= target.x);
            last = camera.position.x;
        }
        assert!((camera.position.x - target.x).abs() < 0.01);
    }

    #[test]
    fn follow_one_second_leaves_residual() {
        let mut camera = Camera2D::new(900, 700);
        camera.follow(Vec2::new(128.0, 0.0), 1.0);
        assert!((camera.position.x - 127.0).abs() < 1e-3);
    }

    #[test]
    fn scroll_multiplies_zoom() {
        let mut camera = Camera2D::new(900, 700);
        camera.apply_scroll(1.0);
        assert!((camera.zoom - 1.1).abs() < 1e-6);
        camera.apply_scroll(-1.0);
        assert!((camera.zoom - 1.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_viewport_is_ignored() {
        let mut camera = Camera2D::new(900, 700);
        camera.set_viewport(0, 700);
        assert_eq!(camera.viewport, (900, 700));
        camera.set_viewport(1280, 720);
        assert_eq!(camera.viewport, (1280, 720));
    }
}
