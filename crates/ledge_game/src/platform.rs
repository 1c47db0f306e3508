use glam::Vec2;
use ledge_core::geometry::{Rect, Segment};

/// Static level geometry the player can stand on. Carries no material or
/// identity; order in the level list is the order contacts are checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Platform {
    Segment(Segment),
    Rect(Rect),
}

impl Platform {
    pub fn segment(a: Vec2, b: Vec2) -> Self {
        Self::Segment(Segment::new(a, b))
    }

    pub fn rect(a: Vec2, b: Vec2) -> Self {
        Self::Rect(Rect::new(a, b))
    }

    pub fn intersects(&self, hitbox: &Rect) -> bool {
        match self {
            Self::Segment(segment) => hitbox.intersects_segment(segment),
            Self::Rect(rect) => hitbox.intersects(rect),
        }
    }

    /// Points the editor may snap a new line to.
    pub fn endpoints(&self) -> Vec<Vec2> {
        match self {
            Self::Segment(segment) => vec![segment.a, segment.b],
            Self::Rect(rect) => rect.corners().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_to_matching_predicate() {
        let hitbox = Rect::new(Vec2::new(-30.0, -55.0), Vec2::new(30.0, 45.0));
        let line = Platform::segment(Vec2::new(-400.0, -50.0), Vec2::new(400.0, -50.0));
        let slab = Platform::rect(Vec2::new(-400.0, -100.0), Vec2::new(400.0, -50.0));
        let far = Platform::rect(Vec2::new(500.0, -100.0), Vec2::new(600.0, -50.0));
        assert!(line.intersects(&hitbox));
        assert!(slab.intersects(&hitbox));
        assert!(!far.intersects(&hitbox));
    }

    #[test]
    fn segment_endpoints_keep_a_before_b() {
        let line = Platform::segment(Vec2::new(5.0, 1.0), Vec2::new(-5.0, 2.0));
        assert_eq!(line.endpoints(), vec![Vec2::new(5.0, 1.0), Vec2::new(-5.0, 2.0)]);
    }

    #[test]
    fn rect_endpoints_are_corners() {
        let slab = Platform::rect(Vec2::new(0.0, 0.0), Vec2::new(4.0, 2.0));
        assert_eq!(slab.endpoints().len(), 4);
        assert_eq!(slab.endpoints()[0], Vec2::ZERO);
    }
}
