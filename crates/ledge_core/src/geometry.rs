//! Minimal 2D shapes used by the platformer: axis-aligned rectangles, line
//! segments and circles. Vectors are plain `glam::Vec2`.
//!
//! All predicates are total over finite inputs. Two conventions matter to the
//! contact resolver and are relied on by its tests:
//!
//! - `Rect::intersects` uses **open** intervals: rectangles that merely share
//!   an edge do not overlap.
//! - Segment tests use **closed** intervals: a segment lying on a rectangle
//!   edge, or touching it at a single point, counts as an intersection.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Builds a rectangle from any two opposite corners.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Returns a translated copy.
    pub fn moved(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Bottom, right, top, left; counter-clockwise from `min`.
    pub fn edges(&self) -> [Segment; 4] {
        let bottom_right = Vec2::new(self.max.x, self.min.y);
        let top_left = Vec2::new(self.min.x, self.max.y);
        [
            Segment::new(self.min, bottom_right),
            Segment::new(bottom_right, self.max),
            Segment::new(self.max, top_left),
            Segment::new(top_left, self.min),
        ]
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    /// True if either endpoint lies inside the rectangle or the segment
    /// crosses (or touches) any of its edges.
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        if self.contains(segment.a) || self.contains(segment.b) {
            return true;
        }
        self.edges().iter().any(|edge| edge.intersects(segment))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.a, self.b)
    }

    pub fn intersects(&self, other: &Segment) -> bool {
        let d1 = orientation(other.a, other.b, self.a);
        let d2 = orientation(other.a, other.b, self.b);
        let d3 = orientation(self.a, self.b, other.a);
        let d4 = orientation(self.a, self.b, other.b);

        if straddles(d1, d2) && straddles(d3, d4) {
            return true;
        }

        // Collinear cases: an endpoint lies on the other segment.
        (d1 == 0.0 && other.bounds().contains(self.a))
            || (d2 == 0.0 && other.bounds().contains(self.b))
            || (d3 == 0.0 && self.bounds().contains(other.a))
            || (d4 == 0.0 && self.bounds().contains(other.b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

/// Signed area of the triangle (p, q, r); positive when r is left of p->q.
fn orientation(p: Vec2, q: Vec2, r: Vec2) -> f32 {
    (q - p).perp_dot(r - p)
}

fn straddles(d1: f32, d2: f32) -> bool {
    (d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0)
}
