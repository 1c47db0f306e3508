//! Ground-contact resolution: decides whether the player hitbox is supported
//! by a platform and lifts it out of any platform it has sunk into.
//!
//! Only vertical penetration is resolved. Horizontal overlap is never
//! corrected, and a hitbox moving upward passes through platforms untouched,
//! which gives every platform one-way semantics.
//!
//! The push-out follows a unit-step search: translate the hitbox up by 1, 2,
//! 3... world units until it no longer touches the obstacle, then back off one
//! unit so it stays in contact. That residual overlap is what keeps the player
//! grounded on the next frame instead of alternating between landing and
//! falling. Rectangle obstacles compute the step count in closed form.
//! Segments bisect for it between 1 and the first step that clears the
//! segment's top, so the cost grows with the log of the penetration depth.
//!
//! Obstacles are scanned in slice order and the first landing wins. When two
//! stacked platforms overlap the hitbox at once, the result depends on that
//! order.

use glam::Vec2;
use ledge_core::geometry::Rect;

use crate::platform::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No platform touches the hitbox.
    Airborne,
    /// The hitbox overlaps a platform while moving up.
    PassingThrough { index: usize },
    /// The hitbox came down on (or rests on) a platform.
    Landed { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub rect: Rect,
    pub contact: Contact,
}

impl Resolution {
    pub fn grounded(&self) -> bool {
        matches!(self.contact, Contact::Landed { .. })
    }
}

pub fn resolve(player: Rect, vertical_velocity: f32, obstacles: &[Platform]) -> Resolution {
    for (index, obstacle) in obstacles.iter().enumerate() {
        if !obstacle.intersects(&player) {
            continue;
        }

        // Nothing can land while rising, so the first overlap settles it.
        if vertical_velocity > 0.0 {
            return Resolution {
                rect: player,
                contact: Contact::PassingThrough { index },
            };
        }

        let steps = push_out_steps(&player, obstacle);
        if steps > 1 {
            log::trace!("Lifting hitbox {} unit(s) out of platform {}", steps - 1, index);
        }
        return Resolution {
            rect: player.moved(Vec2::new(0.0, (steps - 1) as f32)),
            contact: Contact::Landed { index },
        };
    }

    Resolution {
        rect: player,
        contact: Contact::Airborne,
    }
}

/// Smallest whole number of units the hitbox must rise to stop touching
/// `obstacle`.
fn push_out_steps(player: &Rect, obstacle: &Platform) -> u32 {
    match obstacle {
        // Open-interval overlap clears once player.min.y >= rect.max.y.
        Platform::Rect(rect) => whole_steps(rect.max.y - player.min.y),
        Platform::Segment(segment) => {
            // Translations that still touch form one interval starting at 0,
            // and anything above the segment's top is clear.
            let mut low = 1;
            let mut high = whole_steps(segment.bounds().max.y - player.min.y).saturating_add(1);
            while low < high {
                let mid = low + (high - low) / 2;
                if obstacle.intersects(&player.moved(Vec2::new(0.0, mid as f32))) {
                    low = mid + 1;
                } else {
                    high = mid;
                }
            }
            low
        }
    }
}

fn whole_steps(depth: f32) -> u32 {
    depth.ceil().max(1.0) as u32
}
