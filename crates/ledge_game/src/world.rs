//! Level geometry on disk: an append-only JSON Lines file, one platform per
//! line, in the order the platforms were authored.
//!
//! ```text
//! {"kind":"segment","a":[-400.0,1400.0],"b":[400.0,1400.0]}
//! {"kind":"rect","min":[-400.0,-100.0],"max":[400.0,-50.0]}
//! ```
//!
//! Records have no identity. Line order is contact-check order, so loading a
//! file always yields the same list.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::platform::Platform;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlatformRecord {
    Segment { a: [f32; 2], b: [f32; 2] },
    Rect { min: [f32; 2], max: [f32; 2] },
}

impl From<&Platform> for PlatformRecord {
    fn from(platform: &Platform) -> Self {
        match platform {
            Platform::Segment(segment) => Self::Segment {
                a: segment.a.to_array(),
                b: segment.b.to_array(),
            },
            Platform::Rect(rect) => Self::Rect {
                min: rect.min.to_array(),
                max: rect.max.to_array(),
            },
        }
    }
}

impl PlatformRecord {
    fn points(&self) -> [[f32; 2]; 2] {
        match *self {
            Self::Segment { a, b } => [a, b],
            Self::Rect { min, max } => [min, max],
        }
    }

    pub fn to_platform(&self) -> Result<Platform, String> {
        if self
            .points()
            .iter()
            .flatten()
            .any(|coordinate| !coordinate.is_finite())
        {
            return Err("coordinates must be finite".to_string());
        }
        match *self {
            Self::Segment { a, b } => {
                Ok(Platform::segment(Vec2::from_array(a), Vec2::from_array(b)))
            }
            Self::Rect { min, max } => {
                if min[0] > max[0] || min[1] > max[1] {
                    return Err(format!("rect min {min:?} must not exceed max {max:?}"));
                }
                Ok(Platform::rect(Vec2::from_array(min), Vec2::from_array(max)))
            }
        }
    }
}

pub fn load_world_from_path(path: &Path) -> Result<Vec<Platform>, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let platforms = parse_world(&raw).map_err(|e| format!("{}: {e}", path.display()))?;
    log::info!(
        "Loaded {} platform(s) from {}",
        platforms.len(),
        path.display()
    );
    Ok(platforms)
}

/// Like `load_world_from_path`, but a file that does not exist yet is an empty
/// level. Any other failure still propagates.
pub fn load_world_or_empty(path: &Path) -> Result<Vec<Platform>, String> {
    if !path.exists() {
        log::warn!(
            "World file '{}' not found; starting with no platforms.",
            path.display()
        );
        return Ok(Vec::new());
    }
    load_world_from_path(path)
}

fn parse_world(raw: &str) -> Result<Vec<Platform>, String> {
    let mut platforms = Vec::new();
    for (line_index, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = line_index + 1;
        let record: PlatformRecord = serde_json::from_str(line)
            .map_err(|e| format!("line {line_no}: failed to parse platform record: {e}"))?;
        let platform = record
            .to_platform()
            .map_err(|e| format!("line {line_no}: invalid platform: {e}"))?;
        platforms.push(platform);
    }
    Ok(platforms)
}

/// Appends one record, creating the file (and its directory) on first use.
pub fn append_platform(path: &Path, platform: &Platform) -> Result<(), String> {
    let record = PlatformRecord::from(platform);
    record
        .to_platform()
        .map_err(|e| format!("Refusing to write platform to {}: {e}", path.display()))?;
    let line = serde_json::to_string(&record)
        .map_err(|e| format!("Failed to encode platform for {}: {e}", path.display()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    writeln!(file, "{line}").map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    Ok(())
}
