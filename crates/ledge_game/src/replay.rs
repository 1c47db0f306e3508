use glam::Vec2;
use ledge_core::input::{InputState, Key, MouseBtn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct ReplaySequence {
    #[serde(default = "default_dt")]
    pub fixed_dt: f32,
    /// Window size in pixels the recorded clicks were made in.
    #[serde(default)]
    pub viewport: Option<[u32; 2]>,
    pub frames: Vec<ReplayFrame>,
}

/// Input levels for one frame. Levels persist across `repeat`, so a held key
/// or a click produces its press edge only on the first repeated frame.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ReplayFrame {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub toggle_debug: bool,
    /// Screen-space cursor position with the left button down.
    #[serde(default)]
    pub click: Option<[f32; 2]>,
    /// Right button held, which abandons a line in progress.
    #[serde(default)]
    pub cancel: bool,
    #[serde(default)]
    pub scroll: f32,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

impl ReplaySequence {
    /// A script that does nothing for `frames` frames.
    pub fn idle(frames: u32) -> Self {
        Self {
            fixed_dt: default_dt(),
            viewport: None,
            frames: vec![ReplayFrame {
                repeat: frames,
                ..ReplayFrame::default()
            }],
        }
    }

    pub fn expanded_frames(&self) -> Vec<ReplayFrame> {
        let mut out = Vec::new();
        for frame in &self.frames {
            for _ in 0..frame.repeat.max(1) {
                out.push(ReplayFrame {
                    repeat: 1,
                    ..frame.clone()
                });
            }
        }
        out
    }
}

/// Drives the input tracker the same way window events would.
pub fn feed(input: &mut InputState, frame: &ReplayFrame) {
    input.set_key(Key::Left, frame.left);
    input.set_key(Key::Right, frame.right);
    input.set_key(Key::Up, frame.jump);
    input.set_key(Key::D, frame.toggle_debug);
    match frame.click {
        Some(position) => {
            input.mouse_position = Vec2::from_array(position);
            input.mouse_down(MouseBtn::Left);
        }
        None => input.mouse_up(MouseBtn::Left),
    }
    if frame.cancel {
        input.mouse_down(MouseBtn::Right);
    } else {
        input.mouse_up(MouseBtn::Right);
    }
    input.scroll(frame.scroll);
}

pub fn load_replay_from_path(path: &Path) -> Result<ReplaySequence, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let replay: ReplaySequence = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse replay JSON {}: {e}", path.display()))?;
    validate_replay(&replay)?;
    Ok(replay)
}

fn validate_replay(replay: &ReplaySequence) -> Result<(), String> {
    if !replay.fixed_dt.is_finite() || replay.fixed_dt <= 0.0 {
        return Err("Replay validation failed: fixed_dt must be > 0".to_string());
    }
    if replay.viewport.is_some_and(|[w, h]| w == 0 || h == 0) {
        return Err("Replay validation failed: viewport must be non-zero".to_string());
    }
    if replay.frames.is_empty() {
        return Err("Replay validation failed: frames list is empty".to_string());
    }
    Ok(())
}

const fn default_dt() -> f32 {
    1.0 / 60.0
}

const fn default_repeat() -> u32 {
    1
}
