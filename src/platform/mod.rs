//! Platform abstraction layer
//!
//! The sim consumes an input snapshot per frame; where it comes from is the
//! platform's business. A windowed backend samples the keyboard (with
//! edge detection for fire), the headless backends below synthesize input
//! for demos and tests.

use crate::sim::FrameInput;

/// Per-frame input sampling boundary.
///
/// Implementations are responsible for edge-detecting `fire`: it must be
/// true only on the frame the key went down.
pub trait InputSource {
    fn sample(&mut self) -> FrameInput;
}

/// No keys, ever
#[derive(Debug, Default)]
pub struct NullInput;

impl InputSource for NullInput {
    fn sample(&mut self) -> FrameInput {
        FrameInput::default()
    }
}

/// Replays a fixed input script, then idles.
///
/// Frames beyond the script length sample as no input, so a short script can
/// drive an arbitrarily long session.
#[derive(Debug)]
pub struct ScriptedInput {
    frames: Vec<FrameInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<FrameInput>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Frames consumed so far
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> FrameInput {
        let frame = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        frame
    }
}
