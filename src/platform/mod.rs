//! Input-source boundary
//!
//! The simulation never polls devices. Whatever drives the loop (a
//! windowing layer, a replay file, a test) implements `InputSource` and
//! hands the core one `(TickInput, dt)` pair per frame, with the pointer
//! already mapped into virtual coordinates. `dt` is whatever the clock
//! says; the core treats it as unbounded.

use crate::sim::TickInput;

/// Supplies one frame of input and elapsed time at a time.
pub trait InputSource {
    /// Next frame, or `None` when the source is exhausted.
    fn next_frame(&mut self) -> Option<(TickInput, f32)>;
}

/// A pre-recorded sequence of frames. Used by the headless demo binary
/// and anywhere a run needs to be reproduced exactly.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    frames: Vec<(TickInput, f32)>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(frames: Vec<(TickInput, f32)>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Append `count` frames of the same input.
    pub fn hold(&mut self, input: TickInput, dt: f32, count: usize) -> &mut Self {
        self.frames.extend(std::iter::repeat_n((input, dt), count));
        self
    }

    /// Append a single frame.
    pub fn frame(&mut self, input: TickInput, dt: f32) -> &mut Self {
        self.frames.push((input, dt));
        self
    }
}

impl InputSource for ScriptedSource {
    fn next_frame(&mut self) -> Option<(TickInput, f32)> {
        let frame = self.frames.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(frame)
    }
}
