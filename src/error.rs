/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

/// Errors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The window is smaller than the stencil requires
    WindowTooSmall { rows: usize, cols: usize },
    /// The pixel buffer cannot hold the requested window
    BufferTooShort { expected: usize, actual: usize },
    /// Current and previous frames differ in shape
    FrameMismatch,
    /// A sub-window falls outside its parent frame
    InvalidWindow,
    /// Scale must be a positive integer
    InvalidScale,
    /// Filter coefficient outside of [0, 1]
    InvalidAlpha,
    /// High-pass time constant shift above `HighPass::MAX_SHIFT`
    InvalidShift,
    /// No spatial gradient, or the normal equations are singular
    Degenerate,
    /// An intermediate or the final result exceeds the integer range
    Overflow,
}
