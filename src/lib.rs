/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/
#![cfg_attr(not(test), no_std)]

//! Estimates optical flow between two small image frames using
//! gradient-based, fixed-point algorithms:
//! - a one dimensional image interpolation algorithm (IIA) for line images
//! - two dimensional IIA and Lucas-Kanade estimators, each with either a
//! "plus" or a more compact "square" interpolation stencil
//!
//! Flow is returned as integers in which a caller-chosen `Scale` represents
//! one pixel of motion. Displacements are assumed to be one pixel or less.
//!
//! Filters to smooth the flow stream and integrate it into odometry are
//! included. Everything works on borrowed buffers without allocation,
//! so it can run on small no_std embedded targets.
//!

pub mod error;
pub mod filter;
pub mod frame;
pub mod line;
pub mod odometry;
pub mod plus;
pub mod scale;
pub mod square;

#[cfg(test)]
mod fixtures;

pub use error::Error;
pub use frame::{Frame, Pixel};
pub use scale::{Method, Scale, DEFAULT_SCALE};

/// Neighbor pattern used to compute spatial differentials
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stencil {
    /// Up/down and left/right neighbors of each interior pixel
    Plus,
    /// 2x2 blocks: cheaper, needs a smaller border
    Square,
}

/// A two dimensional estimator configured once per deployment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowEstimator {
    pub stencil: Stencil,
    pub method: Method,
    pub scale: Scale,
}

impl FlowEstimator {
    pub fn new(stencil: Stencil, method: Method, scale: Scale) -> Self {
        Self {
            stencil,
            method,
            scale,
        }
    }

    /// Smallest (rows, cols) window this configuration accepts
    pub fn min_window(&self) -> (usize, usize) {
        match self.stencil {
            Stencil::Plus => (plus::MIN_ROWS, plus::MIN_COLS),
            Stencil::Square => (square::MIN_ROWS, square::MIN_COLS),
        }
    }

    /// Estimate (ofx, ofy) between the current and previous frames
    pub fn estimate<P: Pixel>(
        &self,
        curr: &Frame<P>,
        prev: &Frame<P>,
    ) -> Result<(i32, i32), Error> {
        match self.stencil {
            Stencil::Plus => plus::plus_2d(curr, prev, self.scale, self.method),
            Stencil::Square => square::square_2d(curr, prev, self.scale, self.method),
        }
    }
}

impl Default for FlowEstimator {
    fn default() -> Self {
        Self::new(Stencil::Square, Method::Iia, Scale::default())
    }
}
