/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Two dimensional flow with the "plus" stencil:
//! differentials are taken between the up/down and left/right neighbors of
//! every interior pixel, so the window needs a one pixel border on all sides.
//!
//! Displacements are assumed to be on the order of one pixel or less.
//! Motion toward lower column (row) indices is reported as positive x (y) flow.

use crate::frame::{Frame, Pixel};
use crate::scale::{GradientSums, Method, Scale};
use crate::Error;

/// Smallest window the plus stencil can be centered in
pub const MIN_ROWS: usize = 3;
pub const MIN_COLS: usize = 3;

/// Accumulate gradient products over every interior pixel, in row-major order
pub fn gradient_sums<P: Pixel>(
    curr: &Frame<P>,
    prev: &Frame<P>,
) -> Result<GradientSums, Error> {
    Frame::check_pair(curr, prev, MIN_ROWS, MIN_COLS)?;

    let mut sums = GradientSums::default();
    for r in 1..curr.rows() - 1 {
        for c in 1..curr.cols() - 1 {
            let gx = curr.at(r, c - 1) - curr.at(r, c + 1);
            let gy = curr.at(r - 1, c) - curr.at(r + 1, c);
            let gt = prev.at(r, c) - curr.at(r, c);
            sums.add(gx, gy, gt)?;
        }
    }
    Ok(sums)
}

/// Estimate (ofx, ofy) between two frames using the plus stencil
pub fn plus_2d<P: Pixel>(
    curr: &Frame<P>,
    prev: &Frame<P>,
    scale: Scale,
    method: Method,
) -> Result<(i32, i32), Error> {
    gradient_sums(curr, prev)?.solve(method, scale)
}

/// Simplified Srinivasan image interpolation algorithm
pub fn iia_plus_2d<P: Pixel>(
    curr: &Frame<P>,
    prev: &Frame<P>,
    scale: Scale,
) -> Result<(i32, i32), Error> {
    plus_2d(curr, prev, scale, Method::Iia)
}

/// Lucas-Kanade
pub fn lk_plus_2d<P: Pixel>(
    curr: &Frame<P>,
    prev: &Frame<P>,
    scale: Scale,
) -> Result<(i32, i32), Error> {
    plus_2d(curr, prev, scale, Method::LucasKanade)
}
