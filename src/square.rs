/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Two dimensional flow with the more compact "square" stencil.
//!
//! Instead of the plus shifts (up, down, left, right) each 2x2 block
//! contributes two right-minus-left and two top-minus-bottom differences.
//! Adjacent blocks overlap, so interior edges are counted twice: this is an
//! intentional approximation that keeps the loop small.
//! The stencil only needs a one pixel border on the right and bottom.

use crate::frame::{Frame, Pixel};
use crate::scale::{GradientSums, Method, Scale};
use crate::Error;

pub const MIN_ROWS: usize = 2;
pub const MIN_COLS: usize = 2;

/// Accumulate gradient products over every 2x2 block, in row-major order
pub fn gradient_sums<P: Pixel>(
    curr: &Frame<P>,
    prev: &Frame<P>,
) -> Result<GradientSums, Error> {
    Frame::check_pair(curr, prev, MIN_ROWS, MIN_COLS)?;

    let mut sums = GradientSums::default();
    for r in 0..curr.rows() - 1 {
        for c in 0..curr.cols() - 1 {
            let top_left = curr.at(r, c);
            let top_right = curr.at(r, c + 1);
            let bottom_left = curr.at(r + 1, c);
            let bottom_right = curr.at(r + 1, c + 1);

            let gx = (top_left - top_right) + (bottom_left - bottom_right);
            let gy = (top_left - bottom_left) + (top_right - bottom_right);
            let gt = prev.at(r, c) - top_left;
            sums.add(gx, gy, gt)?;
        }
    }
    Ok(sums)
}

/// Estimate (ofx, ofy) between two frames using the square stencil
pub fn square_2d<P: Pixel>(
    curr: &Frame<P>,
    prev: &Frame<P>,
    scale: Scale,
    method: Method,
) -> Result<(i32, i32), Error> {
    gradient_sums(curr, prev)?.solve(method, scale)
}

pub fn iia_square_2d<P: Pixel>(
    curr: &Frame<P>,
    prev: &Frame<P>,
    scale: Scale,
) -> Result<(i32, i32), Error> {
    square_2d(curr, prev, scale, Method::Iia)
}

pub fn lk_square_2d<P: Pixel>(
    curr: &Frame<P>,
    prev: &Frame<P>,
    scale: Scale,
) -> Result<(i32, i32), Error> {
    square_2d(curr, prev, scale, Method::LucasKanade)
}
