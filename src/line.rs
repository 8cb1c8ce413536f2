/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! One dimensional image interpolation algorithm (IIA)
//! as described by Prof. Mandyam Srinivasan, for line images.
//!
//! Motion toward higher pixel indices is reported as positive flow.

use core::convert::TryFrom;
use crate::frame::{Frame, Pixel};
use crate::scale::{mul_add, scaled_quotient, Scale};
use crate::Error;

#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

/// Estimate the shift between two line images of equal length (at least 3 pixels).
/// Returns the flow scaled so that `scale` equals one pixel of motion.
pub fn iia_1d<P: Pixel>(curr: &[P], prev: &[P], scale: Scale) -> Result<i32, Error> {
    if curr.len() != prev.len() {
        return Err(Error::FrameMismatch);
    }
    if curr.len() < 3 {
        return Err(Error::WindowTooSmall {
            rows: 1,
            cols: curr.len(),
        });
    }

    let mut top: i64 = 0;
    let mut bottom: i64 = 0;
    // taps: left, center, right of the current line; center of the previous
    for (taps, past) in curr.windows(3).zip(&prev[1..]) {
        let deltat = past.value() - taps[1].value();
        let deltax = taps[2].value() - taps[0].value();
        top = mul_add(top, deltat, deltax)?;
        bottom = mul_add(bottom, deltax, deltax)?;
    }

    if bottom == 0 {
        #[cfg(feature = "rttdebug")]
        rprintln!("iia_1d: flat line, no spatial gradient");
        return Err(Error::Degenerate);
    }
    scaled_quotient(top as i128, 2 * scale.value() as i128, bottom as i128)
}

/// Direction of the strips summed into each line pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binning {
    /// Each line pixel is the sum of one row: the line runs vertically
    Horizontal,
    /// Each line pixel is the sum of one column: the line runs horizontally
    Vertical,
}

/// Sum a 2D window into a line image, the software equivalent of on-chip
/// binning. Pixels are summed, not averaged.
/// Only the first `rows` (or `cols`) elements of `line` are written.
pub fn bin_to_line<P: Pixel>(
    frame: &Frame<P>,
    binning: Binning,
    line: &mut [i32],
) -> Result<(), Error> {
    let count = match binning {
        Binning::Horizontal => frame.rows(),
        Binning::Vertical => frame.cols(),
    };
    if line.len() < count {
        return Err(Error::BufferTooShort {
            expected: count,
            actual: line.len(),
        });
    }

    for (i, out) in line[..count].iter_mut().enumerate() {
        let mut sum: i64 = 0;
        match binning {
            Binning::Horizontal => {
                for c in 0..frame.cols() {
                    sum += frame.at(i, c);
                }
            }
            Binning::Vertical => {
                for r in 0..frame.rows() {
                    sum += frame.at(r, i);
                }
            }
        }
        *out = i32::try_from(sum).map_err(|_| Error::Overflow)?;
    }
    Ok(())
}
