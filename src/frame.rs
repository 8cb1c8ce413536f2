/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Borrowed, row-major views of pixel buffers.
//!
//! A `Frame` never owns its pixels: the acquisition side fills a buffer and
//! lends it to an estimator for the duration of a single call.

use crate::Error;
use num_traits::AsPrimitive;

#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

/// Pixel element types the estimators accept.
/// All arithmetic happens on the widened value, regardless of input width.
pub trait Pixel: Copy + AsPrimitive<i32> {
    #[inline]
    fn value(self) -> i64 {
        let v: i32 = self.as_();
        v as i64
    }
}

impl Pixel for u8 {}
impl Pixel for i8 {}
impl Pixel for u16 {}
impl Pixel for i16 {}
impl Pixel for i32 {}

/// A rectangular window of pixels in row-major order.
/// Consecutive rows start `stride` elements apart, which lets a frame
/// describe a sub-window of a larger acquisition without copying.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a, P> {
    pixels: &'a [P],
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a, P: Pixel> Frame<'a, P> {
    /// Wrap a densely packed `rows` x `cols` buffer
    pub fn new(pixels: &'a [P], rows: usize, cols: usize) -> Result<Self, Error> {
        Self::with_stride(pixels, rows, cols, cols)
    }

    /// Wrap a buffer whose rows are `stride` elements apart
    pub fn with_stride(
        pixels: &'a [P],
        rows: usize,
        cols: usize,
        stride: usize,
    ) -> Result<Self, Error> {
        if cols > stride {
            return Err(Error::InvalidWindow);
        }
        let expected = Self::span(rows, cols, stride)?;
        if pixels.len() < expected {
            #[cfg(feature = "rttdebug")]
            rprintln!("frame buffer {} < {}", pixels.len(), expected);
            return Err(Error::BufferTooShort {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            rows,
            cols,
            stride,
        })
    }

    /// Number of elements from the first to the last pixel, inclusive
    fn span(rows: usize, cols: usize, stride: usize) -> Result<usize, Error> {
        if rows == 0 || cols == 0 {
            return Ok(0);
        }
        (rows - 1)
            .checked_mul(stride)
            .and_then(|n| n.checked_add(cols))
            .ok_or(Error::Overflow)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of pixels in the window
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select the sub-window starting at (`row`, `col`)
    pub fn window(
        &self,
        row: usize,
        rows: usize,
        col: usize,
        cols: usize,
    ) -> Result<Frame<'a, P>, Error> {
        let row_end = row.checked_add(rows).ok_or(Error::InvalidWindow)?;
        let col_end = col.checked_add(cols).ok_or(Error::InvalidWindow)?;
        if rows == 0 || cols == 0 || row_end > self.rows || col_end > self.cols {
            return Err(Error::InvalidWindow);
        }
        let start = row * self.stride + col;
        Ok(Frame {
            pixels: &self.pixels[start..],
            rows,
            cols,
            stride: self.stride,
        })
    }

    /// Widened value of the pixel at (`row`, `col`).
    /// Callers stay inside the shape validated at construction.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> i64 {
        self.pixels[row * self.stride + col].value()
    }

    /// The pixel at (`row`, `col`), if it lies inside the window
    pub fn get(&self, row: usize, col: usize) -> Option<P> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.pixels.get(row * self.stride + col).copied()
    }

    /// The pixels of a single row, if it lies inside the window
    pub fn row(&self, row: usize) -> Option<&'a [P]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.stride;
        self.pixels.get(start..start + self.cols)
    }

    /// Validate a current/previous pair against a stencil's minimum size
    pub(crate) fn check_pair(
        curr: &Self,
        prev: &Self,
        min_rows: usize,
        min_cols: usize,
    ) -> Result<(), Error> {
        if curr.rows != prev.rows || curr.cols != prev.cols {
            #[cfg(feature = "rttdebug")]
            rprintln!(
                "frame mismatch {}x{} vs {}x{}",
                curr.rows,
                curr.cols,
                prev.rows,
                prev.cols
            );
            return Err(Error::FrameMismatch);
        }
        if curr.rows < min_rows || curr.cols < min_cols {
            #[cfg(feature = "rttdebug")]
            rprintln!("window {}x{} too small", curr.rows, curr.cols);
            return Err(Error::WindowTooSmall {
                rows: curr.rows,
                cols: curr.cols,
            });
        }
        Ok(())
    }
}
