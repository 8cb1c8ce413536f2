/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Filters that turn raw per-frame flow into a stable motion signal,
//! plus a temporal high-pass for the frames themselves.
//!
//! None of these keep hidden state: the caller owns every filtered value
//! and passes it in by reference on each step.

use core::convert::TryFrom;
use crate::frame::Pixel;
use crate::Error;
use num_traits::{CheckedAdd, CheckedNeg, NumCast, Signed};

/// Exponential low-pass: `filtered += (new - filtered) * alpha`.
/// `alpha` is expected to lie in [0, 1]; integer states truncate toward zero.
/// The update runs in `f64`, exact for any `i32` state.
pub fn low_pass<T: NumCast + Copy>(filtered: &mut T, new: T, alpha: f32) {
    debug_assert!((0.0..=1.0).contains(&alpha), "alpha {} outside [0, 1]", alpha);
    let (prior, new) = match (filtered.to_f64(), new.to_f64()) {
        (Some(prior), Some(new)) => (prior, new),
        _ => return,
    };
    if let Some(next) = <T as NumCast>::from(prior + (new - prior) * alpha as f64) {
        *filtered = next;
    }
}

/// A low-pass coefficient validated once at configuration time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LowPass {
    alpha: f32,
}

impl LowPass {
    pub fn new(alpha: f32) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(Error::InvalidAlpha);
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn apply<T: NumCast + Copy>(&self, filtered: &mut T, new: T) {
        low_pass(filtered, new, self.alpha)
    }
}

/// Add `new` into `acc` only if its magnitude strictly exceeds `threshold`.
/// Returns whether the value was accumulated.
/// A sum that would leave the range of `T` is an `Overflow` and leaves `acc` untouched.
pub fn accumulate<T>(new: T, acc: &mut T, threshold: T) -> Result<bool, Error>
where
    T: Signed + CheckedAdd + CheckedNeg + PartialOrd + Copy,
{
    let exceeds = match threshold.checked_neg() {
        Some(neg) => new > threshold || new < neg,
        // only the most negative threshold has no negation: every magnitude exceeds it
        None => true,
    };
    if !exceeds {
        return Ok(false);
    }
    *acc = acc.checked_add(&new).ok_or(Error::Overflow)?;
    Ok(true)
}

/// Temporal high-pass over whole frames, used to strip static
/// fixed-pattern noise before estimating flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighPass {
    shift: u8,
}

impl HighPass {
    /// Fractional bits carried by the low-passed state
    pub const STATE_SHIFT: u32 = 4;
    pub const MAX_SHIFT: u8 = 15;

    /// The time constant is 2^`shift` frames
    pub fn new(shift: u8) -> Result<Self, Error> {
        if shift > Self::MAX_SHIFT {
            return Err(Error::InvalidShift);
        }
        Ok(Self { shift })
    }

    /// Update the caller-owned `low` state (scaled by 2^STATE_SHIFT) with
    /// `input` and write `input` minus the low-passed frame into `high`
    pub fn apply<P: Pixel>(
        &self,
        input: &[P],
        low: &mut [i32],
        high: &mut [i32],
    ) -> Result<(), Error> {
        if low.len() != input.len() || high.len() != input.len() {
            return Err(Error::FrameMismatch);
        }
        for ((px, lo), hi) in input.iter().zip(low.iter_mut()).zip(high.iter_mut()) {
            let px = px.value();
            let prior = *lo as i64;
            let next = prior + (((px << Self::STATE_SHIFT) - prior) >> self.shift);
            *lo = i32::try_from(next).map_err(|_| Error::Overflow)?;
            *hi = i32::try_from(px - (next >> Self::STATE_SHIFT)).map_err(|_| Error::Overflow)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_pass_converges_by_halves() {
        let mut filtered = 0f32;
        let v = 64f32;
        let mut last = filtered;
        for n in 1..=6 {
            low_pass(&mut filtered, v, 0.5);
            let expected = v * (1.0 - 0.5f32.powi(n));
            assert_eq!(filtered, expected);
            assert!(filtered > last);
            last = filtered;
        }
    }

    #[test]
    fn low_pass_integer_state_truncates() {
        let mut filtered: i16 = 0;
        let mut trace = [0i16; 4];
        for slot in trace.iter_mut() {
            low_pass(&mut filtered, 10, 0.5);
            *slot = filtered;
        }
        assert_eq!(trace, [5, 7, 8, 9]);

        let mut filtered: i16 = 0;
        low_pass(&mut filtered, -15, 0.5);
        assert_eq!(filtered, -7);
    }

    #[test]
    fn low_pass_large_integer_state() {
        let mut filtered = 20_000_001i32;
        low_pass(&mut filtered, 20_000_001, 0.5);
        assert_eq!(filtered, 20_000_001);
        low_pass(&mut filtered, 20_000_005, 0.5);
        assert_eq!(filtered, 20_000_003);

        let mut filtered = i32::MAX - 1;
        low_pass(&mut filtered, i32::MAX, 0.5);
        assert_eq!(filtered, i32::MAX - 1);
        low_pass(&mut filtered, i32::MAX, 1.0);
        assert_eq!(filtered, i32::MAX);
    }

    #[test]
    fn low_pass_extremes() {
        let lpf = LowPass::new(0.0).unwrap();
        let mut filtered = 12i32;
        lpf.apply(&mut filtered, 500);
        assert_eq!(filtered, 12);

        let lpf = LowPass::new(1.0).unwrap();
        lpf.apply(&mut filtered, 500);
        assert_eq!(filtered, 500);
    }

    #[test]
    fn alpha_range() {
        assert_eq!(LowPass::new(1.5), Err(Error::InvalidAlpha));
        assert_eq!(LowPass::new(-0.1), Err(Error::InvalidAlpha));
        assert_eq!(LowPass::new(f32::NAN), Err(Error::InvalidAlpha));
        assert_eq!(LowPass::new(0.25).map(|l| l.alpha()), Ok(0.25));
    }

    #[test]
    fn accumulate_above_threshold() {
        let threshold = 10i16;
        let mut acc = 100i16;
        assert_eq!(accumulate(threshold + 1, &mut acc, threshold), Ok(true));
        assert_eq!(acc, 111);
        assert_eq!(accumulate(-(threshold + 1), &mut acc, threshold), Ok(true));
        assert_eq!(acc, 100);
    }

    #[test]
    fn accumulate_ignores_noise() {
        let threshold = 10i32;
        let mut acc = 100i32;
        assert_eq!(accumulate(threshold - 1, &mut acc, threshold), Ok(false));
        assert_eq!(accumulate(-(threshold - 1), &mut acc, threshold), Ok(false));
        assert_eq!(accumulate(0, &mut acc, threshold), Ok(false));
        assert_eq!(acc, 100);
    }

    #[test]
    fn accumulate_threshold_is_exclusive() {
        let mut acc = 0i32;
        assert_eq!(accumulate(10, &mut acc, 10), Ok(false));
        assert_eq!(accumulate(-10, &mut acc, 10), Ok(false));
        assert_eq!(acc, 0);
    }

    #[test]
    fn accumulate_at_type_limits() {
        let mut acc = i16::MAX - 5;
        assert_eq!(accumulate(100i16, &mut acc, 10), Err(Error::Overflow));
        assert_eq!(acc, i16::MAX - 5);
        assert_eq!(accumulate(5i16, &mut acc, 4), Ok(true));
        assert_eq!(acc, i16::MAX);

        let mut acc = i16::MIN + 1;
        assert_eq!(accumulate(-20i16, &mut acc, 10), Err(Error::Overflow));
        assert_eq!(acc, i16::MIN + 1);

        // nothing is below the most negative threshold
        let mut acc = 0i16;
        assert_eq!(accumulate(0, &mut acc, i16::MIN), Ok(true));
        assert_eq!(accumulate(-3, &mut acc, i16::MIN), Ok(true));
        assert_eq!(acc, -3);
    }

    #[test]
    fn high_pass_settles() {
        let hpf = HighPass::new(1).unwrap();
        let input = [100u8; 3];
        let mut low = [0i32; 3];
        let mut high = [0i32; 3];

        let expected = [50, 25, 13, 7, 4, 2, 1, 1, 1, 1, 1, 1];
        for step in expected.iter() {
            hpf.apply(&input, &mut low, &mut high).unwrap();
            assert_eq!(high, [*step; 3]);
        }
        assert_eq!(low, [1599; 3]);

        // a step change passes through, then decays
        let input = [120u8; 3];
        hpf.apply(&input, &mut low, &mut high).unwrap();
        assert_eq!(high[0], 11);
        hpf.apply(&input, &mut low, &mut high).unwrap();
        assert_eq!(high[0], 6);
    }

    #[test]
    fn high_pass_negative_input() {
        let hpf = HighPass::new(2).unwrap();
        let input = [-50i16];
        let mut low = [0i32];
        let mut high = [0i32];
        let mut trace = [0i32; 3];
        for slot in trace.iter_mut() {
            hpf.apply(&input, &mut low, &mut high).unwrap();
            *slot = high[0];
        }
        assert_eq!(trace, [-37, -28, -21]);
        assert_eq!(low, [-463]);
    }

    #[test]
    fn high_pass_shapes() {
        assert_eq!(HighPass::new(16), Err(Error::InvalidShift));
        assert!(HighPass::new(HighPass::MAX_SHIFT).is_ok());
        let hpf = HighPass::new(3).unwrap();
        let mut low = [0i32; 2];
        let mut high = [0i32; 3];
        assert_eq!(
            hpf.apply(&[1u8, 2, 3], &mut low, &mut high),
            Err(Error::FrameMismatch)
        );
    }
}
