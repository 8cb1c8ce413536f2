/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Fixed-point conventions shared by all estimators.
//!
//! Every estimator returns motion as an integer in which `scale` represents
//! exactly one pixel of displacement. The 2D estimators reduce their window to
//! five gradient sums and solve the resulting 2x2 normal equations in closed form.

use core::convert::TryFrom;
use crate::Error;

#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

/// One pixel of motion is reported as this value by default
pub const DEFAULT_SCALE: i32 = 100;

/// The integer magnitude that corresponds to one pixel of displacement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale(i32);

impl Scale {
    pub fn new(value: i32) -> Result<Self, Error> {
        if value <= 0 {
            return Err(Error::InvalidScale);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Convert a scaled flow value back to pixels
    pub fn to_pixels(self, flow: i32) -> f32 {
        flow as f32 / self.0 as f32
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

/// How the normal equations are turned into a flow vector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Image interpolation algorithm (Srinivasan):
    /// the solution is doubled to account for the two-pixel differential baseline
    Iia,
    /// Classic Lucas-Kanade 2x2 least squares
    LucasKanade,
}

/// Running sums of gradient products over a window.
/// `x` and `y` are the spatial differentials, `t` the temporal one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GradientSums {
    pub xx: i64,
    pub xy: i64,
    pub yy: i64,
    pub tx: i64,
    pub ty: i64,
}

impl GradientSums {
    /// Add the products of one stencil position
    #[inline]
    pub fn add(&mut self, gx: i64, gy: i64, gt: i64) -> Result<(), Error> {
        self.xx = mul_add(self.xx, gx, gx)?;
        self.xy = mul_add(self.xy, gy, gx)?;
        self.yy = mul_add(self.yy, gy, gy)?;
        self.tx = mul_add(self.tx, gt, gx)?;
        self.ty = mul_add(self.ty, gt, gy)?;
        Ok(())
    }

    /// Solve the normal equations for (ofx, ofy), scaled by `scale`
    pub fn solve(&self, method: Method, scale: Scale) -> Result<(i32, i32), Error> {
        let xx = self.xx as i128;
        let xy = self.xy as i128;
        let yy = self.yy as i128;
        let tx = self.tx as i128;
        let ty = self.ty as i128;

        let det = cross(xx, yy, xy, xy)?;
        if det == 0 {
            #[cfg(feature = "rttdebug")]
            rprintln!("singular normal equations: {:?}", self);
            return Err(Error::Degenerate);
        }
        let num_x = cross(tx, yy, ty, xy)?;
        let num_y = cross(xx, ty, tx, xy)?;

        let factor = match method {
            Method::Iia => 2 * scale.value() as i128,
            Method::LucasKanade => scale.value() as i128,
        };
        let ofx = scaled_quotient(num_x, factor, det)?;
        let ofy = scaled_quotient(num_y, factor, det)?;
        Ok((ofx, ofy))
    }
}

#[inline]
pub(crate) fn mul_add(acc: i64, a: i64, b: i64) -> Result<i64, Error> {
    a.checked_mul(b)
        .and_then(|p| acc.checked_add(p))
        .ok_or(Error::Overflow)
}

/// a*b - c*d
fn cross(a: i128, b: i128, c: i128, d: i128) -> Result<i128, Error> {
    let ab = a.checked_mul(b).ok_or(Error::Overflow)?;
    let cd = c.checked_mul(d).ok_or(Error::Overflow)?;
    ab.checked_sub(cd).ok_or(Error::Overflow)
}

/// `numer * factor / denom`, truncated toward zero, narrowed to i32
pub(crate) fn scaled_quotient(numer: i128, factor: i128, denom: i128) -> Result<i32, Error> {
    let quot = numer
        .checked_mul(factor)
        .and_then(|n| n.checked_div(denom))
        .ok_or(Error::Overflow)?;
    i32::try_from(quot).map_err(|_| {
        #[cfg(feature = "rttdebug")]
        rprintln!("flow out of range: {}", quot);
        Error::Overflow
    })
}
