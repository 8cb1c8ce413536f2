/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Optical flow odometry: low-pass each axis of the flow stream and
//! integrate only the filtered motion that rises above a noise threshold.

use crate::filter::{accumulate, LowPass};
use crate::Error;

/// Filter state and integrated displacement for a two axis flow stream
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Odometer {
    low_pass: LowPass,
    threshold: i32,
    filtered: (i32, i32),
    position: (i32, i32),
}

impl Odometer {
    /// `threshold` is in the same scaled units as the flow fed to `update`
    pub fn new(low_pass: LowPass, threshold: i32) -> Self {
        Self {
            low_pass,
            threshold,
            filtered: (0, 0),
            position: (0, 0),
        }
    }

    /// Feed one flow estimate, returns which axes moved the position.
    /// If either axis would overflow the position is left as it was.
    pub fn update(&mut self, flow: (i32, i32)) -> Result<(bool, bool), Error> {
        self.low_pass.apply(&mut self.filtered.0, flow.0);
        self.low_pass.apply(&mut self.filtered.1, flow.1);
        let mut position = self.position;
        let fired_x = accumulate(self.filtered.0, &mut position.0, self.threshold)?;
        let fired_y = accumulate(self.filtered.1, &mut position.1, self.threshold)?;
        self.position = position;
        Ok((fired_x, fired_y))
    }

    pub fn filtered(&self) -> (i32, i32) {
        self.filtered
    }

    /// Integrated displacement, in scaled flow units
    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn reset(&mut self) {
        self.filtered = (0, 0);
        self.position = (0, 0);
    }
}
