/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Host-side walk through the estimators: a textured scene drifts
//! a quarter pixel left per frame and is tracked with every
//! stencil/method combination, then integrated into odometry.

use interpolation_flow::filter::LowPass;
use interpolation_flow::line::{bin_to_line, iia_1d, Binning};
use interpolation_flow::odometry::Odometer;
use interpolation_flow::{Error, FlowEstimator, Frame, Method, Scale, Stencil};

const COLS: usize = 12;
const ROWS: usize = 12;
/// sub-pixel steps per pixel
const SUBSTEPS: usize = 4;

/// Smooth texture sampled at `offset` quarter pixels to the right
fn render(offset: usize, frame: &mut [i16; ROWS * COLS]) {
    for r in 0..ROWS {
        for c in 0..COLS {
            let x = (SUBSTEPS * c + offset) as i32;
            let y = r as i32;
            let val = x * x / 8 + 20 * y + 3 * y * y + x * y / 2;
            frame[r * COLS + c] = val as i16;
        }
    }
}

fn main() -> Result<(), Error> {
    let scale = Scale::new(100)?;
    let estimators = [
        FlowEstimator::new(Stencil::Plus, Method::Iia, scale),
        FlowEstimator::new(Stencil::Plus, Method::LucasKanade, scale),
        FlowEstimator::new(Stencil::Square, Method::Iia, scale),
        FlowEstimator::new(Stencil::Square, Method::LucasKanade, scale),
    ];

    let mut prev_px = [0i16; ROWS * COLS];
    let mut curr_px = [0i16; ROWS * COLS];
    let mut odometer = Odometer::new(LowPass::new(0.5)?, 5);

    const FRAME_COUNT: usize = 8;
    render(0, &mut prev_px);
    for step in 1..=FRAME_COUNT {
        render(step, &mut curr_px);
        let prev = Frame::new(&prev_px, ROWS, COLS)?;
        let curr = Frame::new(&curr_px, ROWS, COLS)?;

        for est in estimators.iter() {
            let flow = est.estimate(&curr, &prev)?;
            println!("{:?} {:?}: {:?}", est.stencil, est.method, flow);
        }

        let mut prev_line = [0i32; COLS];
        let mut curr_line = [0i32; COLS];
        bin_to_line(&prev, Binning::Vertical, &mut prev_line)?;
        bin_to_line(&curr, Binning::Vertical, &mut curr_line)?;
        println!("1D: {}", iia_1d(&curr_line, &prev_line, scale)?);

        let flow = estimators[2].estimate(&curr, &prev)?;
        odometer.update(flow)?;
        println!("odometry: {:?}", odometer.position());

        prev_px = curr_px;
    }

    let (x, y) = odometer.position();
    println!(
        "travelled: {:.2}, {:.2} px",
        scale.to_pixels(x),
        scale.to_pixels(y)
    );
    Ok(())
}
