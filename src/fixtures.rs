/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Frame pairs shared by the estimator tests

pub const FRAME_16_DIM: usize = 4;

/// 8c + 2r^3 + 20
pub const FRAME_16: [u8; FRAME_16_DIM * FRAME_16_DIM] = [
    20, 28, 36, 44,
    22, 30, 38, 46,
    36, 44, 52, 60,
    74, 82, 90, 98 ];

/// FRAME_16 moved one column left: curr(r, c) = prev(r, c + 1)
pub const FRAME_16_SHIFT_N1_0: [u8; FRAME_16_DIM * FRAME_16_DIM] = [
    28, 36, 44, 52,
    30, 38, 46, 54,
    44, 52, 60, 68,
    82, 90, 98, 106 ];

/// FRAME_16 moved half a column left
pub const FRAME_16_SHIFT_NHALF_0: [u8; FRAME_16_DIM * FRAME_16_DIM] = [
    24, 32, 40, 48,
    26, 34, 42, 50,
    40, 48, 56, 64,
    78, 86, 94, 102 ];

/// 8r + 2c^3 + 20
pub const FRAME_16_T: [u8; FRAME_16_DIM * FRAME_16_DIM] = [
    20, 22, 36, 74,
    28, 30, 44, 82,
    36, 38, 52, 90,
    44, 46, 60, 98 ];

/// FRAME_16_T moved one row up: curr(r, c) = prev(r + 1, c)
pub const FRAME_16_T_SHIFT_0_N1: [u8; FRAME_16_DIM * FRAME_16_DIM] = [
    28, 30, 44, 82,
    36, 38, 52, 90,
    44, 46, 60, 98,
    52, 54, 68, 106 ];

/// 10c + 7r: gradient everywhere along the same direction
pub const FRAME_25_RAMP: [u8; 25] = [
    0, 10, 20, 30, 40,
    7, 17, 27, 37, 47,
    14, 24, 34, 44, 54,
    21, 31, 41, 51, 61,
    28, 38, 48, 58, 68 ];

pub const FRAME_64_DIM: usize = 8;

/// x^2 + 30r + 5r^2 + xr sampled at x = 2c + offset
fn curved(offset: usize) -> [i16; FRAME_64_DIM * FRAME_64_DIM] {
    let mut frame = [0i16; FRAME_64_DIM * FRAME_64_DIM];
    for r in 0..FRAME_64_DIM {
        for c in 0..FRAME_64_DIM {
            let x = (2 * c + offset) as i16;
            let y = r as i16;
            frame[r * FRAME_64_DIM + c] = x * x + 30 * y + 5 * y * y + x * y;
        }
    }
    frame
}

/// Curved 16-bit texture
pub fn curved_frame() -> [i16; FRAME_64_DIM * FRAME_64_DIM] {
    curved(0)
}

/// The curved texture moved half a column left
pub fn curved_frame_half_left() -> [i16; FRAME_64_DIM * FRAME_64_DIM] {
    curved(1)
}

/// Place a 4x4 frame at (1, 1) of a 6x6 buffer with a noisy border
pub fn embed_16(frame: &[u8; 16]) -> [u8; 36] {
    let mut buf = [0u8; 36];
    for (i, px) in buf.iter_mut().enumerate() {
        *px = ((i * 37) % 251) as u8;
    }
    for r in 0..FRAME_16_DIM {
        let start = (r + 1) * 6 + 1;
        buf[start..start + FRAME_16_DIM]
            .copy_from_slice(&frame[r * FRAME_16_DIM..(r + 1) * FRAME_16_DIM]);
    }
    buf
}
