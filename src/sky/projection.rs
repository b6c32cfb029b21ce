//! Hammer-Aitoff projection of galactic coordinates onto the sky-map pad.
//!
//! The pad is the unit square holding the 1440 x 720 all-sky image
//! (CDELT1 = -0.25, CDELT2 = +0.25). Longitude increases to the left, the
//! galactic centre sits at (0.5, 0.5) and the projected ellipse spans
//! `[(1 - c) / 2, (1 + c) / 2]` on both axes with `c = 2 * sqrt(2) / pi`.

use serde::Serialize;
use std::f64::consts::{PI, SQRT_2};

/// Pad width in pixels of the all-sky image
pub const PAD_WIDTH_PX: u32 = 1440;
/// Pad height in pixels of the all-sky image
pub const PAD_HEIGHT_PX: u32 = 720;

const ELLIPSE_SCALE: f64 = SQRT_2 * 2.0 / PI;
const ELLIPSE_OFFSET: f64 = (1.0 - ELLIPSE_SCALE) / 2.0;

/// Normalised pad position, `(0, 0)` bottom-left and `(1, 1)` top-right
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PadPoint {
    pub x: f64,
    pub y: f64,
}

impl PadPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Centre of pixel `(px, py)` counted from the bottom-left corner.
    pub fn from_pixel(px: u32, py: u32) -> Self {
        Self {
            x: (f64::from(px) + 0.5) / f64::from(PAD_WIDTH_PX),
            y: (f64::from(py) + 0.5) / f64::from(PAD_HEIGHT_PX),
        }
    }
}

/// Projects galactic `(l, b)` in degrees onto the pad.
///
/// Longitudes outside `[-180, 180]` are folded into `(-180, 180]` first, so
/// `l` and `l - 360` land on the same point. Non-finite input yields a NaN
/// point.
pub fn sky_to_pad(l_deg: f64, b_deg: f64) -> PadPoint {
    if !l_deg.is_finite() || !b_deg.is_finite() {
        return PadPoint::new(f64::NAN, f64::NAN);
    }
    let l = fold_longitude(l_deg);

    let theta = b_deg.to_radians();
    let phi = l.to_radians();
    let gamma = (1.0 + theta.cos() * (phi / 2.0).cos()).powf(-0.5);
    let x_ = 2.0 * gamma * theta.cos() * (phi / 2.0).sin();
    let y_ = gamma * theta.sin();

    PadPoint {
        x: (-x_ + 2.0) / 4.0 * ELLIPSE_SCALE + ELLIPSE_OFFSET,
        y: (y_ + 1.0) / 2.0 * ELLIPSE_SCALE + ELLIPSE_OFFSET,
    }
}

/// -180 stays on the right edge; anything folded onto it goes left.
fn fold_longitude(l_deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&l_deg) {
        return l_deg;
    }
    let l = (l_deg + 180.0).rem_euclid(360.0) - 180.0;
    if l <= -180.0 {
        180.0
    } else {
        l
    }
}

/// Inverse of [`sky_to_pad`]: galactic `(l, b)` in degrees, `l` in
/// `[-180, 180]`.
///
/// Returns `None` for pad points outside the projected ellipse.
pub fn pad_to_sky(x: f64, y: f64) -> Option<(f64, f64)> {
    let x_ = -((x - ELLIPSE_OFFSET) / ELLIPSE_SCALE * 4.0 - 2.0);
    let y_ = (y - ELLIPSE_OFFSET) * 2.0 / ELLIPSE_SCALE - 1.0;

    if !x_.is_finite() || !y_.is_finite() || x_ * x_ / 4.0 + y_ * y_ > 1.0 {
        return None;
    }

    let z = (2.0 - x_ * x_ / 4.0 - y_ * y_).sqrt();
    let theta = (y_ * z).clamp(-1.0, 1.0).asin();
    let cos_theta = theta.cos();
    let phi = if cos_theta <= f64::EPSILON {
        0.0
    } else {
        2.0 * (x_ * z / (2.0 * cos_theta)).clamp(-1.0, 1.0).asin()
    };

    Some((phi.to_degrees(), theta.to_degrees()))
}
