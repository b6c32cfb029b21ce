//! Celestial positions and the frame conversions used by the catalog.
//!
//! Source positions are published as FK5 (J2000) sexagesimal text. The galactic
//! position is derived once when a source is built; ICRS and FK4 (B1950) are
//! re-projected on demand. All conversions are fixed rotations of the unit
//! vector, plus the E-terms of aberration for FK4.

use crate::shared::error::TevCatError;
use crate::shared::Result;
use serde::Serialize;
use std::fmt;

type Matrix3 = [[f64; 3]; 3];

/// North galactic pole and the galactic longitude of the north celestial
/// pole, both in FK5 J2000.
const NGP_RA_DEG: f64 = 192.85948;
const NGP_DEC_DEG: f64 = 27.12825;
const NCP_GALACTIC_LON_DEG: f64 = 122.932;

/// FK5 J2000 <-> ICRS frame bias (milliarcseconds).
const ICRS_ETA0_MAS: f64 = -19.9;
const ICRS_XI0_MAS: f64 = 9.1;
const ICRS_DA0_MAS: f64 = -22.9;

/// FK4 B1950 -> FK5 J2000 for positions with no proper motion.
#[allow(clippy::excessive_precision)]
const B1950_TO_J2000: Matrix3 = [
    [0.9999256794956877, -0.0111814832204662, -0.0048590038153592],
    [0.0111814832391717, 0.9999374848933135, -0.0000271625947142],
    [0.0048590037723143, -0.0000271702937440, 0.9999881946023742],
];

/// E-terms of aberration at B1950 (radians).
const FK4_E_TERMS: [f64; 3] = [-1.62557e-6, -0.31919e-6, -0.13843e-6];

/// Equatorial reference frame of an [`EquatorialPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EquatorialFrame {
    /// FK5, equinox J2000. The frame TeVCat publishes positions in.
    Fk5,
    Icrs,
    /// FK4, equinox B1950, E-terms included.
    Fk4,
}

impl fmt::Display for EquatorialFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquatorialFrame::Fk5 => write!(f, "FK5 (J2000)"),
            EquatorialFrame::Icrs => write!(f, "ICRS"),
            EquatorialFrame::Fk4 => write!(f, "FK4 (B1950)"),
        }
    }
}

/// Right ascension / declination in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquatorialPosition {
    frame: EquatorialFrame,
    ra_deg: f64,
    dec_deg: f64,
}

impl EquatorialPosition {
    /// Creates an FK5 (J2000) position from degrees.
    pub fn fk5(ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            frame: EquatorialFrame::Fk5,
            ra_deg: ra_deg.rem_euclid(360.0),
            dec_deg,
        }
    }

    /// Parses an FK5 (J2000) position from sexagesimal text, e.g.
    /// `"05 34 31.9"` (hours) and `"+22 00 52"` (degrees).
    pub fn from_sexagesimal(ra: &str, dec: &str) -> Result<Self> {
        let ra_hours = parse_sexagesimal(ra)?;
        let dec_deg = parse_sexagesimal(dec)?;

        if !(0.0..24.0).contains(&ra_hours) {
            return Err(TevCatError::InvalidCoordinate {
                value: ra.to_string(),
                reason: "right ascension must be within [0h, 24h)".to_string(),
            }
            .into());
        }
        if !(-90.0..=90.0).contains(&dec_deg) {
            return Err(TevCatError::InvalidCoordinate {
                value: dec.to_string(),
                reason: "declination must be within [-90°, +90°]".to_string(),
            }
            .into());
        }

        Ok(Self::fk5(ra_hours * 15.0, dec_deg))
    }

    pub fn frame(&self) -> EquatorialFrame {
        self.frame
    }

    pub fn ra(&self) -> f64 {
        self.ra_deg
    }

    pub fn dec(&self) -> f64 {
        self.dec_deg
    }

    /// Converts to ICRS. Only valid on FK5 positions; other frames are
    /// returned unchanged when already ICRS.
    pub fn to_icrs(&self) -> Self {
        match self.frame {
            EquatorialFrame::Icrs => *self,
            _ => {
                let fk5 = self.to_fk5();
                let v = transpose_mul(&icrs_to_fk5(), &unit_vector(fk5.ra_deg, fk5.dec_deg));
                let (ra, dec) = spherical(&v);
                Self {
                    frame: EquatorialFrame::Icrs,
                    ra_deg: ra,
                    dec_deg: dec,
                }
            }
        }
    }

    /// Converts to FK4 (B1950), adding the E-terms of aberration.
    pub fn to_fk4(&self) -> Self {
        if self.frame == EquatorialFrame::Fk4 {
            return *self;
        }
        let fk5 = self.to_fk5();
        let r0 = transpose_mul(&B1950_TO_J2000, &unit_vector(fk5.ra_deg, fk5.dec_deg));

        let mut r = r0;
        for _ in 0..10 {
            let dot = dot(&FK4_E_TERMS, &r);
            r = [
                (FK4_E_TERMS[0] + r0[0]) / (1.0 + dot),
                (FK4_E_TERMS[1] + r0[1]) / (1.0 + dot),
                (FK4_E_TERMS[2] + r0[2]) / (1.0 + dot),
            ];
        }

        let (ra, dec) = spherical(&r);
        Self {
            frame: EquatorialFrame::Fk4,
            ra_deg: ra,
            dec_deg: dec,
        }
    }

    /// Converts back to FK5 (J2000).
    pub fn to_fk5(&self) -> Self {
        match self.frame {
            EquatorialFrame::Fk5 => *self,
            EquatorialFrame::Icrs => {
                let v = mul(&icrs_to_fk5(), &unit_vector(self.ra_deg, self.dec_deg));
                let (ra, dec) = spherical(&v);
                Self::fk5(ra, dec)
            }
            EquatorialFrame::Fk4 => {
                let r1 = unit_vector(self.ra_deg, self.dec_deg);
                // Remove the E-terms before rotating.
                let d = dot(&FK4_E_TERMS, &r1);
                let r = [
                    r1[0] - FK4_E_TERMS[0] + d * r1[0],
                    r1[1] - FK4_E_TERMS[1] + d * r1[1],
                    r1[2] - FK4_E_TERMS[2] + d * r1[2],
                ];
                let v = mul(&B1950_TO_J2000, &normalize(&r));
                let (ra, dec) = spherical(&v);
                Self::fk5(ra, dec)
            }
        }
    }

    /// Galactic position of this point.
    pub fn to_galactic(&self) -> GalacticPosition {
        let fk5 = self.to_fk5();
        let v = mul(&fk5_to_galactic(), &unit_vector(fk5.ra_deg, fk5.dec_deg));
        let (l, b) = spherical(&v);
        GalacticPosition::new(l, b)
    }

    /// Right ascension and declination as `("HHhMMmSS.SSs", "±DDdMMmSS.SSs")`.
    pub fn hms_dms(&self) -> (String, String) {
        let (h, m, s) = split_sexagesimal(self.ra_deg / 15.0);
        let ra = format!("{:02}h{:02}m{:05.2}s", h, m, s);

        let sign = if self.dec_deg < 0.0 { '-' } else { '+' };
        let (d, m, s) = split_sexagesimal(self.dec_deg.abs());
        let dec = format!("{}{:02}d{:02}m{:05.2}s", sign, d, m, s);

        (ra, dec)
    }

    /// `hms_dms()` joined by a single space.
    pub fn hmsdms(&self) -> String {
        let (ra, dec) = self.hms_dms();
        format!("{} {}", ra, dec)
    }
}

impl fmt::Display for EquatorialPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: RA {:.4}°, Dec {:+.4}°",
            self.frame, self.ra_deg, self.dec_deg
        )
    }
}

/// Galactic longitude / latitude in degrees, longitude in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GalacticPosition {
    l_deg: f64,
    b_deg: f64,
}

impl GalacticPosition {
    pub fn new(l_deg: f64, b_deg: f64) -> Self {
        Self {
            l_deg: l_deg.rem_euclid(360.0),
            b_deg,
        }
    }

    pub fn l(&self) -> f64 {
        self.l_deg
    }

    pub fn b(&self) -> f64 {
        self.b_deg
    }

    /// Great-circle distance to `other` in degrees.
    pub fn angular_separation(&self, other: &Self) -> f64 {
        let (sin_b1, cos_b1) = self.b_deg.to_radians().sin_cos();
        let (sin_b2, cos_b2) = other.b_deg.to_radians().sin_cos();
        let delta_l = (other.l_deg - self.l_deg).to_radians();

        vincenty_angular_separation(sin_b1, cos_b1, sin_b2, cos_b2, delta_l).to_degrees()
    }

    /// Back to FK5 (J2000).
    pub fn to_fk5(&self) -> EquatorialPosition {
        let v = transpose_mul(&fk5_to_galactic(), &unit_vector(self.l_deg, self.b_deg));
        let (ra, dec) = spherical(&v);
        EquatorialPosition::fk5(ra, dec)
    }
}

impl fmt::Display for GalacticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l={:.4}°, b={:+.4}°", self.l_deg, self.b_deg)
    }
}

/// Angular separation (radians) between two points given the sines and
/// cosines of their latitudes and the longitude difference. Stable for
/// both tiny and antipodal separations.
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = delta_lon.sin_cos();

    let num = ((cos_lat2 * sin_delta_lon).powi(2)
        + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2))
    .sqrt();
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    num.atan2(den)
}

/// Parses whitespace-separated sexagesimal text (`"DD MM SS.s"`, one to three
/// components) into a signed decimal value in the unit of the first component.
fn parse_sexagesimal(text: &str) -> Result<f64> {
    let invalid = |reason: &str| TevCatError::InvalidCoordinate {
        value: text.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = text.trim();
    let (negative, rest) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('\u{2212}') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let parts: Vec<&str> = rest
        .split(|c: char| c.is_whitespace() || c == ':')
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() || parts.len() > 3 {
        return Err(invalid("expected one to three sexagesimal components").into());
    }

    let mut value = 0.0;
    let mut scale = 1.0;
    for (i, part) in parts.iter().enumerate() {
        if part.starts_with(['+', '-']) {
            return Err(invalid("sign is only allowed before the first component").into());
        }
        let component: f64 = part
            .parse()
            .map_err(|_| invalid(&format!("'{}' is not a number", part)))?;
        if i > 0 && !(0.0..60.0).contains(&component) {
            return Err(invalid("minutes and seconds must be within [0, 60)").into());
        }
        value += component / scale;
        scale *= 60.0;
    }

    Ok(if negative { -value } else { value })
}

/// Splits a non-negative decimal value into whole units, minutes and seconds,
/// rounding seconds to hundredths without producing `60.00`.
fn split_sexagesimal(value: f64) -> (u32, u32, f64) {
    let hundredths = (value * 360_000.0).round() as u64;
    let units = hundredths / 360_000;
    let minutes = (hundredths % 360_000) / 6_000;
    let seconds = (hundredths % 6_000) as f64 / 100.0;
    (units as u32, minutes as u32, seconds)
}

fn fk5_to_galactic() -> Matrix3 {
    mat_mul(
        &mat_mul(
            &rotation(180.0 - NCP_GALACTIC_LON_DEG, Axis::Z),
            &rotation(90.0 - NGP_DEC_DEG, Axis::Y),
        ),
        &rotation(NGP_RA_DEG, Axis::Z),
    )
}

fn icrs_to_fk5() -> Matrix3 {
    let mas = 1.0 / 3.6e6;
    mat_mul(
        &mat_mul(
            &rotation(-ICRS_ETA0_MAS * mas, Axis::X),
            &rotation(ICRS_XI0_MAS * mas, Axis::Y),
        ),
        &rotation(ICRS_DA0_MAS * mas, Axis::Z),
    )
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
    Z,
}

/// Frame rotation by `angle_deg` about `axis`.
fn rotation(angle_deg: f64, axis: Axis) -> Matrix3 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    match axis {
        Axis::X => [[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]],
        Axis::Y => [[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]],
        Axis::Z => [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]],
    }
}

fn mat_mul(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

fn mul(m: &Matrix3, v: &[f64; 3]) -> [f64; 3] {
    [dot(&m[0], v), dot(&m[1], v), dot(&m[2], v)]
}

fn transpose_mul(m: &Matrix3, v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[1][0] * v[1] + m[2][0] * v[2],
        m[0][1] * v[0] + m[1][1] * v[1] + m[2][1] * v[2],
        m[0][2] * v[0] + m[1][2] * v[1] + m[2][2] * v[2],
    ]
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn normalize(v: &[f64; 3]) -> [f64; 3] {
    let n = dot(v, v).sqrt();
    [v[0] / n, v[1] / n, v[2] / n]
}

fn unit_vector(lon_deg: f64, lat_deg: f64) -> [f64; 3] {
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
}

/// Longitude in [0, 360) and latitude of a vector, in degrees.
fn spherical(v: &[f64; 3]) -> (f64, f64) {
    let d2 = v[0] * v[0] + v[1] * v[1];
    let lon = if d2 != 0.0 { v[1].atan2(v[0]) } else { 0.0 };
    let lat = if d2 != 0.0 || v[2] != 0.0 {
        v[2].atan2(d2.sqrt())
    } else {
        0.0
    };
    (lon.to_degrees().rem_euclid(360.0), lat.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn crab() -> EquatorialPosition {
        EquatorialPosition::from_sexagesimal("05 34 31.9", "+22 00 52").unwrap()
    }

    #[test]
    fn test_parse_crab_position() {
        let pos = crab();
        assert_eq!(pos.frame(), EquatorialFrame::Fk5);
        assert_abs_diff_eq!(pos.ra(), 83.63, epsilon = 0.01);
        assert_abs_diff_eq!(pos.dec(), 22.01, epsilon = 0.01);
    }

    #[test]
    fn test_parse_negative_declination_with_zero_degrees() {
        let pos = EquatorialPosition::from_sexagesimal("12 00 00", "-00 30 00").unwrap();
        assert_abs_diff_eq!(pos.ra(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.dec(), -0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_tolerates_trailing_space_and_unicode_minus() {
        let pos = EquatorialPosition::from_sexagesimal("17 45 39.6 ", "\u{2212}29 00 22 ").unwrap();
        assert_abs_diff_eq!(pos.ra(), 266.415, epsilon = 1e-3);
        assert_abs_diff_eq!(pos.dec(), -29.00611, epsilon = 1e-4);
    }

    #[test]
    fn test_parse_two_components() {
        let pos = EquatorialPosition::from_sexagesimal("01 30", "+45 15").unwrap();
        assert_abs_diff_eq!(pos.ra(), 22.5, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.dec(), 45.25, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(EquatorialPosition::from_sexagesimal("05 xx 31.9", "+22 00 52").is_err());
        assert!(EquatorialPosition::from_sexagesimal("", "+22 00 52").is_err());
        assert!(EquatorialPosition::from_sexagesimal("05 34 31.9", "+22 75 00").is_err());
        assert!(EquatorialPosition::from_sexagesimal("25 00 00", "+22 00 00").is_err());
        assert!(EquatorialPosition::from_sexagesimal("05 34 31.9", "+95 00 00").is_err());
    }

    #[test]
    fn test_parse_error_is_invalid_coordinate() {
        let err = EquatorialPosition::from_sexagesimal("05 34 31.9", "north").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TevCatError>(),
            Some(TevCatError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_crab_galactic() {
        let gal = crab().to_galactic();
        assert_abs_diff_eq!(gal.l(), 184.557, epsilon = 0.01);
        assert_abs_diff_eq!(gal.b(), -5.784, epsilon = 0.01);
    }

    #[test]
    fn test_galactic_center_round_trip() {
        let gc = GalacticPosition::new(0.0, 0.0).to_fk5();
        assert_abs_diff_eq!(gc.ra(), 266.405, epsilon = 0.01);
        assert_abs_diff_eq!(gc.dec(), -28.936, epsilon = 0.01);

        let back = gc.to_galactic();
        assert_abs_diff_eq!(back.b(), 0.0, epsilon = 1e-9);
        let l = if back.l() > 180.0 { back.l() - 360.0 } else { back.l() };
        assert_abs_diff_eq!(l, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_crab_fk4() {
        let fk4 = crab().to_fk4();
        assert_eq!(fk4.frame(), EquatorialFrame::Fk4);
        assert_abs_diff_eq!(fk4.ra(), 82.8807, epsilon = 0.01);
        assert_abs_diff_eq!(fk4.dec(), 21.9818, epsilon = 0.01);
    }

    #[test]
    fn test_fk4_round_trip() {
        let back = crab().to_fk4().to_fk5();
        assert_abs_diff_eq!(back.ra(), crab().ra(), epsilon = 1e-7);
        assert_abs_diff_eq!(back.dec(), crab().dec(), epsilon = 1e-7);
    }

    #[test]
    fn test_icrs_differs_by_milliarcseconds() {
        let icrs = crab().to_icrs();
        assert_eq!(icrs.frame(), EquatorialFrame::Icrs);
        assert!((icrs.ra() - crab().ra()).abs() < 1e-4);
        assert!((icrs.dec() - crab().dec()).abs() < 1e-4);

        let back = icrs.to_fk5();
        assert_abs_diff_eq!(back.ra(), crab().ra(), epsilon = 1e-10);
    }

    #[test]
    fn test_hms_dms_formatting() {
        let (ra, dec) = crab().hms_dms();
        assert_eq!(ra, "05h34m31.90s");
        assert_eq!(dec, "+22d00m52.00s");
        assert_eq!(crab().hmsdms(), "05h34m31.90s +22d00m52.00s");
    }

    #[test]
    fn test_hms_dms_rounding_carries() {
        let pos = EquatorialPosition::fk5(14.999_999_999, -0.999_999_999);
        let (ra, dec) = pos.hms_dms();
        assert_eq!(ra, "01h00m00.00s");
        assert_eq!(dec, "-01d00m00.00s");
    }

    #[test]
    fn test_angular_separation() {
        let a = GalacticPosition::new(0.0, 0.0);
        let b = GalacticPosition::new(90.0, 0.0);
        assert_abs_diff_eq!(a.angular_separation(&b), 90.0, epsilon = 1e-9);

        let c = GalacticPosition::new(359.0, 0.0);
        assert_abs_diff_eq!(a.angular_separation(&c), 1.0, epsilon = 1e-9);

        let pole = GalacticPosition::new(123.0, 90.0);
        assert_abs_diff_eq!(a.angular_separation(&pole), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_galactic_longitude_is_wrapped() {
        let pos = GalacticPosition::new(-10.0, 5.0);
        assert_abs_diff_eq!(pos.l(), 350.0, epsilon = 1e-12);
    }
}
