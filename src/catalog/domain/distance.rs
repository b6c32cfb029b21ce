use serde::Serialize;
use std::fmt;

/// Unit tag published alongside a source distance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// No unit given
    Unspecified,
    /// Value is a redshift (`z`)
    Redshift,
    /// Value is in kiloparsec (`kpc`)
    Kiloparsec,
    /// Any other tag, kept as published
    Other(String),
}

impl DistanceUnit {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None => DistanceUnit::Unspecified,
            Some("z") => DistanceUnit::Redshift,
            Some("kpc") => DistanceUnit::Kiloparsec,
            Some(other) => DistanceUnit::Other(other.to_string()),
        }
    }

    /// The tag as published (`None` when unspecified).
    pub fn tag(&self) -> Option<&str> {
        match self {
            DistanceUnit::Unspecified => None,
            DistanceUnit::Redshift => Some("z"),
            DistanceUnit::Kiloparsec => Some("kpc"),
            DistanceUnit::Other(tag) => Some(tag),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, DistanceUnit::Other(_))
    }
}

/// Distance value object: an optional value with its unit tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distance {
    value: Option<f64>,
    unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: Option<f64>, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn unit(&self) -> &DistanceUnit {
        &self.unit
    }
}

/// Renders the summary value: `z = 0.030000`, `2.000000 kpc` or nothing.
impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.unit, self.value) {
            (DistanceUnit::Redshift, Some(z)) => write!(f, "z = {:.6}", z),
            (DistanceUnit::Kiloparsec, Some(d)) => write!(f, "{:.6} kpc", d),
            _ => Ok(()),
        }
    }
}
