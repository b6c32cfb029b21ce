use crate::shared::Result;
use std::fmt;

/// First and last discovery year considered plausible for a TeV source.
pub const FIRST_DISCOVERY_YEAR: u32 = 1987;
pub const LAST_DISCOVERY_YEAR: u32 = 2020;

/// NewType wrapper for a discovery date encoded as `YYYYMM`
///
/// A month of `00` means the month was not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscoveryDate(u32);

impl DiscoveryDate {
    pub fn new(yyyymm: u32) -> Self {
        Self(yyyymm)
    }

    /// Parses the published `YYYY/MM` text (or a bare `YYYYMM` number).
    pub fn parse(text: &str) -> Result<Self> {
        let digits: String = text.trim().chars().filter(|c| *c != '/').collect();
        let value: u32 = digits
            .parse()
            .map_err(|_| anyhow::anyhow!("'{}' is not a YYYY/MM date", text))?;
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn year(&self) -> u32 {
        self.0 / 100
    }

    /// Month 1-12, or `None` when the month was not recorded.
    pub fn month(&self) -> Option<u32> {
        match self.0 % 100 {
            0 => None,
            m => Some(m),
        }
    }

    /// True when the month is 0-12 and the year lies within
    /// [`FIRST_DISCOVERY_YEAR`, `LAST_DISCOVERY_YEAR`].
    pub fn is_plausible(&self) -> bool {
        self.0 % 100 <= 12 && (FIRST_DISCOVERY_YEAR..=LAST_DISCOVERY_YEAR).contains(&self.year())
    }
}

impl fmt::Display for DiscoveryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month() {
            Some(month) => write!(f, "{:04}-{:02}", self.year(), month),
            None => write!(f, "{:04}", self.year()),
        }
    }
}
