use crate::shared::error::TevCatError;
use crate::shared::Result;

const VERSION_MARKER: &str = "Version";
const DATA_MARKER: &str = "var dat  =";
const LENGTH_MARKER: &str = "pytevcat";
const LENGTH_PREFIX: &str = "pytevcat = ";

/// The three signals embedded in the TeVCat page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedPayload {
    /// Catalog version shown on the page
    pub version: String,
    /// Base64 text assigned to `dat`
    pub data: String,
    /// Number of leading characters of `data` that hold the payload
    pub length: usize,
}

/// PageScanner service - extracts the embedded payload from the page HTML
///
/// Scans line by line; on each line the first matching marker wins and later
/// lines overwrite earlier values.
pub struct PageScanner;

impl PageScanner {
    /// Scans `html` for the version line, the data line and the length marker.
    ///
    /// # Errors
    /// `TevCatError::MissingMarker` if any of the three is absent or the
    /// length marker does not hold an integer.
    pub fn scan(html: &str) -> Result<EmbeddedPayload> {
        let mut version = None;
        let mut data = None;
        let mut length = None;

        for line in html.lines() {
            if line.contains(VERSION_MARKER) {
                if let Some(token) = line.split_whitespace().last() {
                    version = Some(token.to_string());
                }
            } else if line.contains(DATA_MARKER) {
                if let Some(quoted) = line.split('"').nth(1) {
                    data = Some(quoted.to_string());
                }
            } else if line.contains(LENGTH_MARKER) {
                length = Some(Self::parse_length(line)?);
            }
        }

        let missing = |marker: &str| TevCatError::MissingMarker {
            marker: marker.to_string(),
        };

        Ok(EmbeddedPayload {
            version: version.ok_or_else(|| missing("version"))?,
            data: data.ok_or_else(|| missing("data"))?,
            length: length.ok_or_else(|| missing("length"))?,
        })
    }

    fn parse_length(line: &str) -> Result<usize> {
        line.split(LENGTH_PREFIX)
            .nth(1)
            .and_then(|rest| rest.split(';').next())
            .and_then(|value| value.trim().parse().ok())
            .ok_or_else(|| {
                TevCatError::MissingMarker {
                    marker: "length".to_string(),
                }
                .into()
            })
    }
}
