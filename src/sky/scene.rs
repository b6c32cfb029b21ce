use super::filter::SourceFilter;
use super::projection::{sky_to_pad, PadPoint};
use crate::catalog::domain::TevCat;
use serde::Serialize;

const MERIDIAN_STEP_DEG: usize = 30;
const PARALLEL_STEP_DEG: usize = 30;
const SAMPLE_STEP_DEG: usize = 2;

/// All-sky background image choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundStyle {
    #[default]
    Color,
    GrayScale,
    InvertedGrayScale,
    Hidden,
}

impl BackgroundStyle {
    /// Resource name of the background image, `None` when hidden.
    pub fn image_name(self) -> Option<&'static str> {
        match self {
            BackgroundStyle::Color => Some("allsky_b.png"),
            BackgroundStyle::GrayScale => Some("allsky_gray.png"),
            BackgroundStyle::InvertedGrayScale => Some("allsky_gray_inv.png"),
            BackgroundStyle::Hidden => None,
        }
    }

    /// Ink used for the graticule and name labels on this background.
    pub fn ink(self) -> Ink {
        match self {
            BackgroundStyle::InvertedGrayScale => Ink::White,
            _ => Ink::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ink {
    Black,
    White,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub at: PadPoint,
}

impl Label {
    fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            at: PadPoint::new(x, y),
        }
    }
}

/// One plotted source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub source_id: i64,
    pub name: String,
    pub at: PadPoint,
}

/// Markers sharing a source type; the series order is the legend order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSeries {
    pub source_type_name: String,
    pub color: u32,
    pub style: u32,
    pub markers: Vec<Marker>,
}

/// Background layer: image, graticule, axis labels and version caption
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Backdrop {
    pub image: Option<&'static str>,
    pub ink: Ink,
    pub graticule: Vec<Vec<PadPoint>>,
    pub axis_labels: Vec<Label>,
    pub caption: Label,
}

impl Backdrop {
    pub fn build(style: BackgroundStyle, version: &str) -> Self {
        Self {
            image: style.image_name(),
            ink: style.ink(),
            graticule: graticule(),
            axis_labels: vec![
                Label::new("-180°", 0.975, 0.5),
                Label::new("+180°", 0.025, 0.5),
                Label::new("+90°", 0.5, 0.98),
                Label::new("-90°", 0.5, 0.02),
            ],
            caption: Label::new(format!("TeVCat Ver. {}", version), 0.99, 0.01),
        }
    }
}

/// Source layer: markers grouped by type plus optional name labels
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SourceLayer {
    pub series: Vec<MarkerSeries>,
    pub name_labels: Vec<Label>,
}

impl SourceLayer {
    pub fn build(tevcat: &TevCat, filter: &SourceFilter, show_names: bool) -> Self {
        let mut layer = SourceLayer::default();

        for source in filter.apply(tevcat) {
            let galactic = source.galactic();
            let at = sky_to_pad(galactic.l(), galactic.b());

            let index = match layer
                .series
                .iter()
                .position(|s| s.source_type_name == source.source_type_name())
            {
                Some(index) => index,
                None => {
                    let index = layer.series.len();
                    layer.series.push(MarkerSeries {
                        source_type_name: source.source_type_name().to_string(),
                        color: index as u32 / 4 + 2,
                        style: 20 + index as u32 % 10,
                        markers: Vec::new(),
                    });
                    index
                }
            };
            layer.series[index].markers.push(Marker {
                source_id: source.id(),
                name: source.canonical_name().to_string(),
                at,
            });

            if show_names {
                layer.name_labels.push(Label {
                    text: source.canonical_name().to_string(),
                    at,
                });
            }
        }

        layer
    }

    /// Legend entries in display order.
    pub fn legend(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.source_type_name.as_str())
    }

    pub fn marker_count(&self) -> usize {
        self.series.iter().map(|s| s.markers.len()).sum()
    }
}

/// Complete sky map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyScene {
    pub backdrop: Backdrop,
    pub sources: SourceLayer,
}

impl SkyScene {
    pub fn build(
        tevcat: &TevCat,
        filter: &SourceFilter,
        style: BackgroundStyle,
        show_names: bool,
    ) -> Self {
        Self {
            backdrop: Backdrop::build(style, tevcat.version()),
            sources: SourceLayer::build(tevcat, filter, show_names),
        }
    }
}

/// Meridians every 30° of longitude followed by parallels every 30° of
/// latitude between -60° and +60°, sampled every 2°.
fn graticule() -> Vec<Vec<PadPoint>> {
    let meridians = (-180..=180).step_by(MERIDIAN_STEP_DEG).map(|l| {
        (-90..=90)
            .step_by(SAMPLE_STEP_DEG)
            .map(|b| sky_to_pad(f64::from(l), f64::from(b)))
            .collect::<Vec<_>>()
    });
    let parallels = (-60..=60).step_by(PARALLEL_STEP_DEG).map(|b| {
        (-180..=180)
            .step_by(SAMPLE_STEP_DEG)
            .map(|l| sky_to_pad(f64::from(l), f64::from(b)))
            .collect::<Vec<_>>()
    });

    meridians.chain(parallels).collect()
}
