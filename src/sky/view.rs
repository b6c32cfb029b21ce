use super::filter::SourceFilter;
use super::projection::{pad_to_sky, PadPoint, PAD_HEIGHT_PX, PAD_WIDTH_PX};
use super::scene::{Backdrop, BackgroundStyle, SkyScene, SourceLayer};
use super::separation::{nearest_source, DEFAULT_SEARCH_RADIUS_DEG};
use crate::catalog::domain::TevCat;
use serde::Serialize;

/// Side of the zoom inset in pixels; the inset shows a quarter of it around
/// the cursor.
const ZOOM_INSET_PX: u32 = 300;

/// User interaction on the sky map
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    SearchChanged(String),
    CatalogToggled { name: String, enabled: bool },
    NamesToggled(bool),
    BackgroundChanged(BackgroundStyle),
    /// Pointer position in pad pixels, origin bottom-left.
    CursorMoved { px: u32, py: u32 },
}

/// Which part of the view an event rebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Backdrop, markers and legend
    Full,
    /// Markers and legend only
    Sources,
    /// Info panel and zoom inset only
    Info,
}

/// Pad region shown magnified around the cursor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomWindow {
    pub min: PadPoint,
    pub max: PadPoint,
}

/// The single mutable record behind the sky map
///
/// Every event is applied synchronously and rebuilds exactly the part of the
/// scene it affects.
#[derive(Debug, Clone)]
pub struct ViewState {
    filter: SourceFilter,
    show_names: bool,
    background: BackgroundStyle,
    search_radius_deg: f64,
    scene: SkyScene,
    info: String,
    zoom: Option<ZoomWindow>,
}

impl ViewState {
    /// Opens the map with the default filter, colour background and no names.
    pub fn new(tevcat: &TevCat) -> Self {
        Self::with_filter(tevcat, SourceFilter::default(), DEFAULT_SEARCH_RADIUS_DEG)
    }

    pub fn with_filter(tevcat: &TevCat, filter: SourceFilter, search_radius_deg: f64) -> Self {
        let background = BackgroundStyle::default();
        let show_names = false;
        Self {
            scene: SkyScene::build(tevcat, &filter, background, show_names),
            filter,
            show_names,
            background,
            search_radius_deg,
            info: String::new(),
            zoom: None,
        }
    }

    pub fn handle(&mut self, tevcat: &TevCat, event: ViewEvent) -> Redraw {
        match event {
            ViewEvent::SearchChanged(text) => {
                self.filter.set_search(&text);
                self.redraw_sources(tevcat)
            }
            ViewEvent::CatalogToggled { name, enabled } => {
                self.filter.set_enabled(&name, enabled);
                self.redraw_sources(tevcat)
            }
            ViewEvent::NamesToggled(show) => {
                self.show_names = show;
                self.redraw_all(tevcat)
            }
            ViewEvent::BackgroundChanged(style) => {
                self.background = style;
                self.redraw_all(tevcat)
            }
            ViewEvent::CursorMoved { px, py } => {
                self.update_info(tevcat, px, py);
                Redraw::Info
            }
        }
    }

    fn redraw_all(&mut self, tevcat: &TevCat) -> Redraw {
        self.scene.backdrop = Backdrop::build(self.background, tevcat.version());
        self.scene.sources = SourceLayer::build(tevcat, &self.filter, self.show_names);
        Redraw::Full
    }

    fn redraw_sources(&mut self, tevcat: &TevCat) -> Redraw {
        self.scene.sources = SourceLayer::build(tevcat, &self.filter, self.show_names);
        Redraw::Sources
    }

    fn update_info(&mut self, tevcat: &TevCat, px: u32, py: u32) {
        self.zoom = self.background.image_name().map(|_| zoom_window(px, py));

        let cursor = PadPoint::from_pixel(px, py);
        self.info = pad_to_sky(cursor.x, cursor.y)
            .and_then(|(l, b)| {
                nearest_source(self.filter.apply(tevcat), l, b, self.search_radius_deg)
            })
            .map(|found| plain_text(&found.source.summary()))
            .unwrap_or_default();
    }

    pub fn filter(&self) -> &SourceFilter {
        &self.filter
    }

    pub fn show_names(&self) -> bool {
        self.show_names
    }

    pub fn background(&self) -> BackgroundStyle {
        self.background
    }

    pub fn scene(&self) -> &SkyScene {
        &self.scene
    }

    /// Summary of the source under the cursor, empty when there is none.
    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn zoom(&self) -> Option<ZoomWindow> {
        self.zoom
    }
}

fn zoom_window(px: u32, py: u32) -> ZoomWindow {
    let half = f64::from(ZOOM_INSET_PX / 8);
    let (px, py) = (f64::from(px), f64::from(py));
    let (w, h) = (f64::from(PAD_WIDTH_PX), f64::from(PAD_HEIGHT_PX));
    ZoomWindow {
        min: PadPoint::new((px - half) / w, (py - half) / h),
        max: PadPoint::new((px + half) / w, (py + half) / h),
    }
}

/// Summary text for the info panel: degree signs dropped, Unicode minus and
/// en dash folded to ASCII.
fn plain_text(summary: &str) -> String {
    summary
        .chars()
        .filter(|c| *c != '°')
        .map(|c| match c {
            '\u{2212}' | '\u{2013}' => '-',
            other => other,
        })
        .collect()
}
