/// Headless sky map: projection, nearest-source lookup, filtering and the
/// event-driven view state
pub mod filter;
pub mod projection;
pub mod scene;
pub mod separation;
pub mod view;

pub use filter::SourceFilter;
pub use projection::{pad_to_sky, sky_to_pad, PadPoint};
pub use scene::{BackgroundStyle, SkyScene};
pub use separation::{angular_separation, nearest_source, NearestMatch};
pub use view::{Redraw, ViewEvent, ViewState};
