//! Creature stat comparison: dataset lookup, name autocomplete and radar
//! chart construction shared by the terminal and web front ends.

pub mod autocomplete;
pub mod chart;
pub mod compare;
pub mod error;
pub mod form;
pub mod hover;
pub mod record;
pub mod scene;
pub mod stat;
pub mod store;
pub mod svg;

pub use autocomplete::{Autocomplete, ClickTarget};
pub use chart::{
    ChartConfig, ChartDataset, ChartPoint, LegendEntry, RadarChart, SeriesColor, Subject,
};
pub use compare::compare;
pub use error::{ChartError, CompareError, StoreError, UnknownSubject};
pub use form::{CompareForm, FormHit};
pub use hover::{HoverRegion, HoverTracker, Pointer, PointerEvent, Tooltip};
pub use record::CreatureRecord;
pub use scene::{CanvasScene, CellViewport, Fill, FillCache, Label, Shape};
pub use stat::{Stat, StatProfile};
pub use store::DatasetStore;
pub use svg::{render_svg, SvgSurface};
