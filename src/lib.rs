#![doc = "Scoremap public API"]
mod boundary;
mod catalog;
mod error;
mod legend;
mod render;
mod score;
mod source;
mod state;
mod style;
mod viewer;

#[doc(inline)]
pub use boundary::{BoundaryFeature, BoundaryLayer};

#[doc(inline)]
pub use catalog::{state_label, state_name, Catalog, CountyDescriptor};

#[doc(inline)]
pub use error::ViewerError;

#[doc(inline)]
pub use legend::{legend, LegendEntry};

#[doc(inline)]
pub use render::render_svg;

#[doc(inline)]
pub use score::{ColorKey, ColorSet, ScoreIndex, ScoreRecord};

#[doc(inline)]
pub use source::{DataSource, DirSource, MemSource};

#[cfg(feature = "download")]
#[doc(inline)]
pub use source::HttpSource;

#[doc(inline)]
pub use state::{EnrollmentMode, Refresh, ScoreLayer, VisualizationState};

#[doc(inline)]
pub use style::{resolve_style, FeatureStyle};

#[doc(inline)]
pub use viewer::{fetch_boundaries, fetch_scores, Commit, LoadTicket, Viewer};

/// Manifest file expected at the root of every data source.
pub const MANIFEST_FILE: &str = "counties.json";
