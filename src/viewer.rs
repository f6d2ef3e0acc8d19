use anyhow::{anyhow, Context, Result};
use geo::Rect;
use tracing::{debug, info, warn};

use crate::boundary::BoundaryLayer;
use crate::catalog::{Catalog, CountyDescriptor};
use crate::error::ViewerError;
use crate::legend::{legend, LegendEntry};
use crate::score::ScoreIndex;
use crate::source::DataSource;
use crate::state::{EnrollmentMode, Refresh, ScoreLayer, VisualizationState};
use crate::style::{resolve_style, FeatureStyle};

/// Permission to commit data for one county selection.
///
/// A ticket from a superseded selection no longer matches the viewer's
/// generation; its payloads are discarded at commit time. This is what
/// precludes the stale-response race: a slow fetch for a county the user
/// has already navigated away from can never reach the map.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    descriptor: CountyDescriptor,
}

impl LoadTicket {
    /// The county this ticket was issued for.
    pub fn descriptor(&self) -> &CountyDescriptor { &self.descriptor }
}

/// Outcome of committing fetched county data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Data swapped in; `block_groups` counts the loaded score records.
    Applied { block_groups: usize },
    /// A newer selection was made while this one was in flight;
    /// viewer state is unchanged.
    Superseded,
}

/// The viewer: mode selections plus the currently loaded county data.
///
/// Single-threaded and event-driven. Loads are blocking calls the embedder
/// may schedule however it likes; interleaved selections stay correct
/// through the generation check in [`Viewer::commit`], not through
/// scheduling. The score index and boundary layer are replaced wholesale,
/// never mutated in place.
pub struct Viewer {
    catalog: Catalog,
    state: VisualizationState,
    scores: Option<ScoreIndex>,
    boundaries: Option<BoundaryLayer>,
    active: Option<CountyDescriptor>,
    generation: u64,
}

impl Viewer {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: VisualizationState::default(),
            scores: None,
            boundaries: None,
            active: None,
            generation: 0,
        }
    }

    /// Fetch the manifest from `source` and build a viewer around it.
    pub fn open(source: &dyn DataSource) -> Result<Self, ViewerError> {
        Ok(Self::new(Catalog::from_source(source)?))
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }

    pub fn state(&self) -> &VisualizationState { &self.state }

    /// The county whose data is currently on the map, if any.
    pub fn active_county(&self) -> Option<&CountyDescriptor> { self.active.as_ref() }

    // --- Mode mutators. No I/O; each returns a refresh signal. ---

    pub fn set_enrollment_mode(&mut self, mode: EnrollmentMode) -> Refresh {
        self.state.enrollment_mode = mode;
        Refresh
    }

    pub fn set_layer(&mut self, layer: ScoreLayer) -> Refresh {
        self.state.layer = layer;
        Refresh
    }

    pub fn set_absolute_filter(&mut self, enabled: bool) -> Refresh {
        self.state.absolute_filter = enabled;
        Refresh
    }

    pub fn set_boundaries_visible(&mut self, visible: bool) -> Refresh {
        self.state.boundaries_visible = visible;
        Refresh
    }

    /// Out-of-range values are clamped rather than rejected; the opacity
    /// slider can only produce 0-100% anyway.
    pub fn set_fill_opacity(&mut self, opacity: f64) -> Refresh {
        self.state.fill_opacity = opacity.clamp(0.0, 1.0);
        Refresh
    }

    // --- County selection and data loading. ---

    /// Start a new county selection, invalidating every outstanding ticket.
    pub fn select_county(
        &mut self,
        state_code: &str,
        county_code: &str,
    ) -> Result<LoadTicket, ViewerError> {
        let descriptor = self.catalog.find(state_code, county_code).cloned()
            .ok_or_else(|| {
                ViewerError::county_data_unavailable(
                    state_code,
                    county_code,
                    anyhow!("county not present in manifest"),
                )
            })?;

        self.generation += 1;
        debug!(generation = self.generation, county = %descriptor.label(), "county selected");
        Ok(LoadTicket { generation: self.generation, descriptor })
    }

    /// Install fetched data iff `ticket` still matches the latest selection.
    /// Score index and boundary layer are swapped in together, wholesale.
    pub fn commit(
        &mut self,
        ticket: LoadTicket,
        scores: ScoreIndex,
        boundaries: BoundaryLayer,
    ) -> Commit {
        if ticket.generation != self.generation {
            info!(county = %ticket.descriptor.label(), "discarding superseded county load");
            return Commit::Superseded;
        }

        let block_groups = scores.len();
        info!(block_groups, county = %ticket.descriptor.label(), "county data loaded");
        self.scores = Some(scores);
        self.boundaries = Some(boundaries);
        self.active = Some(ticket.descriptor);
        Commit::Applied { block_groups }
    }

    /// Select, fetch, and commit in one blocking call, returning the number
    /// of loaded block groups. On any failure the previously loaded county
    /// stays on the map.
    pub fn load_county(
        &mut self,
        source: &dyn DataSource,
        state_code: &str,
        county_code: &str,
    ) -> Result<usize, ViewerError> {
        let ticket = self.select_county(state_code, county_code)?;
        let scores = fetch_scores(source, &ticket)?;
        let boundaries = fetch_boundaries(source, &ticket)?;

        match self.commit(ticket, scores, boundaries) {
            Commit::Applied { block_groups } => Ok(block_groups),
            // Nothing can reselect between the select_county above and the
            // commit in this same call.
            Commit::Superseded => Ok(0),
        }
    }

    // --- Read surface for the rendering layer. ---

    /// Resolved style for one rendered feature. Features of a county with
    /// no loaded scores resolve to the no-data style.
    pub fn style_for(&self, geoid: &str) -> FeatureStyle {
        match &self.scores {
            Some(scores) => resolve_style(geoid, &self.state, scores),
            None => FeatureStyle::no_data(),
        }
    }

    /// Resolved styles for every boundary feature, in layer order.
    /// Re-invoke after any mutator returns [`Refresh`].
    pub fn styles(&self) -> Vec<(&str, FeatureStyle)> {
        match &self.boundaries {
            Some(layer) => layer.features().iter()
                .map(|f| (f.geoid.as_str(), self.style_for(&f.geoid)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Legend entries for the current visualization layer.
    pub fn legend(&self) -> &'static [LegendEntry] { legend(self.state.layer) }

    pub fn boundaries(&self) -> Option<&BoundaryLayer> { self.boundaries.as_ref() }

    /// Viewport-fitting bounds of the loaded county.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.boundaries.as_ref().and_then(BoundaryLayer::bounds)
    }

    /// Number of block groups with loaded score data.
    pub fn block_group_count(&self) -> usize {
        self.scores.as_ref().map_or(0, ScoreIndex::len)
    }

    /// Click text for one feature: geoid, the enrollment score matching the
    /// current mode, and the wealth score. Absent scores print as N/A.
    pub fn feature_info(&self, geoid: &str) -> Option<String> {
        let record = self.scores.as_ref()?.get(geoid)?;
        let enrollment = match self.state.enrollment_mode {
            EnrollmentMode::Private => record.enrollment_score,
            EnrollmentMode::Public => record.enrollment_score_plus,
        };

        Some(format!(
            "GEOID: {}\nEnrollment Score: {}\nWealth Score: {}",
            record.geoid,
            fmt_score(enrollment),
            fmt_score(record.wealth_score),
        ))
    }
}

/// Fetch and parse the score file for `ticket`'s county.
/// Viewer state is untouched; hand the result to [`Viewer::commit`].
pub fn fetch_scores(
    source: &dyn DataSource,
    ticket: &LoadTicket,
) -> Result<ScoreIndex, ViewerError> {
    let county = ticket.descriptor();
    fetch_score_index(source, county).map_err(|e| {
        warn!(county = %county.label(), error = %e, "score data load failed");
        ViewerError::county_data_unavailable(&county.state_code, &county.county_code, e)
    })
}

/// Fetch and parse the boundary file for `ticket`'s county.
/// Viewer state is untouched; hand the result to [`Viewer::commit`].
pub fn fetch_boundaries(
    source: &dyn DataSource,
    ticket: &LoadTicket,
) -> Result<BoundaryLayer, ViewerError> {
    let county = ticket.descriptor();
    fetch_boundary_layer(source, county).map_err(|e| {
        warn!(county = %county.label(), error = %e, "boundary data load failed");
        ViewerError::county_data_unavailable(&county.state_code, &county.county_code, e)
    })
}

fn fetch_score_index(source: &dyn DataSource, county: &CountyDescriptor) -> Result<ScoreIndex> {
    let file = county.score_file.as_deref()
        .ok_or_else(|| anyhow!("no score file listed for this county"))?;
    let bytes = source.get(file).with_context(|| format!("Failed to fetch {file}"))?;
    ScoreIndex::from_slice(&bytes)
}

fn fetch_boundary_layer(
    source: &dyn DataSource,
    county: &CountyDescriptor,
) -> Result<BoundaryLayer> {
    let file = county.geojson_file.as_deref()
        .ok_or_else(|| anyhow!("no boundary file listed for this county"))?;
    let bytes = source.get(file).with_context(|| format!("Failed to fetch {file}"))?;
    BoundaryLayer::from_slice(&bytes)
}

fn fmt_score(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_viewer() -> Viewer {
        Viewer::new(Catalog::default())
    }

    #[test]
    fn mutators_update_state_and_signal_refresh() {
        let mut viewer = empty_viewer();

        let _ = viewer.set_enrollment_mode(EnrollmentMode::Public);
        let _ = viewer.set_layer(ScoreLayer::Combo);
        let _ = viewer.set_absolute_filter(false);
        let _ = viewer.set_boundaries_visible(false);
        let _ = viewer.set_fill_opacity(0.4);

        let state = viewer.state();
        assert_eq!(state.enrollment_mode, EnrollmentMode::Public);
        assert_eq!(state.layer, ScoreLayer::Combo);
        assert!(!state.absolute_filter);
        assert!(!state.boundaries_visible);
        assert_eq!(state.fill_opacity, 0.4);
    }

    #[test]
    fn fill_opacity_is_clamped() {
        let mut viewer = empty_viewer();

        let _ = viewer.set_fill_opacity(1.7);
        assert_eq!(viewer.state().fill_opacity, 1.0);

        let _ = viewer.set_fill_opacity(-0.3);
        assert_eq!(viewer.state().fill_opacity, 0.0);
    }

    #[test]
    fn selecting_an_unknown_county_is_data_unavailable() {
        let mut viewer = empty_viewer();

        match viewer.select_county("06", "075") {
            Err(ViewerError::CountyDataUnavailable { state_code, county_code, .. }) => {
                assert_eq!(state_code, "06");
                assert_eq!(county_code, "075");
            }
            other => panic!("expected CountyDataUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn unloaded_viewer_has_empty_read_surface() {
        let viewer = empty_viewer();

        assert!(viewer.styles().is_empty());
        assert!(viewer.bounds().is_none());
        assert!(viewer.feature_info("060750101001").is_none());
        assert_eq!(viewer.block_group_count(), 0);
        assert_eq!(viewer.style_for("060750101001"), FeatureStyle::no_data());
    }

    #[test]
    fn legend_follows_the_layer_selection() {
        let mut viewer = empty_viewer();
        assert_eq!(viewer.legend().len(), 2);

        let _ = viewer.set_layer(ScoreLayer::Ws);
        assert_eq!(viewer.legend().len(), 4);
    }

    #[test]
    fn scores_format_to_two_decimals_or_na() {
        assert_eq!(fmt_score(Some(2712.5)), "2712.50");
        assert_eq!(fmt_score(None), "N/A");
    }
}
