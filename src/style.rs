use crate::score::{ColorKey, ScoreIndex};
use crate::state::{EnrollmentMode, ScoreLayer, VisualizationState};

/// Concrete per-feature render style handed to the drawing layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStyle {
    pub fill_color: String,
    pub stroke_weight: f64,
    pub stroke_opacity: f64,
    pub stroke_color: &'static str,
    pub fill_opacity: f64,
}

impl FeatureStyle {
    /// Style for features with no usable data: invisible fill, no border.
    /// The gray fill color is carried through but never visible at opacity 0.
    pub fn no_data() -> Self {
        Self {
            fill_color: "#9ca3af".to_string(),
            stroke_weight: 0.0,
            stroke_opacity: 0.0,
            stroke_color: "#fff",
            fill_opacity: 0.0,
        }
    }
}

/// Select the pre-computed color key for the current mode selections.
///
/// Explicit decision table over (layer, mode, filter). Two rows are
/// deliberately irregular: the absolute layer ignores the filter toggle, and
/// the unfiltered wealth layer resolves to the same key for both enrollment
/// modes (the upstream data carries no unfiltered `wsPlus` color).
pub fn color_key(state: &VisualizationState) -> ColorKey {
    use EnrollmentMode::{Private, Public};

    match (state.layer, state.enrollment_mode, state.absolute_filter) {
        (ScoreLayer::Absolute, Private, _) => ColorKey::Absolute,
        (ScoreLayer::Absolute, Public, _) => ColorKey::AbsolutePlus,

        (ScoreLayer::Es, Private, false) => ColorKey::Es,
        (ScoreLayer::Es, Public, false) => ColorKey::EsPlus,
        (ScoreLayer::Es, Private, true) => ColorKey::EsFiltered,
        (ScoreLayer::Es, Public, true) => ColorKey::EsPlusFiltered,

        (ScoreLayer::Ws, _, false) => ColorKey::Ws,
        (ScoreLayer::Ws, Private, true) => ColorKey::WsFiltered,
        (ScoreLayer::Ws, Public, true) => ColorKey::WsPlusFiltered,

        (ScoreLayer::Combo, Private, false) => ColorKey::Combo,
        (ScoreLayer::Combo, Public, false) => ColorKey::ComboPlus,
        (ScoreLayer::Combo, Private, true) => ColorKey::ComboFiltered,
        (ScoreLayer::Combo, Public, true) => ColorKey::ComboPlusFiltered,
    }
}

/// Resolve the render style for one feature.
///
/// Pure: depends only on the geoid, the mode selections, and the loaded
/// score index. A geoid without a record, without a color set, or whose
/// selected color is absent resolves to the no-data style.
pub fn resolve_style(
    geoid: &str,
    state: &VisualizationState,
    scores: &ScoreIndex,
) -> FeatureStyle {
    let Some(colors) = scores.get(geoid).and_then(|r| r.colors.as_ref()) else {
        return FeatureStyle::no_data();
    };

    let Some(fill) = colors.get(color_key(state)) else {
        return FeatureStyle::no_data();
    };

    let (weight, opacity) = if state.boundaries_visible { (1.0, 1.0) } else { (0.0, 0.0) };
    FeatureStyle {
        fill_color: fill.to_string(),
        stroke_weight: weight,
        stroke_opacity: opacity,
        stroke_color: "#fff",
        fill_opacity: state.fill_opacity,
    }
}
