/// Which variant of the enrollment score drives coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnrollmentMode {
    Private,
    Public,
}

/// Which score dimension drives coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreLayer {
    Absolute,  // Binary threshold criterion (ES and WS both >= 2500)
    Es,        // Enrollment score quartiles
    Ws,        // Wealth score quartiles
    Combo,     // Combined score quartiles
}

/// Signal returned by every state mutator: the embedder must re-resolve the
/// style of every rendered feature and re-derive the legend.
#[must_use = "a state change requires re-styling all rendered features"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refresh;

/// Current mode selections. One value per viewer, mutated only through the
/// `Viewer` mutators, never persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizationState {
    pub enrollment_mode: EnrollmentMode,
    pub layer: ScoreLayer,
    pub absolute_filter: bool,
    pub boundaries_visible: bool,
    pub fill_opacity: f64, // 0.0 - 1.0
}

impl Default for VisualizationState {
    /// The initial UI selections: private enrollment, absolute layer,
    /// filter on, boundaries on, 60% fill opacity.
    fn default() -> Self {
        Self {
            enrollment_mode: EnrollmentMode::Private,
            layer: ScoreLayer::Absolute,
            absolute_filter: true,
            boundaries_visible: true,
            fill_opacity: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_initial_ui_selections() {
        let state = VisualizationState::default();

        assert_eq!(state.enrollment_mode, EnrollmentMode::Private);
        assert_eq!(state.layer, ScoreLayer::Absolute);
        assert!(state.absolute_filter);
        assert!(state.boundaries_visible);
        assert_eq!(state.fill_opacity, 0.6);
    }
}
