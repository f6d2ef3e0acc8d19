use thiserror::Error;

/// Failures surfaced to the embedding UI.
///
/// Neither kind is fatal to the session: the viewer keeps whatever county
/// was previously loaded and the user may simply reselect.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The county manifest could not be fetched or parsed. With no catalog
    /// the state/county selectors stay empty.
    #[error("county manifest unavailable")]
    ManifestUnavailable(#[source] anyhow::Error),

    /// Score or boundary data for the selected county could not be loaded.
    #[error("data unavailable for county {state_code}{county_code}")]
    CountyDataUnavailable {
        state_code: String,
        county_code: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ViewerError {
    pub(crate) fn county_data_unavailable(
        state_code: &str,
        county_code: &str,
        source: anyhow::Error,
    ) -> Self {
        Self::CountyDataUnavailable {
            state_code: state_code.to_string(),
            county_code: county_code.to_string(),
            source,
        }
    }
}
