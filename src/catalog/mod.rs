use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use tracing::warn;

mod county;
mod geog;

pub use county::CountyDescriptor;
pub use geog::{state_label, state_name};

use crate::error::ViewerError;
use crate::source::DataSource;
use crate::MANIFEST_FILE;

/// In-memory index of the counties available for selection, loaded once
/// from the manifest and immutable afterwards. Keyed by the
/// (state, county) FIPS pair.
#[derive(Debug, Default)]
pub struct Catalog {
    counties: Vec<CountyDescriptor>,
    index: HashMap<(String, String), usize>,
}

impl Catalog {
    /// Fetch and parse `counties.json` from `source`.
    ///
    /// Any failure, including a duplicate (state, county) pair, leaves the
    /// caller with no catalog; the selectors stay empty.
    pub fn from_source(source: &dyn DataSource) -> Result<Self, ViewerError> {
        Self::load(source).map_err(|e| {
            warn!(error = %e, "manifest load failed");
            ViewerError::ManifestUnavailable(e)
        })
    }

    fn load(source: &dyn DataSource) -> Result<Self> {
        let bytes = source.get(MANIFEST_FILE)
            .with_context(|| format!("Failed to fetch {MANIFEST_FILE}"))?;
        Self::from_slice(&bytes)
    }

    /// Parse a manifest payload (a JSON array of county descriptors).
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let counties: Vec<CountyDescriptor> = serde_json::from_slice(bytes)
            .with_context(|| format!("Failed to parse {MANIFEST_FILE}"))?;
        Self::from_descriptors(counties)
    }

    pub fn from_descriptors(counties: Vec<CountyDescriptor>) -> Result<Self> {
        let mut index = HashMap::with_capacity(counties.len());
        for (i, county) in counties.iter().enumerate() {
            let key = (county.state_code.clone(), county.county_code.clone());
            if index.insert(key, i).is_some() {
                bail!(
                    "Duplicate manifest entry for county {}{}",
                    county.state_code,
                    county.county_code,
                );
            }
        }
        Ok(Self { counties, index })
    }

    /// Distinct state codes with at least one county, sorted.
    pub fn states_with_data(&self) -> Vec<&str> {
        let mut states: Vec<&str> =
            self.counties.iter().map(|c| c.state_code.as_str()).collect();
        states.sort_unstable();
        states.dedup();
        states
    }

    /// Counties available for one state, sorted by display name.
    pub fn counties_for_state(&self, state_code: &str) -> Vec<&CountyDescriptor> {
        let mut counties: Vec<&CountyDescriptor> = self.counties.iter()
            .filter(|c| c.state_code == state_code)
            .collect();
        counties.sort_by(|a, b| a.name.cmp(&b.name));
        counties
    }

    pub fn find(&self, state_code: &str, county_code: &str) -> Option<&CountyDescriptor> {
        self.index
            .get(&(state_code.to_string(), county_code.to_string()))
            .map(|&i| &self.counties[i])
    }

    /// Number of counties in the manifest.
    pub fn len(&self) -> usize { self.counties.len() }

    pub fn is_empty(&self) -> bool { self.counties.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &CountyDescriptor> {
        self.counties.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemSource;

    const MANIFEST: &str = r#"[
        {"stateCode": "06", "countyCode": "075", "name": "San Francisco",
         "geojsonFile": "06075.geojson", "filename": "06075.json"},
        {"stateCode": "06", "countyCode": "001", "name": "Alameda",
         "geojsonFile": "06001.geojson", "filename": "06001.json"},
        {"stateCode": "41", "countyCode": "051", "name": "Multnomah",
         "geojsonFile": "41051.geojson", "filename": "41051.json"}
    ]"#;

    #[test]
    fn states_are_distinct_and_sorted() {
        let catalog = Catalog::from_slice(MANIFEST.as_bytes()).unwrap();
        assert_eq!(catalog.states_with_data(), vec!["06", "41"]);
    }

    #[test]
    fn counties_are_sorted_by_display_name() {
        let catalog = Catalog::from_slice(MANIFEST.as_bytes()).unwrap();

        let names: Vec<&str> = catalog.counties_for_state("06")
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alameda", "San Francisco"]);
        assert!(catalog.counties_for_state("53").is_empty());
    }

    #[test]
    fn find_is_keyed_by_state_and_county_pair() {
        let catalog = Catalog::from_slice(MANIFEST.as_bytes()).unwrap();

        assert_eq!(catalog.find("06", "075").map(|c| c.name.as_str()), Some("San Francisco"));
        assert!(catalog.find("41", "075").is_none());
    }

    #[test]
    fn duplicate_county_pair_makes_the_manifest_malformed() {
        let result = Catalog::from_slice(
            br#"[
                {"stateCode": "06", "countyCode": "075", "name": "San Francisco"},
                {"stateCode": "06", "countyCode": "075", "name": "San Francisco (again)"}
            ]"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_manifest_is_manifest_unavailable() {
        let source = MemSource::default();

        match Catalog::from_source(&source) {
            Err(ViewerError::ManifestUnavailable(_)) => {}
            other => panic!("expected ManifestUnavailable, got {other:?}"),
        }
    }
}
