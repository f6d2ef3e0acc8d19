use ahash::AHashMap;
use anyhow::{Context, Result};

use super::ScoreRecord;

/// Geoid-keyed score records for the currently loaded county.
///
/// One index is live at a time; selecting a different county replaces it
/// wholesale (the old index is discarded, never merged into).
#[derive(Debug, Default)]
pub struct ScoreIndex {
    by_geoid: AHashMap<String, ScoreRecord>,
}

impl ScoreIndex {
    /// Parse a per-county score file (a JSON array of records).
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let records: Vec<ScoreRecord> =
            serde_json::from_slice(bytes).context("Failed to parse score file")?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: impl IntoIterator<Item = ScoreRecord>) -> Self {
        Self {
            by_geoid: records.into_iter().map(|r| (r.geoid.clone(), r)).collect(),
        }
    }

    pub fn get(&self, geoid: &str) -> Option<&ScoreRecord> { self.by_geoid.get(geoid) }

    /// Number of block groups with score data.
    pub fn len(&self) -> usize { self.by_geoid.len() }

    pub fn is_empty(&self) -> bool { self.by_geoid.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_keyed_by_geoid() {
        let index = ScoreIndex::from_slice(
            br#"[
                {"geoid": "060750101001", "wealthScore": 2600.0},
                {"geoid": "060750101002"}
            ]"#,
        )
        .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("060750101001").and_then(|r| r.wealth_score),
            Some(2600.0)
        );
        assert!(index.get("000000000000").is_none());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(ScoreIndex::from_slice(b"{\"not\": \"an array\"}").is_err());
        assert!(ScoreIndex::from_slice(b"[{\"missing_geoid\": true}]").is_err());
    }
}
