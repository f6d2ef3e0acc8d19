use serde::Deserialize;

/// One manifest entry describing a county with pre-computed data.
///
/// `geojson_file` and `score_file` are references into the same data source
/// the manifest came from; either may be absent for counties whose files
/// were never generated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyDescriptor {
    pub state_code: String,
    pub county_code: String,
    pub name: String,
    #[serde(default)]
    pub geojson_file: Option<String>,
    /// Score data file (named `filename` in the manifest).
    #[serde(default, rename = "filename")]
    pub score_file: Option<String>,
}

impl CountyDescriptor {
    /// Selector label, e.g. "San Francisco (075)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.county_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_parses_manifest_field_names() {
        let county: CountyDescriptor = serde_json::from_str(
            r#"{
                "stateCode": "06",
                "countyCode": "075",
                "name": "San Francisco",
                "geojsonFile": "06075_block_groups.geojson",
                "filename": "06075_scores.json"
            }"#,
        )
        .unwrap();

        assert_eq!(county.state_code, "06");
        assert_eq!(county.county_code, "075");
        assert_eq!(county.geojson_file.as_deref(), Some("06075_block_groups.geojson"));
        assert_eq!(county.score_file.as_deref(), Some("06075_scores.json"));
        assert_eq!(county.label(), "San Francisco (075)");
    }

    #[test]
    fn file_references_may_be_absent() {
        let county: CountyDescriptor = serde_json::from_str(
            r#"{"stateCode": "06", "countyCode": "001", "name": "Alameda"}"#,
        )
        .unwrap();

        assert!(county.geojson_file.is_none());
        assert!(county.score_file.is_none());
    }
}
