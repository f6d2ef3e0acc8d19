use serde::Deserialize;

/// Pre-computed color strings for every (layer, mode, filter) combination,
/// produced by the upstream data-preparation step. This crate only looks
/// colors up; quartile math and color assignment happen before the files
/// are written.
///
/// There is no unfiltered `wsPlus` entry: the unfiltered wealth layer
/// carries a single color shared by both enrollment modes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSet {
    #[serde(default)]
    pub absolute: Option<String>,
    #[serde(default)]
    pub absolute_plus: Option<String>,
    #[serde(default)]
    pub es: Option<String>,
    #[serde(default)]
    pub es_plus: Option<String>,
    #[serde(default)]
    pub es_filtered: Option<String>,
    #[serde(default)]
    pub es_plus_filtered: Option<String>,
    #[serde(default)]
    pub ws: Option<String>,
    #[serde(default)]
    pub ws_filtered: Option<String>,
    #[serde(default)]
    pub ws_plus_filtered: Option<String>,
    #[serde(default)]
    pub combo: Option<String>,
    #[serde(default)]
    pub combo_plus: Option<String>,
    #[serde(default)]
    pub combo_filtered: Option<String>,
    #[serde(default)]
    pub combo_plus_filtered: Option<String>,
}

/// Key into a `ColorSet`, one variant per wire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Absolute,
    AbsolutePlus,
    Es,
    EsPlus,
    EsFiltered,
    EsPlusFiltered,
    Ws,
    WsFiltered,
    WsPlusFiltered,
    Combo,
    ComboPlus,
    ComboFiltered,
    ComboPlusFiltered,
}

impl ColorSet {
    /// Look up the pre-computed color for `key`, if the upstream step
    /// produced one.
    pub fn get(&self, key: ColorKey) -> Option<&str> {
        match key {
            ColorKey::Absolute => self.absolute.as_deref(),
            ColorKey::AbsolutePlus => self.absolute_plus.as_deref(),
            ColorKey::Es => self.es.as_deref(),
            ColorKey::EsPlus => self.es_plus.as_deref(),
            ColorKey::EsFiltered => self.es_filtered.as_deref(),
            ColorKey::EsPlusFiltered => self.es_plus_filtered.as_deref(),
            ColorKey::Ws => self.ws.as_deref(),
            ColorKey::WsFiltered => self.ws_filtered.as_deref(),
            ColorKey::WsPlusFiltered => self.ws_plus_filtered.as_deref(),
            ColorKey::Combo => self.combo.as_deref(),
            ColorKey::ComboPlus => self.combo_plus.as_deref(),
            ColorKey::ComboFiltered => self.combo_filtered.as_deref(),
            ColorKey::ComboPlusFiltered => self.combo_plus_filtered.as_deref(),
        }
    }
}

/// One block group's scores and colors, joined to geometry by geoid.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub geoid: String,
    #[serde(default)]
    pub enrollment_score: Option<f64>,
    #[serde(default)]
    pub enrollment_score_plus: Option<f64>,
    #[serde(default)]
    pub wealth_score: Option<f64>,
    #[serde(default)]
    pub colors: Option<ColorSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_wire_field_names() {
        let record: ScoreRecord = serde_json::from_str(
            r#"{
                "geoid": "060750101001",
                "enrollmentScore": 3100.5,
                "enrollmentScorePlus": 2900.0,
                "wealthScore": 2750.25,
                "colors": {"absolute": "#ef4444", "wsPlusFiltered": "#3b82f6"}
            }"#,
        )
        .unwrap();

        assert_eq!(record.geoid, "060750101001");
        assert_eq!(record.enrollment_score, Some(3100.5));
        let colors = record.colors.unwrap();
        assert_eq!(colors.get(ColorKey::Absolute), Some("#ef4444"));
        assert_eq!(colors.get(ColorKey::WsPlusFiltered), Some("#3b82f6"));
        assert_eq!(colors.get(ColorKey::Combo), None);
    }

    #[test]
    fn record_tolerates_missing_scores_and_colors() {
        let record: ScoreRecord =
            serde_json::from_str(r#"{"geoid": "060750101001"}"#).unwrap();

        assert!(record.enrollment_score.is_none());
        assert!(record.wealth_score.is_none());
        assert!(record.colors.is_none());
    }
}
