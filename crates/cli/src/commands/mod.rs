pub mod counties;
pub mod info;
pub mod render;
pub mod states;

use anyhow::{bail, Result};
use scoremap::{EnrollmentMode, ScoreLayer};

pub(crate) fn parse_mode(value: &str) -> Result<EnrollmentMode> {
    Ok(match value {
        "private" => EnrollmentMode::Private,
        "public" => EnrollmentMode::Public,
        _ => bail!("invalid --mode (use private|public)"),
    })
}

pub(crate) fn parse_layer(value: &str) -> Result<ScoreLayer> {
    Ok(match value {
        "absolute" => ScoreLayer::Absolute,
        "es" => ScoreLayer::Es,
        "ws" => ScoreLayer::Ws,
        "combo" => ScoreLayer::Combo,
        _ => bail!("invalid --layer (use absolute|es|ws|combo)"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_and_mode_values_parse() {
        assert_eq!(parse_layer("ws").unwrap(), ScoreLayer::Ws);
        assert_eq!(parse_mode("public").unwrap(), EnrollmentMode::Public);
        assert!(parse_layer("heat").is_err());
        assert!(parse_mode("charter").is_err());
    }
}
