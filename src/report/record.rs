//! Prediction record parsing.
//!
//! One input line holds three tab-separated fields: an instance JSON blob,
//! an unused field and the predicted score. The blob carries the true label
//! under `label.value` and a `supporting_data` payload that is a JSON-encoded
//! string which itself decodes to a string-to-string map. Parsing is a pure
//! transformation; the caller decides what a failure means (the renderer
//! skips the line and moves on).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// One parsed prediction line.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    /// True class label (binary in practice: 0 or 1).
    pub label: i64,
    /// Predicted score, expected but not required to lie in `[0, 1]`.
    pub score: f64,
    /// Free-form key/value text for human display, in sorted key order.
    pub context: BTreeMap<String, String>,
}

impl PredictionRecord {
    /// Absolute prediction error, `|score - label|`.
    pub fn error(&self) -> f64 {
        (self.score - self.label as f64).abs()
    }
}

/// Error type for a single input line.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("expected 3 tab-separated fields, found {0}")]
    MissingFields(usize),
    #[error("invalid instance payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("invalid predicted score {0:?}")]
    Score(String),
}

// Labels show up both as JSON numbers and as stringified integers depending
// on the producer; accept either.
fn deserialize_int_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as SerdeError;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if let Some(f) = n.as_f64() {
                return Ok(f.trunc() as i64);
            }
            Err(SerdeError::custom("invalid number for label"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| SerdeError::custom(format!("cannot parse label from string: {}", s))),
        _ => Err(SerdeError::custom("label must be a number or string")),
    }
}

#[derive(Deserialize)]
struct RawLabel {
    #[serde(deserialize_with = "deserialize_int_any")]
    value: i64,
}

#[derive(Deserialize)]
struct RawInstance {
    label: RawLabel,
    supporting_data: String,
}

/// Parse one tab-separated input line into a [`PredictionRecord`].
///
/// Fields beyond the third are ignored. Malformed JSON, missing keys and a
/// non-numeric score all fail; none of them should abort a streaming run.
pub fn parse_line(line: &str) -> Result<PredictionRecord, ParseError> {
    let parts: Vec<&str> = line.trim().split('\t').collect();
    if parts.len() < 3 {
        return Err(ParseError::MissingFields(parts.len()));
    }

    let instance: RawInstance = serde_json::from_str(parts[0])?;
    let context: BTreeMap<String, String> = serde_json::from_str(&instance.supporting_data)?;
    let score: f64 = parts[2]
        .parse()
        .map_err(|_| ParseError::Score(parts[2].to_string()))?;

    Ok(PredictionRecord {
        label: instance.label.value,
        score,
        context,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line_for(label: serde_json::Value, support: serde_json::Value, score: &str) -> String {
        let blob = json!({
            "label": {"value": label},
            "supporting_data": support.to_string(),
        });
        format!("{}\tunused\t{}", blob, score)
    }

    #[test]
    fn parses_a_well_formed_line() {
        let line = line_for(json!(1), json!({"title": "red socks", "shop": "acme"}), "0.92");
        let record = parse_line(&line).unwrap();
        assert_eq!(record.label, 1);
        assert_eq!(record.score, 0.92);
        assert_eq!(record.context["title"], "red socks");
        assert_eq!(record.context["shop"], "acme");
    }

    #[test]
    fn accepts_stringified_labels() {
        let line = line_for(json!("0"), json!({}), "0.1");
        assert_eq!(parse_line(&line).unwrap().label, 0);
    }

    #[test]
    fn ignores_extra_fields() {
        let line = format!("{}\tmore\tstuff", line_for(json!(1), json!({}), "0.5"));
        assert_eq!(parse_line(&line).unwrap().score, 0.5);
    }

    #[test]
    fn too_few_fields_fails() {
        assert!(matches!(
            parse_line("only one field"),
            Err(ParseError::MissingFields(1))
        ));
    }

    #[test]
    fn invalid_json_fails() {
        assert!(matches!(
            parse_line("{not json\tx\t0.5"),
            Err(ParseError::Payload(_))
        ));
    }

    #[test]
    fn missing_label_fails() {
        let blob = json!({"supporting_data": "{}"});
        assert!(parse_line(&format!("{}\tx\t0.5", blob)).is_err());
    }

    #[test]
    fn supporting_data_must_decode_to_a_string_map() {
        let blob = json!({"label": {"value": 1}, "supporting_data": "[1, 2]"});
        assert!(parse_line(&format!("{}\tx\t0.5", blob)).is_err());
    }

    #[test]
    fn bad_score_fails() {
        let line = line_for(json!(1), json!({}), "not-a-number");
        assert!(matches!(parse_line(&line), Err(ParseError::Score(_))));
    }

    #[test]
    fn error_is_absolute() {
        let high = parse_line(&line_for(json!(1), json!({}), "0.2")).unwrap();
        let low = parse_line(&line_for(json!(0), json!({}), "0.8")).unwrap();
        approx::assert_abs_diff_eq!(high.error(), 0.8);
        approx::assert_abs_diff_eq!(low.error(), 0.8);
    }
}
