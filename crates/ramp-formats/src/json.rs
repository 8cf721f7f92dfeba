//! JSON stop list: `[{"position": 0.0, "color": "#ff6b6b"}, …]`.

use serde::{Deserialize, Serialize};

use ramp_engine::paint::{Color, ColorStop};

use crate::error::CodecError;
use crate::parser::sorted;

#[derive(Debug, Serialize, Deserialize)]
struct JsonStop {
    position: f64,
    color: String,
}

/// Encodes stops in the given order, pretty-printed with a trailing newline.
pub fn encode_json(stops: &[ColorStop]) -> Result<String, CodecError> {
    let doc: Vec<JsonStop> = stops
        .iter()
        .map(|s| JsonStop { position: s.position, color: s.color.to_hex() })
        .collect();
    let mut out = serde_json::to_string_pretty(&doc)
        .map_err(|e| CodecError::malformed(format!("cannot encode stops: {e}")))?;
    out.push('\n');
    Ok(out)
}

/// Decodes a JSON stop list and sorts it by position.
///
/// Any bad entry rejects the whole document.
pub fn decode_json(src: &str) -> Result<Vec<ColorStop>, CodecError> {
    let doc: Vec<JsonStop> = serde_json::from_str(src)
        .map_err(|e| CodecError::malformed_at(e.line(), e.to_string()))?;

    let stops = doc
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            if !s.position.is_finite() {
                return Err(CodecError::malformed(format!("stop {i}: position is not finite")));
            }
            let color = Color::from_hex(&s.color)
                .map_err(|e| CodecError::malformed(format!("stop {i}: {e}")))?;
            Ok(ColorStop::new(s.position, color))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if stops.len() < 2 {
        return Err(CodecError::malformed(format!(
            "a gradient needs at least 2 stops, found {}",
            stops.len()
        )));
    }
    Ok(sorted(stops))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(position: f64, hex: &str) -> ColorStop {
        ColorStop::new(position, Color::from_hex(hex).unwrap())
    }

    #[test]
    fn encode_layout() {
        let out = encode_json(&[stop(0.0, "#FF6B6B"), stop(1.0, "#45b7d1")]).unwrap();
        assert_eq!(
            out,
            "[\n  {\n    \"position\": 0.0,\n    \"color\": \"#ff6b6b\"\n  },\n  \
             {\n    \"position\": 1.0,\n    \"color\": \"#45b7d1\"\n  }\n]\n"
        );
    }

    #[test]
    fn round_trip_is_exact() {
        let stops = vec![
            stop(0.0, "#ff6b6b"),
            stop(0.1234567890123, "#4ecdc4"),
            stop(0.1234567890123, "#000000"),
            stop(1.0 / 3.0, "#45b7d1"),
            stop(1.0, "#ffffff"),
        ];
        let back = decode_json(&encode_json(&stops).unwrap()).unwrap();
        assert_eq!(back, stops);
    }

    #[test]
    fn decode_sorts_and_clamps() {
        let src = r##"[
            {"position": 1.5, "color": "#0000FF"},
            {"position": -1, "color": "#ff0000", "note": "ignored"}
        ]"##;
        assert_eq!(decode_json(src).unwrap(), vec![stop(0.0, "#ff0000"), stop(1.0, "#0000ff")]);
    }

    #[test]
    fn bad_entries_reject_everything() {
        for src in [
            "",
            "{}",
            "[{\"position\": 0.5}]",
            "[{\"position\": \"x\", \"color\": \"#ffffff\"}]",
            "[{\"position\": 0, \"color\": \"#ffffff\"}, {\"position\": 1, \"color\": \"blue\"}]",
            "[{\"position\": 0, \"color\": \"#ffffff\"}]",
            "[]",
        ] {
            let e = decode_json(src).unwrap_err();
            assert!(matches!(e, CodecError::MalformedInput { .. }), "{src:?}: {e}");
        }
    }
}
