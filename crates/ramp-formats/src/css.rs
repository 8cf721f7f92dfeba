use ramp_engine::paint::ColorStop;

use crate::parser::sorted;

/// `background: linear-gradient(90deg, #rrggbb p%, …);` with whole-number
/// percentages.
pub fn encode_css(stops: &[ColorStop]) -> String {
    let parts: Vec<String> = sorted(stops.to_vec())
        .iter()
        .map(|s| format!("{} {}%", s.color, (s.position * 100.0).round() as u32))
        .collect();
    format!("background: linear-gradient(90deg, {});", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use ramp_engine::paint::Color;

    use super::*;

    #[test]
    fn default_session_css() {
        let stops = [
            ColorStop::new(0.0, Color::new(0xff, 0x6b, 0x6b)),
            ColorStop::new(0.5, Color::new(0x4e, 0xcd, 0xc4)),
            ColorStop::new(1.0, Color::new(0x45, 0xb7, 0xd1)),
        ];
        assert_eq!(
            encode_css(&stops),
            "background: linear-gradient(90deg, #ff6b6b 0%, #4ecdc4 50%, #45b7d1 100%);"
        );
    }

    #[test]
    fn percentages_round() {
        let stops = [
            ColorStop::new(0.126, Color::BLACK),
            ColorStop::new(0.994, Color::WHITE),
        ];
        assert_eq!(
            encode_css(&stops),
            "background: linear-gradient(90deg, #000000 13%, #ffffff 99%);"
        );
    }
}
