use super::Color;

/// Hue/saturation/value triple, every component normalized.
///
/// - `hue` in [0, 1)
/// - `saturation` in [0, 1]
/// - `value` in [0, 1]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// Builds a state with every component wrapped/clamped into its domain.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: clamp_unit(saturation),
            value: clamp_unit(value),
        }
    }

    #[inline]
    pub fn to_rgb(self) -> Color {
        hsv_to_rgb(self)
    }
}

/// Converts a color to HSV.
///
/// Hue is undefined for achromatic colors (saturation or value of zero); in
/// that case `fallback_hue` is carried over so a hue selector does not jump
/// while the user edits near gray.
pub fn rgb_to_hsv(color: Color, fallback_hue: f64) -> Hsv {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let value = max;
    let saturation = if max > 0.0 { delta / max } else { 0.0 };

    if saturation <= 0.0 || value <= 0.0 {
        return Hsv { hue: wrap_hue(fallback_hue), saturation, value };
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsv { hue: wrap_hue(sector / 6.0), saturation, value }
}

/// Converts HSV back to 8-bit RGB, rounding each channel to the nearest integer.
pub fn hsv_to_rgb(hsv: Hsv) -> Color {
    let h = wrap_hue(hsv.hue) * 6.0;
    let s = clamp_unit(hsv.saturation);
    let v = clamp_unit(hsv.value);

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Color::new(to_byte(r), to_byte(g), to_byte(b))
}

#[inline]
fn to_byte(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Wraps any finite hue into [0, 1). Non-finite input maps to 0.
#[inline]
pub(crate) fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let w = h.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if w >= 1.0 { 0.0 } else { w }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    #[test]
    fn primaries() {
        let red = rgb_to_hsv(Color::new(255, 0, 0), 0.5);
        assert!(close(red.hue, 0.0) && close(red.saturation, 1.0) && close(red.value, 1.0));

        let green = rgb_to_hsv(Color::new(0, 255, 0), 0.0);
        assert!(close(green.hue, 1.0 / 3.0));

        let blue = rgb_to_hsv(Color::new(0, 0, 255), 0.0);
        assert!(close(blue.hue, 2.0 / 3.0));

        let magenta = rgb_to_hsv(Color::new(255, 0, 255), 0.0);
        assert!(close(magenta.hue, 5.0 / 6.0));
    }

    #[test]
    fn achromatic_keeps_previous_hue() {
        let gray = rgb_to_hsv(Color::new(128, 128, 128), 0.3);
        assert!(close(gray.hue, 0.3));
        assert!(close(gray.saturation, 0.0));

        let black = rgb_to_hsv(Color::BLACK, 0.7);
        assert!(close(black.hue, 0.7));
        assert!(close(black.value, 0.0));
    }

    #[test]
    fn hsv_to_rgb_sectors() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)), Color::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(1.0 / 6.0, 1.0, 1.0)), Color::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(0.5, 1.0, 1.0)), Color::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 1.0)), Color::WHITE);
        assert_eq!(hsv_to_rgb(Hsv::new(0.25, 1.0, 0.0)), Color::BLACK);
    }

    #[test]
    fn saturated_colors_round_trip_exactly() {
        for c in [
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            Color::new(0, 0, 255),
            Color::new(255, 255, 0),
            Color::new(255, 0, 255),
            Color::new(0, 255, 255),
        ] {
            assert_eq!(hsv_to_rgb(rgb_to_hsv(c, 0.0)), c);
        }
    }

    #[test]
    fn round_trip_within_one_per_channel() {
        for r in (1..=255).step_by(17) {
            for g in (0..=255).step_by(23) {
                for b in (0..=255).step_by(29) {
                    let c = Color::new(r as u8, g as u8, b as u8);
                    let back = hsv_to_rgb(rgb_to_hsv(c, 0.0));
                    for (x, y) in c.to_array().into_iter().zip(back.to_array()) {
                        assert!((x as i16 - y as i16).abs() <= 1, "{c} -> {back}");
                    }
                }
            }
        }
    }

    #[test]
    fn hue_wraps_into_unit_interval() {
        assert!(close(Hsv::new(1.25, 0.5, 0.5).hue, 0.25));
        assert!(close(Hsv::new(-0.25, 0.5, 0.5).hue, 0.75));
        assert_eq!(Hsv::new(f64::NAN, 2.0, -1.0), Hsv { hue: 0.0, saturation: 1.0, value: 0.0 });
        assert!(wrap_hue(-1e-20) < 1.0);
    }
}
