use std::fmt;
use std::str::FromStr;

use super::{Color, ColorStop};

/// Easing applied to the local blend factor between two neighboring stops.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl InterpolationMode {
    pub const ALL: [InterpolationMode; 4] = [
        InterpolationMode::Linear,
        InterpolationMode::EaseIn,
        InterpolationMode::EaseOut,
        InterpolationMode::EaseInOut,
    ];

    /// Remaps `f` in [0, 1]. Every curve fixes 0 and 1 and is monotonic.
    #[inline]
    pub fn ease(self, f: f64) -> f64 {
        match self {
            InterpolationMode::Linear => f,
            InterpolationMode::EaseIn => f * f,
            InterpolationMode::EaseOut => 1.0 - (1.0 - f) * (1.0 - f),
            InterpolationMode::EaseInOut => f * f * (3.0 - 2.0 * f),
        }
    }

    /// Label shown by the mode selector.
    pub fn label(self) -> &'static str {
        match self {
            InterpolationMode::Linear => "Linear",
            InterpolationMode::EaseIn => "Ease In",
            InterpolationMode::EaseOut => "Ease Out",
            InterpolationMode::EaseInOut => "Ease In-Out",
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InterpolationMode::Linear => "linear",
            InterpolationMode::EaseIn => "ease-in",
            InterpolationMode::EaseOut => "ease-out",
            InterpolationMode::EaseInOut => "ease-in-out",
        })
    }
}

impl FromStr for InterpolationMode {
    type Err = String;

    /// Accepts `linear`, `ease-in`, `ease-out`, `ease-in-out` as well as the
    /// selector labels ("Ease In-Out"), ignoring case, spaces and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "linear" => Ok(InterpolationMode::Linear),
            "easein" => Ok(InterpolationMode::EaseIn),
            "easeout" => Ok(InterpolationMode::EaseOut),
            "easeinout" => Ok(InterpolationMode::EaseInOut),
            _ => Err(format!(
                "unknown interpolation mode {s:?} (expected linear, ease-in, ease-out or ease-in-out)"
            )),
        }
    }
}

/// Color of the gradient at `t`.
///
/// This is the only place gradient colors are computed: previews, stop
/// insertion, exports and the sampled `.gradient` table all go through it.
///
/// - `t` is clamped to [0, 1]; outside the outermost stops the nearest end
///   color is returned unchanged.
/// - With duplicate positions the earliest matching pair wins, and a
///   zero-width pair yields its left color.
/// - Channels round half away from zero, so red→blue at 0.5 is `#800080`.
/// - Unsorted input is sorted on a private copy first. An empty slice
///   yields black.
pub fn sample(stops: &[ColorStop], t: f64, mode: InterpolationMode) -> Color {
    if stops.windows(2).all(|w| w[0].position <= w[1].position) {
        sample_sorted(stops, t, mode)
    } else {
        let mut sorted = stops.to_vec();
        sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
        sample_sorted(&sorted, t, mode)
    }
}

fn sample_sorted(stops: &[ColorStop], t: f64, mode: InterpolationMode) -> Color {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Color::BLACK;
    };
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    if t <= first.position {
        return first.color;
    }
    if t >= last.position {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if left.position <= t && t <= right.position {
            let span = right.position - left.position;
            if span <= 0.0 {
                return left.color;
            }
            let f = mode.ease((t - left.position) / span);
            return Color::new(
                lerp_channel(left.color.r, right.color.r, f),
                lerp_channel(left.color.g, right.color.g, f),
                lerp_channel(left.color.b, right.color.b, f),
            );
        }
    }

    // Unreachable for sorted input: some pair always brackets t.
    last.color
}

#[inline]
fn lerp_channel(a: u8, b: u8, f: f64) -> u8 {
    let a = a as f64;
    let b = b as f64;
    (a + f * (b - a)).round().clamp(0.0, 255.0) as u8
}
