//! # Score Bar
//!
//! Deterministic color and width for the fixed-width score bar widget.
//!
//! The gradient runs through four anchors:
//! - 0: white (255, 255, 255)
//! - 3: yellow (255, 255, 0)
//! - 7: orange (255, 165, 0)
//! - 10: red (255, 0, 0)
//!
//! Scores landing exactly on 3 or 7 resolve through the lower segment, so
//! anchor colors are exact. Input is assumed pre-validated to [0, 10].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// CSS color value for the bar fill.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

pub fn score_to_color(score: f64) -> Rgb {
    if score <= 3.0 {
        // white to yellow
        let ratio = score / 3.0;
        Rgb {
            r: 255,
            g: 255,
            b: (255.0 * (1.0 - ratio)).round() as u8,
        }
    } else if score <= 7.0 {
        // yellow to orange
        let ratio = (score - 3.0) / 4.0;
        Rgb {
            r: 255,
            g: (255.0 - 90.0 * ratio).round() as u8,
            b: 0,
        }
    } else {
        // orange to red
        let ratio = (score - 7.0) / 3.0;
        Rgb {
            r: 255,
            g: (165.0 * (1.0 - ratio)).round() as u8,
            b: 0,
        }
    }
}

/// Bar fill width in percent, independent of the color.
pub fn fill_percent(score: f64) -> f64 {
    score / 10.0 * 100.0
}

#[cfg(test)]
mod tests {
    use super::{Rgb, fill_percent, score_to_color};

    #[test]
    fn test_anchor_colors() {
        assert_eq!(score_to_color(0.0), Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(score_to_color(3.0), Rgb { r: 255, g: 255, b: 0 });
        assert_eq!(score_to_color(7.0), Rgb { r: 255, g: 165, b: 0 });
        assert_eq!(score_to_color(10.0), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_midpoints() {
        assert_eq!(score_to_color(5.0), Rgb { r: 255, g: 210, b: 0 });
        assert_eq!(score_to_color(1.5), Rgb { r: 255, g: 255, b: 128 });
        assert_eq!(score_to_color(8.5), Rgb { r: 255, g: 83, b: 0 });
    }

    #[test]
    fn test_boundaries_use_lower_segment() {
        // 3 must come out of the white-yellow formula, 7 out of yellow-orange
        assert_eq!(score_to_color(3.0).b, 0);
        assert_eq!(score_to_color(7.0).g, 165);
        assert_eq!(score_to_color(3.0 + f64::EPSILON).g, 255);
    }

    #[test]
    fn test_css_value() {
        assert_eq!(score_to_color(10.0).css(), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_fill_width() {
        assert_eq!(fill_percent(0.0), 0.0);
        assert_eq!(fill_percent(7.5), 75.0);
        assert_eq!(fill_percent(10.0), 100.0);
    }
}
