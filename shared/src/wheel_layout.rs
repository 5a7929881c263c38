use serde::{Deserialize, Serialize};

use crate::constants::{
    DARK_TEXT_COLOR, FULL_CIRCLE, LIGHT_TEXT_COLOR, WHEEL_COLORS, WHEEL_WIDTHS,
};
use crate::error::ConfigError;
use crate::locale::Bundle;

// Widths are compared against 360 with this much slack so that fractional
// configurations are not rejected over rounding in the last bit.
const WIDTH_SUM_TOLERANCE: f64 = 1e-9;

/// A single prize slot on the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub id: u32,
    pub name: String,
    pub width: f64,
    pub color: String,
    pub text_color: String,
}

/// Half-open angular interval `[start, end)` in degrees, clockwise from 0.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl Wedge {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid(&self) -> f64 {
        self.start + self.width() / 2.0
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start && angle < self.end
    }

    pub fn path(&self, radius: f64) -> String {
        wedge_path(self.start, self.end, radius)
    }
}

/// Ordered prizes plus the contiguous wedges they occupy.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelConfiguration {
    prizes: Vec<Prize>,
    wedges: Vec<Wedge>,
}

impl WheelConfiguration {
    /// Pairs prize names with widths. Fails when the lists differ in length,
    /// a width is not positive, or the widths do not cover the circle exactly.
    pub fn new(names: &[String], widths: &[f64]) -> Result<Self, ConfigError> {
        validate_widths(names.len(), widths).inspect_err(|e| {
            log::error!("Invalid wheel configuration: {}", e);
        })?;

        let prizes = names
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(index, (name, &width))| Prize {
                id: index as u32 + 1,
                name: name.clone(),
                width,
                color: WHEEL_COLORS[index % WHEEL_COLORS.len()].to_string(),
                text_color: text_color_for(index).to_string(),
            })
            .collect();

        Ok(Self {
            prizes,
            wedges: layout(widths),
        })
    }

    /// Builds the wheel from a locale bundle's prize names and the fixed widths.
    pub fn from_bundle(bundle: &Bundle) -> Result<Self, ConfigError> {
        Self::new(&bundle.spin_wheel.prizes, &WHEEL_WIDTHS)
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn prize(&self, index: usize) -> Option<&Prize> {
        self.prizes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Prize, &Wedge)> {
        self.prizes.iter().zip(self.wedges.iter())
    }
}

fn validate_widths(count: usize, widths: &[f64]) -> Result<(), ConfigError> {
    if count == 0 && widths.is_empty() {
        return Err(ConfigError::Empty);
    }
    if count != widths.len() {
        return Err(ConfigError::CountMismatch {
            prizes: count,
            widths: widths.len(),
        });
    }
    if let Some((index, &width)) = widths
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w <= 0.0)
    {
        return Err(ConfigError::NonPositiveWidth { index, width });
    }

    let sum: f64 = widths.iter().sum();
    if (sum - FULL_CIRCLE).abs() > WIDTH_SUM_TOLERANCE {
        return Err(ConfigError::InvalidWidthSum { sum });
    }
    Ok(())
}

/// Partitions the circle: `start_0 = 0`, each wedge begins where the previous ends.
pub fn layout(widths: &[f64]) -> Vec<Wedge> {
    let mut start = 0.0;
    widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let wedge = Wedge {
                index,
                start,
                end: start + width,
            };
            start = wedge.end;
            wedge
        })
        .collect()
}

/// SVG pie-slice path for a wedge on a wheel of `radius` centred at `(radius, radius)`.
pub fn wedge_path(start_angle: f64, end_angle: f64, radius: f64) -> String {
    let start_rad = start_angle.to_radians();
    let end_rad = end_angle.to_radians();
    let x1 = radius + radius * start_rad.cos();
    let y1 = radius + radius * start_rad.sin();
    let x2 = radius + radius * end_rad.cos();
    let y2 = radius + radius * end_rad.sin();
    let large_arc = if end_angle - start_angle > 180.0 { 1 } else { 0 };

    format!(
        "M {r},{r} L {x1},{y1} A {r},{r} 0 {large_arc},1 {x2},{y2} Z",
        r = radius
    )
}

/// Shrinks long labels so they stay inside narrow wedges.
pub fn label_font_size(text: &str, width: f64) -> f64 {
    let base = 12.0;
    let max_len = (width / 4.0).floor() as usize;
    let len = text.chars().count();

    if len > max_len {
        (base - (len - max_len) as f64 * 0.5).max(7.0)
    } else {
        base.min(12.0 - (40.0 - width) / 10.0)
    }
}

// Navy, mint and green wedges carry white text.
fn text_color_for(index: usize) -> &'static str {
    match index % WHEEL_COLORS.len() {
        0 | 4 | 5 => LIGHT_TEXT_COLOR,
        _ => DARK_TEXT_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{}", i)).collect()
    }

    #[test]
    fn test_wedges_partition_circle() {
        let config = WheelConfiguration::new(&names(6), &WHEEL_WIDTHS).unwrap();
        let wedges = config.wedges();

        assert_eq!(wedges.len(), 6);
        assert_eq!(wedges[0].start, 0.0);
        for pair in wedges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(wedges[5].end, 360.0);
        assert_eq!(wedges[3].start, 120.0);
        assert_eq!(wedges[3].end, 180.0);
    }

    #[test]
    fn test_uneven_fractional_partition() {
        let widths = [90.5, 89.5, 180.0];
        let config = WheelConfiguration::new(&names(3), &widths).unwrap();
        let covered: f64 = config.wedges().iter().map(Wedge::width).sum();
        assert!((covered - 360.0).abs() < 1e-9);
        assert_eq!(config.wedges()[2].start, 180.0);
    }

    #[test]
    fn test_rejects_bad_sum() {
        let err = WheelConfiguration::new(&names(3), &[100.0, 100.0, 100.0]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWidthSum { sum } if sum == 300.0));
    }

    #[test]
    fn test_rejects_count_mismatch() {
        let err = WheelConfiguration::new(&names(5), &WHEEL_WIDTHS).unwrap_err();
        assert!(matches!(err, ConfigError::CountMismatch { prizes: 5, widths: 6 }));
    }

    #[test]
    fn test_rejects_zero_width() {
        let err = WheelConfiguration::new(&names(3), &[0.0, 180.0, 180.0]).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveWidth { index: 0, .. }));
    }

    #[test]
    fn test_rejects_empty() {
        let err = WheelConfiguration::new(&[], &[]).unwrap_err();
        assert!(matches!(err, ConfigError::Empty));
    }

    #[test]
    fn test_prize_ids_and_colors() {
        let config = WheelConfiguration::new(&names(6), &WHEEL_WIDTHS).unwrap();
        let ids: Vec<u32> = config.prizes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(config.prizes()[0].text_color, LIGHT_TEXT_COLOR);
        assert_eq!(config.prizes()[1].text_color, DARK_TEXT_COLOR);
        assert_eq!(config.prizes()[5].color, "#38b000");
    }

    #[test]
    fn test_wedge_path_small_arc() {
        let path = wedge_path(0.0, 90.0, 150.0);
        assert!(path.starts_with("M 150,150 L 300,150 A 150,150 0 0,1 "));
        assert!(path.ends_with(" Z"));
    }

    #[test]
    fn test_wedge_path_large_arc_only_above_half() {
        assert!(wedge_path(0.0, 180.0, 150.0).contains(" 0 0,1 "));
        assert!(wedge_path(0.0, 200.0, 150.0).contains(" 0 1,1 "));
    }

    #[test]
    fn test_label_font_size() {
        // short text in a wide wedge stays at the base size
        assert_eq!(label_font_size("Gift", 100.0), 12.0);
        // narrow wedge shrinks the base
        assert_eq!(label_font_size("Tea", 30.0), 11.0);
        // overflowing text shrinks, but never below 7
        assert_eq!(label_font_size("Free Delivery", 40.0), 10.5);
        assert_eq!(label_font_size("An extremely long prize label", 30.0), 7.0);
    }
}
