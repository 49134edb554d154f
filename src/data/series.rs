//! Category Series Module
//! Ordered label/value/color data describing pie-chart slices.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SeriesError {
    #[error(
        "labels, values and colors must have equal lengths \
         (got {labels} labels, {values} values, {fills} fills, {hovers} hovers)"
    )]
    LengthMismatch {
        labels: usize,
        values: usize,
        fills: usize,
        hovers: usize,
    },
    #[error("series must contain at least one category")]
    Empty,
    #[error("category value must be finite and non-negative, got {0}")]
    InvalidValue(f64),
    #[error("invalid color literal: {0:?} (expected #RRGGBB)")]
    InvalidColor(String),
}

/// A solid RGB color authored as a `#RRGGBB` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` color literal.
    pub fn from_hex(hex: &str) -> Result<Self, SeriesError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6)
            .ok_or_else(|| SeriesError::InvalidColor(hex.to_string()))?;
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| SeriesError::InvalidColor(hex.to_string()))?;
        Ok(Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        })
    }

    /// Blend toward white, `amount` in 0..=1. Used for hover variants of
    /// palette colors that have no authored hover counterpart.
    pub fn lighten(self, amount: f32) -> Self {
        let mix = |c: u8| -> u8 {
            let c = c as f32;
            (c + (255.0 - c) * amount.clamp(0.0, 1.0)).round() as u8
        };
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
        }
    }
}

/// Ordered category data for one pie chart: labels, values and the two
/// parallel color runs (normal fill and hover fill). Slice and legend
/// order is the authored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    labels: Vec<String>,
    values: Vec<f64>,
    fill_colors: Vec<Rgb>,
    hover_colors: Vec<Rgb>,
}

impl CategorySeries {
    /// Build a series, enforcing the equal-length invariant.
    pub fn new(
        labels: Vec<String>,
        values: Vec<f64>,
        fill_colors: Vec<Rgb>,
        hover_colors: Vec<Rgb>,
    ) -> Result<Self, SeriesError> {
        if labels.len() != values.len()
            || labels.len() != fill_colors.len()
            || labels.len() != hover_colors.len()
        {
            return Err(SeriesError::LengthMismatch {
                labels: labels.len(),
                values: values.len(),
                fills: fill_colors.len(),
                hovers: hover_colors.len(),
            });
        }
        if labels.is_empty() {
            return Err(SeriesError::Empty);
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(SeriesError::InvalidValue(bad));
        }
        Ok(Self {
            labels,
            values,
            fill_colors,
            hover_colors,
        })
    }

    /// Build a series from literal tables with `#RRGGBB` color strings.
    pub fn from_hex(
        labels: &[&str],
        values: &[f64],
        fill_colors: &[&str],
        hover_colors: &[&str],
    ) -> Result<Self, SeriesError> {
        let fills = fill_colors
            .iter()
            .map(|h| Rgb::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        let hovers = hover_colors
            .iter()
            .map(|h| Rgb::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(
            labels.iter().map(|l| l.to_string()).collect(),
            values.to_vec(),
            fills,
            hovers,
        )
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn fill_colors(&self) -> &[Rgb] {
        &self.fill_colors
    }

    pub fn hover_colors(&self) -> &[Rgb] {
        &self.hover_colors
    }

    /// Sum of all category values.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_literals() {
        assert_eq!(Rgb::from_hex("#F7464A"), Ok(Rgb::new(247, 70, 74)));
        assert_eq!(Rgb::from_hex("#000000"), Ok(Rgb::new(0, 0, 0)));
        assert_eq!(Rgb::from_hex("#ffffff"), Ok(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn rejects_malformed_hex_literals() {
        for bad in ["F7464A", "#F7464", "#F7464AA", "#GG0000", ""] {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(SeriesError::InvalidColor(bad.to_string()))
            );
        }
    }

    #[test]
    fn lighten_moves_toward_white() {
        let c = Rgb::new(100, 150, 200).lighten(0.5);
        assert_eq!(c, Rgb::new(178, 203, 228));
        assert_eq!(Rgb::new(10, 20, 30).lighten(1.0), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::new(10, 20, 30).lighten(0.0), Rgb::new(10, 20, 30));
    }

    #[test]
    fn preserves_authored_order() {
        let series = CategorySeries::from_hex(
            &["b", "a", "c"],
            &[2.0, 1.0, 3.0],
            &["#111111", "#222222", "#333333"],
            &["#444444", "#555555", "#666666"],
        )
        .unwrap();
        assert_eq!(series.labels(), ["b", "a", "c"]);
        assert_eq!(series.values(), [2.0, 1.0, 3.0]);
        assert_eq!(series.fill_colors()[1], Rgb::new(0x22, 0x22, 0x22));
        assert_eq!(series.hover_colors()[2], Rgb::new(0x66, 0x66, 0x66));
        assert_eq!(series.total(), 6.0);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = CategorySeries::new(
            vec!["a".into(), "b".into()],
            vec![1.0],
            vec![Rgb::new(0, 0, 0)],
            vec![Rgb::new(0, 0, 0)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            SeriesError::LengthMismatch {
                labels: 2,
                values: 1,
                fills: 1,
                hovers: 1,
            }
        );
    }

    #[test]
    fn rejects_empty_series() {
        let err = CategorySeries::new(vec![], vec![], vec![], vec![]).unwrap_err();
        assert_eq!(err, SeriesError::Empty);
    }

    #[test]
    fn rejects_non_finite_and_negative_values() {
        let build = |v: f64| {
            CategorySeries::new(
                vec!["a".into()],
                vec![v],
                vec![Rgb::new(0, 0, 0)],
                vec![Rgb::new(0, 0, 0)],
            )
        };
        assert!(matches!(build(f64::NAN), Err(SeriesError::InvalidValue(_))));
        assert_eq!(
            build(-1.0).unwrap_err(),
            SeriesError::InvalidValue(-1.0)
        );
        assert!(build(0.0).is_ok());
    }
}
