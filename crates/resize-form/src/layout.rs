//! Responsive layout engine
//!
//! Everything here is a pure function of the observed width, the caller's
//! overrides and the breakpoint table. Nothing is cached: the form derives a
//! fresh [`Layout`] whenever it renders.

use serde::{Deserialize, Serialize};

use crate::breakpoint::BreakpointTable;
use crate::grid::GRID_UNITS;
use crate::options::FormOptions;

/// Observed content-box size of the form's container, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentBox {
    pub width: f64,
    pub height: f64,
}

impl ContentBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Derived layout for one render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub container_width: f64,
    /// Grid units given to a field with the default span multiplier
    pub grid_units_per_field: u32,
    /// Fields shown before the rest are collapsed away
    pub visible_field_count: u32,
}

impl Layout {
    pub fn compute(width: f64, options: &FormOptions) -> Self {
        let grid_units_per_field = grid_units_per_field(
            width,
            options.default_form_item_span_size,
            &options.breakpoints,
        );
        let visible_field_count =
            visible_field_count(grid_units_per_field, options.default_form_item_num);

        Self {
            container_width: width,
            grid_units_per_field,
            visible_field_count,
        }
    }

    pub fn field_span(&self, grid_span_units: Option<u32>) -> u32 {
        field_span(self.grid_units_per_field, grid_span_units)
    }
}

/// Grid units per field: a non-zero override wins, otherwise the
/// breakpoint bucket for `width` decides.
pub fn grid_units_per_field(width: f64, span_override: Option<u32>, table: &BreakpointTable) -> u32 {
    if let Some(span) = span_override.filter(|span| *span > 0) {
        return span;
    }
    GRID_UNITS / table.lookup(width).fields_per_row
}

/// Fields visible while collapsed.
///
/// One slot of the row is reserved for the submit/reset controls; at least
/// one field is always shown.
pub fn visible_field_count(grid_units_per_field: u32, count_override: Option<u32>) -> u32 {
    if let Some(count) = count_override.filter(|count| *count > 0) {
        return count;
    }
    GRID_UNITS
        .checked_div(grid_units_per_field)
        .unwrap_or(0)
        .saturating_sub(1)
        .max(1)
}

/// Span of a single field, capped at a full row.
pub fn field_span(grid_units_per_field: u32, grid_span_units: Option<u32>) -> u32 {
    let units = grid_span_units.filter(|units| *units > 0).unwrap_or(1);
    grid_units_per_field.saturating_mul(units).min(GRID_UNITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(300.0, 24)]
    #[case(520.0, 12)]
    #[case(719.0, 12)]
    #[case(720.0, 8)]
    #[case(1024.0, 8)]
    #[case(1300.0, 6)]
    fn test_span_from_width(#[case] width: f64, #[case] span: u32) {
        let table = BreakpointTable::default();
        assert_eq!(grid_units_per_field(width, None, &table), span);
    }

    #[test]
    fn test_span_override_ignores_width() {
        let table = BreakpointTable::default();
        assert_eq!(grid_units_per_field(1300.0, Some(12), &table), 12);
        assert_eq!(grid_units_per_field(100.0, Some(12), &table), 12);
    }

    #[test]
    fn test_zero_span_override_falls_back_to_width() {
        let table = BreakpointTable::default();
        assert_eq!(grid_units_per_field(1300.0, Some(0), &table), 6);
    }

    #[rstest]
    #[case(24, 1)]
    #[case(12, 1)]
    #[case(8, 2)]
    #[case(6, 3)]
    #[case(4, 5)]
    #[case(1, 23)]
    fn test_visible_count(#[case] span: u32, #[case] expected: u32) {
        assert_eq!(visible_field_count(span, None), expected);
    }

    #[test]
    fn test_visible_count_is_at_least_one() {
        for span in 0..=48 {
            assert!(visible_field_count(span, None) >= 1, "span {span}");
        }
    }

    #[test]
    fn test_visible_count_override() {
        assert_eq!(visible_field_count(6, Some(5)), 5);
        assert_eq!(visible_field_count(6, Some(0)), 3);
    }

    #[test]
    fn test_field_span_caps_at_row() {
        assert_eq!(field_span(8, None), 8);
        assert_eq!(field_span(8, Some(2)), 16);
        assert_eq!(field_span(8, Some(5)), 24);
        assert_eq!(field_span(8, Some(0)), 8);
        assert_eq!(field_span(u32::MAX, Some(2)), 24);
    }

    #[test]
    fn test_compute_with_overrides() {
        let options = FormOptions {
            default_form_item_span_size: Some(12),
            ..FormOptions::default()
        };
        let layout = Layout::compute(1300.0, &options);
        assert_eq!(layout.grid_units_per_field, 12);
        assert_eq!(layout.visible_field_count, 1);
    }
}
