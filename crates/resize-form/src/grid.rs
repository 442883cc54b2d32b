//! Grid constants shared by layout and rendering

/// Number of equal-width units a row is divided into.
pub const GRID_UNITS: u32 = 24;

/// CSS class for a column spanning `span` grid units
pub fn column_class(span: u32) -> String {
    format!("rf-col rf-col-{}", span.min(GRID_UNITS))
}
