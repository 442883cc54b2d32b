//! Width breakpoints mapping container width to fields per row

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FormError;
use crate::grid::GRID_UNITS;

/// One row of the breakpoint table: widths strictly below `threshold`
/// (and at or above the previous threshold) lay out `fields_per_row` fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub threshold: f64,
    pub fields_per_row: u32,
}

impl Breakpoint {
    pub const fn new(threshold: f64, fields_per_row: u32) -> Self {
        Self { threshold, fields_per_row }
    }
}

/// Ordered breakpoint table.
///
/// Thresholds are strictly increasing and the last one is `+inf`, so every
/// finite width falls into exactly one bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BreakpointTable(Vec<Breakpoint>);

impl BreakpointTable {
    pub fn new(entries: Vec<Breakpoint>) -> Result<Self, FormError> {
        let Some(last) = entries.last() else {
            return Err(FormError::InvalidBreakpoints("table is empty".to_string()));
        };

        if last.threshold != f64::INFINITY {
            return Err(FormError::InvalidBreakpoints(format!(
                "last threshold must be infinite, got {}",
                last.threshold
            )));
        }

        for entry in &entries {
            if entry.fields_per_row == 0 || entry.fields_per_row > GRID_UNITS {
                return Err(FormError::InvalidBreakpoints(format!(
                    "fields per row must be between 1 and {}, got {}",
                    GRID_UNITS, entry.fields_per_row
                )));
            }
        }

        for pair in entries.windows(2) {
            // NaN compares as None and is rejected along with ties
            if pair[0].threshold.partial_cmp(&pair[1].threshold) != Some(Ordering::Less) {
                return Err(FormError::InvalidBreakpoints(format!(
                    "thresholds must be strictly increasing ({} then {})",
                    pair[0].threshold, pair[1].threshold
                )));
            }
        }

        Ok(Self(entries))
    }

    /// First entry whose threshold strictly exceeds `width`.
    ///
    /// A width equal to a threshold belongs to the next bucket. Widths with
    /// no match (`NaN`, `+inf`) use the widest bucket.
    pub fn lookup(&self, width: f64) -> &Breakpoint {
        self.0
            .iter()
            .find(|entry| width < entry.threshold)
            .unwrap_or_else(|| self.widest())
    }

    pub fn entries(&self) -> &[Breakpoint] {
        &self.0
    }

    fn widest(&self) -> &Breakpoint {
        // non-empty by construction
        &self.0[self.0.len() - 1]
    }
}

impl Default for BreakpointTable {
    /// 520 → 1, 720 → 2, 1200 → 3, ∞ → 4 fields per row
    fn default() -> Self {
        Self(vec![
            Breakpoint::new(520.0, 1),
            Breakpoint::new(720.0, 2),
            Breakpoint::new(1200.0, 3),
            Breakpoint::new(f64::INFINITY, 4),
        ])
    }
}

impl<'de> Deserialize<'de> for BreakpointTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<Breakpoint>::deserialize(deserializer)?;
        BreakpointTable::new(entries).map_err(serde::de::Error::custom)
    }
}
