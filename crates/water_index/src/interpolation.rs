//! Piecewise-linear lookup tables used by the BACH sub-scores.
//!
//! A table maps a raw measurement onto a 0–100 sub-score. Values at or below
//! the first tabulated x take the first y, values above the last tabulated x
//! take the last y, everything in between is interpolated inside the pair
//! `x_i < raw <= x_{i+1}`.

use crate::error::TableError;

/// Linear interpolation between `p1` and `p2` at `x`.
///
/// Intended for `p1.0 < x <= p2.0`. There is no bounds check and `p1.0 == p2.0`
/// divides by zero; [`LookupTable::evaluate`] never selects such a pair.
#[inline]
pub fn lin_est(p1: (f64, f64), p2: (f64, f64), x: f64) -> f64 {
    p1.1 + (p2.1 - p1.1) / (p2.0 - p1.0) * (x - p1.0)
}

/// A named, static table of `(x, y)` points.
#[derive(Debug, Clone, Copy)]
pub struct LookupTable {
    pub name: &'static str,
    pub points: &'static [(f64, f64)],
}

impl LookupTable {
    pub const fn new(name: &'static str, points: &'static [(f64, f64)]) -> Self {
        Self { name, points }
    }

    /// Clamp and interpolate `raw`.
    ///
    /// When more than one pair brackets `raw` the last one wins. This only
    /// happens for tables whose x column is not monotonic.
    ///
    /// Returns `None` for a NaN input or an empty table.
    pub fn evaluate(&self, raw: f64) -> Option<f64> {
        let &(x_min, y_first) = self.points.first()?;
        let &(x_max, y_last) = self.points.last()?;
        if raw.is_nan() {
            return None;
        }
        if raw <= x_min {
            return Some(y_first);
        }
        if raw > x_max {
            return Some(y_last);
        }
        self.points
            .windows(2)
            .rev()
            .find(|pair| pair[0].0 < raw && raw <= pair[1].0)
            .map(|pair| lin_est(pair[0], pair[1], raw))
    }

    /// Smallest and largest tabulated y. Every `evaluate` result lies inside.
    pub fn y_range(&self) -> (f64, f64) {
        self.points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            })
    }

    /// Check the table invariants `evaluate` relies on.
    ///
    /// With the first point at the smallest x and the last at the largest,
    /// the rising steps between them bracket every value in between, so no
    /// zero-width pair is ever selected.
    pub fn validate(&self) -> Result<(), TableError> {
        let table = self.name;
        if self.points.len() < 2 {
            return Err(TableError::TooShort {
                table,
                len: self.points.len(),
            });
        }
        if let Some(index) = self
            .points
            .iter()
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(TableError::NonFinite { table, index });
        }

        let x_first = self.points[0].0;
        let x_last = self.points[self.points.len() - 1].0;
        if self
            .points
            .iter()
            .any(|&(x, _)| x < x_first || x > x_last)
        {
            return Err(TableError::Unbounded { table });
        }
        Ok(())
    }

    /// Indices `i` where `points[i + 1].0 <= points[i].0`.
    pub fn non_monotonic_steps(&self) -> Vec<usize> {
        self.points
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[1].0 <= pair[0].0)
            .map(|(i, _)| i)
            .collect()
    }
}
