//! Raw integer to physical value translation for signals.
//!
//! Decoding applies `physical = raw * factor + offset`, clamps to
//! `[min, max]` (unless both bounds are the zero sentinel), and renders a
//! display string: the value-table label when one matches, else the number
//! with the unit appended. Encoding inverts the scaling with ties-to-even
//! rounding and never clamps.

use crate::signal::Signal;

impl Signal {
    /// Scales and clamps a raw integer into its physical value.
    pub fn to_physical(&self, raw: i64) -> f64 {
        self.scale_and_clamp(raw as f64)
    }

    /// Scales and clamps an already-widened raw value. Unsigned 64-bit raw
    /// values exceed `i64`, so callers widen from the unsigned domain before
    /// any lossy cast.
    pub fn scale_and_clamp(&self, raw: f64) -> f64 {
        let physical = raw * self.factor + self.offset;

        if self.min == 0.0 && self.max == 0.0 {
            physical
        } else {
            physical.clamp(self.min, self.max)
        }
    }

    /// Inverse scaling: `round((physical - offset) / factor)`, rounding
    /// ties to even. No clamping is applied on this direction.
    pub fn to_raw(&self, physical: f64) -> i64 {
        ((physical - self.offset) / self.factor).round_ties_even() as i64
    }

    /// Renders a physical value for presentation: the value-table label when
    /// one matches, else the number suffixed with the unit.
    pub fn display(&self, physical: f64) -> String {
        if let Some(label) = self.label_for(physical) {
            return label.to_string();
        }

        let number = match as_integral(physical) {
            Some(value) => format!("{}", value),
            None => format!("{}", physical),
        };

        match &self.unit {
            Some(unit) if !unit.is_empty() => format!("{} {}", number, unit),
            _ => number,
        }
    }

    /// Value-table lookup. Labels are keyed by integral physical values;
    /// fractional values never match.
    fn label_for(&self, physical: f64) -> Option<&str> {
        let labels = self.labels.as_ref()?;

        labels.get(&as_integral(physical)?).map(String::as_str)
    }
}

/// Integral physical values representable in `i64`. Anything else formats as
/// a float and never matches a value-table entry; an unguarded `as i64` cast
/// would saturate and misreport values at or beyond 2^63.
fn as_integral(physical: f64) -> Option<i64> {
    if physical.fract() != 0.0 {
        return None;
    }

    if physical < i64::MIN as f64 || physical >= i64::MAX as f64 {
        return None;
    }

    Some(physical as i64)
}
