use crate::units::DEFAULT_UNIT;

/// Per-call knobs for [`compute_distance`](crate::compute_distance).
///
/// `Options::default()` stands in for "no options": floored meters returned
/// as a plain number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Keep the fractional part instead of flooring.
    pub exact: bool,
    /// Return `"<value> <unit>"` instead of a number.
    pub format: bool,
    /// Return whether the distance is below this value. Zero and `NaN` count as unset.
    pub limit: Option<f64>,
    /// Unit name, case-insensitive. Defaults to meters.
    pub unit: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn with_format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    pub fn with_limit(mut self, limit: f64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub(crate) fn unit(&self) -> Option<&str> {
        self.unit.as_deref().filter(|u| !u.is_empty())
    }

    /// The label used when formatting: the requested unit as written, even
    /// when it is not in the table.
    pub fn unit_label(&self) -> &str {
        self.unit().unwrap_or(DEFAULT_UNIT)
    }

    pub(crate) fn active_limit(&self) -> Option<f64> {
        self.limit.filter(|l| *l != 0.0 && !l.is_nan())
    }
}
