use crate::{MetricType, SharedString, Unit};

/// Metadata describing a metric name.
///
/// Metadata is a property of the name, not of an individual tagged identity:
/// every identity sharing a name shares the one metadata record registered for
/// it.
///
/// All metrics have a [`metric_type`](Metadata::metric_type).  In addition,
/// the following optional fields may be provided:
///
/// - a [`unit`](Metadata::unit) the measured values are expressed in;
/// - a [`description`](Metadata::description), a human-readable explanation of
///   what the metric measures;
/// - a [`display_name`](Metadata::display_name), a human-readable name for
///   dashboards and similar UIs.
///
/// Absent optional fields stay absent: exporters omit them from their output
/// rather than rendering an empty or null placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    metric_type: MetricType,
    unit: Option<Unit>,
    description: Option<SharedString>,
    display_name: Option<SharedString>,
}

impl Metadata {
    /// Constructs a new [`Metadata`] with the given type and no optional fields.
    pub const fn new(metric_type: MetricType) -> Self {
        Self { metric_type, unit: None, description: None, display_name: None }
    }

    /// Sets the unit the metric's values are expressed in.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Sets the human-readable description of the metric.
    pub fn with_description<D>(mut self, description: D) -> Self
    where
        D: Into<SharedString>,
    {
        self.description = Some(description.into());
        self
    }

    /// Sets the human-readable display name of the metric.
    pub fn with_display_name<D>(mut self, display_name: D) -> Self
    where
        D: Into<SharedString>,
    {
        self.display_name = Some(display_name.into());
        self
    }

    /// Returns the type of the metric.
    pub fn metric_type(&self) -> MetricType {
        self.metric_type
    }

    /// Returns the unit of the metric, if one was provided.
    pub fn unit(&self) -> Option<Unit> {
        self.unit
    }

    /// Returns the description of the metric, if one was provided.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the display name of the metric, if one was provided.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}
