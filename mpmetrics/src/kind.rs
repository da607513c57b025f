/// Metric type.
///
/// Defines the type, or kind, of a metric.  This is a closed set: the type is
/// part of the metadata contract of a metric name and is rendered verbatim by
/// exporters.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MetricType {
    /// A monotonically increasing count.
    Counter,
    /// A count of concurrently running invocations.
    ConcurrentGauge,
    /// A sampled instantaneous value.
    Gauge,
    /// A rate-tracking measurement.
    Meter,
    /// A distribution of recorded values.
    Histogram,
    /// A combined rate and duration measurement.
    Timer,
}

impl MetricType {
    /// Gets the string form of this `MetricType`.
    pub fn as_str(&self) -> &str {
        match self {
            MetricType::Counter => "counter",
            MetricType::ConcurrentGauge => "concurrent gauge",
            MetricType::Gauge => "gauge",
            MetricType::Meter => "meter",
            MetricType::Histogram => "histogram",
            MetricType::Timer => "timer",
        }
    }

    /// Converts the string representation of a type back into `MetricType` if possible.
    ///
    /// The value passed here should match the output of [`MetricType::as_str`].
    pub fn from_string(s: &str) -> Option<MetricType> {
        match s {
            "counter" => Some(MetricType::Counter),
            "concurrent gauge" => Some(MetricType::ConcurrentGauge),
            "gauge" => Some(MetricType::Gauge),
            "meter" => Some(MetricType::Meter),
            "histogram" => Some(MetricType::Histogram),
            "timer" => Some(MetricType::Timer),
            _ => None,
        }
    }
}
