use thiserror::Error as ThisError;

use crate::{MetricId, Scope};

/// Errors that could occur while exporting registry state.
#[derive(Debug, ThisError)]
pub enum ExportError {
    /// The requested export granularity is not defined for this exporter.
    ///
    /// This is a deliberate API restriction, not a missing feature: the
    /// message explains why the granularity cannot be produced.  It is kept
    /// distinct from a not-found result so callers can tell the two apart.
    #[error("unsupported export granularity: {0}")]
    Unsupported(&'static str),
}

/// Renders registry state into a wire representation.
///
/// Exporters hold no state beyond fixed configuration: every call is a pure
/// function of a registry snapshot taken at call time, performs no I/O, and
/// returns a fully rendered text buffer.  Absent scopes and unknown names are
/// reported as `None`, never as errors; the transport layer sitting in front
/// of an exporter decides what status that maps to.
pub trait Exporter {
    /// The media type of the rendered output.
    fn content_type(&self) -> &'static str;

    /// Renders every scope into one document, keyed by scope.
    ///
    /// Each of the fixed scope keys is always present.  A scope that has never
    /// been configured renders as an explicit absence marker rather than an
    /// empty document, and never aborts the rest of the tree.
    fn export_all_scopes(&self) -> String;

    /// Renders one scope, or `None` if the scope has never been configured.
    fn export_one_scope(&self, scope: Scope) -> Option<String>;

    /// Renders one metric name within a scope, or `None` if the scope or the
    /// name is unknown.
    fn export_metrics_by_name(&self, scope: Scope, name: &str) -> Option<String>;

    /// Renders one tagged identity within a scope.
    ///
    /// Not every exporter can define output at this granularity; those that
    /// cannot fail with [`ExportError::Unsupported`] unconditionally, so that
    /// callers can tell "unsupported" apart from "not found".
    fn export_one_metric(&self, scope: Scope, id: &MetricId) -> Result<String, ExportError>;
}
