//! Core types for scoped, tagged metric registries.
//!
//! # Overview
//! This crate defines the vocabulary shared by the `mpmetrics` family of
//! crates: metric identities, their metadata, and the registries that hold
//! them, partitioned into a small fixed set of scopes.
//!
//! ## Names, identities, and metadata
//! The model works with three distinct granularities, and keeping them apart
//! is most of the point of this crate:
//!
//! - a *metric name* is a logical measurement, such as `requests`;
//! - a *metric identity* ([`MetricId`]) is a name plus a specific tag
//!   assignment, such as `requests{method=GET}` — the unit of actual
//!   measurement. Multiple identities may share a name, differing only in
//!   their tags;
//! - [`Metadata`] (unit, type, description, display name) is a property of the
//!   *name*, shared by every identity under that name.
//!
//! ## Scopes
//! Registries are partitioned into the fixed scopes of [`Scope`]: base,
//! vendor, and application. A [`MetricRegistries`] map hands out one
//! [`MetricRegistry`] per scope, and a scope that has never been used is
//! reported as absent rather than empty, which exporters surface to their
//! callers.
//!
//! ## Exporters
//! The [`Exporter`] trait is the read side: implementations take a consistent
//! snapshot of a registry and render it to text in some wire format. This
//! crate defines only the trait; the actual formats live in the exporter
//! crates of the family.
#![deny(missing_docs)]

mod common;
pub use self::common::{SharedString, Unit};

mod tag;
pub use self::tag::{IntoTags, Tag};

mod id;
pub use self::id::MetricId;

mod kind;
pub use self::kind::MetricType;

mod metadata;
pub use self::metadata::Metadata;

mod registry;
pub use self::registry::{MetricRegistries, MetricRegistry, Scope};

mod exporter;
pub use self::exporter::{ExportError, Exporter};
