//! Exports metric metadata in JSON format.
//!
//! Metadata is a property of a metric name, shared by every tagged identity
//! under that name.  This exporter emits one node per name, grouping the
//! tag-sets of all live identities into the node's `tags` array.  For a
//! registry holding a `requests` counter measured separately per HTTP method,
//! the scope document looks like this:
//!
//! ```json
//! {
//!     "requests": {
//!         "unit": "none",
//!         "type": "counter",
//!         "tags": [
//!             [
//!                 "method=GET"
//!             ],
//!             [
//!                 "method=POST"
//!             ]
//!         ]
//!     }
//! }
//! ```
//!
//! Metric names are sorted alphabetically; the tag-sets keep the registry's
//! own iteration order.  Optional metadata fields (`unit`, `description`,
//! `displayName`) are omitted entirely when unset, while `tags` is always
//! present, even when no identity is live.
#![deny(missing_docs)]

mod metadata;
pub use self::metadata::JsonMetadataExporter;
