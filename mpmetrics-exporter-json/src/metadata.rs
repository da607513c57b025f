use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::debug;

use mpmetrics::{
    ExportError, Exporter, Metadata, MetricId, MetricRegistries, MetricRegistry, Scope,
};

/// Exports the metadata of registered metrics as a pretty-printed JSON document.
///
/// One node is emitted per metric name, carrying the name's metadata fields
/// and a `tags` array grouping the tag-sets of every live identity under that
/// name.  Because metadata belongs to the name as a whole, exporting the
/// metadata of a single tagged identity is not a defined operation;
/// [`export_one_metric`](Exporter::export_one_metric) refuses it
/// unconditionally.
pub struct JsonMetadataExporter {
    registries: Arc<MetricRegistries>,
}

impl JsonMetadataExporter {
    /// Creates an exporter reading from the given registries.
    pub fn new(registries: Arc<MetricRegistries>) -> Self {
        Self { registries }
    }

    fn root_json(&self) -> Value {
        let mut root = Map::new();
        for scope in Scope::ALL {
            // An unconfigured scope renders as an explicit null, so callers
            // can tell it apart from a configured-but-empty scope.
            let doc = match self.registries.get(scope) {
                Some(registry) => registry_json(&registry),
                None => Value::Null,
            };
            root.insert(scope.as_str().to_string(), doc);
        }
        Value::Object(root)
    }
}

impl Exporter for JsonMetadataExporter {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn export_all_scopes(&self) -> String {
        debug!("rendering metadata for all scopes");
        stringify(&self.root_json())
    }

    fn export_one_scope(&self, scope: Scope) -> Option<String> {
        let registry = match self.registries.get(scope) {
            Some(registry) => registry,
            None => {
                debug!(scope = scope.as_str(), "scope not configured");
                return None;
            }
        };

        Some(stringify(&registry_json(&registry)))
    }

    fn export_metrics_by_name(&self, scope: Scope, name: &str) -> Option<String> {
        let registry = self.registries.get(scope)?;

        let metadata = registry.metadata();
        let metadata = match metadata.get(name) {
            Some(metadata) => metadata,
            None => {
                debug!(scope = scope.as_str(), name, "no metadata registered under this name");
                return None;
            }
        };

        let metric_ids = registry.metric_ids();
        Some(stringify(&metric_json(metadata, tag_sets_for(&metric_ids, name))))
    }

    fn export_one_metric(&self, scope: Scope, id: &MetricId) -> Result<String, ExportError> {
        debug!(scope = scope.as_str(), id = %id, "refusing single-identity metadata export");
        Err(ExportError::Unsupported(
            "metadata is a property of a metric name, not of a single tagged identity, \
             so no metadata document can be produced for one identity",
        ))
    }
}

fn stringify(doc: &Value) -> String {
    // Documents built here contain only object, array, and string nodes, for
    // which pretty-printing cannot fail.
    serde_json::to_string_pretty(doc).expect("failed to render json output")
}

/// Builds the document for one scope: one key per metric name known to the
/// registry's metadata map, sorted alphabetically.
///
/// Iteration is driven by the metadata map, so an identity whose name has no
/// metadata record is never visited, and a name with no live identities still
/// gets a node (with an empty `tags` array).
fn registry_json(registry: &MetricRegistry) -> Value {
    let mut metadata = registry.metadata();
    metadata.sort_keys();

    let metric_ids = registry.metric_ids();

    let mut doc = Map::new();
    for (name, metadata) in &metadata {
        doc.insert(name.clone(), metric_json(metadata, tag_sets_for(&metric_ids, name)));
    }
    Value::Object(doc)
}

/// Builds the node for one metric name.
///
/// Field order is fixed: `unit`, `type`, `description`, `displayName`, `tags`.
/// Unset optional fields are omitted entirely, while `tags` is always present,
/// even when empty.
fn metric_json(metadata: &Metadata, tag_sets: Vec<Vec<String>>) -> Value {
    let mut node = Map::new();

    if let Some(unit) = metadata.unit() {
        node.insert("unit".to_string(), json!(unit.as_str()));
    }
    node.insert("type".to_string(), json!(metadata.metric_type().as_str()));
    if let Some(description) = metadata.description() {
        node.insert("description".to_string(), json!(description));
    }
    if let Some(display_name) = metadata.display_name() {
        node.insert("displayName".to_string(), json!(display_name));
    }
    node.insert("tags".to_string(), json!(tag_sets));

    Value::Object(node)
}

/// Finds all currently existing identities under `name` in the given snapshot
/// and, for each of them, converts its tags to a list of `key=value` strings.
///
/// One item in the outer list corresponds to one identity; one item in each
/// inner list corresponds to one tag of that identity, in the identity's own
/// tag order.  An untagged identity contributes an empty inner list.
fn tag_sets_for(metric_ids: &[MetricId], name: &str) -> Vec<Vec<String>> {
    metric_ids
        .iter()
        .filter(|id| id.name() == name)
        .map(|id| id.tags().map(|tag| format!("{}={}", tag.key(), tag.value())).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;
    use serde_json::{json, Value};

    use mpmetrics::{
        ExportError, Exporter, Metadata, MetricId, MetricRegistries, MetricType, Scope, Tag, Unit,
    };

    use super::JsonMetadataExporter;

    fn exporter(registries: &Arc<MetricRegistries>) -> JsonMetadataExporter {
        JsonMetadataExporter::new(registries.clone())
    }

    fn request_registries() -> Arc<MetricRegistries> {
        let registries = Arc::new(MetricRegistries::new());
        let registry = registries.get_or_create(Scope::Application);
        registry.register_metadata(
            "requests",
            Metadata::new(MetricType::Counter).with_unit(Unit::None),
        );
        registry.register(MetricId::from_name_and_tags(
            "requests",
            vec![Tag::new("method", "GET")],
        ));
        registry.register(MetricId::from_name_and_tags(
            "requests",
            vec![Tag::new("method", "POST")],
        ));
        registries
    }

    fn pretty(doc: &Value) -> String {
        serde_json::to_string_pretty(doc).unwrap()
    }

    #[test]
    fn test_content_type() {
        let exporter = exporter(&Arc::new(MetricRegistries::new()));
        assert_eq!(exporter.content_type(), "application/json");
    }

    #[test]
    fn test_export_one_scope_groups_tag_variants() {
        let rendered = exporter(&request_registries())
            .export_one_scope(Scope::Application)
            .expect("scope is configured");

        let expected = pretty(&json!({
            "requests": {
                "unit": "none",
                "type": "counter",
                "tags": [["method=GET"], ["method=POST"]],
            }
        }));
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_metric_names_sorted() {
        let registries = Arc::new(MetricRegistries::new());
        let registry = registries.get_or_create(Scope::Base);
        for name in ["uptime", "cpu.load", "Threads", "cpu.count"] {
            registry.register_metadata(name, Metadata::new(MetricType::Gauge));
        }

        let rendered =
            exporter(&registries).export_one_scope(Scope::Base).expect("scope is configured");
        let doc: Value = serde_json::from_str(&rendered).unwrap();
        let keys = doc.as_object().unwrap().keys().cloned().collect::<Vec<_>>();

        // Ordinal sort, so uppercase names come first.
        assert_eq!(keys, vec!["Threads", "cpu.count", "cpu.load", "uptime"]);
    }

    #[test]
    fn test_tags_field_always_present() {
        let registries = Arc::new(MetricRegistries::new());
        let registry = registries.get_or_create(Scope::Application);
        registry.register_metadata("idle", Metadata::new(MetricType::Gauge));
        registry.register_metadata("busy", Metadata::new(MetricType::Gauge));
        registry.register(MetricId::from_name("busy"));

        let rendered = exporter(&registries)
            .export_one_scope(Scope::Application)
            .expect("scope is configured");
        let doc: Value = serde_json::from_str(&rendered).unwrap();

        // No live identity: empty outer array.  One untagged identity: one
        // empty inner array.
        assert_eq!(doc["idle"]["tags"], json!([]));
        assert_eq!(doc["busy"]["tags"], json!([[]]));
    }

    #[test]
    fn test_tag_order_not_resorted() {
        let registries = Arc::new(MetricRegistries::new());
        let registry = registries.get_or_create(Scope::Application);
        registry.register_metadata("io", Metadata::new(MetricType::Meter));
        registry.register(MetricId::from_name_and_tags(
            "io",
            vec![Tag::new("z", "1"), Tag::new("a", "2"), Tag::new("m", "3")],
        ));

        let rendered = exporter(&registries)
            .export_metrics_by_name(Scope::Application, "io")
            .expect("name is registered");
        let doc: Value = serde_json::from_str(&rendered).unwrap();

        // The identity's own tag order carries through to the output,
        // even when it is not alphabetical.
        assert_eq!(doc["tags"], json!([["z=1", "a=2", "m=3"]]));
    }

    #[test]
    fn test_optional_fields_omitted_not_null() {
        let registries = Arc::new(MetricRegistries::new());
        let registry = registries.get_or_create(Scope::Vendor);
        registry.register_metadata("pool.size", Metadata::new(MetricType::Gauge));

        let rendered =
            exporter(&registries).export_one_scope(Scope::Vendor).expect("scope is configured");
        let doc: Value = serde_json::from_str(&rendered).unwrap();
        let node = doc["pool.size"].as_object().unwrap();

        assert!(!node.contains_key("unit"));
        assert!(!node.contains_key("description"));
        assert!(!node.contains_key("displayName"));
        assert_eq!(node.keys().cloned().collect::<Vec<_>>(), vec!["type", "tags"]);
    }

    #[test]
    fn test_full_metadata_field_order() {
        let registries = Arc::new(MetricRegistries::new());
        let registry = registries.get_or_create(Scope::Application);
        registry.register_metadata(
            "latency",
            Metadata::new(MetricType::Timer)
                .with_unit(Unit::Milliseconds)
                .with_description("request latency")
                .with_display_name("Request latency"),
        );

        let rendered = exporter(&registries)
            .export_metrics_by_name(Scope::Application, "latency")
            .expect("name is registered");

        let expected = pretty(&json!({
            "unit": "milliseconds",
            "type": "timer",
            "description": "request latency",
            "displayName": "Request latency",
            "tags": [],
        }));
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_export_by_name_unknown() {
        let registries = request_registries();
        let exporter = exporter(&registries);

        assert!(exporter.export_metrics_by_name(Scope::Application, "unknown").is_none());
        assert!(exporter.export_metrics_by_name(Scope::Base, "requests").is_none());
    }

    #[test]
    fn test_unknown_scope_distinct_from_empty_scope() {
        let registries = Arc::new(MetricRegistries::new());
        registries.get_or_create(Scope::Vendor);
        let exporter = exporter(&registries);

        assert_eq!(exporter.export_one_scope(Scope::Vendor).as_deref(), Some("{}"));
        assert!(exporter.export_one_scope(Scope::Application).is_none());
    }

    #[test]
    fn test_export_all_scopes_marks_absent_scopes() {
        let rendered = exporter(&request_registries()).export_all_scopes();
        let doc: Value = serde_json::from_str(&rendered).unwrap();

        let keys = doc.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, vec!["base", "vendor", "application"]);

        assert_eq!(doc["base"], Value::Null);
        assert_eq!(doc["vendor"], Value::Null);
        assert!(doc["application"]["requests"].is_object());
    }

    #[test]
    fn test_export_one_metric_always_unsupported() {
        let exporter = exporter(&request_registries());

        let live = MetricId::from_name_and_tags("requests", vec![Tag::new("method", "GET")]);
        let missing = MetricId::from_name("no.such.metric");

        for (scope, id) in [(Scope::Application, &live), (Scope::Base, &missing)] {
            match exporter.export_one_metric(scope, id) {
                Err(ExportError::Unsupported(reason)) => {
                    assert!(reason.contains("metric name"));
                }
                other => panic!("expected unsupported error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_identity_without_metadata_excluded() {
        let registries = request_registries();
        let registry = registries.get_or_create(Scope::Application);
        registry.register(MetricId::from_name("orphaned"));

        let rendered = exporter(&registries)
            .export_one_scope(Scope::Application)
            .expect("scope is configured");
        let doc: Value = serde_json::from_str(&rendered).unwrap();

        assert!(doc.as_object().unwrap().get("orphaned").is_none());
    }

    #[test]
    fn test_exports_idempotent() {
        let registries = request_registries();
        let exporter = exporter(&registries);

        assert_eq!(exporter.export_all_scopes(), exporter.export_all_scopes());
        assert_eq!(
            exporter.export_one_scope(Scope::Application),
            exporter.export_one_scope(Scope::Application)
        );
        assert_eq!(
            exporter.export_metrics_by_name(Scope::Application, "requests"),
            exporter.export_metrics_by_name(Scope::Application, "requests")
        );
    }

    proptest! {
        #[test]
        fn test_scope_document_shape(
            names in proptest::collection::btree_map("[a-zA-Z][a-zA-Z0-9_.]{0,12}", 0usize..4, 1..8),
        ) {
            let registries = Arc::new(MetricRegistries::new());
            let registry = registries.get_or_create(Scope::Application);
            for (name, variants) in &names {
                registry.register_metadata(name.clone(), Metadata::new(MetricType::Counter));
                for i in 0..*variants {
                    registry.register(MetricId::from_name_and_tags(
                        name.clone(),
                        vec![Tag::new("variant", i.to_string())],
                    ));
                }
            }

            let rendered = JsonMetadataExporter::new(registries)
                .export_one_scope(Scope::Application)
                .expect("scope is configured");

            // The rendered text must round-trip through a generic parse.
            let doc: Value = serde_json::from_str(&rendered).expect("output must parse back");
            prop_assert_eq!(serde_json::to_string_pretty(&doc).unwrap(), rendered);

            let object = doc.as_object().expect("scope document is an object");

            let keys = object.keys().cloned().collect::<Vec<_>>();
            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(&keys, &sorted);
            prop_assert_eq!(keys.len(), names.len());

            for (name, variants) in &names {
                let tags = object[name.as_str()]["tags"].as_array().expect("tags always present");
                prop_assert_eq!(tags.len(), *variants);
                for tag_set in tags {
                    prop_assert_eq!(tag_set.as_array().expect("tag-set is an array").len(), 1);
                }
            }
        }
    }
}
