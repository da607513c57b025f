use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use parking_lot::RwLock;

use crate::{Metadata, MetricId};

/// A partition of the metric registry.
///
/// Every metric name belongs to exactly one scope at a time.  The set of
/// scopes is fixed: exporters emit one document per scope under a fixed key,
/// so scopes cannot be invented at runtime.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Scope {
    /// Metrics the runtime itself is required to provide.
    Base,
    /// Metrics provided by the hosting vendor.
    Vendor,
    /// Metrics registered by the application.
    Application,
}

impl Scope {
    /// All scopes, in the order exporters emit them.
    pub const ALL: [Scope; 3] = [Scope::Base, Scope::Vendor, Scope::Application];

    /// Gets the string form of this `Scope`.
    pub fn as_str(&self) -> &str {
        match self {
            Scope::Base => "base",
            Scope::Vendor => "vendor",
            Scope::Application => "application",
        }
    }

    /// Converts the string representation of a scope back into `Scope` if possible.
    ///
    /// The value passed here should match the output of [`Scope::as_str`].
    pub fn from_string(s: &str) -> Option<Scope> {
        match s {
            "base" => Some(Scope::Base),
            "vendor" => Some(Scope::Vendor),
            "application" => Some(Scope::Application),
            _ => None,
        }
    }
}

/// Storage for the metrics of one scope.
///
/// A registry tracks two things, at two different granularities: the metadata
/// record of every known metric name, and the set of live tagged identities.
/// Both collections are insertion-ordered, so two reads of an unmodified
/// registry observe the same iteration order.
///
/// The accessors hand out snapshots: each call acquires the corresponding lock
/// once, clones the collection, and releases the lock.  Readers that need a
/// consistent view across both collections take both snapshots up front and
/// compute on the clones.
pub struct MetricRegistry {
    metadata: RwLock<IndexMap<String, Metadata>>,
    metric_ids: RwLock<IndexSet<MetricId>>,
}

impl MetricRegistry {
    /// Creates a new, empty `MetricRegistry`.
    pub fn new() -> Self {
        Self { metadata: RwLock::new(IndexMap::new()), metric_ids: RwLock::new(IndexSet::new()) }
    }

    /// Registers metadata for `name` if none is present yet.
    ///
    /// The first registration wins; re-registering a name leaves the existing
    /// record untouched.  Returns whether the record was inserted.
    pub fn register_metadata<N>(&self, name: N, metadata: Metadata) -> bool
    where
        N: Into<String>,
    {
        let name = name.into();
        let mut records = self.metadata.write();
        if records.contains_key(name.as_str()) {
            false
        } else {
            records.insert(name, metadata);
            true
        }
    }

    /// Records a live metric identity.
    ///
    /// Registering the same identity twice is a no-op; the identity keeps its
    /// original position in iteration order.
    pub fn register(&self, id: MetricId) {
        self.metric_ids.write().insert(id);
    }

    /// Removes a live metric identity, returning whether it was present.
    ///
    /// The metadata record of the identity's name is kept: a name with zero
    /// live identities is still a known metric.
    pub fn unregister(&self, id: &MetricId) -> bool {
        self.metric_ids.write().shift_remove(id)
    }

    /// Returns a snapshot of the metadata records, keyed by metric name.
    pub fn metadata(&self) -> IndexMap<String, Metadata> {
        self.metadata.read().clone()
    }

    /// Returns a snapshot of the live metric identities, in insertion order.
    pub fn metric_ids(&self) -> Vec<MetricId> {
        self.metric_ids.read().iter().cloned().collect()
    }
}

impl Default for MetricRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The scope-to-registry map.
///
/// Scopes start out absent and come into existence on first use via
/// [`get_or_create`](MetricRegistries::get_or_create).  [`get`](MetricRegistries::get)
/// reports an untouched scope as `None`, which exporters pass through to their
/// callers as "scope not configured" — deliberately distinct from a scope
/// whose registry exists but is empty.
pub struct MetricRegistries {
    registries: RwLock<IndexMap<Scope, Arc<MetricRegistry>>>,
}

impl MetricRegistries {
    /// Creates a new `MetricRegistries` with every scope absent.
    pub fn new() -> Self {
        Self { registries: RwLock::new(IndexMap::new()) }
    }

    /// Returns the registry for `scope`, or `None` if the scope has never been used.
    pub fn get(&self, scope: Scope) -> Option<Arc<MetricRegistry>> {
        self.registries.read().get(&scope).cloned()
    }

    /// Returns the registry for `scope`, creating it if the scope is absent.
    pub fn get_or_create(&self, scope: Scope) -> Arc<MetricRegistry> {
        let mut registries = self.registries.write();
        registries.entry(scope).or_insert_with(|| Arc::new(MetricRegistry::new())).clone()
    }
}

impl Default for MetricRegistries {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{MetricRegistries, MetricRegistry, Scope};
    use crate::{Metadata, MetricId, MetricType, Tag};

    #[test]
    fn test_scope_conversions() {
        for scope in Scope::ALL {
            assert_eq!(Some(scope), Scope::from_string(scope.as_str()));
        }
        assert_eq!(None, Scope::from_string("global"));
    }

    #[test]
    fn test_first_metadata_registration_wins() {
        let registry = MetricRegistry::new();

        assert!(registry.register_metadata("requests", Metadata::new(MetricType::Counter)));
        assert!(!registry.register_metadata("requests", Metadata::new(MetricType::Gauge)));

        let metadata = registry.metadata();
        assert_eq!(metadata.get("requests").map(Metadata::metric_type), Some(MetricType::Counter));
    }

    #[test]
    fn test_identity_set_deduplicates() {
        let registry = MetricRegistry::new();
        let id = MetricId::from_name_and_tags("requests", vec![Tag::new("method", "GET")]);

        registry.register(id.clone());
        registry.register(id.clone());
        assert_eq!(registry.metric_ids(), vec![id.clone()]);

        assert!(registry.unregister(&id));
        assert!(!registry.unregister(&id));
        assert!(registry.metric_ids().is_empty());
    }

    #[test]
    fn test_scopes_absent_until_created() {
        let registries = MetricRegistries::new();
        assert!(registries.get(Scope::Application).is_none());

        let registry = registries.get_or_create(Scope::Application);
        registry.register_metadata("requests", Metadata::new(MetricType::Counter));

        let found = registries.get(Scope::Application).expect("scope should now exist");
        assert!(found.metadata().contains_key("requests"));
        assert!(registries.get(Scope::Base).is_none());
    }
}
