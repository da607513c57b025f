use crate::SharedString;

/// A key/value pair qualifying a metric identity.
///
/// Metrics are always defined by a name, but can optionally be assigned
/// "tags", key/value pairs that distinguish one measured instance of the name
/// from another.  For example, a `requests` metric in a web service might
/// carry a `method` tag, so that `requests{method=GET}` and
/// `requests{method=POST}` are measured separately while still being the same
/// logical metric.
///
/// Tags belong to an identity, not to a name: there is no uniqueness
/// constraint on tag keys across different identities sharing a name.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Tag(pub(crate) SharedString, pub(crate) SharedString);

impl Tag {
    /// Creates a [`Tag`] from a key and value.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<SharedString>,
        V: Into<SharedString>,
    {
        Tag(key.into(), value.into())
    }

    /// Creates a [`Tag`] from a static key and value.
    pub const fn from_static_parts(key: &'static str, value: &'static str) -> Self {
        Tag(SharedString::Borrowed(key), SharedString::Borrowed(value))
    }

    /// Key of this tag.
    pub fn key(&self) -> &str {
        self.0.as_ref()
    }

    /// Value of this tag.
    pub fn value(&self) -> &str {
        self.1.as_ref()
    }

    /// Consumes this [`Tag`], returning the key and value.
    pub fn into_parts(self) -> (SharedString, SharedString) {
        (self.0, self.1)
    }
}

impl<K, V> From<&(K, V)> for Tag
where
    K: Into<SharedString> + Clone,
    V: Into<SharedString> + Clone,
{
    fn from(pair: &(K, V)) -> Tag {
        Tag::new(pair.0.clone(), pair.1.clone())
    }
}

/// A value that can be converted to [`Tag`]s.
pub trait IntoTags {
    /// Consumes this value, turning it into a vector of [`Tag`]s.
    fn into_tags(self) -> Vec<Tag>;
}

impl IntoTags for Vec<Tag> {
    fn into_tags(self) -> Vec<Tag> {
        self
    }
}

impl<T, G> IntoTags for &T
where
    Self: IntoIterator<Item = G>,
    G: Into<Tag>,
{
    fn into_tags(self) -> Vec<Tag> {
        self.into_iter().map(|t| t.into()).collect()
    }
}
