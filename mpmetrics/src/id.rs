use crate::{IntoTags, SharedString, Tag};
use std::{fmt, slice::Iter};

/// A metric identity.
///
/// An identity always includes a name, and can optionally include tags that
/// distinguish it from other identities under the same name.  Two identities
/// are equal only when both the name and the full tag list match; the tag
/// list keeps the order the tags were supplied in.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct MetricId {
    name: SharedString,
    tags: Vec<Tag>,
}

impl MetricId {
    /// Creates a `MetricId` from a name.
    pub fn from_name<N>(name: N) -> Self
    where
        N: Into<SharedString>,
    {
        MetricId { name: name.into(), tags: Vec::new() }
    }

    /// Creates a `MetricId` from a name and a set of `Tag`s.
    pub fn from_name_and_tags<N, T>(name: N, tags: T) -> Self
    where
        N: Into<SharedString>,
        T: IntoTags,
    {
        MetricId { name: name.into(), tags: tags.into_tags() }
    }

    /// Adds a new set of tags to this identity.
    ///
    /// New tags will be appended to any existing tags.
    pub fn add_tags<T>(&mut self, new_tags: T)
    where
        T: IntoTags,
    {
        self.tags.extend(new_tags.into_tags());
    }

    /// Name of this identity.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Tags of this identity, if they exist.
    pub fn tags(&self) -> Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Consumes this `MetricId`, returning the name and any tags.
    pub fn into_parts(self) -> (SharedString, Vec<Tag>) {
        (self.name, self.tags)
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.tags.is_empty() {
            write!(f, "MetricId({})", self.name)
        } else {
            let kv_pairs =
                self.tags.iter().map(|tag| format!("{} = {}", tag.0, tag.1)).collect::<Vec<_>>();
            write!(f, "MetricId({}, [{}])", self.name, kv_pairs.join(", "))
        }
    }
}

impl From<String> for MetricId {
    fn from(name: String) -> MetricId {
        MetricId::from_name(name)
    }
}

impl From<&'static str> for MetricId {
    fn from(name: &'static str) -> MetricId {
        MetricId::from_name(name)
    }
}

impl<N, T> From<(N, T)> for MetricId
where
    N: Into<SharedString>,
    T: IntoTags,
{
    fn from(parts: (N, T)) -> MetricId {
        MetricId::from_name_and_tags(parts.0, parts.1)
    }
}
