//! Heap entries.

/// A heap entry: an ordering key and the data it carries.
///
/// The key is fixed at construction, since changing it in place would
/// break the heap ordering. The data is owned by the node and can be
/// replaced or mutated freely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Node<K, V> {
    key: K,
    data: V,
}

impl<K, V> Node<K, V> {
    /// Create a node ordered by `key` and carrying `data`.
    pub fn new(key: K, data: V) -> Self {
        Self { key, data }
    }

    /// The ordering key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The carried data.
    pub fn data(&self) -> &V {
        &self.data
    }

    /// Mutable access to the carried data.
    pub fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    /// Replace the carried data, returning the previous value.
    pub fn set_data(&mut self, data: V) -> V {
        std::mem::replace(&mut self.data, data)
    }

    /// Consume the node and return its data.
    pub fn into_data(self) -> V {
        self.data
    }

    /// Consume the node and return `(key, data)`.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.data)
    }
}

impl<K> From<K> for Node<K, ()> {
    fn from(key: K) -> Self {
        Self::new(key, ())
    }
}
