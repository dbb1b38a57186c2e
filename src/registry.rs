use std::hash::Hash;

use hashbrown::{Equivalent, HashMap};

/// Collection of algorithms looked up by key.
pub struct Registry<T, K = String> {
    items: HashMap<K, T>,
}

impl<T, K> Registry<T, K> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.keys()
    }
}

impl<T, K> Default for Registry<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Registry<T, K>
where
    K: Hash + Eq,
{
    pub fn register(&mut self, key: K, item: T) {
        self.items.insert(key, item);
    }

    pub fn get<Q>(&self, k: &Q) -> Option<&T>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.items.get(k)
    }
}
