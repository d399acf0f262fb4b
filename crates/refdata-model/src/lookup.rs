use std::collections::HashMap;

/// Set of codes compared without regard to ASCII case.
///
/// The first spelling inserted for a key is the one reported by [`get`].
///
/// [`get`]: CaseInsensitiveSet::get
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveSet {
    map: HashMap<String, String>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for name in names {
            set.insert(name.as_ref());
        }
        set
    }

    /// Returns false when the key was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let key = fold(name);
        if self.map.contains_key(&key) {
            return false;
        }
        self.map.insert(key, name.trim().to_string());
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&fold(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&fold(name))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Map keyed by codes compared without regard to ASCII case.
///
/// `insert` keeps the first value for a key; later inserts are ignored.
#[derive(Debug, Clone)]
pub struct CaseInsensitiveMap<V> {
    map: HashMap<String, V>,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: V) -> bool {
        let key = fold(key);
        if self.map.contains_key(&key) {
            return false;
        }
        self.map.insert(key, value);
        true
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.map.get(&fold(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(&fold(key))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for CaseInsensitiveMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key.as_ref(), value);
        }
        map
    }
}

fn fold(value: &str) -> String {
    value.trim().to_ascii_uppercase()
}
