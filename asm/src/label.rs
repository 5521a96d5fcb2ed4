use indexmap::IndexMap;

/// Label table built during preprocessing. Re-binding an existing name keeps
/// the first binding, matching first-match resolution over a duplicate list.
#[derive(Debug, Default)]
pub struct Labels(IndexMap<String, u16>);

impl Labels {
    pub fn new() -> Self {
        Labels(IndexMap::new())
    }

    pub fn insert(&mut self, name: &str, address: u16) {
        self.0.entry(name.to_string()).or_insert(address);
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let mut labels = Labels::new();
        labels.insert("START", 0);
        labels.insert("SLUTT", 12);
        assert_eq!(Some(0), labels.get("START"));
        assert_eq!(Some(12), labels.get("SLUTT"));
        assert_eq!(None, labels.get("MIDTEN"));
        // Names are case-sensitive.
        assert_eq!(None, labels.get("start"));
    }

    #[test]
    fn test_first_binding_wins() {
        let mut labels = Labels::new();
        labels.insert("X", 2);
        labels.insert("X", 8);
        assert_eq!(Some(2), labels.get("X"));
        assert_eq!(1, labels.len());
    }
}
