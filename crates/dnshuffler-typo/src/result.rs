// Ordered mapping from input domain to its candidate domains.

use hashbrown::HashMap;

/// Result of a batch run: each input domain with its encoded candidates.
///
/// Domains keep the order they were first inserted in; candidate lists keep
/// discovery order. Serializes as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypoMap {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl TypoMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the candidates for `domain`.
    ///
    /// Inserting a domain that is already present replaces its candidates
    /// and keeps its original position.
    pub fn insert(&mut self, domain: String, candidates: Vec<String>) {
        if let Some(&i) = self.index.get(&domain) {
            self.entries[i].1 = candidates;
            return;
        }
        self.index.insert(domain.clone(), self.entries.len());
        self.entries.push((domain, candidates));
    }

    /// Candidates generated for `domain`.
    pub fn get(&self, domain: &str) -> Option<&[String]> {
        self.index
            .get(domain)
            .map(|&i| self.entries[i].1.as_slice())
    }

    /// Number of domains.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of candidates across all domains.
    pub fn candidate_count(&self) -> usize {
        self.entries.iter().map(|(_, c)| c.len()).sum()
    }

    /// Iterate over `(domain, candidates)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(domain, candidates)| (domain.as_str(), candidates.as_slice()))
    }

    /// Iterate over `(domain, candidate)` pairs, flattened.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().flat_map(|(domain, candidates)| {
            candidates.iter().map(move |c| (domain, c.as_str()))
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypoMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (domain, candidates) in &self.entries {
            map.serialize_entry(domain, candidates)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_insertion_order() {
        let mut map = TypoMap::new();
        map.insert("zeta.com".into(), strings(&["zet.com"]));
        map.insert("alpha.com".into(), strings(&["alha.com", "lpha.com"]));
        let domains: Vec<&str> = map.iter().map(|(d, _)| d).collect();
        assert_eq!(domains, vec!["zeta.com", "alpha.com"]);
        assert_eq!(map.candidate_count(), 3);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut map = TypoMap::new();
        map.insert("a.com".into(), strings(&["x.com"]));
        map.insert("b.com".into(), strings(&["y.com"]));
        map.insert("a.com".into(), strings(&["z.com"]));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a.com"), Some(&strings(&["z.com"])[..]));
        assert_eq!(map.iter().next().map(|(d, _)| d), Some("a.com"));
    }

    #[test]
    fn pairs_flatten_entries() {
        let mut map = TypoMap::new();
        map.insert("ab.com".into(), strings(&["a.com", "b.com"]));
        map.insert("cd.com".into(), Vec::new());
        let pairs: Vec<(&str, &str)> = map.pairs().collect();
        assert_eq!(pairs, vec![("ab.com", "a.com"), ("ab.com", "b.com")]);
        assert_eq!(map.get("cd.com"), Some(&[][..]));
        assert_eq!(map.get("missing.com"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_ordered_object() {
        let mut map = TypoMap::new();
        map.insert("zz.com".into(), strings(&["z.com"]));
        map.insert("aa.com".into(), strings(&["a.com"]));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zz.com":["z.com"],"aa.com":["a.com"]}"#);
    }
}
