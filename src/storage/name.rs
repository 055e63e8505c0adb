//! Case-insensitive file name key
//!
//! `FileName` keeps the name as it was stored but compares and orders by its
//! lowercased characters, so a `BTreeSet<FileName>` treats "A.txt" and
//! "a.txt" as the same entry.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct FileName(String);

impl FileName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl PartialEq for FileName {
    fn eq(&self, other: &Self) -> bool {
        cmp_ignore_case(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for FileName {}

impl PartialOrd for FileName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FileName {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ignore_case(&self.0, &other.0)
    }
}
