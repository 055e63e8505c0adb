//! Glob matching for file names
//!
//! Only `*` (any run of characters) and `?` (exactly one character) are
//! wildcards. Everything else is matched literally against the whole name.

use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
pub struct GlobPattern {
    regex: Regex,
}

impl GlobPattern {
    pub fn new(glob: &str, case_insensitive: bool) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&to_regex(glob))
            .case_insensitive(case_insensitive)
            .dot_matches_new_line(true)
            .build()?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

fn to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() + 8);
    out.push('^');
    for c in glob.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            other => out.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    out.push('$');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(glob: &str, name: &str) -> bool {
        GlobPattern::new(glob, false).unwrap().is_match(name)
    }

    #[test]
    fn star_matches_any_run() {
        assert!(matches("*.txt", "notes.txt"));
        assert!(matches("*.txt", ".txt"));
        assert!(!matches("*.txt", "notes.txt.bak"));
        assert!(matches("n*s.*", "notes.md"));
    }

    #[test]
    fn question_mark_matches_one_character() {
        assert!(matches("a?.txt", "ab.txt"));
        assert!(!matches("a?.txt", "a.txt"));
        assert!(!matches("a?.txt", "abc.txt"));
    }

    #[test]
    fn anchored_at_both_ends() {
        assert!(!matches("note", "notes.txt"));
        assert!(!matches("txt", "a.txt"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(!matches("a.txt", "abtxt"));
        assert!(matches("(draft)+[1].txt", "(draft)+[1].txt"));
        assert!(!matches("a|b.txt", "a"));
        assert!(matches("cost$.md", "cost$.md"));
    }

    #[test]
    fn case_sensitivity_is_configurable() {
        assert!(!matches("*.TXT", "a.txt"));
        assert!(GlobPattern::new("*.TXT", true).unwrap().is_match("a.txt"));
    }
}
