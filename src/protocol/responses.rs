//! Shell response formatting

use crate::storage::IndexStats;

pub const HELP_TEXT: &str = "\
Commands:
  list                 show all files (case-insensitive order)
  add <name>           create an empty file
  delete <name>        delete a file (aliases: del, rm)
  search <name>        check whether a file exists
  find <pattern>       list files matching a pattern (* and ? wildcards)
  stats                show a summary of the directory
  refresh              re-read the directory from disk
  help                 show this help
  quit                 leave (aliases: exit, q)";

/// Numbered listing of `names`, or a note that there is nothing to show.
pub fn format_listing(names: &[String], empty_note: &str) -> String {
    if names.is_empty() {
        return empty_note.to_string();
    }

    let mut out = format!("Found {} file(s):", names.len());
    for (i, name) in names.iter().enumerate() {
        out.push_str(&format!("\n{:>3}. {}", i + 1, name));
    }
    out
}

pub fn format_stats(stats: &IndexStats) -> String {
    let mut out = format!(
        "Directory: {}\nTotal files: {}",
        stats.root.display(),
        stats.total
    );
    if let (Some(first), Some(last)) = (&stats.first, &stats.last) {
        out.push_str(&format!("\nFirst file: {}\nLast file: {}", first, last));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn listing_is_numbered() {
        let names = vec!["a.txt".to_string(), "b.txt".to_string()];
        assert_eq!(
            format_listing(&names, "none"),
            "Found 2 file(s):\n  1. a.txt\n  2. b.txt"
        );
        assert_eq!(format_listing(&[], "none"), "none");
    }

    #[test]
    fn stats_omit_bounds_when_empty() {
        let stats = IndexStats {
            total: 0,
            root: PathBuf::from("/data"),
            first: None,
            last: None,
        };
        let text = format_stats(&stats);
        assert!(text.contains("Total files: 0"));
        assert!(!text.contains("First file"));
    }
}
