//! Loading of the newline-delimited URL list.

use std::path::Path;

use crate::error::{ProbeError, Result};

/// Read the URL list at `path`.
/// Blank lines and `#` comments are skipped; entries are not validated,
/// a malformed URL simply fails when it is probed.
pub fn load_targets(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path).map_err(|source| ProbeError::UrlList {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_targets(&raw))
}

pub fn parse_targets(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let raw = "# production panel\n\
                   https://panel.example.com/\n\
                   \n\
                   \t  \n\
                   \x20  # indented comment\n\
                   https://panel.example.com/users  \n\
                   https://panel.example.com/\n";
        assert_eq!(
            parse_targets(raw),
            vec![
                "https://panel.example.com/",
                "https://panel.example.com/users",
                "https://panel.example.com/",
            ]
        );
    }

    #[test]
    fn test_malformed_entries_pass_through() {
        assert_eq!(parse_targets("not a url\r\n"), vec!["not a url"]);
    }

    #[test]
    fn test_all_comments_yield_nothing() {
        assert!(parse_targets("# one\n\n# two\n").is_empty());
        assert!(parse_targets("").is_empty());
    }

    #[test]
    fn test_load_targets_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("urls.txt");
        std::fs::write(&path, "https://a.example.com\n# skip\nhttps://b.example.com\n")
            .expect("write urls");

        let targets = load_targets(&path).expect("load");
        assert_eq!(targets, vec!["https://a.example.com", "https://b.example.com"]);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = load_targets(Path::new("monitoring/missing.txt")).unwrap_err();
        assert!(matches!(err, ProbeError::UrlList { .. }));
        assert!(err.is_configuration());
    }
}
