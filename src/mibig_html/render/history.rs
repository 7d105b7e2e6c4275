use crate::model::ChangelogEntry;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoryEntry {
    pub version: String,
    pub comments: Vec<String>,
    pub contributors: Vec<String>,
}

/// Changelog entries, oldest version first.
pub fn history_entries(changelog: &[ChangelogEntry]) -> Vec<HistoryEntry> {
    let mut sorted: Vec<&ChangelogEntry> = changelog.iter().collect();
    sorted.sort_by_key(|entry| entry.version_key());
    sorted
        .into_iter()
        .map(|entry| HistoryEntry {
            version: entry.version.clone(),
            comments: entry.comments.clone(),
            contributors: entry.contributors.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_sorted_by_version() {
        let changelog: Vec<ChangelogEntry> = ["3.0", "1.0", "2.0"]
            .iter()
            .map(|v| ChangelogEntry {
                version: v.to_string(),
                comments: vec![format!("changes in {}", v)],
                contributors: vec!["AAAAAAAAAAAAAAAAAAAAAAAA".into()],
            })
            .collect();
        let entries = history_entries(&changelog);
        let versions: Vec<_> = entries.iter().map(|e| e.version.as_str()).collect();
        assert_eq!(versions, vec!["1.0", "2.0", "3.0"]);
        assert_eq!(entries[0].comments, vec!["changes in 1.0"]);
    }
}
