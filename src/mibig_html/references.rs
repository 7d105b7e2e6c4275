//! Literature references: link building and title lookup.
//!
//! Publications are resolved against local caches of PubMed and DOI metadata.
//! Caches are plain JSON maps from identifier to entry, e.g.
//!
//! ```json
//! {"12345": {"title": "A study", "authors": ["Doe J", "Roe R"],
//!            "year": "2001", "journal": "J Nat Prod", "pmid": "12345"}}
//! ```
//!
//! Identifiers missing from a cache keep the raw identifier as their title.

use crate::error::Result;
use crate::model::{Publication, PublicationCategory};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKind {
    Pubmed,
    Doi,
}

impl CacheKind {
    fn label(&self) -> &'static str {
        match self {
            CacheKind::Pubmed => "PubMed",
            CacheKind::Doi => "DOI",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEntry {
    pub title: String,
    pub authors: Vec<String>,
    pub year: String,
    pub journal: String,
    pub identifier: String,
}

impl ReferenceEntry {
    pub fn new(
        title: &str,
        authors: Vec<String>,
        year: &str,
        journal: &str,
        identifier: &str,
    ) -> Self {
        let mut title = title.trim().to_string();
        if !title.ends_with('.') {
            title.push('.');
        }
        Self {
            title,
            authors,
            year: year.to_string(),
            journal: journal.to_string(),
            identifier: identifier.to_string(),
        }
    }

    /// Short citation, e.g. `"Doe J et al., J Nat Prod (2001)"`.
    pub fn info(&self, kind: CacheKind) -> String {
        let citation = match self.authors.first() {
            Some(first) => {
                let extras = if self.authors.len() > 1 { " et al." } else { "" };
                format!("{}{}, {} ({})", first, extras, self.journal, self.year)
            }
            None => format!("{} ({})", self.journal, self.year),
        };
        match kind {
            CacheKind::Pubmed => format!("{} PMID:{}", citation, self.identifier),
            CacheKind::Doi => citation,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    title: String,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    year: String,
    #[serde(default)]
    journal: String,
    #[serde(default, alias = "pmid")]
    identifier: Option<String>,
}

fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(d)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Identifier → metadata lookup for one kind of reference.
#[derive(Debug, Clone)]
pub struct ReferenceCache {
    kind: CacheKind,
    mappings: HashMap<String, ReferenceEntry>,
}

impl ReferenceCache {
    pub fn empty(kind: CacheKind) -> Self {
        Self {
            kind,
            mappings: HashMap::new(),
        }
    }

    /// Loads a cache file; a missing file yields an empty cache.
    pub fn load<P: AsRef<Path>>(path: P, kind: CacheKind) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("{} cache {} does not exist", kind.label(), path.display());
            return Ok(Self::empty(kind));
        }

        let content = fs::read_to_string(path)?;
        let raw: HashMap<String, RawEntry> = serde_json::from_str(&content)?;
        let mappings = raw
            .into_iter()
            .map(|(key, entry)| {
                let identifier = entry.identifier.unwrap_or_else(|| key.clone());
                let entry = ReferenceEntry::new(
                    &entry.title,
                    entry.authors,
                    &entry.year,
                    &entry.journal,
                    &identifier,
                );
                (key, entry)
            })
            .collect::<HashMap<_, _>>();
        debug!(
            "Loaded {} {} cache entries from {}",
            mappings.len(),
            kind.label(),
            path.display()
        );
        Ok(Self { kind, mappings })
    }

    pub fn kind(&self) -> CacheKind {
        self.kind
    }

    pub fn insert(&mut self, entry: ReferenceEntry) {
        self.mappings.insert(entry.identifier.clone(), entry);
    }

    pub fn get(&self, identifier: &str) -> Option<&ReferenceEntry> {
        self.mappings.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// A rendered reference: where it points and how it is labelled.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReferenceLink {
    pub category: String,
    pub url: String,
    pub title: String,
    pub info: Option<String>,
}

/// All references of one entry, in publication order and without duplicates.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCollection {
    references: Vec<ReferenceLink>,
}

impl ReferenceCollection {
    pub fn new(
        publications: &[Publication],
        pubmed_cache: &ReferenceCache,
        doi_cache: &ReferenceCache,
    ) -> Self {
        let mut seen = BTreeSet::new();
        let mut references = Vec::new();

        for publication in publications {
            let content = publication.content.as_str();
            // PubMed id 0 is a placeholder for "no publication"
            if publication.category == PublicationCategory::Pubmed && content == "0" {
                continue;
            }
            if !seen.insert(content) {
                continue;
            }

            let url = match publication.category {
                PublicationCategory::Pubmed => {
                    format!("https://www.ncbi.nlm.nih.gov/pubmed/{}", content)
                }
                PublicationCategory::Patent => {
                    format!("https://patents.google.com/patent/{}", content)
                }
                PublicationCategory::Doi => format!("https://dx.doi.org/{}", content),
                PublicationCategory::Url => content.to_string(),
            };

            let cache = match publication.category {
                PublicationCategory::Pubmed => Some(pubmed_cache),
                PublicationCategory::Doi => Some(doi_cache),
                _ => None,
            };
            let resolved = cache.and_then(|c| c.get(content).map(|e| (e, c.kind())));
            if cache.is_some() && resolved.is_none() {
                warn!("No cached metadata for {}:{}", publication.category, content);
            }

            let (title, info) = match resolved {
                Some((entry, kind)) => (entry.title.clone(), Some(entry.info(kind))),
                None => (content.to_string(), None),
            };

            references.push(ReferenceLink {
                category: publication.category.to_string(),
                url,
                title,
                info,
            });
        }

        Self { references }
    }

    pub fn links(&self) -> &[ReferenceLink] {
        &self.references
    }

    pub fn into_links(self) -> Vec<ReferenceLink> {
        self.references
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publications(raw: &[&str]) -> Vec<Publication> {
        raw.iter().map(|p| p.parse().unwrap()).collect()
    }

    fn pubmed_cache() -> ReferenceCache {
        let mut cache = ReferenceCache::empty(CacheKind::Pubmed);
        cache.insert(ReferenceEntry::new(
            "Cloning of the cluster",
            vec!["Doe J".into(), "Roe R".into()],
            "2001",
            "J Nat Prod",
            "12345",
        ));
        cache
    }

    #[test]
    fn entry_title_gains_trailing_period() {
        let entry = ReferenceEntry::new("A title", vec![], "1999", "Nature", "1");
        assert_eq!(entry.title, "A title.");
        let entry = ReferenceEntry::new("Done.", vec![], "1999", "Nature", "1");
        assert_eq!(entry.title, "Done.");
    }

    #[test]
    fn entry_info_formats() {
        let single = ReferenceEntry::new("T", vec!["Doe J".into()], "2001", "Cell", "42");
        assert_eq!(single.info(CacheKind::Doi), "Doe J, Cell (2001)");
        assert_eq!(single.info(CacheKind::Pubmed), "Doe J, Cell (2001) PMID:42");

        let many = ReferenceEntry::new("T", vec!["A".into(), "B".into()], "2001", "Cell", "42");
        assert_eq!(many.info(CacheKind::Doi), "A et al., Cell (2001)");
    }

    #[test]
    fn collection_builds_links_per_category() {
        let pubs = publications(&[
            "pubmed:12345",
            "doi:10.1000/abc",
            "patent:US1234",
            "url:https://example.org/paper",
        ]);
        let collection = ReferenceCollection::new(
            &pubs,
            &pubmed_cache(),
            &ReferenceCache::empty(CacheKind::Doi),
        );
        let links = collection.links();
        assert_eq!(links.len(), 4);
        assert_eq!(links[0].url, "https://www.ncbi.nlm.nih.gov/pubmed/12345");
        assert_eq!(links[0].title, "Cloning of the cluster.");
        assert_eq!(
            links[0].info.as_deref(),
            Some("Doe J et al., J Nat Prod (2001) PMID:12345")
        );
        assert_eq!(links[1].url, "https://dx.doi.org/10.1000/abc");
        assert_eq!(links[1].title, "10.1000/abc");
        assert_eq!(links[1].info, None);
        assert_eq!(links[2].url, "https://patents.google.com/patent/US1234");
        assert_eq!(links[3].url, "https://example.org/paper");
    }

    #[test]
    fn collection_skips_placeholder_and_duplicates() {
        let pubs = publications(&["pubmed:0", "pubmed:12345", "pubmed:12345"]);
        let collection = ReferenceCollection::new(
            &pubs,
            &pubmed_cache(),
            &ReferenceCache::empty(CacheKind::Doi),
        );
        assert_eq!(collection.links().len(), 1);
    }

    #[test]
    fn cache_loads_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pubmed.json");
        fs::write(
            &path,
            r#"{"777": {"title": "Loaded", "authors": ["X Y"], "year": 2010,
                        "journal": "PNAS", "pmid": "777"}}"#,
        )
        .unwrap();

        let cache = ReferenceCache::load(&path, CacheKind::Pubmed).unwrap();
        assert_eq!(cache.len(), 1);
        let entry = cache.get("777").unwrap();
        assert_eq!(entry.title, "Loaded.");
        assert_eq!(entry.year, "2010");
        assert_eq!(entry.info(CacheKind::Pubmed), "X Y, PNAS (2010) PMID:777");
    }

    #[test]
    fn missing_cache_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let cache = ReferenceCache::load(temp_dir.path().join("nope.json"), CacheKind::Doi).unwrap();
        assert!(cache.is_empty());
    }
}
