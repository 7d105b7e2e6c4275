//! Input data for page rendering.
//!
//! Everything here is produced upstream: the MIBiG entry itself ([`Entry`]), the
//! annotated sequence record the entry was loaded onto ([`Record`]) and the
//! region covering the cluster ([`Region`]). A [`Bundle`] carries all of them
//! plus the taxonomic lineage. Rendering only ever borrows these types.

use crate::error::MibigError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accessions of records submitted directly to MIBiG start with this marker.
pub const INTERNAL_SUBMISSION_PREFIX: &str = "MIBIG";

/// Everything needed to render one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    pub entry: Entry,
    /// Absent for retired entries, which are never loaded onto a record.
    #[serde(default)]
    pub record: Option<Record>,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub taxonomy: Vec<Taxon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub cluster: Cluster,
    #[serde(default)]
    pub changelog: Vec<ChangelogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub version: String,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default)]
    pub contributors: Vec<String>,
}

impl ChangelogEntry {
    /// Sort key treating dotted versions numerically ("2.10" after "2.9").
    pub fn version_key(&self) -> Vec<u32> {
        self.version
            .split('.')
            .map(|part| part.trim().parse().unwrap_or(u32::MAX))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub mibig_accession: String,
    pub organism_name: String,
    #[serde(default)]
    pub ncbi_tax_id: String,
    #[serde(default)]
    pub compounds: Vec<Compound>,
    #[serde(default)]
    pub biosynthetic_class: Vec<String>,
    pub loci: Loci,
    #[serde(default)]
    pub minimal: bool,
    /// Free-text remarks from the annotators.
    #[serde(default)]
    pub comments: Option<String>,
    /// Raw `"category:content"` strings; see [`Cluster::parsed_publications`].
    #[serde(default)]
    pub publications: Vec<String>,
    #[serde(default)]
    pub genes: Option<Genes>,
    #[serde(default)]
    pub nrp: Option<Nrp>,
    #[serde(default)]
    pub polyketide: Option<Polyketide>,
    #[serde(default)]
    pub ripp: Option<Ripp>,
    #[serde(default)]
    pub saccharide: Option<Saccharide>,
    #[serde(default)]
    pub terpene: Option<Terpene>,
    #[serde(default)]
    pub other: Option<ClassDetail>,
    #[serde(default)]
    pub retired: bool,
    #[serde(default)]
    pub retirement_reasons: Vec<String>,
    #[serde(default)]
    pub see_also: Vec<String>,
}

impl Cluster {
    pub fn gene_annotations(&self) -> &[GeneAnnotation] {
        self.genes
            .as_ref()
            .map(|g| g.annotations.as_slice())
            .unwrap_or_default()
    }

    pub fn compound_names(&self) -> Vec<&str> {
        self.compounds.iter().map(|c| c.name.as_str()).collect()
    }

    /// Parses every publication; a malformed one is invalid entry data.
    pub fn parsed_publications(&self) -> Result<Vec<Publication>, MibigError> {
        self.publications
            .iter()
            .map(|raw| {
                raw.parse()
                    .map_err(|e: String| MibigError::invalid(&self.mibig_accession, e))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loci {
    pub accession: String,
    #[serde(default)]
    pub start_coord: Option<u64>,
    #[serde(default)]
    pub end_coord: Option<u64>,
    #[serde(default = "default_completeness")]
    pub completeness: String,
}

fn default_completeness() -> String {
    "unknown".to_string()
}

impl Loci {
    pub fn is_internal_submission(&self) -> bool {
        self.accession.starts_with(INTERNAL_SUBMISSION_PREFIX)
    }

    /// The annotated range, only when both ends are known.
    pub fn range(&self) -> Option<(u64, u64)> {
        match (self.start_coord, self.end_coord) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Detail block of the `Other` class; it only contributes a subclass name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassDetail {
    #[serde(default, alias = "category")]
    pub subclass: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ripp {
    #[serde(default)]
    pub subclass: Option<String>,
    #[serde(default)]
    pub cyclic: bool,
    #[serde(default)]
    pub peptidases: Vec<String>,
    #[serde(default)]
    pub precursor_genes: Vec<PrecursorGene>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrecursorGene {
    pub gene_id: String,
    #[serde(default)]
    pub core_sequence: Vec<String>,
    #[serde(default)]
    pub leader_sequence: Option<String>,
    #[serde(default)]
    pub follower_sequence: Option<String>,
    #[serde(default)]
    pub cleavage_recogn_site: Vec<String>,
    #[serde(default)]
    pub crosslinks: Vec<Crosslink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crosslink {
    pub crosslink_type: String,
    #[serde(default, rename = "first_AA", deserialize_with = "opt_string_or_number")]
    pub first_aa: Option<String>,
    #[serde(default, rename = "second_AA", deserialize_with = "opt_string_or_number")]
    pub second_aa: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Saccharide {
    #[serde(default)]
    pub subclass: Option<String>,
    #[serde(default)]
    pub glycosyltransferases: Vec<Glycosyltransferase>,
    /// Gene groups, each responsible for one sugar.
    #[serde(default)]
    pub sugar_subclusters: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glycosyltransferase {
    pub gene_id: String,
    #[serde(default)]
    pub specificity: Option<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Terpene {
    #[serde(default, alias = "structural_subclass")]
    pub subclass: Option<String>,
    #[serde(default)]
    pub carbon_count_subclass: Option<String>,
    #[serde(default)]
    pub terpene_precursor: Option<String>,
    #[serde(default)]
    pub prenyltransferases: Vec<String>,
    #[serde(default)]
    pub terpene_synth_cycl: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationCategory {
    Pubmed,
    Doi,
    Patent,
    Url,
}

impl fmt::Display for PublicationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PublicationCategory::Pubmed => "pubmed",
            PublicationCategory::Doi => "doi",
            PublicationCategory::Patent => "patent",
            PublicationCategory::Url => "url",
        };
        f.write_str(name)
    }
}

/// A literature reference, written in entries as `"category:content"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub category: PublicationCategory,
    pub content: String,
}

impl FromStr for Publication {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, content) = s
            .split_once(':')
            .ok_or_else(|| format!("publication without category: {}", s))?;
        let category = match category.trim().to_lowercase().as_str() {
            "pubmed" => PublicationCategory::Pubmed,
            "doi" => PublicationCategory::Doi,
            "patent" => PublicationCategory::Patent,
            "url" => PublicationCategory::Url,
            other => return Err(format!("unknown publication category: {}", other)),
        };
        Ok(Publication {
            category,
            content: content.trim().to_string(),
        })
    }
}

impl fmt::Display for Publication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.content)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Compound {
    #[serde(rename = "compound")]
    pub name: String,
    #[serde(default)]
    pub chem_struct: Option<String>,
    #[serde(default)]
    pub molecular_formula: Option<String>,
    #[serde(default)]
    pub mol_mass: Option<f64>,
    #[serde(default)]
    pub database_id: Vec<String>,
    #[serde(default)]
    pub chem_synonyms: Vec<String>,
    #[serde(default)]
    pub chem_acts: Vec<String>,
    #[serde(default)]
    pub chem_moieties: Vec<Moiety>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moiety {
    pub moiety: String,
    #[serde(default)]
    pub subcluster: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Genes {
    #[serde(default)]
    pub annotations: Vec<GeneAnnotation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneAnnotation {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub functions: Vec<GeneFunction>,
    #[serde(default)]
    pub tailoring: Vec<String>,
    #[serde(default)]
    pub mutation_phenotype: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl GeneAnnotation {
    /// True if the annotation's id or name is one of `names`.
    pub fn matches_any(&self, names: &[&str]) -> bool {
        [self.id.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .any(|own| names.contains(&own))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneFunction {
    pub category: String,
    #[serde(default)]
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NonCanonical {
    #[serde(default)]
    pub iterated: bool,
    #[serde(default)]
    pub non_elongating: bool,
    #[serde(default)]
    pub skipped: bool,
    #[serde(default)]
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nrp {
    #[serde(default)]
    pub subclass: Option<String>,
    #[serde(default)]
    pub cyclic: bool,
    #[serde(default)]
    pub release_type: Vec<String>,
    #[serde(default)]
    pub lipid_moiety: Option<String>,
    #[serde(default)]
    pub thioesterases: Vec<Thioesterase>,
    #[serde(default)]
    pub nrps_genes: Vec<NrpsGene>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thioesterase {
    pub gene: String,
    #[serde(default)]
    pub thioesterase_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NrpsGene {
    pub gene_id: String,
    #[serde(default)]
    pub modules: Vec<NrpModule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NrpModule {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub module_number: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub a_substr_spec: Option<SubstrateSpecificity>,
    #[serde(default)]
    pub c_dom_subtype: Option<String>,
    #[serde(default)]
    pub modification_domains: Vec<String>,
    #[serde(default)]
    pub non_canonical: Option<NonCanonical>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl Default for NrpModule {
    fn default() -> Self {
        Self {
            module_number: None,
            active: true,
            a_substr_spec: None,
            c_dom_subtype: None,
            modification_domains: Vec::new(),
            non_canonical: None,
            comments: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubstrateSpecificity {
    #[serde(default)]
    pub proteinogenic: Vec<String>,
    #[serde(default)]
    pub nonproteinogenic: Vec<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub aa_subcluster: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Polyketide {
    #[serde(default)]
    pub subclasses: Vec<String>,
    #[serde(default)]
    pub starter_unit: Option<String>,
    #[serde(default)]
    pub ketide_length: Option<u32>,
    #[serde(default)]
    pub cyclases: Vec<String>,
    #[serde(default)]
    pub release_type: Vec<String>,
    #[serde(default)]
    pub synthases: Vec<Synthase>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Synthase {
    #[serde(default)]
    pub genes: Vec<String>,
    #[serde(default, alias = "synthase_subclass")]
    pub subclass: Vec<String>,
    #[serde(default)]
    pub modules: Vec<PksModule>,
    #[serde(default)]
    pub trans_at: Option<TransAt>,
    #[serde(default)]
    pub pufa_mod_doms: Vec<String>,
    #[serde(default)]
    pub iterative: Option<Iterative>,
    #[serde(default)]
    pub thioesterases: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransAt {
    #[serde(default)]
    pub genes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Iterative {
    #[serde(default)]
    pub genes: Vec<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub cyclization_type: Option<String>,
    #[serde(default)]
    pub nr_iterations: Option<u32>,
    #[serde(default)]
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PksModule {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub module_number: Option<String>,
    #[serde(default)]
    pub genes: Vec<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub core_domains: Vec<String>,
    #[serde(default)]
    pub modification_domains: Vec<String>,
    #[serde(default)]
    pub at_specificities: Vec<String>,
    #[serde(default)]
    pub kr_stereochem: Option<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub non_canonical: Option<NonCanonical>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl Default for PksModule {
    fn default() -> Self {
        Self {
            module_number: None,
            genes: Vec::new(),
            active: true,
            core_domains: Vec::new(),
            modification_domains: Vec::new(),
            at_specificities: Vec::new(),
            kr_stereochem: None,
            evidence: Vec::new(),
            non_canonical: None,
            comments: None,
        }
    }
}

impl PksModule {
    pub fn has_ketoreductase(&self) -> bool {
        self.core_domains
            .iter()
            .chain(&self.modification_domains)
            .any(|d| d == "Ketoreductase" || d == "KR")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxon {
    pub name: String,
    #[serde(default)]
    pub taxid: String,
    #[serde(default)]
    pub rank: String,
}

/// The annotated sequence record a cluster was loaded onto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default = "default_record_index")]
    pub record_index: usize,
    #[serde(default)]
    pub gc_content: f64,
    /// Descriptions of changes made to the input while loading it.
    #[serde(default)]
    pub alterations: Vec<String>,
    #[serde(default)]
    pub cds_features: Vec<CdsFeature>,
}

fn default_record_index() -> usize {
    1
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CdsFeature {
    #[serde(default)]
    pub locus_tag: Option<String>,
    #[serde(default)]
    pub protein_id: Option<String>,
    #[serde(default)]
    pub gene: Option<String>,
    pub location: Location,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub nt_seq: Option<String>,
    #[serde(default)]
    pub gene_functions: Vec<CdsFunction>,
}

impl CdsFeature {
    /// Present, non-empty identifiers in priority order: locus tag, protein id, gene name.
    pub fn identifiers(&self) -> Vec<&str> {
        identifiers_in_order(
            self.locus_tag.as_deref(),
            self.protein_id.as_deref(),
            self.gene.as_deref(),
        )
    }
}

pub(crate) fn identifiers_in_order<'a>(
    locus_tag: Option<&'a str>,
    protein_id: Option<&'a str>,
    gene: Option<&'a str>,
) -> Vec<&'a str> {
    [locus_tag, protein_id, gene]
        .into_iter()
        .flatten()
        .filter(|name| !name.is_empty())
        .collect()
}

/// Zero-based, end-exclusive location on the record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Location {
    pub start: u64,
    pub end: u64,
    #[serde(default)]
    pub strand: i8,
}

impl Location {
    pub fn strand_symbol(&self) -> &'static str {
        match self.strand {
            s if s > 0 => "+",
            s if s < 0 => "-",
            _ => "?",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdsFunction {
    pub function: String,
    pub tool: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    #[serde(default = "default_region_number")]
    pub number: usize,
    #[serde(default)]
    pub description: Option<String>,
    /// Tools that contributed subregions, e.g. `mibig` or `cassis`.
    #[serde(default)]
    pub subregion_tools: Vec<String>,
}

fn default_region_number() -> usize {
    1
}

impl Default for Region {
    fn default() -> Self {
        Self {
            number: default_region_number(),
            description: None,
            subregion_tools: Vec::new(),
        }
    }
}

impl Region {
    pub fn anchor_id(&self, record_index: usize) -> String {
        format!("r{}c{}", record_index, self.number)
    }

    pub fn has_subregion_tool(&self, tool: &str) -> bool {
        self.subregion_tools.iter().any(|t| t.eq_ignore_ascii_case(tool))
    }
}

fn default_true() -> bool {
    true
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Raw>::deserialize(d)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publication_parses_category_and_content() {
        let p: Publication = "pubmed:12345".parse().unwrap();
        assert_eq!(p.category, PublicationCategory::Pubmed);
        assert_eq!(p.content, "12345");

        let url: Publication = "url:https://example.org/a".parse().unwrap();
        assert_eq!(url.category, PublicationCategory::Url);
        assert_eq!(url.content, "https://example.org/a");
    }

    #[test]
    fn publication_rejects_unknown_category() {
        assert!("journal:foo".parse::<Publication>().is_err());
        assert!("no-category".parse::<Publication>().is_err());
    }

    #[test]
    fn publication_displays_as_written() {
        let p: Publication = "doi:10.1000/xyz".parse().unwrap();
        assert_eq!(p.to_string(), "doi:10.1000/xyz");
    }

    #[test]
    fn malformed_publication_is_invalid_data() {
        let mut cluster = crate::test_utils::cluster();
        cluster.publications = vec!["pubmed:1".into(), "journal:foo".into()];
        match cluster.parsed_publications() {
            Err(MibigError::InvalidData { accession, message }) => {
                assert_eq!(accession, "BGC0000001");
                assert!(message.contains("journal"));
            }
            other => panic!("expected invalid data, got {:?}", other),
        }
    }

    #[test]
    fn modules_default_to_active() {
        assert!(NrpModule::default().active);
        assert!(PksModule::default().active);

        let nrp: NrpModule = serde_json::from_str("{}").unwrap();
        let pks: PksModule = serde_json::from_str("{}").unwrap();
        assert!(nrp.active);
        assert!(pks.active);
    }

    #[test]
    fn class_blocks_deserialize() {
        let ripp: Ripp = serde_json::from_str(
            r#"{"subclass": "Lanthipeptide", "cyclic": true,
                "precursor_genes": [{"gene_id": "lanA", "core_sequence": ["ITSISLC"],
                  "crosslinks": [{"crosslink_type": "thioether", "first_AA": 2, "second_AA": "7"}]}]}"#,
        )
        .unwrap();
        assert!(ripp.cyclic);
        let crosslink = &ripp.precursor_genes[0].crosslinks[0];
        assert_eq!(crosslink.first_aa.as_deref(), Some("2"));
        assert_eq!(crosslink.second_aa.as_deref(), Some("7"));

        let terpene: Terpene =
            serde_json::from_str(r#"{"structural_subclass": "Sesquiterpene"}"#).unwrap();
        assert_eq!(terpene.subclass.as_deref(), Some("Sesquiterpene"));
    }

    #[test]
    fn loci_internal_submission_and_range() {
        let loci = Loci {
            accession: "MIBIG.BGC0000001.1".into(),
            start_coord: Some(1),
            end_coord: None,
            completeness: "complete".into(),
        };
        assert!(loci.is_internal_submission());
        assert_eq!(loci.range(), None);

        let external = Loci {
            accession: "AB000001.1".into(),
            start_coord: Some(10),
            end_coord: Some(200),
            completeness: "complete".into(),
        };
        assert!(!external.is_internal_submission());
        assert_eq!(external.range(), Some((10, 200)));
    }

    #[test]
    fn cds_identifiers_skip_missing_and_empty() {
        let cds = CdsFeature {
            locus_tag: Some(String::new()),
            protein_id: Some("BAC0001.1".into()),
            gene: Some("abcA".into()),
            ..Default::default()
        };
        assert_eq!(cds.identifiers(), vec!["BAC0001.1", "abcA"]);

        let only_tag = CdsFeature {
            locus_tag: Some("SCO_0001".into()),
            ..Default::default()
        };
        assert_eq!(only_tag.identifiers(), vec!["SCO_0001"]);
    }

    #[test]
    fn module_number_accepts_numbers_and_strings() {
        let m: NrpModule = serde_json::from_str(r#"{"module_number": 3}"#).unwrap();
        assert_eq!(m.module_number.as_deref(), Some("3"));
        assert!(m.active);

        let m: PksModule =
            serde_json::from_str(r#"{"module_number": "0", "active": false}"#).unwrap();
        assert_eq!(m.module_number.as_deref(), Some("0"));
        assert!(!m.active);

        let m: PksModule = serde_json::from_str("{}").unwrap();
        assert_eq!(m.module_number, None);
    }

    #[test]
    fn ketoreductase_found_in_either_domain_list() {
        let mut m = PksModule::default();
        assert!(!m.has_ketoreductase());
        m.modification_domains = vec!["Ketoreductase".into()];
        assert!(m.has_ketoreductase());
        m.modification_domains.clear();
        m.core_domains = vec!["KR".into()];
        assert!(m.has_ketoreductase());
    }

    #[test]
    fn changelog_versions_sort_numerically() {
        let mut logs: Vec<ChangelogEntry> = ["2.10", "1.4", "2.9"]
            .iter()
            .map(|v| ChangelogEntry {
                version: v.to_string(),
                comments: vec![],
                contributors: vec![],
            })
            .collect();
        logs.sort_by_key(|l| l.version_key());
        let order: Vec<_> = logs.iter().map(|l| l.version.as_str()).collect();
        assert_eq!(order, vec!["1.4", "2.9", "2.10"]);
    }

    #[test]
    fn region_anchor_and_tools() {
        let region = Region {
            number: 2,
            description: None,
            subregion_tools: vec!["mibig".into(), "CASSIS".into()],
        };
        assert_eq!(region.anchor_id(1), "r1c2");
        assert!(region.has_subregion_tool("cassis"));
        assert!(!region.has_subregion_tool("sideloaded"));
    }

    #[test]
    fn minimal_bundle_deserializes_with_defaults() {
        let json = r#"{
            "entry": {"cluster": {
                "mibig_accession": "BGC0000001",
                "organism_name": "Streptomyces sp.",
                "loci": {"accession": "AB000001.1"}
            }}
        }"#;
        let bundle: Bundle = serde_json::from_str(json).unwrap();
        assert!(bundle.record.is_none());
        assert_eq!(bundle.region.number, 1);
        assert_eq!(bundle.entry.cluster.loci.completeness, "unknown");
        assert!(bundle.entry.cluster.gene_annotations().is_empty());
    }
}
