//! General information about an entry: identity, status, classes, loci,
//! species and references.

use crate::config::RenderOptions;
use crate::model::{Cluster, Taxon};
use crate::references::ReferenceLink;
use serde::Serialize;

const NCBI_NUCCORE_URL: &str = "https://www.ncbi.nlm.nih.gov/nuccore/";
const NCBI_TAXONOMY_URL: &str = "https://www.ncbi.nlm.nih.gov/Taxonomy/Browser/wwwtax.cgi?id=";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LociView {
    /// Sequence submitted directly to MIBiG, only available as a download.
    Internal { accession: String, download: String },
    ExternalRange {
        accession: String,
        start: u64,
        end: u64,
        url: String,
    },
    External { accession: String, url: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneralView {
    pub accession: String,
    pub description: String,
    pub minimal: bool,
    pub completeness: String,
    pub remarks: Option<String>,
    pub classes: Vec<String>,
    pub loci: LociView,
    pub compounds: Vec<String>,
    pub organism: String,
    pub tax_id: String,
    pub taxonomy_url: Option<String>,
    pub lineage: Option<String>,
    pub references: Vec<ReferenceLink>,
}

impl GeneralView {
    pub fn new(
        cluster: &Cluster,
        taxonomy: &[Taxon],
        references: Vec<ReferenceLink>,
        options: &RenderOptions,
    ) -> Self {
        let compounds: Vec<String> = cluster
            .compound_names()
            .into_iter()
            .map(String::from)
            .collect();

        let taxonomy_url = if cluster.ncbi_tax_id.is_empty() {
            None
        } else {
            Some(format!("{}{}", NCBI_TAXONOMY_URL, cluster.ncbi_tax_id))
        };
        let lineage = if taxonomy.is_empty() {
            None
        } else {
            Some(
                taxonomy
                    .iter()
                    .map(|t| t.name.as_str())
                    .collect::<Vec<_>>()
                    .join(" > "),
            )
        };

        Self {
            accession: cluster.mibig_accession.clone(),
            description: short_description(cluster),
            minimal: cluster.minimal,
            completeness: cluster.loci.completeness.clone(),
            remarks: cluster.comments.clone().filter(|c| !c.trim().is_empty()),
            classes: cluster
                .biosynthetic_class
                .iter()
                .map(|class| display_class(cluster, class))
                .collect(),
            loci: loci_view(cluster, options),
            compounds,
            organism: cluster.organism_name.clone(),
            tax_id: cluster.ncbi_tax_id.clone(),
            taxonomy_url,
            lineage,
            references,
        }
    }
}

/// `"{compounds} biosynthetic gene cluster from {organism}"`.
pub fn short_description(cluster: &Cluster) -> String {
    format!(
        "{} biosynthetic gene cluster from {}",
        cluster.compound_names().join(", "),
        cluster.organism_name
    )
}

/// The more specific name a class-detail block gives for a biosynthetic class.
///
/// Classes without a detail block, or whose block names no subclass, have no
/// override.
pub fn class_override(cluster: &Cluster, class: &str) -> Option<String> {
    let subclass = match class {
        "NRP" => cluster.nrp.as_ref()?.subclass.clone(),
        "Polyketide" => {
            let subclasses = &cluster.polyketide.as_ref()?.subclasses;
            if subclasses.is_empty() {
                None
            } else {
                Some(subclasses.join(", "))
            }
        }
        "RiPP" => cluster.ripp.as_ref()?.subclass.clone(),
        "Saccharide" => cluster.saccharide.as_ref()?.subclass.clone(),
        "Terpene" => cluster.terpene.as_ref()?.subclass.clone(),
        "Other" => cluster.other.as_ref()?.subclass.clone(),
        _ => None,
    };
    subclass.filter(|s| !s.is_empty())
}

pub fn display_class(cluster: &Cluster, class: &str) -> String {
    class_override(cluster, class).unwrap_or_else(|| class.to_string())
}

fn loci_view(cluster: &Cluster, options: &RenderOptions) -> LociView {
    let loci = &cluster.loci;
    if loci.is_internal_submission() {
        let accession = &cluster.mibig_accession;
        return LociView::Internal {
            accession: loci.accession.clone(),
            download: format!("{}repository/{}/{}.gbk", options.base_url, accession, accession),
        };
    }

    match loci.range() {
        Some((start, end)) => LociView::ExternalRange {
            accession: loci.accession.clone(),
            start,
            end,
            url: format!("{}{}?from={}&to={}", NCBI_NUCCORE_URL, loci.accession, start, end),
        },
        None => LociView::External {
            accession: loci.accession.clone(),
            url: format!("{}{}", NCBI_NUCCORE_URL, loci.accession),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassDetail, Nrp, Polyketide, Ripp, Terpene};
    use crate::test_utils as fixtures;

    #[test]
    fn short_description_lists_compounds() {
        let mut cluster = fixtures::cluster();
        cluster.compounds.push(fixtures::compound("second"));
        assert_eq!(
            short_description(&cluster),
            "testomycin, second biosynthetic gene cluster from Streptomyces testus"
        );
    }

    #[test]
    fn class_override_table() {
        let mut cluster = fixtures::cluster();
        assert_eq!(class_override(&cluster, "NRP"), None);

        cluster.nrp = Some(Nrp {
            subclass: Some("Lipopeptide".into()),
            ..Default::default()
        });
        cluster.polyketide = Some(Polyketide {
            subclasses: vec!["Macrolide".into(), "Polyene".into()],
            ..Default::default()
        });
        cluster.terpene = Some(Terpene {
            subclass: Some("Sesquiterpene".into()),
            ..Default::default()
        });
        cluster.ripp = Some(Ripp::default());
        cluster.other = Some(ClassDetail {
            subclass: Some("Aminocoumarin".into()),
        });

        assert_eq!(display_class(&cluster, "NRP"), "Lipopeptide");
        assert_eq!(display_class(&cluster, "Polyketide"), "Macrolide, Polyene");
        assert_eq!(display_class(&cluster, "Terpene"), "Sesquiterpene");
        assert_eq!(display_class(&cluster, "RiPP"), "RiPP");
        assert_eq!(display_class(&cluster, "Other"), "Aminocoumarin");
        assert_eq!(display_class(&cluster, "Alkaloid"), "Alkaloid");
    }

    #[test]
    fn loci_internal_submission_only_offers_download() {
        let mut cluster = fixtures::cluster();
        cluster.loci.accession = "MIBIG.BGC0000001.1".into();
        cluster.loci.start_coord = Some(1);
        cluster.loci.end_coord = Some(100);

        match loci_view(&cluster, &RenderOptions::default()) {
            LociView::Internal { download, .. } => assert_eq!(
                download,
                "https://mibig.secondarymetabolites.org/repository/BGC0000001/BGC0000001.gbk"
            ),
            other => panic!("unexpected loci view {:?}", other),
        }
    }

    #[test]
    fn loci_external_with_and_without_range() {
        let mut cluster = fixtures::cluster();
        cluster.loci.start_coord = Some(10);
        cluster.loci.end_coord = Some(2000);
        assert_eq!(
            loci_view(&cluster, &RenderOptions::default()),
            LociView::ExternalRange {
                accession: "AB000001.1".into(),
                start: 10,
                end: 2000,
                url: "https://www.ncbi.nlm.nih.gov/nuccore/AB000001.1?from=10&to=2000".into(),
            }
        );

        cluster.loci.end_coord = None;
        assert_eq!(
            loci_view(&cluster, &RenderOptions::default()),
            LociView::External {
                accession: "AB000001.1".into(),
                url: "https://www.ncbi.nlm.nih.gov/nuccore/AB000001.1".into(),
            }
        );
    }

    #[test]
    fn lineage_and_taxonomy_link() {
        let cluster = fixtures::cluster();
        let taxonomy = vec![
            Taxon {
                name: "Bacteria".into(),
                taxid: "2".into(),
                rank: "superkingdom".into(),
            },
            Taxon {
                name: "Actinomycetota".into(),
                taxid: "201174".into(),
                rank: "phylum".into(),
            },
        ];
        let view = GeneralView::new(&cluster, &taxonomy, vec![], &RenderOptions::default());
        assert_eq!(view.lineage.as_deref(), Some("Bacteria > Actinomycetota"));
        assert!(view.taxonomy_url.unwrap().ends_with("id=1901"));

        let bare = GeneralView::new(&fixtures::cluster(), &[], vec![], &RenderOptions::default());
        assert_eq!(bare.lineage, None);
    }

    #[test]
    fn blank_remarks_are_dropped() {
        let mut cluster = fixtures::cluster();
        cluster.comments = Some("  ".into());
        let view = GeneralView::new(&cluster, &[], vec![], &RenderOptions::default());
        assert_eq!(view.remarks, None);
    }
}
