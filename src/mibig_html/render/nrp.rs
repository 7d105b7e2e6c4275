//! Nonribosomal peptide details and the NRPS module table.

use crate::model::{NonCanonical, Nrp, NrpModule, NrpsGene, SubstrateSpecificity};
use serde::Serialize;

/// Shown in place of a module number the entry does not give.
pub const UNKNOWN_MODULE_NUMBER: &str = "?";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NonCanonicalView {
    pub activities: Vec<String>,
    pub evidence: Vec<String>,
}

impl NonCanonicalView {
    /// Set flags in fixed order, or `Other` when none is set.
    pub fn new(non_canonical: &NonCanonical) -> Self {
        let mut activities = Vec::new();
        if non_canonical.iterated {
            activities.push("iterated".to_string());
        }
        if non_canonical.non_elongating {
            activities.push("non-elongating".to_string());
        }
        if non_canonical.skipped {
            activities.push("skipped".to_string());
        }
        if activities.is_empty() {
            activities.push("Other".to_string());
        }
        Self {
            activities,
            evidence: non_canonical.evidence.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpecificityView {
    pub substrates: Vec<String>,
    pub evidence: Vec<String>,
    pub subcluster: Vec<String>,
}

impl SpecificityView {
    fn new(specificity: &SubstrateSpecificity) -> Self {
        Self {
            substrates: specificity
                .proteinogenic
                .iter()
                .chain(&specificity.nonproteinogenic)
                .cloned()
                .collect(),
            evidence: specificity.evidence.clone(),
            subcluster: specificity.aa_subcluster.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NrpModuleCell {
    pub number: String,
    pub active: bool,
    pub comment: Option<String>,
    pub specificity: Option<SpecificityView>,
    pub condensation: Option<String>,
    pub modifications: Vec<String>,
    pub non_canonical: Option<NonCanonicalView>,
}

impl NrpModuleCell {
    fn new(module: &NrpModule) -> Self {
        Self {
            number: module_number(module.module_number.as_deref()),
            active: module.active,
            comment: non_blank(module.comments.as_deref()),
            specificity: module.a_substr_spec.as_ref().map(SpecificityView::new),
            condensation: non_blank(module.c_dom_subtype.as_deref()),
            modifications: module.modification_domains.clone(),
            non_canonical: module.non_canonical.as_ref().map(NonCanonicalView::new),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NrpsGeneRows {
    pub gene: String,
    pub row_span: usize,
    /// One entry per table row; `None` is the placeholder row of a gene
    /// without modules.
    pub modules: Vec<Option<NrpModuleCell>>,
}

impl NrpsGeneRows {
    fn new(gene: &NrpsGene) -> Self {
        let modules = placeholder_if_empty(gene.modules.iter().map(NrpModuleCell::new).collect());
        Self {
            gene: gene.gene_id.clone(),
            row_span: modules.len(),
            modules,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ThioesteraseView {
    pub gene: String,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NrpView {
    pub subclass: Option<String>,
    pub cyclic: bool,
    pub release_types: Vec<String>,
    pub lipid_moiety: Option<String>,
    pub thioesterases: Vec<ThioesteraseView>,
    pub genes: Vec<NrpsGeneRows>,
}

impl NrpView {
    pub fn new(nrp: &Nrp) -> Self {
        Self {
            subclass: non_blank(nrp.subclass.as_deref()),
            cyclic: nrp.cyclic,
            release_types: nrp.release_type.clone(),
            lipid_moiety: non_blank(nrp.lipid_moiety.as_deref()),
            thioesterases: nrp
                .thioesterases
                .iter()
                .map(|te| ThioesteraseView {
                    gene: te.gene.clone(),
                    kind: non_blank(te.thioesterase_type.as_deref()),
                })
                .collect(),
            genes: nrp.nrps_genes.iter().map(NrpsGeneRows::new).collect(),
        }
    }
}

pub(crate) fn module_number(number: Option<&str>) -> String {
    match number {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => UNKNOWN_MODULE_NUMBER.to_string(),
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Wraps cells for row layout; an empty list becomes a single placeholder row.
pub(crate) fn placeholder_if_empty<T>(cells: Vec<T>) -> Vec<Option<T>> {
    if cells.is_empty() {
        vec![None]
    } else {
        cells.into_iter().map(Some).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Thioesterase;

    fn gene(id: &str, modules: Vec<NrpModule>) -> NrpsGene {
        NrpsGene {
            gene_id: id.into(),
            modules,
        }
    }

    #[test]
    fn non_canonical_lists_set_flags_in_order() {
        let nc = NonCanonical {
            iterated: true,
            skipped: true,
            evidence: vec!["Structure-based inference".into()],
            ..Default::default()
        };
        let view = NonCanonicalView::new(&nc);
        assert_eq!(view.activities, vec!["iterated", "skipped"]);
        assert_eq!(view.evidence, vec!["Structure-based inference"]);
    }

    #[test]
    fn non_canonical_falls_back_to_other() {
        let view = NonCanonicalView::new(&NonCanonical::default());
        assert_eq!(view.activities, vec!["Other"]);
        assert!(view.evidence.is_empty());
    }

    #[test]
    fn gene_rows_span_module_count() {
        let rows = NrpsGeneRows::new(&gene(
            "nrpA",
            vec![NrpModule::default(), NrpModule::default(), NrpModule::default()],
        ));
        assert_eq!(rows.row_span, 3);
        assert_eq!(rows.modules.len(), 3);
        assert!(rows.modules.iter().all(Option::is_some));
    }

    #[test]
    fn gene_without_modules_gets_one_placeholder_row() {
        let rows = NrpsGeneRows::new(&gene("nrpB", vec![]));
        assert_eq!(rows.row_span, 1);
        assert_eq!(rows.modules, vec![None]);
    }

    #[test]
    fn module_cell_defaults() {
        let cell = NrpModuleCell::new(&NrpModule::default());
        assert_eq!(cell.number, "?");
        assert!(cell.active);
        assert_eq!(cell.specificity, None);
        assert_eq!(cell.non_canonical, None);
        assert_eq!(cell.comment, None);
    }

    #[test]
    fn specificity_merges_substrate_lists() {
        let module = NrpModule {
            module_number: Some("2".into()),
            a_substr_spec: Some(SubstrateSpecificity {
                proteinogenic: vec!["L-serine".into()],
                nonproteinogenic: vec!["D-ornithine".into()],
                evidence: vec!["Activity assay".into()],
                aa_subcluster: vec!["orfX".into()],
            }),
            ..Default::default()
        };
        let cell = NrpModuleCell::new(&module);
        let specificity = cell.specificity.unwrap();
        assert_eq!(specificity.substrates, vec!["L-serine", "D-ornithine"]);
        assert_eq!(specificity.subcluster, vec!["orfX"]);
        assert_eq!(cell.number, "2");
    }

    #[test]
    fn view_copies_top_level_fields() {
        let nrp = Nrp {
            subclass: Some("Lipopeptide".into()),
            cyclic: true,
            release_type: vec!["Macrolactamization".into()],
            thioesterases: vec![Thioesterase {
                gene: "teA".into(),
                thioesterase_type: Some("Type I".into()),
            }],
            ..Default::default()
        };
        let view = NrpView::new(&nrp);
        assert!(view.cyclic);
        assert_eq!(view.thioesterases[0].kind.as_deref(), Some("Type I"));
        assert!(view.genes.is_empty());
        assert_eq!(view.lipid_moiety, None);
    }
}
