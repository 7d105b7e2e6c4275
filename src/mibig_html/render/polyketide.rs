//! Polyketide details and the per-synthase module table.

use super::nrp::{module_number, non_blank, placeholder_if_empty, NonCanonicalView};
use crate::model::{Iterative, PksModule, Polyketide, Synthase};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PksModuleCell {
    pub number: String,
    pub active: bool,
    pub comment: Option<String>,
    pub genes: Vec<String>,
    pub at_specificities: Vec<String>,
    pub core_domains: Vec<String>,
    pub modification_domains: Vec<String>,
    /// Only set for modules with a ketoreductase domain.
    pub stereochemistry: Option<String>,
    pub evidence: Vec<String>,
    pub non_canonical: Option<NonCanonicalView>,
}

impl PksModuleCell {
    fn new(module: &PksModule) -> Self {
        let stereochemistry = if module.has_ketoreductase() {
            non_blank(module.kr_stereochem.as_deref())
        } else {
            None
        };
        Self {
            number: module_number(module.module_number.as_deref()),
            active: module.active,
            comment: non_blank(module.comments.as_deref()),
            genes: module.genes.clone(),
            at_specificities: module.at_specificities.clone(),
            core_domains: module.core_domains.clone(),
            modification_domains: module.modification_domains.clone(),
            stereochemistry,
            evidence: module.evidence.clone(),
            non_canonical: module.non_canonical.as_ref().map(NonCanonicalView::new),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SynthaseView {
    pub genes: Vec<String>,
    pub subclass: Vec<String>,
    /// `Some` for trans-AT synthases, listing the AT genes if known.
    pub trans_at: Option<Vec<String>>,
    pub pufa_mod_doms: Vec<String>,
    pub iterative: Option<Iterative>,
    pub thioesterases: Vec<String>,
    pub row_span: usize,
    pub modules: Vec<Option<PksModuleCell>>,
}

impl SynthaseView {
    fn new(synthase: &Synthase) -> Self {
        let modules =
            placeholder_if_empty(synthase.modules.iter().map(PksModuleCell::new).collect());
        Self {
            genes: synthase.genes.clone(),
            subclass: synthase.subclass.clone(),
            trans_at: synthase.trans_at.as_ref().map(|t| t.genes.clone()),
            pufa_mod_doms: synthase.pufa_mod_doms.clone(),
            iterative: synthase.iterative.clone(),
            thioesterases: synthase.thioesterases.clone(),
            row_span: modules.len(),
            modules,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PolyketideView {
    pub subclasses: Vec<String>,
    pub starter_unit: Option<String>,
    pub ketide_length: Option<u32>,
    pub cyclases: Vec<String>,
    pub release_types: Vec<String>,
    pub synthases: Vec<SynthaseView>,
}

impl PolyketideView {
    pub fn new(polyketide: &Polyketide) -> Self {
        Self {
            subclasses: polyketide.subclasses.clone(),
            starter_unit: non_blank(polyketide.starter_unit.as_deref()),
            ketide_length: polyketide.ketide_length,
            cyclases: polyketide.cyclases.clone(),
            release_types: polyketide.release_type.clone(),
            synthases: polyketide.synthases.iter().map(SynthaseView::new).collect(),
        }
    }
}
