//! Ribosomally synthesized and post-translationally modified peptides.

use super::nrp::non_blank;
use crate::model::{Crosslink, PrecursorGene, Ripp};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PrecursorView {
    pub gene: String,
    pub core_sequences: Vec<String>,
    pub leader_sequence: Option<String>,
    pub follower_sequence: Option<String>,
    pub cleavage_sites: Vec<String>,
    pub crosslinks: Vec<String>,
}

impl PrecursorView {
    fn new(precursor: &PrecursorGene) -> Self {
        Self {
            gene: precursor.gene_id.clone(),
            core_sequences: precursor.core_sequence.clone(),
            leader_sequence: non_blank(precursor.leader_sequence.as_deref()),
            follower_sequence: non_blank(precursor.follower_sequence.as_deref()),
            cleavage_sites: precursor.cleavage_recogn_site.clone(),
            crosslinks: precursor.crosslinks.iter().map(crosslink_label).collect(),
        }
    }
}

/// `"type (first-second)"`, dropping positions the entry does not give.
fn crosslink_label(crosslink: &Crosslink) -> String {
    match (&crosslink.first_aa, &crosslink.second_aa) {
        (Some(first), Some(second)) => {
            format!("{} ({}-{})", crosslink.crosslink_type, first, second)
        }
        (Some(only), None) | (None, Some(only)) => {
            format!("{} ({})", crosslink.crosslink_type, only)
        }
        (None, None) => crosslink.crosslink_type.clone(),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RippView {
    pub subclass: Option<String>,
    pub cyclic: bool,
    pub peptidases: Vec<String>,
    pub precursors: Vec<PrecursorView>,
}

impl RippView {
    pub fn new(ripp: &Ripp) -> Self {
        Self {
            subclass: non_blank(ripp.subclass.as_deref()),
            cyclic: ripp.cyclic,
            peptidases: ripp.peptidases.clone(),
            precursors: ripp.precursor_genes.iter().map(PrecursorView::new).collect(),
        }
    }
}
