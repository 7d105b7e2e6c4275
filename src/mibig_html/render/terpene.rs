//! Terpene details.

use super::nrp::non_blank;
use crate::model::Terpene;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TerpeneView {
    pub subclass: Option<String>,
    pub carbon_count: Option<String>,
    pub precursor: Option<String>,
    pub prenyltransferases: Vec<String>,
    pub synthases: Vec<String>,
}

impl TerpeneView {
    pub fn new(terpene: &Terpene) -> Self {
        Self {
            subclass: non_blank(terpene.subclass.as_deref()),
            carbon_count: non_blank(terpene.carbon_count_subclass.as_deref()),
            precursor: non_blank(terpene.terpene_precursor.as_deref()),
            prenyltransferases: terpene.prenyltransferases.clone(),
            synthases: terpene.terpene_synth_cycl.clone(),
        }
    }
}
