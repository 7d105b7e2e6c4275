//! Saccharide details: glycosyltransferases and sugar subclusters.

use super::nrp::non_blank;
use crate::model::Saccharide;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GlycosyltransferaseView {
    pub gene: String,
    pub specificity: Option<String>,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SaccharideView {
    pub subclass: Option<String>,
    pub glycosyltransferases: Vec<GlycosyltransferaseView>,
    pub subclusters: Vec<Vec<String>>,
}

impl SaccharideView {
    pub fn new(saccharide: &Saccharide) -> Self {
        Self {
            subclass: non_blank(saccharide.subclass.as_deref()),
            glycosyltransferases: saccharide
                .glycosyltransferases
                .iter()
                .map(|gt| GlycosyltransferaseView {
                    gene: gt.gene_id.clone(),
                    specificity: non_blank(gt.specificity.as_deref()),
                    evidence: gt.evidence.clone(),
                })
                .collect(),
            subclusters: saccharide
                .sugar_subclusters
                .iter()
                .filter(|genes| !genes.is_empty())
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Glycosyltransferase;

    #[test]
    fn empty_subclusters_are_skipped() {
        let saccharide = Saccharide {
            glycosyltransferases: vec![Glycosyltransferase {
                gene_id: "gtfA".into(),
                specificity: Some("L-rhamnose".into()),
                evidence: vec!["Sequence-based prediction".into()],
            }],
            sugar_subclusters: vec![vec![], vec!["rmlA".into(), "rmlB".into()]],
            ..Default::default()
        };
        let view = SaccharideView::new(&saccharide);
        assert_eq!(view.subclusters, vec![vec!["rmlA", "rmlB"]]);
        assert_eq!(view.glycosyltransferases[0].specificity.as_deref(), Some("L-rhamnose"));
    }
}
