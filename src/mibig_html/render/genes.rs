//! The gene table: record CDS features merged with MIBiG gene annotations.
//!
//! Each CDS is matched against the first annotation whose id or name equals
//! one of the CDS identifiers. A matched annotation is consumed, so it can only
//! contribute to one row. Annotations left over at the end describe genes the
//! record does not carry and are listed after the CDS rows, without position or
//! sequences.

use crate::model::{identifiers_in_order, CdsFeature, GeneAnnotation};
use serde::Serialize;
use std::collections::BTreeSet;

/// Gene functions from other tools are not shown on MIBiG pages.
const MIBIG_FUNCTION_TOOL: &str = "mibig";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneRow {
    pub identifiers: Vec<String>,
    pub position: Option<String>,
    pub product: String,
    pub functions: Vec<String>,
    pub evidence: Vec<String>,
    pub comment: Option<String>,
    pub aa_seq: Option<String>,
    pub nt_seq: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneTableView {
    pub rows: Vec<GeneRow>,
    /// Set when any row has a comment; the column is then shown for all rows.
    pub show_comments: bool,
}

impl GeneTableView {
    pub fn new(cds_features: &[CdsFeature], annotations: &[GeneAnnotation]) -> Self {
        let rows = gene_rows(cds_features, annotations);
        let show_comments = rows.iter().any(|row| row.comment.is_some());
        Self {
            rows,
            show_comments,
        }
    }
}

pub fn gene_rows(cds_features: &[CdsFeature], annotations: &[GeneAnnotation]) -> Vec<GeneRow> {
    let mut remaining: Vec<&GeneAnnotation> = annotations.iter().collect();
    let mut rows = Vec::with_capacity(cds_features.len() + remaining.len());

    for cds in cds_features {
        let identifiers = cds.identifiers();
        let mut row = GeneRow {
            identifiers: identifiers.iter().map(|s| s.to_string()).collect(),
            position: Some(format!(
                "{} - {} ({})",
                cds.location.start + 1,
                cds.location.end,
                cds.location.strand_symbol()
            )),
            product: cds.product.clone().unwrap_or_default(),
            functions: cds
                .gene_functions
                .iter()
                .filter(|f| f.tool == MIBIG_FUNCTION_TOOL)
                .map(|f| f.function.clone())
                .collect(),
            evidence: Vec::new(),
            comment: None,
            aa_seq: non_empty(cds.translation.as_deref()),
            nt_seq: non_empty(cds.nt_seq.as_deref()),
        };

        if let Some(index) = remaining
            .iter()
            .position(|annotation| annotation.matches_any(&identifiers))
        {
            let annotation = remaining.remove(index);
            apply_annotation(&mut row, annotation);
        }
        rows.push(row);
    }

    for annotation in remaining {
        let mut row = GeneRow {
            identifiers: identifiers_in_order(
                annotation.id.as_deref(),
                None,
                annotation.name.as_deref(),
            )
            .into_iter()
            .map(String::from)
            .collect(),
            position: None,
            product: String::new(),
            functions: Vec::new(),
            evidence: Vec::new(),
            comment: None,
            aa_seq: None,
            nt_seq: None,
        };
        apply_annotation(&mut row, annotation);
        rows.push(row);
    }

    rows
}

fn apply_annotation(row: &mut GeneRow, annotation: &GeneAnnotation) {
    let tailoring = if annotation.tailoring.is_empty() {
        String::new()
    } else {
        format!(" ({})", annotation.tailoring.join(", "))
    };

    let mut evidence = BTreeSet::new();
    for function in &annotation.functions {
        row.functions
            .push(format!("{}{}", function.category, tailoring));
        evidence.extend(function.evidence.iter().cloned());
    }
    if !evidence.is_empty() {
        row.evidence = evidence.into_iter().collect();
    }

    if let Some(phenotype) = non_empty(annotation.mutation_phenotype.as_deref()) {
        row.functions
            .push(format!("Mutation phenotype: {}", phenotype));
    }
    if let Some(product) = non_empty(annotation.product.as_deref()) {
        row.product = product;
    }
    row.comment = non_empty(annotation.comments.as_deref());
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(String::from)
}
