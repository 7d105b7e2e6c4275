//! The region page fragment: title, provenance, gene map placeholder, legend
//! and the tabbed detail sections.
//!
//! Tab headers and tab contents are both emitted from the single [`Tab`]
//! sequence built here, so a header can never exist without its content.

use super::sections::HtmlSections;
use crate::config::RenderOptions;
use crate::error::{MibigError, Result};
use crate::model::{Cluster, Record, Region};
use serde::Serialize;

const NCBI_NUCCORE_URL: &str = "https://www.ncbi.nlm.nih.gov/nuccore/";
const MODIFICATIONS_CLASS: &str = "mibig-modifications";
const CASSIS_TOOL: &str = "cassis";

pub const SVG_TOOLTIP: &str = "Shows the layout of the region, marking coding sequences and \
    areas of interest. Clicking a gene will select it and show any relevant details. \
    Multiple genes can be selected by clicking them while holding the Ctrl key.";

const GENE_TYPE_LEGEND: &[(&str, &str)] = &[
    ("legend-type-biosynthetic", "core biosynthetic genes"),
    ("legend-type-biosynthetic-additional", "additional biosynthetic genes"),
    ("legend-type-transport", "transport-related genes"),
    ("legend-type-regulatory", "regulatory genes"),
    ("legend-type-resistance", "resistance genes"),
    ("legend-type-other", "other genes"),
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegendEntry {
    pub css_class: String,
    pub label: String,
}

impl LegendEntry {
    fn new(css_class: &str, label: &str) -> Self {
        Self {
            css_class: css_class.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Tab {
    /// `{anchor}-{class}`, shared by the header and the content block.
    pub id: String,
    pub label: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Provenance {
    pub accession: String,
    pub url: String,
    pub modified: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionView {
    pub anchor: String,
    pub accession: String,
    pub compound: String,
    pub organism: String,
    pub provenance: Option<Provenance>,
    pub description: Option<String>,
    pub svg_tooltip: String,
    pub legend: Vec<LegendEntry>,
    pub tabs: Vec<Tab>,
}

impl RegionView {
    /// Composes the region view.
    ///
    /// `render_modifications` is only called when the record has alterations.
    /// Fails if the entry names no compound, since the title needs one.
    pub fn new<F>(
        region: &Region,
        record: &Record,
        cluster: &Cluster,
        sections: &[HtmlSections],
        options: &RenderOptions,
        render_modifications: F,
    ) -> Result<Self>
    where
        F: FnOnce(&[String]) -> Result<String>,
    {
        let compound = cluster
            .compounds
            .first()
            .map(|c| c.name.clone())
            .ok_or_else(|| MibigError::invalid(&cluster.mibig_accession, "entry has no compounds"))?;

        let anchor = region.anchor_id(record.record_index);
        let modifications = if record.alterations.is_empty() {
            None
        } else {
            Some(render_modifications(&record.alterations)?)
        };

        Ok(Self {
            tabs: build_tabs(&anchor, sections, modifications),
            anchor,
            accession: cluster.mibig_accession.clone(),
            compound,
            organism: cluster.organism_name.clone(),
            provenance: provenance(record, cluster),
            description: region
                .description
                .clone()
                .filter(|d| !d.trim().is_empty()),
            svg_tooltip: SVG_TOOLTIP.to_string(),
            legend: legend_entries(record, region, options),
        })
    }
}

fn provenance(record: &Record, cluster: &Cluster) -> Option<Provenance> {
    let loci = &cluster.loci;
    if loci.is_internal_submission() {
        return None;
    }
    Some(Provenance {
        accession: loci.accession.clone(),
        url: format!("{}{}", NCBI_NUCCORE_URL, loci.accession),
        modified: !record.alterations.is_empty(),
    })
}

pub fn legend_entries(record: &Record, region: &Region, options: &RenderOptions) -> Vec<LegendEntry> {
    let mut legend: Vec<LegendEntry> = GENE_TYPE_LEGEND
        .iter()
        .map(|(class, label)| LegendEntry::new(class, label))
        .collect();
    if options.shows_tta(record.gc_content) {
        legend.push(LegendEntry::new("legend-tta-codon", "TTA codons"));
    }
    if region.has_subregion_tool(CASSIS_TOOL) {
        legend.push(LegendEntry::new(
            "legend-border-cassis",
            "cluster extent as predicted by CASSIS",
        ));
    }
    legend
}

/// Every detail section of every group in order, then `Modifications` if given.
pub fn build_tabs(anchor: &str, sections: &[HtmlSections], modifications: Option<String>) -> Vec<Tab> {
    let mut tabs: Vec<Tab> = sections
        .iter()
        .flat_map(|group| &group.detail_sections)
        .map(|section| Tab {
            id: format!("{}-{}", anchor, section.class_name),
            label: section.label.clone(),
            content: section.html.clone(),
        })
        .collect();

    if let Some(content) = modifications {
        tabs.push(Tab {
            id: format!("{}-{}", anchor, MODIFICATIONS_CLASS),
            label: "Modifications".to_string(),
            content,
        });
    }
    tabs
}
