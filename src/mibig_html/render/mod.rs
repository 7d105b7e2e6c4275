//! # Page Rendering
//!
//! Turns a [`Bundle`] into HTML. Work is split in two layers:
//!
//! - **View models** (`general`, `nrp`, `polyketide`, `genes`, `compounds`,
//!   `history`, `region`) compute everything a template needs from the input
//!   data: fallbacks, row spans, which optional columns exist. They are plain
//!   functions of their input and are where most of the tests live.
//! - **Templates** (see [`templates`]) only lay the view models out as markup.
//!
//! [`PageRenderer`] owns the registered templates and glues the two together.
//! Each call renders in a fresh template environment, so the renderer holds no
//! mutable state: rendering the same bundle twice gives the same bytes, and a
//! single renderer can be shared across threads.

use crate::config::RenderOptions;
use crate::error::{MibigError, Result};
use crate::model::{Bundle, Cluster, Record};
use crate::references::{CacheKind, ReferenceCache, ReferenceCollection, ReferenceLink};
use fragments::Renderer;
use minijinja::context;
use serde::Serialize;

pub mod compounds;
pub mod general;
pub mod genes;
pub mod history;
pub mod nrp;
pub mod polyketide;
pub mod region;
pub mod ripp;
pub mod saccharide;
pub mod sections;
pub mod styles;
pub mod templates;
pub mod terpene;

use compounds::compound_views;
use general::GeneralView;
use genes::GeneTableView;
use history::history_entries;
use nrp::NrpView;
use polyketide::PolyketideView;
use region::RegionView;
use ripp::RippView;
use saccharide::SaccharideView;
use sections::HtmlSections;
use styles::MIBIG_THEME;
use templates::TEMPLATES;
use terpene::TerpeneView;

/// Name of the annotation data file written next to each page.
pub const ANNOTATIONS_FILE: &str = "annotations.json";

/// Class name of the section group holding all MIBiG detail sections.
pub const SECTIONS_NAME: &str = "mibig-general";

/// PubMed and DOI metadata used to label references.
#[derive(Debug, Clone)]
pub struct ReferenceCaches {
    pub pubmed: ReferenceCache,
    pub doi: ReferenceCache,
}

impl ReferenceCaches {
    pub fn empty() -> Self {
        Self {
            pubmed: ReferenceCache::empty(CacheKind::Pubmed),
            doi: ReferenceCache::empty(CacheKind::Doi),
        }
    }

    pub fn links(&self, cluster: &Cluster) -> Result<Vec<ReferenceLink>> {
        let publications = cluster.parsed_publications()?;
        Ok(ReferenceCollection::new(&publications, &self.pubmed, &self.doi).into_links())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub title: String,
    pub stylesheet: String,
    pub base_url: String,
    pub version: String,
    pub annotation_file: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeeAlso {
    pub accession: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RetiredView {
    pub accession: String,
    pub reasons: Vec<String>,
    pub see_also: Vec<SeeAlso>,
}

impl RetiredView {
    pub fn new(cluster: &Cluster, options: &RenderOptions) -> Self {
        Self {
            accession: cluster.mibig_accession.clone(),
            reasons: cluster.retirement_reasons.clone(),
            see_also: cluster
                .see_also
                .iter()
                .map(|accession| SeeAlso {
                    accession: accession.clone(),
                    url: format!("{}repository/{}/index.html", options.base_url, accession),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageRenderer {
    renderer: Renderer,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut renderer = Renderer::new(MIBIG_THEME.clone());
        for (name, source) in TEMPLATES {
            renderer.add_template(name, source)?;
        }
        Ok(Self { renderer })
    }

    fn fragment<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        Ok(self.renderer.render(name, data)?)
    }

    pub fn general(&self, view: &GeneralView) -> Result<String> {
        self.fragment("general.html", &context! { general => view })
    }

    pub fn compounds(&self, cluster: &Cluster) -> Result<String> {
        let compounds = compound_views(&cluster.compounds);
        self.fragment("compounds.html", &context! { compounds => compounds })
    }

    pub fn genes(&self, view: &GeneTableView) -> Result<String> {
        self.fragment("genes.html", &context! { genes => view })
    }

    pub fn nrp(&self, view: &NrpView) -> Result<String> {
        self.fragment("nrp.html", &context! { nrp => view })
    }

    pub fn polyketide(&self, view: &PolyketideView) -> Result<String> {
        self.fragment("polyketide.html", &context! { polyketide => view })
    }

    pub fn ripp(&self, view: &RippView) -> Result<String> {
        self.fragment("ripp.html", &context! { ripp => view })
    }

    pub fn saccharide(&self, view: &SaccharideView) -> Result<String> {
        self.fragment("saccharide.html", &context! { saccharide => view })
    }

    pub fn terpene(&self, view: &TerpeneView) -> Result<String> {
        self.fragment("terpene.html", &context! { terpene => view })
    }

    pub fn history(&self, bundle: &Bundle) -> Result<String> {
        let history = history_entries(&bundle.entry.changelog);
        self.fragment("history.html", &context! { history => history })
    }

    pub fn modifications(&self, alterations: &[String]) -> Result<String> {
        self.fragment("modifications.html", &context! { alterations => alterations })
    }

    /// All MIBiG detail sections of an entry, in tab order.
    pub fn annotation_sections(
        &self,
        bundle: &Bundle,
        record: &Record,
        references: Vec<ReferenceLink>,
        options: &RenderOptions,
    ) -> Result<HtmlSections> {
        let cluster = &bundle.entry.cluster;
        let mut html = HtmlSections::new(SECTIONS_NAME);

        let general = GeneralView::new(cluster, &bundle.taxonomy, references, options);
        html.add_detail_section("General", self.general(&general)?, "mibig-general");
        html.add_detail_section("Compounds", self.compounds(cluster)?, "mibig-compounds");

        let genes = GeneTableView::new(&record.cds_features, cluster.gene_annotations());
        html.add_detail_section("Genes", self.genes(&genes)?, "mibig-genes");

        if let Some(polyketide) = &cluster.polyketide {
            let view = PolyketideView::new(polyketide);
            html.add_detail_section("Polyketide", self.polyketide(&view)?, "mibig-polyketide");
        }
        if let Some(nrp) = &cluster.nrp {
            html.add_detail_section("NRP", self.nrp(&NrpView::new(nrp))?, "mibig-nrp");
        }
        if let Some(ripp) = &cluster.ripp {
            html.add_detail_section("RiPP", self.ripp(&RippView::new(ripp))?, "mibig-ripp");
        }
        if let Some(saccharide) = &cluster.saccharide {
            let view = SaccharideView::new(saccharide);
            html.add_detail_section("Saccharide", self.saccharide(&view)?, "mibig-saccharide");
        }
        if let Some(terpene) = &cluster.terpene {
            let view = TerpeneView::new(terpene);
            html.add_detail_section("Terpene", self.terpene(&view)?, "mibig-terpene");
        }

        html.add_detail_section("History", self.history(bundle)?, "mibig-logs");
        Ok(html)
    }

    pub fn region(
        &self,
        bundle: &Bundle,
        record: &Record,
        sections: &[HtmlSections],
        options: &RenderOptions,
    ) -> Result<String> {
        let view = RegionView::new(
            &bundle.region,
            record,
            &bundle.entry.cluster,
            sections,
            options,
            |alterations| self.modifications(alterations),
        )?;
        self.fragment("region.html", &context! { region => view })
    }

    pub fn page(&self, view: &PageView) -> Result<String> {
        self.fragment("page.html", &context! { page => view })
    }

    pub fn retired(&self, view: &RetiredView) -> Result<String> {
        self.fragment("retired.html", &context! { retired => view })
    }

    /// Renders the complete document for a bundle.
    ///
    /// Retired entries get the retirement notice; every other entry needs a
    /// record to render its region.
    pub fn render_entry(
        &self,
        bundle: &Bundle,
        caches: &ReferenceCaches,
        options: &RenderOptions,
    ) -> Result<String> {
        let cluster = &bundle.entry.cluster;
        if cluster.retired {
            let body = self.retired(&RetiredView::new(cluster, options))?;
            return self.page(&page_view(
                format!("{} (retired)", cluster.mibig_accession),
                body,
                None,
                options,
            ));
        }

        let record = bundle.record.as_ref().ok_or_else(|| {
            MibigError::invalid(&cluster.mibig_accession, "entry has no sequence record")
        })?;
        let sections = self.annotation_sections(bundle, record, caches.links(cluster)?, options)?;
        let body = self.region(bundle, record, &[sections], options)?;
        self.page(&page_view(
            cluster.mibig_accession.clone(),
            body,
            Some(ANNOTATIONS_FILE),
            options,
        ))
    }
}

fn page_view(
    title: String,
    body: String,
    annotation_file: Option<&str>,
    options: &RenderOptions,
) -> PageView {
    PageView {
        title,
        stylesheet: options.stylesheet.clone(),
        base_url: options.base_url.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        annotation_file: annotation_file.map(String::from),
        body,
    }
}
