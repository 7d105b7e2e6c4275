//! # Page Templates
//!
//! Every fragment of a page is a minijinja template kept in its own file under
//! `templates/`, included here as a string constant. Keeping markup out of the
//! Rust code makes it easier to edit and to diff.
//!
//! A few rules the templates follow:
//!
//! 1. Logic lives in Rust. View models arrive fully computed (row spans,
//!    fallback labels, which columns exist) and templates only branch on
//!    what gets output.
//!
//! 2. Shared widgets live in `macros.html` and are imported as `m`. Inline
//!    macros are written on one line so they do not leak newlines into
//!    comma-separated lists.
//!
//! 3. Markup produced by another template is passed in as a string and
//!    printed with `| safe`. Everything else is escaped.
//!
//! 4. Help tooltips take their ids from `tooltip_id`, which counts from 1 in
//!    every render pass. Never derive ids from anything global.

pub const MACROS_TEMPLATE: &str = include_str!("templates/macros.html");
pub const REGION_TEMPLATE: &str = include_str!("templates/region.html");
pub const GENERAL_TEMPLATE: &str = include_str!("templates/general.html");
pub const COMPOUNDS_TEMPLATE: &str = include_str!("templates/compounds.html");
pub const GENES_TEMPLATE: &str = include_str!("templates/genes.html");
pub const NRP_TEMPLATE: &str = include_str!("templates/nrp.html");
pub const POLYKETIDE_TEMPLATE: &str = include_str!("templates/polyketide.html");
pub const RIPP_TEMPLATE: &str = include_str!("templates/ripp.html");
pub const SACCHARIDE_TEMPLATE: &str = include_str!("templates/saccharide.html");
pub const TERPENE_TEMPLATE: &str = include_str!("templates/terpene.html");
pub const HISTORY_TEMPLATE: &str = include_str!("templates/history.html");
pub const MODIFICATIONS_TEMPLATE: &str = include_str!("templates/modifications.html");
pub const PAGE_TEMPLATE: &str = include_str!("templates/page.html");
pub const RETIRED_TEMPLATE: &str = include_str!("templates/retired.html");

/// Name/source pairs in registration order.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("macros.html", MACROS_TEMPLATE),
    ("region.html", REGION_TEMPLATE),
    ("general.html", GENERAL_TEMPLATE),
    ("compounds.html", COMPOUNDS_TEMPLATE),
    ("genes.html", GENES_TEMPLATE),
    ("nrp.html", NRP_TEMPLATE),
    ("polyketide.html", POLYKETIDE_TEMPLATE),
    ("ripp.html", RIPP_TEMPLATE),
    ("saccharide.html", SACCHARIDE_TEMPLATE),
    ("terpene.html", TERPENE_TEMPLATE),
    ("history.html", HISTORY_TEMPLATE),
    ("modifications.html", MODIFICATIONS_TEMPLATE),
    ("page.html", PAGE_TEMPLATE),
    ("retired.html", RETIRED_TEMPLATE),
];
