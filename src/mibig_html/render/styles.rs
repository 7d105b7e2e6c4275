//! Semantic style names used by the page templates.
//!
//! Templates never spell out CSS classes. They mark data by what it is
//! (`{{ value | styled("evidence") }}`) and the theme below maps each name to the
//! class the MIBiG stylesheet defines. Renaming a class only touches this file.
//!
//! Unknown names render with the `(!?)` indicator, which makes typos in
//! templates show up in the page instead of silently losing their styling.

use fragments::Theme;
use once_cell::sync::Lazy;

pub static MIBIG_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("evidence", "mibig-evidence")
        .add("inactive", "mibig-inactive")
        .add("placeholder", "mibig-placeholder")
        .add("substrate", "mibig-substrate")
        .add("domain", "mibig-domain")
        .add("lineage", "mibig-lineage")
        .add("modified", "mibig-modified")
        .add("formula", "mibig-formula")
        .add("version", "mibig-version")
});
