//! Rendered detail sections, grouped under a name.
//!
//! A section is a labelled piece of finished HTML plus the class name that keys
//! its tab. The region composer flattens every group into one tab sequence.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailSection {
    pub label: String,
    pub html: String,
    pub class_name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HtmlSections {
    pub name: String,
    pub detail_sections: Vec<DetailSection>,
}

impl HtmlSections {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            detail_sections: Vec::new(),
        }
    }

    pub fn add_detail_section(&mut self, label: &str, html: String, class_name: &str) {
        self.detail_sections.push(DetailSection {
            label: label.to_string(),
            html,
            class_name: class_name.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.detail_sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_keep_insertion_order() {
        let mut sections = HtmlSections::new("mibig");
        assert!(sections.is_empty());
        sections.add_detail_section("General", "<p>a</p>".into(), "mibig-general");
        sections.add_detail_section("Genes", "<p>b</p>".into(), "mibig-genes");

        let labels: Vec<_> = sections
            .detail_sections
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["General", "Genes"]);
        assert_eq!(sections.detail_sections[1].class_name, "mibig-genes");
    }
}
