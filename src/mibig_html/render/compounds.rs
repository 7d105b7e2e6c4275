//! Compound blocks: chemistry, cross-references and moieties.

use super::nrp::non_blank;
use crate::model::Compound;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatabaseLink {
    pub label: String,
    pub url: Option<String>,
}

impl DatabaseLink {
    /// Parses `"database:identifier"`; unknown databases are shown unlinked.
    pub fn new(raw: &str) -> Self {
        let url = raw.split_once(':').and_then(|(db, id)| {
            let id = id.trim();
            match db.trim().to_lowercase().as_str() {
                "pubchem" => Some(format!("https://pubchem.ncbi.nlm.nih.gov/compound/{}", id)),
                "chebi" => Some(format!(
                    "https://www.ebi.ac.uk/chebi/searchId.do?chebiId=CHEBI:{}",
                    id
                )),
                "chemspider" => Some(format!(
                    "https://www.chemspider.com/Chemical-Structure.{}.html",
                    id
                )),
                "npatlas" => Some(format!("https://www.npatlas.org/explore/compounds/{}", id)),
                _ => None,
            }
        });
        Self {
            label: raw.to_string(),
            url,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoietyView {
    pub name: String,
    pub subcluster: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompoundView {
    pub name: String,
    pub formula: Option<String>,
    pub mass: Option<String>,
    pub structure: Option<String>,
    pub synonyms: Vec<String>,
    pub databases: Vec<DatabaseLink>,
    pub activities: Vec<String>,
    pub moieties: Vec<MoietyView>,
}

impl CompoundView {
    pub fn new(compound: &Compound) -> Self {
        Self {
            name: compound.name.clone(),
            formula: non_blank(compound.molecular_formula.as_deref()),
            mass: compound.mol_mass.map(|m| format!("{:.4}", m)),
            structure: non_blank(compound.chem_struct.as_deref()),
            synonyms: compound.chem_synonyms.clone(),
            databases: compound
                .database_id
                .iter()
                .map(|raw| DatabaseLink::new(raw))
                .collect(),
            activities: compound.chem_acts.clone(),
            moieties: compound
                .chem_moieties
                .iter()
                .map(|m| MoietyView {
                    name: m.moiety.clone(),
                    subcluster: m.subcluster.clone(),
                })
                .collect(),
        }
    }
}

pub fn compound_views(compounds: &[Compound]) -> Vec<CompoundView> {
    compounds.iter().map(CompoundView::new).collect()
}
