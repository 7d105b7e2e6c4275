use crate::model::{
    Bundle, CdsFeature, ChangelogEntry, Cluster, Compound, Entry, Loci, Location, Record, Region,
};

pub fn compound(name: &str) -> Compound {
    Compound {
        name: name.to_string(),
        chem_struct: None,
        molecular_formula: None,
        mol_mass: None,
        database_id: vec![],
        chem_synonyms: vec![],
        chem_acts: vec![],
        chem_moieties: vec![],
    }
}

pub fn cluster() -> Cluster {
    Cluster {
        mibig_accession: "BGC0000001".into(),
        organism_name: "Streptomyces testus".into(),
        ncbi_tax_id: "1901".into(),
        compounds: vec![compound("testomycin")],
        biosynthetic_class: vec!["NRP".into()],
        loci: Loci {
            accession: "AB000001.1".into(),
            start_coord: None,
            end_coord: None,
            completeness: "complete".into(),
        },
        minimal: false,
        comments: None,
        publications: vec![],
        genes: None,
        nrp: None,
        polyketide: None,
        ripp: None,
        saccharide: None,
        terpene: None,
        other: None,
        retired: false,
        retirement_reasons: vec![],
        see_also: vec![],
    }
}

pub fn cds(locus_tag: &str, start: u64, end: u64, strand: i8) -> CdsFeature {
    CdsFeature {
        locus_tag: Some(locus_tag.into()),
        location: Location { start, end, strand },
        product: Some("hypothetical protein".into()),
        translation: Some("MSTNPKPQRKTKRNTNRRPQDVKFPGG".into()),
        ..Default::default()
    }
}

pub fn record() -> Record {
    Record {
        id: "AB000001.1".into(),
        record_index: 1,
        gc_content: 0.7,
        alterations: vec![],
        cds_features: vec![cds("TEST_0001", 0, 300, 1), cds("TEST_0002", 350, 1200, -1)],
    }
}

pub fn bundle() -> Bundle {
    Bundle {
        entry: Entry {
            cluster: cluster(),
            changelog: vec![ChangelogEntry {
                version: "1.0".into(),
                comments: vec!["Entry added".into()],
                contributors: vec!["AAAAAAAAAAAAAAAAAAAAAAAA".into()],
            }],
        },
        record: Some(record()),
        region: Region::default(),
        taxonomy: vec![],
    }
}
