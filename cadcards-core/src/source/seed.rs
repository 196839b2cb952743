//! Library records served by the mock source

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::catalog::Category;

/// A raw library row before it is shaped into a `CatalogEntry`
#[derive(Debug, Clone, Copy)]
pub struct SeedRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub sub_category: Option<&'static str>,
    pub description: &'static str,
    pub filename: &'static str,
    pub path: &'static str,
}

const fn rec(
    id: &'static str,
    title: &'static str,
    category: Category,
    sub_category: &'static str,
    description: &'static str,
    filename: &'static str,
    path: &'static str,
) -> SeedRecord {
    SeedRecord {
        id,
        title,
        category,
        sub_category: Some(sub_category),
        description,
        filename,
        path,
    }
}

use Category::*;

pub static SEED_RECORDS: &[SeedRecord] = &[
    rec("425", "Layers - Detail", Layers, "DETAIL", "Layers - Detail - Piping/Schematics Only", "$BR Prot-detail.dwg", r"J:\LIB\BR\Palette Tools\$BR Prot-detail.dwg"),
    rec("426", "Layers - Existing", Layers, "EXISTING", "Layers - Existing Configuration Template", "$BR PROT-existing.dwg", r"J:\LIB\BR\Palette Tools\$BR PROT-existing.dwg"),
    rec("427", "Layers - New", Layers, "PROPOSED", "Layers - New Project Template", "$BR PROT-new.dwg", r"J:\LIB\BR\Palette Tools\$BR PROT-new.dwg"),
    rec("503", "Prop Line Note", Layers, "GENERAL", "Note Setup - Property Line Note & MText Setup", "NOTE SETUP-PROPERTY LINE.dwg", r"J:\LIB\BR\Palette Tools\NOTE SETUP.dwg"),
    rec("428", "Layers - Demo", Layers, "EXISTING", "Layers - Demolition Plan Template", "$BR PROT-demo.dwg", r"J:\LIB\BR\Palette Tools\$BR PROT-demo.dwg"),
    rec("429", "Layers - Grading", Layers, "PROPOSED", "Layers - Grading and Drainage Plan", "$BR PROT-grading.dwg", r"J:\LIB\BR\Palette Tools\$BR PROT-grading.dwg"),

    rec("3", "Arrow - Dynamic", Macros, "DYNAMIC", "Fancy Arrow - Dynamic - Adjustable", "ARR DYNAMIC.dwg", r"J:\LIB\BR\Palette Tools\ARR DYNAMIC.dwg"),
    rec("8", "Flow Arrow", Macros, "DYNAMIC", "Flow Arrow - Dynamic Directional", "ARR FLOW2.dwg", r"J:\LIB\BR\Palette Tools\ARR FLOW2.dwg"),
    rec("857", "Window Dynamic", Macros, "DYNAMIC", "Window Dynamic Block - Resizable", "WINDOW DYNAMIC.dwg", r"J:\LIB\BR\Palette Tools\WINDOW DYNAMIC.dwg"),
    rec("924", "Vehicle Dynamic", Macros, "DYNAMIC", "Vehicle Dynamic - Configurable Plan View", "VEHICLE DYNAMIC.dwg", r"J:\LIB\BR\Palette Tools\VEHICLE DYNAMIC.dwg"),
    rec("953", "Tree - Dynamic", Macros, "DYNAMIC", "Tree - Various - Plan & Elevation Views", "TREE DYNAMIC.dwg", r"J:\LIB\BR\Palette Tools\TREE DYNAMIC.dwg"),
    rec("793", "Guide Lines", Macros, "TOOLS", "Guide Lines - Dynamic - Insert into Title Block", "TB GUIDE.dwg", r"J:\LIB\BR\Palette Tools\TB GUIDE.dwg"),

    rec("1", "Arrow & Line", Symbols, "ARROWS", "Arrow & Line - 1 or 2 ways", "ARR LINE.dwg", r"J:\LIB\BR\Palette Tools\ARR LINE.dwg"),
    rec("440", "North Arrow", Symbols, "ARROWS", "North Arrow - Standard", "NORTHA2.DWG", r"J:\LIB\BR\Palette Tools\NORTHA2.DWG"),
    rec("441", "Scale - Std", Symbols, "ANNOTATION", "Scale Bar - Standard", "SCALE.DWG", r"J:\LIB\BR\Palette Tools\SCALE.DWG"),
    rec("474", "Stamp - DRAFT", Symbols, "STAMPS", "Stamp - DRAFT - Not for Construction", "STAMP DRAFT.dwg", r"J:\LIB\BR\Palette Tools\STAMP DRAFT.dwg"),
    rec("11", "Star Symbol", Symbols, "GENERAL", "Standard Star Marker", "STAR.dwg", r"J:\LIB\BR\Palette Tools\STAR.dwg"),
    rec("464", "Legend AutoTurn", Symbols, "LEGENDS", "Legend - AutoTurn Analysis", "LEGEND AUTOTURN.dwg", r"J:\LIB\BR\Palette Tools\LEGEND AUTOTURN.dwg"),
    rec("476", "Stamp Submittal", Symbols, "STAMPS", "Stamp - __% Submittal Placeholder", "STAMP SUBMIT.dwg", r"J:\LIB\BR\Palette Tools\STAMP SUBMIT.dwg"),

    rec("42", "Pipe Break", Blocks, "UTILITIES", "00 PIPE BREAK Symbol", "00 PIPE BREAK.dwg", r"J:\LIB\BR\Palette Tools\00 PIPE BREAK.dwg"),
    rec("446", "Tree - Save", Blocks, "LANDSCAPE", "Tree - Save - Existing Vegetation", "TREE SAVE.dwg", r"J:\LIB\BR\Palette Tools\TREE SAVE.dwg"),
    rec("447", "Tree - Remove", Blocks, "LANDSCAPE", "Tree - Remove - Demolition Plan", "TREE REMOVE.dwg", r"J:\LIB\BR\Palette Tools\TREE REMOVE.dwg"),
    rec("848", "Bench", Blocks, "LANDSCAPE", "Site Furniture - Bench", "BENCH.dwg", r"J:\LIB\BR\Palette Tools\BENCH.dwg"),
    rec("849", "Bike Rack", Blocks, "LANDSCAPE", "Site Furniture - Bike Rack", "BIKE RACK.dwg", r"J:\LIB\BR\Palette Tools\BIKE RACK.dwg"),
    rec("850", "Bollard", Blocks, "TRANSPORT", "Traffic Control - Bollard", "BOLLARD.DWG", r"J:\LIB\BR\Palette Tools\BOLLARD.DWG"),
    rec("1063", "Fire Hydrant", Blocks, "UTILITIES", "00 FH - Fire Hydrant Assembly", "00 FH.DWG", r"J:\LIB\BR\Palette Tools\00 FH.DWG"),
    rec("50", "02 Flange", Blocks, "GENERAL", "02 FLG - Standard Flange", "02 FLG.dwg", r"J:\LIB\BR\Palette Tools\02 FLG.dwg"),
    rec("52", "02 Tee Flange", Blocks, "GENERAL", "02 TEE FLG - Standard Tee", "02 TEE FLG.dwg", r"J:\LIB\BR\Palette Tools\02 TEE FLG.dwg"),
    rec("925", "Fire Truck", Blocks, "TRANSPORT", "Vehicle - Fire Truck Front View", "VEHICLE TRUCK FIRE.dwg", r"J:\LIB\BR\Palette Tools\VEHICLE TRUCK.dwg"),

    rec("485", "Title - Detail", Details, "GENERAL", "Title - Detail/Section With Bubble - Not To Scale", "TITLE DETAIL.dwg", r"J:\LIB\BR\Palette Tools\TITLE DETAIL.dwg"),
    rec("31", "Note Sheet", Details, "GENERAL", "Sonoma County - Standard Note Sheet for Subdivisions", "NOTE COUNTY.dwg", r"J:\LIB\BR\Palette Tools\NOTE COUNTY.dwg"),
    rec("449", "Section Angled", Details, "GENERAL", "Section With Angle Indicator", "SECTION ANGLED.dwg", r"J:\LIB\BR\Palette Tools\SECTION ANGLED.dwg"),
    rec("1199", "Yard Drain", Details, "STORM", "SD - Yard Drain - Private", "SD - Yard Drain.dwg", r"J:\LIB\BR\SD - Yard Drain.dwg"),
    rec("1200", "Conc Wall", Details, "ROADWAY", "Wall - Concrete Construction Detail", "Wall - Concrete.dwg", r"J:\LIB\BR\Wall - Concrete.dwg"),
    rec("466", "Earthwork Table", Details, "GENERAL", "Legend - Earthwork Cut/Fill Table", "LEGEND EARTHWORK.dwg", r"J:\LIB\BR\Palette Tools\LEGEND EARTHWORK.dwg"),
    rec("800", "Cover 11x17", Details, "GENERAL", "B&R 11x17 - Cover Sheet Template", "TB COVER BR 11x17.dwg", r"J:\LIB\BR\Palette Tools\TB COVER BR 11x17.dwg"),

    rec("spec-01", "00 72 00", Specifications, "GENERAL", "General Conditions - Standard Project Requirements", "00 72 00 General Conditions.docx", r"J:\LIB\SPECS\00 72 00.docx"),
    rec("spec-02", "31 00 00", Specifications, "SITEWORK", "Earthwork - Excavation and Fill", "31 00 00 Earthwork.docx", r"J:\LIB\SPECS\31 00 00.docx"),
    rec("spec-03", "33 40 00", Specifications, "UTILITIES", "Storm Drainage Utilities - Piping and Structures", "33 40 00 Storm Drainage.docx", r"J:\LIB\SPECS\33 40 00.docx"),
    rec("spec-04", "03 30 00", Specifications, "CONCRETE", "Cast-in-Place Concrete", "03 30 00 Concrete.docx", r"J:\LIB\SPECS\03 30 00.docx"),
    rec("spec-05", "33 30 00", Specifications, "UTILITIES", "Sanitary Sewerage Utilities", "33 30 00 Sanitary.docx", r"J:\LIB\SPECS\33 30 00.docx"),
    rec("spec-06", "31 10 00", Specifications, "SITEWORK", "Site Clearing", "31 10 00 Clearing.docx", r"J:\LIB\SPECS\31 10 00.docx"),
    rec("spec-07", "31 23 00", Specifications, "SITEWORK", "Excavation and Fill", "31 23 00 Excavation.docx", r"J:\LIB\SPECS\31 23 00.docx"),
];

/// Seed records grouped by category, in library order
static BY_CATEGORY: Lazy<HashMap<Category, Vec<&'static SeedRecord>>> = Lazy::new(|| {
    let mut index: HashMap<Category, Vec<&'static SeedRecord>> = HashMap::new();
    for record in SEED_RECORDS {
        index.entry(record.category).or_default().push(record);
    }
    index
});

/// Records for one category, in library order
pub fn records_for(category: Category) -> &'static [&'static SeedRecord] {
    BY_CATEGORY
        .get(&category)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_records() {
        for category in Category::ALL {
            assert!(!records_for(category).is_empty(), "{category}");
        }
    }

    #[test]
    fn test_sub_categories_are_in_vocabulary() {
        for record in SEED_RECORDS {
            if let Some(sub) = record.sub_category {
                assert!(
                    record.category.sub_categories().contains(&sub),
                    "{} has {sub}",
                    record.id
                );
            }
        }
    }
}
