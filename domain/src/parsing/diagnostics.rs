//! Content the converter could not flatten into question text.

use super::tree::DocumentNode;
use crate::exam::StructureWarning;

const FORMULA_TAGS: &[&str] = &["math", "m:omath"];

/// Scan the document for tables and formulas.
///
/// Both survive the conversion only partially, so the author is told to
/// paste them as pictures instead.
pub fn structure_warnings<N: DocumentNode>(root: &N) -> Vec<StructureWarning> {
    let mut warnings = Vec::new();

    let tables = root.descendants_named("table").len();
    if tables > 0 {
        warnings.push(StructureWarning::Tables(tables));
    }

    let formulas: usize = FORMULA_TAGS
        .iter()
        .map(|tag| root.descendants_named(tag).len())
        .sum();
    if formulas > 0 {
        warnings.push(StructureWarning::Formulas(formulas));
    }

    warnings
}
