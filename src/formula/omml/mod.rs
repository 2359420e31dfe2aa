// OMML (Office Math Markup Language) output
//
// Serializes math trees into the native equation markup of WordprocessingML
// documents.
//
// Reference: https://devblogs.microsoft.com/math-in-office/officemath/

mod writer;

pub use writer::{OmmlWriter, formula_to_omml, to_omml, write_formula, write_node};
