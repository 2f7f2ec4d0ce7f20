//! Serializers from a [`ParsedValue`] into target notations.
//!
//! Every renderer is total: inputs it cannot express yield `None`.

use super::parser::{ParsedMatrix, ParsedValue, ParsedVector};

const GEOMETRY_VECTOR_FN: &str = "Vector";
const GEOMETRY_VECTOR_TAG: &str = "3";
const SYMBOLIC_FALLBACK_TAG: &str = "4";

const TYPESET_OPEN: &str = r"\begin{pmatrix}";
const TYPESET_CLOSE: &str = r"\end{pmatrix}";
const TYPESET_COLUMN_SEPARATOR: &str = "&";
const TYPESET_ROW_BREAK: &str = r"\\";

/// Returns the input unchanged.
pub fn passthrough(text: &str) -> Option<String> {
    Some(text.to_string())
}

/// Brace-delimited lists, e.g. `{{1}, {2}, {3}}` for a vector and
/// `{{a, b}, {c, d}}` (one brace group per column) for a matrix.
pub fn render_symbolic(value: &ParsedValue) -> Option<String> {
    match value {
        ParsedValue::None => None,
        ParsedValue::Vector(vector) => Some(symbolic_vector(vector)),
        ParsedValue::Matrix(matrix) => symbolic_matrix(matrix),
    }
}

/// `Vector(a, b, c)` for 3-wide vectors. 4-wide vectors and matrices fall
/// back to [`render_symbolic`].
pub fn render_geometry(value: &ParsedValue) -> Option<String> {
    match value {
        ParsedValue::Vector(vector) if vector.width_tag() == GEOMETRY_VECTOR_TAG => Some(format!(
            "{}({})",
            GEOMETRY_VECTOR_FN,
            vector.components().join(", ")
        )),
        ParsedValue::Vector(vector) if vector.width_tag() == SYMBOLIC_FALLBACK_TAG => {
            render_symbolic(value)
        }
        ParsedValue::Matrix(_) => render_symbolic(value),
        _ => None,
    }
}

/// A `pmatrix` block with rows separated by `\\` and cells by `&`.
/// Vectors render as a single column.
pub fn render_typeset(value: &ParsedValue) -> Option<String> {
    let matrix = value.as_matrix()?;
    let rows = matrix.rows()?;
    let body = rows
        .iter()
        .map(|row| row.join(TYPESET_COLUMN_SEPARATOR))
        .collect::<Vec<_>>()
        .join(TYPESET_ROW_BREAK);
    Some(format!("{TYPESET_OPEN}{body}{TYPESET_CLOSE}"))
}

fn symbolic_vector(vector: &ParsedVector) -> String {
    let items: Vec<String> = vector
        .components()
        .iter()
        .map(|component| format!("{{{component}}}"))
        .collect();
    format!("{{{}}}", items.join(", "))
}

fn symbolic_matrix(matrix: &ParsedMatrix) -> Option<String> {
    if !matrix.is_rectangular() {
        return None;
    }
    let columns: Vec<String> = matrix
        .columns()
        .iter()
        .map(|column| format!("{{{}}}", column.join(", ")))
        .collect();
    Some(format!("{{{}}}", columns.join(", ")))
}
