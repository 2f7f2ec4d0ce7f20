//! Recognition of `dvecN(...)` and `dmatNxM((...), (...))` literals.
//!
//! Matching is a prefix check followed by splitting on literal separators.
//! Components are kept verbatim, so `1.0` stays `1.0` in every rendering.

const VECTOR_PREFIX: &str = "dvec";
const MATRIX_PREFIX: &str = "dmat";
const COMPONENT_SEPARATOR: &str = ", ";
const COLUMN_SEPARATOR: &str = "), (";

/// A vector literal split into its raw components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVector {
    /// Text between `dvec` and the opening parenthesis (e.g. `"3"`).
    width_tag: String,
    components: Vec<String>,
}

impl ParsedVector {
    pub fn width_tag(&self) -> &str {
        &self.width_tag
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

}

/// A column-major matrix literal. Each inner vector is one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMatrix {
    columns: Vec<Vec<String>>,
}

impl ParsedMatrix {
    pub fn columns(&self) -> &[Vec<String>] {
        &self.columns
    }

    /// True when every column has the same number of components.
    pub fn is_rectangular(&self) -> bool {
        match self.columns.split_first() {
            Some((first, rest)) => rest.iter().all(|col| col.len() == first.len()),
            None => false,
        }
    }

    /// Row view of the matrix: row `i` holds the `i`-th component of every
    /// column. `None` for ragged matrices.
    pub fn rows(&self) -> Option<Vec<Vec<&str>>> {
        if !self.is_rectangular() {
            return None;
        }
        let height = self.columns[0].len();
        let rows = (0..height)
            .map(|i| self.columns.iter().map(|col| col[i].as_str()).collect())
            .collect();
        Some(rows)
    }

    fn from_vector(vector: &ParsedVector) -> Self {
        Self {
            columns: vec![vector.components.clone()],
        }
    }
}

/// Result of interpreting a raw buffer snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedValue {
    None,
    Vector(ParsedVector),
    Matrix(ParsedMatrix),
}

impl ParsedValue {
    /// The value as a matrix. Vectors become a single column.
    pub fn as_matrix(&self) -> Option<ParsedMatrix> {
        match self {
            ParsedValue::None => None,
            ParsedValue::Vector(vector) => Some(ParsedMatrix::from_vector(vector)),
            ParsedValue::Matrix(matrix) => Some(matrix.clone()),
        }
    }
}

/// Try every known notation against `text`, vectors first.
pub fn classify_and_parse(text: &str) -> ParsedValue {
    if let Some(vector) = parse_vector(text) {
        return ParsedValue::Vector(vector);
    }
    if let Some(matrix) = parse_matrix(text) {
        return ParsedValue::Matrix(matrix);
    }
    ParsedValue::None
}

pub fn parse_vector(text: &str) -> Option<ParsedVector> {
    if !text.starts_with(VECTOR_PREFIX) {
        return None;
    }
    let (head, interior) = split_parenthesized(text)?;
    let components = split_components(interior)?;
    Some(ParsedVector {
        width_tag: head[VECTOR_PREFIX.len()..].to_string(),
        components,
    })
}

pub fn parse_matrix(text: &str) -> Option<ParsedMatrix> {
    if !text.starts_with(MATRIX_PREFIX) {
        return None;
    }
    let (_, interior) = split_parenthesized(text)?;
    let columns = interior
        .split(COLUMN_SEPARATOR)
        .map(|column| split_components(column.trim_matches(is_column_padding)))
        .collect::<Option<Vec<_>>>()?;
    Some(ParsedMatrix { columns })
}

/// Splits `text` at the first `(` and the last `)`, returning the head before
/// the opening parenthesis and the interior between the two.
fn split_parenthesized(text: &str) -> Option<(&str, &str)> {
    let open = text.find('(')?;
    let close = text.rfind(')')?;
    if close < open {
        return None;
    }
    Some((&text[..open], &text[open + 1..close]))
}

fn is_column_padding(c: char) -> bool {
    matches!(c, '(' | ')' | ' ')
}

fn split_components(interior: &str) -> Option<Vec<String>> {
    let components: Vec<String> = interior
        .split(COMPONENT_SEPARATOR)
        .map(str::to_string)
        .collect();
    if components.iter().any(|c| c.is_empty()) {
        return None;
    }
    Some(components)
}
