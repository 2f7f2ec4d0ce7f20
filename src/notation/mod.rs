//! Vector/matrix literal notations: recognition and rendering.

pub mod parser;
pub mod render;

pub use parser::{
    classify_and_parse, parse_matrix, parse_vector, ParsedMatrix, ParsedValue, ParsedVector,
};
pub use render::{passthrough, render_geometry, render_symbolic, render_typeset};
