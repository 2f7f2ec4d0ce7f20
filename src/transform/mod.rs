//! Transformers: labelled strategies from raw text to a rendered notation.

mod isolation;
mod registry;

pub use isolation::{in_isolated_call, isolate};
pub use registry::{
    Registry, TransformFn, TransformOutput, TransformerEntry, GEOMETRY_LABEL, RAW_LABEL,
    SYMBOLIC_LABEL, TYPESET_LABEL,
};
