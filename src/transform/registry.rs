//! Transformer registry — the ordered set of notations offered to the operator.

use crate::notation::{
    classify_and_parse, passthrough, render_geometry, render_symbolic, render_typeset,
};
use crate::transform::isolation::isolate;

pub const RAW_LABEL: &str = "Raw value";
pub const SYMBOLIC_LABEL: &str = "Wolfram-Alpha-style";
pub const GEOMETRY_LABEL: &str = "Dynamic-geometry-style";
pub const TYPESET_LABEL: &str = "Typeset (LaTeX-style)";

/// Raw text in, optional rendering out.
pub type TransformFn = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// A single labelled transformation.
pub struct TransformerEntry {
    label: String,
    transform: TransformFn,
}

impl TransformerEntry {
    pub fn new<F>(label: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            transform: Box::new(transform),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Debug for TransformerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformerEntry")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// One successful transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub label: String,
    pub text: String,
}

/// Ordered, immutable list of transformers. Order is display order.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<TransformerEntry>,
}

impl Registry {
    pub fn new(entries: Vec<TransformerEntry>) -> Self {
        Self { entries }
    }

    /// The built-in notations: raw, symbolic, geometry, typeset.
    pub fn standard() -> Self {
        Self::new(vec![
            TransformerEntry::new(RAW_LABEL, passthrough),
            TransformerEntry::new(SYMBOLIC_LABEL, |text| {
                render_symbolic(&classify_and_parse(text))
            }),
            TransformerEntry::new(GEOMETRY_LABEL, |text| {
                render_geometry(&classify_and_parse(text))
            }),
            TransformerEntry::new(TYPESET_LABEL, |text| {
                render_typeset(&classify_and_parse(text))
            }),
        ])
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(TransformerEntry::label)
    }

    /// Run every transformer once, in order, against `text`.
    ///
    /// A transformer that returns `None` or panics contributes no output;
    /// the remaining transformers still run.
    pub fn run(&self, text: &str) -> Vec<TransformOutput> {
        let mut outputs = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match isolate(|| (entry.transform)(text)) {
                Ok(Some(rendered)) => outputs.push(TransformOutput {
                    label: entry.label.clone(),
                    text: rendered,
                }),
                Ok(None) => {}
                Err(message) => {
                    tracing::warn!(
                        transformer = %entry.label,
                        error = %message,
                        "Transformer failed, skipping"
                    );
                }
            }
        }
        outputs
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(outputs: &[TransformOutput]) -> Vec<&str> {
        outputs.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn standard_registry_order() {
        let registry = Registry::standard();
        assert_eq!(
            registry.labels().collect::<Vec<_>>(),
            vec![RAW_LABEL, SYMBOLIC_LABEL, GEOMETRY_LABEL, TYPESET_LABEL]
        );
    }

    #[test]
    fn plain_text_only_yields_raw_row() {
        let outputs = Registry::standard().run("hello");
        assert_eq!(
            outputs,
            vec![TransformOutput {
                label: RAW_LABEL.to_string(),
                text: "hello".to_string(),
            }]
        );
    }

    #[test]
    fn three_wide_vector_yields_every_row() {
        let outputs = Registry::standard().run("dvec3(1, 2, 3)");
        assert_eq!(
            labels(&outputs),
            vec![RAW_LABEL, SYMBOLIC_LABEL, GEOMETRY_LABEL, TYPESET_LABEL]
        );
        assert_eq!(outputs[2].text, "Vector(1, 2, 3)");
    }

    #[test]
    fn two_wide_vector_skips_geometry() {
        let outputs = Registry::standard().run("dvec2(1, 2)");
        assert_eq!(labels(&outputs), vec![RAW_LABEL, SYMBOLIC_LABEL, TYPESET_LABEL]);
    }

    #[test]
    fn panicking_transformer_is_isolated() {
        let registry = Registry::new(vec![
            TransformerEntry::new("first", |text| Some(text.to_uppercase())),
            TransformerEntry::new("broken", |_| panic!("index out of range")),
            TransformerEntry::new("last", |text| Some(text.len().to_string())),
        ]);
        let outputs = registry.run("abc");
        assert_eq!(labels(&outputs), vec!["first", "last"]);
        assert_eq!(outputs[0].text, "ABC");
        assert_eq!(outputs[1].text, "3");
    }
}
