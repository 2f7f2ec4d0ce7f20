//! End-to-end behaviour of the standard registry on representative inputs.

use clipmorph::notation::{classify_and_parse, parse_matrix, parse_vector, render_typeset};
use clipmorph::transform::{
    Registry, TransformOutput, GEOMETRY_LABEL, RAW_LABEL, SYMBOLIC_LABEL, TYPESET_LABEL,
};

fn run(text: &str) -> Vec<(String, String)> {
    Registry::standard()
        .run(text)
        .into_iter()
        .map(|TransformOutput { label, text }| (label, text))
        .collect()
}

fn row(label: &str, text: &str) -> (String, String) {
    (label.to_string(), text.to_string())
}

#[test]
fn plain_text_only_passes_through() {
    assert_eq!(run("hello"), vec![row(RAW_LABEL, "hello")]);
    assert_eq!(run(""), vec![row(RAW_LABEL, "")]);
}

#[test]
fn vector_round_trip() {
    let vector = parse_vector("dvec3(1.0, 2.0, 3.0)").unwrap();
    assert_eq!(vector.components(), ["1.0", "2.0", "3.0"]);
    assert_eq!(
        run("dvec3(1.0, 2.0, 3.0)"),
        vec![
            row(RAW_LABEL, "dvec3(1.0, 2.0, 3.0)"),
            row(SYMBOLIC_LABEL, "{{1.0}, {2.0}, {3.0}}"),
            row(GEOMETRY_LABEL, "Vector(1.0, 2.0, 3.0)"),
            row(TYPESET_LABEL, r"\begin{pmatrix}1.0\\2.0\\3.0\end{pmatrix}"),
        ]
    );
}

#[test]
fn matrix_round_trip() {
    let matrix = parse_matrix("dmat2((1, 2), (3, 4))").unwrap();
    assert_eq!(matrix.columns()[0], ["1", "2"]);
    assert_eq!(matrix.columns()[1], ["3", "4"]);
    assert_eq!(
        matrix.rows().unwrap(),
        vec![vec!["1", "3"], vec!["2", "4"]]
    );
    assert_eq!(
        run("dmat2((1, 2), (3, 4))"),
        vec![
            row(RAW_LABEL, "dmat2((1, 2), (3, 4))"),
            row(SYMBOLIC_LABEL, "{{1, 2}, {3, 4}}"),
            row(GEOMETRY_LABEL, "{{1, 2}, {3, 4}}"),
            row(TYPESET_LABEL, r"\begin{pmatrix}1&3\\2&4\end{pmatrix}"),
        ]
    );
}

#[test]
fn compact_vector_degrades_to_single_component() {
    assert_eq!(
        run("dvec4(1,2,3,4)"),
        vec![
            row(RAW_LABEL, "dvec4(1,2,3,4)"),
            row(SYMBOLIC_LABEL, "{{1,2,3,4}}"),
            row(GEOMETRY_LABEL, "{{1,2,3,4}}"),
            row(TYPESET_LABEL, r"\begin{pmatrix}1,2,3,4\end{pmatrix}"),
        ]
    );
}

#[test]
fn ragged_matrix_keeps_raw_row() {
    let rows = run("dmat3((1, 2, 3), (4, 5))");
    assert_eq!(rows, vec![row(RAW_LABEL, "dmat3((1, 2, 3), (4, 5))")]);

    let compact = run("dmat2((1,2),(3))");
    assert_eq!(compact[0], row(RAW_LABEL, "dmat2((1,2),(3))"));
}

#[test]
fn rendered_outputs_are_not_recognised_again() {
    for (_, rendered) in run("dmat2((1, 2), (3, 4))").into_iter().skip(1) {
        assert_eq!(run(&rendered), vec![row(RAW_LABEL, &rendered)]);
    }
}

#[test]
fn typeset_of_plain_text_is_none() {
    assert_eq!(render_typeset(&classify_and_parse("matrix")), None);
}
