//! Perceptron lock tests: convergence on separable data, determinism of the
//! training record, and weight persistence across `train` calls.

use std::collections::BTreeMap;

use waypoint_harness::runner::{run_training, TRAINING_REPORT, WEIGHTS_REPORT};
use waypoint_perceptron::{FeatureVector, PerceptronClassifier};

/// Digits drawn on a 3x3 grid; pixel `pRC` is 1 when lit.
fn glyph(rows: [&str; 3]) -> FeatureVector<String> {
    let mut features = BTreeMap::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            features.insert(format!("p{r}{c}"), i64::from(ch == '#'));
        }
    }
    features
}

fn glyphs() -> (Vec<FeatureVector<String>>, Vec<String>) {
    let data = vec![
        (glyph([".#.", ".#.", ".#."]), "one"),
        (glyph(["##.", ".#.", ".#."]), "one"),
        (glyph([".#.", ".#.", "###"]), "one"),
        (glyph(["###", "#.#", "###"]), "zero"),
        (glyph([".#.", "#.#", ".#."]), "zero"),
        (glyph(["###", "#.#", "##."]), "zero"),
        (glyph(["###", "...", "###"]), "equals"),
        (glyph(["##.", "...", "###"]), "equals"),
    ];
    data.into_iter()
        .map(|(f, label)| (f, label.to_string()))
        .unzip()
}

fn labels() -> Vec<String> {
    ["zero", "one", "equals"].map(String::from).to_vec()
}

#[test_log::test]
fn converges_on_separable_glyphs() {
    let (data, truth) = glyphs();
    let mut classifier = PerceptronClassifier::new(labels(), 20).unwrap();
    let report = classifier.train(&data, &truth, &data, &truth).unwrap();

    assert_eq!(report.final_mistakes(), Some(0));
    assert_eq!(report.iterations[0].mistakes, 3);
    assert_eq!(classifier.count_correct(&data, &truth).unwrap(), 8);
    assert_eq!(classifier.classify(&data), truth);
}

#[test]
fn identical_training_gives_identical_artifacts() {
    let (data, truth) = glyphs();
    let sets: Vec<_> = (0..5)
        .map(|_| {
            let mut classifier = PerceptronClassifier::new(labels(), 4).unwrap();
            run_training(&mut classifier, &data, &truth, &data, &truth)
                .unwrap()
                .artifacts
        })
        .collect();
    assert!(sets.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn training_artifacts_carry_report_and_weights() {
    let (data, truth) = glyphs();
    let mut classifier = PerceptronClassifier::new(labels(), 4).unwrap();
    let run = run_training(&mut classifier, &data, &truth, &data, &truth).unwrap();

    let report = run.artifacts.json(TRAINING_REPORT).unwrap();
    assert_eq!(report["iterations"].as_array().unwrap().len(), 4);
    let weights = run.artifacts.json(WEIGHTS_REPORT).unwrap();
    let names: Vec<&str> = weights["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["label"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["zero", "one", "equals"]);
}

#[test]
fn second_training_call_continues_from_learned_weights() {
    let (data, truth) = glyphs();
    let mut classifier = PerceptronClassifier::new(labels(), 20).unwrap();
    classifier.train(&data, &truth, &data, &truth).unwrap();

    let again = classifier.train(&data, &truth, &data, &truth).unwrap();
    assert!(again.iterations.iter().all(|it| it.mistakes == 0));
}
