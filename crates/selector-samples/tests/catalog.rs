//! Runs every sample against the shipped catalog.

use selector_samples::{
    render, run_samples, Form, OutputMode, Sample, SampleOutcome, SampleSettings,
};

#[test]
fn every_sample_reports_once_in_order() {
    let reports = run_samples(Sample::all(), &SampleSettings::default());

    let names: Vec<&str> = reports.iter().map(|r| r.sample).collect();
    let expected: Vec<&str> = Sample::all().iter().map(|s| s.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn only_the_brown_lookup_comes_back_empty() {
    let reports = run_samples(Sample::all(), &SampleSettings::default());

    let empty: Vec<&str> = reports
        .iter()
        .filter(|r| r.outcome == SampleOutcome::Empty)
        .map(|r| r.sample)
        .collect();
    assert_eq!(empty, ["last-or-default-method"]);

    assert!(reports
        .iter()
        .all(|r| !matches!(r.outcome, SampleOutcome::Failed { .. })));
}

#[test]
fn forms_are_split_evenly() {
    let queries = Sample::all()
        .iter()
        .filter(|s| s.form() == Form::Query)
        .count();
    assert_eq!(queries * 2, Sample::all().len());
}

#[test]
fn missing_product_id_is_empty_not_an_error() {
    let settings = SampleSettings { product_id: 9999 };
    let reports = run_samples(&[Sample::SingleOrDefaultMethod], &settings);

    assert_eq!(reports[0].outcome, SampleOutcome::Empty);
}

#[test]
fn yaml_output_round_trips_through_serde_yaml() {
    let reports = run_samples(
        &[Sample::FirstQuery, Sample::LastMethod],
        &SampleSettings::default(),
    );
    let yaml = render(&reports, OutputMode::Yaml).unwrap();

    let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    let items = parsed.as_sequence().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["product"]["id"].as_i64(), Some(706));
    assert_eq!(items[1]["product"]["id"].as_i64(), Some(718));
}
