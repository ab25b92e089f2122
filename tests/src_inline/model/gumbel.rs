use super::*;
use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use crate::config::ModelConfig;

fn doc(value: serde_json::Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => panic!("not an object"),
    }
}

fn recorder(model: &mut GumbelModel) -> Rc<RefCell<Vec<DensityCurve>>> {
    let seen: Rc<RefCell<Vec<DensityCurve>>> = Rc::default();
    let sink = Rc::clone(&seen);
    model.subscribe(move |curve: &DensityCurve| sink.borrow_mut().push(curve.clone()));
    seen
}

#[test]
fn test_new_model_is_empty_and_invalid() {
    for mode in [InputMode::Parameters, InputMode::Moments, InputMode::Dataset] {
        let model = GumbelModel::new(mode);
        assert_eq!(model.mode(), mode);
        assert!(matches!(
            model.validate(),
            Err(ModelError::MissingField { mode: m }) if m == mode
        ));
    }
}

#[test]
fn test_abbreviated_name() {
    assert_eq!(GumbelModel::new(InputMode::Moments).abbreviated_name(), "Gumbel");
}

#[test]
fn test_missing_field_message() {
    let err = GumbelModel::new(InputMode::Parameters).validate().unwrap_err();
    assert_eq!(err.to_string(), "GumbelDistribution - data has not been set");
}

#[test]
fn test_set_from_parameters_derives_moments() {
    let mut model = GumbelModel::new(InputMode::Moments);
    model.set_from_parameters(1.0, 0.0);
    assert_eq!(model.mode(), InputMode::Parameters);
    let p = model.parameters().unwrap();
    assert!((p.mean - 0.577216).abs() < 1e-9);
    assert!((p.std_dev - 1.28255).abs() < 1e-5);
    assert!(model.validate().is_ok());
}

#[test]
fn test_set_from_moments_derives_parameters() {
    let mut model = GumbelModel::new(InputMode::Parameters);
    model.set_from_moments(0.0, 1.0);
    assert_eq!(model.mode(), InputMode::Moments);
    let p = model.parameters().unwrap();
    assert!((p.alpha - 1.28255).abs() < 1e-5);
    assert!((p.beta + 0.45006).abs() < 1e-4);
}

#[test]
fn test_observers_receive_curves() {
    let mut model = GumbelModel::new(InputMode::Parameters);
    let seen = recorder(&mut model);
    let calls = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&calls);
    model.subscribe(move |_: &DensityCurve| *counter.borrow_mut() += 1);

    model.set_from_parameters(2.0, 1.0);
    model.set_from_moments(5.0, 0.5);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|c| c.len() == 300));
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn test_non_positive_std_dev_leaves_plot_alone() {
    let mut model = GumbelModel::new(InputMode::Moments);
    let seen = recorder(&mut model);
    model.set_from_moments(1.0, 0.0);
    model.set_from_moments(1.0, -3.0);
    assert!(seen.borrow().is_empty());
    assert!(model.compute_density_samples().is_empty());
    assert!(!model.refresh_plot());
}

#[test]
fn test_zero_alpha_is_permissive() {
    let mut model = GumbelModel::new(InputMode::Parameters);
    model.set_from_parameters(0.0, 1.0);
    assert!(model.validate().is_ok());
    let p = model.parameters().unwrap();
    assert!(!p.mean.is_finite());
    assert_eq!(model.compute_density_samples().len(), 300);
}

#[test]
fn test_strict_validation_rejects_degenerate_scale() {
    let mut model = GumbelModel::with_config(InputMode::Parameters, ModelConfig::strict_v1());
    model.set_from_parameters(-1.0, 0.0);
    assert!(matches!(
        model.validate(),
        Err(ModelError::Degenerate { what: "alpha", .. })
    ));
    assert!(model.export_state().is_err());

    model.set_from_moments(0.0, 0.0);
    assert!(matches!(model.validate(), Err(ModelError::Degenerate { .. })));

    model.set_from_moments(0.0, 2.0);
    assert!(model.validate().is_ok());
}

#[test]
fn test_field_edits() {
    let mut model = GumbelModel::new(InputMode::Parameters);
    let seen = recorder(&mut model);

    model.on_field_changed(Field::Alpha, "1.5").unwrap();
    assert!(model.validate().is_err());
    model.on_field_changed(Field::Beta, "abc").unwrap();
    assert!(model.validate().is_ok());
    assert_eq!(
        model.input(),
        &GumbelInput::Parameters {
            alpha: Some(1.5),
            beta: Some(0.0)
        }
    );

    model.on_field_changed(Field::Beta, "").unwrap();
    assert!(model.validate().is_err());
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn test_field_from_other_mode_is_rejected() {
    let mut model = GumbelModel::new(InputMode::Moments);
    let err = model.on_field_changed(Field::Alpha, "1").unwrap_err();
    assert!(matches!(
        err,
        ModelError::FieldNotInMode {
            field: Field::Alpha,
            mode: InputMode::Moments
        }
    ));
    assert_eq!(model.input(), &GumbelInput::empty(InputMode::Moments));
}

#[test]
fn test_dataset_path_edits() {
    let mut model = GumbelModel::new(InputMode::Dataset);
    let seen = recorder(&mut model);
    model.on_field_changed(Field::DataPath, "/data/flows.csv").unwrap();
    assert_eq!(model.data_path(), Some("/data/flows.csv"));
    assert!(model.validate().is_ok());
    assert!(model.parameters().is_none());
    assert!(model.compute_density_samples().is_empty());
    assert!(seen.borrow().is_empty());

    model.set_dataset("");
    assert!(model.validate().is_err());
}

#[test]
fn test_export_parameters() {
    let mut model = GumbelModel::new(InputMode::Parameters);
    model.set_from_parameters(0.5, -2.25);
    let out = model.export_state().unwrap();
    assert_eq!(
        Value::Object(out),
        json!({"inputType": "Parameters", "alphaparam": 0.5, "betaparam": -2.25})
    );
}

#[test]
fn test_export_moments_and_dataset() {
    let mut model = GumbelModel::new(InputMode::Moments);
    model.set_from_moments(10.0, 3.0);
    assert_eq!(
        Value::Object(model.export_state().unwrap()),
        json!({"inputType": "Moments", "mean": 10.0, "standardDev": 3.0})
    );

    model.set_dataset("C:/data/peaks.txt");
    assert_eq!(
        Value::Object(model.export_state().unwrap()),
        json!({"inputType": "Dataset", "dataDir": "C:/data/peaks.txt"})
    );
}

#[test]
fn test_export_with_empty_beta_leaves_document_untouched() {
    let mut model = GumbelModel::new(InputMode::Parameters);
    model.on_field_changed(Field::Alpha, "2").unwrap();

    let mut target = doc(json!({"name": "x1", "variableClass": "Uncertain"}));
    let before = target.clone();
    let err = model.write_state(&mut target).unwrap_err();
    assert!(matches!(err, ModelError::MissingField { .. }));
    assert_eq!(target, before);
}

#[test]
fn test_write_state_keeps_other_keys() {
    let mut model = GumbelModel::new(InputMode::Moments);
    model.set_from_moments(1.0, 2.0);
    let mut target = doc(json!({"name": "x1"}));
    model.write_state(&mut target).unwrap();
    assert_eq!(target["name"], json!("x1"));
    assert_eq!(target["inputType"], json!("Moments"));
    assert_eq!(target["standardDev"], json!(2.0));
}

#[test]
fn test_import_parameters() {
    let mut model = GumbelModel::new(InputMode::Moments);
    let seen = recorder(&mut model);
    model
        .import_state(&doc(json!({"inputType": "Parameters", "alphaparam": 2.0, "betaparam": 3.0})))
        .unwrap();
    assert_eq!(model.mode(), InputMode::Parameters);
    let p = model.parameters().unwrap();
    assert_eq!((p.alpha, p.beta), (2.0, 3.0));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_import_missing_std_dev_keeps_previous_state() {
    let mut model = GumbelModel::new(InputMode::Parameters);
    model.set_from_parameters(2.0, 1.0);
    let seen = recorder(&mut model);

    let err = model
        .import_state(&doc(json!({"inputType": "Moments", "mean": 4.0})))
        .unwrap_err();
    assert!(matches!(err, ModelError::Schema { field: "standardDev" }));
    assert_eq!(err.to_string(), "GumbelDistribution - no \"standardDev\" entry");

    assert_eq!(model.mode(), InputMode::Parameters);
    let p = model.parameters().unwrap();
    assert_eq!((p.alpha, p.beta), (2.0, 1.0));
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_import_names_each_missing_key() {
    let cases = [
        (json!({"inputType": "Parameters", "betaparam": 1.0}), "alphaparam"),
        (json!({"inputType": "Parameters", "alphaparam": 1.0}), "betaparam"),
        (json!({"inputType": "Moments", "standardDev": 1.0}), "mean"),
        (json!({"inputType": "Dataset"}), "dataDir"),
    ];
    for (input, expected) in cases {
        let mut model = GumbelModel::new(InputMode::Parameters);
        match model.import_state(&doc(input)) {
            Err(ModelError::Schema { field }) => assert_eq!(field, expected),
            other => panic!("expected schema error for {expected}, got {other:?}"),
        }
    }
}

#[test]
fn test_import_unknown_input_type_is_noop() {
    let mut model = GumbelModel::new(InputMode::Moments);
    model.set_from_moments(1.0, 1.0);
    let seen = recorder(&mut model);
    let before = model.input().clone();

    model
        .import_state(&doc(json!({"inputType": "Quantiles", "mean": 9.0})))
        .unwrap();
    model.import_state(&doc(json!({"mean": 9.0}))).unwrap();

    assert_eq!(model.input(), &before);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_import_reads_non_numbers_as_zero() {
    let mut model = GumbelModel::new(InputMode::Moments);
    model
        .import_state(&doc(json!({"inputType": "Moments", "mean": "12", "standardDev": 2.0})))
        .unwrap();
    assert_eq!(model.parameters().unwrap().mean, 0.0);
}

#[test]
fn test_import_dataset() {
    let mut model = GumbelModel::new(InputMode::Parameters);
    model
        .import_state(&doc(json!({"inputType": "Dataset", "dataDir": "/tmp/samples.txt"})))
        .unwrap();
    assert_eq!(model.mode(), InputMode::Dataset);
    assert_eq!(model.data_path(), Some("/tmp/samples.txt"));
}

#[test]
fn test_export_import_preserves_state() {
    let mut source = GumbelModel::new(InputMode::Moments);
    source.set_from_moments(-3.5, 0.125);
    let exported = source.export_state().unwrap();

    let mut target = GumbelModel::new(InputMode::Dataset);
    target.import_state(&exported).unwrap();
    assert_eq!(target.input(), source.input());
    assert_eq!(
        target.compute_density_samples(),
        source.compute_density_samples()
    );
}

#[test]
fn test_field_text_after_import() {
    let mut model = GumbelModel::new(InputMode::Parameters);
    model
        .import_state(&doc(
            json!({"inputType": "Parameters", "alphaparam": 1.23456789, "betaparam": 1500000.0}),
        ))
        .unwrap();
    assert_eq!(model.field_text(Field::Alpha).as_deref(), Some("1.23457"));
    assert_eq!(model.field_text(Field::Beta).as_deref(), Some("1.5e+06"));
    assert_eq!(model.field_text(Field::Mean), None);
}

#[test]
fn test_import_keeps_full_precision_behind_rounded_text() {
    let mut model = GumbelModel::new(InputMode::Parameters);
    model
        .import_state(&doc(
            json!({"inputType": "Parameters", "alphaparam": 1.23456789, "betaparam": 0.5}),
        ))
        .unwrap();
    assert_eq!(model.field_text(Field::Alpha).as_deref(), Some("1.23457"));
    assert_eq!(model.parameters().unwrap().alpha, 1.23456789);
    let out = model.export_state().unwrap();
    assert_eq!(out["alphaparam"], json!(1.23456789));
}
