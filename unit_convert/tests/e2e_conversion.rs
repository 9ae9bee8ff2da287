//! End-to-end tests: definition text -> records -> graph -> conversions.

use pretty_assertions::assert_eq;
use unit_convert::app::{App, AppConfig, ConversionRequest, Outcome};
use unit_convert::{build_from_file, load_graph, GraphError, UnitGraph};
use unit_table::{parse_definitions, DefinitionFile, DefinitionLocator, LocatorConfig};

const SAMPLE: &str = include_str!("../data/convert.def");

fn sample_graph() -> UnitGraph {
    let records = parse_definitions(SAMPLE).unwrap();
    let (graph, report) = UnitGraph::from_records(&records).unwrap();
    assert!(report.duplicates.is_empty());
    graph
}

fn sample_app() -> App {
    let file = DefinitionFile {
        path: "data/convert.def".into(),
        records: parse_definitions(SAMPLE).unwrap(),
    };
    App::new(AppConfig::default(), build_from_file(file).unwrap())
}

fn request(value: f64, from: &str, to: &str) -> ConversionRequest {
    ConversionRequest {
        value,
        from: from.to_string(),
        to: to.to_string(),
    }
}

#[test]
fn test_mev_to_kelvin() {
    let graph = sample_graph();
    let kelvin = graph.convert(25.0, "meV", "K").unwrap();
    assert!((kelvin - 290.11).abs() < 0.01, "got {kelvin}");
}

#[test]
fn test_hartree_to_kelvin_through_electronvolt() {
    let graph = sample_graph();
    let conversion = graph.converter().trace(1.0, "Ha", "K").unwrap();
    assert!((conversion.value - 315775.0).abs() < 1.0, "got {}", conversion.value);
    assert_eq!(conversion.path.first().map(String::as_str), Some("Ha"));
    assert_eq!(conversion.path.last().map(String::as_str), Some("K"));
}

#[test]
fn test_photon_energy_to_wavelength() {
    let graph = sample_graph();

    let nm = graph.convert(2.0, "eV", "nm").unwrap();
    assert!((nm - 619.921).abs() < 1e-6);

    let angstrom = graph.convert(2.0, "eV", "A").unwrap();
    assert!((angstrom - 6199.21).abs() < 1e-5);

    let ev = graph.convert(angstrom, "A", "eV").unwrap();
    assert!((ev - 2.0).abs() < 1e-12);
}

#[test]
fn test_zero_energy_has_no_wavelength() {
    let graph = sample_graph();
    assert!(matches!(
        graph.convert(0.0, "eV", "nm"),
        Err(GraphError::DivisionByZero { .. })
    ));
}

#[test]
fn test_repeated_conversions_on_one_graph() {
    let graph = sample_graph();
    let converter = graph.converter();

    let first = converter.convert(25.0, "meV", "K").unwrap();
    for _ in 0..3 {
        let back = converter.convert(first, "K", "meV").unwrap();
        assert!((back - 25.0).abs() < 1e-9);
        assert_eq!(converter.convert(25.0, "meV", "K").unwrap(), first);
    }
}

#[test]
fn test_app_conversion_output() {
    let app = sample_app();
    let outcome = app.run(Some(&request(25.0, "meV", "K"))).unwrap();

    match &outcome {
        Outcome::Converted { result, path, .. } => {
            assert!((result - 290.11295).abs() < 1e-6);
            assert_eq!(path, &vec!["meV".to_string(), "eV".into(), "K".into()]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(app.render(&outcome, false).unwrap(), "25 meV = 290.11295 K");
}

#[test]
fn test_app_json_output() {
    let app = sample_app();
    let outcome = app.run(Some(&request(1.0, "Ha", "Ry"))).unwrap();
    let json: serde_json::Value = serde_json::from_str(&app.render(&outcome, true).unwrap()).unwrap();

    assert_eq!(json["kind"], "converted");
    assert_eq!(json["from"], "Ha");
    assert_eq!(json["result"], 2.0);
}

#[test]
fn test_app_listing_in_registration_order() {
    let app = sample_app();
    let outcome = app.run(None).unwrap();

    let Outcome::Listed { units, .. } = &outcome else {
        panic!("expected a listing");
    };
    let ids: Vec<&str> = units.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "Ha", "Ry", "eV", "meV", "K", "cm-1", "THz", "J", "kcal/mol", "kJ/mol", "nm", "A",
            "bohr", "m"
        ]
    );
    assert_eq!(units[0].long_name, "Hartree");

    let text = app.render(&outcome, false).unwrap();
    assert!(text.contains(" meV         millielectronvolt\n"));
}

#[test]
fn test_app_reports_unknown_unit() {
    let app = sample_app();
    let err = app.run(Some(&request(1.0, "nope", "K"))).unwrap_err();
    assert_eq!(
        err.downcast_ref::<GraphError>(),
        Some(&GraphError::UnknownUnit("nope".into()))
    );
}

#[test]
fn test_load_graph_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("convert.def");
    std::fs::write(&path, SAMPLE).unwrap();

    let loaded = load_graph(&DefinitionLocator::new(LocatorConfig::default()).with_path(&path)).unwrap();
    assert_eq!(loaded.path, path);
    assert_eq!(loaded.graph.len(), 14);
    assert_eq!(loaded.report.relations, 13);
}

#[test]
fn test_zero_factor_in_file_fails_load() {
    let file = DefinitionFile {
        path: "bad.def".into(),
        records: parse_definitions("node a alpha\nnode b beta\nedge a 0 b NOINVERT\n").unwrap(),
    };
    let err = build_from_file(file).unwrap_err();
    assert_eq!(err.to_string(), "conversion factor from a to b is zero");
}
