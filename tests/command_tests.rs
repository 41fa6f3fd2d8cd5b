use hearth::commands::{
    execute_flatten, execute_summarize, execute_trips, resolve_policy, validate_flatten_args,
    validate_summarize_args, validate_summary_file, FlattenArgs, SummarizeArgs, TripsArgs,
};
use hearth::output::{read_locations, read_summary};
use hearth::utils::ValidationPolicy;
use rust_decimal::Decimal;
use serde_json::json;
use std::path::{Path, PathBuf};

fn write_input(dir: &Path, name: &str, value: serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();
    path
}

#[test]
fn test_validate_flatten_args_valid() {
    assert!(validate_flatten_args(&FlattenArgs::default()).is_ok());
}

#[test]
fn test_validate_flatten_args_nothing_to_do() {
    let args = FlattenArgs {
        output: None,
        print_tree: false,
        ..Default::default()
    };
    assert!(validate_flatten_args(&args).is_err());
}

#[test]
fn test_validate_flatten_args_empty_input() {
    let args = FlattenArgs {
        input: PathBuf::new(),
        ..Default::default()
    };
    assert!(validate_flatten_args(&args).is_err());
}

#[test]
fn test_validate_summarize_args_top_categories() {
    assert!(validate_summarize_args(&SummarizeArgs::default()).is_ok());

    let zero = SummarizeArgs {
        top_categories: 0,
        ..Default::default()
    };
    assert!(validate_summarize_args(&zero).is_err());

    let too_large = SummarizeArgs {
        top_categories: 2000,
        ..Default::default()
    };
    assert!(validate_summarize_args(&too_large).is_err());
}

#[test]
fn test_resolve_policy() {
    assert_eq!(resolve_policy(None, false).unwrap(), ValidationPolicy::default());
    assert_eq!(resolve_policy(None, true).unwrap(), ValidationPolicy::strict());

    let temp_dir = tempfile::tempdir().unwrap();
    let config = temp_dir.path().join("policy.toml");
    std::fs::write(&config, "reject_invalid_amounts = true\n").unwrap();

    let policy = resolve_policy(Some(config.as_path()), false).unwrap();
    assert!(policy.reject_invalid_amounts);
    assert!(!policy.reject_orphans);

    assert!(resolve_policy(Some(temp_dir.path().join("absent.toml").as_path()), false).is_err());
}

#[test]
fn test_execute_flatten_writes_document() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(
        temp_dir.path(),
        "locations.json",
        json!([
            { "id": 1, "name": "Garage" },
            { "id": 2, "name": "Shelf", "parent_id": 1 },
            { "id": 3, "name": "Box", "parent_id": 2 },
            { "id": 4, "name": "Attic" },
            { "id": 5, "name": "Lost", "parent_id": 99 }
        ]),
    );
    let output = temp_dir.path().join("out/locations.json");

    execute_flatten(FlattenArgs {
        input,
        output: Some(output.clone()),
        ..Default::default()
    })
    .unwrap();

    let document = read_locations(&output).unwrap();
    let names: Vec<&str> = document
        .locations
        .iter()
        .map(|l| l.original_name.as_str())
        .collect();
    assert_eq!(names, vec!["Attic", "Garage", "Shelf", "Box"]);
}

#[test]
fn test_execute_flatten_strict_rejects_orphan() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(
        temp_dir.path(),
        "locations.json",
        json!([{ "id": 5, "name": "Lost", "parent_id": 99 }]),
    );

    let result = execute_flatten(FlattenArgs {
        input,
        output: Some(temp_dir.path().join("out.json")),
        policy: ValidationPolicy::strict(),
        print_tree: false,
    });

    assert!(result.is_err());
}

#[test]
fn test_execute_summarize_and_validate() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(
        temp_dir.path(),
        "report.json",
        json!({
            "trips": [{
                "name": "Madrid",
                "expenses": [
                    { "amount": 10, "is_reimbursable": true, "category": { "name": "Taxi" } },
                    { "amount": "20", "is_reimbursable": false, "category": null }
                ]
            }]
        }),
    );
    let output = temp_dir.path().join("summary.json");

    execute_summarize(SummarizeArgs {
        input,
        output: Some(output.clone()),
        print_summary: true,
        ..Default::default()
    })
    .unwrap();

    let document = read_summary(&output).unwrap();
    assert_eq!(document.report.total_propio, Decimal::from(10));
    assert_eq!(document.report.total_empresa, Decimal::from(20));
    assert_eq!(document.report.ordered_keys, vec!["Sin Categoría", "Taxi"]);

    assert!(validate_summary_file(output).is_ok());
}

#[test]
fn test_execute_summarize_cents_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(
        temp_dir.path(),
        "report.json",
        json!([{
            "name": "Madrid",
            "expenses": [
                { "amount": "0.10", "is_reimbursable": true, "category": "Café" },
                { "amount": "0,20", "is_reimbursable": true, "category": "Café" }
            ]
        }]),
    );
    let output = temp_dir.path().join("summary.json");

    execute_summarize(SummarizeArgs {
        input,
        output: Some(output.clone()),
        policy: ValidationPolicy::strict(),
        ..Default::default()
    })
    .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(raw["report"]["totalPropio"], 0.3);

    let document = read_summary(&output).unwrap();
    assert_eq!(document.report.total_propio, "0.3".parse::<Decimal>().unwrap());
    assert!(validate_summary_file(output).is_ok());
}

#[test]
fn test_execute_summarize_missing_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    let result = execute_summarize(SummarizeArgs {
        input: temp_dir.path().join("absent.json"),
        output: Some(temp_dir.path().join("summary.json")),
        ..Default::default()
    });

    assert!(result.is_err());
}

#[test]
fn test_execute_trips() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(
        temp_dir.path(),
        "report.json",
        json!([{ "name": "Madrid", "dates": "[2024-03-01,2024-03-04)" }]),
    );

    let result = execute_trips(TripsArgs {
        input,
        today: chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        policy: ValidationPolicy::default(),
    });

    assert!(result.is_ok());
}
