//! Focused unit tests covering command output and configuration resolution.

use super::helpers::{DataDir, TROY_ONLY, run_captured};
use super::*;
use rstest::rstest;
use serde_json::{Value, json};

fn parse_json(output: &str) -> Value {
    serde_json::from_str(output).expect("command prints JSON")
}

#[rstest]
fn tags_command_prints_sorted_index() {
    let output = run_captured(["explorer", "tags"]).expect("bundled dataset loads");
    let tags: Vec<&str> = output.lines().collect();
    assert_eq!(tags, ["Albany", "Arts", "History", "Museum", "Park", "Troy"]);
}

#[rstest]
#[case::no_filters(&[], 6)]
#[case::single_tag(&["Park"], 2)]
#[case::conjunction(&["Park", "Troy"], 1)]
#[case::disjoint(&["Museum", "Troy"], 0)]
fn landmarks_command_applies_every_tag(#[case] tags: &[&str], #[case] expected: usize) {
    let mut argv = vec!["explorer".to_owned(), "landmarks".to_owned()];
    for tag in tags {
        argv.extend([format!("--{ARG_TAG}"), (*tag).to_owned()]);
    }
    let output = run_captured(argv).expect("landmarks command succeeds");
    let landmarks = parse_json(&output);
    let entries = landmarks.as_array().expect("array of landmarks");
    assert_eq!(entries.len(), expected);
    for entry in entries {
        let carried = entry["tags"].as_array().expect("tags array");
        for tag in tags {
            assert!(carried.contains(&json!(tag)), "{entry} lacks {tag}");
        }
    }
}

#[rstest]
fn repeating_a_tag_flag_toggles_it_off() {
    let output = run_captured(["explorer", "landmarks", "--tag", "Park", "--tag", "Park"])
        .expect("landmarks command succeeds");
    assert_eq!(parse_json(&output).as_array().map(Vec::len), Some(6));
}

#[rstest]
fn browse_reports_view_for_visible_selection() {
    let output = run_captured([
        "explorer", "browse", "--tag", "Troy", "--select", "troy-2",
    ])
    .expect("browse succeeds");
    let view = parse_json(&output);
    assert_eq!(view["active_filter_count"], json!(1));
    assert_eq!(view["clear_all_enabled"], json!(true));
    assert_eq!(view["markers"].as_array().map(Vec::len), Some(3));
    assert_eq!(view["detail"]["id"], json!("troy-2"));
    assert_eq!(view["detail"]["name"], json!("Prospect Park"));
    assert!(view["detail"].get("website").is_none());
    let active: Vec<&Value> = view["chips"]
        .as_array()
        .expect("chips array")
        .iter()
        .filter(|chip| chip["active"] == json!(true))
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["tag"], json!("Troy"));
}

#[rstest]
fn browse_without_selection_has_no_detail_panel() {
    let output = run_captured(["explorer", "browse"]).expect("browse succeeds");
    let view = parse_json(&output);
    assert_eq!(view["detail"], Value::Null);
    assert_eq!(view["clear_all_enabled"], json!(false));
    assert!(view["bounds"].is_object());
}

#[rstest]
fn browse_with_no_visible_markers_has_no_bounds() {
    let output = run_captured(["explorer", "browse", "--tag", "Museum", "--tag", "Troy"])
        .expect("browse succeeds");
    let view = parse_json(&output);
    assert_eq!(view["markers"].as_array().map(Vec::len), Some(0));
    assert_eq!(view["bounds"], Value::Null);
}

#[rstest]
fn browse_rejects_hidden_selection() {
    let err = run_captured([
        "explorer", "browse", "--tag", "Museum", "--select", "troy-2",
    ])
    .expect_err("hidden marker cannot be clicked");
    match err {
        CliError::HiddenLandmark { id } => assert_eq!(id, "troy-2"),
        other => panic!("expected HiddenLandmark, found {other:?}"),
    }
}

#[rstest]
fn browse_rejects_unknown_selection() {
    let err = run_captured(["explorer", "browse", "--select", "boston-1"])
        .expect_err("unknown id");
    match err {
        CliError::UnknownLandmark { id } => assert_eq!(id, "boston-1"),
        other => panic!("expected UnknownLandmark, found {other:?}"),
    }
}

#[rstest]
fn data_dir_replaces_bundled_dataset() {
    let dir = DataDir::new();
    dir.write("troy.json", TROY_ONLY);
    let output = run_captured([
        "explorer",
        "tags",
        "--data-dir",
        dir.root().as_str(),
    ])
    .expect("directory dataset loads");
    assert_eq!(output, "Park\nTroy\n");
}

#[rstest]
fn validate_reports_missing_data_dir() {
    let dir = DataDir::new();
    let missing = dir.root().join("absent");
    let err = DatasetSource::Directory(missing.clone())
        .validate()
        .expect_err("missing directory");
    match err {
        CliError::MissingDataDir { field, path } => {
            assert_eq!(field, ARG_DATA_DIR);
            assert_eq!(path, missing);
        }
        other => panic!("expected MissingDataDir, found {other:?}"),
    }
}

#[rstest]
fn validate_rejects_file_as_data_dir() {
    let dir = DataDir::new();
    let file = dir.write("troy.json", TROY_ONLY);
    let err = DatasetSource::Directory(file)
        .validate()
        .expect_err("file is not a directory");
    match err {
        CliError::DataDirNotDirectory { field, .. } => assert_eq!(field, ARG_DATA_DIR),
        other => panic!("expected DataDirNotDirectory, found {other:?}"),
    }
}

#[rstest]
fn empty_data_dir_surfaces_dataset_error() {
    let dir = DataDir::new();
    let err = run_captured(["explorer", "tags", "--data-dir", dir.root().as_str()])
        .expect_err("no city files");
    match err {
        CliError::Dataset(explorer_data::DatasetError::EmptyDir { .. }) => {}
        other => panic!("expected EmptyDir, found {other:?}"),
    }
}

#[rstest]
fn absent_data_dir_selects_bundled_dataset() {
    assert_eq!(DatasetSource::from_option(None), DatasetSource::Bundled);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "select": 42 }));

    let err = browse_config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;

    let dir = DataDir::new();
    let env_dir = dir.root().join("from-env");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "data_dir": dir.root().join("from-file").as_str(),
            "select": "albany-2",
        }),
        None,
    );
    composer.push_environment(json!({
        "data_dir": env_dir.as_str(),
    }));
    composer.push_cli(json!({
        "tag": ["Museum"],
    }));

    let config =
        browse_config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.dataset, DatasetSource::Directory(env_dir));
    assert_eq!(config.tags, ["Museum"]);
    assert_eq!(config.select.as_deref(), Some("albany-2"));
}
