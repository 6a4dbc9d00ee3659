use std::fs;

use bridge_core::prompt::NoPrompt;
use bridge_core::{BridgeError, Environment, PromptRequest};
use hostbridge::commands;
use hostbridge::errors::AppError;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn inspect_respects_depth_argument() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.json");
    fs::write(&file, r#"{"a":{"b":{"c":1}},"n":2}"#).unwrap();

    let (mut env, lines) = Environment::capture();
    let path = file.display().to_string();
    commands::run("inspect", &strings(&[&path, "1"]), &mut env, &mut NoPrompt).unwrap();
    let out: Value = serde_json::from_str(&lines.borrow()[0]).unwrap();
    assert_eq!(out, json!({"a": "<max-depth>", "n": 2}));
}

#[test]
fn missing_file_is_prompted_for() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("list.json");
    fs::write(&file, "[1, 2]").unwrap();
    let path = file.display().to_string();

    let (mut env, lines) = Environment::capture();
    let mut asked = Vec::new();
    let mut prompt = |req: &PromptRequest| {
        asked.push(req.field_name.clone());
        Some(Value::String(path.clone()))
    };
    commands::run("inspect", &[], &mut env, &mut prompt).unwrap();
    assert_eq!(asked, vec!["file".to_string()]);
    assert_eq!(lines.borrow()[0], "[1,2]");
}

#[test]
fn non_interactive_missing_args_are_reported_together() {
    let (mut env, _lines) = Environment::capture();
    let err = commands::run("tree", &[], &mut env, &mut NoPrompt).unwrap_err();
    assert!(matches!(err, AppError::Bridge(BridgeError::MissingRequiredArgument(ref f)) if f == &vec!["dir".to_string()]));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(commands::usage("tree", &env).unwrap(), "Uso: hostbridge tree <dir> [depth=2]");
}

#[test]
fn tree_prints_children_with_circular_parents() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();

    let (mut env, lines) = Environment::capture();
    let root = dir.path().display().to_string();
    commands::run("tree", &strings(&[&root, "1"]), &mut env, &mut NoPrompt).unwrap();
    let out: Value = serde_json::from_str(&lines.borrow()[0]).unwrap();
    assert_eq!(out["expanded"], json!(true));
    assert_eq!(out["children"][0]["label"], json!("a.txt"));
    assert_eq!(out["children"][0]["parent"], json!("<circular>"));
    assert_eq!(out["children"][0]["payload"]["kind"], json!("EntryKind.FILE"));
}

#[test]
fn env_filters_by_prefix() {
    std::env::set_var("HOSTBRIDGE_TEST_ONLY_VAR", "42");
    let (mut env, lines) = Environment::capture();
    commands::run("env", &strings(&["HOSTBRIDGE_TEST_ONLY_"]), &mut env, &mut NoPrompt).unwrap();
    let out: Value = serde_json::from_str(&lines.borrow()[0]).unwrap();
    assert_eq!(out, json!({"HOSTBRIDGE_TEST_ONLY_VAR": "42"}));
}

#[test]
fn bad_input_maps_to_exit_codes() {
    let (mut env, _lines) = Environment::capture();
    let err = commands::run("inspect", &strings(&["/definitely/not/here.json"]), &mut env, &mut NoPrompt).unwrap_err();
    assert_eq!(err.exit_code(), 3);
    let err = commands::run("inspect", &strings(&["x.json", "-1"]), &mut env, &mut NoPrompt).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    let err = commands::run("launch", &[], &mut env, &mut NoPrompt).unwrap_err();
    assert!(matches!(err, AppError::Usage(_)));
}
