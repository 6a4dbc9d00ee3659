use bridge_core::args::convert;
use bridge_core::prompt::NoPrompt;
use bridge_core::{fill_missing, resolve, resolve_interactive, resolve_lenient, ArgSpec, ArgumentSchema, BridgeError, PromptRequest};
use proptest::prelude::*;
use serde_json::{json, Value};

fn optional_schema(defaults: &[i64]) -> ArgumentSchema {
    ArgumentSchema::new(defaults.iter()
                                .enumerate()
                                .map(|(i, d)| ArgSpec::optional(format!("f{i}"), *d).with_convert(convert::integer))
                                .collect()).unwrap()
}

#[test]
fn report_scenario_defaults_count() {
    let schema = ArgumentSchema::new(vec![ArgSpec::required("file"),
                                          ArgSpec::optional("count", 10).with_convert(convert::integer)]).unwrap();
    let r = resolve(&schema, &["report.txt"]).unwrap();
    let file = r.get("file").unwrap();
    assert_eq!((&file.value, file.was_defaulted), (&json!("report.txt"), false));
    let count = r.get("count").unwrap();
    assert_eq!((&count.value, count.was_defaulted), (&json!(10), true));
}

#[test]
fn cancelled_prompt_reports_missing_x() {
    let schema = ArgumentSchema::new(vec![ArgSpec::required("x")]).unwrap();
    let partial = resolve_lenient::<&str>(&schema, &[]).unwrap();
    let err = fill_missing(partial, &schema, &mut |_: &PromptRequest| None).unwrap_err();
    assert_eq!(err, BridgeError::MissingRequiredArgument(vec!["x".into()]));
}

#[test]
fn prompt_receives_text_and_default() {
    let schema = ArgumentSchema::new(vec![ArgSpec::required("host").with_prompt("Host name"),
                                          ArgSpec::required("port").with_default(8080).with_convert(convert::integer)]).unwrap();
    let mut seen = Vec::new();
    let r = resolve_interactive::<&str, _>(&schema,
                                           &[],
                                           &mut |req: &PromptRequest| {
                                               seen.push(req.clone());
                                               Some(json!("localhost"))
                                           }).unwrap();
    // `port` tiene default: no queda pendiente y no se pregunta.
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].prompt_text, "Host name");
    assert_eq!(seen[0].default_value, None);
    assert!(r.get("host").unwrap().was_prompted);
    assert_eq!(r.get_i64("port"), Some(8080));
}

proptest! {
    #[test]
    fn fully_supplied_args_are_never_defaulted(defaults in prop::collection::vec(any::<i64>(), 0..8),
                                               supplied in prop::collection::vec(any::<i64>(), 8..12)) {
        let schema = optional_schema(&defaults);
        let raw: Vec<String> = supplied.iter().map(|v| v.to_string()).collect();
        let r = resolve(&schema, &raw).unwrap();
        prop_assert!(r.iter().all(|(_, v)| !v.was_defaulted));
        prop_assert_eq!(r.extra().len(), raw.len() - defaults.len());
    }

    #[test]
    fn empty_args_yield_all_defaults(defaults in prop::collection::vec(any::<i64>(), 0..8)) {
        let schema = optional_schema(&defaults);
        let r = resolve::<&str>(&schema, &[]).unwrap();
        prop_assert_eq!(r.len(), defaults.len());
        for (i, d) in defaults.iter().enumerate() {
            let v = r.get(&format!("f{i}")).unwrap();
            prop_assert!(v.was_defaulted);
            prop_assert_eq!(&v.value, &json!(*d));
        }
    }

    #[test]
    fn fill_missing_with_default_stub_is_idempotent(defaults in prop::collection::vec(any::<i64>(), 0..6),
                                                    supplied in 0usize..6) {
        let schema = optional_schema(&defaults);
        let raw: Vec<String> = defaults.iter().take(supplied).map(|d| d.to_string()).collect();
        let mut stub = |req: &PromptRequest| req.default_value.clone();
        let once = fill_missing(resolve_lenient(&schema, &raw).unwrap(), &schema, &mut stub).unwrap();
        let twice = fill_missing(once.clone(), &schema, &mut stub).unwrap();
        prop_assert_eq!(&once, &twice);
        let values: Vec<Value> = once.iter().map(|(_, v)| v.value.clone()).collect();
        let expected: Vec<Value> = defaults.iter().map(|d| json!(*d)).collect();
        prop_assert_eq!(values, expected);
        prop_assert_eq!(once.to_json(), resolve(&schema, &raw).unwrap().to_json());
    }

    #[test]
    fn non_interactive_fill_lists_every_required_field(n in 1usize..6) {
        let schema = ArgumentSchema::new((0..n).map(|i| ArgSpec::required(format!("r{i}"))).collect()).unwrap();
        let err = resolve_interactive::<&str, _>(&schema, &[], &mut NoPrompt).unwrap_err();
        prop_assert_eq!(err.missing_fields().unwrap().len(), n);
    }
}
