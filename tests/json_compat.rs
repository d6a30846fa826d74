use isolit::{
    Error, ErrorKind, EvalOptions, Grammar, Value,
    error::SyntaxError,
    interpreter::parser::utils::is_reserved_word,
    parse_expression, parse_expression_with,
};
use proptest::prelude::*;

fn json_options() -> EvalOptions {
    EvalOptions { grammar: Grammar::Json,
                  ..EvalOptions::default() }
}

fn arb_json() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![Just(serde_json::Value::Null),
                           any::<bool>().prop_map(serde_json::Value::from),
                           any::<i32>().prop_map(serde_json::Value::from),
                           any::<f64>().prop_filter("finite", |f| f.is_finite())
                                       .prop_map(serde_json::Value::from),
                           ".*".prop_map(serde_json::Value::from),];

    leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![prop::collection::vec(inner.clone(), 0..6).prop_map(serde_json::Value::from),
                        prop::collection::vec(("[a-z0-9_]{0,6}|.{0,4}", inner), 0..6)
                            .prop_map(|entries| {
                                serde_json::Value::Object(entries.into_iter().collect())
                            }),]
        })
}

#[test]
fn json_documents() {
    let text = "{\r\n\t\"name\": \"isolit\",\n  \"tags\": [\"a\", \"b\\u0041\"],\n  \"n\": -2.5e3,\n  \
                \"nested\": {\"ok\": true, \"none\": null, \"zero\": -0}\n}";

    let value = parse_expression_with(text, &json_options()).unwrap();
    assert_eq!(value.to_string(),
               r#"{"name":"isolit","tags":["a","bA"],"n":-2500,"nested":{"ok":true,"none":null,"zero":0}}"#);
    assert_eq!(value, parse_expression(text).unwrap());

    assert_eq!(parse_expression_with("[]", &json_options()).unwrap(), Value::Array(vec![]));
    assert_eq!(parse_expression_with(" \"\" ", &json_options()).unwrap(), Value::from(""));
}

#[test]
fn relaxed_constructs_are_rejected_in_json_mode() {
    for src in ["{a: 1}", "'a'", "[1,]", "{\"a\": 1,}", "[1,,2]", "0x10", "0o7", ".5", "1.",
                "+1", "// c\n1", "/* c */ 1", "(1)", "x", r#""\x41""#, r#""\v""#, r#""\'""#,
                r#""\u{41}""#, "\"tab\there\"", "\u{A0}1", "1\u{2028}", "{[\"a\"]: 1}",
                "- 1", "-\n1", "[-\t2]"]
    {
        match parse_expression_with(src, &json_options()) {
            Err(Error::Syntax(SyntaxError::NotAllowedInJson { .. })) => {},
            other => panic!("Expected {src:?} to be rejected as non-JSON, got {other:?}"),
        }
    }
}

#[test]
fn json_mode_never_reports_reference_errors() {
    for src in ["undefined", "[NaN]", "{\"a\": b}", "a = 1", "[1](0)", "01"] {
        let err = parse_expression_with(src, &json_options()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax, "source: {src}");
    }
}

proptest! {
    #[test]
    fn agrees_with_serde_json(json in arb_json()) {
        let expected = Value::from(json.clone());

        let compact = serde_json::to_string(&json).unwrap();
        let value = parse_expression(&compact).unwrap();
        prop_assert_eq!(value.to_string(), expected.to_string());
        prop_assert_eq!(&value, &expected);
        prop_assert_eq!(&parse_expression_with(&compact, &json_options()).unwrap(), &expected);

        let pretty = serde_json::to_string_pretty(&json).unwrap();
        prop_assert_eq!(&parse_expression_with(&pretty, &json_options()).unwrap(), &expected);
    }

    #[test]
    fn display_output_evaluates_to_the_same_value(json in arb_json()) {
        let value = Value::from(json);
        let rendered = value.to_string();
        prop_assert_eq!(parse_expression_with(&rendered, &json_options()).unwrap(), value);
    }

    #[test]
    fn any_name_is_a_reference_error(name in "[a-zA-Z_$][a-zA-Z0-9_$]{0,10}") {
        prop_assume!(!is_reserved_word(&name));
        prop_assume!(!["true", "false", "null", "eval", "arguments"].contains(&name.as_str()));

        for src in [name.clone(), format!("[{name}]"), format!("{{k: {name}}}"), format!("{{{name}}}")] {
            let err = parse_expression(&src).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Reference);
        }
    }

    #[test]
    fn arbitrary_text_never_panics(src in ".{0,64}") {
        let _ = parse_expression(&src);
        let _ = parse_expression_with(&src, &json_options());
    }
}
