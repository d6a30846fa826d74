use isolit::{
    Error, ErrorKind, EvalOptions, Object, Value,
    error::{ReferenceError, SyntaxError},
    parse_expression, parse_expression_with,
};

fn assert_value(src: &str, expected: &str) {
    match parse_expression(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "source: {src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_syntax_error(src: &str) -> SyntaxError {
    match parse_expression(src) {
        Err(Error::Syntax(e)) => e,
        Err(e) => panic!("Expression {src:?} failed with the wrong kind: {e}"),
        Ok(v) => panic!("Expression {src:?} succeeded with {v} but was expected to fail"),
    }
}

fn assert_reference_error(src: &str) -> ReferenceError {
    match parse_expression(src) {
        Err(Error::Reference(e)) => e,
        Err(e) => panic!("Expression {src:?} failed with the wrong kind: {e}"),
        Ok(v) => panic!("Expression {src:?} succeeded with {v} but was expected to fail"),
    }
}

#[test]
fn object_with_nested_array() {
    let value = parse_expression(r#"{"a":1,"b":[1,2,3]}"#).unwrap();

    let mut expected = Object::new();
    expected.insert("a".to_string(), Value::from(1));
    expected.insert("b".to_string(),
                    Value::from(vec![Value::from(1), Value::from(2), Value::from(3)]));

    assert_eq!(value, Value::Object(expected));
}

#[test]
fn scalars() {
    assert_eq!(parse_expression("42").unwrap(), Value::Number(42.0));
    assert_eq!(parse_expression("true").unwrap(), Value::Bool(true));
    assert_eq!(parse_expression("false").unwrap(), Value::Bool(false));
    assert_eq!(parse_expression("null").unwrap(), Value::Null);
    assert_eq!(parse_expression(r#""hi""#).unwrap(), Value::from("hi"));
    assert_eq!(parse_expression("-0.5").unwrap(), Value::Number(-0.5));
}

#[test]
fn not_valid_js_is_a_syntax_error() {
    let err = assert_syntax_error("not valid js");
    assert!(matches!(err, SyntaxError::UnexpectedTrailingTokens { ref token, line: 1 } if token == "valid"));
}

#[test]
fn names_are_never_resolved() {
    for name in ["undefined", "NaN", "Infinity", "globalThis", "window", "process", "eval",
                 "Function", "x"]
    {
        let err = assert_reference_error(name);
        assert_eq!(err.name(), name);
    }
}

#[test]
fn names_inside_literals_are_never_resolved() {
    assert_reference_error("[1, 2, secret]");
    assert_reference_error("{a: {b: [token]}}");
    assert_reference_error("{password}");
    assert_reference_error("{[key]: 1}");
    assert_reference_error("-offset");
    assert_reference_error("(value)");
}

#[test]
fn first_reference_in_source_order_is_reported() {
    let err = assert_reference_error("[first, second]");
    assert_eq!(err.name(), "first");

    let err = assert_reference_error("{[k]: v}");
    assert_eq!(err.name(), "k");
}

#[test]
fn syntax_errors_win_over_reference_errors() {
    assert_syntax_error("[missing, ]]");
    assert_syntax_error("{a: unknown");
}

#[test]
fn calls_and_member_access_resolve_their_base_first() {
    let err = assert_reference_error("Function('return this')()");
    assert_eq!(err.name(), "Function");

    let err = assert_reference_error("globalThis.process.exit(1)");
    assert_eq!(err.name(), "globalThis");

    let err = assert_reference_error("require('fs')");
    assert_eq!(err.name(), "require");

    let err = assert_reference_error("'a'(b)");
    assert_eq!(err.name(), "b");
}

#[test]
fn member_access_on_literals_is_rejected() {
    for src in ["[].constructor", "''.constructor.constructor('x')()", "({}).__proto__",
                "[1, 2][0]", "'abc'(1)"]
    {
        let err = assert_syntax_error(src);
        assert!(matches!(err, SyntaxError::UnsupportedConstruct { .. }), "source: {src}");
    }
}

#[test]
fn assignment_never_creates_state() {
    let err = assert_reference_error("leaked = 1");
    assert!(matches!(err, ReferenceError::UndeclaredAssignment { ref name, .. } if name == "leaked"));

    let err = assert_reference_error("a = b");
    assert_eq!(err.name(), "b");

    assert_reference_error("{x: y = 2}");
    assert_reference_error("window.name = 'x'");
    assert_syntax_error("[].x = 1");
}

#[test]
fn strict_mode_assignment_rules() {
    assert!(matches!(assert_syntax_error("eval = 1"),
                     SyntaxError::StrictModeAssignment { .. }));
    assert!(matches!(assert_syntax_error("arguments = 1"),
                     SyntaxError::StrictModeAssignment { .. }));
    assert!(matches!(assert_syntax_error("1 = 1"),
                     SyntaxError::InvalidAssignmentTarget { .. }));
    assert!(matches!(assert_syntax_error("-a = 1"),
                     SyntaxError::InvalidAssignmentTarget { .. }));
}

#[test]
fn legacy_octal_is_rejected() {
    for src in ["012", "08", "00", "[1, 007]", "{a: 09.5}", "-01"] {
        let err = assert_syntax_error(src);
        assert!(matches!(err, SyntaxError::LegacyOctal { line: 1 }), "source: {src}");
    }
    assert!(matches!(assert_syntax_error(r#""\101""#), SyntaxError::LegacyOctal { .. }));
    assert!(matches!(assert_syntax_error(r#""\08""#), SyntaxError::LegacyOctal { .. }));
    assert_value(r#""\0""#, r#""\u0000""#);
}

#[test]
fn reserved_words_are_not_expressions() {
    for word in ["this", "new", "function", "typeof", "let", "yield", "var"] {
        let err = assert_syntax_error(word);
        assert!(matches!(err, SyntaxError::ReservedWord { .. }), "word: {word}");
    }
    assert!(matches!(assert_syntax_error("{this}"), SyntaxError::ReservedWord { .. }));
    assert_value("{new: 1, this: 2, function: 3, true: 4, null: 5}",
                 r#"{"new":1,"this":2,"function":3,"true":4,"null":5}"#);
}

#[test]
fn statements_are_rejected() {
    assert_syntax_error("1; 2");
    assert_syntax_error("var x = 1");
    assert_syntax_error("x => x");
    assert_syntax_error("1 + 2");
    assert_syntax_error("`template`");
    assert_syntax_error("{a() {}}");
    assert_syntax_error("[...items]");
}

#[test]
fn empty_input_is_a_syntax_error() {
    assert!(matches!(assert_syntax_error(""), SyntaxError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_syntax_error("  // nothing\n /* here */ "),
                     SyntaxError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_syntax_error("["), SyntaxError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_syntax_error("{a:"), SyntaxError::UnexpectedEndOfInput { .. }));
}

#[test]
fn relaxed_literal_syntax() {
    assert_value("{a: 1, 'b': 2, \"c\": 3,}", r#"{"a":1,"b":2,"c":3}"#);
    assert_value("[1, 2, 3,]", "[1,2,3]");
    assert_value("[1,,2]", "[1,null,2]");
    assert_value("[,]", "[null]");
    assert_value("[1,,]", "[1,null]");
    assert_value("{$id: 1, _x: 2, café: 3}", r#"{"$id":1,"_x":2,"café":3}"#);
    assert_value("((([1])))", "[1]");
}

#[test]
fn comments_and_whitespace() {
    assert_value("// leading\n{ /* inline */ a: 1 // trailing\n}", r#"{"a":1}"#);
    assert_value("\u{FEFF}\t[\u{A0}1\u{2028}]", "[1]");
    assert!(matches!(assert_syntax_error("[1 /* open"), SyntaxError::UnterminatedComment { .. }));
}

#[test]
fn numbers() {
    assert_value("[0x1F, 0o17, 0b101, .5, 5., 1e3, 2.5E-3, -0]",
                 "[31,15,5,0.5,5,1000,0.0025,0]");
    assert_value("[+1, -+1, - -1]", "[1,-1,1]");
    assert_value("1e400", "null");
    assert_value("123456789012345678901234567890", "1.2345678901234568e+29");
    assert_eq!(parse_expression("-1e400").unwrap(), Value::Number(f64::NEG_INFINITY));
}

#[test]
fn signs_apply_to_numbers_only() {
    for src in ["-'1'", "+true", "-null", "-[1]", "-{}", "-('a')"] {
        let err = assert_syntax_error(src);
        assert!(matches!(err, SyntaxError::SignOnNonNumber { .. }), "source: {src}");
    }
}

#[test]
fn strings_and_escapes() {
    assert_value(r#"'single "quoted"'"#, r#""single \"quoted\"""#);
    assert_value(r#""\b\f\n\r\t\v\/\\""#, r#""\b\f\n\r\t\u000b/\\""#);
    assert_value(r#""\x41B\u{43}\q""#, r#""ABCq""#);
    assert_value(r#""\uD83D\uDE00""#, "\"\u{1F600}\"");
    assert_value(r#""\uD83D""#, "\"\u{FFFD}\"");
    assert_value("'line \\\ncontinued'", r#""line continued""#);
    assert!(matches!(assert_syntax_error(r#""\x4""#), SyntaxError::InvalidEscape { .. }));
    assert!(matches!(assert_syntax_error(r#""\u{110000}""#), SyntaxError::InvalidEscape { .. }));
    assert!(matches!(assert_syntax_error("'open"), SyntaxError::UnterminatedString { .. }));
    assert!(matches!(assert_syntax_error("'broken\nline'"), SyntaxError::UnterminatedString { .. }));
}

#[test]
fn object_keys() {
    assert_value("{1.50: 'a', 0x10: 'b', 1e21: 'c'}", r#"{"16":"b","1.5":"a","1e+21":"c"}"#);
    assert_value("{['x']: 1, [2]: 2, [[1, null, 'a']]: 3, [{}]: 4, [true]: 5}",
                 r#"{"2":2,"x":1,"1,,a":3,"[object Object]":4,"true":5}"#);
    assert_value("{b: 1, a: 2, 10: 3, 2: 4, '01': 5}", r#"{"2":4,"10":3,"b":1,"a":2,"01":5}"#);
}

#[test]
fn duplicate_keys_keep_first_position_and_last_value() {
    assert_value("{a: 1, b: 2, a: 3}", r#"{"a":3,"b":2}"#);
}

#[test]
fn errors_report_lines() {
    let err = parse_expression("{\n  a: 1,\n  b: nope\n}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Reference);
    assert_eq!(err.line(), 3);

    let err = parse_expression("[\n1,\n2\n3]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.line(), 4);

    let err = parse_expression("[\n1").unwrap_err();
    assert_eq!(err.to_string(), "SyntaxError on line 2: Unexpected end of input.");
}

#[test]
fn nesting_limit() {
    let options = EvalOptions { max_depth: 8,
                                ..EvalOptions::default() };

    assert!(parse_expression_with("[[[[1]]]]", &options).is_ok());

    let deep = format!("{}1{}", "[".repeat(20), "]".repeat(20));
    let err = parse_expression_with(&deep, &options).unwrap_err();
    assert!(matches!(err, Error::Syntax(SyntaxError::NestingTooDeep { limit: 8, .. })));

    let signs = format!("{}1", "-".repeat(20));
    assert!(parse_expression_with(&signs, &options).is_err());

    let very_deep = format!("{}1{}", "[".repeat(100_000), "]".repeat(100_000));
    assert!(parse_expression(&very_deep).is_err());

    let chain = format!("a{}", ".b".repeat(20));
    assert!(matches!(parse_expression_with(&chain, &options),
                     Err(Error::Syntax(SyntaxError::NestingTooDeep { limit: 8, .. }))));
    let chain = format!("a{}", ".b".repeat(6));
    assert!(matches!(parse_expression_with(&chain, &options), Err(Error::Reference(_))));

    for chain in [format!("a{}", ".b".repeat(100_000)),
                  format!("f{}", "()".repeat(100_000)),
                  format!("a{}", "[0]".repeat(100_000))]
    {
        let err = parse_expression(&chain).unwrap_err();
        assert!(matches!(err, Error::Syntax(SyntaxError::NestingTooDeep { limit: 128, .. })));
    }
}

#[test]
fn evaluations_are_independent() {
    let _ = parse_expression("leaked = 1");
    assert_reference_error("leaked");
}

#[test]
fn concurrent_evaluation() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    std::thread::spawn(move || {
                                        parse_expression(&format!("{{n: {i}, items: [{i}, {i}]}}"))
                                    })
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().unwrap().unwrap();
        assert_eq!(value.to_string(), format!(r#"{{"n":{i},"items":[{i},{i}]}}"#));
    }
}
