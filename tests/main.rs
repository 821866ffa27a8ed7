use optscan::prelude::*;
use optscan::{
    getopt, getopt_long, getopt_long_only, parse, version, ArgPolicy, Binder, DiagnosticKind,
    Environment, OptionForm, OptionParser, OptionSpec, OptionString, ParseRequest, Scope, Value,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn specs() -> Vec<OptionSpec> {
    vec![
        OptionSpec::short('a'),
        OptionSpec::short('b'),
        OptionSpec::short('x').required(),
        OptionSpec::long("verbose"),
        OptionSpec::long("version"),
    ]
}

#[test]
fn cluster_matches_separate() {
    let clustered = parse(&ParseRequest::new(specs(), ["-ab"])).unwrap();
    let separate = parse(&ParseRequest::new(specs(), ["-a", "-b"])).unwrap();

    assert!(clustered.ok());
    assert_eq!(clustered, separate);
}

#[test]
fn attached_matches_detached() {
    let attached = parse(&ParseRequest::new(specs(), ["-xfoo"])).unwrap();
    let detached = parse(&ParseRequest::new(specs(), ["-x", "foo"])).unwrap();

    assert_eq!(attached, detached);
    assert_eq!(attached.matches[0].value.as_deref(), Some("foo"));
}

#[test]
fn terminator() {
    let result = parse(&ParseRequest::new(specs(), ["--", "-x"])).unwrap();

    assert!(result.matches.is_empty());
    assert_eq!(result.operands, strings(&["-x"]));
}

#[test]
fn prefix_matching() {
    let sole = parse(&ParseRequest::new(vec![OptionSpec::long("verbose")], ["--verb"])).unwrap();
    assert!(sole.ok());
    assert_eq!(sole.matches.len(), 1);

    let ambiguous = parse(&ParseRequest::new(specs(), ["--ver"])).unwrap();
    assert!(!ambiguous.ok());
    assert!(matches!(
        ambiguous.diagnostics[0].kind,
        DiagnosticKind::AmbiguousLongOption { .. }
    ));
}

#[test]
fn unknown_short() {
    let result = parse(&ParseRequest::new(vec![OptionSpec::short('x')], ["-z"])).unwrap();

    assert!(!result.ok());
    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::UnknownOption);
    assert_eq!(result.diagnostics[0].token, "z");
}

#[test]
fn posix_operands_are_stable() {
    let first = parse(&ParseRequest::new(specs(), ["-a", "file", "-b", "--", "-x"]).posix(true))
        .unwrap();
    assert_eq!(first.operands, strings(&["file", "-b", "--", "-x"]));

    let second = parse(&ParseRequest::new(specs(), first.operands.clone()).posix(true)).unwrap();
    assert_eq!(second.operands, first.operands);
    assert!(second.matches.is_empty());
}

#[test]
fn permute_keeps_operand_order() {
    let result = parse(&ParseRequest::new(vec![OptionSpec::short('x')], ["a", "-x", "b"])).unwrap();

    assert_eq!(result.operands, strings(&["a", "b"]));
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].index, 0);
}

#[test]
fn diagnostics_accumulate() {
    let result = parse(&ParseRequest::new(specs(), ["-z", "--nope", "-a", "--ver", "-x"])).unwrap();

    assert_eq!(result.matches.len(), 1);
    assert_eq!(
        result
            .diagnostics
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<String>>(),
        vec![
            "invalid option -- 'z'",
            "unrecognized option '--nope'",
            "option '--ver' is ambiguous; possibilities: '--verbose' '--version'",
            "option requires an argument -- 'x'",
        ]
    );
}

#[test]
fn long_only_diagnostics() {
    let request = ParseRequest::new(specs(), ["-ver", "-=x", "-a-"]).long_only(true);
    let result = parse(&request).unwrap();

    assert_eq!(
        result
            .diagnostics
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<String>>(),
        vec![
            "option '-ver' is ambiguous; possibilities: '-verbose' '-version'",
            "unrecognized option '-'",
            "invalid option -- '-'",
        ]
    );
    assert_eq!(
        result
            .diagnostics
            .iter()
            .map(|d| d.form)
            .collect::<Vec<OptionForm>>(),
        vec![OptionForm::Long, OptionForm::Long, OptionForm::Short]
    );
}

#[test]
fn bind_rejects_foreign_result() {
    let result = parse(&ParseRequest::new(specs(), ["-b"])).unwrap();
    let parser = OptionParser::new(vec![OptionSpec::short('a')]).unwrap();

    assert!(Binder::new()
        .bind(&parser, &result, &mut Environment::new())
        .is_err());
}

#[test]
fn invalid_declarations() {
    assert!(OptionParser::new(vec![OptionSpec::new(None, None)]).is_err());
    assert!(OptionParser::new(vec![OptionSpec::long("level").optional().flag("level")]).is_err());
    assert!(OptionString::parse("-ab").is_err());
}

#[test]
fn option_string() {
    let option_string: OptionString = "+:ab:c::".parse().unwrap();

    assert!(option_string.posix());
    assert!(option_string.quiet());
    assert_eq!(
        option_string
            .specs()
            .iter()
            .map(|s| s.policy())
            .collect::<Vec<ArgPolicy>>(),
        vec![
            ArgPolicy::NoArgument,
            ArgPolicy::RequiredArgument,
            ArgPolicy::OptionalArgument,
        ]
    );
}

#[test]
fn getopt_std() {
    let outcome = getopt("ab:", &["-a", "one", "-b", "two"]).unwrap();

    assert!(outcome.ok());
    assert_eq!(outcome.results.get("a"), Some(&Value::Switch));
    assert_eq!(
        outcome.results.get("b"),
        Some(&Value::Text("two".to_string()))
    );
    assert_eq!(outcome.operands, strings(&["one"]));
}

#[test]
fn getopt_long_binds() {
    let mut names: Vec<String> = Vec::default();
    let mut binder = Binder::new().handler(
        "name",
        |_key: &str, value: Option<&str>| -> Result<(), String> {
            names.push(value.unwrap_or_default().to_string());
            Ok(())
        },
    );
    let mut environment = Environment::new();
    environment.push(Scope::new().declare("debug"));

    let outcome = getopt_long(
        "d",
        vec![
            OptionSpec::long("debug").with_short('d').flag("debug"),
            OptionSpec::long("name").required().callback("name"),
            OptionSpec::long("count").required(),
        ],
        &["--name", "one", "-d", "--count=3", "--name=two"],
        &mut binder,
        &mut environment,
    )
    .unwrap();
    drop(binder);

    assert!(outcome.ok());
    assert_eq!(names, strings(&["one", "two"]));
    assert_eq!(environment.scope(0).unwrap().get("debug"), Some(&Value::Switch));
    assert_eq!(
        outcome.results.get("count"),
        Some(&Value::Text("3".to_string()))
    );
}

#[test]
fn getopt_long_only_fallback() {
    let outcome = getopt_long_only(
        "ab",
        vec![OptionSpec::long("all")],
        &["-al", "-ba"],
        &mut Binder::new(),
        &mut Environment::new(),
    )
    .unwrap();

    assert!(outcome.ok(), "{:?}", outcome.diagnostics);
    assert_eq!(outcome.results.get("all"), Some(&Value::Switch));
    assert_eq!(outcome.results.get("a"), Some(&Value::Switch));
    assert_eq!(outcome.results.get("b"), Some(&Value::Switch));
}

#[test]
fn handler_as_trait() {
    struct Counter<'c>(&'c mut usize);

    impl<'c> Handler for Counter<'c> {
        fn handle(&mut self, _key: &str, _value: Option<&str>) -> Result<(), String> {
            *self.0 += 1;
            Ok(())
        }
    }

    let mut count = 0;
    let parser = OptionParser::new(vec![OptionSpec::short('c').callback("count")]).unwrap();
    let result = parser.parse_tokens(&["-ccc"]);
    let bindings = Binder::new()
        .handler("count", Counter(&mut count))
        .bind(&parser, &result, &mut Environment::new())
        .unwrap();

    assert!(bindings.ok());
    assert_eq!(count, 3);
}

#[test]
fn version_is_set() {
    assert!(!version().is_empty());
}
