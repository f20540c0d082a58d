use argline::{Argument, Enable, Opt, Parser, Requirement, Switch};
use rstest::rstest;

macro_rules! assert_contains {
    ($base:expr, $sub:expr) => {
        assert!(
            $base.contains($sub),
            "'{b}' does not contain '{s}'",
            b = $base,
            s = $sub,
        );
    };
}

#[test]
fn positional_arguments() {
    let mut parser = Parser::new();
    let qwerty = parser.add_argument(Argument::new("qwerty").default_value("default"));
    let asdfgh = parser.add_argument(Argument::new("asdfgh"));

    assert_eq!(parser.argument(qwerty).value(), "default");
    assert_eq!(parser.argument(asdfgh).value(), "");

    let result = parser.parse(["Test application", "Something", "blabla"]);
    assert!(result.is_ok(), "{}", result.error_str());
    assert_eq!(parser.argument(qwerty).value(), "Something");
    assert_eq!(parser.argument(asdfgh).value(), "blabla");
}

#[test]
fn required_arguments() {
    let mut parser = Parser::new();
    parser.add_argument(Argument::new("qwerty"));
    parser.add_argument(Argument::new("asdfgh"));

    assert!(!parser.parse(["Test application", "Something"]).is_ok());
    assert!(parser
        .parse(["Test application", "Something", "blabla"])
        .is_ok());
}

#[test]
fn required_arguments_with_defaults() {
    let mut parser = Parser::new();
    let qwerty = parser.add_argument(Argument::new("qwerty"));
    let asdfgh = parser.add_argument(Argument::new("asdfgh").default_value("whatever"));

    assert!(!parser.parse(["Test application"]).is_ok());

    assert!(parser.parse(["Test application", "Something"]).is_ok());
    assert_eq!(parser.argument(qwerty).value(), "Something");
    assert_eq!(parser.argument(asdfgh).value(), "whatever");

    assert!(parser
        .parse(["Test application", "Something", "blabla"])
        .is_ok());
    assert_eq!(parser.argument(qwerty).value(), "Something");
    assert_eq!(parser.argument(asdfgh).value(), "blabla");
}

#[test]
fn missing_required_argument() {
    let mut parser = Parser::new();
    parser.add_argument(Argument::new("aaa"));

    let result = parser.parse(["appname"]);
    assert!(!result.is_ok());
    assert_contains!(result.error_str(), "aaa is required");
}

#[test]
fn excess_positional_arguments() {
    let mut parser = Parser::new();
    parser.add_argument(Argument::new("aaa"));

    let result = parser.parse(["appname", "arg1", "arg2"]);
    assert!(!result.is_ok());
    assert_contains!(result.error_str(), "2 positional arguments");
}

#[test]
fn optional_argument() {
    let mut parser = Parser::new();
    parser.add_argument(Argument::new("aaa").optional());

    assert!(parser.parse(["appname"]).is_ok());
}

#[test]
fn mixed_required_and_optional_arguments() {
    let mut parser = Parser::new();
    parser.add_argument(Argument::new("aaa"));
    parser.add_argument(Argument::new("bbb").optional());

    let result = parser.parse(["appname", "aaa"]);
    assert!(result.is_ok(), "{}", result.error_str());
}

#[test]
fn argument_default_survives_parse() {
    let mut parser = Parser::new();
    let arg = parser.add_argument(Argument::new("aaa").default_value("default val"));

    assert!(parser.parse(["appname"]).is_ok());
    assert_eq!(parser.argument(arg).value(), "default val");
}

#[test]
fn options_keep_values_across_parses() {
    let mut parser = Parser::new();
    let qwerty = parser.add_option(Opt::new("qwerty").abbr('q').default_value("default"));
    let asdfgh = parser.add_option(Opt::new("asdfgh"));

    assert_eq!(parser.option(qwerty).value(), "default");
    assert_eq!(parser.option(asdfgh).value(), "");

    let result = parser.parse(["Test application"]);
    assert!(result.is_ok(), "{}", result.error_str());
    assert_eq!(parser.option(qwerty).value(), "default");

    let result = parser.parse(["Test application", "--qwerty=42"]);
    assert!(result.is_ok(), "{}", result.error_str());
    assert_eq!(parser.option(qwerty).value(), "42");
    assert_eq!(parser.option(asdfgh).value(), "");

    let result = parser.parse(["Test application", "--qwerty=43", "--asdfgh=1337"]);
    assert!(result.is_ok(), "{}", result.error_str());
    assert_eq!(parser.option(qwerty).value(), "43");
    assert_eq!(parser.option(asdfgh).value(), "1337");

    // Parsing does not reset values; a caller may.
    parser.option_mut(qwerty).set_value("");

    let result = parser.parse(["Test application", "--asdfgh=1338"]);
    assert!(result.is_ok(), "{}", result.error_str());
    assert_eq!(parser.option(qwerty).value(), "");
    assert_eq!(parser.option(asdfgh).value(), "1338");
}

#[rstest]
#[case(vec!["app", "--qwerty=42"], "42")]
#[case(vec!["app", "-q42"], "42")]
#[case(vec!["app", "-q", "1337"], "1337")]
#[case(vec!["app", "-q=1234"], "1234")]
fn option_forms(#[case] argv: Vec<&str>, #[case] expected: &str) {
    let mut parser = Parser::new();
    let qwerty = parser.add_option(Opt::new("qwerty").abbr('q').default_value("default"));

    let result = parser.parse(argv);
    assert!(result.is_ok(), "{}", result.error_str());
    assert_eq!(parser.option(qwerty).value(), expected);
}

#[test]
fn option_with_space_separated_value() {
    let mut parser = Parser::new();
    let qwerty = parser.add_option(Opt::new("qwerty"));

    let result = parser.parse(["Test application", "--qwerty", "1337"]);
    assert!(result.is_ok(), "{}", result.error_str());
    assert_eq!(parser.option(qwerty).value(), "1337");
}

#[test]
fn missing_required_option() {
    let mut parser = Parser::new();
    parser.add_option(Opt::new("opt").required());

    let result = parser.parse(["appname"]);
    assert!(!result.is_ok());
    assert_contains!(result.error_str(), "Option opt is required");
}

#[test]
fn unknown_option() {
    let mut parser = Parser::new();

    let result = parser.parse(["appname", "--nonexistent=1"]);
    assert!(!result.is_ok());
    assert_contains!(
        result.error_str(),
        "This command does not accept \"--nonexistent=1\" option"
    );
}

#[test]
fn switches() {
    let mut parser = Parser::new();
    let long = parser.add_switch(Switch::new("verbose").abbr('v'));
    let short = parser.add_switch(Switch::new("quiet").abbr('q'));

    let result = parser.parse(["appname", "--verbose", "-q"]);
    assert!(result.is_ok(), "{}", result.error_str());
    assert!(parser.switch(long).is_on());
    assert!(parser.switch(short).is_on());
}

#[test]
fn conditional_argument() {
    let mut parser = Parser::new();
    let sw = parser.add_switch(Switch::new("switch"));
    let arg = parser.add_argument(Argument::new("arg").enable(Enable::when_switch(sw)));

    let result = parser.parse(["appname", "arg"]);
    assert!(!result.is_ok());

    let result = parser.parse(["appname", "--switch", "arg"]);
    assert!(result.is_ok(), "{}", result.error_str());
    assert_eq!(parser.argument(arg).value(), "arg");
}

#[test]
fn idempotent_optional_parse() {
    let mut parser = Parser::new();
    let opt = parser.add_option(Opt::new("opt"));
    let sw = parser.add_switch(Switch::new("flag").abbr('f'));

    let argv = ["appname", "--opt=7", "-f"];
    assert!(parser.parse(argv).is_ok());
    let once = (
        parser.option(opt).value().to_string(),
        parser.switch(sw).is_on(),
    );

    assert!(parser.parse(argv).is_ok());
    let twice = (
        parser.option(opt).value().to_string(),
        parser.switch(sw).is_on(),
    );
    assert_eq!(once, twice);
}

#[test]
fn command_validity() {
    let mut parser = Parser::new();
    parser.add_argument(Argument::new("aaa").optional());
    parser.add_argument(Argument::new("bbb"));

    let result = parser.validate_command();
    assert!(!result.is_ok());
    assert_contains!(result.error_str(), "\"bbb\" cannot be optional");
}

#[test]
fn auto_help() {
    let with_help = Parser::new();
    assert!(with_help.find_switch("help").is_some());

    let without_help = Parser::without_help();
    assert!(without_help.find_switch("help").is_none());
}

#[rstest]
#[case("--help")]
#[case("-?")]
fn requesting_help(#[case] token: &str) {
    let mut parser = Parser::new();
    parser.add_argument(Argument::new("arg"));

    parser.parse(["appname", token]);
    assert!(parser.help_requested());
}

#[test]
fn help_description_and_usage() {
    let mut parser = Parser::new();
    parser.add_argument(Argument::new("arg"));
    parser.set_help("Example description");
    parser.parse(["TestApp"]);

    let help = parser.help();
    assert!(help.starts_with("Example description"));
    assert_contains!(help, "TestApp [Options] <arg>");
}

#[test]
fn help_columns() {
    let mut parser = Parser::new();
    parser.add_argument(
        Argument::new("arg")
            .default_value("default-value")
            .help("Some desc"),
    );
    parser.add_argument(Argument::new("arg-simple"));
    parser.add_option(
        Opt::new("opt")
            .abbr('o')
            .default_value("1337")
            .required()
            .help("An option"),
    );
    parser.add_option(Opt::new("opt-simple"));
    parser.add_switch(Switch::new("switch").abbr('s').help("A switch"));
    parser.add_switch(Switch::new("switch-simple"));

    let help = parser.help();
    assert_contains!(help, "--opt, -o [value]    = An option");
    assert_contains!(help, "--opt-simple [value]");
    assert_contains!(help, "--help, -?           = Show help message");
    assert_contains!(help, "--switch, -s         = A switch");
    assert_contains!(help, "--switch-simple");
}

#[test]
fn requirement_toggling_between_parses() {
    let mut parser = Parser::new();
    let arg = parser.add_argument(Argument::new("aaa"));

    assert!(!parser.parse(["appname"]).is_ok());

    parser
        .argument_mut(arg)
        .set_requirement(Requirement::Optional);
    assert!(parser.parse(["appname"]).is_ok());
}
