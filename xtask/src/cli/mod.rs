//! Top-level CLI parsing and help output.

use crate::runtime::error::{XtaskError, XtaskResult};

/// Top-level `xtask` command families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    Tokens(Vec<String>),
    Docs(Vec<String>),
    Help,
}

/// Parse raw command-line arguments into a top-level command selection.
pub fn parse(args: Vec<String>) -> XtaskResult<TopLevelCommand> {
    let Some(cmd) = args.first().cloned() else {
        return Ok(TopLevelCommand::Help);
    };

    let rest = args[1..].to_vec();
    match cmd.as_str() {
        "tokens" => Ok(TopLevelCommand::Tokens(rest)),
        "docs" => Ok(TopLevelCommand::Docs(rest)),
        "help" | "--help" | "-h" => Ok(TopLevelCommand::Help),
        other => Err(XtaskError::validation(format!(
            "unknown xtask command: {other}"
        ))
        .with_hint("run `cargo xtask help`")),
    }
}

/// Print the canonical top-level usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           tokens build        Write tokens.css and theme JSON into the configured output dir\n\
           tokens audit        Check semantic text pairs against the configured WCAG level\n\
           tokens list         Print every generated CSS variable\n\
           docs ui-conformance Flag raw hex colors in component sources\n\
           help                Show this message\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn empty_args_show_help() {
        assert_eq!(parse(Vec::new()).expect("parse"), TopLevelCommand::Help);
        assert_eq!(parse(args(&["-h"])).expect("parse"), TopLevelCommand::Help);
    }

    #[test]
    fn families_receive_remaining_args() {
        assert_eq!(
            parse(args(&["tokens", "build"])).expect("parse"),
            TopLevelCommand::Tokens(args(&["build"]))
        );
        assert_eq!(
            parse(args(&["docs", "ui-conformance"])).expect("parse"),
            TopLevelCommand::Docs(args(&["ui-conformance"]))
        );
    }

    #[test]
    fn unknown_command_is_a_validation_error() {
        let err = parse(args(&["deploy"])).expect_err("unknown command");
        assert!(err.message.contains("deploy"));
    }
}
