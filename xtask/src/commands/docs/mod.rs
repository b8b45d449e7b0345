//! Source conformance checks (`cargo xtask docs ...`).

mod ui_conformance;

use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;

/// Parsed `docs` subcommand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocsCheck {
    UiConformance,
}

/// `cargo xtask docs ...`
pub struct DocsCommand;

impl XtaskCommand for DocsCommand {
    type Options = DocsCheck;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        match args {
            [cmd] if cmd == "ui-conformance" => Ok(DocsCheck::UiConformance),
            [] => Err(XtaskError::validation(
                "missing docs subcommand (`ui-conformance`)",
            )),
            _ => Err(XtaskError::validation(format!(
                "unknown docs subcommand: {}",
                args.join(" ")
            ))),
        }
    }

    fn run(ctx: &CommandContext, check: Self::Options) -> XtaskResult<()> {
        match check {
            DocsCheck::UiConformance => {
                let config = ctx.design_config()?;
                fail_if_problems(ui_conformance::validate(ctx.root(), &config.governance)?)
            }
        }
    }
}

/// One finding reported by a check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Problem {
    check: String,
    path: String,
    message: String,
    line: Option<usize>,
}

impl Problem {
    pub(crate) fn new(
        check: &str,
        path: impl Into<String>,
        message: impl Into<String>,
        line: Option<usize>,
    ) -> Self {
        Self {
            check: check.to_string(),
            path: path.into(),
            message: message.into(),
            line,
        }
    }

    fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{line}", self.path),
            None => self.path.clone(),
        }
    }
}

/// Prints `OK`, or every problem in stable order followed by a failure count.
pub(crate) fn fail_if_problems(mut problems: Vec<Problem>) -> XtaskResult<()> {
    if problems.is_empty() {
        println!("OK");
        return Ok(());
    }
    problems.sort_by(|a, b| {
        (&a.check, &a.path, a.line.unwrap_or(0), &a.message).cmp(&(
            &b.check,
            &b.path,
            b.line.unwrap_or(0),
            &b.message,
        ))
    });
    for p in &problems {
        println!("[{}] {} - {}", p.check, p.location(), p.message);
    }
    println!("\nFAILED: {} issue(s)", problems.len());
    Err(XtaskError::validation(format!(
        "conformance check found {} issue(s)",
        problems.len()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::error::XtaskErrorCategory;

    #[test]
    fn parses_known_checks_only() {
        assert_eq!(
            DocsCommand::parse(&["ui-conformance".to_string()]).expect("parse"),
            DocsCheck::UiConformance
        );
        assert!(DocsCommand::parse(&[]).is_err());
        assert!(DocsCommand::parse(&["links".to_string()]).is_err());
    }

    #[test]
    fn problems_fail_with_a_validation_error() {
        assert!(fail_if_problems(Vec::new()).is_ok());

        let err = fail_if_problems(vec![
            Problem::new("ui-conformance", "b.rs", "raw color", Some(3)),
            Problem::new("ui-conformance", "a.rs", "raw color", None),
        ])
        .expect_err("problems should fail");
        assert_eq!(err.category, XtaskErrorCategory::Validation);
        assert!(err.message.contains("2 issue(s)"));
    }

    #[test]
    fn location_includes_line_when_known() {
        assert_eq!(
            Problem::new("c", "src/lib.rs", "m", Some(7)).location(),
            "src/lib.rs:7"
        );
        assert_eq!(Problem::new("c", "src/lib.rs", "m", None).location(), "src/lib.rs");
    }
}
