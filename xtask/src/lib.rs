//! Design system maintenance commands (`cargo xtask`).
//!
//! A small CLI layer over a shared runtime: [`runtime`] owns config loading, filesystem helpers
//! and errors, while [`commands`] holds the `tokens` and `docs` families.

pub mod cli;
pub mod commands;
pub mod runtime;

use crate::cli::TopLevelCommand;
use crate::commands::docs::DocsCommand;
use crate::commands::tokens::TokensCommand;
use crate::runtime::context::CommandContext;
use crate::runtime::error::XtaskResult;

/// Shared command contract for top-level xtask command families.
///
/// [`XtaskCommand::parse`] is a pure translation from raw CLI arguments into typed options;
/// side effects belong in [`XtaskCommand::run`].
pub trait XtaskCommand {
    /// Typed options produced by CLI parsing for the command family.
    type Options;

    /// Parse command-line arguments into typed options.
    ///
    /// Invalid argument shapes return [`XtaskError::validation`](crate::runtime::error::XtaskError::validation).
    fn parse(args: &[String]) -> XtaskResult<Self::Options>;

    /// Execute the command family using the shared runtime context.
    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()>;
}

/// Executes the `xtask` binary using the current process arguments.
pub fn execute_from_env() -> XtaskResult<()> {
    let parsed = cli::parse(std::env::args().skip(1).collect())?;
    let ctx = CommandContext::new()?;

    match parsed {
        TopLevelCommand::Tokens(args) => TokensCommand::run(&ctx, TokensCommand::parse(&args)?),
        TopLevelCommand::Docs(args) => DocsCommand::run(&ctx, DocsCommand::parse(&args)?),
        TopLevelCommand::Help => {
            cli::print_usage();
            Ok(())
        }
    }
}

/// Converts an xtask result into a stable process exit code.
///
/// All command failures map to exit code `1` after printing the formatted [`XtaskError`](crate::runtime::error::XtaskError) to
/// stderr.
pub fn exit_code(result: XtaskResult<()>) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    const MANIFEST: &str = include_str!("../Cargo.toml");

    #[test]
    fn json_parsing_is_only_a_test_dependency() {
        let manifest: toml::Table = toml::from_str(MANIFEST).expect("parse manifest");
        let section = |name: &str| {
            manifest
                .get(name)
                .and_then(toml::Value::as_table)
                .cloned()
                .unwrap_or_default()
        };
        assert!(!section("dependencies").contains_key("serde_json"));
        assert!(section("dev-dependencies").contains_key("serde_json"));
    }
}
