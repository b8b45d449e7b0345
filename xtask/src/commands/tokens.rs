//! `cargo xtask tokens ...`: generated artifacts and contrast audit.

use crate::runtime::config::DesignConfig;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::runtime::fs::{rel_posix, write_text};
use crate::XtaskCommand;
use design_tokens::{
    audit_text_pairs, create_theme, css_variables, generate_stylesheet, ContrastCheck,
    ThemeMode, TokenStore, WcagLevel,
};
use std::path::{Path, PathBuf};

/// File name of the generated stylesheet.
pub const STYLESHEET_FILE: &str = "tokens.css";

/// Parsed `tokens` subcommand.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokensAction {
    Build,
    Audit,
    /// Optional filter applied to variable names (without the `--harbor-` prefix).
    List { prefix: Option<String> },
}

/// `cargo xtask tokens ...`
pub struct TokensCommand;

impl XtaskCommand for TokensCommand {
    type Options = TokensAction;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        match args.first().map(String::as_str) {
            Some("build") if args.len() == 1 => Ok(TokensAction::Build),
            Some("audit") if args.len() == 1 => Ok(TokensAction::Audit),
            Some("list") => match &args[1..] {
                [] => Ok(TokensAction::List { prefix: None }),
                [flag, value] if flag == "--prefix" => Ok(TokensAction::List {
                    prefix: Some(value.clone()),
                }),
                _ => Err(XtaskError::validation("usage: tokens list [--prefix <path>]")),
            },
            Some(other) => Err(XtaskError::validation(format!(
                "unknown or malformed tokens subcommand: {}",
                std::iter::once(other)
                    .chain(args[1..].iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(" ")
            ))
            .with_hint("expected `build`, `audit` or `list`")),
            None => Err(XtaskError::validation(
                "missing tokens subcommand (`build`, `audit` or `list`)",
            )),
        }
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        match options {
            TokensAction::Build => {
                let config = ctx.design_config()?;
                for path in build_artifacts(ctx.root(), &config)? {
                    println!("wrote {}", rel_posix(ctx.root(), &path));
                }
                Ok(())
            }
            TokensAction::Audit => {
                let config = ctx.design_config()?;
                run_audit(config.min_level()?)
            }
            TokensAction::List { prefix } => {
                for line in list_variables(prefix.as_deref())? {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

/// Theme JSON file name for `mode`.
pub fn theme_file_name(mode: ThemeMode) -> String {
    format!("theme-{}.json", mode.token())
}

/// Writes the stylesheet and one theme JSON per mode; returns the written paths.
pub fn build_artifacts(root: &Path, config: &DesignConfig) -> XtaskResult<Vec<PathBuf>> {
    let out_dir = config.output_dir(root);
    let store = TokenStore::default();

    let stylesheet = generate_stylesheet(&store).map_err(|err| {
        XtaskError::validation(format!("token tree could not be flattened: {err}"))
            .with_operation("generate stylesheet")
    })?;
    let css_path = out_dir.join(STYLESHEET_FILE);
    write_text(&css_path, &stylesheet)?;
    let mut written = vec![css_path];

    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        let json = create_theme(mode).to_json_pretty().map_err(|err| {
            XtaskError::validation(format!("theme serialization failed: {err}"))
                .with_operation(format!("serialize {mode} theme"))
        })?;
        let path = out_dir.join(theme_file_name(mode));
        write_text(&path, &format!("{json}\n"))?;
        written.push(path);
    }

    Ok(written)
}

/// One report line per check plus the number of failing pairs.
pub fn audit_report(level: WcagLevel) -> (Vec<String>, usize) {
    let mut lines = Vec::new();
    let mut failures = 0;
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        for check in audit_text_pairs(mode, level) {
            if !check.passes {
                failures += 1;
            }
            lines.push(format_check(mode, &check));
        }
    }
    (lines, failures)
}

fn format_check(mode: ThemeMode, check: &ContrastCheck) -> String {
    format!(
        "[{}] {mode} {} on {}: {:.2}:1 ({} {})",
        if check.passes { "pass" } else { "FAIL" },
        check.foreground_role,
        check.background_role,
        check.ratio,
        check.level.token(),
        check.level.min_ratio()
    )
}

fn run_audit(level: WcagLevel) -> XtaskResult<()> {
    let (lines, failures) = audit_report(level);
    for line in &lines {
        println!("{line}");
    }
    if failures == 0 {
        println!("OK");
        return Ok(());
    }
    println!("\nFAILED: {failures} pair(s) below {}", level.token());
    Err(XtaskError::validation(format!(
        "{failures} text pair(s) miss the {} contrast minimum",
        level.token()
    ))
    .with_operation("tokens audit"))
}

/// `name: value` lines for every light-mode variable, optionally filtered by path prefix.
pub fn list_variables(prefix: Option<&str>) -> XtaskResult<Vec<String>> {
    let variables = css_variables(&TokenStore::default()).map_err(|err| {
        XtaskError::validation(format!("token tree could not be flattened: {err}"))
            .with_operation("list variables")
    })?;
    let wanted = prefix.map(|prefix| format!("--harbor-{prefix}"));
    Ok(variables
        .iter()
        .filter(|variable| {
            wanted
                .as_deref()
                .map_or(true, |wanted| variable.name.starts_with(wanted))
        })
        .map(|variable| format!("{}: {}", variable.name, variable.value))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::config::tests::{unique_test_root, write_config, SAMPLE_CONFIG};
    use crate::runtime::error::XtaskErrorCategory;
    use std::fs;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_subcommands() {
        assert_eq!(
            TokensCommand::parse(&args(&["build"])).expect("build"),
            TokensAction::Build
        );
        assert_eq!(
            TokensCommand::parse(&args(&["list", "--prefix", "color-navy"])).expect("list"),
            TokensAction::List {
                prefix: Some("color-navy".into())
            }
        );
        let err = TokensCommand::parse(&args(&["build", "--release"])).expect_err("extra arg");
        assert_eq!(err.category, XtaskErrorCategory::Validation);
        assert!(TokensCommand::parse(&[]).is_err());
    }

    #[test]
    fn build_writes_stylesheet_and_both_themes() {
        let root = unique_test_root("tokens-build");
        write_config(&root, SAMPLE_CONFIG);
        let ctx = CommandContext::with_root(&root);
        let config = ctx.design_config().expect("config");

        let written = build_artifacts(ctx.root(), &config).expect("build");
        let names: Vec<_> = written
            .iter()
            .map(|path| rel_posix(&root, path))
            .collect();
        assert_eq!(
            names,
            vec![
                "target/design-tokens/tokens.css".to_string(),
                "target/design-tokens/theme-light.json".to_string(),
                "target/design-tokens/theme-dark.json".to_string(),
            ]
        );

        let css = fs::read_to_string(&written[0]).expect("read css");
        assert!(css.contains("--harbor-color-navy-900"));
        assert!(css.contains("prefers-color-scheme: dark"));

        let dark: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&written[2]).expect("read dark"))
                .expect("dark json");
        assert_eq!(dark["palette"]["mode"], "dark");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn build_is_deterministic() {
        let root = unique_test_root("tokens-repeat");
        write_config(&root, SAMPLE_CONFIG);
        let config = load_config(&root);

        let first = build_artifacts(&root, &config).expect("first build");
        let css_first = fs::read_to_string(&first[0]).expect("read");
        build_artifacts(&root, &config).expect("second build");
        assert_eq!(fs::read_to_string(&first[0]).expect("read"), css_first);

        let _ = fs::remove_dir_all(root);
    }

    fn load_config(root: &Path) -> DesignConfig {
        CommandContext::with_root(root)
            .design_config()
            .expect("config")
    }

    #[test]
    fn built_in_pairs_pass_the_default_audit() {
        let (lines, failures) = audit_report(WcagLevel::Aa);
        assert_eq!(failures, 0);
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|line| line.starts_with("[pass] ")));
    }

    #[test]
    fn list_filters_by_prefix() {
        let navy = list_variables(Some("color-navy")).expect("list");
        assert_eq!(navy.len(), 11);
        assert!(navy
            .iter()
            .any(|line| line.starts_with("--harbor-color-navy-900: ")));

        let all = list_variables(None).expect("list all");
        assert!(all.len() > navy.len());
    }
}
