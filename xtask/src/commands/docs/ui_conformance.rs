//! Hardcoded color scan over component sources.
//!
//! Colors reach components only through `var(--harbor-*)` references. A line that must carry a
//! raw literal opts out with the configured annotation in a trailing comment.

use super::Problem;
use crate::runtime::config::GovernanceConfig;
use crate::runtime::error::XtaskResult;
use crate::runtime::fs::{collect_files_with_suffix, rel_posix};
use std::fs;
use std::path::Path;

const CHECK: &str = "ui-conformance";

/// Scans every `.rs` file under the configured directories.
pub(crate) fn validate(root: &Path, governance: &GovernanceConfig) -> XtaskResult<Vec<Problem>> {
    let mut problems = Vec::new();
    for dir in &governance.scan_dirs {
        let dir_path = root.join(dir);
        if !dir_path.is_dir() {
            problems.push(Problem::new(
                CHECK,
                dir.as_str(),
                "configured scan directory does not exist",
                None,
            ));
            continue;
        }
        for path in collect_files_with_suffix(&dir_path, ".rs")? {
            let text = fs::read_to_string(&path)?;
            let rel = rel_posix(root, &path);
            problems.extend(scan_source(&rel, &text, &governance.allow_annotation));
        }
    }
    Ok(problems)
}

pub(crate) fn scan_source(rel_path: &str, text: &str, allow_annotation: &str) -> Vec<Problem> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.starts_with("//") || trimmed.contains(allow_annotation) {
                return None;
            }
            has_disallowed_raw_color_literal(trimmed).then(|| {
                Problem::new(
                    CHECK,
                    rel_path,
                    format!(
                        "raw color literal; reference a token via var_ref or mark the line `{allow_annotation}`"
                    ),
                    Some(idx + 1),
                )
            })
        })
        .collect()
}

fn has_disallowed_raw_color_literal(line: &str) -> bool {
    if contains_hex_color_literal(line) {
        return true;
    }

    let mut rest = line;
    while let Some(start) = rest.find("rgba(") {
        let after = &rest[start + 5..];
        let Some(end) = after.find(')') else {
            return true;
        };
        if !is_transparent_rgba_stop(&after[..end]) {
            return true;
        }
        rest = &after[end + 1..];
    }
    line.contains("rgb(")
}

fn is_transparent_rgba_stop(args: &str) -> bool {
    let parts: Vec<_> = args.split(',').map(str::trim).collect();
    parts.len() == 4 && parts[3] == "0"
}

fn contains_hex_color_literal(line: &str) -> bool {
    let bytes = line.as_bytes();
    for i in 0..bytes.len() {
        if bytes[i] != b'#' {
            continue;
        }
        let count = bytes[i + 1..]
            .iter()
            .take_while(|byte| byte.is_ascii_hexdigit())
            .count();
        if matches!(count, 3 | 4 | 6 | 8) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::config::tests::unique_test_root;
    use crate::runtime::fs::write_text;

    const ANNOTATION: &str = "intentional-hardcoded-color";

    #[test]
    fn detects_hex_literals_of_color_lengths_only() {
        assert!(contains_hex_color_literal(r#"style="color: #fff""#));
        assert!(contains_hex_color_literal("background: #0A1F44;"));
        assert!(contains_hex_color_literal("fill=\"#0a1f44cc\""));
        assert!(!contains_hex_color_literal("#[derive(Debug)]"));
        assert!(!contains_hex_color_literal("issue #12"));
        assert!(!contains_hex_color_literal("#1234567"));
    }

    #[test]
    fn rgba_is_allowed_only_for_transparent_stops() {
        assert!(!has_disallowed_raw_color_literal(
            "linear-gradient(rgba(0, 0, 0, 0), var(--harbor-surface))"
        ));
        assert!(has_disallowed_raw_color_literal("rgba(0, 0, 0, 0.4)"));
        assert!(has_disallowed_raw_color_literal("color: rgb(10, 20, 30)"));
    }

    #[test]
    fn comments_and_annotated_lines_are_exempt() {
        let source = "\
// Brand navy is #0A1F44.
let border = \"#FF0000\"; // intentional-hardcoded-color
let text = \"#333333\";
let tokened = var_ref(\"color-navy-900\");
";
        let problems = scan_source("src/card.rs", source, ANNOTATION);
        assert_eq!(
            problems,
            vec![Problem::new(
                CHECK,
                "src/card.rs",
                format!(
                    "raw color literal; reference a token via var_ref or mark the line `{ANNOTATION}`"
                ),
                Some(3),
            )]
        );
    }

    #[test]
    fn validate_walks_configured_directories() {
        let root = unique_test_root("ui-conformance");
        write_text(&root.join("ui/src/ok.rs"), "let c = var_ref(\"text-primary\");\n")
            .expect("write ok");
        write_text(&root.join("ui/src/nested/bad.rs"), "\nlet c = \"#abcdef\";\n")
            .expect("write bad");
        let governance = GovernanceConfig {
            scan_dirs: vec!["ui/src".into(), "missing".into()],
            allow_annotation: ANNOTATION.into(),
        };

        let problems = validate(&root, &governance).expect("scan");
        let locations: Vec<_> = problems.iter().map(Problem::location).collect();
        assert_eq!(
            locations,
            vec!["ui/src/nested/bad.rs:2".to_string(), "missing".to_string()]
        );

        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn workspace_component_sources_are_clean() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .expect("workspace root");
        let governance = GovernanceConfig {
            scan_dirs: vec!["crates/system_ui/src".into(), "crates/showcase/src".into()],
            allow_annotation: ANNOTATION.into(),
        };
        assert_eq!(validate(root, &governance).expect("scan"), Vec::new());
    }
}
