//! Typed configuration loading helpers.

use crate::runtime::error::{XtaskError, XtaskResult};
use design_tokens::WcagLevel;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::marker::PhantomData;
use std::path::{Component, Path, PathBuf};

/// Workspace-relative location of the design tooling config.
pub const DESIGN_CONFIG_PATH: &str = "tools/design/tokens.toml";

/// Generic TOML-backed config loader.
///
/// `ConfigLoader<T>` handles only filesystem access and TOML deserialization. Consuming command
/// domains are still responsible for semantic validation after the typed value is loaded.
///
/// ```rust
/// # use serde::Deserialize;
/// # use std::path::Path;
/// # use xtask::runtime::config::ConfigLoader;
/// #[derive(Deserialize)]
/// struct ExampleConfig {
///     enabled: bool,
/// }
///
/// let loader = ConfigLoader::<ExampleConfig>::new(Path::new("/workspace"), "tools/design/example.toml");
/// let _ = loader.path();
/// ```
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Create a loader for the given workspace-relative path.
    pub fn new(root: &Path, relative_path: &str) -> Self {
        Self {
            path: root.join(relative_path),
            _marker: PhantomData,
        }
    }

    /// Load and deserialize the configuration file.
    ///
    /// Missing files, unreadable files, and TOML parse failures are all surfaced as
    /// [`XtaskErrorCategory::Config`](crate::runtime::error::XtaskErrorCategory::Config).
    pub fn load(&self) -> XtaskResult<T> {
        let body = fs::read_to_string(&self.path).map_err(|err| {
            XtaskError::config(format!("failed to read {}: {err}", self.path.display()))
                .with_path(&self.path)
        })?;
        toml::from_str(&body).map_err(|err| {
            XtaskError::config(format!("failed to parse {}: {err}", self.path.display()))
                .with_path(&self.path)
        })
    }

    /// Return the config path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `[output]` table: where generated artifacts go.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Workspace-relative artifact directory.
    pub dir: String,
    /// Id of the injected `<style>` element; must match the runtime constant.
    pub style_element_id: String,
}

/// `[audit]` table.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AuditConfig {
    /// WCAG level token (`aa-large`, `aa`, `aaa-large`, `aaa`).
    pub min_level: String,
}

/// `[governance]` table for the hardcoded-color scan.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GovernanceConfig {
    /// Workspace-relative directories scanned for `.rs` sources.
    pub scan_dirs: Vec<String>,
    /// Marker comment that exempts a line.
    pub allow_annotation: String,
}

/// Contents of [`DESIGN_CONFIG_PATH`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct DesignConfig {
    pub output: OutputConfig,
    pub audit: AuditConfig,
    pub governance: GovernanceConfig,
}

impl DesignConfig {
    /// Semantic checks that TOML deserialization cannot express.
    pub fn validate(&self) -> XtaskResult<()> {
        ensure_workspace_relative("output.dir", &self.output.dir)?;
        if self.output.style_element_id.trim().is_empty()
            || self.output.style_element_id.contains(char::is_whitespace)
        {
            return Err(XtaskError::config(
                "output.style_element_id must be a non-empty id without whitespace",
            ));
        }
        if self.output.style_element_id != design_tokens::STYLE_ELEMENT_ID {
            return Err(XtaskError::config(format!(
                "output.style_element_id `{}` does not match the runtime id `{}`",
                self.output.style_element_id,
                design_tokens::STYLE_ELEMENT_ID
            ))
            .with_hint("update the config or the STYLE_ELEMENT_ID constant together"));
        }
        self.min_level()?;
        if self.governance.scan_dirs.is_empty() {
            return Err(XtaskError::config("governance.scan_dirs must not be empty"));
        }
        for dir in &self.governance.scan_dirs {
            ensure_workspace_relative("governance.scan_dirs", dir)?;
        }
        if self.governance.allow_annotation.trim().is_empty() {
            return Err(XtaskError::config(
                "governance.allow_annotation must not be empty",
            ));
        }
        Ok(())
    }

    /// Parsed `audit.min_level`.
    pub fn min_level(&self) -> XtaskResult<WcagLevel> {
        WcagLevel::from_token(&self.audit.min_level).ok_or_else(|| {
            XtaskError::config(format!(
                "audit.min_level `{}` is not one of aa-large, aa, aaa-large, aaa",
                self.audit.min_level
            ))
        })
    }

    /// Absolute output directory under `root`.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output.dir)
    }
}

fn ensure_workspace_relative(field: &str, value: &str) -> XtaskResult<()> {
    let path = Path::new(value);
    let escapes = path
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
    if value.trim().is_empty() || escapes {
        return Err(XtaskError::config(format!(
            "{field} must be a workspace-relative path, got `{value}`"
        )));
    }
    Ok(())
}

/// Loads and validates [`DESIGN_CONFIG_PATH`].
pub fn load_design_config(root: &Path) -> XtaskResult<DesignConfig> {
    let loader = ConfigLoader::<DesignConfig>::new(root, DESIGN_CONFIG_PATH);
    let config = loader
        .load()
        .map_err(|err| err.with_operation("load design config"))?;
    config.validate().map_err(|err| {
        err.with_operation("validate design config")
            .with_path(loader.path())
    })?;
    Ok(config)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::runtime::error::XtaskErrorCategory;
    use std::time::{SystemTime, UNIX_EPOCH};

    pub(crate) const SAMPLE_CONFIG: &str = r#"
[output]
dir = "target/design-tokens"
style_element_id = "harbor-design-tokens"

[audit]
min_level = "aa"

[governance]
scan_dirs = ["crates/system_ui/src"]
allow_annotation = "intentional-hardcoded-color"
"#;

    pub(crate) fn unique_test_root(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-{label}-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    pub(crate) fn write_config(root: &Path, body: &str) {
        let path = root.join(DESIGN_CONFIG_PATH);
        fs::create_dir_all(path.parent().expect("config parent")).expect("create config dir");
        fs::write(path, body).expect("write config");
    }

    #[test]
    fn loads_and_validates_the_design_config() {
        let root = unique_test_root("config");
        write_config(&root, SAMPLE_CONFIG);

        let config = load_design_config(&root).expect("load config");
        assert_eq!(config.output.dir, "target/design-tokens");
        assert_eq!(config.min_level().expect("level"), WcagLevel::Aa);
        assert_eq!(config.output_dir(&root), root.join("target/design-tokens"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn missing_config_is_a_config_error() {
        let root = unique_test_root("config-missing");
        fs::create_dir_all(&root).expect("create temp root");

        let err = load_design_config(&root).expect_err("missing config should fail");
        assert_eq!(err.category, XtaskErrorCategory::Config);
        assert!(err.to_string().contains("tokens.toml"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let root = unique_test_root("config-broken");
        write_config(&root, "[output\n");

        let err = load_design_config(&root).expect_err("invalid config should fail");
        assert_eq!(err.category, XtaskErrorCategory::Config);

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn semantic_validation_rejects_bad_values() {
        let base: DesignConfig = toml::from_str(SAMPLE_CONFIG).expect("parse sample");
        assert!(base.validate().is_ok());

        let mut escaping = base.clone();
        escaping.output.dir = "../outside".into();
        assert!(escaping.validate().is_err());

        let mut absolute = base.clone();
        absolute.governance.scan_dirs = vec!["/etc".into()];
        assert!(absolute.validate().is_err());

        let mut level = base.clone();
        level.audit.min_level = "gold".into();
        let err = level.validate().expect_err("unknown level");
        assert!(err.message.contains("gold"));

        let mut id = base.clone();
        id.output.style_element_id = "other-id".into();
        assert!(id.validate().is_err());

        let mut annotation = base;
        annotation.governance.allow_annotation = " ".into();
        assert!(annotation.validate().is_err());
    }
}
