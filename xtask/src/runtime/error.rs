//! Categorized errors for design tooling commands.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// What kind of failure stopped a command.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum XtaskErrorCategory {
    /// `tools/design/tokens.toml` is missing, unparsable or semantically invalid.
    Config,
    /// Bad arguments, or a check (audit, conformance scan) reported findings.
    Validation,
    /// Reading or writing the workspace failed.
    Io,
}

impl XtaskErrorCategory {
    /// Short label used as the `error[...]` prefix.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Validation => "validation",
            Self::Io => "io",
        }
    }
}

/// Command failure plus whatever context was attached while it propagated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XtaskError {
    pub category: XtaskErrorCategory,
    pub message: String,
    /// Step that was running, e.g. `load design config`.
    pub operation: Option<String>,
    /// File or directory involved.
    pub target: Option<String>,
    /// What the user can do about it.
    pub hint: Option<String>,
}

pub type XtaskResult<T> = Result<T, XtaskError>;

impl XtaskError {
    pub fn new(category: XtaskErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            operation: None,
            target: None,
            hint: None,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Config, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Validation, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Io, message)
    }

    /// Records the running step. The first label wins so inner context is kept.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation.get_or_insert_with(|| operation.into());
        self
    }

    pub fn with_path(mut self, path: &Path) -> Self {
        self.target = Some(path.display().to_string());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for XtaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category.label(), self.message)?;
        let context = [
            ("while", self.operation.as_deref()),
            ("at", self.target.as_deref()),
            ("hint", self.hint.as_deref()),
        ];
        for (label, value) in context {
            if let Some(value) = value {
                write!(f, "\n  {label}: {value}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for XtaskError {}

impl From<std::io::Error> for XtaskError {
    fn from(value: std::io::Error) -> Self {
        XtaskError::io(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_attached_context() {
        let err = XtaskError::config("bad output dir")
            .with_operation("load design config")
            .with_path(Path::new("tools/design/tokens.toml"))
            .with_hint("use a workspace-relative path");
        assert_eq!(
            err.to_string(),
            "[config] bad output dir\n  while: load design config\n  at: tools/design/tokens.toml\n  hint: use a workspace-relative path"
        );
    }

    #[test]
    fn inner_operation_is_not_overwritten() {
        let err = XtaskError::validation("x")
            .with_operation("generate stylesheet")
            .with_operation("tokens build");
        assert_eq!(err.operation.as_deref(), Some("generate stylesheet"));
    }

    #[test]
    fn io_errors_convert_into_io_category() {
        let err: XtaskError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category, XtaskErrorCategory::Io);
        assert_eq!(err.to_string(), "[io] gone");
    }
}
