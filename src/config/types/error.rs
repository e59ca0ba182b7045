//! Errors raised while loading `vitrine.toml`.

use std::fmt;
use std::path::PathBuf;

use owo_colors::Style;
use thiserror::Error;

use super::FieldPath;
use crate::logger::paint;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML")]
    Toml(#[from] toml::de::Error),

    // Printed as-is; the problems already carry their own formatting.
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
struct Problem {
    severity: Severity,
    field: FieldPath,
    message: String,
    hint: Option<String>,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({} {})", paint("hint:", Style::new().yellow()), hint)?;
        }
        Ok(())
    }
}

/// Problems found by the section validators.
///
/// Every section reports into the same collection, so one load shows all
/// mistakes at once. Warnings are logged, errors fail the load.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    problems: Vec<Problem>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, field: FieldPath, message: String, hint: Option<String>) {
        self.problems.push(Problem {
            severity,
            field,
            message,
            hint,
        });
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Warning, field, message.into(), None);
    }

    fn of(&self, severity: Severity) -> impl Iterator<Item = &Problem> {
        self.problems.iter().filter(move |p| p.severity == severity)
    }

    pub fn error_count(&self) -> usize {
        self.of(Severity::Error).count()
    }

    /// Log the warnings, then fail if any error was reported.
    pub fn finish(self) -> Result<(), ConfigError> {
        for warning in self.of(Severity::Warning) {
            crate::log!("warning"; "{}", warning);
        }
        if self.error_count() == 0 {
            Ok(())
        } else {
            Err(ConfigError::Diagnostics(self))
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.error_count();
        let noun = if count == 1 { "error" } else { "errors" };
        let header = format!("invalid configuration ({count} {noun}):");
        write!(f, "{}", paint(header, Style::new().red().bold()))?;
        for problem in self.of(Severity::Error) {
            write!(f, "\n  {} {}", paint("-", Style::new().red()), problem)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_file() {
        let err = ConfigError::Io(
            PathBuf::from("site/vitrine.toml"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.to_string(), "cannot read `site/vitrine.toml`");
    }

    #[test]
    fn test_errors_listed_with_hints() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("sanitize.leading_image_window"), "must be greater than 0");
        diag.error_with_hint(
            FieldPath::new("slug.aliases"),
            "has no candidates",
            "add `aliases`",
        );
        diag.warn(FieldPath::new("fields.sections"), "has no candidates");
        assert_eq!(diag.error_count(), 2);

        let Err(err) = diag.finish() else {
            panic!("errors must fail the load");
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration (2 errors):\n  \
             - `sanitize.leading_image_window` must be greater than 0\n  \
             - `slug.aliases` has no candidates (hint: add `aliases`)"
        );
    }

    #[test]
    fn test_warnings_alone_pass() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("fields.sections"), "has no candidates");
        assert_eq!(diag.error_count(), 0);
        assert!(diag.finish().is_ok());
    }
}
