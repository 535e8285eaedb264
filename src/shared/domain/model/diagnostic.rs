/// Severity of a diagnostic reported back to the plugin host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DiagnosticSeverity {
    Error,
}

impl DiagnosticSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
        }
    }
}

/// A host-facing problem report, optionally attached to a configuration attribute.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    severity: DiagnosticSeverity,
    summary: String,
    detail: String,
    attribute_path: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute_path: None,
        }
    }

    pub fn with_attribute_path(mut self, attribute_path: impl Into<String>) -> Self {
        self.attribute_path = Some(attribute_path.into());
        self
    }

    pub fn severity(&self) -> DiagnosticSeverity {
        self.severity
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn attribute_path(&self) -> Option<&str> {
        self.attribute_path.as_deref()
    }
}
