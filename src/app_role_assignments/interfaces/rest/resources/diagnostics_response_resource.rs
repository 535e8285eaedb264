use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::domain::model::diagnostic::Diagnostic;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DiagnosticResource {
    pub severity: String,
    pub summary: String,
    pub detail: String,
    pub attribute_path: Option<String>,
}

impl From<&Diagnostic> for DiagnosticResource {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            severity: diagnostic.severity().as_str().to_string(),
            summary: diagnostic.summary().to_string(),
            detail: diagnostic.detail().to_string(),
            attribute_path: diagnostic.attribute_path().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DiagnosticsResponseResource {
    /// Set when a failed create left an assignment behind; the host stores it as tainted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub diagnostics: Vec<DiagnosticResource>,
}
