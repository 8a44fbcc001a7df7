use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request naming a single name to act on
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NameRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// Request to import names into the catalog
///
/// Names can be sent as a list, as a newline-separated block of text, or both.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_import_request"))]
pub struct ImportRequest {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl ImportRequest {
    /// All submitted names, trimmed and without blanks
    pub fn collect_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();
        if let Some(text) = &self.text {
            names.extend(crate::core::catalog::parse_import_text(text));
        }
        names
    }
}

fn validate_import_request(req: &ImportRequest) -> Result<(), ValidationError> {
    if req.collect_names().is_empty() {
        return Err(ValidationError::new("no_names"));
    }
    Ok(())
}
