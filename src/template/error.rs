//! Template errors.

use thiserror::Error;

/// Errors raised while resolving a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// No Definer has registered a template under this name yet.
    #[error("template \"{name}\" is not defined")]
    NotDefined { name: String },
}
