use serde::{Deserialize, Serialize};

use crate::error::CodegenError;
use crate::escape::is_identifier;

pub const DEFAULT_HELPERS_NAME: &str = "html";
pub const DEFAULT_MODEL_NAME: &str = "model";

/// Options for one generation pass.
///
/// Field names follow the compiler's JSON configuration (`useWith`,
/// `htmlEscape`, `helpersName`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodegenOptions {
    /// Wrap the body in `try`/`catch` reporting errors against `source`.
    pub debug: bool,
    /// Open `with( model ){` so bare identifiers resolve against the model.
    pub use_with: bool,
    /// Emit a helper body instead of a standalone render function.
    pub as_helper: bool,
    /// Return the joined buffer instead of running render-end hooks.
    pub simple: bool,
    /// Route interpolated expressions through `<helpers>.escape(...)`.
    pub html_escape: bool,
    pub helpers_name: String,
    pub model_name: String,
    /// Original template text, required when `debug` is set.
    pub source: Option<String>,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            debug: false,
            use_with: false,
            as_helper: false,
            simple: false,
            html_escape: true,
            helpers_name: DEFAULT_HELPERS_NAME.to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            source: None,
        }
    }
}

impl CodegenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, source: impl Into<String>) -> Self {
        self.debug = true;
        self.source = Some(source.into());
        self
    }

    pub fn with_use_with(mut self, use_with: bool) -> Self {
        self.use_with = use_with;
        self
    }

    pub fn with_as_helper(mut self, as_helper: bool) -> Self {
        self.as_helper = as_helper;
        self
    }

    pub fn with_simple(mut self, simple: bool) -> Self {
        self.simple = simple;
        self
    }

    pub fn with_html_escape(mut self, html_escape: bool) -> Self {
        self.html_escape = html_escape;
        self
    }

    pub fn with_helpers_name(mut self, name: impl Into<String>) -> Self {
        self.helpers_name = name.into();
        self
    }

    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }

    /// Check that the options can be spliced into generated code.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if !is_identifier(&self.helpers_name) {
            return Err(CodegenError::InvalidIdentifier {
                option: "helpersName",
                value: self.helpers_name.clone(),
            });
        }
        if !is_identifier(&self.model_name) {
            return Err(CodegenError::InvalidIdentifier {
                option: "modelName",
                value: self.model_name.clone(),
            });
        }
        if self.debug && self.source.is_none() {
            return Err(CodegenError::MissingSource);
        }
        Ok(())
    }
}
