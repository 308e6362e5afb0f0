/// Failure of a generation pass.
///
/// None of these are recovered inside the generator: the pass stops and the
/// error goes back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The tree contains a node kind this generator has no rule for. This is a
    /// parser/generator mismatch, not a template error.
    UnknownNodeKind(String),
    /// The tree could not be decoded.
    MalformedTree(String),
    /// `helpers_name` or `model_name` is not usable as an identifier in the
    /// generated code.
    InvalidIdentifier { option: &'static str, value: String },
    /// `debug` is enabled but no template source was supplied for the error
    /// report.
    MissingSource,
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodegenError::UnknownNodeKind(kind) => {
                write!(f, "no generation rule for node kind '{}'", kind)
            }
            CodegenError::MalformedTree(reason) => write!(f, "malformed syntax tree: {}", reason),
            CodegenError::InvalidIdentifier { option, value } => {
                write!(f, "option {} is not a valid identifier: '{}'", option, value)
            }
            CodegenError::MissingSource => {
                f.write_str("debug output requires the original template source")
            }
        }
    }
}

impl std::error::Error for CodegenError {}
