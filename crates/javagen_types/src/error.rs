// javagen_types/error - Typed failures raised by the type model
use thiserror::Error;

/// Error variants produced by primitive lookup and array-suffix parsing.
///
/// Every other operation in this crate is total over its documented domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("The type '{spelling}' is not a primitive.")]
    UnknownPrimitive { spelling: String },

    #[error("Bad format for array definition. Bad characters: {found}")]
    MalformedArraySuffix { found: String },
}
