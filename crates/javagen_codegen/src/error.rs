// javagen_codegen/error - Failures raised while rendering declarations
use thiserror::Error;

/// Error variants produced while rendering a declaration model to source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeGenError {
    #[error("Class declaration has no name")]
    NamelessClass,

    #[error("Abstract method '{name}' must not carry a body")]
    AbstractMethodWithBody { name: String },

    #[error("Abstract method '{name}' requires an abstract class")]
    AbstractMethodInConcreteClass { name: String },
}
