// javagen_types - Java type descriptors and rendering for source generation
//! Core type model used by the javagen source generator.
//!
//! A [`JavaType`] records one type usage: simple name, optional package, array
//! dimension and generic arguments. [`JavaGenericType`] models one generic
//! slot together with its upper bounds. The [`factory`] module provides
//! well-known descriptors, primitive/wrapper conversions and the array-suffix
//! parser. Rendering produces the two textual forms the emitter needs: the
//! unqualified simple form and the fully-qualified canonical form.

pub mod error;
pub mod factory;
pub mod generic;
pub mod java_type;
pub mod primitive;

pub use error::TypeError;
pub use factory::ClassRef;
pub use generic::JavaGenericType;
pub use java_type::{JavaType, JAVA_LANG};
pub use primitive::Primitive;
