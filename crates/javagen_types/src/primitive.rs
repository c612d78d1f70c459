// javagen_types/primitive - Closed set of Java primitive kinds
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The nine Java primitive kinds, `void` included.
///
/// Each kind knows its literal spelling and the simple name of its boxed
/// counterpart. Lookup is strict: exact spelling, case-sensitive, no trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Void,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Char,
}

impl Primitive {
    /// Every primitive kind, in declaration order.
    pub const ALL: [Primitive; 9] = [
        Primitive::Void,
        Primitive::Byte,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
        Primitive::Boolean,
        Primitive::Char,
    ];

    /// The literal Java spelling, e.g. `"int"`.
    pub fn spelling(&self) -> &'static str {
        match self {
            Primitive::Void => "void",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Boolean => "boolean",
            Primitive::Char => "char",
        }
    }

    /// Simple name of the boxed counterpart, e.g. `"Integer"` for `int`.
    pub fn wrapper_name(&self) -> &'static str {
        match self {
            Primitive::Void => "Void",
            Primitive::Byte => "Byte",
            Primitive::Short => "Short",
            Primitive::Int => "Integer",
            Primitive::Long => "Long",
            Primitive::Float => "Float",
            Primitive::Double => "Double",
            Primitive::Boolean => "Boolean",
            Primitive::Char => "Character",
        }
    }

    /// Looks up a primitive by its exact spelling.
    pub fn from_spelling(spelling: &str) -> Result<Primitive, TypeError> {
        Primitive::ALL
            .iter()
            .copied()
            .find(|primitive| primitive.spelling() == spelling)
            .ok_or_else(|| TypeError::UnknownPrimitive {
                spelling: spelling.to_string(),
            })
    }

    /// Membership test over the nine spellings. Never fails.
    pub fn contains(spelling: &str) -> bool {
        Primitive::ALL
            .iter()
            .any(|primitive| primitive.spelling() == spelling)
    }
}
