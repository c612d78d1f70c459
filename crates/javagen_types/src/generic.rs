// javagen_types/generic - Generic parameter slots and their upper bounds
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::java_type::JavaType;

/// One generic slot: the parameter's own type plus an ordered, duplicate-free
/// list of upper bounds.
///
/// Renders `T`, `T extends Number`, `T extends Number&Serializable` and the
/// angle-bracket-wrapped forms. The base type is optional; an absent base
/// renders as an empty segment rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JavaGenericType {
    base: Option<JavaType>,
    bounds: Vec<JavaType>,
}

impl JavaGenericType {
    pub fn new(base: impl Into<Option<JavaType>>) -> Self {
        Self {
            base: base.into(),
            bounds: Vec::new(),
        }
    }

    pub fn base(&self) -> Option<&JavaType> {
        self.base.as_ref()
    }

    pub fn set_base(&mut self, base: impl Into<Option<JavaType>>) {
        self.base = base.into();
    }

    pub fn bounds(&self) -> &[JavaType] {
        &self.bounds
    }

    /// Appends an upper bound. Returns false and leaves the list untouched
    /// when a structurally equal bound is already present.
    pub fn add_bound(&mut self, bound: JavaType) -> bool {
        if self.bounds.contains(&bound) {
            return false;
        }
        self.bounds.push(bound);
        true
    }

    /// Replaces the bound list wholesale. No dedup is applied; callers that
    /// need the invariant go through [`JavaGenericType::add_bound`].
    pub fn set_bounds(&mut self, bounds: Vec<JavaType>) {
        self.bounds = bounds;
    }

    /// Unqualified rendering of the slot, bounds joined with `&`.
    pub fn simple_type(&self) -> String {
        let base = self
            .base
            .as_ref()
            .map(JavaType::simple_type)
            .unwrap_or_default();
        if self.bounds.is_empty() {
            return base;
        }
        let bounds: Vec<String> = self.bounds.iter().map(JavaType::simple_type).collect();
        format!("{} extends {}", base, bounds.join("&"))
    }

    /// Fully-qualified rendering of the slot, bounds joined with `&`.
    pub fn canonical_type(&self) -> String {
        let base = self
            .base
            .as_ref()
            .map(JavaType::canonical_type)
            .unwrap_or_default();
        if self.bounds.is_empty() {
            return base;
        }
        let bounds: Vec<String> = self.bounds.iter().map(JavaType::canonical_type).collect();
        format!("{} extends {}", base, bounds.join("&"))
    }

    /// The simple form wrapped in angle brackets, e.g. `<T extends Number>`.
    pub fn wrapped_simple_type(&self) -> String {
        format!("<{}>", self.simple_type())
    }

    /// The canonical form wrapped in angle brackets.
    pub fn wrapped_canonical_type(&self) -> String {
        format!("<{}>", self.canonical_type())
    }
}

impl fmt::Display for JavaGenericType {
    /// The wrapped canonical form, e.g. `<? extends java.lang.String>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wrapped_canonical_type())
    }
}

impl From<JavaType> for JavaGenericType {
    fn from(base: JavaType) -> Self {
        Self::new(base)
    }
}
