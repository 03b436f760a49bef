//! Type-name registry
//!
//! The parser cannot tell `(name) x` apart from a parenthesized expression
//! without knowing which identifiers denote types. The registry holds that
//! set: pre-seeded with the standard typedef names realistic expressions
//! use, plus any caller-supplied names. Read-only during a parse, so one
//! registry can back any number of independent parses.

use rustc_hash::FxHashSet;

/// Standard-library typedef names treated as types out of the box.
const BUILTIN_TYPE_NAMES: &[&str] = &[
    "size_t",
    "ssize_t",
    "ptrdiff_t",
    "wchar_t",
    "intptr_t",
    "uintptr_t",
    "intmax_t",
    "uintmax_t",
    "int8_t",
    "int16_t",
    "int32_t",
    "int64_t",
    "uint8_t",
    "uint16_t",
    "uint32_t",
    "uint64_t",
];

/// Set of identifiers the parser treats as type names.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    names: FxHashSet<String>,
}

impl TypeRegistry {
    /// Create a registry seeded with the built-in typedef names.
    pub fn new() -> Self {
        let names = BUILTIN_TYPE_NAMES
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self { names }
    }

    /// Create a registry with the built-ins plus extra caller-supplied names.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in extra {
            registry.names.insert(name.into());
        }
        registry
    }

    /// Register an additional type name.
    pub fn add(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Whether `name` denotes a type.
    pub fn is_type_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_present() {
        let registry = TypeRegistry::new();
        assert!(registry.is_type_name("size_t"));
        assert!(registry.is_type_name("uint32_t"));
        assert!(!registry.is_type_name("x"));
    }

    #[test]
    fn test_extra_names() {
        let registry = TypeRegistry::with_extra(["mytype_t"]);
        assert!(registry.is_type_name("mytype_t"));
        assert!(registry.is_type_name("size_t"));
    }

    #[test]
    fn test_add() {
        let mut registry = TypeRegistry::new();
        assert!(!registry.is_type_name("handle_t"));
        registry.add("handle_t");
        assert!(registry.is_type_name("handle_t"));
    }
}
