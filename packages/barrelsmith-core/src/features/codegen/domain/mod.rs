//! Domain models and naming rules for generation.

use serde::{Deserialize, Serialize};

use crate::features::parsing::domain::ModuleDeclarations;

/// One source module's contribution to a generated barrel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildArg {
    /// Module path or handle the generated module imports from. A trailing
    /// `.ts` extension is stripped and path separators are normalized to
    /// `/` before use.
    pub source: String,

    /// Alias used for the `import * as` binding. Derived from the
    /// normalized source when absent or blank.
    pub import_alias: Option<String>,

    /// Key under which this module's enums are namespaced in a merged
    /// constant. Defaults to the import alias. Only meaningful when
    /// building from several sources.
    pub enum_wrapper: Option<String>,

    /// The module's extracted declarations.
    pub decls: ModuleDeclarations,
}

impl BuildArg {
    pub fn new(source: impl Into<String>, decls: ModuleDeclarations) -> Self {
        Self {
            source: source.into(),
            import_alias: None,
            enum_wrapper: None,
            decls,
        }
    }

    pub fn with_import_alias(mut self, alias: impl Into<String>) -> Self {
        self.import_alias = Some(alias.into());
        self
    }

    pub fn with_enum_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.enum_wrapper = Some(wrapper.into());
        self
    }
}

/// Normalize a module source identifier: drop a trailing `.ts` extension
/// and use `/` as the only path separator.
pub fn normalize_source(source: &str) -> String {
    let source = source.strip_suffix(".ts").unwrap_or(source);
    source.replace('\\', "/")
}

/// Derive an import alias from a normalized source identifier: take the
/// last path segment, map every character outside `[A-Za-z0-9]` to `_`,
/// collapsing runs into a single `_`.
pub fn derive_import_alias(source: &str) -> String {
    let segment = source.rsplit('/').next().unwrap_or(source);
    let mut alias = String::with_capacity(segment.len());
    let mut prev_underscore = false;
    for ch in segment.chars() {
        if ch.is_ascii_alphanumeric() {
            alias.push(ch);
            prev_underscore = false;
        } else if !prev_underscore {
            alias.push('_');
            prev_underscore = true;
        }
    }
    alias
}

/// Derive a constant-object key from a literal string value.
///
/// The value is lower-cased; a leading ASCII letter is title-cased,
/// anything else (digit, symbol, non-ASCII) gets a `_` prefix instead.
/// Distinct values can derive the same key; the caller keeps the last one.
pub fn derive_constant_key(value: &str) -> String {
    let lowered = value.to_lowercase();
    match lowered.chars().next() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut key = String::with_capacity(lowered.len());
            key.push(first.to_ascii_uppercase());
            key.push_str(&lowered[first.len_utf8()..]);
            key
        }
        _ => format!("_{lowered}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_extension_and_backslashes() {
        assert_eq!(normalize_source("src/models.ts"), "src/models");
        assert_eq!(normalize_source("src\\gen\\models.ts"), "src/gen/models");
        assert_eq!(normalize_source("src/models"), "src/models");
        assert_eq!(normalize_source("models.d.ts"), "models.d");
    }

    #[test]
    fn alias_uses_the_last_segment() {
        assert_eq!(derive_import_alias("src/api/models"), "models");
        assert_eq!(derive_import_alias("models"), "models");
    }

    #[test]
    fn alias_sanitizes_and_collapses() {
        assert_eq!(derive_import_alias("src/my-module.gen"), "my_module_gen");
        assert_eq!(derive_import_alias("a/weird--name..x"), "weird_name_x");
    }

    #[test]
    fn key_title_cases_a_leading_letter() {
        assert_eq!(derive_constant_key("red"), "Red");
        assert_eq!(derive_constant_key("dark blue"), "Dark blue");
    }

    #[test]
    fn key_lower_cases_first() {
        assert_eq!(derive_constant_key("OK"), "Ok");
        assert_eq!(derive_constant_key("Mixed Case"), "Mixed case");
    }

    #[test]
    fn key_prefixes_non_letters() {
        assert_eq!(derive_constant_key("2fa"), "_2fa");
        assert_eq!(derive_constant_key("-flag"), "_-flag");
        assert_eq!(derive_constant_key(""), "_");
    }
}
