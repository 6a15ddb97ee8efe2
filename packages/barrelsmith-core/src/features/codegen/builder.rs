//! Union module builder.
//!
//! Appends generated TypeScript to an in-memory buffer; writing the buffer
//! anywhere is the caller's job. A builder generates exactly once: a second
//! `build` call fails, zero args finalize an empty body, one arg takes the
//! single-source path, two or more take the multi-source merge path.

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use super::domain::{derive_constant_key, derive_import_alias, normalize_source, BuildArg};
use crate::errors::{BarrelError, Result};
use crate::features::parsing::domain::ModuleDeclarations;

const DEFAULT_INDENT: &str = "    ";

/// Generates one barrel module from any number of source contributions.
pub struct UnionModuleBuilder {
    buffer: String,
    indent: String,
    built: bool,
}

/// A [`BuildArg`] with its source normalized and naming defaults filled in.
struct ResolvedArg {
    source: String,
    alias: String,
    wrapper: String,
    decls: ModuleDeclarations,
}

fn resolve(arg: BuildArg) -> ResolvedArg {
    let source = normalize_source(&arg.source);
    let alias = arg
        .import_alias
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| derive_import_alias(&source));
    let wrapper = arg
        .enum_wrapper
        .filter(|w| !w.trim().is_empty())
        .unwrap_or_else(|| alias.clone());
    ResolvedArg {
        source,
        alias,
        wrapper,
        decls: arg.decls,
    }
}

impl UnionModuleBuilder {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent: DEFAULT_INDENT.to_string(),
            built: false,
        }
    }

    /// Prefix the generated module with a comment block. Each non-blank
    /// line becomes a `// ` line; blank lines are dropped.
    pub fn with_header(mut self, header: &str) -> Self {
        for line in header.split(['\r', '\n']) {
            if !line.trim().is_empty() {
                self.buffer.push_str("// ");
                self.buffer.push_str(line);
                self.buffer.push('\n');
            }
        }
        self
    }

    /// Indentation used inside generated blocks. Default is four spaces.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Generate the module body. Exactly once per builder instance.
    pub fn build(&mut self, mut args: Vec<BuildArg>) -> Result<()> {
        if self.built {
            return Err(BarrelError::AlreadyBuilt);
        }
        self.built = true;
        debug!(sources = args.len(), "generating union module");

        match args.len() {
            0 => {}
            1 => {
                let arg = resolve(args.remove(0));
                self.build_single(&arg);
            }
            _ => {
                let resolved: Vec<ResolvedArg> = args.into_iter().map(resolve).collect();
                self.build_multi(&resolved);
            }
        }
        Ok(())
    }

    /// The generated text. Header-only until `build` has run.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Re-export one module under a single alias.
    fn build_single(&mut self, arg: &ResolvedArg) {
        let decls = &arg.decls;

        let mut type_names: IndexSet<&str> = IndexSet::new();
        for name in decls.interfaces.iter().chain(decls.types.iter()) {
            type_names.insert(name.as_str());
        }
        let union_values = merged_union_values(std::slice::from_ref(arg));

        self.emit_import(arg);
        self.buffer.push('\n');

        for &name in &type_names {
            self.emit_type_alias(name, &format!("{}.{}", arg.alias, name));
        }

        // One re-export list carries all enums, even when there are none.
        let indent = self.indent.clone();
        self.buffer.push_str("export {\n");
        for name in &decls.enums {
            self.buffer.push_str(&indent);
            self.buffer.push_str(name);
            self.buffer.push_str(",\n");
        }
        self.buffer.push_str("} from \"");
        self.buffer.push_str(&arg.source);
        self.buffer.push_str("\";\n");

        for (&name, values) in &union_values {
            self.emit_type_alias(name, &format!("{}.{}", arg.alias, name));
            let entries = derived_entries(name, values.iter().copied());
            self.emit_value_map(name, &entries);
        }
    }

    /// Merge several modules: cross-module type unions, namespaced enum
    /// objects, flat literal-value objects.
    fn build_multi(&mut self, args: &[ResolvedArg]) {
        let mut type_names: IndexSet<&str> = IndexSet::new();
        let mut enum_names: IndexSet<&str> = IndexSet::new();
        for arg in args {
            for name in arg.decls.interfaces.iter().chain(arg.decls.types.iter()) {
                type_names.insert(name.as_str());
            }
            for name in &arg.decls.enums {
                enum_names.insert(name.as_str());
            }
            self.emit_import(arg);
        }
        let union_values = merged_union_values(args);
        self.buffer.push('\n');

        for &name in &type_names {
            let rhs = qualified_union(args, name, |decls| decls.declares_type(name));
            self.emit_type_alias(name, &rhs);
        }

        // Each source's enum object stays behind its wrapper label;
        // members are never merged flat.
        let indent = self.indent.clone();
        for &name in &enum_names {
            let rhs = qualified_union(args, name, |decls| decls.enums.contains(name));
            self.emit_type_alias(name, &rhs);

            self.buffer.push_str("export const ");
            self.buffer.push_str(name);
            self.buffer.push_str(" = {\n");
            for arg in args.iter().filter(|a| a.decls.enums.contains(name)) {
                self.buffer.push_str(&indent);
                self.buffer.push_str(&arg.wrapper);
                self.buffer.push_str(": { ...");
                self.buffer.push_str(&arg.alias);
                self.buffer.push('.');
                self.buffer.push_str(name);
                self.buffer.push_str("},\n");
            }
            self.buffer.push_str("};\n");
        }

        // Literal unions merge into one flat object.
        for (&name, values) in &union_values {
            let rhs = qualified_union(args, name, |decls| decls.declares_union_enum(name));
            self.emit_type_alias(name, &rhs);
            let entries = derived_entries(name, values.iter().copied());
            self.emit_value_map(name, &entries);
        }
    }

    fn emit_import(&mut self, arg: &ResolvedArg) {
        self.buffer.push_str("import * as ");
        self.buffer.push_str(&arg.alias);
        self.buffer.push_str(" from \"");
        self.buffer.push_str(&arg.source);
        self.buffer.push_str("\";\n");
    }

    fn emit_type_alias(&mut self, name: &str, rhs: &str) {
        self.buffer.push_str("export type ");
        self.buffer.push_str(name);
        self.buffer.push_str(" = ");
        self.buffer.push_str(rhs);
        self.buffer.push_str(";\n");
    }

    fn emit_value_map(&mut self, name: &str, entries: &IndexMap<String, &str>) {
        let indent = self.indent.clone();
        self.buffer.push_str("export const ");
        self.buffer.push_str(name);
        self.buffer.push_str(" = {\n");
        for (key, value) in entries {
            self.buffer.push_str(&indent);
            self.buffer.push_str(key);
            self.buffer.push_str(": \"");
            self.buffer.push_str(value);
            self.buffer.push_str("\",\n");
        }
        self.buffer.push_str("} as const;\n");
    }
}

impl Default for UnionModuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Union value sets by name across all args, folding later contributions
/// into the first occurrence of each name.
fn merged_union_values<'a>(args: &'a [ResolvedArg]) -> IndexMap<&'a str, IndexSet<&'a str>> {
    let mut merged: IndexMap<&str, IndexSet<&str>> = IndexMap::new();
    for arg in args {
        for union in &arg.decls.union_enums {
            let entry = merged.entry(union.name.as_str()).or_default();
            for value in &union.values {
                entry.insert(value.as_str());
            }
        }
    }
    merged
}

/// `a.Name | b.Name | ...` across the args whose declarations satisfy
/// `declares`, in arg order. A single declarer yields a union of one.
fn qualified_union<F>(args: &[ResolvedArg], name: &str, declares: F) -> String
where
    F: Fn(&ModuleDeclarations) -> bool,
{
    let mut rhs = String::new();
    for arg in args.iter().filter(|a| declares(&a.decls)) {
        if !rhs.is_empty() {
            rhs.push_str(" | ");
        }
        rhs.push_str(&arg.alias);
        rhs.push('.');
        rhs.push_str(name);
    }
    rhs
}

/// Map literal values to derived keys. A later value whose key collides
/// with an earlier one replaces it; the object ends up with one entry per
/// distinct key.
fn derived_entries<'a, I>(name: &str, values: I) -> IndexMap<String, &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries: IndexMap<String, &'a str> = IndexMap::new();
    for value in values {
        let key = derive_constant_key(value);
        if let Some(previous) = entries.insert(key.clone(), value) {
            if previous != value {
                warn!(
                    union = %name,
                    key = %key,
                    dropped = %previous,
                    kept = %value,
                    "derived key collision, last value wins"
                );
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_args_still_finalizes() {
        let mut builder = UnionModuleBuilder::new();
        builder.build(vec![]).unwrap();

        assert!(builder.is_built());
        assert_eq!(builder.output(), "");
        assert!(matches!(
            builder.build(vec![]),
            Err(BarrelError::AlreadyBuilt)
        ));
    }

    #[test]
    fn header_keeps_non_blank_lines_only() {
        let builder = UnionModuleBuilder::new().with_header("generated\n\n  \ndo not edit");
        assert_eq!(builder.output(), "// generated\n// do not edit\n");
    }

    #[test]
    fn blank_alias_falls_back_to_derivation() {
        let arg = BuildArg::new("src\\api\\user-model.ts", ModuleDeclarations::default())
            .with_import_alias("   ");
        let mut builder = UnionModuleBuilder::new();
        builder.build(vec![arg]).unwrap();

        assert!(builder
            .output()
            .starts_with("import * as user_model from \"src/api/user-model\";\n"));
    }
}
