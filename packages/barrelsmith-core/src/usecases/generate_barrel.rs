//! Generate-barrel use case.
//!
//! Orchestrates read -> parse -> extract -> build for a list of input
//! modules. Extraction fans out across threads; aggregation itself is
//! sequential and pure, so generated bytes never depend on scheduling.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::errors::Result;
use crate::features::codegen::{BuildArg, UnionModuleBuilder};
use crate::features::parsing::domain::{ExportScope, ModuleDeclarations};
use crate::features::parsing::infrastructure::{extract_declarations, TypeScriptParser};

/// One input module plus its optional naming overrides.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub path: PathBuf,
    pub import_alias: Option<String>,
    pub enum_wrapper: Option<String>,
}

impl SourceSpec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            import_alias: None,
            enum_wrapper: None,
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

/// Options applied to the generated module as a whole.
#[derive(Debug, Clone, Default)]
pub struct BarrelOptions {
    pub header: Option<String>,
    pub indent: Option<String>,
}

/// Reads modules from disk and produces the generated barrel text.
pub struct GenerateBarrelUseCase {
    scope: ExportScope,
}

impl GenerateBarrelUseCase {
    pub fn new(scope: ExportScope) -> Self {
        Self { scope }
    }

    /// Parse one module from disk and extract its declarations.
    pub fn extract_file(&self, path: &Path) -> Result<ModuleDeclarations> {
        let mut parser = TypeScriptParser::new()?;
        let (source, tree) = parser.parse_file(path)?;
        let decls = extract_declarations(tree.root_node(), &source, self.scope);
        debug!(
            path = %path.display(),
            interfaces = decls.interfaces.len(),
            types = decls.types.len(),
            enums = decls.enums.len(),
            union_enums = decls.union_enums.len(),
            "extracted module declarations"
        );
        Ok(decls)
    }

    /// Extract every input. Files are processed in parallel; the returned
    /// args keep input order.
    pub fn extract_all(&self, sources: &[SourceSpec]) -> Result<Vec<BuildArg>> {
        sources
            .par_iter()
            .map(|spec| {
                let decls = self.extract_file(&spec.path)?;
                let mut arg =
                    BuildArg::new(spec.path.to_string_lossy().into_owned(), decls);
                if let Some(alias) = &spec.import_alias {
                    arg = arg.with_import_alias(alias.clone());
                }
                if let Some(wrapper) = &spec.enum_wrapper {
                    arg = arg.with_enum_wrapper(wrapper.clone());
                }
                Ok(arg)
            })
            .collect()
    }

    /// Extract all inputs and build the barrel module text.
    pub fn execute(&self, sources: &[SourceSpec], options: &BarrelOptions) -> Result<String> {
        let args = self.extract_all(sources)?;

        let mut builder = UnionModuleBuilder::new();
        if let Some(header) = &options.header {
            builder = builder.with_header(header);
        }
        if let Some(indent) = &options.indent {
            builder = builder.with_indent(indent.clone());
        }
        builder.build(args)?;
        Ok(builder.output().to_string())
    }
}

impl Default for GenerateBarrelUseCase {
    fn default() -> Self {
        Self::new(ExportScope::default())
    }
}
