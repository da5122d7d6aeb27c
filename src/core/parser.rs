//! SWC adapter: parse module text and classify top-level statements.

use std::path::Path;

use swc_common::{FileName, SourceMap};
use swc_ecma_ast::{Decl, ImportDecl, Module, ModuleDecl, ModuleItem, Stmt, VarDecl, VarDeclarator};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use super::error::ConvertError;

/// A parsed translation module: the syntax tree plus the source text it was
/// parsed from. Immutable after parse.
pub struct ParsedModule {
    pub module: Module,
    pub source: String,
}

/// Parse TypeScript source code into an AST.
///
/// Translation modules are plain `.ts` files, so tsx is disabled. A parse
/// failure abandons the enclosing conversion for this module only.
pub fn parse_module_source(code: String, file_path: &Path) -> Result<ParsedModule, ConvertError> {
    let source_map = SourceMap::default();
    let source_file =
        source_map.new_source_file(FileName::Real(file_path.to_path_buf()).into(), code.clone());

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: false,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    let module = parser.parse_module().map_err(|e| ConvertError::Parse {
        path: file_path.to_path_buf(),
        message: format!("{:?}", e),
    })?;
    Ok(ParsedModule {
        module,
        source: code,
    })
}

impl ParsedModule {
    /// Top-level import statements, in source order.
    pub fn import_decls(&self) -> impl Iterator<Item = &ImportDecl> {
        self.module.body.iter().filter_map(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => Some(import),
            _ => None,
        })
    }

    /// Top-level variable declarators, in source order. Covers both plain
    /// and `export`-prefixed declarations.
    pub fn var_declarators(&self) -> impl Iterator<Item = &VarDeclarator> {
        self.module
            .body
            .iter()
            .filter_map(top_level_var)
            .flat_map(|var| var.decls.iter())
    }

    /// Whether the module has any import statements.
    pub fn has_imports(&self) -> bool {
        self.import_decls().next().is_some()
    }
}

fn top_level_var(item: &ModuleItem) -> Option<&VarDecl> {
    match item {
        ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) => Some(var),
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => match &export.decl {
            Decl::Var(var) => Some(var),
            _ => None,
        },
        _ => None,
    }
}
