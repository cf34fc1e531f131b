//! File signature: module-level facts about the file being completed.
//!
//! The normalizer needs to know which names a file imports (and from where)
//! to print references to them. The signature is derived from the typed tree
//! once per request and handed to every normalization call.

use indexmap::IndexMap;
use tjs_ast::{Program, Statement};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSig {
    /// Local binding name -> module specifier.
    pub imports: IndexMap<String, String>,
}

impl FileSig {
    pub fn from_program<A>(program: &Program<A>) -> Self {
        let mut imports = IndexMap::new();
        for stmt in &program.body {
            if let Statement::ImportDeclaration {
                specifiers, source, ..
            } = stmt
            {
                for id in specifiers {
                    imports
                        .entry(id.name.clone())
                        .or_insert_with(|| source.clone());
                }
            }
        }
        FileSig { imports }
    }

    /// Module a local name was imported from.
    pub fn import_source(&self, local: &str) -> Option<&str> {
        self.imports.get(local).map(String::as_str)
    }
}
