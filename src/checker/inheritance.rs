use std::collections::HashMap;

use crate::config::StyleConfig;
use crate::extractor::{ClassDecl, ClassKind, SourceFile};

use super::{RuleId, Violation};

/// Class declarations indexed by name across every file in the run.
///
/// Override enforcement resolves ancestors only within the scanned set;
/// an `extends` naming a class outside it is silently skipped (cross-project
/// classpath resolution is out of scope).
pub struct AncestorIndex<'a> {
    classes: HashMap<&'a str, &'a ClassDecl>,
}

impl<'a> AncestorIndex<'a> {
    #[must_use]
    pub fn build(files: &'a [SourceFile]) -> Self {
        let mut classes = HashMap::new();
        for file in files {
            for class in &file.classes {
                classes.entry(class.name.as_str()).or_insert(class);
            }
        }
        Self { classes }
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'a ClassDecl> {
        self.classes.get(name).copied()
    }
}

/// `@Override` enforcement against the directly named superclass.
pub struct InheritanceChecker<'a> {
    config: &'a StyleConfig,
}

impl<'a> InheritanceChecker<'a> {
    #[must_use]
    pub const fn new(config: &'a StyleConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, file: &SourceFile, index: &AncestorIndex<'_>, out: &mut Vec<Violation>) {
        if !self.config.require_override {
            return;
        }

        for class in &file.classes {
            if !matches!(class.kind, ClassKind::Class) {
                continue;
            }
            let Some(parent_name) = &class.extends else {
                continue;
            };
            let Some(parent) = index.lookup(parent_name) else {
                continue;
            };

            for method in &class.methods {
                if method.is_constructor {
                    continue;
                }
                if parent
                    .find_method(&method.name, method.param_count())
                    .is_some()
                    && !method.has_annotation("Override")
                {
                    out.push(Violation::new(
                        RuleId::MissingOverride,
                        &file.path,
                        method.line,
                        format!(
                            "method {}() overrides {}.{}() but lacks @Override",
                            method.name, parent_name, method.name
                        ),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "inheritance_tests.rs"]
mod tests;
