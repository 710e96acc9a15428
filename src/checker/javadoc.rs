use crate::config::StyleConfig;
use crate::extractor::{ClassDecl, MethodDecl, SourceFile, Visibility};

use super::{RuleId, Violation};

/// Javadoc presence and required-tag rules.
///
/// Tag checks apply only where a Javadoc block was attached; a declaration
/// with no block degrades to "missing Javadoc" (when that rule is on) rather
/// than a cascade of missing-tag violations.
pub struct JavadocChecker<'a> {
    config: &'a StyleConfig,
}

impl<'a> JavadocChecker<'a> {
    #[must_use]
    pub const fn new(config: &'a StyleConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, file: &SourceFile, out: &mut Vec<Violation>) {
        for class in &file.classes {
            self.check_class(file, class, out);
            for method in &class.methods {
                self.check_method(file, method, out);
            }
        }
    }

    fn check_class(&self, file: &SourceFile, class: &ClassDecl, out: &mut Vec<Violation>) {
        if class.is_public() && self.config.javadoc_required && class.javadoc.is_none() {
            out.push(Violation::new(
                RuleId::MissingClassJavadoc,
                &file.path,
                class.line,
                format!("missing Javadoc for class {}", class.name),
            ));
        }

        let Some(doc) = &class.javadoc else {
            return;
        };
        if self.config.javadoc_require_author && !doc.has_tag("author") {
            out.push(Violation::new(
                RuleId::MissingJavadocTag,
                &file.path,
                class.line,
                format!("class {} Javadoc missing @author", class.name),
            ));
        }
        if self.config.javadoc_require_version && !doc.has_tag("version") {
            out.push(Violation::new(
                RuleId::MissingJavadocTag,
                &file.path,
                class.line,
                format!("class {} Javadoc missing @version", class.name),
            ));
        }
    }

    fn check_method(&self, file: &SourceFile, method: &MethodDecl, out: &mut Vec<Violation>) {
        // Constructors and non-exported methods are not documented per
        // course convention.
        if method.is_constructor
            || !matches!(
                method.modifiers.visibility,
                Visibility::Public | Visibility::Protected
            )
        {
            return;
        }

        if self.config.javadoc_required && method.javadoc.is_none() {
            out.push(Violation::new(
                RuleId::MissingMethodJavadoc,
                &file.path,
                method.line,
                format!("missing Javadoc for method {}()", method.name),
            ));
        }

        let Some(doc) = &method.javadoc else {
            return;
        };

        if self.config.javadoc_require_params {
            for param in undocumented_params(method, doc.tag_leading_tokens("param")) {
                out.push(Violation::new(
                    RuleId::MissingJavadocTag,
                    &file.path,
                    method.line,
                    format!(
                        "method {}() Javadoc missing @param for '{param}'",
                        method.name
                    ),
                ));
            }
        }

        if self.config.javadoc_require_return && !method.is_void() && !doc.has_tag("return") {
            out.push(Violation::new(
                RuleId::MissingJavadocTag,
                &file.path,
                method.line,
                format!("method {}() Javadoc missing @return", method.name),
            ));
        }
    }
}

/// Parameters lacking a `@param` tag. A tag naming the parameter covers it;
/// tags that name no declared parameter still cover one undocumented
/// parameter each, so the violation count never exceeds the difference
/// between parameter count and tag count.
fn undocumented_params<'m>(method: &'m MethodDecl, tag_names: Vec<&str>) -> Vec<&'m str> {
    let mut floating = tag_names;
    let mut uncovered: Vec<&'m str> = Vec::new();

    for param in &method.param_names {
        if let Some(pos) = floating.iter().position(|t| *t == param.as_str()) {
            floating.remove(pos);
        } else {
            uncovered.push(param.as_str());
        }
    }

    // Each remaining unmatched tag forgives one uncovered parameter.
    uncovered.split_off(floating.len().min(uncovered.len()))
}

#[cfg(test)]
#[path = "javadoc_tests.rs"]
mod tests;
