use crate::config::StyleConfig;
use crate::extractor::{JavaExtractor, SourceFile, Visibility};
use crate::scanner::IndentKind;

use super::{RuleId, Violation};

/// Whitespace, layout, and structure rules evaluated against line records
/// and the symbol model.
pub struct StyleChecker<'a> {
    config: &'a StyleConfig,
}

impl<'a> StyleChecker<'a> {
    #[must_use]
    pub const fn new(config: &'a StyleConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, file: &SourceFile, out: &mut Vec<Violation>) {
        self.check_lines(file, out);
        self.check_public_classes(file, out);
        self.check_fields(file, out);
        self.check_methods(file, out);
    }

    /// Tab, indentation-width, and line-length rules. None of these fire on
    /// a line whose visible content after masking is empty, nor on lines
    /// inside a multi-line comment.
    fn check_lines(&self, file: &SourceFile, out: &mut Vec<Violation>) {
        let limit = self.config.line_length_limit();
        let step = self.config.indentation.spaces_per_indent;

        for record in &file.lines {
            if record.starts_in_comment || record.is_blank() {
                continue;
            }

            if self.config.no_tabs
                && matches!(record.indent, IndentKind::Tabs | IndentKind::Mixed)
            {
                out.push(Violation::new(
                    RuleId::TabCharacter,
                    &file.path,
                    record.number,
                    "tab found in indentation (use spaces)",
                ));
            }

            if matches!(record.indent, IndentKind::Spaces)
                && step > 0
                && record.indent_width % step != 0
            {
                out.push(Violation::new(
                    RuleId::IndentWidth,
                    &file.path,
                    record.number,
                    format!(
                        "indent of {} spaces is not a multiple of {step}",
                        record.indent_width
                    ),
                ));
            }

            if let Some(max) = limit
                && record.visible_len > max
            {
                out.push(Violation::new(
                    RuleId::LineLength,
                    &file.path,
                    record.number,
                    format!("line length {} exceeds {max}", record.visible_len),
                ));
            }
        }
    }

    fn check_public_classes(&self, file: &SourceFile, out: &mut Vec<Violation>) {
        if !self.config.one_public_class_per_file {
            return;
        }
        let publics: Vec<_> = file.classes.iter().filter(|c| c.is_public()).collect();
        if publics.len() > 1 {
            out.push(Violation::new(
                RuleId::MultiplePublicClasses,
                &file.path,
                publics[1].line,
                format!("{} public types in one file (expected 1)", publics.len()),
            ));
        }
    }

    fn check_fields(&self, file: &SourceFile, out: &mut Vec<Violation>) {
        if !self.config.disallow_global_variables {
            return;
        }
        for class in &file.classes {
            for field in &class.fields {
                // static final constants are exempt
                if field.modifiers.is_static && !field.is_constant() {
                    out.push(Violation::new(
                        RuleId::StaticField,
                        &file.path,
                        field.line,
                        format!("static field '{}' not allowed", field.name),
                    ));
                }
            }
        }
    }

    fn check_methods(&self, file: &SourceFile, out: &mut Vec<Violation>) {
        for class in &file.classes {
            for method in &class.methods {
                if self.config.no_empty_methods && method.is_empty && !method.modifiers.is_abstract
                {
                    out.push(Violation::new(
                        RuleId::EmptyMethod,
                        &file.path,
                        method.line,
                        format!("method '{}' has an empty body", method.name),
                    ));
                }

                if self.config.no_unused_methods
                    && matches!(method.modifiers.visibility, Visibility::Private)
                    && !method.is_constructor
                    && !JavaExtractor::is_lifecycle_name(&method.name)
                    && !file.is_called_outside(&method.name, method)
                {
                    out.push(Violation::new(
                        RuleId::UnusedPrivateMethod,
                        &file.path,
                        method.line,
                        format!("private method '{}' is never called", method.name),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
