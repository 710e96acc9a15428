use regex::Regex;

use crate::config::TestingConfig;
use crate::extractor::{MethodDecl, SourceFile, Visibility};

use super::{RuleId, Violation};

/// Testing-convention rules. All of them apply only to test classes
/// (`*Test.java`); production files are never scanned for them.
pub struct TestingChecker<'a> {
    config: &'a TestingConfig,
    assert_pattern: Regex,
    float_pattern: Regex,
}

impl<'a> TestingChecker<'a> {
    #[must_use]
    pub fn new(config: &'a TestingConfig) -> Self {
        Self {
            config,
            assert_pattern: Regex::new(r"\bassertEquals\s*\(").expect("Invalid regex"),
            float_pattern: Regex::new(r"\d+\.\d+").expect("Invalid regex"),
        }
    }

    pub fn check(&self, file: &SourceFile, out: &mut Vec<Violation>) {
        if !file.is_test_file() {
            return;
        }

        for class in &file.classes {
            for method in &class.methods {
                self.check_annotation(file, method, out);
                self.check_prefix(file, method, out);
                if self.config.require_assert_equals_delta {
                    self.check_assert_delta(file, method, out);
                }
            }
        }
    }

    fn check_annotation(&self, file: &SourceFile, method: &MethodDecl, out: &mut Vec<Violation>) {
        if self.config.annotation_required
            && method.is_test_candidate
            && matches!(method.modifiers.visibility, Visibility::Public)
            && !method.has_annotation("Test")
        {
            out.push(Violation::new(
                RuleId::MissingTestAnnotation,
                &file.path,
                method.line,
                format!("test method '{}' missing @Test annotation", method.name),
            ));
        }
    }

    fn check_prefix(&self, file: &SourceFile, method: &MethodDecl, out: &mut Vec<Violation>) {
        let prefix = &self.config.test_methods_prefix;
        if prefix.is_empty() || method.is_constructor {
            return;
        }
        if matches!(method.modifiers.visibility, Visibility::Public)
            && method.is_void()
            && !method.name.starts_with(prefix)
        {
            out.push(Violation::new(
                RuleId::TestNamePrefix,
                &file.path,
                method.line,
                format!("test method '{}' must start with '{prefix}'", method.name),
            ));
        }
    }

    /// Two-argument `assertEquals` where either argument carries a
    /// floating-point literal needs a third delta argument.
    fn check_assert_delta(&self, file: &SourceFile, method: &MethodDecl, out: &mut Vec<Violation>) {
        let Some((start, end)) = method.body_span else {
            return;
        };

        let body_lines = &file.lines[start - 1..end];
        let joined: String = body_lines
            .iter()
            .map(|l| l.masked.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        for m in self.assert_pattern.find_iter(&joined) {
            let Some(args_text) = balanced_args(&joined[m.end()..]) else {
                continue;
            };
            let args = split_call_args(args_text);
            if args.len() == 2
                && args.iter().any(|a| self.float_pattern.is_match(a))
            {
                let line = start + joined[..m.start()].matches('\n').count();
                out.push(Violation::new(
                    RuleId::MissingAssertDelta,
                    &file.path,
                    line,
                    "assertEquals on floating-point values missing delta argument",
                ));
            }
        }
    }
}

/// Text up to the parenthesis balancing an already-open call, or `None` if
/// the call never closes.
fn balanced_args(text: &str) -> Option<&str> {
    let mut depth = 1;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split call arguments on top-level commas.
fn split_call_args(text: &str) -> Vec<&str> {
    let mut args = Vec::new();
    let mut depth = 0;
    let mut last = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                args.push(text[last..i].trim());
                last = i + 1;
            }
            _ => {}
        }
    }
    let tail = text[last..].trim();
    if !tail.is_empty() {
        args.push(tail);
    }
    args
}

#[cfg(test)]
#[path = "testing_tests.rs"]
mod tests;
