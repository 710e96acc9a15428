mod javadoc;
mod model;

pub use javadoc::JavadocBlock;
pub use model::{
    ClassDecl, ClassKind, FieldDecl, MethodDecl, Modifiers, SourceFile, StructuralIssue, Visibility,
};

use std::path::Path;

use regex::{Captures, Regex};

use crate::scanner::LineRecord;

/// Keywords that can open a statement; a signature-shaped match whose type
/// or name position holds one of these is a statement, not a declaration.
const STATEMENT_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "return", "throw", "new", "try",
    "catch", "finally", "break", "continue", "assert", "super", "this",
];

/// Method names exempt from the unused-private-method rule.
const LIFECYCLE_NAMES: &[&str] = &[
    "main",
    "setUp",
    "tearDown",
    "setUpBeforeClass",
    "tearDownAfterClass",
];

/// Best-effort structural extractor: recovers classes, fields, methods, and
/// their attached Javadoc/annotations from masked lines by brace-depth
/// tracking, without a full Java grammar.
///
/// Malformed input degrades gracefully: open declarations are closed at end
/// of file and a structural issue is recorded instead of aborting.
pub struct JavaExtractor {
    class_pattern: Regex,
    extends_pattern: Regex,
    method_pattern: Regex,
    ctor_pattern: Regex,
    field_pattern: Regex,
    call_pattern: Regex,
    test_prefix: String,
}

impl JavaExtractor {
    #[must_use]
    pub fn new(test_prefix: &str) -> Self {
        Self {
            class_pattern: Regex::new(
                r"^\s*((?:(?:public|protected|private|abstract|final|static|strictfp)\s+)*)(class|interface|enum)\s+([A-Za-z_$][\w$]*)",
            )
            .expect("Invalid regex"),
            extends_pattern: Regex::new(r"\bextends\s+([A-Za-z_$][\w$.]*)")
                .expect("Invalid regex"),
            method_pattern: Regex::new(
                r"^\s*((?:(?:public|protected|private|static|final|abstract|synchronized|native|strictfp|default)\s+)*)(?:<[^>]+>\s*)?([A-Za-z_$][\w$.<>\[\],\s]*?)\s+([A-Za-z_$][\w$]*)\s*\(([^()]*)\)",
            )
            .expect("Invalid regex"),
            ctor_pattern: Regex::new(
                r"^\s*((?:(?:public|protected|private)\s+)*)([A-Za-z_$][\w$]*)\s*\(([^()]*)\)",
            )
            .expect("Invalid regex"),
            field_pattern: Regex::new(
                r"^\s*((?:(?:public|protected|private|static|final|transient|volatile)\s+)*)([A-Za-z_$][\w$.<>\[\],\s]*?)\s+([A-Za-z_$][\w$]*)\s*(?:\[\s*\]\s*)*(=[^;]*)?;\s*$",
            )
            .expect("Invalid regex"),
            call_pattern: Regex::new(r"([A-Za-z_$][\w$]*)\s*\(").expect("Invalid regex"),
            test_prefix: test_prefix.to_string(),
        }
    }

    /// Whether a private method name is exempt from the unused check.
    #[must_use]
    pub fn is_lifecycle_name(name: &str) -> bool {
        LIFECYCLE_NAMES.contains(&name)
    }

    /// Build the symbol model for one file from its scanned line records.
    #[must_use]
    pub fn extract(
        &self,
        path: &Path,
        lines: Vec<LineRecord>,
        unterminated_comment: bool,
    ) -> SourceFile {
        let mut classes = Vec::new();
        let mut issues = Vec::new();

        if unterminated_comment {
            issues.push(StructuralIssue {
                line: lines.len().max(1),
                message: "unterminated block comment at end of file".to_string(),
            });
        }

        let mut depth: i64 = 0;
        let mut i = 0;
        while i < lines.len() {
            let masked = &lines[i].masked;
            if depth == 0
                && let Some(caps) = self.class_pattern.captures(masked)
            {
                let end = find_block_end(&lines, i).unwrap_or_else(|| {
                    issues.push(StructuralIssue {
                        line: lines[i].number,
                        message: format!(
                            "unbalanced braces: type declaration at line {} not closed",
                            lines[i].number
                        ),
                    });
                    lines.len() - 1
                });
                classes.push(self.extract_class(&lines, i, end, &caps, &mut issues));
                i = end + 1;
                continue;
            }
            depth += brace_delta(masked);
            i += 1;
        }

        SourceFile {
            path: path.to_path_buf(),
            lines,
            classes,
            issues,
        }
    }

    fn extract_class(
        &self,
        lines: &[LineRecord],
        start: usize,
        end: usize,
        caps: &Captures<'_>,
        issues: &mut Vec<StructuralIssue>,
    ) -> ClassDecl {
        let modifiers = Modifiers::parse(caps.get(1).map_or("", |m| m.as_str()));
        let kind = match caps.get(2).map_or("", |m| m.as_str()) {
            "interface" => ClassKind::Interface,
            "enum" => ClassKind::Enum,
            _ => ClassKind::Class,
        };
        let name = caps.get(3).map_or("", |m| m.as_str()).to_string();
        let extends = self
            .extends_pattern
            .captures(&lines[start].masked)
            .map(|c| c[1].to_string());

        let (javadoc, annotations) = self.attach_preceding(lines, start);

        let mut fields = Vec::new();
        let mut methods = Vec::new();
        let mut depth: i64 = 0;

        for j in start..=end {
            let masked = &lines[j].masked;
            if j > start && depth == 1 {
                if let Some(method) = self.match_member(lines, j, &name, issues) {
                    methods.push(method);
                } else if let Some(field) = self.match_field(lines, j) {
                    fields.push(field);
                }
            }
            depth += brace_delta(masked);
        }

        ClassDecl {
            name,
            kind,
            modifiers,
            extends,
            line: lines[start].number,
            span: (lines[start].number, lines[end].number),
            javadoc,
            annotations,
            fields,
            methods,
        }
    }

    /// Try to read a method or constructor declaration starting at line `j`.
    fn match_member(
        &self,
        lines: &[LineRecord],
        j: usize,
        class_name: &str,
        issues: &mut Vec<StructuralIssue>,
    ) -> Option<MethodDecl> {
        let masked = &lines[j].masked;

        if let Some(caps) = self.method_pattern.captures(masked) {
            let return_type = caps[2].trim().to_string();
            let name = caps[3].to_string();
            let first_type_word = return_type.split_whitespace().next().unwrap_or("");
            if !STATEMENT_KEYWORDS.contains(&first_type_word)
                && !STATEMENT_KEYWORDS.contains(&name.as_str())
            {
                let rest = &masked[caps.get(0).map_or(0, |m| m.end())..];
                return Some(self.build_method(
                    lines,
                    j,
                    name,
                    Modifiers::parse(&caps[1]),
                    false,
                    return_type,
                    &caps[4],
                    is_abstract_remainder(rest),
                    issues,
                ));
            }
        }

        if let Some(caps) = self.ctor_pattern.captures(masked)
            && &caps[2] == class_name
        {
            let rest = &masked[caps.get(0).map_or(0, |m| m.end())..];
            // Constructors always have a body; a `;` remainder is a stray
            // call-shaped line, not a declaration.
            if !is_abstract_remainder(rest) {
                return Some(self.build_method(
                    lines,
                    j,
                    class_name.to_string(),
                    Modifiers::parse(&caps[1]),
                    true,
                    String::new(),
                    &caps[3],
                    false,
                    issues,
                ));
            }
        }

        None
    }

    #[allow(clippy::too_many_arguments)]
    fn build_method(
        &self,
        lines: &[LineRecord],
        j: usize,
        name: String,
        modifiers: Modifiers,
        is_constructor: bool,
        return_type: String,
        params: &str,
        is_abstract_decl: bool,
        issues: &mut Vec<StructuralIssue>,
    ) -> MethodDecl {
        let (javadoc, annotations) = self.attach_preceding(lines, j);
        let param_names = split_param_names(params);

        let (body_span, is_empty, call_tokens) = if is_abstract_decl {
            (None, false, Vec::new())
        } else {
            let body_end = find_block_end(lines, j).unwrap_or_else(|| {
                issues.push(StructuralIssue {
                    line: lines[j].number,
                    message: format!(
                        "unbalanced braces: method body at line {} not closed",
                        lines[j].number
                    ),
                });
                lines.len() - 1
            });
            let body = body_text(lines, j, body_end);
            let tokens = self
                .call_pattern
                .captures_iter(&body)
                .map(|c| c[1].to_string())
                .collect();
            (
                Some((lines[j].number, lines[body_end].number)),
                body.trim().is_empty(),
                tokens,
            )
        };

        let is_test_candidate = !is_constructor && name.starts_with(&self.test_prefix);

        MethodDecl {
            name,
            modifiers,
            is_constructor,
            return_type,
            param_names,
            line: lines[j].number,
            body_span,
            is_empty,
            javadoc,
            annotations,
            call_tokens,
            is_test_candidate,
        }
    }

    fn match_field(&self, lines: &[LineRecord], j: usize) -> Option<FieldDecl> {
        let caps = self.field_pattern.captures(&lines[j].masked)?;
        let type_text = caps[2].trim();
        let first_word = type_text.split_whitespace().next().unwrap_or("");
        if STATEMENT_KEYWORDS.contains(&first_word) || first_word == "package" || first_word == "import" {
            return None;
        }
        Some(FieldDecl {
            name: caps[3].to_string(),
            modifiers: Modifiers::parse(&caps[1]),
            line: lines[j].number,
        })
    }

    /// Collect the Javadoc block and annotation lines immediately preceding a
    /// declaration, skipping blank lines. Attachment is positional and
    /// best-effort: a comment separated by any other non-blank line is not
    /// attached.
    fn attach_preceding(
        &self,
        lines: &[LineRecord],
        idx: usize,
    ) -> (Option<JavadocBlock>, Vec<String>) {
        let mut annotations: Vec<String> = Vec::new();
        let mut j = idx;

        while j > 0 {
            j -= 1;
            let raw = lines[j].raw.trim();
            if raw.is_empty() {
                continue;
            }
            if raw.starts_with('@') && !lines[j].starts_in_comment {
                let name: String = raw[1..]
                    .chars()
                    .take_while(|c| c.is_alphanumeric() || *c == '_')
                    .collect();
                if !name.is_empty() {
                    annotations.push(name);
                }
                continue;
            }
            if raw.ends_with("*/") {
                if let Some(block) = parse_javadoc_block(lines, j) {
                    annotations.reverse();
                    return (Some(block), annotations);
                }
            }
            break;
        }

        annotations.reverse();
        (None, annotations)
    }
}

/// Scan upward from the `*/` line to the block opener; only `/**` blocks
/// qualify as Javadoc.
fn parse_javadoc_block(lines: &[LineRecord], close_idx: usize) -> Option<JavadocBlock> {
    let mut k = close_idx;
    loop {
        let trimmed = lines[k].raw.trim_start();
        if trimmed.starts_with("/**") {
            let raw_lines: Vec<&str> = lines[k..=close_idx].iter().map(|l| l.raw.as_str()).collect();
            return Some(JavadocBlock::parse(&raw_lines, lines[k].number));
        }
        if trimmed.starts_with("/*") {
            return None;
        }
        if k == 0 {
            return None;
        }
        k -= 1;
    }
}

/// A declaration remainder (text after the parameter list) ending in `;`
/// with no body brace is an abstract or interface method.
fn is_abstract_remainder(rest: &str) -> bool {
    rest.contains(';') && !rest.contains('{')
}

/// Net brace count of a masked line.
fn brace_delta(masked: &str) -> i64 {
    masked.chars().fold(0, |d, c| match c {
        '{' => d + 1,
        '}' => d - 1,
        _ => d,
    })
}

/// Find the line closing the block that opens at or after `start`.
/// Returns `None` if the block never closes (unbalanced input).
fn find_block_end(lines: &[LineRecord], start: usize) -> Option<usize> {
    let mut depth: i64 = 0;
    let mut started = false;
    for (j, line) in lines.iter().enumerate().skip(start) {
        for c in line.masked.chars() {
            match c {
                '{' => {
                    depth += 1;
                    started = true;
                }
                '}' => depth -= 1,
                _ => {}
            }
        }
        if started && depth <= 0 {
            return Some(j);
        }
    }
    None
}

/// Masked text strictly inside a block: after its first `{`, before its
/// final `}`.
fn body_text(lines: &[LineRecord], start: usize, end: usize) -> String {
    let joined: String = lines[start..=end]
        .iter()
        .map(|l| l.masked.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let Some(open) = joined.find('{') else {
        return String::new();
    };
    let Some(close) = joined.rfind('}') else {
        return String::new();
    };
    if open + 1 >= close {
        return String::new();
    }
    joined[open + 1..close].to_string()
}

/// Parameter names from a parameter list, splitting on top-level commas
/// (commas inside generic arguments do not split).
fn split_param_names(params: &str) -> Vec<String> {
    let trimmed = params.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut angle_depth: i64 = 0;
    for c in trimmed.chars() {
        match c {
            '<' => {
                angle_depth += 1;
                current.push(c);
            }
            '>' => {
                angle_depth -= 1;
                current.push(c);
            }
            ',' if angle_depth == 0 => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        parts.push(current);
    }

    parts
        .iter()
        .filter_map(|p| p.split_whitespace().last())
        .map(|name| {
            name.trim_matches(|c| c == '[' || c == ']' || c == '.')
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
