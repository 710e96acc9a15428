use std::path::{Path, PathBuf};

use crate::scanner::LineRecord;

use super::javadoc::JavadocBlock;

/// Declared visibility of a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// No explicit modifier (package-private).
    #[default]
    Package,
}

/// Kind of top-level type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
}

/// Modifier set recovered from a declaration line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
}

impl Modifiers {
    /// Parse a whitespace-separated modifier prefix (e.g. `public static final`).
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut modifiers = Self::default();
        for word in text.split_whitespace() {
            match word {
                "public" => modifiers.visibility = Visibility::Public,
                "protected" => modifiers.visibility = Visibility::Protected,
                "private" => modifiers.visibility = Visibility::Private,
                "static" => modifiers.is_static = true,
                "final" => modifiers.is_final = true,
                "abstract" => modifiers.is_abstract = true,
                _ => {}
            }
        }
        modifiers
    }
}

/// A field declared at class body depth.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub name: String,
    pub modifiers: Modifiers,
    /// 1-based declaration line.
    pub line: usize,
}

impl FieldDecl {
    /// Static fields are disallowed as globals unless they are constants.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.modifiers.is_static && self.modifiers.is_final
    }
}

/// A method or constructor declared at class body depth.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: String,
    pub modifiers: Modifiers,
    pub is_constructor: bool,
    /// Declared return type; empty for constructors.
    pub return_type: String,
    pub param_names: Vec<String>,
    /// 1-based declaration line.
    pub line: usize,
    /// Body line span (declaration line through closing brace); `None` for
    /// abstract or interface methods without a body.
    pub body_span: Option<(usize, usize)>,
    /// The body contains no statement after masking and trimming.
    pub is_empty: bool,
    pub javadoc: Option<JavadocBlock>,
    /// Annotation names attached above the declaration (without `@`).
    pub annotations: Vec<String>,
    /// Identifiers that appear as call tokens (`name(`) inside the body.
    pub call_tokens: Vec<String>,
    /// The name matches the configured test-method prefix.
    pub is_test_candidate: bool,
}

impl MethodDecl {
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.param_names.len()
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        self.return_type == "void"
    }

    #[must_use]
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a == name)
    }

    #[must_use]
    pub fn calls(&self, name: &str) -> bool {
        self.call_tokens.iter().any(|t| t == name)
    }
}

/// A top-level type declaration.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    pub kind: ClassKind,
    pub modifiers: Modifiers,
    /// Declared superclass name, if any. Resolved only against classes
    /// scanned in the same run.
    pub extends: Option<String>,
    /// 1-based declaration line.
    pub line: usize,
    /// Declaration line through closing brace.
    pub span: (usize, usize),
    pub javadoc: Option<JavadocBlock>,
    pub annotations: Vec<String>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(self.modifiers.visibility, Visibility::Public)
    }

    /// Find a non-constructor method by name and parameter count.
    #[must_use]
    pub fn find_method(&self, name: &str, param_count: usize) -> Option<&MethodDecl> {
        self.methods
            .iter()
            .find(|m| !m.is_constructor && m.name == name && m.param_count() == param_count)
    }
}

/// A warning raised when the extractor could not confidently delimit a
/// construct. Recoverable: the run continues, the warning becomes a
/// violation in the output.
#[derive(Debug, Clone)]
pub struct StructuralIssue {
    pub line: usize,
    pub message: String,
}

/// The symbol model of one scanned Java file.
///
/// Owned by a single analysis run and immutable once built.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub lines: Vec<LineRecord>,
    pub classes: Vec<ClassDecl>,
    pub issues: Vec<StructuralIssue>,
}

impl SourceFile {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `name` appears as a call token in any method other than
    /// `except` (a method calling itself does not count as a use).
    #[must_use]
    pub fn is_called_outside(&self, name: &str, except: &MethodDecl) -> bool {
        self.classes.iter().any(|class| {
            class
                .methods
                .iter()
                .filter(|m| !std::ptr::eq(*m, except))
                .any(|m| m.calls(name))
        })
    }

    /// The file name looks like a JUnit test class (`FooTest.java`).
    #[must_use]
    pub fn is_test_file(&self) -> bool {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with("Test.java"))
    }
}
