mod mask;

pub use mask::{LiteralMasker, MaskedLine};

/// Kind of leading whitespace on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentKind {
    /// No leading whitespace.
    None,
    /// Spaces only.
    Spaces,
    /// Tabs only.
    Tabs,
    /// Both tabs and spaces.
    Mixed,
}

/// One annotated physical line of a Java source file.
#[derive(Debug, Clone)]
pub struct LineRecord {
    /// 1-based line number.
    pub number: usize,
    /// Raw text without the line terminator.
    pub raw: String,
    /// Text with string/char/comment content masked out.
    pub masked: String,
    /// Kind of leading whitespace.
    pub indent: IndentKind,
    /// Width of the leading whitespace, tabs expanded.
    pub indent_width: usize,
    /// Visible length of the line (tabs expanded, trailing whitespace excluded).
    pub visible_len: usize,
    /// The line began inside a block comment or Javadoc.
    pub starts_in_comment: bool,
}

impl LineRecord {
    /// Whether the line has no visible content once masking is applied.
    /// Style rules never fire on blank lines.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.masked.trim().is_empty()
    }
}

/// Splits file content into masked, measured line records.
pub struct LineScanner {
    tab_width: usize,
}

impl LineScanner {
    #[must_use]
    pub const fn new(tab_width: usize) -> Self {
        Self {
            tab_width: if tab_width == 0 { 1 } else { tab_width },
        }
    }

    /// Scan full file content into ordered line records.
    #[must_use]
    pub fn scan(&self, source: &str) -> Vec<LineRecord> {
        self.scan_with_state(source).0
    }

    /// Scan and additionally report whether the file ended inside an
    /// unterminated block comment (the extractor's degradation path).
    #[must_use]
    pub fn scan_with_state(&self, source: &str) -> (Vec<LineRecord>, bool) {
        let mut masker = LiteralMasker::new();
        let records = source
            .lines()
            .enumerate()
            .map(|(i, line)| {
                let masked = masker.mask_line(line);
                let (indent, indent_width) = self.classify_indent(line);
                LineRecord {
                    number: i + 1,
                    raw: line.to_string(),
                    masked: masked.text,
                    indent,
                    indent_width,
                    visible_len: self.expanded_width(line.trim_end()),
                    starts_in_comment: masked.starts_in_comment,
                }
            })
            .collect();
        (records, masker.in_block_comment())
    }

    fn classify_indent(&self, line: &str) -> (IndentKind, usize) {
        let leading: Vec<char> = line
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .collect();
        let has_space = leading.contains(&' ');
        let has_tab = leading.contains(&'\t');

        let kind = match (has_space, has_tab) {
            (false, false) => IndentKind::None,
            (true, false) => IndentKind::Spaces,
            (false, true) => IndentKind::Tabs,
            (true, true) => IndentKind::Mixed,
        };

        let width = leading.iter().fold(0, |w, c| w + self.char_width(*c, w));
        (kind, width)
    }

    fn expanded_width(&self, text: &str) -> usize {
        text.chars().fold(0, |w, c| w + self.char_width(c, w))
    }

    const fn char_width(&self, c: char, column: usize) -> usize {
        if c == '\t' {
            self.tab_width - (column % self.tab_width)
        } else {
            1
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
