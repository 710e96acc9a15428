use indexmap::IndexMap;

/// A parsed `/** ... */` block attached to a declaration.
///
/// Tags map tag name (without `@`) to the ordered list of tag bodies; a tag
/// may repeat (e.g. one `@param` per parameter).
#[derive(Debug, Clone, Default)]
pub struct JavadocBlock {
    /// 1-based span of the block, `/**` line through `*/` line.
    pub span: (usize, usize),
    tags: IndexMap<String, Vec<String>>,
}

impl JavadocBlock {
    /// Parse a block from its raw lines. `start_line` is the 1-based number
    /// of the `/**` line.
    #[must_use]
    pub fn parse(raw_lines: &[&str], start_line: usize) -> Self {
        let mut tags: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut open_tag: Option<String> = None;

        for raw in raw_lines {
            let text = strip_decoration(raw);
            if let Some(rest) = text.strip_prefix('@') {
                let (name, body) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(n, b)| (n, b.trim()));
                if name.is_empty() {
                    continue;
                }
                tags.entry(name.to_string())
                    .or_default()
                    .push(body.to_string());
                open_tag = Some(name.to_string());
            } else if !text.is_empty()
                && let Some(ref name) = open_tag
                && let Some(bodies) = tags.get_mut(name)
                && let Some(last) = bodies.last_mut()
            {
                // Continuation line of the previous tag body.
                if !last.is_empty() {
                    last.push(' ');
                }
                last.push_str(text);
            }
        }

        Self {
            span: (start_line, start_line + raw_lines.len().saturating_sub(1)),
            tags,
        }
    }

    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Ordered bodies of a repeating tag; empty if absent.
    #[must_use]
    pub fn tag_bodies(&self, name: &str) -> &[String] {
        self.tags.get(name).map_or(&[], Vec::as_slice)
    }

    /// First whitespace-separated token of each tag body (e.g. the parameter
    /// name of a `@param` tag).
    #[must_use]
    pub fn tag_leading_tokens(&self, name: &str) -> Vec<&str> {
        self.tag_bodies(name)
            .iter()
            .filter_map(|body| body.split_whitespace().next())
            .collect()
    }
}

/// Strip comment decoration from a Javadoc line: leading whitespace, the
/// `/**` opener, a leading `*`, and the `*/` closer.
fn strip_decoration(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_suffix("*/") {
        text = rest.trim_end();
    }
    if let Some(rest) = text.strip_prefix("/**") {
        text = rest.trim_start();
    } else if let Some(rest) = text.strip_prefix('*') {
        text = rest.trim_start();
    }
    text
}

#[cfg(test)]
#[path = "javadoc_tests.rs"]
mod tests;
