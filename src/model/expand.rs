//! Recursive expansion of inclusion references.
//!
//! Expansion is caller-driven: a chunk carries no indentation of its own.
//! The whitespace in front of an `<<name>>` reference becomes the indent of
//! every line the referenced chunk expands to, and nested references add
//! their own whitespace on top of it.

use crate::config::INCLUSION;
use crate::errors::{NowebError, Result};

use super::chunk_name::ChunkName;
use super::chunk_store::ChunkStore;

/// Chunks being expanded on the current call path, outermost first.
///
/// Depth is bounded by the number of chunks in the store.
#[derive(Debug, Clone, Default)]
pub struct InclusionPath(Vec<ChunkName>);

impl InclusionPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `name`, failing with the cycle if it is already on the path.
    ///
    /// The reported cycle starts at the earlier occurrence of `name`.
    pub fn push(&mut self, name: &ChunkName) -> Result<()> {
        if let Some(start) = self.0.iter().position(|n| n == name) {
            let mut cycle = self.0[start..].to_vec();
            cycle.push(name.clone());
            return Err(NowebError::CyclicInclusion(cycle));
        }
        self.0.push(name.clone());
        Ok(())
    }

    pub fn pop(&mut self) -> Option<ChunkName> {
        self.0.pop()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

/// Expands chunk `name`, prefixing every resulting line with `indent`.
///
/// Top-level requests pass an empty indent.
pub fn expand(store: &ChunkStore, name: &ChunkName, indent: &str) -> Result<String> {
    let mut path = InclusionPath::new();
    expand_guarded(store, name, indent, &mut path)
}

/// Expands a chunk as a tangled file would contain it.
pub fn expand_chunk(store: &ChunkStore, name: &ChunkName) -> Result<String> {
    expand(store, name, "")
}

/// Expands `name` with an explicit inclusion path shared across the recursion.
pub fn expand_guarded(
    store: &ChunkStore,
    name: &ChunkName,
    indent: &str,
    path: &mut InclusionPath,
) -> Result<String> {
    let chunk = store.lookup(name)?;
    path.push(name)?;
    tracing::trace!("Expanding <<{}>> at depth {}", name, path.depth());

    let substituted = substitute_inclusions(store, &chunk.raw_body, path)?;

    path.pop();
    Ok(indent_lines(&substituted, indent))
}

/// Replaces every inclusion reference in `body` with its expansion.
///
/// One pass over the body: expansions are not scanned again, deeper
/// references are resolved by the recursive call that produced them.
fn substitute_inclusions(
    store: &ChunkStore,
    body: &str,
    path: &mut InclusionPath,
) -> Result<String> {
    let mut output = String::with_capacity(body.len());
    let mut last = 0;

    for caps in INCLUSION.captures_iter(body) {
        let (Some(whole), Some(ws), Some(target)) = (caps.get(0), caps.name("ws"), caps.name("name"))
        else {
            continue;
        };

        output.push_str(&body[last..whole.start()]);

        let line_start = whole.start() == 0 || body[..whole.start()].ends_with('\n');
        let (line_break, indent) = split_captured_whitespace(ws.as_str(), line_start);

        let target = ChunkName::new(target.as_str());
        output.push_str(line_break);
        output.push_str(&expand_guarded(store, &target, indent, path)?);

        last = whole.end();
    }

    output.push_str(&body[last..]);
    Ok(output)
}

/// Splits the whitespace captured before a reference into the line break to
/// keep and the indent to pass down.
///
/// When the whitespace spans a line break, everything up to the last
/// terminator is kept and the rest is the indent. A reference that opens a
/// line keeps its whitespace as indent. A reference after other text on the
/// same line is moved to a line of its own, and the first whitespace
/// character is the one that separated it from that text.
fn split_captured_whitespace(ws: &str, line_start: bool) -> (&str, &str) {
    match ws.rfind('\n') {
        Some(pos) => (&ws[..=pos], &ws[pos + 1..]),
        None if line_start => ("", ws),
        None => {
            let rest = ws
                .char_indices()
                .nth(1)
                .map(|(i, _)| &ws[i..])
                .unwrap_or("");
            ("\n", rest)
        }
    }
}

/// Prefixes every line with `indent`, rejoins with `\n`, and trims trailing
/// blanks and line breaks off the end.
fn indent_lines(text: &str, indent: &str) -> String {
    let mut output = String::with_capacity(text.len());

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        output.push_str(indent);
        output.push_str(line);
        output.push('\n');
    }

    let trimmed = output.trim_end_matches([' ', '\t', '\n', '\r']).len();
    output.truncate(trimmed);
    output
}
