//! Single-pass scanner that builds the chunk store.

use std::path::{Path, PathBuf};

use crate::config::{Config, UnterminatedPolicy, WeaveMarkers};
use crate::errors::{NowebError, Result};
use crate::model::{ChunkName, ChunkStore, DocumentMarkup};
use crate::text_location::TextLocation;

use super::types::{document_lines, LineKind};

/// Scanner state: outside any chunk, or accumulating one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Outside,
    Inside(ChunkName),
}

/// The effect of one line, as decided by [`ScanState::transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'a> {
    /// Document text outside any chunk.
    Prose(&'a str),
    /// A chunk is opened, replacing `previous` if one was open.
    Open {
        name: ChunkName,
        previous: Option<ChunkName>,
    },
    /// The open chunk is closed.
    Close(ChunkName),
    /// A body line of the open chunk.
    Body(&'a str),
}

impl ScanState {
    /// Computes the next state and the step to apply for one line.
    ///
    /// Start markers switch chunks without a stack; `@` only closes when a
    /// chunk is open.
    pub fn transition<'a>(self, line: LineKind<'a>) -> (ScanState, Step<'a>) {
        match (self, line) {
            (state, LineKind::ChunkStart(name)) => {
                let previous = match state {
                    ScanState::Inside(previous) => Some(previous),
                    ScanState::Outside => None,
                };
                (
                    ScanState::Inside(name.clone()),
                    Step::Open { name, previous },
                )
            }
            (ScanState::Inside(name), LineKind::ChunkEnd(_)) => {
                (ScanState::Outside, Step::Close(name))
            }
            (ScanState::Inside(name), LineKind::Text(text)) => {
                (ScanState::Inside(name), Step::Body(text))
            }
            (ScanState::Outside, LineKind::ChunkEnd(text) | LineKind::Text(text)) => {
                (ScanState::Outside, Step::Prose(text))
            }
        }
    }
}

/// Whether the scanner also renders the woven document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Build the chunk store only.
    #[default]
    Tangle,
    /// Build the chunk store and the document markup.
    Weave,
}

/// A scanned document.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// All chunks of the document.
    pub store: ChunkStore,
    /// Woven markup, present in weave mode.
    pub markup: Option<String>,
    /// Source file path.
    pub source_path: Option<PathBuf>,
}

/// Line-at-a-time chunk store builder.
#[derive(Debug, Default)]
pub struct ChunkScanner {
    state: ScanState,
    store: ChunkStore,
    markup: Option<DocumentMarkup>,
    source_path: Option<PathBuf>,
    line_number: usize,
    /// Where the currently open chunk was opened.
    opened_at: Option<TextLocation>,
}

impl ChunkScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes locations to `path`.
    pub fn with_source_path(mut self, path: PathBuf) -> Self {
        self.source_path = Some(path);
        self
    }

    /// Enables woven markup with the given chunk markers.
    pub fn with_markup(mut self, markers: WeaveMarkers) -> Self {
        self.markup = Some(DocumentMarkup::new(markers));
        self
    }

    /// Consumes one line, terminator included.
    pub fn feed(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;
        let state = std::mem::take(&mut self.state);
        let (next, step) = state.transition(LineKind::classify(line));
        self.state = next;
        self.apply(step)
    }

    fn apply(&mut self, step: Step<'_>) -> Result<()> {
        match step {
            Step::Prose(text) => {
                if let Some(markup) = self.markup.as_mut() {
                    markup.push_text(text);
                }
            }
            Step::Open { name, previous } => {
                if let Some(markup) = self.markup.as_mut() {
                    if let Some(previous) = &previous {
                        markup.end_chunk(previous);
                    }
                    markup.begin_chunk(&name);
                }
                let location = self.location();
                tracing::debug!("Opening chunk <<{}>> at {}", name, location);
                self.store.open(&name, location.clone());
                self.opened_at = Some(location);
            }
            Step::Close(name) => {
                if let Some(markup) = self.markup.as_mut() {
                    markup.end_chunk(&name);
                }
                self.opened_at = None;
            }
            Step::Body(text) => {
                if let ScanState::Inside(name) = &self.state {
                    self.store.append(name, text)?;
                }
                if let Some(markup) = self.markup.as_mut() {
                    markup.push_code(text);
                }
            }
        }
        Ok(())
    }

    fn location(&self) -> TextLocation {
        match &self.source_path {
            Some(path) => TextLocation::file_line(path.clone(), self.line_number),
            None => TextLocation::line_only(self.line_number),
        }
    }

    /// Ends the document and returns the result.
    ///
    /// A chunk still open here is closed or reported according to `policy`.
    pub fn finish(mut self, policy: UnterminatedPolicy) -> Result<ParsedDocument> {
        if let ScanState::Inside(name) = std::mem::take(&mut self.state) {
            let location = self.opened_at.take().unwrap_or_default();
            if policy.is_strict() {
                return Err(NowebError::UnterminatedChunk { name, location });
            }
            tracing::warn!(
                "Chunk <<{}>> opened at {} is never closed; closing it at end of document",
                name,
                location
            );
            if let Some(markup) = self.markup.as_mut() {
                markup.end_chunk(&name);
            }
        }

        Ok(ParsedDocument {
            store: self.store,
            markup: self.markup.map(DocumentMarkup::into_string),
            source_path: self.source_path,
        })
    }
}

/// Builds a chunk store from document lines.
///
/// Chunks left open at the end are closed implicitly.
pub fn build_store<'a, I>(lines: I) -> Result<ChunkStore>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = ChunkScanner::new();
    for line in lines {
        scanner.feed(line)?;
    }
    Ok(scanner.finish(UnterminatedPolicy::Close)?.store)
}

/// Scans a whole document according to `config`.
pub fn read_document(
    input: &str,
    source_path: Option<&Path>,
    config: &Config,
    mode: ReadMode,
) -> Result<ParsedDocument> {
    let mut scanner = ChunkScanner::new();
    if let Some(path) = source_path {
        scanner = scanner.with_source_path(path.to_path_buf());
    }
    if mode == ReadMode::Weave {
        scanner = scanner.with_markup(config.weave.markers.clone());
    }

    for line in document_lines(input) {
        scanner.feed(line)?;
    }

    let parsed = scanner.finish(config.unterminated)?;
    tracing::debug!("Scanned {} chunks", parsed.store.len());
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SAMPLE_DOCUMENT;
    use pretty_assertions::assert_eq;

    fn body<'a>(store: &'a ChunkStore, name: &str) -> &'a str {
        &store.lookup(&ChunkName::new(name)).unwrap().raw_body
    }

    #[test]
    fn test_sample_document() {
        let store = build_store(document_lines(SAMPLE_DOCUMENT)).unwrap();

        let names: Vec<_> = store.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["main.c", "main body", "lib/io.h"]);
        assert_eq!(body(&store, "main body"), "print_greeting();\nreturn 0;\n");
        assert_eq!(body(&store, "lib/io.h"), "void print_greeting(void);\n");
    }

    #[test]
    fn test_multi_occurrence_accumulation() {
        let doc = "<<C>>=\na\n@\ntext\n<<C>>=\nb\n@\n";
        let store = build_store(document_lines(doc)).unwrap();
        assert_eq!(body(&store, "C"), "a\nb\n");
        assert_eq!(store.lookup(&ChunkName::new("C")).unwrap().occurrences(), 2);
    }

    #[test]
    fn test_markers_not_in_body() {
        let doc = "<<x.c>>=\n@ not an end\n@\n";
        let store = build_store(document_lines(doc)).unwrap();
        assert_eq!(body(&store, "x.c"), "@ not an end\n");
    }

    #[test]
    fn test_text_outside_chunks_ignored() {
        let doc = "prose\n@\nmore prose\n<<a>>=\nx\n@\ntrailing\n";
        let store = build_store(document_lines(doc)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(body(&store, "a"), "x\n");
    }

    #[test]
    fn test_start_marker_switches_chunk() {
        let doc = "<<a>>=\n1\n<<b>>=\n2\n@\n3\n";
        let store = build_store(document_lines(doc)).unwrap();
        assert_eq!(body(&store, "a"), "1\n");
        assert_eq!(body(&store, "b"), "2\n");
    }

    #[test]
    fn test_crlf_terminators_kept() {
        let doc = "<<w.bat>>=\r\necho on\r\n@\r\n";
        let store = build_store(document_lines(doc)).unwrap();
        assert_eq!(body(&store, "w.bat"), "echo on\r\n");
    }

    #[test]
    fn test_unterminated_closed_by_default() {
        let doc = "<<tail.txt>>=\nlast\nlines";
        let store = build_store(document_lines(doc)).unwrap();
        assert_eq!(body(&store, "tail.txt"), "last\nlines");
    }

    #[test]
    fn test_unterminated_strict() {
        let mut config = Config::default();
        config.unterminated = UnterminatedPolicy::Error;

        let doc = "<<a>>=\nx\n@\n\n<<tail.txt>>=\nlast\n";
        let result = read_document(doc, Some(Path::new("doc.nw")), &config, ReadMode::Tangle);
        match result {
            Err(NowebError::UnterminatedChunk { name, location }) => {
                assert_eq!(name.as_str(), "tail.txt");
                assert_eq!(location.line, 5);
                assert_eq!(location.filename, Some(PathBuf::from("doc.nw")));
            }
            other => panic!("expected UnterminatedChunk, got {:?}", other),
        }
    }

    #[test]
    fn test_locations_recorded() {
        let parsed = read_document(
            SAMPLE_DOCUMENT,
            None,
            &Config::default(),
            ReadMode::Tangle,
        )
        .unwrap();
        let chunk = parsed.store.lookup(&ChunkName::new("main body")).unwrap();
        assert_eq!(chunk.locations, vec![TextLocation::line_only(14)]);
        assert!(parsed.markup.is_none());
    }

    #[test]
    fn test_weave_markup() {
        let mut config = Config::default();
        config.weave.markers = WeaveMarkers::new("<{name}>", "</{name}>");

        let doc = "Intro & more\n<<a.c>>=\nif (x < y)\n@\nOutro\n";
        let parsed = read_document(doc, None, &config, ReadMode::Weave).unwrap();

        assert_eq!(
            parsed.markup.unwrap(),
            "Intro & more\n<a.c>\nif (x &lt; y)\n</a.c>\nOutro\n"
        );
        assert_eq!(body(&parsed.store, "a.c"), "if (x < y)\n");
    }

    #[test]
    fn test_weave_markup_switch_and_unterminated() {
        let mut config = Config::default();
        config.weave.markers = WeaveMarkers::new("[{name}]", "[/]");

        let doc = "<<a>>=\n1\n<<b>>=\n2";
        let parsed = read_document(doc, None, &config, ReadMode::Weave).unwrap();
        assert_eq!(parsed.markup.unwrap(), "[a]\n1\n[/]\n[b]\n2\n[/]\n");
    }

    #[test]
    fn test_transition_table() {
        let name = ChunkName::new("n");

        let (state, step) = ScanState::Outside.transition(LineKind::ChunkEnd("@\n"));
        assert_eq!(state, ScanState::Outside);
        assert_eq!(step, Step::Prose("@\n"));

        let (state, step) = ScanState::Outside.transition(LineKind::ChunkStart(name.clone()));
        assert_eq!(state, ScanState::Inside(name.clone()));
        assert_eq!(
            step,
            Step::Open {
                name: name.clone(),
                previous: None
            }
        );

        let (state, step) = state.transition(LineKind::Text("x\n"));
        assert_eq!(step, Step::Body("x\n"));

        let (state, step) = state.transition(LineKind::ChunkEnd("@\n"));
        assert_eq!(state, ScanState::Outside);
        assert_eq!(step, Step::Close(name));
    }
}
