//! Woven document markup.

use crate::config::WeaveMarkers;

use super::chunk_name::ChunkName;

/// Append-only rendering of a document for reading.
///
/// Document text is copied verbatim; chunk bodies are escaped and wrapped in
/// the configured begin and end markers.
#[derive(Debug, Clone, Default)]
pub struct DocumentMarkup {
    text: String,
    markers: WeaveMarkers,
}

impl DocumentMarkup {
    pub fn new(markers: WeaveMarkers) -> Self {
        Self {
            text: String::new(),
            markers,
        }
    }

    /// Appends a line of document text as is.
    pub fn push_text(&mut self, line: &str) {
        self.text.push_str(line);
    }

    /// Opens a chunk block.
    pub fn begin_chunk(&mut self, name: &ChunkName) {
        let begin = self.markers.format_begin(&escape(name.as_str()));
        self.text.push_str(&begin);
        self.text.push('\n');
    }

    /// Appends an escaped line of chunk body.
    pub fn push_code(&mut self, line: &str) {
        self.text.push_str(&escape(line));
    }

    /// Closes a chunk block.
    pub fn end_chunk(&mut self, name: &ChunkName) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        let end = self.markers.format_end(&escape(name.as_str()));
        self.text.push_str(&end);
        self.text.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Escapes text for embedding in HTML or XML.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
