//! Marker line patterns and weave block markers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A line that is exactly `<<NAME>>=` opens chunk `NAME`.
pub static CHUNK_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<<(?P<name>[^>]+)>>=$").unwrap());

/// A line that is exactly `@` closes the current chunk.
pub static CHUNK_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@$").unwrap());

/// An inclusion reference inside a chunk body, with the whitespace before it.
pub static INCLUSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<ws>\s*)<<(?P<name>[^>]+)>>").unwrap());

/// Placeholder substituted with the chunk name in weave markers.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Strips a single trailing `\n` or `\r\n` from a line.
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Returns the chunk name if `line` is a chunk-start marker.
pub fn match_chunk_start(line: &str) -> Option<&str> {
    CHUNK_START
        .captures(strip_terminator(line))
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}

/// Returns true if `line` is a chunk-end marker.
pub fn is_chunk_end(line: &str) -> bool {
    CHUNK_END.is_match(strip_terminator(line))
}

/// Markers wrapped around each chunk body in the woven document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaveMarkers {
    /// Emitted before a chunk body; `{name}` is replaced by the escaped name.
    #[serde(default = "default_begin")]
    pub begin: String,

    /// Emitted after a chunk body; `{name}` is replaced by the escaped name.
    #[serde(default = "default_end")]
    pub end: String,
}

fn default_begin() -> String {
    "<pre class=\"chunk\" data-chunk=\"{name}\"><code>&lt;&lt;{name}&gt;&gt;=".to_string()
}

fn default_end() -> String {
    "</code></pre>".to_string()
}

impl Default for WeaveMarkers {
    fn default() -> Self {
        Self {
            begin: default_begin(),
            end: default_end(),
        }
    }
}

impl WeaveMarkers {
    pub fn new(begin: &str, end: &str) -> Self {
        Self {
            begin: begin.to_string(),
            end: end.to_string(),
        }
    }

    /// Formats the begin marker for an already escaped chunk name.
    pub fn format_begin(&self, escaped_name: &str) -> String {
        self.begin.replace(NAME_PLACEHOLDER, escaped_name)
    }

    /// Formats the end marker for an already escaped chunk name.
    pub fn format_end(&self, escaped_name: &str) -> String {
        self.end.replace(NAME_PLACEHOLDER, escaped_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_start() {
        assert_eq!(match_chunk_start("<<main.c>>=\n"), Some("main.c"));
        assert_eq!(match_chunk_start("<<lib/io.c>>=\r\n"), Some("lib/io.c"));
        assert_eq!(match_chunk_start("<<two words>>="), Some("two words"));

        assert_eq!(match_chunk_start("<<main.c>>= trailing\n"), None);
        assert_eq!(match_chunk_start(" <<main.c>>=\n"), None);
        assert_eq!(match_chunk_start("<<>>=\n"), None);
        assert_eq!(match_chunk_start("<<main.c>>\n"), None);
    }

    #[test]
    fn test_chunk_end() {
        assert!(is_chunk_end("@\n"));
        assert!(is_chunk_end("@\r\n"));
        assert!(is_chunk_end("@"));

        assert!(!is_chunk_end("@ \n"));
        assert!(!is_chunk_end(" @\n"));
        assert!(!is_chunk_end("@@\n"));
    }

    #[test]
    fn test_inclusion_pattern() {
        let caps = INCLUSION.captures("int x;\n    <<decls>>\n").unwrap();
        assert_eq!(&caps["ws"], "\n    ");
        assert_eq!(&caps["name"], "decls");

        let caps = INCLUSION.captures("<<io/read.c>>").unwrap();
        assert_eq!(&caps["ws"], "");
        assert_eq!(&caps["name"], "io/read.c");

        assert!(INCLUSION.captures("a << b >> c").is_some());
        assert!(INCLUSION.captures("a <<>> b").is_none());
    }

    #[test]
    fn test_strip_terminator() {
        assert_eq!(strip_terminator("x\r\n"), "x");
        assert_eq!(strip_terminator("x\n"), "x");
        assert_eq!(strip_terminator("x"), "x");
        assert_eq!(strip_terminator("x\n\n"), "x\n");
    }

    #[test]
    fn test_weave_markers() {
        let markers = WeaveMarkers::default();
        assert_eq!(
            markers.format_begin("main.c"),
            "<pre class=\"chunk\" data-chunk=\"main.c\"><code>&lt;&lt;main.c&gt;&gt;="
        );
        assert_eq!(markers.format_end("main.c"), "</code></pre>");

        let custom = WeaveMarkers::new("[{name}]", "[/{name}]");
        assert_eq!(custom.format_end("x"), "[/x]");
    }
}
