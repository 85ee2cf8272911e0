//! Structural scanner for partially typed query documents
//!
//! This module walks the document text from the start up to the cursor and
//! records just enough structure to reason about the cursor position:
//! - The key path from the root to the innermost open container
//! - Open container kinds and nesting depth
//! - The key whose value is being typed, and whether a value is expected
//! - Whether the cursor sits inside an unterminated string
//!
//! The scanner never builds a JSON tree and never fails. Unbalanced or stray
//! characters only reduce the precision of the resulting [`ParseState`].
//! Work is linear in the cursor offset.
//!
//! Offsets at this level are bytes. Callers holding character offsets
//! convert with [`byte_offset`] and back with [`char_offset`].

use serde::Serialize;

/// Kind of an open container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    /// `{ ... }`
    Object,
    /// `[ ... ]`
    Array,
}

/// One open container on the brace stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Container kind
    pub container: Container,
    /// Whether opening this container pushed a segment onto the path
    pub keyed: bool,
}

/// Structural state at the cursor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseState {
    /// Key segments from the root to the innermost keyed container
    pub path: Vec<String>,

    /// Number of open containers
    pub depth: usize,

    /// Depths of the open arrays, outermost first
    pub array_depths: Vec<usize>,

    /// Open containers, outermost first
    pub brace_stack: Vec<Frame>,

    /// Key of the pair whose value is being typed
    pub current_key: Option<String>,

    /// True directly after a `:`
    pub expecting_value: bool,

    /// True when the cursor is inside a string literal
    pub in_string: bool,

    /// Byte offset of the opening quote of the string containing the cursor
    pub string_start: Option<usize>,
}

impl ParseState {
    /// Whether the innermost open container is an array
    pub fn in_array(&self) -> bool {
        matches!(
            self.brace_stack.last(),
            Some(Frame {
                container: Container::Array,
                ..
            })
        )
    }

    /// Innermost path segment
    pub fn parent_key(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

/// Clamp a cursor offset into `text`, flooring it to a char boundary.
pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut pos = cursor.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Byte offset of the `chars`-th character, or the text length past the end.
pub fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(i, _)| i)
}

/// Number of characters before a byte offset.
pub fn char_offset(text: &str, bytes: usize) -> usize {
    text[..clamp_cursor(text, bytes)].chars().count()
}

/// Scan `text` up to `cursor` and return the structural state there.
///
/// # Arguments
/// * `text` - Full document text, not necessarily valid JSON
/// * `cursor` - Byte offset of the cursor; clamped into the text
pub fn scan(text: &str, cursor: usize) -> ParseState {
    let cursor = clamp_cursor(text, cursor);
    let mut scanner = Scanner::default();

    // Every structural character is ASCII, so walking bytes is safe: UTF-8
    // continuation bytes never collide with them.
    for (i, byte) in text.as_bytes()[..cursor].iter().enumerate() {
        scanner.step(text, i, *byte);
    }

    scanner.state
}

#[derive(Default)]
struct Scanner {
    state: ParseState,
    /// Most recently closed key-position string, not yet bound by `:`
    candidate_key: Option<String>,
    /// Previous character inside a string was an unescaped backslash
    escaped: bool,
}

impl Scanner {
    fn step(&mut self, text: &str, i: usize, byte: u8) {
        if self.state.in_string {
            self.step_in_string(text, i, byte);
            return;
        }

        match byte {
            b'"' => {
                self.state.in_string = true;
                self.state.string_start = Some(i);
                self.escaped = false;
            }
            b'{' => self.open(Container::Object),
            b'[' => self.open(Container::Array),
            b'}' => self.close(Container::Object),
            b']' => self.close(Container::Array),
            b':' => {
                self.state.expecting_value = true;
                if let Some(key) = self.candidate_key.take() {
                    self.state.current_key = Some(key);
                }
            }
            b',' => self.end_pair(),
            _ => {}
        }
    }

    fn step_in_string(&mut self, text: &str, i: usize, byte: u8) {
        if self.escaped {
            self.escaped = false;
            return;
        }

        match byte {
            b'\\' => self.escaped = true,
            b'"' => {
                let start = self.state.string_start.take().map_or(i, |s| s + 1);
                self.state.in_string = false;
                // A string closed while a value is expected is the value
                // itself, never a key.
                if !self.state.expecting_value {
                    self.candidate_key = Some(text[start..i].to_string());
                }
            }
            _ => {}
        }
    }

    fn open(&mut self, container: Container) {
        let key = self
            .state
            .current_key
            .take()
            .or_else(|| self.candidate_key.take());
        let keyed = key.is_some();
        if let Some(key) = key {
            self.state.path.push(key);
        }

        self.state.depth += 1;
        if container == Container::Array {
            self.state.array_depths.push(self.state.depth);
        }
        self.state.brace_stack.push(Frame { container, keyed });
        self.end_pair();
    }

    fn close(&mut self, container: Container) {
        let matches_innermost = self
            .state
            .brace_stack
            .last()
            .is_some_and(|frame| frame.container == container);
        if !matches_innermost {
            return;
        }

        if let Some(frame) = self.state.brace_stack.pop() {
            self.state.depth -= 1;
            if container == Container::Array {
                self.state.array_depths.pop();
            }
            if frame.keyed {
                self.state.path.pop();
            }
        }
        self.end_pair();
    }

    fn end_pair(&mut self) {
        self.state.expecting_value = false;
        self.state.current_key = None;
        self.candidate_key = None;
    }
}

/// Characters that terminate the word being typed
fn is_word_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '{' | '}' | '[' | ']' | ':' | ',' | '"')
}

/// Longest suffix of non-delimiter characters ending at the cursor.
pub fn current_word(text: &str, cursor: usize) -> &str {
    let cursor = clamp_cursor(text, cursor);
    let before = &text[..cursor];
    let start = before
        .char_indices()
        .rev()
        .find(|(_, ch)| is_word_delimiter(*ch))
        .map(|(i, ch)| i + ch.len_utf8())
        .unwrap_or(0);
    &before[start..]
}

/// Whether the cursor sits inside a string that is still open.
///
/// Cheaper than [`scan`]: only quote parity and escapes are tracked.
pub fn inside_open_string(text: &str, cursor: usize) -> bool {
    let cursor = clamp_cursor(text, cursor);
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.as_bytes()[..cursor].iter() {
        if escaped {
            escaped = false;
            continue;
        }
        match byte {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            _ => {}
        }
    }

    in_string
}
