//! Script minification
//!
//! The bundler only sees the [`Minifier`] trait, so a different minifier can
//! be dropped in without touching the bundling code.
//!
//! [`JsMinifier`] is a conservative single-pass minifier in the spirit of
//! `jsmin`:
//!
//! - `/* ... */` and `// ...` comments are removed
//! - runs of whitespace collapse to nothing, a single space, or a single
//!   newline when the line break may be load-bearing for automatic
//!   semicolon insertion
//! - string, template and regular expression literals are copied verbatim
//!
//! It never reorders or renames anything. Input it cannot scan with
//! confidence (unterminated literals or comments, invalid UTF-8) is rejected
//! so the caller can fall back to the raw source.

use thiserror::Error;

/// Why a minifier rejected its input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinifyError {
    #[error("source is not valid UTF-8")]
    NotUtf8,

    #[error("unterminated {what} starting on line {line}")]
    Unterminated { what: &'static str, line: usize },
}

/// Minification capability used by the bundler
pub trait Minifier: Send + Sync {
    fn minify(&self, input: &[u8]) -> Result<Vec<u8>, MinifyError>;
}

/// Returns its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMinifier;

impl Minifier for NoopMinifier {
    fn minify(&self, input: &[u8]) -> Result<Vec<u8>, MinifyError> {
        Ok(input.to_vec())
    }
}

/// Pure-Rust JavaScript minifier
#[derive(Debug, Clone, Copy, Default)]
pub struct JsMinifier;

impl Minifier for JsMinifier {
    fn minify(&self, input: &[u8]) -> Result<Vec<u8>, MinifyError> {
        let source = std::str::from_utf8(input).map_err(|_| MinifyError::NotUtf8)?;
        minify_js(source).map(String::into_bytes)
    }
}

/// Minify a JavaScript source string
pub fn minify_js(source: &str) -> Result<String, MinifyError> {
    let mut scanner = Scanner::new(source);
    scanner.run()?;
    Ok(scanner.out)
}

/// Keywords after which a `/` starts a regular expression, not a division
const REGEX_PREFIX_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "instanceof",
    "case",
    "do",
    "else",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "yield",
    "await",
];

/// Characters after which a `/` starts a regular expression
const REGEX_PREFIX_CHARS: &[char] = &[
    '(', ',', '=', ':', '[', '!', '&', '|', '?', '{', '}', ';', '+', '-', '*', '%', '<', '>',
    '~', '^',
];

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$' || ch == '\\' || !ch.is_ascii()
}

/// Characters that may end a statement when followed by a line break
fn may_end_statement(prev: char) -> bool {
    matches!(prev, '}' | ']' | ')' | '+' | '-' | '"' | '\'' | '`')
}

/// Characters that may start a statement right after a line break
fn may_start_statement(next: char) -> bool {
    is_word_char(next)
        || matches!(next, '{' | '[' | '(' | '+' | '-' | '!' | '~' | '"' | '\'' | '`' | '/')
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    out: String,
    pending_space: bool,
    pending_newline: bool,
    after_regex: bool,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            out: String::with_capacity(source.len()),
            pending_space: false,
            pending_newline: false,
            after_regex: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn emit(&mut self, ch: char) {
        self.out.push(ch);
        self.after_regex = false;
    }

    fn run(&mut self) -> Result<(), MinifyError> {
        while let Some(ch) = self.peek() {
            match ch {
                '\n' => {
                    self.pending_newline = true;
                    self.bump();
                }
                c if c.is_whitespace() => {
                    self.pending_space = true;
                    self.bump();
                }
                '/' if self.peek_at(1) == Some('/') => self.skip_line_comment(),
                '/' if self.peek_at(1) == Some('*') => self.skip_block_comment()?,
                '/' if self.regex_allowed() => {
                    self.flush_separator('/');
                    self.copy_regex()?;
                }
                '"' | '\'' => {
                    self.flush_separator(ch);
                    self.copy_string(ch)?;
                }
                '`' => {
                    self.flush_separator(ch);
                    self.copy_template()?;
                }
                _ => {
                    self.flush_separator(ch);
                    self.emit(ch);
                    self.bump();
                }
            }
        }
        Ok(())
    }

    /// Emit whatever separator the pending whitespace collapses to
    fn flush_separator(&mut self, next: char) {
        if !self.pending_space && !self.pending_newline {
            return;
        }
        let had_newline = self.pending_newline;
        self.pending_space = false;
        self.pending_newline = false;

        let Some(prev) = self.out.chars().last() else {
            return;
        };
        // A regex literal may be followed by flags, so it behaves like a word
        let prev_is_word = is_word_char(prev) || self.after_regex;

        if had_newline && (prev_is_word || may_end_statement(prev)) && may_start_statement(next) {
            self.out.push('\n');
            return;
        }

        if (prev_is_word && is_word_char(next))
            || (prev == '+' && next == '+')
            || (prev == '-' && next == '-')
        {
            self.out.push(' ');
        }
    }

    fn regex_allowed(&self) -> bool {
        let Some(prev) = self.out.chars().last() else {
            return true;
        };
        if self.after_regex {
            return false;
        }
        if REGEX_PREFIX_CHARS.contains(&prev) {
            return true;
        }
        if !is_word_char(prev) {
            return false;
        }
        let word: String = self
            .out
            .chars()
            .rev()
            .take_while(|c| is_word_char(*c))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        REGEX_PREFIX_KEYWORDS.contains(&word.as_str())
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), MinifyError> {
        let start = self.line;
        self.bump();
        self.bump();
        loop {
            match self.bump() {
                None => {
                    return Err(MinifyError::Unterminated {
                        what: "block comment",
                        line: start,
                    });
                }
                Some('*') if self.peek() == Some('/') => {
                    self.bump();
                    break;
                }
                Some('\n') => self.pending_newline = true,
                Some(_) => {}
            }
        }
        if !self.pending_newline {
            self.pending_space = true;
        }
        Ok(())
    }

    fn copy_string(&mut self, quote: char) -> Result<(), MinifyError> {
        let start = self.line;
        let unterminated = MinifyError::Unterminated {
            what: "string",
            line: start,
        };
        self.emit(quote);
        self.bump();
        loop {
            let ch = self.bump().ok_or_else(|| unterminated.clone())?;
            match ch {
                '\\' => {
                    self.out.push(ch);
                    let escaped = self.bump().ok_or_else(|| unterminated.clone())?;
                    self.out.push(escaped);
                }
                '\n' => return Err(unterminated),
                _ => {
                    self.out.push(ch);
                    if ch == quote {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn copy_template(&mut self) -> Result<(), MinifyError> {
        self.emit('`');
        self.bump();
        self.copy_template_rest()
    }

    /// Copy a template literal after its opening backtick
    ///
    /// Substitutions are copied verbatim; they may hold nested templates.
    fn copy_template_rest(&mut self) -> Result<(), MinifyError> {
        let unterminated = MinifyError::Unterminated {
            what: "template literal",
            line: self.line,
        };
        loop {
            let ch = self.bump().ok_or_else(|| unterminated.clone())?;
            self.out.push(ch);
            match ch {
                '\\' => {
                    let escaped = self.bump().ok_or_else(|| unterminated.clone())?;
                    self.out.push(escaped);
                }
                '$' if self.peek() == Some('{') => {
                    self.bump();
                    self.out.push('{');
                    self.copy_substitution()?;
                }
                '`' => return Ok(()),
                _ => {}
            }
        }
    }

    /// Copy a `${ ... }` substitution up to and including its closing brace
    fn copy_substitution(&mut self) -> Result<(), MinifyError> {
        let unterminated = MinifyError::Unterminated {
            what: "template substitution",
            line: self.line,
        };
        let mut depth = 1usize;
        loop {
            let ch = self.bump().ok_or_else(|| unterminated.clone())?;
            self.out.push(ch);
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                '`' => self.copy_template_rest()?,
                '"' | '\'' => loop {
                    let inner = self.bump().ok_or_else(|| unterminated.clone())?;
                    self.out.push(inner);
                    if inner == '\\' {
                        let escaped = self.bump().ok_or_else(|| unterminated.clone())?;
                        self.out.push(escaped);
                    } else if inner == ch {
                        break;
                    }
                },
                _ => {}
            }
        }
    }

    fn copy_regex(&mut self) -> Result<(), MinifyError> {
        let unterminated = MinifyError::Unterminated {
            what: "regular expression",
            line: self.line,
        };
        self.emit('/');
        self.bump();
        let mut in_class = false;
        loop {
            let ch = self.bump().ok_or_else(|| unterminated.clone())?;
            match ch {
                '\n' => return Err(unterminated),
                '\\' => {
                    self.out.push(ch);
                    let escaped = self.bump().ok_or_else(|| unterminated.clone())?;
                    if escaped == '\n' {
                        return Err(unterminated);
                    }
                    self.out.push(escaped);
                    continue;
                }
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => {
                    self.out.push(ch);
                    self.after_regex = true;
                    return Ok(());
                }
                _ => {}
            }
            self.out.push(ch);
        }
    }
}
