//! Token log for deferred LaTeX generation
//!
//! Recording and rendering are deliberately separated: the builder only ever
//! appends tokens to a [`TokenLog`], and the renderer interprets the log in a
//! single pass later. This module defines the token variants, the
//! insertion-ordered argument bundle, and the one structural rewrite the log
//! supports (relocating an environment marker in front of its name).

use std::fmt;

use indexmap::IndexMap;

use crate::utils::error::{LatexError, LatexResult};

/// One recorded unit of DSL action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Macro name about to receive arguments or become an environment
    Name(String),
    /// Brace-delimited mandatory argument group
    Required(Args),
    /// Bracket-delimited optional argument group
    Optional(Args),
    /// The most recently recorded name opens a `\begin{...}` block
    EnterEnv,
    /// Close of the innermost still-open environment
    LeaveEnv,
    /// Raw literal line, indentation-adjusted at render time
    Text(String),
}

/// Argument bundle: positional values plus named `key=value` pairs
///
/// Named arguments keep insertion order, so `width=...` before `height=...`
/// renders in exactly that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    positional: Vec<String>,
    named: IndexMap<String, String>,
}

impl Args {
    /// Create an empty bundle (renders as `{}` or `[]`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional value, captured through its `Display` rendering
    pub fn pos(mut self, value: impl fmt::Display) -> Self {
        self.positional.push(value.to_string());
        self
    }

    /// Append a named value, rendered as `key=value`
    pub fn named(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.named.insert(key.into(), value.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Comma-joined parameter list: positionals first, then `key=value` pairs
    pub fn format_params(&self) -> String {
        let mut parts: Vec<String> = self.positional.clone();
        parts.extend(self.named.iter().map(|(k, v)| format!("{}={}", k, v)));
        parts.join(", ")
    }
}

impl From<&str> for Args {
    fn from(value: &str) -> Self {
        Args::new().pos(value)
    }
}

impl From<String> for Args {
    fn from(value: String) -> Self {
        Args::new().pos(value)
    }
}

/// Shorthand for starting an argument bundle
///
/// ```rust
/// use texflow::args;
///
/// let bundle = args().pos("fig.png").named("width", r"\textwidth");
/// assert_eq!(bundle.format_params(), r"fig.png, width=\textwidth");
/// ```
pub fn args() -> Args {
    Args::new()
}

/// Ordered token log for one recording session
///
/// Owned exclusively by its session and consumed by value when rendered.
#[derive(Debug, Clone, Default)]
pub struct TokenLog {
    tokens: Vec<Token>,
}

impl TokenLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token to the tail of the log
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Retroactively mark the most recently recorded name as an environment
    /// opener by inserting [`Token::EnterEnv`] immediately before it.
    ///
    /// Argument groups already attached to the name stay behind it, so
    /// `figure` followed by `[h!]` still marks `figure` as the environment.
    /// Fails at the point of use when no name has been recorded at all.
    pub fn mark_environment(&mut self) -> LatexResult<()> {
        let index = self
            .tokens
            .iter()
            .rposition(|token| matches!(token, Token::Name(_)))
            .ok_or_else(|| {
                LatexError::missing_name("environment scope entered before any macro name")
            })?;
        self.tokens.insert(index, Token::EnterEnv);
        Ok(())
    }

    /// Drain the log front-to-back for rendering
    pub fn into_tokens(self) -> impl Iterator<Item = Token> {
        self.tokens.into_iter()
    }
}
