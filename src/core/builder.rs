//! Fluent recorder for LaTeX generation
//!
//! [`LatexBuilder`] is the front-end of the token log: every method is a pure
//! append (or the single bounded rewrite for environment entry), and nothing
//! is interpreted until the log is rendered. Methods return `&mut Self` so
//! macro calls chain the way the generated LaTeX reads:
//!
//! ```rust
//! use texflow::{args, latex};
//!
//! let out = latex(|doc| {
//!     doc.name("documentclass").required("article");
//!     doc.name("usepackage")
//!         .optional(args().named("margin", "2cm"))
//!         .required("geometry");
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     out,
//!     "\n\\documentclass{article}\n\\usepackage[margin=2cm]{geometry}"
//! );
//! ```

use super::token::{Args, Token, TokenLog};
use crate::utils::error::LatexResult;

/// Fluent builder recording DSL operations into a token log
#[derive(Debug, Default)]
pub struct LatexBuilder {
    log: TokenLog,
}

impl LatexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a macro name (`\name` once rendered)
    ///
    /// The name receives any argument groups chained after it, and becomes an
    /// environment if an environment scope is opened on it.
    pub fn name(&mut self, ident: impl Into<String>) -> &mut Self {
        self.log.push(Token::Name(ident.into()));
        self
    }

    /// Record a mandatory brace-delimited argument group
    ///
    /// Chainable: a name may carry several groups (`\frac{a}{b}` style).
    /// A bare `&str` converts to a single positional argument.
    pub fn required(&mut self, arguments: impl Into<Args>) -> &mut Self {
        self.log.push(Token::Required(arguments.into()));
        self
    }

    /// Record an optional bracket-delimited argument group
    pub fn optional(&mut self, arguments: impl Into<Args>) -> &mut Self {
        self.log.push(Token::Optional(arguments.into()));
        self
    }

    /// Record a raw literal block, indented at render time
    pub fn text(&mut self, content: impl Into<String>) -> &mut Self {
        self.log.push(Token::Text(content.into()));
        self
    }

    /// Turn the most recently recorded name into an environment opener
    ///
    /// Inserts the enter marker immediately before that name, skipping over
    /// any argument groups already attached to it. Fails when nothing has
    /// been named yet; the error surfaces here, at recording time.
    pub fn begin_environment(&mut self) -> LatexResult<&mut Self> {
        self.log.mark_environment()?;
        Ok(self)
    }

    /// Close the innermost still-open environment
    pub fn end_environment(&mut self) -> &mut Self {
        self.log.push(Token::LeaveEnv);
        self
    }

    /// Scoped environment entry: open, run the body, close
    ///
    /// The close token is recorded on every exit path, including when the
    /// body returns an error, so an aborted scope still leaves the log
    /// internally consistent.
    pub fn environment<F>(&mut self, body: F) -> LatexResult<&mut Self>
    where
        F: FnOnce(&mut Self) -> LatexResult<()>,
    {
        self.begin_environment()?;
        let result = body(self);
        self.end_environment();
        result?;
        Ok(self)
    }

    /// Hand the recorded log over for rendering
    pub fn into_log(self) -> TokenLog {
        self.log
    }
}
