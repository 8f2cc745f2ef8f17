//! Session layer binding one token log to one render
//!
//! A session owns a fresh log, exposes the builder to caller logic, and
//! renders the log exactly once when it is finished. The closure-based
//! [`latex`] entry points cover the common case; [`Session`] is the same
//! wiring for callers that want to hold the builder across scopes.

use std::io::Write;

use super::builder::LatexBuilder;
use super::render::render;
use crate::utils::error::LatexResult;

/// Options for rendering a recorded session
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Spaces per environment nesting level
    pub indent_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent_depth: 4 }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(indent_depth: usize) -> Self {
        Self { indent_depth }
    }

    /// No indentation at any nesting depth
    pub fn compact() -> Self {
        Self { indent_depth: 0 }
    }
}

/// One recording session: a builder plus the options its log renders with
#[derive(Debug, Default)]
pub struct Session {
    builder: LatexBuilder,
    options: RenderOptions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            builder: LatexBuilder::new(),
            options,
        }
    }

    /// The builder handle for recording operations
    pub fn doc(&mut self) -> &mut LatexBuilder {
        &mut self.builder
    }

    /// Render the recorded log into a fresh in-memory buffer
    pub fn finish(self) -> LatexResult<String> {
        render(self.builder.into_log(), &self.options)
    }

    /// Render the recorded log and copy it into a caller-supplied sink
    ///
    /// The text is rendered fully in memory first, so a render failure
    /// leaves the sink untouched.
    pub fn finish_to(self, sink: &mut dyn Write) -> LatexResult<()> {
        let output = render(self.builder.into_log(), &self.options)?;
        sink.write_all(output.as_bytes())?;
        Ok(())
    }
}

/// Record and render one LaTeX document with default options
///
/// ```rust
/// use texflow::latex;
///
/// let out = latex(|doc| {
///     doc.name("alpha");
///     doc.name("beta");
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(out, "\n\\alpha\n\\beta");
/// ```
pub fn latex<F>(record: F) -> LatexResult<String>
where
    F: FnOnce(&mut LatexBuilder) -> LatexResult<()>,
{
    latex_with_options(RenderOptions::default(), record)
}

/// Record and render one LaTeX document with custom options
pub fn latex_with_options<F>(options: RenderOptions, record: F) -> LatexResult<String>
where
    F: FnOnce(&mut LatexBuilder) -> LatexResult<()>,
{
    let mut session = Session::with_options(options);
    record(session.doc())?;
    session.finish()
}

/// Record one LaTeX document and write it into a caller-supplied sink
pub fn latex_to_writer<F>(sink: &mut dyn Write, options: RenderOptions, record: F) -> LatexResult<()>
where
    F: FnOnce(&mut LatexBuilder) -> LatexResult<()>,
{
    let mut session = Session::with_options(options);
    record(session.doc())?;
    session.finish_to(sink)
}
