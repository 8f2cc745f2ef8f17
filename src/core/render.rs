//! Single-pass renderer from token log to LaTeX text
//!
//! The renderer is the only place that interprets tokens. It consumes the log
//! front-to-back exactly once, tracks open environments on an explicit stack,
//! and emits indented LaTeX into a pre-allocated `String` buffer. Indentation
//! is purely a function of the stack depth at the moment a token is
//! processed.

use super::session::RenderOptions;
use super::token::{Token, TokenLog};
use crate::utils::error::{LatexError, LatexResult};

/// Initial capacity for the output buffer (reduces reallocations)
const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// Rendering state: the output buffer and the stack of open environments
struct RenderContext {
    output: String,
    env_stack: Vec<String>,
    indent_depth: usize,
}

impl RenderContext {
    fn new(options: &RenderOptions) -> Self {
        Self {
            output: String::with_capacity(INITIAL_BUFFER_CAPACITY),
            env_stack: Vec::new(),
            indent_depth: options.indent_depth,
        }
    }

    fn indent(&self) -> String {
        " ".repeat(self.env_stack.len() * self.indent_depth)
    }

    /// Start a fresh output line at the current nesting depth
    fn push_line_start(&mut self) {
        self.output.push('\n');
        let indent = self.indent();
        self.output.push_str(&indent);
    }
}

/// Render a token log into LaTeX source text
///
/// Drains the log in one pass. Fails on an environment close with no open
/// environment, and on an enter marker not immediately followed by a name
/// (the latter indicates a recorder defect, not bad user input).
pub fn render(log: TokenLog, options: &RenderOptions) -> LatexResult<String> {
    let mut ctx = RenderContext::new(options);
    let mut tokens = log.into_tokens();

    while let Some(token) = tokens.next() {
        match token {
            Token::EnterEnv => {
                let name = match tokens.next() {
                    Some(Token::Name(name)) => name,
                    other => {
                        return Err(LatexError::malformed(format!(
                            "environment marker must be followed by a name, found {:?}",
                            other
                        )))
                    }
                };
                ctx.push_line_start();
                ctx.output.push_str("\\begin{");
                ctx.output.push_str(&name);
                ctx.output.push('}');
                ctx.env_stack.push(name);
            }
            Token::LeaveEnv => {
                let name = ctx.env_stack.pop().ok_or_else(|| {
                    LatexError::unbalanced("environment closed with no open environment")
                })?;
                ctx.push_line_start();
                ctx.output.push_str("\\end{");
                ctx.output.push_str(&name);
                ctx.output.push('}');
            }
            Token::Name(name) => {
                ctx.push_line_start();
                ctx.output.push('\\');
                ctx.output.push_str(&name);
            }
            Token::Required(arguments) => {
                ctx.output.push('{');
                ctx.output.push_str(&arguments.format_params());
                ctx.output.push('}');
            }
            Token::Optional(arguments) => {
                ctx.output.push('[');
                ctx.output.push_str(&arguments.format_params());
                ctx.output.push(']');
            }
            Token::Text(content) => {
                ctx.output.push('\n');
                let indent = ctx.indent();
                // Blank lines stay unprefixed; a trailing newline survives
                for (i, line) in content.split('\n').enumerate() {
                    if i > 0 {
                        ctx.output.push('\n');
                    }
                    if !line.trim().is_empty() {
                        ctx.output.push_str(&indent);
                    }
                    ctx.output.push_str(line);
                }
            }
        }
    }

    Ok(ctx.output)
}
