//! # texflow
//!
//! Fluent LaTeX source generation: record a sequence of builder operations
//! into a token log, then replay the log once into properly nested, indented
//! LaTeX text.
//!
//! ## Features
//!
//! - **Deferred rendering**: recording only appends tokens; all nesting and
//!   indentation logic lives in a single replay pass
//! - **Fluent surface**: macro names, `{required}` and `[optional]` argument
//!   groups, raw text, and scoped environments chain naturally
//! - **Ordered arguments**: positional values keep call order, named values
//!   keep insertion order
//! - **Typed failures**: unbalanced or malformed logs surface as errors, not
//!   silently broken output
//!
//! ## Usage
//!
//! ```rust
//! use texflow::{args, latex};
//!
//! let out = latex(|doc| {
//!     doc.name("figure").optional("h!").environment(|doc| {
//!         doc.name("includegraphics")
//!             .optional(args().named("width", r"\textwidth"))
//!             .required("fig.png");
//!         doc.name("caption").required("Some Caption");
//!         Ok(())
//!     })?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     out,
//!     "\n\\begin{figure}[h!]\
//!      \n    \\includegraphics[width=\\textwidth]{fig.png}\
//!      \n    \\caption{Some Caption}\
//!      \n\\end{figure}"
//! );
//! ```
//!
//! Macro semantics are deliberately out of scope: the builder serializes
//! whatever names and arguments were recorded, without parsing or validating
//! LaTeX.

/// Core generation modules
pub mod core;

/// Utility modules
pub mod utils;

// Re-export the recording and rendering surface
pub use core::builder::LatexBuilder;
pub use core::render::render;
pub use core::session::{latex, latex_to_writer, latex_with_options, RenderOptions, Session};
pub use core::token::{args, Args, Token, TokenLog};

// Re-export error types
pub use utils::error::{LatexError, LatexResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_text() {
        let out = latex(|doc| {
            doc.text("HI");
            Ok(())
        })
        .unwrap();
        assert_eq!(out, "\nHI");
    }

    #[test]
    fn test_macro_with_required_argument() {
        let out = latex(|doc| {
            doc.name("section").required("Introduction");
            Ok(())
        })
        .unwrap();
        assert_eq!(out, "\n\\section{Introduction}");
    }

    #[test]
    fn test_nested_environments() {
        let out = latex(|doc| {
            doc.name("figure").environment(|doc| {
                doc.name("center").environment(|doc| {
                    doc.name("small");
                    Ok(())
                })?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
        assert_eq!(
            out,
            "\n\\begin{figure}\
             \n    \\begin{center}\
             \n        \\small\
             \n    \\end{center}\
             \n\\end{figure}"
        );
    }

    #[test]
    fn test_custom_indent_depth() {
        let out = latex_with_options(RenderOptions::with_indent(2), |doc| {
            doc.name("center").environment(|doc| {
                doc.name("alpha");
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
        assert_eq!(out, "\n\\begin{center}\n  \\alpha\n\\end{center}");
    }

    #[test]
    fn test_unbalanced_close_surfaces_error() {
        let result = latex(|doc| {
            doc.end_environment();
            Ok(())
        });
        assert!(matches!(
            result,
            Err(LatexError::UnbalancedEnvironment { .. })
        ));
    }
}
