//! Core generation modules
//!
//! This module contains the two halves of the generator:
//! - `token` / `builder`: the recording side (fluent builder appending to a token log)
//! - `render`: the replay side (single-pass log-to-LaTeX renderer)
//! - `session`: wiring that binds one log to one render

pub mod builder;
pub mod render;
pub mod session;
pub mod token;

// Re-export main types and functions
pub use builder::LatexBuilder;
pub use render::render;
pub use session::{latex, latex_to_writer, latex_with_options, RenderOptions, Session};
pub use token::{args, Args, Token, TokenLog};
