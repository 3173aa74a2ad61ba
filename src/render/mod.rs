//! Output renderers for classified tokens
//!
//! - `html`: markup fragment with one class-tagged `<span>` per token
//! - `ansi`: colored terminal preview

pub mod ansi;
pub mod html;
