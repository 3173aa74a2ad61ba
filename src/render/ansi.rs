//! Terminal preview using crossterm
//!
//! Each classified token is printed with its class's default style, then
//! attributes are reset so plain text keeps the terminal defaults.

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::Token;

/// Write tokens to `out` with ANSI styling
pub fn write_ansi<W: Write>(out: &mut W, tokens: &[Token]) -> Result<()> {
    for token in tokens {
        let style = match token.class {
            Some(class) => class.default_style(),
            None => {
                queue!(out, Print(&token.text))?;
                continue;
            }
        };

        if let Some(color) = style.fg.to_crossterm() {
            queue!(out, SetForegroundColor(color))?;
        }
        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        queue!(out, Print(&token.text), SetAttribute(Attribute::Reset), ResetColor)?;
    }
    out.flush()?;
    Ok(())
}
