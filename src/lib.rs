//! A pretty printer in the style of Wadler's "prettier printer", with nested text styling.
//!
//! Build a [`Doc`] out of the [`constructors`] and [`combinators`], then render it with
//! [`render_pretty`], [`render_smart`], or [`render_compact`] (or through [`RenderOptions`]).
//! Rendering makes every layout choice and produces a [`SimpleDoc`]: a flat sequence of text,
//! newlines, and abstract style [`Code`]s. Finally, turn that into a string with a
//! [`FormatCodes`] implementation, such as [`MinecraftCodes`] via [`display_s`], or
//! [`AnsiCodes`] for a terminal.

mod doc;
mod error;
mod geometry;
mod pretty_printing;
mod style;
mod transform;

pub mod combinators;
pub mod constructors;
pub mod format_code;

pub use doc::{Doc, Literal};
pub use error::PrintingError;
pub use format_code::{AnsiCodes, Code, Colour, Discard, FormatCodes, MinecraftCodes};
pub use geometry::{str_width, Indent, Width};
pub use pretty_printing::{
    display_s, render, render_compact, render_pretty, render_smart, RenderMode, RenderOptions,
    SimpleDoc, SimpleToken, Strategy,
};
pub use style::{FormatState, StyleChange};
pub use transform::{flatten, plain};
