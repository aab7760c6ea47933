//! The primitive ways of building a [`Doc`].

use crate::doc::{Doc, Literal};
use crate::format_code::Colour;
use crate::geometry::{Indent, Width};
use crate::style::StyleChange;
use crate::transform::flatten;
use std::rc::Rc;

pub fn empty() -> Doc {
    Doc::Empty
}

/// Literal text. Must not contain a newline.
pub fn text(s: &str) -> Doc {
    if s.is_empty() {
        Doc::Empty
    } else {
        Doc::Text(Literal::new(s))
    }
}

/// A newline that is never flattened: a `group` containing it always breaks.
pub fn hardline() -> Doc {
    Doc::Line
}

/// A newline, or a space when flattened.
pub fn line() -> Doc {
    flat_alt(hardline(), text(" "))
}

/// A newline, or nothing when flattened.
pub fn linebreak() -> Doc {
    flat_alt(hardline(), empty())
}

/// A space if the rest of the line fits, otherwise a newline.
pub fn softline() -> Doc {
    group(line())
}

/// Nothing if the rest of the line fits, otherwise a newline.
pub fn softbreak() -> Doc {
    group(linebreak())
}

pub fn beside(left: Doc, right: Doc) -> Doc {
    left + right
}

/// Indent every line break in `doc` by `indent` more columns.
pub fn nest(indent: Indent, doc: Doc) -> Doc {
    Doc::Nest(indent, Rc::new(doc))
}

/// Display `broken` normally, but `flat` when an enclosing `group` is flattened.
pub fn flat_alt(broken: Doc, flat: Doc) -> Doc {
    Doc::FlatAlt(Rc::new(broken), Rc::new(flat))
}

/// Offer the renderer the choice of displaying `doc` on a single line. It takes it if the
/// flattened document fits in the remaining width.
pub fn group(doc: Doc) -> Doc {
    let flat = flatten(&doc);
    Doc::Union(Rc::new(flat), Rc::new(doc))
}

pub fn column(f: impl Fn(Width) -> Doc + 'static) -> Doc {
    Doc::Column(Rc::new(f))
}

/// The argument is the page width, or `None` when rendering compactly.
pub fn columns(f: impl Fn(Option<Width>) -> Doc + 'static) -> Doc {
    Doc::Columns(Rc::new(f))
}

pub fn nesting(f: impl Fn(Indent) -> Doc + 'static) -> Doc {
    Doc::Nesting(Rc::new(f))
}

pub fn style(change: StyleChange, doc: Doc) -> Doc {
    Doc::styled(change, Rc::new(doc))
}

pub fn colour(colour: Colour, doc: Doc) -> Doc {
    Doc::Colour(Some(colour), Rc::new(doc))
}

/// Display `doc` in the default colour, even inside a coloured region.
pub fn uncolour(doc: Doc) -> Doc {
    Doc::Colour(None, Rc::new(doc))
}

pub fn bold(doc: Doc) -> Doc {
    Doc::Bold(true, Rc::new(doc))
}

pub fn unbold(doc: Doc) -> Doc {
    Doc::Bold(false, Rc::new(doc))
}

pub fn strikethrough(doc: Doc) -> Doc {
    Doc::Strikethrough(true, Rc::new(doc))
}

pub fn unstrikethrough(doc: Doc) -> Doc {
    Doc::Strikethrough(false, Rc::new(doc))
}

pub fn underline(doc: Doc) -> Doc {
    Doc::Underline(true, Rc::new(doc))
}

pub fn ununderline(doc: Doc) -> Doc {
    Doc::Underline(false, Rc::new(doc))
}

pub fn italicise(doc: Doc) -> Doc {
    Doc::Italicise(true, Rc::new(doc))
}

pub fn unitalicise(doc: Doc) -> Doc {
    Doc::Italicise(false, Rc::new(doc))
}

pub fn obfuscate(doc: Doc) -> Doc {
    Doc::Obfuscate(true, Rc::new(doc))
}

pub fn unobfuscate(doc: Doc) -> Doc {
    Doc::Obfuscate(false, Rc::new(doc))
}
