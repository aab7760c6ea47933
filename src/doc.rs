use crate::format_code::Colour;
use crate::geometry::{str_width, Indent, Width};
use crate::style::{FormatState, StyleChange};
use std::fmt;
use std::mem;
use std::ops::{Add, BitXor};
use std::rc::Rc;

/// A document: some content, together with the layout alternatives the renderer may choose
/// between. Documents are immutable, and cloning one is cheap (children are shared), so the same
/// document can be rendered any number of times.
///
/// Build documents with the functions in [`constructors`](crate::constructors) and
/// [`combinators`](crate::combinators) rather than by hand. In particular `Union` should only
/// ever come from [`group`](crate::constructors::group), whose flat alternative has been
/// [`flatten`](crate::flatten)ed, and `RestoreFormat` is inserted by the renderer.
#[derive(Clone)]
pub enum Doc {
    /// This layout alternative is infeasible. Only produced by `flatten`.
    Fail,
    /// Display nothing.
    Empty,
    /// Literal text, without any newline.
    Text(Literal),
    /// A newline followed by the current indentation. Cannot be flattened.
    Line,
    /// Display the first document normally, but the second one when flattened.
    FlatAlt(Rc<Doc>, Rc<Doc>),
    /// Display both documents, the second starting where the first ends.
    Cat(Rc<Doc>, Rc<Doc>),
    /// Increase the indentation of every `Line` in the contained document.
    Nest(Indent, Rc<Doc>),
    /// Display the first (flattened) document if it fits, otherwise the second.
    Union(Rc<Doc>, Rc<Doc>),
    /// A document that depends on the column it starts at.
    Column(Rc<dyn Fn(Width) -> Doc>),
    /// A document that depends on the page width, if there is one.
    Columns(Rc<dyn Fn(Option<Width>) -> Doc>),
    /// A document that depends on the current indentation level.
    Nesting(Rc<dyn Fn(Indent) -> Doc>),
    /// Set (or with `None`, remove) the colour of the contained document.
    Colour(Option<Colour>, Rc<Doc>),
    Bold(bool, Rc<Doc>),
    Strikethrough(bool, Rc<Doc>),
    Underline(bool, Rc<Doc>),
    Italicise(bool, Rc<Doc>),
    Obfuscate(bool, Rc<Doc>),
    /// Re-establish the style that was in effect before a style wrapper was entered.
    RestoreFormat(FormatState),
}

/// A piece of text that fits on one line, with its display width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    string: Rc<str>,
    width: Width,
}

impl Literal {
    /// Panics if `s` contains a newline: use [`hardline`](crate::constructors::hardline) or
    /// [`string`](crate::combinators::string) for those.
    pub fn new(s: &str) -> Literal {
        assert!(
            !s.contains('\n'),
            "Text in a document must not contain a newline: {:?}",
            s
        );
        Literal {
            string: Rc::from(s),
            width: str_width(s),
        }
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn str(&self) -> &str {
        &self.string
    }
}

impl Doc {
    /// If this is a style wrapper, the attribute change it makes and the document it wraps.
    pub fn style_change(&self) -> Option<(StyleChange, &Rc<Doc>)> {
        match self {
            Doc::Colour(colour, doc) => Some((StyleChange::Colour(*colour), doc)),
            Doc::Bold(on, doc) => Some((StyleChange::Bold(*on), doc)),
            Doc::Strikethrough(on, doc) => Some((StyleChange::Strikethrough(*on), doc)),
            Doc::Underline(on, doc) => Some((StyleChange::Underline(*on), doc)),
            Doc::Italicise(on, doc) => Some((StyleChange::Italic(*on), doc)),
            Doc::Obfuscate(on, doc) => Some((StyleChange::Obfuscated(*on), doc)),
            _ => None,
        }
    }

    /// Wrap `doc` in the style wrapper that makes `change`.
    pub fn styled(change: StyleChange, doc: Rc<Doc>) -> Doc {
        match change {
            StyleChange::Colour(colour) => Doc::Colour(colour, doc),
            StyleChange::Bold(on) => Doc::Bold(on, doc),
            StyleChange::Strikethrough(on) => Doc::Strikethrough(on, doc),
            StyleChange::Underline(on) => Doc::Underline(on, doc),
            StyleChange::Italic(on) => Doc::Italicise(on, doc),
            StyleChange::Obfuscated(on) => Doc::Obfuscate(on, doc),
        }
    }

    /// The immediate sub-documents, left to right. The documents produced by `Column`,
    /// `Columns`, and `Nesting` don't exist yet, so those have none.
    pub fn children(&self) -> Vec<&Rc<Doc>> {
        match self {
            Doc::FlatAlt(left, right) | Doc::Cat(left, right) | Doc::Union(left, right) => {
                vec![left, right]
            }
            Doc::Nest(_, doc) => vec![doc],
            _ => match self.style_change() {
                Some((_, doc)) => vec![doc],
                None => Vec::new(),
            },
        }
    }

    fn child_slots(&mut self) -> Vec<&mut Rc<Doc>> {
        match self {
            Doc::FlatAlt(left, right) | Doc::Cat(left, right) | Doc::Union(left, right) => {
                vec![left, right]
            }
            Doc::Nest(_, doc)
            | Doc::Colour(_, doc)
            | Doc::Bold(_, doc)
            | Doc::Strikethrough(_, doc)
            | Doc::Underline(_, doc)
            | Doc::Italicise(_, doc)
            | Doc::Obfuscate(_, doc) => vec![doc],
            Doc::Fail
            | Doc::Empty
            | Doc::Text(_)
            | Doc::Line
            | Doc::Column(_)
            | Doc::Columns(_)
            | Doc::Nesting(_)
            | Doc::RestoreFormat(_) => Vec::new(),
        }
    }
}

impl Default for Doc {
    fn default() -> Doc {
        Doc::Empty
    }
}

thread_local! {
    static DETACHED: Rc<Doc> = Rc::new(Doc::Empty);
}

// Documents built from long sequences are very deep, so drop them with an explicit stack
// instead of letting the compiler-generated drop recurse once per level.
impl Drop for Doc {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut child) = pending.pop() {
            if let Some(doc) = Rc::get_mut(&mut child) {
                detach_children(doc, &mut pending);
            }
        }
    }
}

/// Move every uniquely owned, non-leaf child of `doc` into `pending`.
fn detach_children(doc: &mut Doc, pending: &mut Vec<Rc<Doc>>) {
    for slot in doc.child_slots() {
        if Rc::strong_count(slot) != 1 || slot.children().is_empty() {
            continue;
        }
        // The placeholder is unavailable while thread-locals are being torn down; fall back to
        // an ordinary recursive drop then.
        match DETACHED.try_with(Rc::clone) {
            Ok(placeholder) => pending.push(mem::replace(slot, placeholder)),
            Err(_) => return,
        }
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Doc::Fail => write!(f, "⊥"),
            Doc::Empty => write!(f, "ε"),
            Doc::Text(lit) => write!(f, "'{}'", lit.str()),
            Doc::Line => write!(f, "↵"),
            Doc::FlatAlt(broken, flat) => write!(f, "FlatAlt({}, {})", broken, flat),
            Doc::Cat(left, right) => write!(f, "{} + {}", left, right),
            Doc::Nest(i, doc) => write!(f, "{}⇒({})", i, doc),
            Doc::Union(flat, broken) => write!(f, "({} | {})", flat, broken),
            Doc::Column(_) => write!(f, "Column(..)"),
            Doc::Columns(_) => write!(f, "Columns(..)"),
            Doc::Nesting(_) => write!(f, "Nesting(..)"),
            Doc::Colour(Some(colour), doc) => write!(f, "{}({})", colour, doc),
            Doc::Colour(None, doc) => write!(f, "¬colour({})", doc),
            Doc::RestoreFormat(state) => write!(f, "Restore({:?})", state),
            Doc::Bold(on, doc)
            | Doc::Strikethrough(on, doc)
            | Doc::Underline(on, doc)
            | Doc::Italicise(on, doc)
            | Doc::Obfuscate(on, doc) => {
                let name = match self {
                    Doc::Bold(..) => "bold",
                    Doc::Strikethrough(..) => "strikethrough",
                    Doc::Underline(..) => "underline",
                    Doc::Italicise(..) => "italic",
                    _ => "obfuscated",
                };
                let negation = if *on { "" } else { "¬" };
                write!(f, "{}{}({})", negation, name, doc)
            }
        }
    }
}

impl fmt::Debug for Doc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Add<Doc> for Doc {
    type Output = Doc;

    /// Shorthand for `beside`.
    fn add(self, other: Doc) -> Doc {
        Doc::Cat(Rc::new(self), Rc::new(other))
    }
}

impl BitXor<Doc> for Doc {
    type Output = Doc;

    /// Shorthand for `X + hardline() + Y`.
    fn bitxor(self, other: Doc) -> Doc {
        self + Doc::Line + other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Doc {
        Doc::Text(Literal::new(s))
    }

    #[test]
    fn test_display() {
        let doc = Doc::Nest(2, Rc::new(lit("a") ^ lit("b")));
        assert_eq!(doc.to_string(), "2⇒('a' + ↵ + 'b')");
        let doc = Doc::Bold(false, Rc::new(Doc::Colour(Some(Colour::Red), Rc::new(lit("x")))));
        assert_eq!(doc.to_string(), "¬bold(red('x'))");
    }

    #[test]
    #[should_panic(expected = "must not contain a newline")]
    fn test_newline_in_literal() {
        Literal::new("a\nb");
    }

    #[test]
    fn test_literal_width() {
        assert_eq!(Literal::new("wide 日本").width(), 9);
    }

    #[test]
    fn test_drop_deep_doc() {
        let mut doc = Doc::Empty;
        for _ in 0..200_000 {
            doc = lit("x") + doc;
        }
        let shared = doc.clone();
        drop(doc);
        assert!(matches!(shared, Doc::Cat(_, _)));
    }
}
