//! Derived combinators, built entirely out of the [`constructors`](crate::constructors).

use crate::constructors::{
    column, empty, group, hardline, line, linebreak, nest, nesting, softbreak, softline, text,
};
use crate::doc::Doc;
use crate::geometry::{Indent, Width};

/// Fold `docs` from the right with `f`. Empty if there are no documents.
fn fold(docs: impl IntoIterator<Item = Doc>, f: impl Fn(Doc, Doc) -> Doc) -> Doc {
    let mut docs = docs.into_iter().collect::<Vec<_>>();
    let mut folded = match docs.pop() {
        None => return empty(),
        Some(last) => last,
    };
    while let Some(doc) = docs.pop() {
        folded = f(doc, folded);
    }
    folded
}

fn spaces(n: Width) -> Doc {
    text(&" ".repeat(n))
}

/// `left <+> right`: separated by a space.
pub fn beside_space(left: Doc, right: Doc) -> Doc {
    left + text(" ") + right
}

/// `left </> right`: separated by a space, or a newline if the right doesn't fit.
pub fn beside_softline(left: Doc, right: Doc) -> Doc {
    left + softline() + right
}

/// `left <//> right`: adjacent, or separated by a newline if the right doesn't fit.
pub fn beside_softbreak(left: Doc, right: Doc) -> Doc {
    left + softbreak() + right
}

/// `left <$> right`: separated by a `line`.
pub fn above(left: Doc, right: Doc) -> Doc {
    left + line() + right
}

/// `left <$$> right`: separated by a `linebreak`.
pub fn above_break(left: Doc, right: Doc) -> Doc {
    left + linebreak() + right
}

/// Lay out `doc` with its nesting level set to the current column, so that its lines start
/// where it does.
pub fn align(doc: Doc) -> Doc {
    column(move |col| {
        let doc = doc.clone();
        nesting(move |indent| nest(col as Indent - indent, doc.clone()))
    })
}

/// Align `doc`, and indent all its lines but the first by `indent` more.
pub fn hang(indent: Indent, doc: Doc) -> Doc {
    align(nest(indent, doc))
}

/// Indent every line of `doc`, including the first, by `indent` columns from the current one.
pub fn indent(indent: Width, doc: Doc) -> Doc {
    hang(indent as Indent, spaces(indent) + doc)
}

pub fn enclose(left: Doc, right: Doc, doc: Doc) -> Doc {
    left + doc + right
}

/// `left` followed by `docs` separated by `separator`, then `right`. On one line if it fits,
/// otherwise one document per line with the separators in front, aligned under `left`.
pub fn enclose_sep(left: Doc, right: Doc, separator: Doc, docs: Vec<Doc>) -> Doc {
    match docs.len() {
        0 => left + right,
        1 => {
            let mut docs = docs;
            let only = docs.remove(0);
            left + only + right
        }
        _ => {
            let mut prefixes = vec![left];
            prefixes.resize(docs.len(), separator);
            let items = prefixes
                .into_iter()
                .zip(docs)
                .map(|(prefix, doc)| prefix + doc);
            align(cat(items) + right)
        }
    }
}

pub fn list(docs: Vec<Doc>) -> Doc {
    enclose_sep(text("["), text("]"), text(","), docs)
}

pub fn tupled(docs: Vec<Doc>) -> Doc {
    enclose_sep(text("("), text(")"), text(","), docs)
}

pub fn semi_braces(docs: Vec<Doc>) -> Doc {
    enclose_sep(text("{"), text("}"), text(";"), docs)
}

/// Append `separator` to every document but the last.
pub fn punctuate(separator: Doc, docs: Vec<Doc>) -> Vec<Doc> {
    let len = docs.len();
    docs.into_iter()
        .enumerate()
        .map(|(i, doc)| {
            if i + 1 < len {
                doc + separator.clone()
            } else {
                doc
            }
        })
        .collect()
}

/// Separated by spaces if they all fit on one line, otherwise by newlines.
pub fn sep(docs: impl IntoIterator<Item = Doc>) -> Doc {
    group(vsep(docs))
}

pub fn vsep(docs: impl IntoIterator<Item = Doc>) -> Doc {
    fold(docs, above)
}

pub fn hsep(docs: impl IntoIterator<Item = Doc>) -> Doc {
    fold(docs, beside_space)
}

/// As many documents per line as fit, separated by spaces.
pub fn fill_sep(docs: impl IntoIterator<Item = Doc>) -> Doc {
    fold(docs, beside_softline)
}

/// Adjacent if they all fit on one line, otherwise separated by newlines.
pub fn cat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    group(vcat(docs))
}

pub fn vcat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    fold(docs, above_break)
}

pub fn hcat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    fold(docs, |left, right| left + right)
}

/// As many documents per line as fit, with nothing in between.
pub fn fill_cat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    fold(docs, beside_softbreak)
}

/// Display `doc`, then `f` of the number of columns it took up on its last line.
pub fn width(doc: Doc, f: impl Fn(Width) -> Doc + 'static) -> Doc {
    let f = std::rc::Rc::new(f);
    column(move |start| {
        let f = f.clone();
        doc.clone() + column(move |end| f(end.saturating_sub(start)))
    })
}

/// Pad `doc` with spaces until it is `target` columns wide.
pub fn fill(target: Width, doc: Doc) -> Doc {
    width(doc, move |w| {
        if w >= target {
            empty()
        } else {
            spaces(target - w)
        }
    })
}

/// Like `fill`, but if `doc` is wider than `target`, continue on a new line indented by
/// `target`.
pub fn fill_break(target: Width, doc: Doc) -> Doc {
    width(doc, move |w| {
        if w > target {
            nest(target as Indent, linebreak())
        } else {
            spaces(target - w)
        }
    })
}

/// Text that may contain newlines: each one becomes a `line`.
pub fn string(s: &str) -> Doc {
    fold(s.split('\n').map(text), |left, right| left + line() + right)
}

/// Text with each newline displayed as a `hardline`.
pub fn lines(s: &str) -> Doc {
    fold(s.split('\n').map(text), |left, right| left + hardline() + right)
}

pub fn parens(doc: Doc) -> Doc {
    enclose(text("("), text(")"), doc)
}

pub fn brackets(doc: Doc) -> Doc {
    enclose(text("["), text("]"), doc)
}

pub fn braces(doc: Doc) -> Doc {
    enclose(text("{"), text("}"), doc)
}

pub fn angles(doc: Doc) -> Doc {
    enclose(text("<"), text(">"), doc)
}

pub fn squotes(doc: Doc) -> Doc {
    enclose(text("'"), text("'"), doc)
}

pub fn dquotes(doc: Doc) -> Doc {
    enclose(text("\""), text("\""), doc)
}
