use super::simple_doc::{SimpleDoc, SimpleToken};
use crate::doc::Doc;
use std::rc::Rc;

/// Render `doc` without making any layout decisions: every group takes its broken form and
/// nothing is indented. Styles are dropped, so the output contains no `Format` tokens.
///
/// This is as fast as rendering gets, for output that no person will read.
pub fn render_compact(doc: &Doc) -> SimpleDoc {
    log::trace!("render_compact");

    let mut tokens = Vec::new();
    let mut col = 0;
    let mut stack = vec![Rc::new(doc.clone())];
    while let Some(doc) = stack.pop() {
        match &*doc {
            Doc::Fail => {
                tokens.push(SimpleToken::Fail);
                break;
            }
            Doc::Empty | Doc::RestoreFormat(_) => (),
            Doc::Text(lit) => {
                col += lit.width();
                tokens.push(SimpleToken::Text(lit.clone()));
            }
            Doc::Line => {
                col = 0;
                tokens.push(SimpleToken::Line(0));
            }
            Doc::FlatAlt(broken, _) | Doc::Union(_, broken) => stack.push(broken.clone()),
            Doc::Cat(left, right) => {
                stack.push(right.clone());
                stack.push(left.clone());
            }
            Doc::Nest(_, inner) => stack.push(inner.clone()),
            Doc::Column(f) => stack.push(Rc::new(f(col))),
            Doc::Columns(f) => stack.push(Rc::new(f(None))),
            Doc::Nesting(f) => stack.push(Rc::new(f(0))),
            Doc::Colour(_, inner)
            | Doc::Bold(_, inner)
            | Doc::Strikethrough(_, inner)
            | Doc::Underline(_, inner)
            | Doc::Italicise(_, inner)
            | Doc::Obfuscate(_, inner) => stack.push(inner.clone()),
        }
    }
    SimpleDoc::from(tokens)
}
