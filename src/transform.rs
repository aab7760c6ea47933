//! Whole-document rewrites: [`flatten`] and [`plain`].
//!
//! Both walk the document with an explicit stack, so they work on documents far deeper than
//! the call stack would allow, and both share every subtree they leave unchanged.

use crate::doc::Doc;
use crate::geometry::{Indent, Width};
use std::rc::Rc;

/// What to do with one node of the document being rewritten.
enum Rewrite {
    /// Rebuild this node from its rewritten children.
    Keep,
    /// Use this document in place of the node, as is.
    Replace(Rc<Doc>),
    /// Rewrite this document in place of the node.
    Descend(Rc<Doc>),
}

enum Task {
    Visit(Rc<Doc>),
    Rebuild(Rc<Doc>),
}

/// The document that would be displayed if every breakable point took its flat form. Any
/// unconditional `Line` becomes `Fail`, since it cannot be put on one line.
pub fn flatten(doc: &Doc) -> Doc {
    into_doc(rewrite(Rc::new(doc.clone()), &flatten_step))
}

fn flatten_step(doc: &Rc<Doc>) -> Rewrite {
    match &**doc {
        Doc::FlatAlt(_, flat) => Rewrite::Replace(flat.clone()),
        Doc::Line => Rewrite::Replace(Rc::new(Doc::Fail)),
        Doc::Union(flat, _) => Rewrite::Descend(flat.clone()),
        Doc::Column(f) => {
            let f = f.clone();
            Rewrite::Replace(Rc::new(Doc::Column(Rc::new(move |col: Width| {
                flatten(&f(col))
            }))))
        }
        Doc::Columns(f) => {
            let f = f.clone();
            Rewrite::Replace(Rc::new(Doc::Columns(Rc::new(move |width: Option<Width>| {
                flatten(&f(width))
            }))))
        }
        Doc::Nesting(f) => {
            let f = f.clone();
            Rewrite::Replace(Rc::new(Doc::Nesting(Rc::new(move |indent: Indent| {
                flatten(&f(indent))
            }))))
        }
        _ => Rewrite::Keep,
    }
}

/// Remove all styling from a document, keeping its layout exactly as it was.
pub fn plain(doc: &Doc) -> Doc {
    into_doc(rewrite(Rc::new(doc.clone()), &plain_step))
}

fn plain_step(doc: &Rc<Doc>) -> Rewrite {
    if let Some((_, inner)) = doc.style_change() {
        return Rewrite::Descend(inner.clone());
    }
    match &**doc {
        Doc::RestoreFormat(_) => Rewrite::Replace(Rc::new(Doc::Empty)),
        Doc::Column(f) => {
            let f = f.clone();
            Rewrite::Replace(Rc::new(Doc::Column(Rc::new(move |col: Width| {
                plain(&f(col))
            }))))
        }
        Doc::Columns(f) => {
            let f = f.clone();
            Rewrite::Replace(Rc::new(Doc::Columns(Rc::new(move |width: Option<Width>| {
                plain(&f(width))
            }))))
        }
        Doc::Nesting(f) => {
            let f = f.clone();
            Rewrite::Replace(Rc::new(Doc::Nesting(Rc::new(move |indent: Indent| {
                plain(&f(indent))
            }))))
        }
        _ => Rewrite::Keep,
    }
}

fn into_doc(doc: Rc<Doc>) -> Doc {
    Rc::try_unwrap(doc).unwrap_or_else(|shared| (*shared).clone())
}

fn rewrite(root: Rc<Doc>, step: &dyn Fn(&Rc<Doc>) -> Rewrite) -> Rc<Doc> {
    // Rewritten documents, in the order their visits finished.
    let mut done: Vec<Rc<Doc>> = Vec::new();
    let mut tasks = vec![Task::Visit(root)];
    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(doc) => match step(&doc) {
                Rewrite::Replace(new_doc) => done.push(new_doc),
                Rewrite::Descend(inner) => tasks.push(Task::Visit(inner)),
                Rewrite::Keep => {
                    let children = doc
                        .children()
                        .into_iter()
                        .rev()
                        .map(|child| Task::Visit(child.clone()))
                        .collect::<Vec<_>>();
                    tasks.push(Task::Rebuild(doc));
                    tasks.extend(children);
                }
            },
            Task::Rebuild(doc) => {
                let new_doc = rebuild(doc, &mut done);
                done.push(new_doc);
            }
        }
    }
    assert_eq!(done.len(), 1, "bug in rewrite");
    done.remove(0)
}

/// Replace the children of `doc` with the last entries of `done`, reusing `doc` if none of them
/// changed.
fn rebuild(doc: Rc<Doc>, done: &mut Vec<Rc<Doc>>) -> Rc<Doc> {
    let arity = doc.children().len();
    assert!(done.len() >= arity, "bug in rebuild");
    let new_children = done.split_off(done.len() - arity);
    let unchanged = doc
        .children()
        .into_iter()
        .zip(new_children.iter())
        .all(|(old, new)| Rc::ptr_eq(old, new));
    if unchanged {
        return doc;
    }

    let mut new_children = new_children.into_iter();
    let mut next = || new_children.next().unwrap_or_else(|| panic!("bug in rebuild"));
    let new_doc = match &*doc {
        Doc::FlatAlt(_, _) => {
            let broken = next();
            Doc::FlatAlt(broken, next())
        }
        Doc::Cat(_, _) => {
            let left = next();
            Doc::Cat(left, next())
        }
        Doc::Union(_, _) => {
            let flat = next();
            Doc::Union(flat, next())
        }
        Doc::Nest(indent, _) => Doc::Nest(*indent, next()),
        other => match other.style_change() {
            Some((change, _)) => Doc::styled(change, next()),
            None => panic!("bug in rebuild: leaf with children"),
        },
    };
    Rc::new(new_doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructors::{bold, colour, group, hardline, line, nest, text};
    use crate::format_code::Colour;

    #[test]
    fn test_flatten_flat_alt() {
        let doc = text("a") + line() + text("b");
        assert_eq!(flatten(&doc).to_string(), "'a' + ' ' + 'b'");
    }

    #[test]
    fn test_flatten_hardline_fails() {
        let doc = nest(2, text("a") + hardline());
        assert_eq!(flatten(&doc).to_string(), "2⇒('a' + ⊥)");
    }

    #[test]
    fn test_flatten_union() {
        let doc = group(text("a") + line() + text("b"));
        assert_eq!(flatten(&doc).to_string(), "'a' + ' ' + 'b'");
    }

    #[test]
    fn test_flatten_keeps_style() {
        let doc = bold(text("a") + line());
        assert_eq!(flatten(&doc).to_string(), "bold('a' + ' ')");
    }

    #[test]
    fn test_plain() {
        let doc = bold(text("a") + colour(Colour::Red, line() + text("b")));
        assert_eq!(
            plain(&doc).to_string(),
            "'a' + FlatAlt(↵, ' ') + 'b'"
        );
    }

    #[test]
    fn test_rewrite_shares_unchanged() {
        let doc = text("a") + text("b");
        if let (Doc::Cat(old, _), Doc::Cat(new, _)) = (&doc, &flatten(&doc)) {
            assert!(Rc::ptr_eq(old, new));
        } else {
            panic!("expected a concatenation");
        }
    }

    #[test]
    fn test_flatten_deep() {
        let mut doc = text("x");
        for _ in 0..100_000 {
            doc = doc + line();
        }
        assert!(matches!(flatten(&doc), Doc::Cat(_, _)));
    }
}
