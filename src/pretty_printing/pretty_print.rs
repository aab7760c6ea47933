use super::fits::{FitCheck, Strategy};
use super::simple_doc::{SimpleDoc, SimpleToken};
use crate::doc::Doc;
use crate::geometry::{Indent, Width};
use crate::style::{FormatState, StyleChange};
use std::collections::VecDeque;
use std::mem;
use std::rc::Rc;

/// Render `doc` for a page `width` columns wide, looking ahead one line when choosing layouts.
///
/// `ribbon_frac` is the fraction of the width that may be taken up by non-indentation
/// characters on any one line; it is clamped to `[0, 1]`.
pub fn render_pretty(ribbon_frac: f64, width: Width, doc: &Doc) -> SimpleDoc {
    render(Strategy::Pretty, ribbon_frac, width, doc)
}

/// Like [`render_pretty`], but also looks at the line after a group when that line is nested
/// deeper than the group. This keeps deeply nested calls from piling up at the right margin.
pub fn render_smart(ribbon_frac: f64, width: Width, doc: &Doc) -> SimpleDoc {
    render(Strategy::Smart, ribbon_frac, width, doc)
}

/// Resolve every layout choice in `doc`.
pub fn render(strategy: Strategy, ribbon_frac: f64, width: Width, doc: &Doc) -> SimpleDoc {
    let ribbon = ribbon_width(ribbon_frac, width);
    log::trace!(
        "render: strategy={:?} width={} ribbon={}",
        strategy,
        width,
        ribbon
    );

    let mut stack = WorkStack::default();
    stack.push(0, Rc::new(doc.clone()));
    let resolver = Resolver {
        page: Page {
            width,
            ribbon,
            strategy,
        },
        pos: Position {
            line_indent: 0,
            col: 0,
            format: FormatState::plain(),
            stack,
        },
        trials: Vec::new(),
        pending: Vec::new(),
        ready: VecDeque::new(),
    };
    resolver.collect()
}

fn ribbon_width(ribbon_frac: f64, width: Width) -> Width {
    let frac = if ribbon_frac.is_nan() {
        1.0
    } else {
        ribbon_frac.max(0.0).min(1.0)
    };
    if frac != ribbon_frac {
        log::debug!("ribbon fraction {} clamped to {}", ribbon_frac, frac);
    }
    let ribbon = (width as f64 * frac).round() as Width;
    ribbon.min(width)
}

#[derive(Clone, Copy, Debug)]
struct Page {
    width: Width,
    ribbon: Width,
    strategy: Strategy,
}

struct Frame {
    indent: Indent,
    doc: Rc<Doc>,
    rest: WorkStack,
}

/// The documents still to be resolved, topmost first, each with its indentation level.
///
/// A persistent list: cloning it is O(1), which is what lets both alternatives of a `Union` be
/// resolved independently from the same point.
#[derive(Clone, Default)]
struct WorkStack(Option<Rc<Frame>>);

impl WorkStack {
    fn push(&mut self, indent: Indent, doc: Rc<Doc>) {
        let rest = mem::take(self);
        self.0 = Some(Rc::new(Frame { indent, doc, rest }));
    }

    fn pop(&mut self) -> Option<(Indent, Rc<Doc>)> {
        let frame = self.0.take()?;
        match Rc::try_unwrap(frame) {
            Ok(mut frame) => {
                *self = mem::take(&mut frame.rest);
                Some((frame.indent, frame.doc))
            }
            Err(shared) => {
                *self = shared.rest.clone();
                Some((shared.indent, shared.doc.clone()))
            }
        }
    }
}

impl Drop for WorkStack {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(frame) = next {
            next = match Rc::try_unwrap(frame) {
                Ok(mut frame) => frame.rest.0.take(),
                Err(_) => None,
            };
        }
    }
}

/// Where resolution has got to: everything needed to carry on from one point of the output.
/// Cloning is O(1), so a choice can remember where its other alternative starts.
#[derive(Clone)]
struct Position {
    line_indent: Width,
    col: Width,
    format: FormatState,
    stack: WorkStack,
}

enum Step {
    Token(SimpleToken),
    Choice(Indent, Rc<Doc>, Rc<Doc>),
    Done,
}

impl Position {
    /// Advance to the next token or the next layout choice, whichever comes first.
    fn step(&mut self, page_width: Width) -> Step {
        while let Some((indent, doc)) = self.stack.pop() {
            match &*doc {
                Doc::Fail => {
                    self.stack = WorkStack::default();
                    return Step::Token(SimpleToken::Fail);
                }
                Doc::Empty => (),
                Doc::Text(lit) => {
                    self.col += lit.width();
                    return Step::Token(SimpleToken::Text(lit.clone()));
                }
                Doc::Line => {
                    let indent = indent.max(0) as Width;
                    self.line_indent = indent;
                    self.col = indent;
                    return Step::Token(SimpleToken::Line(indent));
                }
                Doc::FlatAlt(broken, _) => self.stack.push(indent, broken.clone()),
                Doc::Cat(left, right) => {
                    self.stack.push(indent, right.clone());
                    self.stack.push(indent, left.clone());
                }
                Doc::Nest(nested, inner) => self.stack.push(indent + nested, inner.clone()),
                Doc::Union(flat, broken) => {
                    return Step::Choice(indent, flat.clone(), broken.clone());
                }
                Doc::Column(f) => self.stack.push(indent, Rc::new(f(self.col))),
                Doc::Columns(f) => self.stack.push(indent, Rc::new(f(Some(page_width)))),
                Doc::Nesting(f) => self.stack.push(indent, Rc::new(f(indent))),
                Doc::RestoreFormat(state) => {
                    self.format = *state;
                    return Step::Token(SimpleToken::Format(state.restore_codes()));
                }
                Doc::Colour(..)
                | Doc::Bold(..)
                | Doc::Strikethrough(..)
                | Doc::Underline(..)
                | Doc::Italicise(..)
                | Doc::Obfuscate(..) => {
                    if let Some((change, inner)) = doc.style_change() {
                        return Step::Token(self.enter_style(indent, change, inner));
                    }
                }
            }
        }
        Step::Done
    }

    fn enter_style(&mut self, indent: Indent, change: StyleChange, doc: &Rc<Doc>) -> SimpleToken {
        let prior = self.format;
        self.format = prior.apply(change);
        self.stack
            .push(indent, Rc::new(Doc::RestoreFormat(prior)));
        self.stack.push(indent, doc.clone());
        SimpleToken::Format(prior.entry_codes(change))
    }
}

/// A layout choice that has tentatively taken its flat alternative, and is waiting to see
/// whether it fits.
struct Trial {
    /// Index into `Resolver::pending` of the first token of the flat alternative.
    start: usize,
    /// How many tokens of `pending` the check has been fed.
    seen: usize,
    check: FitCheck,
    broken: Position,
}

/// Lazily resolves a document into [`SimpleToken`]s.
///
/// A choice is decided by resolving its flat alternative until the fit check has an answer.
/// Choices met along the way become trials of their own, stacked on top, so nested choices
/// never recurse. Only the topmost trial is fed tokens: an outer choice sees the tokens of the
/// inner one only once the inner one is decided, exactly as it would if they were printed.
///
/// INVARIANTS:
/// - `pending` holds the tokens resolved since the bottom trial started, and is empty when there
///   are no trials
/// - each trial's `start` and `seen` are at most the `start` of the trial above it
/// - `pos` is the position after the last token in `pending`
struct Resolver {
    page: Page,
    pos: Position,
    trials: Vec<Trial>,
    pending: Vec<SimpleToken>,
    /// Tokens whose layout is decided, not yet yielded.
    ready: VecDeque<SimpleToken>,
}

impl Resolver {
    /// Tentatively take `flat` if it could fit on the rest of the line and the ribbon.
    fn choose(&mut self, indent: Indent, flat: Rc<Doc>, broken: Rc<Doc>) {
        let page_width = self.page.width as isize;
        let ribbon = self.page.ribbon as isize;
        let line_indent = self.pos.line_indent as isize;
        let col = self.pos.col as isize;

        let width = (page_width - col).min(ribbon - col + line_indent);
        let min_nest = line_indent.min(col);
        let mut broken_pos = self.pos.clone();
        broken_pos.stack.push(indent, broken);
        match self.page.strategy.check(page_width, min_nest, width) {
            Some(check) => {
                self.pos.stack.push(indent, flat);
                let start = self.pending.len();
                self.trials.push(Trial {
                    start,
                    seen: start,
                    check,
                    broken: broken_pos,
                });
            }
            None => self.pos = broken_pos,
        }
    }

    /// Feed pending tokens to the topmost trials until one needs more tokens. A trial that fits
    /// hands its tokens down to the trial below; one that doesn't is rewound to its broken
    /// alternative. `at_end` means the document has no more tokens.
    fn settle(&mut self, at_end: bool) {
        while let Some(trial) = self.trials.last_mut() {
            let mut verdict = None;
            while verdict.is_none() && trial.seen < self.pending.len() {
                verdict = trial.check.step(&self.pending[trial.seen]);
                trial.seen += 1;
            }
            let fits = match verdict {
                Some(fits) => fits,
                None if at_end => true,
                None => return,
            };
            if !fits {
                if let Some(trial) = self.trials.pop() {
                    self.pending.truncate(trial.start);
                    self.pos = trial.broken;
                }
                return;
            }
            self.trials.pop();
        }
        self.ready.extend(self.pending.drain(..));
    }
}

impl Iterator for Resolver {
    type Item = SimpleToken;

    fn next(&mut self) -> Option<SimpleToken> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(token);
            }
            match self.pos.step(self.page.width) {
                Step::Token(token) if self.trials.is_empty() => return Some(token),
                Step::Token(token) => {
                    self.pending.push(token);
                    self.settle(false);
                }
                Step::Choice(indent, flat, broken) => self.choose(indent, flat, broken),
                Step::Done if self.trials.is_empty() => return None,
                Step::Done => self.settle(true),
            }
        }
    }
}
