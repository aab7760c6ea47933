use super::simple_doc::SimpleToken;

/// How far ahead to look when deciding whether a flattened group fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Only the rest of the current line must fit.
    Pretty,
    /// The rest of the current line must fit, and so must the next line if it is nested deeper
    /// than where the group started. Gives better layouts for deeply nested calls.
    Smart,
}

impl Strategy {
    /// Start checking whether a layout fits in `width` more columns. `page_width` and
    /// `min_nest` are only used by `Smart`. `None` if it can't possibly fit.
    pub(crate) fn check(self, page_width: isize, min_nest: isize, width: isize) -> Option<FitCheck> {
        if width < 0 {
            return None;
        }
        Some(FitCheck {
            strategy: self,
            page_width,
            min_nest,
            width,
            on_next_line: false,
        })
    }
}

/// A fit check in progress, fed one token at a time.
#[derive(Clone, Debug)]
pub(crate) struct FitCheck {
    strategy: Strategy,
    page_width: isize,
    min_nest: isize,
    /// Columns left on the line being checked. Never negative.
    width: isize,
    on_next_line: bool,
}

impl FitCheck {
    /// Account for the next token of the layout. `Some(verdict)` once the layout is known to fit
    /// or not; `None` if more tokens are needed. Running out of tokens means it fits.
    pub(crate) fn step(&mut self, token: &SimpleToken) -> Option<bool> {
        match token {
            SimpleToken::Text(lit) => {
                self.width -= lit.width() as isize;
                if self.width < 0 {
                    Some(false)
                } else {
                    None
                }
            }
            SimpleToken::Format(_) => None,
            SimpleToken::Fail => Some(false),
            SimpleToken::Line(indent) => {
                let indent = *indent as isize;
                // One more line, and no further: checking the whole rest of the document
                // would make every choice cost as much as the document.
                if self.strategy == Strategy::Smart && !self.on_next_line && self.min_nest < indent
                {
                    self.on_next_line = true;
                    self.width = self.page_width - indent;
                    if self.width < 0 {
                        Some(false)
                    } else {
                        None
                    }
                } else {
                    Some(true)
                }
            }
        }
    }
}
