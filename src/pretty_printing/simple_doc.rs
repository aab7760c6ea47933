use crate::doc::Literal;
use crate::error::PrintingError;
use crate::format_code::{Code, FormatCodes, MinecraftCodes};
use crate::geometry::Width;
use std::iter::FromIterator;

/// One piece of a resolved document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimpleToken {
    Text(Literal),
    /// A newline followed by this many spaces.
    Line(Width),
    /// Style codes, to be emitted verbatim.
    Format(Vec<Code>),
    /// The document had no feasible layout. Always the last token.
    Fail,
}

/// A document with every layout choice made: a flat sequence of text, newlines, and style
/// codes. An empty sequence is the empty document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleDoc {
    tokens: Vec<SimpleToken>,
}

impl SimpleDoc {
    pub fn tokens(&self) -> &[SimpleToken] {
        &self.tokens
    }

    /// False if a `Fail` made it into the output, meaning the document was malformed.
    pub fn is_feasible(&self) -> bool {
        !matches!(self.tokens.last(), Some(SimpleToken::Fail))
    }

    /// The style codes, in order, grouped the way they will be emitted.
    pub fn format_runs(&self) -> Vec<&[Code]> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                SimpleToken::Format(codes) => Some(codes.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Write out the document, serializing style codes with `codes`.
    pub fn try_display_with<F: FormatCodes + ?Sized>(
        &self,
        codes: &F,
    ) -> Result<String, PrintingError> {
        let mut string = String::new();
        for token in &self.tokens {
            match token {
                SimpleToken::Text(lit) => string.push_str(lit.str()),
                SimpleToken::Line(indent) => {
                    string.push('\n');
                    string.extend(std::iter::repeat(' ').take(*indent));
                }
                SimpleToken::Format(format) => {
                    for code in format {
                        codes.write_code(*code, &mut string);
                    }
                }
                SimpleToken::Fail => return Err(PrintingError::Infeasible),
            }
        }
        Ok(string)
    }

    /// Like [`try_display_with`](SimpleDoc::try_display_with), but a document with no feasible
    /// layout is a bug in whoever built it, and panics.
    pub fn display_with<F: FormatCodes + ?Sized>(&self, codes: &F) -> String {
        match self.try_display_with(codes) {
            Ok(string) => string,
            Err(err) => {
                log::error!("refusing to display an unrenderable document");
                panic!("{}", err)
            }
        }
    }
}

impl From<Vec<SimpleToken>> for SimpleDoc {
    fn from(tokens: Vec<SimpleToken>) -> SimpleDoc {
        SimpleDoc { tokens }
    }
}

impl FromIterator<SimpleToken> for SimpleDoc {
    fn from_iter<I: IntoIterator<Item = SimpleToken>>(iter: I) -> SimpleDoc {
        SimpleDoc {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// Write out a resolved document, with the game's style codes. Panics if the document had no
/// feasible layout.
pub fn display_s(doc: &SimpleDoc) -> String {
    doc.display_with(&MinecraftCodes)
}
