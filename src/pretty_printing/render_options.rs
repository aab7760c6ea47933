use super::compact::render_compact;
use super::fits::Strategy;
use super::pretty_print::render;
use super::simple_doc::SimpleDoc;
use crate::doc::Doc;
use crate::error::PrintingError;
use crate::geometry::Width;
use crate::transform::plain;
use std::fmt;
use std::str::FromStr;

/// Everything that decides how a document gets rendered, short of the document itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RenderOptions {
    /// The page width, in columns.
    pub width: Width,
    /// The fraction of the page width that the non-indentation part of a line may use.
    pub ribbon_frac: f64,
    pub mode: RenderMode,
    /// Whether to keep the document's style codes. When false, the output has no `Format`
    /// tokens at all.
    pub styled: bool,
}

/// Which renderer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RenderMode {
    /// See [`render_pretty`](crate::render_pretty).
    Pretty,
    /// See [`render_smart`](crate::render_smart).
    Smart,
    /// See [`render_compact`](crate::render_compact). Ignores the width and ribbon.
    Compact,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            width: 80,
            ribbon_frac: 1.0,
            mode: RenderMode::Pretty,
            styled: true,
        }
    }
}

impl RenderOptions {
    pub fn render(&self, doc: &Doc) -> SimpleDoc {
        if self.styled {
            self.render_as_is(doc)
        } else {
            self.render_as_is(&plain(doc))
        }
    }

    fn render_as_is(&self, doc: &Doc) -> SimpleDoc {
        match self.mode {
            RenderMode::Pretty => render(Strategy::Pretty, self.ribbon_frac, self.width, doc),
            RenderMode::Smart => render(Strategy::Smart, self.ribbon_frac, self.width, doc),
            RenderMode::Compact => render_compact(doc),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            RenderMode::Pretty => "pretty",
            RenderMode::Smart => "smart",
            RenderMode::Compact => "compact",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RenderMode {
    type Err = PrintingError;

    fn from_str(s: &str) -> Result<RenderMode, PrintingError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(RenderMode::Pretty),
            "smart" => Ok(RenderMode::Smart),
            "compact" => Ok(RenderMode::Compact),
            _ => Err(PrintingError::UnknownRenderMode(s.to_owned())),
        }
    }
}
