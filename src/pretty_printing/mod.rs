mod compact;
mod fits;
mod pretty_print;
mod render_options;
mod simple_doc;

pub use compact::render_compact;
pub use fits::Strategy;
pub use pretty_print::{render, render_pretty, render_smart};
pub use render_options::{RenderMode, RenderOptions};
pub use simple_doc::{display_s, SimpleDoc, SimpleToken};
