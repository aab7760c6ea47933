use unicode_width::UnicodeWidthStr;

/// Width, measured in terminal columns.
pub type Width = usize;

/// Indentation level. Signed, because `align` nests by `column - nesting`, which can be negative
/// for a moment even though no line is ever printed with negative indentation.
pub type Indent = isize;

/// The number of columns that `s` occupies when displayed. Style codes are not part of any
/// string measured here, so they always count as zero width.
pub fn str_width(s: &str) -> Width {
    UnicodeWidthStr::width(s)
}
