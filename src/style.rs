//! Text styles, and how nested style wrappers combine.
//!
//! Styling is threaded through rendering as a value: every style wrapper computes a new
//! [`FormatState`] from the one in effect, and remembers the old one so that it can be
//! re-established once the wrapped document is done.

use crate::format_code::{Code, Colour};

/// The complete set of style attributes in effect at some point of the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FormatState {
    /// `None` is the medium's default colour.
    pub colour: Option<Colour>,
    pub bold: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub italic: bool,
    pub obfuscated: bool,
}

/// The change to a single attribute made by one style wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleChange {
    Colour(Option<Colour>),
    Bold(bool),
    Strikethrough(bool),
    Underline(bool),
    Italic(bool),
    Obfuscated(bool),
}

impl FormatState {
    /// No colour and no attributes.
    pub fn plain() -> FormatState {
        FormatState::default()
    }

    pub fn is_plain(self) -> bool {
        self == FormatState::plain()
    }

    pub fn apply(self, change: StyleChange) -> FormatState {
        match change {
            StyleChange::Colour(colour) => FormatState { colour, ..self },
            StyleChange::Bold(bold) => FormatState { bold, ..self },
            StyleChange::Strikethrough(strikethrough) => FormatState {
                strikethrough,
                ..self
            },
            StyleChange::Underline(underline) => FormatState { underline, ..self },
            StyleChange::Italic(italic) => FormatState { italic, ..self },
            StyleChange::Obfuscated(obfuscated) => FormatState { obfuscated, ..self },
        }
    }

    /// The codes to emit when `change` is entered while `self` is in effect.
    ///
    /// Turning an attribute on is a single code. Turning one off can't be done reliably one
    /// attribute at a time, so it resets and re-applies the resulting state instead.
    pub fn entry_codes(self, change: StyleChange) -> Vec<Code> {
        match change.code() {
            Some(code) => vec![code],
            None => self.apply(change).restore_codes(),
        }
    }

    /// Codes that establish exactly this state, whatever state came before: a reset, then the
    /// colour, then every active attribute.
    pub fn restore_codes(self) -> Vec<Code> {
        let mut codes = vec![Code::Reset];
        if let Some(colour) = self.colour {
            codes.push(Code::Colour(colour));
        }
        let flags = [
            (self.bold, Code::Bold),
            (self.strikethrough, Code::Strikethrough),
            (self.underline, Code::Underline),
            (self.italic, Code::Italic),
            (self.obfuscated, Code::Obfuscated),
        ];
        codes.extend(flags.iter().filter(|(on, _)| *on).map(|(_, code)| *code));
        codes
    }
}

impl StyleChange {
    /// The code that turns this attribute on, or `None` if this change turns it off.
    pub fn code(self) -> Option<Code> {
        match self {
            StyleChange::Colour(colour) => colour.map(Code::Colour),
            StyleChange::Bold(true) => Some(Code::Bold),
            StyleChange::Strikethrough(true) => Some(Code::Strikethrough),
            StyleChange::Underline(true) => Some(Code::Underline),
            StyleChange::Italic(true) => Some(Code::Italic),
            StyleChange::Obfuscated(true) => Some(Code::Obfuscated),
            StyleChange::Bold(false)
            | StyleChange::Strikethrough(false)
            | StyleChange::Underline(false)
            | StyleChange::Italic(false)
            | StyleChange::Obfuscated(false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_plain() {
        assert_eq!(FormatState::plain().restore_codes(), vec![Code::Reset]);
    }

    #[test]
    fn test_restore_order() {
        let state = FormatState {
            colour: Some(Colour::Aqua),
            bold: true,
            strikethrough: false,
            underline: true,
            italic: false,
            obfuscated: true,
        };
        assert_eq!(
            state.restore_codes(),
            vec![
                Code::Reset,
                Code::Colour(Colour::Aqua),
                Code::Bold,
                Code::Underline,
                Code::Obfuscated
            ]
        );
    }

    #[test]
    fn test_entry_codes() {
        let bold = FormatState::plain().apply(StyleChange::Bold(true));
        assert!(bold.bold);
        assert_eq!(
            bold.entry_codes(StyleChange::Colour(Some(Colour::Red))),
            vec![Code::Colour(Colour::Red)]
        );
        let red_bold = bold.apply(StyleChange::Colour(Some(Colour::Red)));
        assert_eq!(
            red_bold.entry_codes(StyleChange::Bold(false)),
            vec![Code::Reset, Code::Colour(Colour::Red)]
        );
        assert_eq!(
            red_bold.entry_codes(StyleChange::Colour(None)),
            vec![Code::Reset, Code::Bold]
        );
    }
}
