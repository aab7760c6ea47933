//! Abstract style codes, and the serializers that turn them into concrete escape sequences.
//!
//! The pretty printer only ever talks about [`Code`]s. Turning them into text is the job of a
//! [`FormatCodes`] implementation: [`MinecraftCodes`] for the game's chat and content log,
//! [`AnsiCodes`] for terminals, and [`Discard`] when only the plain text is wanted.

use crate::error::PrintingError;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

/// A text colour. These are the colours that the game's formatting codes can express.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Colour {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    MinecoinGold,
}

/// A single style instruction. Each code serializes to exactly one escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Code {
    Colour(Colour),
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Obfuscated,
    /// Turn off every attribute, including colour.
    Reset,
}

impl Colour {
    /// Every colour, in the same order as the game's code characters.
    pub const ALL: [Colour; 17] = [
        Colour::Black,
        Colour::DarkBlue,
        Colour::DarkGreen,
        Colour::DarkAqua,
        Colour::DarkRed,
        Colour::DarkPurple,
        Colour::Gold,
        Colour::Gray,
        Colour::DarkGray,
        Colour::Blue,
        Colour::Green,
        Colour::Aqua,
        Colour::Red,
        Colour::LightPurple,
        Colour::Yellow,
        Colour::White,
        Colour::MinecoinGold,
    ];

    /// The character following `§` in the game's formatting code for this colour.
    pub fn code_char(self) -> char {
        use Colour::*;

        match self {
            Black => '0',
            DarkBlue => '1',
            DarkGreen => '2',
            DarkAqua => '3',
            DarkRed => '4',
            DarkPurple => '5',
            Gold => '6',
            Gray => '7',
            DarkGray => '8',
            Blue => '9',
            Green => 'a',
            Aqua => 'b',
            Red => 'c',
            LightPurple => 'd',
            Yellow => 'e',
            White => 'f',
            MinecoinGold => 'g',
        }
    }

    /// The foreground colour the game uses, as `(red, green, blue)`.
    pub fn rgb(self) -> (u8, u8, u8) {
        use Colour::*;

        match self {
            Black => (0x00, 0x00, 0x00),
            DarkBlue => (0x00, 0x00, 0xAA),
            DarkGreen => (0x00, 0xAA, 0x00),
            DarkAqua => (0x00, 0xAA, 0xAA),
            DarkRed => (0xAA, 0x00, 0x00),
            DarkPurple => (0xAA, 0x00, 0xAA),
            Gold => (0xFF, 0xAA, 0x00),
            Gray => (0xC6, 0xC6, 0xC6),
            DarkGray => (0x55, 0x55, 0x55),
            Blue => (0x55, 0x55, 0xFF),
            Green => (0x55, 0xFF, 0x55),
            Aqua => (0x55, 0xFF, 0xFF),
            Red => (0xFF, 0x55, 0x55),
            LightPurple => (0xFF, 0x55, 0xFF),
            Yellow => (0xFF, 0xFF, 0x55),
            White => (0xFF, 0xFF, 0xFF),
            MinecoinGold => (0xDD, 0xD6, 0x05),
        }
    }

    pub fn name(self) -> &'static str {
        use Colour::*;

        match self {
            Black => "black",
            DarkBlue => "dark_blue",
            DarkGreen => "dark_green",
            DarkAqua => "dark_aqua",
            DarkRed => "dark_red",
            DarkPurple => "dark_purple",
            Gold => "gold",
            Gray => "gray",
            DarkGray => "dark_gray",
            Blue => "blue",
            Green => "green",
            Aqua => "aqua",
            Red => "red",
            LightPurple => "light_purple",
            Yellow => "yellow",
            White => "white",
            MinecoinGold => "minecoin_gold",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Colour {
    type Err = PrintingError;

    fn from_str(s: &str) -> Result<Colour, PrintingError> {
        let wanted = s
            .trim()
            .to_ascii_lowercase()
            .replace(|c: char| c == '-' || c == ' ', "_");
        Colour::ALL
            .iter()
            .copied()
            .find(|colour| colour.name() == wanted || wanted == colour.code_char().to_string())
            .ok_or_else(|| PrintingError::UnknownColour(s.to_owned()))
    }
}

/// Serializes [`Code`]s into escape sequences. Serialization must be deterministic and preserve
/// the order of the codes.
pub trait FormatCodes {
    fn write_code(&self, code: Code, out: &mut String);

    fn codes_to_string(&self, codes: &[Code]) -> String {
        let mut string = String::new();
        for code in codes {
            self.write_code(*code, &mut string);
        }
        string
    }
}

/// The game's `§` formatting codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinecraftCodes;

/// ANSI SGR escape sequences, with colours in 24-bit RGB.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiCodes;

/// Drops every code.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

pub const SECTION_SIGN: char = '§';

static ANSI_COLOURS: Lazy<Vec<String>> = Lazy::new(|| {
    Colour::ALL
        .iter()
        .map(|colour| {
            let (r, g, b) = colour.rgb();
            format!("\x1b[38;2;{};{};{}m", r, g, b)
        })
        .collect()
});

impl FormatCodes for MinecraftCodes {
    fn write_code(&self, code: Code, out: &mut String) {
        let ch = match code {
            Code::Colour(colour) => colour.code_char(),
            Code::Bold => 'l',
            Code::Strikethrough => 'm',
            Code::Underline => 'n',
            Code::Italic => 'o',
            Code::Obfuscated => 'k',
            Code::Reset => 'r',
        };
        out.push(SECTION_SIGN);
        out.push(ch);
    }
}

impl FormatCodes for AnsiCodes {
    fn write_code(&self, code: Code, out: &mut String) {
        match code {
            Code::Colour(colour) => out.push_str(&ANSI_COLOURS[colour as usize]),
            Code::Bold => out.push_str("\x1b[1m"),
            Code::Italic => out.push_str("\x1b[3m"),
            Code::Underline => out.push_str("\x1b[4m"),
            // Terminals have no scrambled text; blinking is the closest thing.
            Code::Obfuscated => out.push_str("\x1b[5m"),
            Code::Strikethrough => out.push_str("\x1b[9m"),
            Code::Reset => out.push_str("\x1b[0m"),
        }
    }
}

impl FormatCodes for Discard {
    fn write_code(&self, _code: Code, _out: &mut String) {}
}

/// Serialize `codes` as the game's formatting codes.
pub fn to_string(codes: &[Code]) -> String {
    MinecraftCodes.codes_to_string(codes)
}
