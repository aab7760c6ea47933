#![allow(unused)]

use cicada_pprint::combinators::align;
use cicada_pprint::constructors::{
    bold, colour, empty, group, hardline, italicise, line, linebreak, nest, softline, text,
    unbold, uncolour,
};
use cicada_pprint::{
    render_compact, render_pretty, render_smart, Colour, Discard, Doc, SimpleDoc, Width,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The plain text of a rendered document, without any style codes.
pub fn plain_text(doc: &SimpleDoc) -> String {
    doc.display_with(&Discard)
}

pub fn pretty(doc: &Doc, width: Width) -> String {
    plain_text(&render_pretty(1.0, width, doc))
}

pub fn smart(doc: &Doc, width: Width) -> String {
    plain_text(&render_smart(1.0, width, doc))
}

pub fn compact(doc: &Doc) -> String {
    plain_text(&render_compact(doc))
}

pub fn compare_lines(message: &str, actual: &str, expected: &[&str]) {
    let actual = actual.split('\n').collect::<Vec<_>>();
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message,
            expected.join("\n"),
            actual.join("\n"),
        );
        assert_eq!(actual, expected);
    }
}

/// Check the output of `render_pretty`, with no ribbon, line by line.
#[track_caller]
pub fn assert_pp(doc: &Doc, width: Width, expected_lines: &[&str]) {
    compare_lines(
        &format!("IN PRETTY PRINTING AT WIDTH {}", width),
        &pretty(doc, width),
        expected_lines,
    );
}

/// Check the output of `render_smart`, with no ribbon, line by line.
#[track_caller]
pub fn assert_smart(doc: &Doc, width: Width, expected_lines: &[&str]) {
    compare_lines(
        &format!("IN SMART PRINTING AT WIDTH {}", width),
        &smart(doc, width),
        expected_lines,
    );
}

pub fn seeded_rng(seed: u8) -> StdRng {
    StdRng::from_seed([seed; 32])
}

const WORDS: &[&str] = &["a", "bb", "ccc", "dddd", "eeeee", "λ", "日本"];
const COLOURS: &[Colour] = &[Colour::Red, Colour::Gold, Colour::Aqua, Colour::DarkPurple];

/// A random document of about `size` nodes. It contains a bare `hardline` only if `hard_lines`
/// is set.
pub fn random_doc(rng: &mut StdRng, size: u32, hard_lines: bool) -> Doc {
    if size <= 1 {
        return match rng.gen_range(0..6) {
            0 => empty(),
            1 => line(),
            2 => linebreak(),
            3 if hard_lines => hardline(),
            _ => text(WORDS[rng.gen_range(0..WORDS.len())]),
        };
    }
    match rng.gen_range(0..10) {
        0 | 1 | 2 => {
            let left_size = rng.gen_range(1..size);
            let left = random_doc(rng, left_size, hard_lines);
            let right = random_doc(rng, size - left_size, hard_lines);
            left + right
        }
        3 => group(random_doc(rng, size - 1, hard_lines)),
        4 => nest(rng.gen_range(0..4), random_doc(rng, size - 1, hard_lines)),
        5 => align(random_doc(rng, size - 1, hard_lines)),
        6 => {
            let c = COLOURS[rng.gen_range(0..COLOURS.len())];
            colour(c, random_doc(rng, size - 1, hard_lines))
        }
        7 => bold(random_doc(rng, size - 1, hard_lines)),
        8 => match rng.gen_range(0..3) {
            0 => unbold(random_doc(rng, size - 1, hard_lines)),
            1 => uncolour(random_doc(rng, size - 1, hard_lines)),
            _ => italicise(random_doc(rng, size - 1, hard_lines)),
        },
        _ => {
            let left_size = rng.gen_range(1..size);
            let left = random_doc(rng, left_size, hard_lines);
            let right = random_doc(rng, size - left_size, hard_lines);
            left + softline() + right
        }
    }
}
