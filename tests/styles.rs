mod common;

use cicada_pprint::constructors::{
    bold, colour, group, italicise, line, obfuscate, strikethrough, text, unbold, uncolour,
    underline,
};
use cicada_pprint::{
    display_s, plain, render_compact, render_pretty, render_smart, AnsiCodes, Code, Colour,
    Discard, Doc, Literal, SimpleToken,
};

fn format_runs(doc: &Doc) -> Vec<Vec<Code>> {
    render_pretty(1.0, 80, doc)
        .format_runs()
        .into_iter()
        .map(|codes| codes.to_vec())
        .collect()
}

#[test]
fn styles_nesting() {
    let doc = bold(text("a") + colour(Colour::Red, text("b"))) + text("c");
    let rendered = render_pretty(1.0, 80, &doc);
    let lit = |s: &str| SimpleToken::Text(Literal::new(s));
    assert_eq!(
        rendered.tokens(),
        &[
            SimpleToken::Format(vec![Code::Bold]),
            lit("a"),
            SimpleToken::Format(vec![Code::Colour(Colour::Red)]),
            lit("b"),
            SimpleToken::Format(vec![Code::Reset, Code::Bold]),
            SimpleToken::Format(vec![Code::Reset]),
            lit("c"),
        ]
    );
    assert_eq!(display_s(&rendered), "§la§cb§r§l§rc");
}

#[test]
fn styles_unstyle() {
    let doc = colour(Colour::Gold, bold(text("a") + unbold(text("b")) + text("c")));
    assert_eq!(
        format_runs(&doc),
        vec![
            vec![Code::Colour(Colour::Gold)],
            vec![Code::Bold],
            vec![Code::Reset, Code::Colour(Colour::Gold)],
            vec![Code::Reset, Code::Colour(Colour::Gold), Code::Bold],
            vec![Code::Reset, Code::Colour(Colour::Gold)],
            vec![Code::Reset],
        ]
    );

    let doc = colour(Colour::Aqua, underline(uncolour(text("x"))));
    assert_eq!(
        display_s(&render_pretty(1.0, 80, &doc)),
        "§b§n§r§nx§r§b§n§r§b§r"
    );
}

#[test]
fn styles_all_attributes() {
    let doc = strikethrough(italicise(obfuscate(text("?"))));
    assert_eq!(display_s(&render_pretty(1.0, 80, &doc)), "§m§o§k?§r§m§o§r§m§r");
}

#[test]
fn styles_minecraft_codes() {
    let doc = bold(text("a"));
    assert_eq!(display_s(&render_pretty(1.0, 80, &doc)), "§la§r");
}

#[test]
fn styles_ansi_codes() {
    let doc = colour(Colour::Red, text("err"));
    assert_eq!(
        render_pretty(1.0, 80, &doc).display_with(&AnsiCodes),
        "\x1b[38;2;255;85;85merr\x1b[0m"
    );
}

#[test]
fn styles_do_not_affect_layout() {
    let doc = group(bold(text("aaaa")) + line() + colour(Colour::Green, text("bbbb")));
    for width in 0..12 {
        let styled = render_smart(1.0, width, &doc);
        let unstyled = render_smart(1.0, width, &plain(&doc));
        assert_eq!(
            styled.display_with(&Discard),
            unstyled.display_with(&Discard)
        );
        assert!(unstyled.format_runs().is_empty());
    }
    assert_eq!(
        render_pretty(1.0, 8, &doc).display_with(&Discard),
        "aaaa\nbbbb"
    );
}

#[test]
fn styles_dropped_by_compact() {
    let doc = colour(Colour::Blue, bold(text("a") + line() + text("b")));
    let rendered = render_compact(&doc);
    assert!(rendered.format_runs().is_empty());
    assert_eq!(display_s(&rendered), "a\nb");
}

#[test]
fn styles_survive_line_breaks() {
    let doc = bold(text("a") + line() + text("b"));
    assert_eq!(display_s(&render_pretty(1.0, 80, &doc)), "§la\nb§r");
}
