mod common;

use cicada_pprint::constructors::group;
use cicada_pprint::{
    display_s, flatten, plain, render_compact, render_pretty, render_smart, Discard, Doc,
    RenderMode, RenderOptions,
};
use common::{plain_text, random_doc, seeded_rng};

const NUM_TESTS: usize = 500;
const MAX_SIZE: u32 = 30;

fn contains_line(doc: &Doc) -> bool {
    let mut stack = vec![doc];
    while let Some(doc) = stack.pop() {
        if let Doc::Line = doc {
            return true;
        }
        stack.extend(doc.children().into_iter().map(|child| &**child));
    }
    false
}

#[test]
fn random_flatten_soundness() {
    let mut rng = seeded_rng(1);
    for size in 1..MAX_SIZE {
        for _ in 0..NUM_TESTS / 10 {
            let doc = random_doc(&mut rng, size, false);
            let flat = flatten(&doc);
            if contains_line(&flat) {
                panic!("flattened document contains a line:\n{}\n=>\n{}", doc, flat);
            }
        }
    }
}

#[test]
fn random_group_collapse() {
    let mut rng = seeded_rng(2);
    for _ in 0..NUM_TESTS {
        let doc = random_doc(&mut rng, MAX_SIZE, false);
        let grouped = plain_text(&render_pretty(1.0, 10_000, &group(doc.clone())));
        let flat = plain_text(&render_pretty(1.0, 10_000, &flatten(&doc)));
        assert_eq!(grouped, flat, "for document {}", doc);
        assert!(!grouped.contains('\n'));
    }
}

#[test]
fn random_plain_equivalence() {
    let mut rng = seeded_rng(3);
    for _ in 0..NUM_TESTS {
        let doc = random_doc(&mut rng, MAX_SIZE, true);
        let unstyled = plain(&doc);
        for width in &[0, 5, 10, 20, 80] {
            for frac in &[0.5, 1.0] {
                let styled_pretty = render_pretty(*frac, *width, &doc);
                let plain_pretty = render_pretty(*frac, *width, &unstyled);
                assert_eq!(plain_text(&styled_pretty), plain_text(&plain_pretty));
                assert!(plain_pretty.format_runs().is_empty());

                let styled_smart = render_smart(*frac, *width, &doc);
                let plain_smart = render_smart(*frac, *width, &unstyled);
                assert_eq!(plain_text(&styled_smart), plain_text(&plain_smart));
            }
        }
    }
}

#[test]
fn random_compact_purity() {
    let mut rng = seeded_rng(4);
    for _ in 0..NUM_TESTS {
        let doc = random_doc(&mut rng, MAX_SIZE, true);
        let rendered = render_compact(&doc);
        assert!(rendered.format_runs().is_empty());
        let output = display_s(&rendered);
        assert!(!output.contains('§'), "escape codes in {:?}", output);
        assert_eq!(output, rendered.display_with(&Discard));
    }
}

#[test]
fn random_determinism() {
    let mut rng = seeded_rng(5);
    for _ in 0..NUM_TESTS {
        let doc = random_doc(&mut rng, MAX_SIZE, true);
        for mode in &[RenderMode::Pretty, RenderMode::Smart, RenderMode::Compact] {
            let options = RenderOptions {
                width: 12,
                mode: *mode,
                ..RenderOptions::default()
            };
            let first = display_s(&options.render(&doc));
            let second = display_s(&options.render(&doc));
            assert_eq!(first, second);
        }
    }
}

#[test]
fn random_feasible() {
    let mut rng = seeded_rng(6);
    for _ in 0..NUM_TESTS {
        let doc = random_doc(&mut rng, MAX_SIZE, true);
        for width in 0..12 {
            assert!(render_pretty(1.0, width, &doc).is_feasible());
            assert!(render_smart(0.5, width, &doc).is_feasible());
        }
    }
}
