//! Expected/actual diff highlighting on top of [`crate::align`].
//!
//! Text is split into elements according to a [`Granularity`], aligned, and
//! every run of equally tagged elements is handed to a [`Renderer`]. If the
//! LCS table cannot be allocated the texts come back unchanged, with
//! [`Highlighted::annotated`] set to `false`.

use crate::align::{Annotated, SequenceAligner, Tag};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// The unit a diff is computed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// Extended grapheme clusters.
    Graphemes,
    /// Word-boundary segments; whitespace and punctuation are segments too.
    Words,
}

impl Granularity {
    /// Split `text` into diff elements. Concatenating them yields `text`.
    pub fn segment(self, text: &str) -> Vec<&str> {
        match self {
            Granularity::Chars => text
                .char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect(),
            Granularity::Graphemes => text.graphemes(true).collect(),
            Granularity::Words => text.split_word_bounds().collect(),
        }
    }
}

/// Turns a run of equally tagged text into its displayed form.
pub trait Renderer {
    fn render_run(&self, tag: Tag, text: &str, out: &mut String);
}

/// Writes every run verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render_run(&self, _tag: Tag, text: &str, out: &mut String) {
        out.push_str(text);
    }
}

/// Wraps deleted runs in `[-…-]` and inserted runs in `{+…+}`.
///
/// Changed runs made only of whitespace show spaces as `·` and tabs as `→`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerRenderer;

impl Renderer for MarkerRenderer {
    fn render_run(&self, tag: Tag, text: &str, out: &mut String) {
        let (open, close) = match tag {
            Tag::Match => {
                out.push_str(text);
                return;
            }
            Tag::Deleted => ("[-", "-]"),
            Tag::Inserted => ("{+", "+}"),
        };

        out.push_str(open);
        if text.chars().all(char::is_whitespace) {
            out.extend(text.chars().map(|c| match c {
                ' ' => '·',
                '\t' => '→',
                other => other,
            }));
        } else {
            out.push_str(text);
        }
        out.push_str(close);
    }
}

/// How to segment and align the two texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    pub granularity: Granularity,
    pub aligner: SequenceAligner,
}

/// Rendered expected and actual texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
    pub expected: String,
    pub actual: String,
    /// False when alignment failed and the texts are unannotated.
    pub annotated: bool,
}

/// Align `expected` with `actual` and render both sides with `renderer`.
pub fn highlight<R: Renderer + ?Sized>(
    expected: &str,
    actual: &str,
    options: &HighlightOptions,
    renderer: &R,
) -> Highlighted {
    let x = options.granularity.segment(expected);
    let y = options.granularity.segment(actual);

    match options.aligner.align(&x, &y) {
        Ok(result) => Highlighted {
            expected: render_side(&result.expected, renderer),
            actual: render_side(&result.actual, renderer),
            annotated: true,
        },
        Err(err) => {
            tracing::warn!(error = %err, "falling back to unannotated expected/actual output");
            Highlighted {
                expected: expected.to_string(),
                actual: actual.to_string(),
                annotated: false,
            }
        }
    }
}

fn render_side<R: Renderer + ?Sized>(side: &[Annotated<'_, &str>], renderer: &R) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut run_tag = None;

    for annotated in side {
        if run_tag != Some(annotated.tag) {
            if let Some(tag) = run_tag {
                renderer.render_run(tag, &run, &mut out);
            }
            run.clear();
            run_tag = Some(annotated.tag);
        }
        run.push_str(annotated.element);
    }
    if let Some(tag) = run_tag {
        renderer.render_run(tag, &run, &mut out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers(expected: &str, actual: &str, granularity: Granularity) -> Highlighted {
        let options = HighlightOptions {
            granularity,
            ..HighlightOptions::default()
        };
        highlight(expected, actual, &options, &MarkerRenderer)
    }

    #[test]
    fn test_char_markers() {
        let out = markers("\"abc\"", "\"axc\"", Granularity::Chars);
        assert!(out.annotated);
        assert_eq!(out.expected, "\"a[-b-]c\"");
        assert_eq!(out.actual, "\"a{+x+}c\"");
    }

    #[test]
    fn test_runs_are_grouped() {
        let out = markers("value: 100", "value: 2500", Granularity::Chars);
        insta::assert_snapshot!(format!("{}\n{}", out.expected, out.actual), @r###"
        value: [-1-]00
        value: {+25+}00
        "###);
    }

    #[test]
    fn test_word_markers() {
        let out = markers("the quick fox", "the slow fox", Granularity::Words);
        assert_eq!(out.expected, "the [-quick-] fox");
        assert_eq!(out.actual, "the {+slow+} fox");
    }

    #[test]
    fn test_inserted_whitespace_is_visible() {
        let out = markers("ab", "a b", Granularity::Chars);
        assert_eq!(out.expected, "ab");
        assert_eq!(out.actual, "a{+·+}b");
    }

    #[test]
    fn test_graphemes_keep_clusters_together() {
        let expected = "cafe\u{301}";
        let segments = Granularity::Graphemes.segment(expected);
        assert_eq!(segments, vec!["c", "a", "f", "e\u{301}"]);
        assert_eq!(Granularity::Chars.segment(expected).len(), 5);

        let out = markers(expected, "cafe", Granularity::Graphemes);
        assert_eq!(out.expected, "caf[-e\u{301}-]");
        assert_eq!(out.actual, "caf{+e+}");
    }

    #[test]
    fn test_plain_renderer_reproduces_input() {
        let out = highlight(
            "expected text",
            "actual text",
            &HighlightOptions::default(),
            &PlainRenderer,
        );
        assert!(out.annotated);
        assert_eq!(out.expected, "expected text");
        assert_eq!(out.actual, "actual text");
    }

    #[test]
    fn test_allocation_failure_falls_back_to_plain_text() {
        let options = HighlightOptions {
            granularity: Granularity::Chars,
            aligner: SequenceAligner::with_cell_limit(10),
        };
        let out = highlight("0123456789", "0123456780", &options, &MarkerRenderer);
        assert!(!out.annotated);
        assert_eq!(out.expected, "0123456789");
        assert_eq!(out.actual, "0123456780");
    }

    #[test]
    fn test_empty_sides() {
        let out = markers("", "new", Granularity::Chars);
        assert_eq!(out.expected, "");
        assert_eq!(out.actual, "{+new+}");
    }
}
