//! Read-time estimation over a rendered HTML fragment.

use std::{cell::RefCell, rc::Rc};

use lol_html::{RewriteStrSettings, doc_text, rewrite_str};

/// Average adult reading speed used for the estimate.
const WORDS_PER_MINUTE: f32 = 225.0;

/// Estimate how long the fragment takes to read, as display text.
///
/// Markup is stripped by streaming the fragment through an HTML rewriter and
/// counting whitespace-separated words in the text nodes. The function never
/// fails: a fragment the rewriter rejects is counted as raw text instead,
/// and word-free content yields `"less than a minute"`.
pub fn estimate(html: &str) -> String {
    let words = count_html_words(html).unwrap_or_else(|| count_words(html));

    if words == 0 {
        return "less than a minute".to_string();
    }

    let minutes = (words as f32 / WORDS_PER_MINUTE).ceil() as u32;
    format!("{} min read", minutes.max(1))
}

fn count_html_words(html: &str) -> Option<u32> {
    let total = Rc::new(RefCell::new(0u32));

    let handler_total = Rc::clone(&total);
    rewrite_str(
        html,
        RewriteStrSettings {
            document_content_handlers: vec![doc_text!(move |chunk| {
                let words = count_words(chunk.as_str());
                if words > 0 {
                    let mut total = handler_total.borrow_mut();
                    *total = total.saturating_add(words);
                }
                Ok(())
            })],
            ..RewriteStrSettings::default()
        },
    )
    .ok()?;

    let count = *total.borrow();
    Some(count)
}

fn count_words(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph_of(words: usize) -> String {
        format!("<p>{}</p>", vec!["word"; words].join(" "))
    }

    #[test]
    fn empty_content_reads_in_less_than_a_minute() {
        assert_eq!(estimate(""), "less than a minute");
        assert_eq!(estimate("<p></p>"), "less than a minute");
        assert_eq!(estimate("<hr><hr>"), "less than a minute");
    }

    #[test]
    fn short_content_rounds_up_to_one_minute() {
        assert_eq!(estimate("<p>just a few words here</p>"), "1 min read");
        assert_eq!(estimate(&paragraph_of(225)), "1 min read");
    }

    #[test]
    fn longer_content_scales_with_word_count() {
        assert_eq!(estimate(&paragraph_of(226)), "2 min read");
        assert_eq!(estimate(&paragraph_of(450)), "2 min read");
        assert_eq!(estimate(&paragraph_of(1000)), "5 min read");
    }

    #[test]
    fn markup_does_not_count_as_words() {
        let html = "<p class=\"very long attribute value here\">one two</p>";
        assert_eq!(estimate(html), "1 min read");
    }

    #[test]
    fn malformed_markup_is_tolerated() {
        assert_eq!(estimate("<p>unclosed <em>tags one two"), "1 min read");
        assert_eq!(estimate("plain words without any markup"), "1 min read");
        // Tag soup must come back with some estimate, never a panic.
        assert!(!estimate("<<<>>> </p></p><x y=\"").is_empty());
    }

    #[test]
    fn estimates_are_deterministic() {
        let html = paragraph_of(300);
        assert_eq!(estimate(&html), estimate(&html));
    }
}
