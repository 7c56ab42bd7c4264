//! Span redaction
//!
//! Rewrites text by substituting each detected span with its replacement
//! token, working right-to-left so untouched offsets stay valid.

use crate::deidentification::models::DetectedSpan;

/// Original byte range replaced by a token, and the length change it caused
#[derive(Debug, Clone, Copy)]
struct Rewrite {
    start: usize,
    end: usize,
    delta: isize,
}

/// Applies replacement tokens for detected spans
#[derive(Debug, Clone, Copy, Default)]
pub struct Redactor;

impl Redactor {
    /// Create a new redactor
    pub fn new() -> Self {
        Self
    }

    /// Replace every span in `text` with its replacement token
    ///
    /// Spans are applied in descending order of `start`, shorter first on
    /// ties. A span whose end falls inside text already rewritten by another
    /// span is clipped at the start of that rewrite, so both tokens appear.
    /// A span that reaches past the end of earlier rewrites absorbs them and
    /// its token covers the whole union. Either way no original byte of an
    /// applied span survives. Spans that do not fit `text` (out of range,
    /// empty, or not on char boundaries) are skipped.
    pub fn redact(&self, text: &str, spans: &[DetectedSpan]) -> String {
        if spans.is_empty() {
            return text.to_string();
        }

        let mut ordered: Vec<&DetectedSpan> = spans
            .iter()
            .filter(|span| {
                let applicable = Self::fits(text, span);
                if !applicable {
                    tracing::warn!(
                        category = %span.category,
                        start = span.start,
                        end = span.end,
                        text_len = text.len(),
                        "Skipping span that does not fit the text"
                    );
                }
                applicable
            })
            .collect();
        ordered.sort_by(|a, b| b.start.cmp(&a.start).then_with(|| a.end.cmp(&b.end)));

        let mut output = text.to_string();
        // Rewritten regions in original coordinates, ascending and disjoint
        let mut applied: Vec<Rewrite> = Vec::new();
        let mut clipped = 0usize;

        for span in ordered {
            let inside = applied
                .iter()
                .position(|r| span.end > r.start && span.end <= r.end);
            let (end, absorbed) = match inside {
                Some(index) => {
                    clipped += 1;
                    (applied[index].start, index)
                }
                None => (
                    span.end,
                    applied.iter().take_while(|r| r.end <= span.end).count(),
                ),
            };

            let shift: isize = applied[..absorbed].iter().map(|r| r.delta).sum();
            let output_end = (end as isize + shift) as usize;
            output.replace_range(span.start..output_end, &span.replacement);

            applied.drain(..absorbed);
            applied.insert(
                0,
                Rewrite {
                    start: span.start,
                    end,
                    delta: span.replacement.len() as isize - (end - span.start) as isize,
                },
            );
        }

        if clipped > 0 {
            tracing::debug!(clipped, "Overlapping spans clipped during redaction");
        }

        output
    }

    fn fits(text: &str, span: &DetectedSpan) -> bool {
        span.start < span.end
            && span.end <= text.len()
            && text.is_char_boundary(span.start)
            && text.is_char_boundary(span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deidentification::models::PhiCategory;

    fn span(category: PhiCategory, text: &str, start: usize, end: usize) -> DetectedSpan {
        DetectedSpan::new(
            category,
            text,
            start,
            end,
            0.9,
            category.default_replacement(),
        )
    }

    #[test]
    fn test_redact_no_spans_returns_input() {
        let text = "nothing to see";
        assert_eq!(Redactor::new().redact(text, &[]), text);
    }

    #[test]
    fn test_redact_single_span() {
        let text = "SSN 123-45-6789 on file";
        let spans = vec![span(PhiCategory::Ssn, text, 4, 15)];
        assert_eq!(Redactor::new().redact(text, &spans), "SSN [SSN] on file");
    }

    #[test]
    fn test_redact_order_independent_of_input_order() {
        let text = "a@b.io then 555-123-4567";
        let email = span(PhiCategory::Email, text, 0, 6);
        let phone = span(PhiCategory::Phone, text, 12, 24);

        let forward = Redactor::new().redact(text, &[email.clone(), phone.clone()]);
        let reverse = Redactor::new().redact(text, &[phone, email]);
        assert_eq!(forward, "[EMAIL] then [PHONE]");
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_redact_nested_overlap_keeps_both_tokens() {
        let text = "12 Oak Rd 01/02/2023 x";
        let address = span(PhiCategory::Address, text, 0, 20);
        let date = span(PhiCategory::Date, text, 10, 20);

        let redacted = Redactor::new().redact(text, &[address, date]);
        assert_eq!(redacted, "[ADDRESS][DATE] x");
    }

    #[test]
    fn test_redact_partial_overlap_removes_all_original_bytes() {
        let text = "abcdefghij";
        let first = span(PhiCategory::Mrn, text, 0, 6);
        let second = span(PhiCategory::Phone, text, 4, 8);

        let redacted = Redactor::new().redact(text, &[first, second]);
        assert_eq!(redacted, "[MRN][PHONE]ij");
    }

    #[test]
    fn test_redact_outer_span_past_inner_end_covers_union() {
        let text = "0123456789ABCDEFGHIJKLMNOPQRST tail";
        let outer = span(PhiCategory::Email, text, 0, 30);
        let inner = span(PhiCategory::Phone, text, 10, 15);

        let redacted = Redactor::new().redact(text, &[outer, inner]);
        assert_eq!(redacted, "[EMAIL] tail");
        assert!(!redacted.contains(&text[15..30]));
    }

    #[test]
    fn test_redact_same_start_longer_span_wins() {
        let text = "x 5551234567.js@mail.com y";
        let phone = span(PhiCategory::Phone, text, 2, 12);
        let email = span(PhiCategory::Email, text, 2, 24);

        let forward = Redactor::new().redact(text, &[phone.clone(), email.clone()]);
        let reverse = Redactor::new().redact(text, &[email, phone]);
        assert_eq!(forward, "x [EMAIL] y");
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_redact_outer_span_absorbs_several_inner_rewrites() {
        let text = "aa 111 bb 222 cc end";
        let outer = span(PhiCategory::Address, text, 0, 16);
        let first = span(PhiCategory::Mrn, text, 3, 6);
        let second = span(PhiCategory::Mrn, text, 10, 13);

        let redacted = Redactor::new().redact(text, &[first, outer, second]);
        assert_eq!(redacted, "[ADDRESS] end");
    }

    #[test]
    fn test_redact_skips_spans_that_do_not_fit() {
        let text = "short";
        let mut bad = span(PhiCategory::Ssn, text, 0, 5);
        bad.end = 50;
        let mut inverted = span(PhiCategory::Ssn, text, 0, 5);
        inverted.start = 4;
        inverted.end = 2;

        assert_eq!(Redactor::new().redact(text, &[bad, inverted]), "short");
    }

    #[test]
    fn test_redact_skips_non_char_boundary() {
        let text = "é123-45-6789";
        let mut bad = span(PhiCategory::Ssn, text, 2, text.len());
        bad.start = 1;

        assert_eq!(Redactor::new().redact(text, &[bad]), text);
    }

    #[test]
    fn test_redact_does_not_mutate_spans() {
        let text = "SSN 123-45-6789";
        let spans = vec![span(PhiCategory::Ssn, text, 4, 15)];
        let before = spans.clone();
        let _ = Redactor::new().redact(text, &spans);
        assert_eq!(spans, before);
    }
}
