//! Behavioural tests for PHI detection and de-identification

use fake::faker::internet::en::SafeEmail;
use fake::Fake;
use phi_scrub::deidentification::{deidentify, detect, DetectedSpan, PhiCategory};
use test_case::test_case;

fn categories(spans: &[DetectedSpan]) -> Vec<PhiCategory> {
    spans.iter().map(|s| s.category).collect()
}

fn assert_well_formed(text: &str, spans: &[DetectedSpan]) {
    for span in spans {
        assert!(span.start < span.end, "empty span: {span:?}");
        assert!(span.end <= text.len(), "span past end: {span:?}");
        assert_eq!(&text[span.start..span.end], span.value);
        assert!((0.0..=1.0).contains(&span.confidence));
    }
    assert!(
        spans.windows(2).all(|w| w[0].start <= w[1].start),
        "spans not sorted: {spans:?}"
    );
}

#[test]
fn test_mrn_and_ssn_note() {
    let text = "Patient MRN: AB123456 SSN 123-45-6789";
    let spans = detect(text);

    assert_eq!(categories(&spans), vec![PhiCategory::Mrn, PhiCategory::Ssn]);
    assert_eq!(spans[0].value, "AB123456");
    assert_eq!(spans[0].confidence, 0.95);
    assert_eq!(spans[1].value, "123-45-6789");
    assert_eq!(spans[1].confidence, 0.98);
    assert_well_formed(text, &spans);

    assert_eq!(deidentify(text), "Patient MRN: [MRN] SSN [SSN]");
}

#[test]
fn test_contact_line_with_name_email_and_phone() {
    let text = "Contact John at john.doe@example.com or 555-123-4567";
    let spans = detect(text);

    assert_eq!(
        categories(&spans),
        vec![PhiCategory::Name, PhiCategory::Email, PhiCategory::Phone]
    );
    assert!(spans.windows(2).all(|w| !w[0].overlaps(&w[1])));
    assert_well_formed(text, &spans);

    assert_eq!(
        deidentify(text),
        "Contact [PATIENT] at [EMAIL] or [PHONE]"
    );
}

#[test]
fn test_address_and_date_both_detected() {
    let text = "123 Main St, Suite 4 on 01/02/2023";
    let spans = detect(text);

    let address = spans
        .iter()
        .find(|s| s.category == PhiCategory::Address)
        .expect("address span");
    assert_eq!(address.value, "123 Main St, Suite 4");

    let date = spans
        .iter()
        .find(|s| s.category == PhiCategory::Date)
        .expect("date span");
    assert_eq!(date.value, "01/02/2023");

    assert_eq!(deidentify(text), "[ADDRESS] on [DATE]");
}

#[test_case("" ; "empty")]
#[test_case("   " ; "spaces")]
#[test_case("\n\t \r\n" ; "mixed whitespace")]
fn test_blank_input_has_no_phi(text: &str) {
    assert!(detect(text).is_empty());
    assert_eq!(deidentify(text), text);
}

#[test_case("SSN: 123-45-6789", "SSN: [SSN]" ; "labelled")]
#[test_case("123-45-6789", "[SSN]" ; "bare")]
#[test_case("ids 111-22-3333 and 444-55-6666.", "ids [SSN] and [SSN]." ; "two in a sentence")]
fn test_ssn_replaced_with_token(text: &str, expected: &str) {
    let spans = detect(text);
    assert!(spans.iter().all(|s| s.category == PhiCategory::Ssn));
    assert!(spans.iter().all(|s| s.confidence == 0.98));
    assert_eq!(deidentify(text), expected);
}

#[test_case("(555) 123-4567" ; "parenthesised area code")]
#[test_case("555.123.4567" ; "dotted")]
#[test_case("+1 555 123 4567" ; "country code")]
fn test_phone_formats(phone: &str) {
    let text = format!("call {phone} today");
    let spans = detect(&text);
    assert_eq!(categories(&spans), vec![PhiCategory::Phone]);
    assert_eq!(deidentify(&text), "call [PHONE] today");
}

#[test]
fn test_mrn_label_followed_by_plain_word_is_not_phi() {
    let text = "MRN pending verification";
    assert!(detect(text).is_empty());
    assert_eq!(deidentify(text), text);
}

#[test_case("Medical Record Number: X99812345", "X99812345" ; "long label")]
#[test_case("mrn#00123456", "00123456" ; "lowercase with hash")]
fn test_mrn_reports_identifier_only(text: &str, identifier: &str) {
    let spans = detect(text);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].category, PhiCategory::Mrn);
    assert_eq!(spans[0].value, identifier);
    assert!(deidentify(text).ends_with("[MRN]"));
}

#[test]
fn test_generated_ssns_are_always_found() {
    for _ in 0..50 {
        let area: u32 = (100..999).fake();
        let group: u32 = (10..99).fake();
        let serial: u32 = (1000..9999).fake();
        let text = format!("SSN {area}-{group}-{serial} on file");

        let spans = detect(&text);
        assert_eq!(categories(&spans), vec![PhiCategory::Ssn], "{text}");
        assert_eq!(deidentify(&text), "SSN [SSN] on file");
    }
}

#[test]
fn test_generated_emails_never_survive() {
    for _ in 0..50 {
        let email: String = SafeEmail().fake();
        let text = format!("reply to {email} please");

        let spans = detect(&text);
        assert!(
            spans.iter().any(|s| s.category == PhiCategory::Email),
            "{text}"
        );
        assert_well_formed(&text, &spans);

        let clean = deidentify(&text);
        assert!(!clean.contains('@'), "{clean}");
        assert!(clean.contains("[EMAIL]"));
    }
}

#[test_case("Patient MRN: AB123456 SSN 123-45-6789" ; "identifiers")]
#[test_case("Contact John at john.doe@example.com or 555-123-4567" ; "contact")]
#[test_case("123 Main St, Suite 4 on 01/02/2023" ; "address")]
fn test_deidentify_is_idempotent(text: &str) {
    let once = deidentify(text);
    assert_eq!(deidentify(&once), once);
    assert!(detect(&once).is_empty());
}

#[test]
fn test_multibyte_text_keeps_char_boundaries() {
    let text = "Café visit: José, née Müller · SSN 123-45-6789 ✓";
    let spans = detect(text);
    assert_well_formed(text, &spans);
    assert!(deidentify(text).contains("SSN [SSN] ✓"));
}

#[test]
fn test_plain_clinical_text_untouched() {
    let text = "Blood pressure stable, continue current medication.";
    assert!(detect(text).is_empty());
    assert_eq!(deidentify(text), text);
}
