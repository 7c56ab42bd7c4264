//! Integration tests for concurrent batch de-identification

use phi_scrub::deidentification::{DeidentificationEngine, DetectionConfig, PhiCategory};

fn notes() -> Vec<String> {
    vec![
        "Patient MRN: AB123456 SSN 123-45-6789".to_string(),
        "Follow-up in two weeks.".to_string(),
        "Contact John at john.doe@example.com or 555-123-4567".to_string(),
        "".to_string(),
        "123 Main St, Suite 4 on 01/02/2023".to_string(),
    ]
}

#[tokio::test]
async fn test_batch_matches_single_calls() {
    let engine = DeidentificationEngine::new(&DetectionConfig::default()).unwrap();
    let inputs = notes();

    let results = engine.deidentify_batch(inputs.clone()).await.unwrap();

    assert_eq!(results.len(), inputs.len());
    for (input, result) in inputs.iter().zip(&results) {
        assert_eq!(result.text, engine.deidentify(input));
        assert_eq!(result.detections, engine.detect(input));
    }
}

#[tokio::test]
async fn test_batch_assigns_unique_request_ids() {
    let engine = DeidentificationEngine::default();
    let results = engine.deidentify_batch(notes()).await.unwrap();

    let mut ids: Vec<_> = results.iter().map(|r| r.request_id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), results.len());
}

#[tokio::test]
async fn test_empty_batch() {
    let engine = DeidentificationEngine::default();
    let results = engine.deidentify_batch(Vec::new()).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_batch_report_totals() {
    let engine = DeidentificationEngine::default();
    let (results, report) = engine.deidentify_batch_with_report(notes()).await.unwrap();

    let total: usize = results.iter().map(|r| r.total_detections()).sum();
    assert_eq!(report.total_texts, 5);
    assert_eq!(report.total_phi_detected, total);
    assert_eq!(report.stats.texts_with_phi, 3);
    assert_eq!(report.stats.texts_without_phi, 2);
    assert_eq!(report.detections_by_category.get(&PhiCategory::Ssn), Some(&1));
    assert_eq!(report.detections_by_category.get(&PhiCategory::Name), Some(&1));

    let json = report.format_json().unwrap();
    assert!(!json.contains("123-45-6789"));
    assert!(!json.contains("john.doe@example.com"));
    assert!(report.format_console().contains("PHI SCAN REPORT"));
}

#[tokio::test]
async fn test_batch_with_threshold_skips_low_confidence_detectors() {
    let config = DetectionConfig {
        confidence_threshold: 0.9,
        ..DetectionConfig::default()
    };
    let engine = DeidentificationEngine::new(&config).unwrap();

    let results = engine
        .deidentify_batch(vec![
            "Contact John at john.doe@example.com or 555-123-4567".to_string(),
        ])
        .await
        .unwrap();

    assert_eq!(results[0].text, "Contact John at [EMAIL] or 555-123-4567");
}
