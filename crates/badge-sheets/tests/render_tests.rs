mod common;

use badge_sheets::*;
use common::{MonoRenderer, records};

#[tokio::test]
async fn test_render_no_records() {
    let output = render_pages(Vec::new(), &BadgeOptions::default(), MonoRenderer::default())
        .await
        .unwrap();

    assert!(output.pages.is_empty());
    assert_eq!(output.badges_rendered, 0);
    assert!(output.failures.is_empty());
}

#[tokio::test]
async fn test_render_one_record() {
    let output = render_pages(records(1), &BadgeOptions::default(), MonoRenderer::default())
        .await
        .unwrap();

    assert_eq!(output.pages.len(), 1);
    assert_eq!(output.pages[0].badge_count(), 1);
    assert_eq!(output.badges_rendered, 1);
}

#[tokio::test]
async fn test_render_spills_to_second_page() {
    let output = render_pages(records(34), &BadgeOptions::default(), MonoRenderer::default())
        .await
        .unwrap();

    assert_eq!(output.pages.len(), 2);
    assert_eq!(output.pages[0].badge_count(), 33);
    assert_eq!(output.pages[1].badge_count(), 1);
}

#[test]
fn test_failed_record_is_reported_and_skipped() {
    let mut input = records(3);
    input.insert(1, Record::new("Too Long", "9".repeat(8000), 99));

    let font = MonoRenderer::default();
    let (badges, failures) = render_badges(&input, &BadgeOptions::default(), &font);

    let rows: Vec<usize> = badges.iter().map(|b| b.source_row).collect();
    assert_eq!(rows, vec![1, 2, 3]);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].source_row, 99);
    assert!(failures[0].message.contains("Barcode"));
}

#[test]
fn test_badges_keep_record_order() {
    let input = records(5);
    let font = MonoRenderer::default();
    let (badges, _) = render_badges(&input, &BadgeOptions::default(), &font);

    let lines: Vec<&str> = badges.iter().map(|b| b.lines[0].as_str()).collect();
    assert_eq!(
        lines,
        vec!["Person 001", "Person 002", "Person 003", "Person 004", "Person 005"]
    );
}

#[tokio::test]
async fn test_render_rejects_invalid_options() {
    let mut options = BadgeOptions::default();
    options.dpi = 0;

    let result = render_pages(records(1), &options, MonoRenderer::default()).await;
    assert!(matches!(result, Err(BadgeError::Config(_))));
}
