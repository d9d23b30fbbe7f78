mod common;

use common::{sentences, story, story_with_answer};
use std::collections::HashMap;
use storybook_layout::*;

fn sample_book() -> Vec<PageModel> {
    let stories = vec![
        story("1", "roots", 100, false),
        story("2", "roots", 100, false),
        story("3", "roots", 300, true),
        story_with_answer("4", "love", &sentences(25), false),
        story("5", "love", 200, false),
    ];
    let mut photos = HashMap::new();
    photos.insert("love".to_string(), "love-photo".to_string());
    generate_book_pages_with_chapters(&stories, &photos, &LayoutOptions::default())
}

#[test]
fn test_statistics_counts() {
    let pages = sample_book();
    let stats = calculate_statistics(&pages);

    // welcome, roots opener, shared (1, 2), photo story 3,
    // love opener, long story 4 over 3 pages, shared (5), end
    assert_eq!(stats.total_pages, 10);
    assert_eq!(stats.chapters, 2);
    assert_eq!(stats.multi_story_pages, 2);
    assert_eq!(stats.single_story_pages, 4);
    assert_eq!(stats.continuation_pages, 2);
    assert_eq!(stats.photo_pages, 2);
    assert_eq!(stats.stories_placed, 5);
    assert_eq!(stats.template_usage.get(&TemplateId::Multi), Some(&2));
    assert_eq!(stats.template_usage.get(&TemplateId::ChapterOpener), Some(&2));
    assert_eq!(stats.template_usage.get(&TemplateId::PhotoAbove), Some(&1));
    assert_eq!(stats.template_usage.values().sum::<usize>(), stats.total_pages);
}

#[test]
fn test_statistics_empty() {
    let stats = calculate_statistics(&[]);
    assert_eq!(stats, BookStatistics::default());
}

#[test]
fn test_page_header_for_story_pages() {
    let pages = sample_book();
    let labels = PageLabels::default();

    let header = labels.page_header(&pages[2], "Mom", "Roots & Family Background").unwrap();
    assert_eq!(header.running_title, "Mom's Story");
    assert_eq!(header.chapter_title, "Roots & Family Background");
    assert_eq!(header.page_label, "Page 3");
}

#[test]
fn test_no_header_on_title_pages() {
    let pages = sample_book();
    let labels = PageLabels::default();

    assert!(labels.page_header(&pages[0], "Dad", "").is_none());
    assert!(labels.page_header(&pages[1], "Dad", "Roots").is_none());
    assert!(labels.page_header(pages.last().unwrap(), "Dad", "").is_none());
}

#[test]
fn test_localized_labels() {
    let labels = PageLabels {
        page_text: "Seite".to_string(),
        story_text: "Geschichte".to_string(),
    };
    assert_eq!(labels.page_label(4), "Seite 4");
    assert_eq!(labels.position_label(2, 12), "Seite 3 of 12");
}
