mod common;

use common::{sentences, story, story_with_answer};
use storybook_layout::*;

fn styles(page: &PageModel) -> Vec<TextStyle> {
    page.content.iter().map(|e| e.style()).collect()
}

// =============================================================================
// Single story pages
// =============================================================================

#[test]
fn test_single_story_page_with_photo() {
    let options = LayoutOptions::default();
    let s = story("q1", "childhood", 120, true);
    let page = create_single_story_page(&s, "childhood", 7, &options);

    assert_eq!(page.id, "page-7");
    assert_eq!(page.page_number, 7);
    assert_eq!(page.template_id, TemplateId::PhotoAbove);
    assert_eq!(page.photo.as_deref(), Some("photo-q1"));
    assert_eq!(page.chapter_id, "childhood");
    assert!(!page.multi_story);
    assert_eq!(page.story_count, 1);
    assert_eq!(
        page.content,
        vec![
            ContentEntry::new(Slot::Question(0), "Question q1?"),
            ContentEntry::new(Slot::Answer(1), "a".repeat(120)),
        ]
    );
}

#[test]
fn test_single_story_page_only_first_photo() {
    let options = LayoutOptions::default();
    let mut s = story("q2", "roots", 950, true);
    s.photos.push("second".to_string());
    let page = create_single_story_page(&s, "roots", 1, &options);

    assert_eq!(page.template_id, TemplateId::SideBySide);
    assert_eq!(page.photo.as_deref(), Some("photo-q2"));
}

#[test]
fn test_two_column_answer_is_not_pre_split() {
    let options = LayoutOptions::default();
    let s = story("q3", "work", 800, false);
    let page = create_single_story_page(&s, "work", 3, &options);

    assert_eq!(page.template_id, TemplateId::TwoColumn);
    assert_eq!(page.photo, None);
    assert_eq!(styles(&page), vec![TextStyle::Question, TextStyle::Answer]);
    assert_eq!(page.content[1].text_box_index(), 1);
    assert_eq!(page.content[1].text.len(), 800);
}

#[test]
fn test_empty_answer_with_photo() {
    let options = LayoutOptions::default();
    let s = story("q4", "photos", 0, true);
    let page = create_single_story_page(&s, "photos", 2, &options);

    assert_eq!(page.template_id, TemplateId::PhotoAbove);
    assert_eq!(page.answers().collect::<Vec<_>>(), vec![""]);
    assert!(page.photo.is_some());
}

#[test]
fn test_multi_story_page_interleaves_pairs() {
    let a = story("a", "joy", 10, false);
    let b = story("b", "joy", 20, false);
    let c = story("c", "joy", 30, false);
    let page = create_multi_story_page(&[&a, &b, &c], "joy", 4);

    assert_eq!(page.template_id, TemplateId::Multi);
    assert!(page.multi_story);
    assert_eq!(page.story_count, 3);
    assert_eq!(page.content.len(), 6);
    for (i, pair) in page.content.chunks(2).enumerate() {
        assert_eq!(pair[0].slot, Slot::Question(i * 2));
        assert_eq!(pair[1].slot, Slot::Answer(i * 2 + 1));
    }
    assert_eq!(page.questions().collect::<Vec<_>>(), vec!["Question a?", "Question b?", "Question c?"]);
    assert_eq!(page.photo, None);
}

#[test]
fn test_attach_photo_keeps_first() {
    let mut page = PageModel::new(1, TemplateId::Multi, "joy", Vec::new());
    assert!(page.attach_photo("first"));
    assert!(!page.attach_photo("second"));
    assert_eq!(page.photo.as_deref(), Some("first"));
}

// =============================================================================
// Long story splitting
// =============================================================================

#[test]
fn test_split_into_chunks_respects_budget() {
    let text = sentences(20);
    let chunks = split_into_chunks(&text, 1200);

    assert_eq!(chunks.len(), 2);
    // 11 sentences of 100 chars plus 10 separating spaces
    assert_eq!(chunks[0].len(), 1110);
    assert_eq!(chunks[1].len(), 908);
    assert!(chunks.iter().all(|c| c.chars().count() <= 1200));
}

#[test]
fn test_split_preserves_content() {
    let text = sentences(37);
    let chunks = split_into_chunks(&text, 1200);
    assert_eq!(chunks.join(" "), text);
}

#[test]
fn test_split_normalizes_whitespace_between_sentences() {
    let text = format!("{}\n\n{}", sentences(8), sentences(8));
    let chunks = split_into_chunks(&text, 1200);
    assert_eq!(chunks.join(" "), format!("{} {}", sentences(8), sentences(8)));
}

#[test]
fn test_oversized_sentence_is_kept_whole() {
    let giant = format!("{}.", "g".repeat(1500));
    let text = format!("Short one. {} Tail.", giant);
    let chunks = split_into_chunks(&text, 1200);

    assert_eq!(chunks, vec!["Short one.".to_string(), giant, "Tail.".to_string()]);
}

#[test]
fn test_no_punctuation_is_one_chunk() {
    let text = "word ".repeat(500);
    let chunks = split_into_chunks(&text, 1200);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0], text.trim());
}

#[test]
fn test_split_long_story_pages() {
    let options = LayoutOptions::default();
    let s = story_with_answer("long", "love", &sentences(30), false);
    let pages = split_long_story(&s, "love", 10, &options);

    assert_eq!(pages.len(), 3);
    let numbers: Vec<usize> = pages.iter().map(|p| p.page_number).collect();
    assert_eq!(numbers, vec![10, 11, 12]);

    assert_eq!(styles(&pages[0]), vec![TextStyle::Question, TextStyle::Answer]);
    for page in &pages[1..] {
        assert_eq!(page.content, vec![ContentEntry::new(Slot::Answer(0), page.content[0].text.clone())]);
        assert!(page.is_continuation());
    }

    let question_pages = pages.iter().filter(|p| p.questions().count() > 0).count();
    assert_eq!(question_pages, 1);

    let joined: Vec<&str> = pages.iter().flat_map(|p| p.answers()).collect();
    assert_eq!(joined.join(" "), s.answer);
    assert!(pages.iter().all(|p| p.chapter_id == "love" && !p.multi_story));
}

#[test]
fn test_split_long_story_photo_on_first_page_only() {
    let options = LayoutOptions::default();
    let s = story_with_answer("long", "love", &sentences(20), true);
    let pages = split_long_story(&s, "love", 1, &options);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].template_id, TemplateId::SideBySide);
    assert_eq!(pages[0].photo.as_deref(), Some("photo-long"));
    assert_eq!(pages[1].template_id, TemplateId::TwoColumn);
    assert_eq!(pages[1].photo, None);
}

#[test]
fn test_split_templates_follow_chunk_length() {
    let options = LayoutOptions::default();
    // 12 sentences: 11 on the first page, one 100-char sentence left over
    let s = story_with_answer("long", "work", &sentences(12), false);
    let pages = split_long_story(&s, "work", 1, &options);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].template_id, TemplateId::TwoColumn);
    assert_eq!(pages[1].template_id, TemplateId::Brief);
}

#[test]
fn test_blank_long_answer_keeps_its_page() {
    let options = LayoutOptions::default();
    let s = story_with_answer("blank", "joy", &" ".repeat(1300), true);

    let pages = split_long_story(&s, "joy", 4, &options);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].page_number, 4);
    assert_eq!(pages[0].questions().collect::<Vec<_>>(), vec!["Question blank?"]);
    assert_eq!(pages[0].photo.as_deref(), Some("photo-blank"));

    let refs = vec![&s];
    let packed = pack_chapter(&refs, "joy", None, 1, &options);
    assert_eq!(packed.len(), 1);
    assert_eq!(packed[0].story_count, 1);
}

// =============================================================================
// Multi-story packing
// =============================================================================

#[test]
fn test_pack_respects_story_count() {
    let options = LayoutOptions::default();
    let stories: Vec<Story> = (0..7).map(|i| story(&i.to_string(), "c", 100, false)).collect();
    let refs: Vec<&Story> = stories.iter().collect();
    let pages = pack_chapter(&refs, "c", None, 3, &options);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].story_count, 6);
    assert_eq!(pages[1].story_count, 1);
    assert_eq!(pages[0].page_number, 3);
    assert_eq!(pages[1].page_number, 4);
}

#[test]
fn test_pack_respects_length_budget() {
    let options = LayoutOptions::default();
    let stories: Vec<Story> = (0..5).map(|i| story(&i.to_string(), "c", 600, false)).collect();
    let refs: Vec<&Story> = stories.iter().collect();
    let pages = pack_chapter(&refs, "c", None, 1, &options);

    let counts: Vec<usize> = pages.iter().map(|p| p.story_count).collect();
    assert_eq!(counts, vec![4, 1]);
}

#[test]
fn test_chapter_photo_page_uses_tighter_limits() {
    let options = LayoutOptions::default();
    let stories: Vec<Story> = (0..5).map(|i| story(&i.to_string(), "c", 100, false)).collect();
    let refs: Vec<&Story> = stories.iter().collect();
    let pages = pack_chapter(&refs, "c", Some("chapter-photo"), 1, &options);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].story_count, 4);
    assert_eq!(pages[0].photo.as_deref(), Some("chapter-photo"));
    assert_eq!(pages[1].story_count, 1);
    assert_eq!(pages[1].photo, None);
}

#[test]
fn test_chapter_photo_page_length_limit() {
    let options = LayoutOptions::default();
    let stories: Vec<Story> = (0..4).map(|i| story(&i.to_string(), "c", 500, false)).collect();
    let refs: Vec<&Story> = stories.iter().collect();
    let pages = pack_chapter(&refs, "c", Some("chapter-photo"), 1, &options);

    let counts: Vec<usize> = pages.iter().map(|p| p.story_count).collect();
    assert_eq!(counts, vec![2, 2]);
    assert!(pages[0].photo.is_some());
    assert!(pages[1].photo.is_none());
}

#[test]
fn test_photo_story_breaks_run() {
    let options = LayoutOptions::default();
    let a = story("a", "c", 100, false);
    let b = story("b", "c", 100, true);
    let c = story("c", "c", 100, false);
    let pages = pack_chapter(&[&a, &b, &c], "c", Some("chapter-photo"), 1, &options);

    assert_eq!(pages.len(), 3);
    assert!(pages[0].multi_story);
    assert_eq!(pages[0].photo.as_deref(), Some("chapter-photo"));
    assert_eq!(pages[1].template_id, TemplateId::PhotoAbove);
    assert_eq!(pages[1].photo.as_deref(), Some("photo-b"));
    assert!(pages[2].multi_story);
    assert_eq!(pages[2].photo, None);
}

#[test]
fn test_long_story_breaks_run() {
    let options = LayoutOptions::default();
    let a = story("a", "c", 50, false);
    let long = story_with_answer("long", "c", &sentences(20), false);
    let b = story("b", "c", 50, false);
    let pages = pack_chapter(&[&a, &long, &b], "c", None, 1, &options);

    assert_eq!(pages.len(), 4);
    assert_eq!(pages[0].story_count, 1);
    assert!(pages[0].multi_story);
    assert!(!pages[1].multi_story && !pages[2].multi_story);
    assert!(pages[3].multi_story);
    let numbers: Vec<usize> = pages.iter().map(|p| p.page_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn test_chapter_photo_dropped_without_shared_page() {
    let options = LayoutOptions::default();
    let a = story("a", "c", 100, true);
    let long = story_with_answer("long", "c", &sentences(15), false);
    let pages = pack_chapter(&[&a, &long], "c", Some("chapter-photo"), 1, &options);

    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|p| p.photo.as_deref() != Some("chapter-photo")));
}

#[test]
fn test_packing_budgets_hold_for_mixed_lengths() {
    let options = LayoutOptions::default();
    let stories: Vec<Story> = (0..60)
        .map(|i| story(&i.to_string(), "c", (i * 379) % 1200 + 1, false))
        .collect();
    let refs: Vec<&Story> = stories.iter().collect();

    for chapter_photo in [None, Some("chapter-photo")] {
        let pages = pack_chapter(&refs, "c", chapter_photo, 1, &options);
        let mut photo_pages = 0;
        for page in &pages {
            assert!(page.multi_story);
            let total: usize = page.answers().map(|a| a.chars().count()).sum();
            assert_eq!(page.content.len(), page.story_count * 2);
            if page.photo.is_some() {
                photo_pages += 1;
                assert!(page.story_count <= 4);
                assert!(total <= 1200);
            } else {
                assert!(page.story_count <= 6);
                assert!(total <= 2500);
            }
        }
        assert_eq!(photo_pages, usize::from(chapter_photo.is_some()));

        let placed: usize = pages.iter().map(|p| p.story_count).sum();
        assert_eq!(placed, stories.len());
    }
}

#[test]
fn test_pack_empty_chapter() {
    let options = LayoutOptions::default();
    assert!(pack_chapter(&[], "c", Some("photo"), 1, &options).is_empty());
}
