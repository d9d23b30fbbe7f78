//! Book assembly - the full page sequence for a set of stories

use crate::constants::{END_CHAPTER_ID, WELCOME_CHAPTER_ID};
use crate::layout::{create_single_story_page, pack_chapter};
use crate::options::LayoutOptions;
use crate::types::*;
use std::collections::HashMap;

/// Stories of one chapter, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterGroup<'a> {
    pub chapter_id: &'a str,
    pub chapter_name: &'a str,
    pub stories: Vec<&'a Story>,
}

/// Group stories by chapter.
///
/// Chapters appear in order of first appearance and stories keep their
/// relative order. The chapter name is taken from the first story seen.
pub fn group_by_chapter(stories: &[Story]) -> Vec<ChapterGroup<'_>> {
    let mut groups: Vec<ChapterGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for story in stories {
        let slot = *index.entry(story.chapter_id.as_str()).or_insert_with(|| {
            groups.push(ChapterGroup {
                chapter_id: &story.chapter_id,
                chapter_name: &story.chapter_name,
                stories: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].stories.push(story);
    }

    groups
}

/// Build the complete book: welcome page, then for each chapter an opener
/// followed by its packed story pages, then the end page.
///
/// Page numbers run from 1 with no gaps. Identical input always produces
/// identical output.
pub fn generate_book_pages_with_chapters(
    stories: &[Story],
    chapter_photos: &HashMap<String, String>,
    options: &LayoutOptions,
) -> Vec<PageModel> {
    let mut pages = Vec::new();

    pages.push(PageModel::new(
        1,
        TemplateId::Welcome,
        WELCOME_CHAPTER_ID,
        vec![ContentEntry::new(Slot::WelcomeTitle, options.welcome_text.as_str())],
    ));

    for group in group_by_chapter(stories) {
        pages.push(PageModel::new(
            pages.len() + 1,
            TemplateId::ChapterOpener,
            group.chapter_id,
            vec![ContentEntry::new(Slot::ChapterTitle, group.chapter_name)],
        ));

        let chapter_photo = chapter_photos.get(group.chapter_id).map(String::as_str);
        let chapter_pages = pack_chapter(
            &group.stories,
            group.chapter_id,
            chapter_photo,
            pages.len() + 1,
            options,
        );
        log::debug!(
            "Chapter {}: {} stories on {} pages",
            group.chapter_id,
            group.stories.len(),
            chapter_pages.len()
        );
        pages.extend(chapter_pages);
    }

    pages.push(PageModel::new(
        pages.len() + 1,
        TemplateId::End,
        END_CHAPTER_ID,
        vec![ContentEntry::new(Slot::EndTitle, options.end_text.as_str())],
    ));

    pages
}

/// One page per story, no chapter framing. Each page takes its chapter from
/// its story.
pub fn generate_book_pages(stories: &[Story], options: &LayoutOptions) -> Vec<PageModel> {
    stories
        .iter()
        .enumerate()
        .map(|(i, story)| create_single_story_page(story, &story.chapter_id, i + 1, options))
        .collect()
}
