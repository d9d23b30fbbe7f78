use crate::types::*;
use std::collections::BTreeMap;

/// Statistics about a paginated book
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BookStatistics {
    /// Total number of pages, title pages included
    pub total_pages: usize,
    /// Number of chapter opener pages
    pub chapters: usize,
    /// Pages holding one story (continuations included)
    pub single_story_pages: usize,
    /// Shared pages holding several stories
    pub multi_story_pages: usize,
    /// Pages continuing an answer from the previous page
    pub continuation_pages: usize,
    /// Pages carrying a photo
    pub photo_pages: usize,
    /// Question/answer pairs placed in the book
    pub stories_placed: usize,
    /// Page count per template
    pub template_usage: BTreeMap<TemplateId, usize>,
}

/// Calculate statistics for a page sequence
pub fn calculate_statistics(pages: &[PageModel]) -> BookStatistics {
    let mut stats = BookStatistics {
        total_pages: pages.len(),
        ..Default::default()
    };

    for page in pages {
        *stats.template_usage.entry(page.template_id).or_insert(0) += 1;

        if page.photo.is_some() {
            stats.photo_pages += 1;
        }
        stats.stories_placed += page.questions().count();

        match page.template_id {
            TemplateId::Welcome | TemplateId::End => {}
            TemplateId::ChapterOpener => stats.chapters += 1,
            TemplateId::Multi => stats.multi_story_pages += 1,
            _ => {
                stats.single_story_pages += 1;
                if page.is_continuation() {
                    stats.continuation_pages += 1;
                }
            }
        }
    }

    stats
}
