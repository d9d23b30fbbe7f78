//! Multi-story packing
//!
//! A single left-to-right pass over a chapter's stories. Short text-only
//! stories accumulate onto a shared page until the page budget is reached.
//! Long stories and photo stories break the run: the pending shared page is
//! flushed and they get pages of their own.
//!
//! The chapter photo goes to the first shared page flushed while it is still
//! unused. That page is packed under the tighter photo-page budget. If a
//! chapter produces no shared page at all, its photo is dropped.

use super::page::{create_multi_story_page, create_single_story_page};
use super::split::split_long_story;
use crate::options::LayoutOptions;
use crate::types::*;

/// Paginate one chapter's stories starting at `start_page_number`
pub fn pack_chapter(
    stories: &[&Story],
    chapter_id: &str,
    chapter_photo: Option<&str>,
    start_page_number: usize,
    options: &LayoutOptions,
) -> Vec<PageModel> {
    let mut packer = ChapterPacker::new(chapter_id, chapter_photo, start_page_number, options);
    for story in stories {
        packer.push(story);
    }
    packer.finish()
}

struct ChapterPacker<'a> {
    chapter_id: &'a str,
    chapter_photo: Option<&'a str>,
    photo_used: bool,
    options: &'a LayoutOptions,
    current: Vec<&'a Story>,
    current_length: usize,
    next_page_number: usize,
    pages: Vec<PageModel>,
}

impl<'a> ChapterPacker<'a> {
    fn new(
        chapter_id: &'a str,
        chapter_photo: Option<&'a str>,
        start_page_number: usize,
        options: &'a LayoutOptions,
    ) -> Self {
        Self {
            chapter_id,
            chapter_photo,
            photo_used: false,
            options,
            current: Vec::new(),
            current_length: 0,
            next_page_number: start_page_number,
            pages: Vec::new(),
        }
    }

    /// Whether the page being accumulated will receive the chapter photo
    fn photo_pending(&self) -> bool {
        self.chapter_photo.is_some() && !self.photo_used
    }

    fn push(&mut self, story: &'a Story) {
        let answer_length = story.answer_length();

        if answer_length > self.options.long_story_threshold {
            self.flush();
            let pages = split_long_story(story, self.chapter_id, self.next_page_number, self.options);
            self.emit_all(pages);
        } else if story.has_photo() {
            self.flush();
            let page = create_single_story_page(story, self.chapter_id, self.next_page_number, self.options);
            self.emit_all([page]);
        } else {
            let (max_length, max_count) = self.options.packing.for_page(self.photo_pending());
            let exceeds_length = self.current_length + answer_length > max_length;
            let exceeds_count = self.current.len() >= max_count;
            if exceeds_length || exceeds_count {
                self.flush();
            }
            self.current.push(story);
            self.current_length += answer_length;
        }
    }

    /// Emit the accumulated stories as a shared page, if there are any
    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }

        let mut page = create_multi_story_page(&self.current, self.chapter_id, self.next_page_number);
        if let Some(photo) = self.chapter_photo.filter(|_| !self.photo_used) {
            self.photo_used = page.attach_photo(photo);
        }
        log::debug!(
            "Packed {} stories ({} chars) onto page {} of chapter {}",
            self.current.len(),
            self.current_length,
            page.page_number,
            self.chapter_id
        );

        self.current.clear();
        self.current_length = 0;
        self.emit_all([page]);
    }

    fn emit_all(&mut self, pages: impl IntoIterator<Item = PageModel>) {
        for page in pages {
            self.next_page_number += 1;
            self.pages.push(page);
        }
    }

    fn finish(mut self) -> Vec<PageModel> {
        self.flush();
        if self.photo_pending() {
            log::debug!(
                "Chapter {} has no shared page, dropping its chapter photo",
                self.chapter_id
            );
        }
        self.pages
    }
}
