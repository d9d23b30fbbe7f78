//! Long story splitting
//!
//! Answers too long for one page are cut at sentence boundaries into chunks
//! of at most `chunk_budget` characters. A sentence longer than the budget is
//! never cut; it gets a chunk of its own.

use super::page::{bind_story_content, create_single_story_page};
use crate::options::LayoutOptions;
use crate::templates::choose_template;
use crate::types::*;

/// Split a story's answer over consecutive pages starting at `start_page_number`.
///
/// Only the first page carries the question and, when the chosen template
/// allows it, the story's first photo. Continuation pages hold the answer
/// text alone. An answer that is nothing but whitespace yields one page.
pub fn split_long_story(
    story: &Story,
    chapter_id: &str,
    start_page_number: usize,
    options: &LayoutOptions,
) -> Vec<PageModel> {
    let chunks = split_into_chunks(&story.answer, options.chunk_budget);
    if chunks.is_empty() {
        log::warn!(
            "Story {} has {} chars but no sentences, keeping it on one page",
            story.id,
            story.answer_length()
        );
        return vec![create_single_story_page(story, chapter_id, start_page_number, options)];
    }
    log::debug!(
        "Splitting story {} ({} chars) into {} pages",
        story.id,
        story.answer_length(),
        chunks.len()
    );

    chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| {
            let first = index == 0;
            let with_photo = first && story.has_photo();
            let template =
                choose_template(&options.thresholds, chunk.chars().count(), with_photo);

            let content = if first {
                bind_story_content(template, Some(&story.question), chunk)
            } else {
                vec![ContentEntry::new(Slot::Answer(0), chunk.as_str())]
            };

            let mut page = PageModel::new(start_page_number + index, template.id, chapter_id, content);
            page.story_count = 1;
            if with_photo && template.supports_photo {
                if let Some(photo) = story.first_photo() {
                    page.attach_photo(photo);
                }
            }
            page
        })
        .collect()
}

/// Group the sentences of `text` into chunks of at most `budget` characters.
///
/// Sentences inside a chunk are joined by a single space. Text without
/// sentence punctuation comes back as a single chunk.
pub fn split_into_chunks(text: &str, budget: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in split_sentences(text) {
        let sentence_len = sentence.chars().count();
        if current_len > 0 && current_len + 1 + sentence_len > budget {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(sentence);
        current_len += sentence_len;
    }

    if current_len > 0 {
        chunks.push(current);
    }
    chunks
}

/// Split after `.`, `!` or `?` when followed by whitespace. The whitespace
/// run between sentences is dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            sentences.push(&text[start..i]);
            while let Some(&(_, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                chars.next();
            }
            start = chars.peek().map_or(text.len(), |&(j, _)| j);
        }
        prev = Some(c);
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
