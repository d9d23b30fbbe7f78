//! Page construction for single-story and multi-story pages

use crate::options::LayoutOptions;
use crate::templates::choose_template;
use crate::types::*;

/// Bind a question and an answer to the first question box and the first
/// answer box of a template.
///
/// Templates with several answer boxes still receive the whole answer in the
/// first one; flowing text across boxes is the renderer's job.
pub(crate) fn bind_story_content(
    template: &PageTemplate,
    question: Option<&str>,
    answer: &str,
) -> Vec<ContentEntry> {
    let mut content = Vec::with_capacity(2);
    if let (Some(question), Some(index)) = (question, template.first_box(TextStyle::Question)) {
        content.push(ContentEntry::new(Slot::Question(index), question));
    }
    if let Some(index) = template.first_box(TextStyle::Answer) {
        content.push(ContentEntry::new(Slot::Answer(index), answer));
    }
    content
}

/// Lay out one story on its own page
pub fn create_single_story_page(
    story: &Story,
    chapter_id: &str,
    page_number: usize,
    options: &LayoutOptions,
) -> PageModel {
    let has_photo = story.has_photo();
    let template = choose_template(&options.thresholds, story.answer_length(), has_photo);
    let content = bind_story_content(template, Some(&story.question), &story.answer);

    let mut page = PageModel::new(page_number, template.id, chapter_id, content);
    page.story_count = 1;

    debug_assert!(
        !has_photo || template.supports_photo,
        "photo story assigned to {}",
        template.id
    );
    if template.supports_photo {
        if let Some(photo) = story.first_photo() {
            page.attach_photo(photo);
        }
    }
    page
}

/// Lay out several short stories on one shared page.
///
/// Content is a [question, answer] pair per story in story order, bound to
/// consecutive slot indices.
pub fn create_multi_story_page(stories: &[&Story], chapter_id: &str, page_number: usize) -> PageModel {
    let content = stories
        .iter()
        .enumerate()
        .flat_map(|(i, story)| {
            [
                ContentEntry::new(Slot::Question(i * 2), story.question.as_str()),
                ContentEntry::new(Slot::Answer(i * 2 + 1), story.answer.as_str()),
            ]
        })
        .collect();

    let mut page = PageModel::new(page_number, TemplateId::Multi, chapter_id, content);
    page.multi_story = true;
    page.story_count = stories.len();

    if let Some(photo) = stories.iter().find_map(|s| s.first_photo()) {
        page.attach_photo(photo);
    }
    page
}
