#![allow(dead_code)]

use storybook_layout::Story;

/// A story whose answer is `answer_len` characters without sentence punctuation
pub fn story(id: &str, chapter: &str, answer_len: usize, photo: bool) -> Story {
    story_with_answer(id, chapter, &"a".repeat(answer_len), photo)
}

pub fn story_with_answer(id: &str, chapter: &str, answer: &str, photo: bool) -> Story {
    Story {
        id: id.to_string(),
        question: format!("Question {}?", id),
        answer: answer.to_string(),
        photos: if photo {
            vec![format!("photo-{}", id)]
        } else {
            Vec::new()
        },
        chapter_id: chapter.to_string(),
        chapter_name: format!("Chapter {}", chapter),
    }
}

/// `count` sentences of exactly 100 characters each, separated by one space
pub fn sentences(count: usize) -> String {
    (0..count)
        .map(|i| {
            let letter = (b'a' + (i % 26) as u8) as char;
            format!("{}.", letter.to_string().repeat(99))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
