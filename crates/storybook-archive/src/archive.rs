//! JSON-file backed story archive
//!
//! The archive holds every answer, chapter photo and completion mark for both
//! parents. Writes replace whatever was stored under the same key.

use crate::chapters::{CHAPTERS, ChapterDefinition, find_chapter, required_chapters};
use crate::types::*;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use storybook_layout::Story;

/// Everything stored for one parent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParentBook {
    pub stories: StoryData,
    /// Chapter id to encoded photo
    pub chapter_photos: BTreeMap<String, String>,
    /// Chapters explicitly marked complete
    pub completed: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryArchive {
    pub mom: ParentBook,
    pub dad: ParentBook,
}

fn known_chapter(id: &str) -> Result<&'static ChapterDefinition> {
    find_chapter(id).ok_or_else(|| ArchiveError::UnknownChapter(id.to_string()))
}

impl StoryArchive {
    /// Load an archive. A missing file is an empty archive.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No archive at {}, starting empty", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let archive: Self = serde_json::from_slice(&bytes)?;
        log::info!(
            "Loaded archive {} ({} mom answers, {} dad answers)",
            path.display(),
            archive.answer_count(Parent::Mom),
            archive.answer_count(Parent::Dad)
        );
        Ok(archive)
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.export_json()?;
        tokio::fs::write(path, json).await?;
        log::info!("Saved archive to {}", path.display());
        Ok(())
    }

    /// Pretty JSON for backup or sharing
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn import_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn book(&self, parent: Parent) -> &ParentBook {
        match parent {
            Parent::Mom => &self.mom,
            Parent::Dad => &self.dad,
        }
    }

    fn book_mut(&mut self, parent: Parent) -> &mut ParentBook {
        match parent {
            Parent::Mom => &mut self.mom,
            Parent::Dad => &mut self.dad,
        }
    }

    fn answer_count(&self, parent: Parent) -> usize {
        self.book(parent).stories.values().map(BTreeMap::len).sum()
    }

    /// Store an answer, replacing any previous answer to the same question
    pub fn save_answer(
        &mut self,
        parent: Parent,
        chapter: &str,
        question_index: usize,
        question: impl Into<String>,
        answer: impl Into<String>,
        photos: Vec<String>,
    ) -> Result<()> {
        let definition = known_chapter(chapter)?;
        if question_index >= definition.question_count {
            return Err(ArchiveError::QuestionOutOfRange {
                chapter: chapter.to_string(),
                index: question_index,
                count: definition.question_count,
            });
        }

        self.book_mut(parent)
            .stories
            .entry(chapter.to_string())
            .or_default()
            .insert(
                question_index,
                StoryAnswer {
                    question: question.into(),
                    answer: answer.into(),
                    photos,
                    last_modified: Utc::now(),
                },
            );
        Ok(())
    }

    pub fn answer(&self, parent: Parent, chapter: &str, question_index: usize) -> Option<&StoryAnswer> {
        self.book(parent).stories.get(chapter)?.get(&question_index)
    }

    pub fn chapter_answers(&self, parent: Parent, chapter: &str) -> Option<&ChapterData> {
        self.book(parent).stories.get(chapter)
    }

    pub fn set_chapter_photo(&mut self, parent: Parent, chapter: &str, photo: impl Into<String>) -> Result<()> {
        known_chapter(chapter)?;
        self.book_mut(parent)
            .chapter_photos
            .insert(chapter.to_string(), photo.into());
        Ok(())
    }

    pub fn chapter_photo(&self, parent: Parent, chapter: &str) -> Option<&str> {
        self.book(parent).chapter_photos.get(chapter).map(String::as_str)
    }

    /// Chapter photos in the form pagination expects
    pub fn chapter_photos(&self, parent: Parent) -> HashMap<String, String> {
        self.book(parent)
            .chapter_photos
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn is_chapter_started(&self, parent: Parent, chapter: &str) -> bool {
        self.chapter_answers(parent, chapter)
            .is_some_and(|answers| !answers.is_empty())
    }

    /// A chapter is complete when marked so, or when every question has a
    /// non-blank answer
    pub fn is_chapter_complete(&self, parent: Parent, chapter: &ChapterDefinition) -> bool {
        if self.book(parent).completed.contains(chapter.id) {
            return true;
        }

        let Some(answers) = self.chapter_answers(parent, chapter.id) else {
            return false;
        };
        (0..chapter.question_count).all(|i| {
            answers
                .get(&i)
                .is_some_and(|a| !a.answer.trim().is_empty())
        })
    }

    pub fn mark_chapter_complete(&mut self, parent: Parent, chapter: &str) -> Result<()> {
        known_chapter(chapter)?;
        self.book_mut(parent).completed.insert(chapter.to_string());
        Ok(())
    }

    /// Progress over the required chapters (the photo chapter is optional)
    pub fn completion_stats(&self, parent: Parent) -> CompletionStats {
        let mut completed_chapters = 0;
        let mut started_chapters = 0;
        let mut total_chapters = 0;

        for chapter in required_chapters() {
            total_chapters += 1;
            if self.is_chapter_complete(parent, chapter) {
                completed_chapters += 1;
            } else if self.is_chapter_started(parent, chapter.id) {
                started_chapters += 1;
            }
        }

        let percent_complete = if total_chapters == 0 {
            0
        } else {
            (completed_chapters * 100 + total_chapters / 2) / total_chapters
        };

        CompletionStats {
            completed_chapters,
            total_chapters,
            percent_complete,
            started_chapters,
            is_fully_complete: completed_chapters == total_chapters,
        }
    }

    /// Forget everything stored for one parent
    pub fn clear_parent(&mut self, parent: Parent) {
        *self.book_mut(parent) = ParentBook::default();
    }

    /// Turn stored answers into stories ready for pagination.
    ///
    /// Chapters come in book order and questions by index. Answers with
    /// neither text nor photos are left out.
    pub fn collect_stories(&self, parent: Parent) -> Vec<Story> {
        let book = self.book(parent);

        for chapter_id in book.stories.keys() {
            if find_chapter(chapter_id).is_none() {
                log::warn!("Skipping answers for unknown chapter {:?}", chapter_id);
            }
        }

        let mut stories = Vec::new();
        for chapter in &CHAPTERS {
            let Some(answers) = book.stories.get(chapter.id) else {
                continue;
            };
            for (index, answer) in answers {
                if !answer.has_content() {
                    continue;
                }
                stories.push(Story {
                    id: format!("{}-{}", chapter.id, index),
                    question: answer.question.clone(),
                    answer: answer.answer.clone(),
                    photos: answer.photos.clone(),
                    chapter_id: chapter.id.to_string(),
                    chapter_name: chapter.title.to_string(),
                });
            }
        }
        stories
    }
}
