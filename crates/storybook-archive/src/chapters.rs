//! The fixed chapter sequence of a life story book

/// Chapter excluded from completion tracking
pub const PHOTOS_CHAPTER_ID: &str = "photos";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub question_count: usize,
}

impl ChapterDefinition {
    /// Optional chapters do not count towards completion
    pub fn is_optional(&self) -> bool {
        self.id == PHOTOS_CHAPTER_ID
    }
}

const fn chapter(id: &'static str, title: &'static str, question_count: usize) -> ChapterDefinition {
    ChapterDefinition {
        id,
        title,
        question_count,
    }
}

/// All chapters in book order
pub static CHAPTERS: [ChapterDefinition; 13] = [
    chapter("roots", "Roots & Family Background", 8),
    chapter("childhood", "Childhood (0–12)", 9),
    chapter("teenage", "Teenage Years", 9),
    chapter("young-adult", "Young Adulthood & Independence", 8),
    chapter("love", "Love, Relationships & Marriage", 9),
    chapter("wedding", "Wedding or Commitment", 4),
    chapter("parenthood", "Parenthood & Family Life", 9),
    chapter("work", "Work, Purpose & Passion", 8),
    chapter("challenges", "Challenges, Strength & Turning Points", 6),
    chapter("joy", "Joy, Hobbies & Everyday Life", 6),
    chapter("lessons", "Life Lessons, Beliefs & Looking Back", 8),
    chapter("messages", "Messages for the Future", 4),
    chapter(PHOTOS_CHAPTER_ID, "Photo Memories", 15),
];

pub fn find_chapter(id: &str) -> Option<&'static ChapterDefinition> {
    CHAPTERS.iter().find(|c| c.id == id)
}

/// Chapters that count towards completion
pub fn required_chapters() -> impl Iterator<Item = &'static ChapterDefinition> {
    CHAPTERS.iter().filter(|c| !c.is_optional())
}
