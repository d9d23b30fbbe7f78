mod archive;
pub mod chapters;
mod types;

pub use archive::{ParentBook, StoryArchive};
pub use chapters::{CHAPTERS, ChapterDefinition, find_chapter};
pub use types::*;
