pub mod assemble;
pub mod constants;
mod label;
pub mod layout;
mod options;
pub mod scrapbook;
mod stats;
mod templates;
mod types;

pub use assemble::{ChapterGroup, generate_book_pages, generate_book_pages_with_chapters, group_by_chapter};
pub use label::{PageHeader, PageLabels};
pub use layout::{create_multi_story_page, create_single_story_page, pack_chapter, split_into_chunks, split_long_story};
pub use options::*;
pub use stats::{BookStatistics, calculate_statistics};
pub use templates::*;
pub use types::*;
