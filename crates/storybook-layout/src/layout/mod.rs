//! Story-to-page layout
//!
//! This module turns stories into page models:
//! - Single story pages (one story, template chosen by content shape)
//! - Long story splitting (sentence-bounded chunks over several pages)
//! - Multi-story packing (greedy grouping of short stories per chapter)

mod pack;
mod page;
mod split;

pub use pack::*;
pub use page::*;
pub use split::*;
