//! Shared constants for book pagination
//!
//! The character thresholds below are visual-fit values tuned by eye against
//! the rendered templates. They are the defaults of
//! [`LayoutOptions`](crate::LayoutOptions) and can be overridden there.

// =============================================================================
// Template Selection (exclusive upper bounds on answer length)
// =============================================================================

/// Photo stories shorter than this use the photo-above layout
pub const PHOTO_ABOVE_MAX_CHARS: usize = 700;

/// Photo stories shorter than this use the large-photo layout
pub const LARGE_PHOTO_MAX_CHARS: usize = 900;

/// Text-only stories shorter than this use the brief layout
pub const BRIEF_MAX_CHARS: usize = 600;

/// Text-only stories shorter than this use the two-column layout
pub const TWO_COLUMN_MAX_CHARS: usize = 1400;

/// Text-only stories shorter than this use the full-page layout
pub const FULL_PAGE_MAX_CHARS: usize = 1800;

// =============================================================================
// Long Stories
// =============================================================================

/// Answers longer than this are split across several pages
pub const LONG_STORY_THRESHOLD: usize = 1200;

/// Soft character budget for each page of a split story
pub const CHUNK_BUDGET_CHARS: usize = 1200;

// =============================================================================
// Multi-Story Packing
// =============================================================================

/// Combined answer length allowed on a shared page
pub const MAX_MULTI_STORY_CHARS: usize = 2500;

/// Stories allowed on a shared page
pub const MAX_STORIES_PER_PAGE: usize = 6;

/// Combined answer length allowed on the shared page that gets the chapter photo
pub const MAX_PHOTO_PAGE_CHARS: usize = 1200;

/// Stories allowed on the shared page that gets the chapter photo
pub const MAX_STORIES_PER_PHOTO_PAGE: usize = 4;

// =============================================================================
// Book Frame
// =============================================================================

/// Chapter id used by the welcome page
pub const WELCOME_CHAPTER_ID: &str = "welcome";

/// Chapter id used by the end page
pub const END_CHAPTER_ID: &str = "end";

pub const DEFAULT_WELCOME_TEXT: &str = "Welcome";

pub const DEFAULT_END_TEXT: &str = "The End";
