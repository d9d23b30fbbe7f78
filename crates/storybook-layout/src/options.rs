use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exclusive upper bounds on answer length for each template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TemplateThresholds {
    pub photo_above_max: usize,
    pub large_photo_max: usize,
    pub brief_max: usize,
    pub two_column_max: usize,
    pub full_page_max: usize,
}

impl Default for TemplateThresholds {
    fn default() -> Self {
        Self {
            photo_above_max: PHOTO_ABOVE_MAX_CHARS,
            large_photo_max: LARGE_PHOTO_MAX_CHARS,
            brief_max: BRIEF_MAX_CHARS,
            two_column_max: TWO_COLUMN_MAX_CHARS,
            full_page_max: FULL_PAGE_MAX_CHARS,
        }
    }
}

/// Budgets for shared multi-story pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PackingLimits {
    /// Combined answer length of a regular shared page
    pub max_length: usize,
    /// Stories on a regular shared page
    pub max_stories: usize,
    /// Combined answer length of the shared page receiving the chapter photo
    pub photo_max_length: usize,
    /// Stories on the shared page receiving the chapter photo
    pub photo_max_stories: usize,
}

impl Default for PackingLimits {
    fn default() -> Self {
        Self {
            max_length: MAX_MULTI_STORY_CHARS,
            max_stories: MAX_STORIES_PER_PAGE,
            photo_max_length: MAX_PHOTO_PAGE_CHARS,
            photo_max_stories: MAX_STORIES_PER_PHOTO_PAGE,
        }
    }
}

impl PackingLimits {
    /// (length, count) limits for a page, depending on whether it will carry
    /// the chapter photo
    pub fn for_page(&self, photo_page: bool) -> (usize, usize) {
        if photo_page {
            (self.photo_max_length, self.photo_max_stories)
        } else {
            (self.max_length, self.max_stories)
        }
    }
}

/// Tunable pagination parameters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    // Template ladder
    pub thresholds: TemplateThresholds,

    // Long stories
    pub long_story_threshold: usize,
    pub chunk_budget: usize,

    // Shared pages
    pub packing: PackingLimits,

    // Book frame
    pub welcome_text: String,
    pub end_text: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            thresholds: TemplateThresholds::default(),
            long_story_threshold: LONG_STORY_THRESHOLD,
            chunk_budget: CHUNK_BUDGET_CHARS,
            packing: PackingLimits::default(),
            welcome_text: DEFAULT_WELCOME_TEXT.to_string(),
            end_text: DEFAULT_END_TEXT.to_string(),
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if !(t.brief_max < t.two_column_max && t.two_column_max < t.full_page_max) {
            return Err(LayoutError::Config(
                "Text template thresholds must be strictly increasing".to_string(),
            ));
        }
        if t.photo_above_max >= t.large_photo_max {
            return Err(LayoutError::Config(
                "Photo template thresholds must be strictly increasing".to_string(),
            ));
        }

        if self.long_story_threshold == 0 || self.chunk_budget == 0 {
            return Err(LayoutError::Config(
                "Long story threshold and chunk budget must be non-zero".to_string(),
            ));
        }

        let p = &self.packing;
        if p.max_length == 0 || p.max_stories == 0 || p.photo_max_length == 0 || p.photo_max_stories == 0 {
            return Err(LayoutError::Config(
                "Packing limits must be non-zero".to_string(),
            ));
        }
        if p.photo_max_length > p.max_length || p.photo_max_stories > p.max_stories {
            return Err(LayoutError::Config(format!(
                "Photo page limits ({} chars, {} stories) exceed regular page limits ({} chars, {} stories)",
                p.photo_max_length, p.photo_max_stories, p.max_length, p.max_stories
            )));
        }

        if self.long_story_threshold > p.photo_max_length {
            return Err(LayoutError::Config(format!(
                "Long story threshold ({} chars) must not exceed the photo page limit ({} chars)",
                self.long_story_threshold, p.photo_max_length
            )));
        }

        Ok(())
    }
}
