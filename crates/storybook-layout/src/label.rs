//! Human-readable page labels for viewers and exported pages

use crate::types::PageModel;

/// Localized words used in page labels
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLabels {
    pub page_text: String,
    pub story_text: String,
}

impl Default for PageLabels {
    fn default() -> Self {
        Self {
            page_text: "Page".to_string(),
            story_text: "Story".to_string(),
        }
    }
}

/// Running header shown above story pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    /// e.g. "Mom's Story"
    pub running_title: String,
    pub chapter_title: String,
    /// e.g. "Page 7"
    pub page_label: String,
}

impl PageLabels {
    /// Header for a story page. Welcome, end and chapter opener pages have none.
    pub fn page_header(
        &self,
        page: &PageModel,
        parent_name: &str,
        chapter_title: &str,
    ) -> Option<PageHeader> {
        if page.is_welcome() || page.is_end() || page.is_chapter_opener() {
            return None;
        }

        Some(PageHeader {
            running_title: format!("{}'s {}", parent_name, self.story_text),
            chapter_title: chapter_title.to_string(),
            page_label: self.page_label(page.page_number),
        })
    }

    pub fn page_label(&self, page_number: usize) -> String {
        format!("{} {}", self.page_text, page_number)
    }

    /// Viewer position, e.g. "Page 3 of 12" for the zero-based index 2
    pub fn position_label(&self, index: usize, total: usize) -> String {
        format!("{} {} of {}", self.page_text, index + 1, total)
    }
}
