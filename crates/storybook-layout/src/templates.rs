//! Page template catalog and template selection

use crate::options::TemplateThresholds;
use crate::types::*;

const fn text_box(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    style: TextStyle,
    font_size: FontSize,
    align: Align,
) -> TextBox {
    TextBox {
        x,
        y,
        width,
        height,
        style,
        font_size,
        align,
    }
}

const fn photo_box(x: f32, y: f32, width: f32, height: f32, style: PhotoStyle) -> PhotoBox {
    PhotoBox {
        x,
        y,
        width,
        height,
        style,
    }
}

use crate::types::Align::{Center, Left};
use crate::types::FontSize::{Large, Medium};
use crate::types::TextStyle::{Answer, ChapterTitle, Question};

/// Question and answer filling the page, no photo. For long, emotional stories.
pub static FULL_PAGE: PageTemplate = PageTemplate {
    id: TemplateId::FullPage,
    name: "Full Page Story",
    text_boxes: &[
        text_box(0.1, 0.15, 0.8, 0.12, Question, Large, Center),
        text_box(0.1, 0.32, 0.8, 0.58, Answer, Medium, Left),
    ],
    photo_box: None,
    max_text_length: 1800,
    supports_photo: false,
};

/// One important photo between question and answer
pub static LARGE_PHOTO: PageTemplate = PageTemplate {
    id: TemplateId::LargePhoto,
    name: "Story with Large Photo",
    text_boxes: &[
        text_box(0.1, 0.1, 0.8, 0.1, Question, Large, Left),
        text_box(0.1, 0.58, 0.8, 0.32, Answer, Medium, Left),
    ],
    photo_box: Some(photo_box(0.1, 0.23, 0.8, 0.3, PhotoStyle::Rounded)),
    max_text_length: 900,
    supports_photo: true,
};

/// Magazine-style two column answer, no photo
pub static TWO_COLUMN: PageTemplate = PageTemplate {
    id: TemplateId::TwoColumn,
    name: "Two Column Story",
    text_boxes: &[
        text_box(0.1, 0.12, 0.8, 0.1, Question, Large, Left),
        text_box(0.1, 0.26, 0.38, 0.64, Answer, Medium, Left),
        text_box(0.52, 0.26, 0.38, 0.64, Answer, Medium, Left),
    ],
    photo_box: None,
    max_text_length: 1400,
    supports_photo: false,
};

/// Photo on top, short story below
pub static PHOTO_ABOVE: PageTemplate = PageTemplate {
    id: TemplateId::PhotoAbove,
    name: "Photo Above Story",
    text_boxes: &[
        text_box(0.1, 0.52, 0.8, 0.08, Question, Large, Left),
        text_box(0.1, 0.63, 0.8, 0.27, Answer, Medium, Left),
    ],
    photo_box: Some(photo_box(0.1, 0.1, 0.8, 0.38, PhotoStyle::FullBleed)),
    max_text_length: 700,
    supports_photo: true,
};

/// Photo on the left, story on the right
pub static SIDE_BY_SIDE: PageTemplate = PageTemplate {
    id: TemplateId::SideBySide,
    name: "Side by Side",
    text_boxes: &[
        text_box(0.52, 0.12, 0.38, 0.1, Question, Large, Left),
        text_box(0.52, 0.26, 0.38, 0.64, Answer, Medium, Left),
    ],
    photo_box: Some(photo_box(0.1, 0.12, 0.38, 0.78, PhotoStyle::Rounded)),
    max_text_length: 900,
    supports_photo: true,
};

/// Chapter introduction page
pub static CHAPTER_OPENER: PageTemplate = PageTemplate {
    id: TemplateId::ChapterOpener,
    name: "Chapter Opener",
    text_boxes: &[text_box(0.1, 0.65, 0.8, 0.2, ChapterTitle, Large, Center)],
    photo_box: Some(photo_box(0.15, 0.12, 0.7, 0.45, PhotoStyle::Rounded)),
    max_text_length: 100,
    supports_photo: true,
};

/// Brief memories
pub static BRIEF: PageTemplate = PageTemplate {
    id: TemplateId::Brief,
    name: "Brief Memory",
    text_boxes: &[
        text_box(0.1, 0.25, 0.8, 0.12, Question, Large, Center),
        text_box(0.15, 0.42, 0.7, 0.35, Answer, Medium, Center),
    ],
    photo_box: None,
    max_text_length: 600,
    supports_photo: false,
};

/// Three boxes for lengthy narratives
pub static EXTENDED: PageTemplate = PageTemplate {
    id: TemplateId::Extended,
    name: "Extended Story",
    text_boxes: &[
        text_box(0.1, 0.1, 0.8, 0.08, Question, Large, Left),
        text_box(0.1, 0.21, 0.8, 0.35, Answer, Medium, Left),
        text_box(0.1, 0.59, 0.8, 0.31, Answer, Medium, Left),
    ],
    photo_box: None,
    max_text_length: 2200,
    supports_photo: false,
};

static CATALOG: [&PageTemplate; 8] = [
    &FULL_PAGE,
    &LARGE_PHOTO,
    &TWO_COLUMN,
    &PHOTO_ABOVE,
    &SIDE_BY_SIDE,
    &CHAPTER_OPENER,
    &BRIEF,
    &EXTENDED,
];

/// All catalog templates, in catalog order
pub fn templates() -> &'static [&'static PageTemplate] {
    &CATALOG
}

/// Look up a catalog template. Synthetic ids have no catalog entry.
pub fn get_template(id: TemplateId) -> Option<&'static PageTemplate> {
    CATALOG.iter().copied().find(|t| t.id == id)
}

/// Pick the template for a story using the default thresholds
pub fn choose_best_template(answer_length: usize, has_photo: bool) -> &'static PageTemplate {
    choose_template(&TemplateThresholds::default(), answer_length, has_photo)
}

/// Pick the template for a story.
///
/// Photo stories only ever get photo layouts; text-only stories climb the
/// brief, two-column, full-page, extended ladder.
pub fn choose_template(
    thresholds: &TemplateThresholds,
    answer_length: usize,
    has_photo: bool,
) -> &'static PageTemplate {
    if has_photo {
        if answer_length < thresholds.photo_above_max {
            return &PHOTO_ABOVE;
        }
        if answer_length < thresholds.large_photo_max {
            return &LARGE_PHOTO;
        }
        return &SIDE_BY_SIDE;
    }

    if answer_length < thresholds.brief_max {
        &BRIEF
    } else if answer_length < thresholds.two_column_max {
        &TWO_COLUMN
    } else if answer_length < thresholds.full_page_max {
        &FULL_PAGE
    } else {
        &EXTENDED
    }
}
