//! Scrapbook decoration helpers
//!
//! The scrapbook look picks decorative templates and small offsets at random.
//! Every helper takes the random source from the caller so a seeded RNG
//! reproduces a layout exactly. Pagination itself never uses randomness.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrapbookTemplate {
    TornPaper,
    PolaroidGallery,
    Timeline,
    Quote,
    QA,
    TwoColumn,
    Letter,
    Collage,
}

/// Selection weights for story pages without photos
pub const SCRAPBOOK_WEIGHTS: [(ScrapbookTemplate, u32); 8] = [
    (ScrapbookTemplate::TornPaper, 25),
    (ScrapbookTemplate::PolaroidGallery, 15),
    (ScrapbookTemplate::Timeline, 10),
    (ScrapbookTemplate::Quote, 15),
    (ScrapbookTemplate::QA, 30),
    (ScrapbookTemplate::TwoColumn, 20),
    (ScrapbookTemplate::Letter, 10),
    (ScrapbookTemplate::Collage, 5),
];

const PHOTO_TEMPLATES: [ScrapbookTemplate; 4] = [
    ScrapbookTemplate::PolaroidGallery,
    ScrapbookTemplate::TwoColumn,
    ScrapbookTemplate::TornPaper,
    ScrapbookTemplate::Collage,
];

/// Pick a decorative template for a page
pub fn select_scrapbook_template<R: Rng + ?Sized>(
    rng: &mut R,
    has_photos: bool,
    question_count: usize,
) -> ScrapbookTemplate {
    if question_count > 1 {
        return if rng.random_bool(0.5) {
            ScrapbookTemplate::QA
        } else {
            ScrapbookTemplate::TwoColumn
        };
    }

    if has_photos {
        return PHOTO_TEMPLATES[rng.random_range(0..PHOTO_TEMPLATES.len())];
    }

    let total: u32 = SCRAPBOOK_WEIGHTS.iter().map(|(_, w)| w).sum();
    let mut roll = rng.random_range(0..total);
    for (template, weight) in SCRAPBOOK_WEIGHTS {
        if roll < weight {
            return template;
        }
        roll -= weight;
    }
    ScrapbookTemplate::QA
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetIntensity {
    Subtle,
    Medium,
    Strong,
}

impl OffsetIntensity {
    /// Maximum (translation px, rotation degrees) in either direction
    pub fn range(self) -> (f32, f32) {
        match self {
            OffsetIntensity::Subtle => (2.0, 0.5),
            OffsetIntensity::Medium => (4.0, 1.5),
            OffsetIntensity::Strong => (8.0, 3.0),
        }
    }
}

/// Hand-placed look for a page element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrapOffset {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotate_deg: f32,
}

impl ScrapOffset {
    /// CSS-style transform string
    pub fn transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg)",
            self.translate_x, self.translate_y, self.rotate_deg
        )
    }
}

fn symmetric<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * max * 2.0
}

pub fn scrap_offset<R: Rng + ?Sized>(rng: &mut R, intensity: OffsetIntensity) -> ScrapOffset {
    let (translate, rotate) = intensity.range();
    ScrapOffset {
        translate_x: symmetric(rng, translate),
        translate_y: symmetric(rng, translate),
        rotate_deg: symmetric(rng, rotate),
    }
}

/// Tape strip rotation in degrees, within [-3, 3)
pub fn tape_rotation<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    symmetric(rng, 3.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLayout {
    SingleColumn,
    TwoColumn,
    PhotoFocus,
    TextFocus,
}

/// Layout emphasis from the amount of text and photos
pub fn determine_layout(answer_length: usize, photo_count: usize) -> ContentLayout {
    if photo_count > 3 {
        return ContentLayout::PhotoFocus;
    }
    if photo_count == 0 && answer_length > 600 {
        return ContentLayout::TextFocus;
    }
    if photo_count >= 1 && answer_length < 300 {
        return ContentLayout::PhotoFocus;
    }
    if answer_length > 400 {
        return ContentLayout::SingleColumn;
    }
    ContentLayout::TwoColumn
}
