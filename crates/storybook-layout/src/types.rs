use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// One answered chapter question, as handed over by the storage layer.
///
/// Stories with an empty answer and no photos are filtered out before they
/// reach pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Story {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub photos: Vec<String>,
    pub chapter_id: String,
    pub chapter_name: String,
}

impl Story {
    /// Answer length in characters
    pub fn answer_length(&self) -> usize {
        self.answer.chars().count()
    }

    pub fn has_photo(&self) -> bool {
        !self.photos.is_empty()
    }

    pub fn first_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }
}

/// Role of a text box within a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TextStyle {
    Question,
    Answer,
    ChapterTitle,
    WelcomeTitle,
    EndTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Text placement within a template.
///
/// Coordinates are normalized to the page: (0, 0) is the top-left corner and
/// (1, 1) the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub style: TextStyle,
    pub font_size: FontSize,
    pub align: Align,
}

/// Photo treatment hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PhotoStyle {
    Polaroid,
    FullBleed,
    Rounded,
}

/// Photo placement within a template (normalized like [`TextBox`])
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PhotoBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub style: PhotoStyle,
}

/// Identifies the layout a page is rendered with.
///
/// The first eight variants are catalog templates; `Multi`, `Welcome` and
/// `End` are synthetic layouts owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemplateId {
    #[cfg_attr(feature = "serde", serde(rename = "template-a"))]
    FullPage,
    #[cfg_attr(feature = "serde", serde(rename = "template-b"))]
    LargePhoto,
    #[cfg_attr(feature = "serde", serde(rename = "template-c"))]
    TwoColumn,
    #[cfg_attr(feature = "serde", serde(rename = "template-d"))]
    PhotoAbove,
    #[cfg_attr(feature = "serde", serde(rename = "template-e"))]
    SideBySide,
    #[cfg_attr(feature = "serde", serde(rename = "template-f"))]
    ChapterOpener,
    #[cfg_attr(feature = "serde", serde(rename = "template-g"))]
    Brief,
    #[cfg_attr(feature = "serde", serde(rename = "template-h"))]
    Extended,
    #[cfg_attr(feature = "serde", serde(rename = "template-multi"))]
    Multi,
    #[cfg_attr(feature = "serde", serde(rename = "welcome-page"))]
    Welcome,
    #[cfg_attr(feature = "serde", serde(rename = "end-page"))]
    End,
}

impl TemplateId {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::FullPage => "template-a",
            TemplateId::LargePhoto => "template-b",
            TemplateId::TwoColumn => "template-c",
            TemplateId::PhotoAbove => "template-d",
            TemplateId::SideBySide => "template-e",
            TemplateId::ChapterOpener => "template-f",
            TemplateId::Brief => "template-g",
            TemplateId::Extended => "template-h",
            TemplateId::Multi => "template-multi",
            TemplateId::Welcome => "welcome-page",
            TemplateId::End => "end-page",
        }
    }

    /// Whether this id names an entry of the template catalog
    pub fn is_catalog(self) -> bool {
        !matches!(self, TemplateId::Multi | TemplateId::Welcome | TemplateId::End)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declarative page layout: text boxes, optional photo box and capacity
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageTemplate {
    pub id: TemplateId,
    pub name: &'static str,
    pub text_boxes: &'static [TextBox],
    pub photo_box: Option<PhotoBox>,
    /// Approximate number of answer characters the layout is designed for
    pub max_text_length: usize,
    pub supports_photo: bool,
}

impl PageTemplate {
    /// Index of the first text box with the given style
    pub fn first_box(&self, style: TextStyle) -> Option<usize> {
        self.text_boxes.iter().position(|b| b.style == style)
    }
}

/// Which text slot a content entry fills.
///
/// Question and answer slots carry the positional index of the template
/// text box they are bound to. Title slots always bind to box 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    WelcomeTitle,
    EndTitle,
    ChapterTitle,
    Question(usize),
    Answer(usize),
}

impl Slot {
    pub fn style(self) -> TextStyle {
        match self {
            Slot::WelcomeTitle => TextStyle::WelcomeTitle,
            Slot::EndTitle => TextStyle::EndTitle,
            Slot::ChapterTitle => TextStyle::ChapterTitle,
            Slot::Question(_) => TextStyle::Question,
            Slot::Answer(_) => TextStyle::Answer,
        }
    }

    pub fn text_box_index(self) -> usize {
        match self {
            Slot::Question(index) | Slot::Answer(index) => index,
            Slot::WelcomeTitle | Slot::EndTitle | Slot::ChapterTitle => 0,
        }
    }

    /// Rebuild a slot from its positional form
    pub fn from_parts(text_box_index: usize, style: TextStyle) -> Self {
        match style {
            TextStyle::Question => Slot::Question(text_box_index),
            TextStyle::Answer => Slot::Answer(text_box_index),
            TextStyle::ChapterTitle => Slot::ChapterTitle,
            TextStyle::WelcomeTitle => Slot::WelcomeTitle,
            TextStyle::EndTitle => Slot::EndTitle,
        }
    }
}

/// One piece of text placed on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    pub slot: Slot,
    pub text: String,
}

impl ContentEntry {
    pub fn new(slot: Slot, text: impl Into<String>) -> Self {
        Self {
            slot,
            text: text.into(),
        }
    }

    pub fn style(&self) -> TextStyle {
        self.slot.style()
    }

    pub fn text_box_index(&self) -> usize {
        self.slot.text_box_index()
    }
}

/// One renderable page produced by pagination
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageModel {
    pub id: String,
    pub page_number: usize,
    pub template_id: TemplateId,
    pub content: Vec<ContentEntry>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub photo: Option<String>,
    pub chapter_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub multi_story: bool,
    /// Number of stories with content on this page (0 for title pages)
    #[cfg_attr(feature = "serde", serde(default))]
    pub story_count: usize,
}

impl PageModel {
    /// Create a page without a photo. Photos go through [`PageModel::attach_photo`].
    pub fn new(
        page_number: usize,
        template_id: TemplateId,
        chapter_id: impl Into<String>,
        content: Vec<ContentEntry>,
    ) -> Self {
        Self {
            id: format!("page-{}", page_number),
            page_number,
            template_id,
            content,
            photo: None,
            chapter_id: chapter_id.into(),
            multi_story: false,
            story_count: 0,
        }
    }

    /// Attach a photo unless the page already carries one.
    ///
    /// Returns whether the photo was attached. A page never holds more than
    /// one photo.
    pub fn attach_photo(&mut self, photo: impl Into<String>) -> bool {
        if self.photo.is_some() {
            return false;
        }
        self.photo = Some(photo.into());
        true
    }

    pub fn is_welcome(&self) -> bool {
        self.template_id == TemplateId::Welcome
    }

    pub fn is_end(&self) -> bool {
        self.template_id == TemplateId::End
    }

    pub fn is_chapter_opener(&self) -> bool {
        self.template_id == TemplateId::ChapterOpener
    }

    /// A single-story page that continues an answer from a previous page
    pub fn is_continuation(&self) -> bool {
        !self.multi_story
            && !self.content.is_empty()
            && self.content.iter().all(|e| e.style() == TextStyle::Answer)
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.texts(TextStyle::Question)
    }

    pub fn answers(&self) -> impl Iterator<Item = &str> {
        self.texts(TextStyle::Answer)
    }

    fn texts(&self, style: TextStyle) -> impl Iterator<Item = &str> {
        self.content
            .iter()
            .filter(move |e| e.style() == style)
            .map(|e| e.text.as_str())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserializer, Serializer};

    // Content entries travel as flat (textBoxIndex, text, style) records
    impl Serialize for ContentEntry {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            use serde::ser::SerializeStruct;
            let mut s = serializer.serialize_struct("ContentEntry", 3)?;
            s.serialize_field("textBoxIndex", &self.text_box_index())?;
            s.serialize_field("text", &self.text)?;
            s.serialize_field("style", &self.style())?;
            s.end()
        }
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct RawContentEntry {
        text_box_index: usize,
        text: String,
        style: TextStyle,
    }

    impl<'de> Deserialize<'de> for ContentEntry {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = RawContentEntry::deserialize(deserializer)?;
            Ok(ContentEntry {
                slot: Slot::from_parts(raw.text_box_index, raw.style),
                text: raw.text,
            })
        }
    }
}
