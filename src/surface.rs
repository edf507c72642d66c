//! The drawing capabilities the layout engine needs from a document backend.
//!
//! The renderers never talk to lopdf directly: they are handed a [`DrawingSurface`], which the
//! [`PdfDocument`](crate::pdf::PdfDocument) implements for the actual export, and which
//! [`RecordingSurface`] implements by keeping the draw calls in memory so that a layout can be
//! inspected without producing a PDF.
//!
//! All coordinates are in points, with the origin at the top-left corner of the page and the
//! vertical axis pointing down. The vertical coordinate of a text is the one of its baseline.
//! Every drawing call targets the last added page.

use image::DynamicImage;

use crate::{error::ContextError, font_metrics::StandardFont, style::Color};

/// The font, size and fill color of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: StandardFont,
    pub font_size: f32,
    pub color: Color,
}

/// An axis-aligned rectangle whose `y` is the one of its top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The information describing the document as a whole.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    /// A 32 characters long identifier, used for the PDF `ID` entry.
    pub identifier: String,
}

pub trait DrawingSurface {
    /// What the surface turns into once the document is complete.
    type Output;

    /// Starts the document, before any page is added.
    fn begin_document(&mut self, metadata: &DocumentMetadata) -> Result<(), ContextError>;

    /// Appends a new page which becomes the target of the following drawing calls.
    fn add_page(&mut self, page_width: f32, page_height: f32) -> Result<(), ContextError>;

    fn page_count(&self) -> usize;

    fn draw_text(
        &mut self,
        text: &str,
        position: [f32; 2],
        text_style: &TextStyle,
    ) -> Result<(), ContextError>;

    fn draw_line(
        &mut self,
        from: [f32; 2],
        to: [f32; 2],
        color: Color,
        line_width: f32,
    ) -> Result<(), ContextError>;

    fn fill_rectangle(&mut self, rectangle: Rectangle, color: Color) -> Result<(), ContextError>;

    /// Embeds the image, scaled to fill the rectangle.
    fn draw_image(
        &mut self,
        image: &DynamicImage,
        rectangle: Rectangle,
    ) -> Result<(), ContextError>;

    /// Makes the rectangle a clickable link to the URI.
    fn add_link(&mut self, rectangle: Rectangle, uri: &str) -> Result<(), ContextError>;

    /// Completes the document.
    fn finish(self) -> Result<Self::Output, ContextError>;
}

/// One recorded draw call, tagged with the index of the page it was drawn on.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOperation {
    AddPage {
        page_width: f32,
        page_height: f32,
    },
    Text {
        page: usize,
        text: String,
        position: [f32; 2],
        text_style: TextStyle,
    },
    Line {
        page: usize,
        from: [f32; 2],
        to: [f32; 2],
        color: Color,
        line_width: f32,
    },
    Rectangle {
        page: usize,
        rectangle: Rectangle,
        color: Color,
    },
    Image {
        page: usize,
        rectangle: Rectangle,
        pixel_width: u32,
        pixel_height: u32,
    },
    Link {
        page: usize,
        rectangle: Rectangle,
        uri: String,
    },
}

/// A surface which keeps every draw call in memory.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    metadata: DocumentMetadata,
    operations: Vec<DrawOperation>,
    page_count: usize,
}

/// The outcome of a recorded render.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDocument {
    pub metadata: DocumentMetadata,
    pub operations: Vec<DrawOperation>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    fn current_page(&self) -> Result<usize, ContextError> {
        self.page_count
            .checked_sub(1)
            .ok_or_else(ContextError::no_current_page)
    }
}

impl DrawingSurface for RecordingSurface {
    type Output = RecordedDocument;

    fn begin_document(&mut self, metadata: &DocumentMetadata) -> Result<(), ContextError> {
        self.metadata = metadata.clone();
        Ok(())
    }

    fn add_page(&mut self, page_width: f32, page_height: f32) -> Result<(), ContextError> {
        self.page_count += 1;
        self.operations.push(DrawOperation::AddPage {
            page_width,
            page_height,
        });
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: [f32; 2],
        text_style: &TextStyle,
    ) -> Result<(), ContextError> {
        let page = self.current_page()?;
        self.operations.push(DrawOperation::Text {
            page,
            text: text.to_string(),
            position,
            text_style: *text_style,
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: [f32; 2],
        to: [f32; 2],
        color: Color,
        line_width: f32,
    ) -> Result<(), ContextError> {
        let page = self.current_page()?;
        self.operations.push(DrawOperation::Line {
            page,
            from,
            to,
            color,
            line_width,
        });
        Ok(())
    }

    fn fill_rectangle(&mut self, rectangle: Rectangle, color: Color) -> Result<(), ContextError> {
        let page = self.current_page()?;
        self.operations.push(DrawOperation::Rectangle {
            page,
            rectangle,
            color,
        });
        Ok(())
    }

    fn draw_image(
        &mut self,
        image: &DynamicImage,
        rectangle: Rectangle,
    ) -> Result<(), ContextError> {
        let page = self.current_page()?;
        self.operations.push(DrawOperation::Image {
            page,
            rectangle,
            pixel_width: image.width(),
            pixel_height: image.height(),
        });
        Ok(())
    }

    fn add_link(&mut self, rectangle: Rectangle, uri: &str) -> Result<(), ContextError> {
        let page = self.current_page()?;
        self.operations.push(DrawOperation::Link {
            page,
            rectangle,
            uri: uri.to_string(),
        });
        Ok(())
    }

    fn finish(self) -> Result<RecordedDocument, ContextError> {
        Ok(RecordedDocument {
            metadata: self.metadata,
            operations: self.operations,
        })
    }
}

impl RecordedDocument {
    pub fn page_count(&self) -> usize {
        self.operations
            .iter()
            .filter(|operation| matches!(operation, DrawOperation::AddPage { .. }))
            .count()
    }

    /// The recorded texts with their page and position, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = (usize, &str, [f32; 2])> + '_ {
        self.operations.iter().filter_map(|operation| match operation {
            DrawOperation::Text {
                page,
                text,
                position,
                ..
            } => Some((*page, text.as_str(), *position)),
            _ => None,
        })
    }

    /// The index, among all the operations, of the first text which reads exactly as given.
    pub fn index_of_text(&self, wanted_text: &str) -> Option<usize> {
        self.operations.iter().position(|operation| {
            matches!(operation, DrawOperation::Text { text, .. } if text == wanted_text)
        })
    }

    /// The page and position of the first text which reads exactly as given.
    pub fn find_text(&self, wanted_text: &str) -> Option<(usize, [f32; 2])> {
        self.texts()
            .find(|(_, text, _)| *text == wanted_text)
            .map(|(page, _, position)| (page, position))
    }

    pub fn images(&self) -> Vec<(usize, Rectangle)> {
        self.operations
            .iter()
            .filter_map(|operation| match operation {
                DrawOperation::Image {
                    page, rectangle, ..
                } => Some((*page, *rectangle)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(usize, [f32; 2], [f32; 2])> {
        self.operations
            .iter()
            .filter_map(|operation| match operation {
                DrawOperation::Line { page, from, to, .. } => Some((*page, *from, *to)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: TextStyle = TextStyle {
        font: StandardFont::Helvetica,
        font_size: 12.0,
        color: Color::BLACK,
    };

    #[test]
    fn drawing_before_the_first_page_fails() {
        let mut surface = RecordingSurface::new();
        let error = surface.draw_text("Hello", [0.0, 0.0], &STYLE).unwrap_err();

        assert_eq!(error, ContextError::no_current_page());
    }

    #[test]
    fn operations_are_tagged_with_the_current_page() {
        let mut surface = RecordingSurface::new();
        surface.add_page(612.0, 792.0).unwrap();
        surface.draw_text("First", [40.0, 40.0], &STYLE).unwrap();
        surface.add_page(612.0, 792.0).unwrap();
        surface.draw_text("Second", [40.0, 40.0], &STYLE).unwrap();
        assert_eq!(surface.page_count(), 2);

        let document = surface.finish().unwrap();
        assert_eq!(document.page_count(), 2);
        assert_eq!(document.find_text("First"), Some((0, [40.0, 40.0])));
        assert_eq!(document.find_text("Second"), Some((1, [40.0, 40.0])));
        assert!(document.index_of_text("First") < document.index_of_text("Second"));
    }
}
