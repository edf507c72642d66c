//! The page flow controller: it owns the drawing surface, the vertical cursor of the main column
//! and decides when the content overflows onto a new page.

use crate::{
    error::ContextError,
    font_metrics::{FontVariant, StandardFont},
    style::{Color, StyleConfig},
    surface::{DrawingSurface, Rectangle, TextStyle},
};

/// Multiplier of the font size giving the distance between two consecutive baselines.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// A vertical band of the page, given by its left edge and its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub x: f32,
    pub width: f32,
}

impl Column {
    /// The x coordinate of the right edge of the column.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// The state of one render: the surface being drawn on, the active style and the cursor.
///
/// The cursor is the baseline at which the next line of the main column is drawn, measured in
/// points from the top of the page. It starts at the top margin of every page and is only ever
/// advanced by the section renderers.
pub struct PageFlow<S: DrawingSurface> {
    surface: S,
    style: StyleConfig,
    page_width: f32,
    page_height: f32,
    cursor: f32,
    main_column: Column,
}

impl<S: DrawingSurface> PageFlow<S> {
    /// Prepares the flow, deriving the column geometry from the style. No page is added yet.
    pub fn new(surface: S, style: StyleConfig, page_width: f32, page_height: f32) -> Self {
        let layout = style.layout;
        let main_x = if layout.two_column {
            layout.margin + layout.sidebar_width + layout.gutter
        } else {
            layout.margin
        };

        PageFlow {
            surface,
            style,
            page_width,
            page_height,
            cursor: layout.margin,
            main_column: Column {
                x: main_x,
                width: page_width - main_x - layout.margin,
            },
        }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    pub fn main_column(&self) -> Column {
        self.main_column
    }

    /// The sidebar column, only present for two-column styles.
    pub fn sidebar_column(&self) -> Option<Column> {
        let layout = self.style.layout;
        layout.two_column.then_some(Column {
            x: layout.margin,
            width: layout.sidebar_width,
        })
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Moves the cursor down by the given amount of points.
    pub fn advance(&mut self, distance: f32) {
        self.cursor += distance;
    }

    /// The lowest y coordinate content may reach.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height - self.style.layout.margin
    }

    /// The vertical space available on a page once the margins are taken away.
    pub fn printable_height(&self) -> f32 {
        self.page_height - 2.0 * self.style.layout.margin
    }

    pub fn page_count(&self) -> usize {
        self.surface.page_count()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Hands back the surface once the render is over.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Starts a new page if the given height does not fit between the cursor and the bottom
    /// margin, returning whether a page break happened. Heights taller than a whole page are
    /// capped to the printable height, so that a fresh page is never followed by another one.
    pub fn ensure_space(&mut self, height_needed: f32) -> Result<bool, ContextError> {
        let height_needed = height_needed.min(self.printable_height());
        if self.cursor + height_needed <= self.bottom_limit() {
            return Ok(false);
        }

        log::debug!(
            "Breaking the page {} at {:.1}pt, {:.1}pt are needed",
            self.page_count(),
            self.cursor,
            height_needed
        );
        self.new_page()?;
        Ok(true)
    }

    /// Appends a page, paints its background and, for two-column styles, the sidebar fill,
    /// then moves the cursor back to the top margin.
    pub fn new_page(&mut self) -> Result<(), ContextError> {
        self.surface.add_page(self.page_width, self.page_height)?;

        let palette = self.style.palette;
        if palette.page_background != Color::WHITE {
            self.surface.fill_rectangle(
                Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: self.page_width,
                    height: self.page_height,
                },
                palette.page_background,
            )?;
        }
        if let Some(sidebar) = self.sidebar_column() {
            self.surface.fill_rectangle(
                Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: sidebar.right(),
                    height: self.page_height,
                },
                palette.sidebar_background,
            )?;
        }
        self.cursor = self.style.layout.margin;

        Ok(())
    }

    /// The text style of the active font family in the given variant.
    pub fn text_style(&self, font_variant: FontVariant, font_size: f32, color: Color) -> TextStyle {
        TextStyle {
            font: StandardFont::from_family(self.style.typography.font_family, font_variant),
            font_size,
            color,
        }
    }

    /// Word-wraps the text to the width with the font of the text style.
    pub fn wrap(&self, text: &str, text_style: &TextStyle, maximum_width: f32) -> Vec<String> {
        text_style
            .font
            .split_text_to_size(text, text_style.font_size, maximum_width)
    }

    pub fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        text_style: &TextStyle,
    ) -> Result<(), ContextError> {
        self.surface.draw_text(text, [x, y], text_style)
    }

    /// Draws the text so that it ends at `right_x`.
    pub fn draw_text_right_aligned(
        &mut self,
        text: &str,
        right_x: f32,
        y: f32,
        text_style: &TextStyle,
    ) -> Result<(), ContextError> {
        let width = text_style.font.text_width(text, text_style.font_size);
        self.surface.draw_text(text, [right_x - width, y], text_style)
    }

    /// Draws the text centered on the given x coordinate.
    pub fn draw_text_centered(
        &mut self,
        text: &str,
        center_x: f32,
        y: f32,
        text_style: &TextStyle,
    ) -> Result<(), ContextError> {
        let width = text_style.font.text_width(text, text_style.font_size);
        self.surface
            .draw_text(text, [center_x - width / 2.0, y], text_style)
    }

    /// Draws already wrapped lines at the cursor, advancing it by one line height per line.
    ///
    /// A block which fits on a page is kept together, moving to a new page as a whole if needed.
    /// A longer block is broken between its lines.
    pub fn draw_lines(
        &mut self,
        lines: &[String],
        x: f32,
        text_style: &TextStyle,
    ) -> Result<(), ContextError> {
        let line_height = text_style.font_size * LINE_HEIGHT_FACTOR;
        let block_height = lines.len() as f32 * line_height;
        let keep_together = block_height <= self.printable_height();
        if keep_together {
            self.ensure_space(block_height)?;
        }

        for line in lines {
            if !keep_together {
                self.ensure_space(line_height)?;
            }
            let y = self.cursor;
            self.draw_text(line, x, y, text_style)?;
            self.cursor += line_height;
        }

        Ok(())
    }

    /// Draws an upper-cased section title in the heading color, underlined by an accent rule
    /// spanning the main column.
    pub fn draw_section_title(&mut self, title: &str) -> Result<(), ContextError> {
        let typography = self.style.typography;
        let section_title_size = typography.section_title_size;
        self.ensure_space(section_title_size * 2.0)?;

        let text_style = self.text_style(
            FontVariant::Bold,
            section_title_size,
            self.style.palette.heading,
        );
        let column = self.main_column;
        let y = self.cursor;
        self.draw_text(&title.to_uppercase(), column.x, y, &text_style)?;

        self.cursor += section_title_size / 2.0;
        let rule_y = self.cursor;
        self.surface.draw_line(
            [column.x, rule_y],
            [column.right(), rule_y],
            self.style.palette.accent,
            self.style.section_rule_width,
        )?;
        self.cursor += section_title_size * 1.5;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        style::StyleName,
        surface::{DrawOperation, RecordingSurface},
    };

    fn flow(style_name: StyleName) -> PageFlow<RecordingSurface> {
        let mut flow = PageFlow::new(RecordingSurface::new(), style_name.config(), 612.0, 792.0);
        flow.new_page().unwrap();
        flow
    }

    #[test]
    fn column_geometry_follows_the_layout() {
        let modern = flow(StyleName::Modern);
        assert_eq!(modern.main_column(), Column { x: 240.0, width: 332.0 });
        assert_eq!(modern.sidebar_column(), Some(Column { x: 40.0, width: 180.0 }));

        let classic = flow(StyleName::Classic);
        assert_eq!(classic.main_column(), Column { x: 50.0, width: 512.0 });
        assert_eq!(classic.sidebar_column(), None);
    }

    #[test]
    fn new_pages_repaint_the_sidebar() {
        let mut modern = flow(StyleName::Modern);
        modern.advance(600.0);
        assert!(modern.ensure_space(200.0).unwrap());
        assert_eq!(modern.cursor(), 40.0);

        let document = modern.into_surface().finish().unwrap();
        let sidebar_fills: Vec<usize> = document
            .operations
            .iter()
            .filter_map(|operation| match operation {
                DrawOperation::Rectangle { page, rectangle, .. } if rectangle.width == 220.0 => {
                    Some(*page)
                }
                _ => None,
            })
            .collect();
        assert_eq!(sidebar_fills, vec![0, 1]);
    }

    #[test]
    fn content_fitting_above_the_bottom_margin_stays_on_the_page() {
        let mut classic = flow(StyleName::Classic);
        classic.advance(700.0 - 50.0);
        assert!(!classic.ensure_space(42.0).unwrap());
        assert!(classic.ensure_space(42.5).unwrap());
        assert_eq!(classic.page_count(), 2);
    }

    #[test]
    fn short_blocks_move_to_the_next_page_as_a_whole() {
        let mut minimalist = flow(StyleName::Minimalist);
        minimalist.advance(690.0);
        let text_style = minimalist.text_style(FontVariant::Regular, 10.0, Color::BLACK);
        let lines = vec!["first".to_string(), "second".to_string(), "third".to_string()];
        minimalist.draw_lines(&lines, 48.0, &text_style).unwrap();

        let document = minimalist.into_surface().finish().unwrap();
        assert_eq!(document.find_text("first"), Some((1, [48.0, 48.0])));
        assert_eq!(document.find_text("third"), Some((1, [48.0, 72.0])));
    }

    #[test]
    fn section_titles_are_upper_cased_and_ruled() {
        let mut modern = flow(StyleName::Modern);
        modern.draw_section_title("Work Experience").unwrap();
        assert_eq!(modern.cursor(), 40.0 + 17.0 / 2.0 + 17.0 * 1.5);

        let document = modern.into_surface().finish().unwrap();
        assert_eq!(document.find_text("WORK EXPERIENCE"), Some((0, [240.0, 40.0])));
        assert_eq!(document.lines(), vec![(0, [240.0, 48.5], [572.0, 48.5])]);
    }
}
