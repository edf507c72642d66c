//! Titled entries of the main column: jobs, projects and, for single-column styles, education.
//!
//! An entry is a bold title with an optional trailing element aligned to the right edge of the
//! column, an optional italic subtitle and a list of bullets. The title, the subtitle and the
//! first bullet are always kept on the same page, the following bullets may move to a new page
//! one at a time.

use crate::{
    error::ContextError,
    flow::{PageFlow, LINE_HEIGHT_FACTOR},
    font_metrics::FontVariant,
    parser::{ExperienceEntry, ProjectEntry},
    surface::{DrawingSurface, Rectangle, TextStyle},
};

use super::{BULLET_MARKER, BULLET_MARKER_INDENT, BULLET_SPACING, BULLET_TEXT_INDENT};

/// What is drawn on the right of an entry title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trailing<'a> {
    Nothing,
    Date(&'a str),
    /// An URL, drawn as a clickable link.
    Link(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryBlock<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub trailing: Trailing<'a>,
    pub bullets: &'a [String],
}

/// Prepends `http://` to the URLs which carry no scheme.
pub fn link_target(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

/// Draws the "Work Experience" section, skipping it when there is nothing to draw.
pub fn draw_experience_section<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    section_lines: &[String],
    entries: &[ExperienceEntry],
) -> Result<(), ContextError> {
    if section_lines.is_empty() {
        return Ok(());
    }
    flow.draw_section_title("Work Experience")?;

    for entry in entries {
        draw_entry(
            flow,
            &EntryBlock {
                title: &entry.title,
                subtitle: Some(entry.company.as_str()).filter(|company| !company.is_empty()),
                trailing: if entry.date.is_empty() {
                    Trailing::Nothing
                } else {
                    Trailing::Date(&entry.date)
                },
                bullets: &entry.bullets,
            },
        )?;
    }

    Ok(())
}

/// Draws the "Personal Projects" section, skipping it when there is nothing to draw.
pub fn draw_project_section<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    section_lines: &[String],
    entries: &[ProjectEntry],
) -> Result<(), ContextError> {
    if section_lines.is_empty() {
        return Ok(());
    }
    flow.draw_section_title("Personal Projects")?;

    for entry in entries {
        let trailing = match (&entry.url, entry.date.is_empty()) {
            (Some(url), _) => Trailing::Link(url),
            (None, false) => Trailing::Date(&entry.date),
            (None, true) => Trailing::Nothing,
        };
        draw_entry(
            flow,
            &EntryBlock {
                title: &entry.name,
                subtitle: None,
                trailing,
                bullets: &entry.bullets,
            },
        )?;
    }

    Ok(())
}

/// Draws one entry at the cursor.
pub fn draw_entry<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    entry: &EntryBlock,
) -> Result<(), ContextError> {
    let style = *flow.style();
    let typography = style.typography;
    let palette = style.palette;
    let column = flow.main_column();
    let bold_size = typography.body_bold_size;

    let body_style = flow.text_style(FontVariant::Regular, typography.body_size, palette.body);
    let wrapped_bullets: Vec<Vec<String>> = entry
        .bullets
        .iter()
        .map(|bullet| flow.wrap(bullet, &body_style, column.width - BULLET_TEXT_INDENT))
        .filter(|lines| !lines.is_empty())
        .collect();

    let header_height = match entry.subtitle {
        Some(_) => bold_size * 1.2 + bold_size * 1.5,
        None => bold_size * 1.5,
    };
    let first_bullet_height = wrapped_bullets
        .first()
        .map_or(0.0, |lines| bullet_height(lines, &body_style));
    let opening_height = header_height + first_bullet_height;
    flow.ensure_space(opening_height)?;
    let first_bullet_checked = opening_height <= flow.printable_height();

    let title_style = flow.text_style(FontVariant::Bold, bold_size, palette.heading);
    let y = flow.cursor();
    flow.draw_text(entry.title, column.x, y, &title_style)?;

    match entry.trailing {
        Trailing::Nothing => {}
        Trailing::Date(date) => {
            let date_style = flow.text_style(FontVariant::Regular, bold_size, palette.subheading);
            flow.draw_text_right_aligned(date, column.right(), y, &date_style)?;
        }
        Trailing::Link(url) => {
            let link_style = flow.text_style(FontVariant::Regular, bold_size, palette.accent);
            flow.draw_text_right_aligned(url, column.right(), y, &link_style)?;

            let width = link_style.font.text_width(url, bold_size);
            flow.surface_mut().add_link(
                Rectangle {
                    x: column.right() - width,
                    y: y - bold_size,
                    width,
                    height: bold_size * LINE_HEIGHT_FACTOR,
                },
                &link_target(url),
            )?;
        }
    }

    match entry.subtitle {
        Some(subtitle) => {
            flow.advance(bold_size * 1.2);
            let subtitle_style = flow.text_style(FontVariant::Italic, bold_size, palette.subheading);
            let y = flow.cursor();
            flow.draw_text(subtitle, column.x, y, &subtitle_style)?;
            flow.advance(bold_size * 1.5);
        }
        None => flow.advance(bold_size * 1.5),
    }

    for (index, lines) in wrapped_bullets.iter().enumerate() {
        let space_checked = index == 0 && first_bullet_checked;
        draw_bullet(flow, lines, &body_style, space_checked)?;
    }
    flow.advance(typography.body_size);

    Ok(())
}

fn bullet_height(lines: &[String], body_style: &TextStyle) -> f32 {
    lines.len() as f32 * body_style.font_size * LINE_HEIGHT_FACTOR + BULLET_SPACING
}

/// Draws a wrapped bullet, moving it to a new page as a whole when it does not fit. The first
/// bullet of an entry was already measured together with the entry header.
fn draw_bullet<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    lines: &[String],
    body_style: &TextStyle,
    space_checked: bool,
) -> Result<(), ContextError> {
    let column = flow.main_column();
    let height = bullet_height(lines, body_style);
    if !space_checked {
        // A bullet taller than a page only needs room for its first line
        let height_needed = if height <= flow.printable_height() {
            height
        } else {
            body_style.font_size * LINE_HEIGHT_FACTOR
        };
        flow.ensure_space(height_needed)?;
    }

    let y = flow.cursor();
    flow.draw_text(BULLET_MARKER, column.x + BULLET_MARKER_INDENT, y, body_style)?;
    flow.draw_lines(lines, column.x + BULLET_TEXT_INDENT, body_style)?;
    flow.advance(BULLET_SPACING);

    Ok(())
}
