use crate::{
    error::ContextError,
    flow::{PageFlow, LINE_HEIGHT_FACTOR},
    font_metrics::FontVariant,
    style::HeaderAlignment,
    surface::{DrawingSurface, TextStyle},
};

/// Draws the name and the contact line at the top of single-column styles.
pub fn draw_header<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    name: &str,
    contact_line: &str,
) -> Result<(), ContextError> {
    let style = *flow.style();
    let typography = style.typography;

    let name_style = flow.text_style(
        FontVariant::Bold,
        typography.name_size,
        style.palette.heading,
    );
    draw_aligned_lines(flow, name, &name_style, typography.header_alignment)?;

    let contact_style = flow.text_style(
        FontVariant::Regular,
        typography.body_size,
        style.palette.subheading,
    );
    draw_aligned_lines(flow, contact_line, &contact_style, typography.header_alignment)?;
    flow.advance(typography.section_title_size);

    Ok(())
}

fn draw_aligned_lines<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    text: &str,
    text_style: &TextStyle,
    header_alignment: HeaderAlignment,
) -> Result<(), ContextError> {
    let column = flow.main_column();
    for line in flow.wrap(text, text_style, column.width) {
        let y = flow.cursor();
        match header_alignment {
            HeaderAlignment::Left => flow.draw_text(&line, column.x, y, text_style)?,
            HeaderAlignment::Center => {
                flow.draw_text_centered(&line, column.x + column.width / 2.0, y, text_style)?
            }
        }
        flow.advance(text_style.font_size * LINE_HEIGHT_FACTOR);
    }

    Ok(())
}
