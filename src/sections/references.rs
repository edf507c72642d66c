use crate::{
    error::ContextError,
    flow::{PageFlow, LINE_HEIGHT_FACTOR},
    font_metrics::FontVariant,
    profile::Reference,
    surface::DrawingSurface,
};

/// Draws the references in the main column, two lines each, skipping the section when there are none.
pub fn draw_references<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    references: &[Reference],
) -> Result<(), ContextError> {
    if references.is_empty() {
        return Ok(());
    }
    flow.draw_section_title("References")?;

    let style = *flow.style();
    let typography = style.typography;
    let column = flow.main_column();
    let heading_style = flow.text_style(
        FontVariant::Bold,
        typography.body_bold_size,
        style.palette.heading,
    );
    let contact_style = flow.text_style(
        FontVariant::Regular,
        typography.body_size,
        style.palette.body,
    );

    for reference in references {
        let heading_lines = flow.wrap(&reference.heading_line(), &heading_style, column.width);
        let contact_lines = flow.wrap(&reference.contact_line(), &contact_style, column.width);
        let block_height = heading_lines.len() as f32 * typography.body_bold_size * LINE_HEIGHT_FACTOR
            + contact_lines.len() as f32 * typography.body_size * LINE_HEIGHT_FACTOR;

        // The two lines of a reference are never split across pages
        flow.ensure_space(block_height)?;
        for (lines, text_style) in [
            (&heading_lines, &heading_style),
            (&contact_lines, &contact_style),
        ] {
            for line in lines {
                let y = flow.cursor();
                flow.draw_text(line, column.x, y, text_style)?;
                flow.advance(text_style.font_size * LINE_HEIGHT_FACTOR);
            }
        }
        flow.advance(typography.body_size);
    }

    Ok(())
}
