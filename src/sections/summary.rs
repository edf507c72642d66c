use crate::{
    error::ContextError, flow::PageFlow, font_metrics::FontVariant, surface::DrawingSurface,
};

/// Draws the summary as one paragraph wrapped to the main column.
pub fn draw_summary<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    summary_lines: &[String],
) -> Result<(), ContextError> {
    if summary_lines.is_empty() {
        return Ok(());
    }
    flow.draw_section_title("Summary")?;

    let style = *flow.style();
    let column = flow.main_column();
    let body_style = flow.text_style(
        FontVariant::Regular,
        style.typography.body_size,
        style.palette.body,
    );
    let lines = flow.wrap(&summary_lines.join(" "), &body_style, column.width);
    flow.draw_lines(&lines, column.x, &body_style)?;
    flow.advance(style.typography.section_title_size);

    Ok(())
}
