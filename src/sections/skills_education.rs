use crate::{
    error::ContextError,
    flow::PageFlow,
    font_metrics::FontVariant,
    profile::UserProfile,
    surface::DrawingSurface,
};

use super::entries::{draw_entry, EntryBlock, Trailing};

/// Draws the skill lists as comma-separated paragraphs followed by the education entries, for the
/// single-column styles which have no sidebar to hold them.
pub fn draw_skills_and_education<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    user_profile: &UserProfile,
) -> Result<(), ContextError> {
    let style = *flow.style();
    let column = flow.main_column();
    let body_style = flow.text_style(
        FontVariant::Regular,
        style.typography.body_size,
        style.palette.body,
    );

    for (title, skills) in [
        ("Technical Skills", &user_profile.technical_skills),
        ("Soft Skills", &user_profile.soft_skills),
    ] {
        if skills.is_empty() {
            continue;
        }
        flow.draw_section_title(title)?;
        let lines = flow.wrap(&skills.join(", "), &body_style, column.width);
        flow.draw_lines(&lines, column.x, &body_style)?;
        flow.advance(style.typography.section_title_size);
    }

    if user_profile.education.is_empty() {
        return Ok(());
    }
    flow.draw_section_title("Education")?;
    for education in &user_profile.education {
        draw_entry(
            flow,
            &EntryBlock {
                title: &education.degree,
                subtitle: Some(education.institution.as_str())
                    .filter(|institution| !institution.is_empty()),
                trailing: if education.grad_date.is_empty() {
                    Trailing::Nothing
                } else {
                    Trailing::Date(&education.grad_date)
                },
                bullets: &[],
            },
        )?;
    }

    Ok(())
}
