//! The sidebar of the two-column styles, drawn once on the first page.
//!
//! The sidebar has no pagination of its own: whatever would cross the bottom margin is left out,
//! and the signature block is only drawn when the content above it leaves enough room.

use image::DynamicImage;

use crate::{
    error::ContextError,
    flow::{Column, PageFlow, LINE_HEIGHT_FACTOR},
    font_metrics::FontVariant,
    profile::UserProfile,
    signature::{SIGNATURE_HEIGHT, SIGNATURE_WIDTH},
    surface::{DrawingSurface, Rectangle, TextStyle},
};

/// The vertical position of the next sidebar line, independent from the cursor of the main column.
#[derive(Clone, Copy)]
struct SidebarCursor {
    column: Column,
    y: f32,
    bottom_limit: f32,
}

impl SidebarCursor {
    fn draw_line<S: DrawingSurface>(
        &self,
        flow: &mut PageFlow<S>,
        text: &str,
        text_style: &TextStyle,
    ) -> Result<(), ContextError> {
        if self.y > self.bottom_limit {
            log::warn!("The sidebar is full, dropping {:?}", text);
            return Ok(());
        }
        flow.draw_text(text, self.column.x, self.y, text_style)
    }

    /// Draws the text wrapped to the sidebar, returning the number of lines it took.
    fn draw_wrapped<S: DrawingSurface>(
        &self,
        flow: &mut PageFlow<S>,
        text: &str,
        text_style: &TextStyle,
        line_height: f32,
    ) -> Result<usize, ContextError> {
        let lines = flow.wrap(text, text_style, self.column.width);
        for (index, line) in lines.iter().enumerate() {
            let line_cursor = SidebarCursor {
                y: self.y + index as f32 * line_height,
                ..*self
            };
            line_cursor.draw_line(flow, line, text_style)?;
        }

        Ok(lines.len())
    }
}

/// Draws the identity, contact, skills, education and signature of the subject in the sidebar.
pub fn draw_sidebar<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    user_profile: &UserProfile,
    name: &str,
    signature: Option<&DynamicImage>,
) -> Result<(), ContextError> {
    let Some(column) = flow.sidebar_column() else {
        return Ok(());
    };
    let style = *flow.style();
    let typography = style.typography;
    let palette = style.palette;
    let mut sidebar = SidebarCursor {
        column,
        y: style.layout.margin,
        bottom_limit: flow.bottom_limit(),
    };

    let name_style = flow.text_style(FontVariant::Bold, typography.name_size, palette.sidebar_heading);
    let name_lines = sidebar.draw_wrapped(flow, name, &name_style, typography.name_size * 0.8)?;
    sidebar.y += name_lines as f32 * typography.name_size * 0.8 + 10.0;

    let role = user_profile.display_role().trim();
    if !role.is_empty() {
        let role_style = flow.text_style(FontVariant::Regular, typography.title_size, palette.accent);
        sidebar.draw_line(flow, role, &role_style)?;
    }
    sidebar.y += typography.section_title_size * 2.0;

    let heading_style = flow.text_style(
        FontVariant::Bold,
        typography.body_bold_size,
        palette.sidebar_heading,
    );
    let text_style = flow.text_style(FontVariant::Regular, typography.small_size, palette.sidebar_text);
    let small_line_height = typography.small_size * LINE_HEIGHT_FACTOR;

    let contact_details = user_profile.contact_details();
    if !contact_details.is_empty() {
        sidebar.draw_line(flow, "CONTACT", &heading_style)?;
        sidebar.y += typography.body_size * 1.5;
        for detail in contact_details {
            let lines = sidebar.draw_wrapped(flow, detail, &text_style, small_line_height)?;
            sidebar.y += lines as f32 * small_line_height + 5.0;
        }
        sidebar.y += typography.section_title_size;
    }

    for (title, skills) in [
        ("TECHNICAL SKILLS", &user_profile.technical_skills),
        ("SOFT SKILLS", &user_profile.soft_skills),
    ] {
        if skills.is_empty() {
            continue;
        }
        sidebar.draw_line(flow, title, &heading_style)?;
        sidebar.y += typography.body_size * 1.5;
        for skill in skills {
            let lines = sidebar.draw_wrapped(flow, &format!("• {skill}"), &text_style, small_line_height)?;
            sidebar.y += (lines.max(1) - 1) as f32 * small_line_height + typography.small_size * 1.5;
        }
        sidebar.y += typography.section_title_size;
    }

    if !user_profile.education.is_empty() {
        sidebar.draw_line(flow, "EDUCATION", &heading_style)?;
        sidebar.y += typography.body_size * 1.5;

        let degree_style = flow.text_style(FontVariant::Bold, typography.small_size, palette.sidebar_text);
        for education in &user_profile.education {
            for (text, text_style, spacing) in [
                (&education.degree, &degree_style, 1.2),
                (&education.institution, &text_style, 1.2),
                (&education.grad_date, &text_style, 2.0),
            ] {
                let lines = sidebar.draw_wrapped(flow, text, text_style, small_line_height)?;
                sidebar.y += (lines.max(1) - 1) as f32 * small_line_height
                    + typography.small_size * spacing;
            }
        }
    }

    if let Some(signature) = signature {
        let signature_y =
            flow.page_height() - style.layout.margin - SIGNATURE_HEIGHT - typography.small_size - 10.0;
        if sidebar.y < signature_y {
            draw_signature_block(flow, signature, column.x, signature_y, name, &text_style)?;
        } else {
            log::debug!("No room left in the sidebar for the signature, omitting it");
        }
    }

    Ok(())
}

/// Draws the signature image with its top-left corner at `(x, y)`, a rule beneath it and the name of the signer.
pub(crate) fn draw_signature_block<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    signature: &DynamicImage,
    x: f32,
    y: f32,
    name: &str,
    text_style: &TextStyle,
) -> Result<(), ContextError> {
    flow.surface_mut().draw_image(
        signature,
        Rectangle {
            x,
            y,
            width: SIGNATURE_WIDTH,
            height: SIGNATURE_HEIGHT,
        },
    )?;

    let rule_y = y + SIGNATURE_HEIGHT + 2.0;
    flow.surface_mut().draw_line(
        [x, rule_y],
        [x + SIGNATURE_WIDTH, rule_y],
        text_style.color,
        0.75,
    )?;
    flow.draw_text(
        name,
        x,
        y + SIGNATURE_HEIGHT + text_style.font_size + 4.0,
        text_style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        profile::Education,
        style::{StyleConfig, StyleName},
        surface::{DrawOperation, RecordedDocument, RecordingSurface},
    };
    use image::{Rgba, RgbaImage};

    fn profile() -> UserProfile {
        UserProfile {
            name: "Alex Johnson".into(),
            email: "alex.j@email.com".into(),
            phone: "123-456-7890".into(),
            target_role: "Other".into(),
            custom_target_role: "Platform Engineer".into(),
            technical_skills: vec!["Rust".into(), "Kubernetes".into()],
            soft_skills: vec!["Mentoring".into()],
            education: vec![
                Education {
                    institution: "University of Technology".into(),
                    degree: "B.S. in Computer Science".into(),
                    grad_date: "May 2016".into(),
                    ..Education::default()
                },
                Education {
                    institution: "Open University".into(),
                    degree: "M.S. in Distributed Systems".into(),
                    grad_date: "2019".into(),
                    ..Education::default()
                },
            ],
            ..UserProfile::default()
        }
    }

    fn render(user_profile: &UserProfile, signature: Option<&DynamicImage>) -> RecordedDocument {
        let mut flow = PageFlow::new(RecordingSurface::new(), StyleName::Modern.config(), 612.0, 792.0);
        flow.new_page().unwrap();
        draw_sidebar(&mut flow, user_profile, &user_profile.name, signature).unwrap();
        flow.into_surface().finish().unwrap()
    }

    #[test]
    fn sidebar_lists_identity_skills_and_education_in_order() {
        let document = render(&profile(), None);
        let texts: Vec<&str> = document.texts().map(|(_, text, _)| text).collect();

        assert_eq!(
            texts,
            vec![
                "Alex Johnson",
                "Platform Engineer",
                "CONTACT",
                "alex.j@email.com",
                "123-456-7890",
                "TECHNICAL SKILLS",
                "• Rust",
                "• Kubernetes",
                "SOFT SKILLS",
                "• Mentoring",
                "EDUCATION",
                "B.S. in Computer Science",
                "University of Technology",
                "May 2016",
                "M.S. in Distributed Systems",
                "Open University",
                "2019",
            ]
        );
        for (_, _, position) in document.texts() {
            assert_eq!(position[0], 40.0);
        }
        assert!(document.images().is_empty());
        assert!(document.lines().is_empty());
    }

    #[test]
    fn signature_sits_above_the_bottom_margin() {
        let signature = DynamicImage::ImageRgba8(RgbaImage::from_pixel(150, 40, Rgba([0, 0, 0, 255])));
        let document = render(&profile(), Some(&signature));

        let signature_y = 792.0 - 40.0 - SIGNATURE_HEIGHT - 11.0 - 10.0;
        assert_eq!(
            document.images(),
            vec![(
                0,
                Rectangle {
                    x: 40.0,
                    y: signature_y,
                    width: SIGNATURE_WIDTH,
                    height: SIGNATURE_HEIGHT
                }
            )]
        );
        assert_eq!(document.lines().len(), 1);
        let (_, _, name_position) = document.texts().filter(|(_, text, _)| *text == "Alex Johnson").last().unwrap();
        assert!(name_position[1] <= 792.0 - 40.0);
    }

    #[test]
    fn crowded_sidebars_omit_the_signature() {
        let mut user_profile = profile();
        user_profile.technical_skills = (0..40).map(|index| format!("Skill {index}")).collect();
        let signature = DynamicImage::ImageRgba8(RgbaImage::from_pixel(150, 40, Rgba([0, 0, 0, 255])));
        let document = render(&user_profile, Some(&signature));

        assert!(document.images().is_empty());
        assert!(document.lines().is_empty());
        for (_, _, position) in document.texts() {
            assert!(position[1] <= 792.0 - 40.0);
        }
    }

    fn role_font_size(style: StyleConfig) -> f32 {
        let mut flow = PageFlow::new(RecordingSurface::new(), style, 612.0, 792.0);
        flow.new_page().unwrap();
        draw_sidebar(&mut flow, &profile(), "Alex Johnson", None).unwrap();
        let document = flow.into_surface().finish().unwrap();

        document
            .operations
            .iter()
            .find_map(|operation| match operation {
                DrawOperation::Text {
                    text, text_style, ..
                } if text == "Platform Engineer" => Some(text_style.font_size),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn the_role_is_drawn_at_the_title_size() {
        assert_eq!(role_font_size(StyleName::Modern.config()), 12.0);
        assert_eq!(role_font_size(StyleName::Professional.config()), 13.0);

        let mut style = StyleName::Modern.config();
        style.typography.title_size = 40.0;
        assert_eq!(role_font_size(style), 40.0);
    }
}
