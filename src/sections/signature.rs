use image::DynamicImage;

use crate::{
    error::ContextError,
    flow::PageFlow,
    font_metrics::FontVariant,
    signature::SIGNATURE_HEIGHT,
    surface::DrawingSurface,
};

use super::sidebar::draw_signature_block;

/// Draws the signature after the rest of the main column, starting a new page when the block
/// does not fit on the current one.
pub fn draw_signature<S: DrawingSurface>(
    flow: &mut PageFlow<S>,
    signature: Option<&DynamicImage>,
    name: &str,
) -> Result<(), ContextError> {
    let Some(signature) = signature else {
        return Ok(());
    };
    let style = *flow.style();
    let small_size = style.typography.small_size;
    let text_style = flow.text_style(FontVariant::Regular, small_size, style.palette.subheading);

    let gap = style.typography.body_size;
    let block_height = SIGNATURE_HEIGHT + small_size + 4.0;
    if !flow.ensure_space(gap + block_height)? {
        flow.advance(gap);
    }

    let (x, y) = (flow.main_column().x, flow.cursor());
    draw_signature_block(flow, signature, x, y, name, &text_style)?;
    flow.advance(block_height);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{style::StyleName, surface::RecordingSurface};
    use image::{Rgba, RgbaImage};

    #[test]
    fn the_signature_breaks_the_page_instead_of_overflowing() {
        let mut flow = PageFlow::new(RecordingSurface::new(), StyleName::Elegant.config(), 612.0, 792.0);
        flow.new_page().unwrap();
        flow.advance(650.0);
        let signature = DynamicImage::ImageRgba8(RgbaImage::from_pixel(150, 40, Rgba([0, 0, 0, 255])));
        draw_signature(&mut flow, Some(&signature), "Alex Johnson").unwrap();

        let document = flow.into_surface().finish().unwrap();
        assert_eq!(document.page_count(), 2);
        let images = document.images();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].0, 1);
        assert_eq!(images[0].1.y, 54.0);
        assert_eq!(document.find_text("Alex Johnson").map(|(page, _)| page), Some(1));
    }

    #[test]
    fn no_signature_no_block() {
        let mut flow = PageFlow::new(RecordingSurface::new(), StyleName::Tech.config(), 612.0, 792.0);
        flow.new_page().unwrap();
        draw_signature(&mut flow, None, "Alex Johnson").unwrap();

        let document = flow.into_surface().finish().unwrap();
        assert!(document.images().is_empty());
        assert!(document.lines().is_empty());
    }
}
