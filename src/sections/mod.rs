//! One renderer per resume section. Every renderer draws through the [`PageFlow`](crate::flow::PageFlow)
//! and leaves its cursor below what it drew.

pub mod entries;
pub mod header;
pub mod references;
pub mod sidebar;
pub mod signature;
pub mod skills_education;
pub mod summary;

/// Horizontal offset of a bullet marker from the left edge of the column.
pub(crate) const BULLET_MARKER_INDENT: f32 = 5.0;
/// Horizontal offset of the bullet text from the left edge of the column.
pub(crate) const BULLET_TEXT_INDENT: f32 = 15.0;
/// Vertical space left after each bullet.
pub(crate) const BULLET_SPACING: f32 = 5.0;
/// The marker drawn in front of bullets.
pub(crate) const BULLET_MARKER: &str = "•";
