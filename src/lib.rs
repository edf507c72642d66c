//! Resumetr is a layout engine which renders a semi-structured plain-text resume, together with the
//! structured profile of its subject, into a styled and paginated PDF document.
//!
//! The resume text follows a loose convention: its first line is the name of the subject, its second
//! line the contact information, and the rest is split into sections by header lines such as
//! `Summary` or `Work Experience`. The entry point is the `DocumentAssembler` struct, whose
//! `export_pdf` method parses the text, looks up one of six style presets and lays the sections out
//! either in a two-column page with a dark sidebar or in a single column.
//!
//! The drawing itself goes through the `DrawingSurface` trait, so that the very same layout can be
//! recorded in memory with a `RecordingSurface` instead of being serialized to PDF.

/// This module contains the `ContextError` type which is the error type used throughout this library.
///
/// Errors are never recovered from in the middle of a render: any of them aborts the whole export,
/// so that no partial document is ever produced.
pub mod error;

/// The user profile, as maintained by the form of the application and read from JSON.
pub mod profile;

/// The parser of the resume text into its sections, and of the entries of the list-like sections.
///
/// The parser never fails. Lines which come before the first recognized header, apart from the
/// name and the contact line, are dropped, and so is the content of a section whose header is misspelled.
pub mod parser;

/// The six style presets, each defining the geometry, the colors and the typography of a resume.
pub mod style;

pub mod font_metrics;

/// The drawing capabilities needed by the layout engine, and an in-memory implementation of them.
pub mod surface;

/// The module where the `PdfDocument` interface for working with PDF documents is presented.
///
/// # Introduction
///
/// The main component of this module is the struct `PdfDocument`. It offers functions such as `add_page_with_layer`,
/// `write_text_to_layer_in_page`, `add_image_to_layer_in_page`, `write_all` and `save_to_bytes`, and it implements
/// the `DrawingSurface` trait so that the layout engine can draw on it directly.
///
/// Only the standard PDF fonts are used, so no font file is ever embedded in the documents. The dates and the
/// identifiers of the documents are fixed by their inputs, which makes the output reproducible byte by byte.
pub mod pdf;

pub mod signature;

/// The page flow controller, which owns the vertical cursor and breaks the pages.
pub mod flow;

/// The renderers of the individual resume sections.
pub mod sections;

pub mod assembler;

pub mod configuration;

pub use assembler::{export_resume, DocumentAssembler, ExportedDocument};
pub use configuration::ExportConfiguration;
pub use error::ContextError;
pub use profile::UserProfile;
pub use style::{StyleConfig, StyleName};
