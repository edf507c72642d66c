//! The document assembler, turning a resume text and a user profile into a finished document.

use std::path::{Path, PathBuf};

use crate::{
    configuration::ExportConfiguration,
    error::ContextError,
    flow::PageFlow,
    parser::{parse_experience_entries, parse_project_entries, parse_resume_text, SectionKey},
    pdf::PdfDocument,
    profile::{join_non_empty, UserProfile},
    sections::{
        entries, header, references, sidebar, signature as signature_block, skills_education,
        summary,
    },
    signature::decode_signature,
    style::{StyleConfig, StyleName},
    surface::{DocumentMetadata, DrawingSurface},
};

/// A rendered PDF, ready to be written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    /// `<name>_<style>_Resume.pdf`
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

impl ExportedDocument {
    /// Writes the document into the directory, returning the path of the written file.
    pub fn save_to(&self, directory: &Path) -> Result<PathBuf, ContextError> {
        let file_path = directory.join(&self.file_name);
        std::fs::write(&file_path, &self.bytes).map_err(|error| {
            ContextError::with_error(format!("Failed to write the PDF file {:?}", file_path), &error)
        })?;
        log::info!(
            "Saved the resume of {} pages to {:?}",
            self.page_count,
            file_path
        );

        Ok(file_path)
    }
}

/// Lays out resumes on pages of the configured size.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    configuration: ExportConfiguration,
}

impl DocumentAssembler {
    pub fn new(configuration: ExportConfiguration) -> Self {
        DocumentAssembler { configuration }
    }

    pub fn configuration(&self) -> &ExportConfiguration {
        &self.configuration
    }

    /// Renders the resume onto the given surface and completes it. Unknown style names are
    /// rendered with the default style.
    pub fn render<S: DrawingSurface>(
        &self,
        resume_text: &str,
        user_profile: &UserProfile,
        style_name: &str,
        surface: S,
    ) -> Result<S::Output, ContextError> {
        let style = StyleConfig::lookup(style_name);
        let (flow, _) = self.lay_out(resume_text, user_profile, style, surface)?;
        flow.into_surface().finish()
    }

    /// Renders the resume into a PDF document named after its subject and style.
    pub fn export_pdf(
        &self,
        resume_text: &str,
        user_profile: &UserProfile,
        style_name: &str,
    ) -> Result<ExportedDocument, ContextError> {
        let style = StyleConfig::lookup(style_name);
        let (flow, name) = self.lay_out(resume_text, user_profile, style, PdfDocument::default())?;
        let page_count = flow.page_count();
        let bytes = flow.into_surface().finish()?;

        let file_name = file_name_for(&name, style.name);
        log::info!("Rendered {file_name} with {page_count} pages");

        Ok(ExportedDocument {
            file_name,
            bytes,
            page_count,
        })
    }

    /// Draws every section, returning the flow with the name the resume was rendered for.
    fn lay_out<S: DrawingSurface>(
        &self,
        resume_text: &str,
        user_profile: &UserProfile,
        style: StyleConfig,
        mut surface: S,
    ) -> Result<(PageFlow<S>, String), ContextError> {
        log::debug!("Laying out the resume with the {} style", style.name);
        // Decoding first, a corrupt signature must abort the export before anything is drawn
        let signature = user_profile
            .signature_data()
            .map(decode_signature)
            .transpose()?;
        let sections = parse_resume_text(resume_text);
        let name = subject_name(user_profile, sections.name());

        surface.begin_document(&DocumentMetadata {
            title: format!("{name} Resume"),
            author: name.to_string(),
            identifier: document_identifier(resume_text, user_profile, style.name)?,
        })?;
        let mut flow = PageFlow::new(
            surface,
            style,
            self.configuration.page_width,
            self.configuration.page_height,
        );
        flow.new_page()?;

        if style.is_two_column() {
            sidebar::draw_sidebar(&mut flow, user_profile, name, signature.as_ref())?;
        } else {
            let contact_details = user_profile.contact_details();
            let contact_line = if contact_details.is_empty() {
                sections.contact().to_string()
            } else {
                join_non_empty(&contact_details, " | ")
            };
            header::draw_header(&mut flow, name, &contact_line)?;
        }

        summary::draw_summary(&mut flow, sections.lines(SectionKey::Summary))?;
        let experience_lines = sections.lines(SectionKey::WorkExperience);
        entries::draw_experience_section(
            &mut flow,
            experience_lines,
            &parse_experience_entries(experience_lines),
        )?;
        let project_lines = sections.lines(SectionKey::PersonalProjects);
        entries::draw_project_section(
            &mut flow,
            project_lines,
            &parse_project_entries(project_lines),
        )?;

        if !style.is_two_column() {
            skills_education::draw_skills_and_education(&mut flow, user_profile)?;
        }
        references::draw_references(&mut flow, &user_profile.references)?;
        if !style.is_two_column() {
            signature_block::draw_signature(&mut flow, signature.as_ref(), name)?;
        }

        log::debug!("The resume takes {} pages", flow.page_count());
        Ok((flow, name.to_string()))
    }
}

/// Renders the resume into a PDF on US Letter pages.
pub fn export_resume(
    resume_text: &str,
    user_profile: &UserProfile,
    style_name: &str,
) -> Result<ExportedDocument, ContextError> {
    DocumentAssembler::default().export_pdf(resume_text, user_profile, style_name)
}

/// The name of the exported file, `<name>_<style>_Resume.pdf` with the whitespace of the name
/// replaced by underscores.
pub fn file_name_for(subject_name: &str, style_name: StyleName) -> String {
    let subject_name = subject_name.split_whitespace().collect::<Vec<_>>().join("_");
    let subject_name = if subject_name.is_empty() {
        "Resume".to_string()
    } else {
        subject_name
    };

    format!("{subject_name}_{style_name}_Resume.pdf")
}

/// The profile name, or the first line of the resume text when the profile has none.
fn subject_name<'a>(user_profile: &'a UserProfile, parsed_name: &'a str) -> &'a str {
    match user_profile.name.trim() {
        "" => parsed_name,
        name => name,
    }
}

/// A 32 hexadecimal characters identifier which only depends on the inputs of the render.
fn document_identifier(
    resume_text: &str,
    user_profile: &UserProfile,
    style_name: StyleName,
) -> Result<String, ContextError> {
    let profile_json = serde_json::to_string(user_profile).map_err(|error| {
        ContextError::with_error("Failed to serialize the user profile", &error)
    })?;

    let digest = |salt: u8| {
        [
            resume_text.as_bytes(),
            profile_json.as_bytes(),
            style_name.as_str().as_bytes(),
        ]
        .into_iter()
        .fold(fnv1a(FNV_OFFSET_BASIS, &[salt]), |hash, part| {
            fnv1a(fnv1a(hash, part), &[0xff])
        })
    };

    Ok(format!("{:016x}{:016x}", digest(0), digest(1)))
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// The 64 bits FNV-1a hash, continued from `hash`.
fn fnv1a(hash: u64, bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(hash, |hash, byte| (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn file_names_follow_the_subject_and_the_style() {
        assert_eq!(
            file_name_for("Alex  Johnson", StyleName::Tech),
            "Alex_Johnson_Tech_Resume.pdf"
        );
        assert_eq!(file_name_for(" ", StyleName::Modern), "Resume_Modern_Resume.pdf");
    }

    #[test]
    fn the_parsed_name_stands_in_for_a_missing_profile_name() {
        let document = DocumentAssembler::default()
            .render(
                "Jordan Doe\njordan@doe.dev",
                &UserProfile::default(),
                "Classic",
                RecordingSurface::new(),
            )
            .unwrap();

        assert_eq!(document.metadata.title, "Jordan Doe Resume");
        let texts: Vec<&str> = document.texts().map(|(_, text, _)| text).collect();
        assert_eq!(texts, vec!["Jordan Doe", "jordan@doe.dev"]);
    }

    #[test]
    fn identifiers_depend_on_every_input() {
        let user_profile = UserProfile::default();
        let identifier = document_identifier("text", &user_profile, StyleName::Modern).unwrap();

        assert_eq!(identifier.len(), 32);
        assert_eq!(
            identifier,
            document_identifier("text", &user_profile, StyleName::Modern).unwrap()
        );
        assert_ne!(
            identifier,
            document_identifier("text", &user_profile, StyleName::Tech).unwrap()
        );
    }

    #[test]
    fn corrupt_signatures_abort_before_drawing() {
        let user_profile = UserProfile {
            signature: Some("data:image/png;base64,AAAA".into()),
            ..UserProfile::default()
        };
        let error = DocumentAssembler::default()
            .export_pdf("Alex Johnson\nalex@email.com", &user_profile, "Modern")
            .unwrap_err();

        assert_eq!(error.context, "Failed to decode the signature image");
    }

    #[test]
    fn fnv1a_matches_the_reference_values() {
        assert_eq!(fnv1a(FNV_OFFSET_BASIS, b""), FNV_OFFSET_BASIS);
        assert_eq!(fnv1a(FNV_OFFSET_BASIS, b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a(FNV_OFFSET_BASIS, b"foobar"), 0x8594_4171_f739_67e8);
        assert_eq!(
            fnv1a(fnv1a(FNV_OFFSET_BASIS, b"foo"), b"bar"),
            fnv1a(FNV_OFFSET_BASIS, b"foobar")
        );
    }

    #[test]
    fn exported_files_are_named_after_the_parsed_name_when_the_profile_has_none() {
        let exported_document = DocumentAssembler::default()
            .export_pdf("Jordan Doe\njordan@doe.dev", &UserProfile::default(), "Elegant")
            .unwrap();

        assert_eq!(exported_document.file_name, "Jordan_Doe_Elegant_Resume.pdf");
        assert_eq!(exported_document.page_count, 1);
    }
}
