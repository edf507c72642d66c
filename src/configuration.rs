use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{error::ContextError, style::StyleName};

/// The settings of an export which are not part of the resume itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfiguration {
    /// Page width in points.
    pub page_width: f32,
    /// Page height in points.
    pub page_height: f32,
    /// The style used when none is requested.
    pub default_style: String,
    /// The directory the exported documents are written to.
    pub output_directory: PathBuf,
}

impl Default for ExportConfiguration {
    // US Letter
    fn default() -> Self {
        ExportConfiguration {
            page_width: 612.0,
            page_height: 792.0,
            default_style: StyleName::DEFAULT.as_str().to_string(),
            output_directory: PathBuf::from("."),
        }
    }
}

impl ExportConfiguration {
    pub fn from_path(configuration_file_path: &Path) -> Result<Self, ContextError> {
        let configuration_file_contents = std::fs::read_to_string(configuration_file_path)
            .map_err(|error| {
                ContextError::with_error(
                    format!(
                        "Failed to read the configuration file {:?}",
                        configuration_file_path
                    ),
                    &error,
                )
            })?;
        let configuration: ExportConfiguration =
            serde_json::from_str(&configuration_file_contents).map_err(|error| {
                ContextError::with_error("Failed to parse the configuration file", &error)
            })?;

        if !(configuration.page_width > 0.0 && configuration.page_height > 0.0) {
            return Err(ContextError::with_context(format!(
                "The page size {}x{} of the configuration is not valid",
                configuration.page_width, configuration.page_height
            )));
        }

        Ok(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_the_letter_defaults() {
        let configuration: ExportConfiguration =
            serde_json::from_str(r#"{ "defaultStyle": "Tech" }"#).unwrap();

        assert_eq!(
            configuration,
            ExportConfiguration {
                default_style: "Tech".into(),
                ..ExportConfiguration::default()
            }
        );
    }

    #[test]
    fn invalid_page_sizes_are_rejected() {
        let configuration_file_path =
            std::env::temp_dir().join(format!("resumetr-configuration-{}.json", std::process::id()));
        std::fs::write(&configuration_file_path, r#"{ "pageWidth": 0 }"#).unwrap();

        let error = ExportConfiguration::from_path(&configuration_file_path).unwrap_err();
        std::fs::remove_file(&configuration_file_path).unwrap();
        assert_eq!(error.context, "The page size 0x792 of the configuration is not valid");
    }

    #[test]
    fn unreadable_files_are_an_error() {
        let error = ExportConfiguration::from_path(Path::new("/nonexistent/resumetr.json"))
            .unwrap_err();
        assert!(error.source_error.is_some());
    }
}
