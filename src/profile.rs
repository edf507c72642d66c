use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContextError;

/// The sentinel value of `target_role` which means that `custom_target_role` is to be displayed instead.
pub const OTHER_ROLE: &str = "Other";

/// The structured data entered by the user, as it is maintained by the form state of the application.
/// The list entries are consumed by the layout engine in list order, their `id` is only used by the
/// user interface for correlating the entries and is otherwise ignored.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub target_role: String,
    pub custom_target_role: String,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub references: Vec<Reference>,
    /// The drawn signature as a PNG data URL, an empty string being the same as no signature.
    pub signature: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub grad_date: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub id: String,
    pub name: String,
    pub company: String,
    pub title: String,
    pub email: String,
    pub phone: String,
}

impl UserProfile {
    /// Reads a profile from a JSON file and normalizes its skill lists.
    pub fn from_path(profile_path: &Path) -> Result<UserProfile, ContextError> {
        let profile_content = std::fs::read_to_string(profile_path).map_err(|error| {
            ContextError::with_error(
                format!("Unable to read the user profile {:?}", profile_path),
                &error,
            )
        })?;

        UserProfile::from_json(&profile_content).map_err(|error| ContextError {
            context: format!("Unable to parse the user profile {:?}", profile_path),
            source_error: error.source_error,
        })
    }

    /// Parses a profile from its JSON representation and normalizes its skill lists.
    pub fn from_json(profile_json: &str) -> Result<UserProfile, ContextError> {
        let mut profile: UserProfile = serde_json::from_str(profile_json).map_err(|error| {
            ContextError::with_error("Unable to parse the user profile", &error)
        })?;
        profile.normalize();

        Ok(profile)
    }

    /// Removes the blank and the duplicated skills, keeping the first occurrence of each one
    /// and the original order of the lists.
    pub fn normalize(&mut self) {
        for skills in [&mut self.technical_skills, &mut self.soft_skills] {
            let mut unique_skills: Vec<String> = Vec::with_capacity(skills.len());
            for skill in skills.drain(..) {
                let skill = skill.trim().to_string();
                if skill.is_empty() || unique_skills.contains(&skill) {
                    log::debug!("Dropping the blank or duplicated skill {:?}", skill);
                    continue;
                }
                unique_skills.push(skill);
            }
            *skills = unique_skills;
        }
    }

    /// The role to be displayed under the name, which is the custom one when the target role is "Other".
    pub fn display_role(&self) -> &str {
        if self.target_role == OTHER_ROLE {
            &self.custom_target_role
        } else {
            &self.target_role
        }
    }

    /// The signature data, if any was drawn.
    pub fn signature_data(&self) -> Option<&str> {
        self.signature
            .as_deref()
            .map(str::trim)
            .filter(|signature| !signature.is_empty())
    }

    /// The contact details in the order in which they are displayed, leaving out the missing ones.
    pub fn contact_details(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.linkedin]
            .into_iter()
            .map(|detail| detail.trim())
            .filter(|detail| !detail.is_empty())
            .collect()
    }
}

impl Reference {
    /// The first line of a reference block: name, title and company.
    pub fn heading_line(&self) -> String {
        join_non_empty(&[&self.name, &self.title, &self.company], ", ")
    }

    /// The second line of a reference block: the email, followed by the phone if present.
    pub fn contact_line(&self) -> String {
        join_non_empty(&[&self.email, &self.phone], " | ")
    }
}

/// Joins the trimmed, non-empty parts with the given separator.
pub(crate) fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
