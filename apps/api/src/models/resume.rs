//! The résumé record — the sole domain entity the renderer consumes.
//!
//! The shape mirrors the JSON blob the browser form persists, so every field
//! is optional and unknown keys are tolerated. Certifications and languages
//! admit either a bare string or a structured record; both normalize to the
//! structured shape before rendering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    pub name: Option<String>,
    pub position: Option<String>,
    pub summary: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub contact_information: Option<String>,
    pub social_media: Vec<SocialLink>,
    pub education: Vec<Education>,
    pub work_experience: Vec<WorkExperience>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub certifications: Vec<CertificationEntry>,
    pub languages: Vec<LanguageEntry>,
    pub qualities: Vec<String>,
    pub interests: Vec<String>,
}

impl ResumeRecord {
    /// First link whose platform matches, or `None`. Duplicates exist in
    /// real form data; first match wins.
    pub fn social_link(&self, platform: &str) -> Option<&str> {
        self.social_media
            .iter()
            .find(|s| s.platform == platform)
            .map(|s| s.link.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Platform label as stored by the form: "LinkedIn", "Github", "Website", …
    #[serde(rename = "socialMedia")]
    pub platform: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
    pub description: Option<String>,
    /// Newline-delimited achievement lines; blank lines are dropped at render time.
    pub key_achievements: Option<String>,
    /// Tech stack tag, rendered as a typewriter-styled suffix line.
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    /// Category label, e.g. "Languages" or "Outils".
    pub title: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// A certification as entered in the form: either a bare name or a full record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CertificationEntry {
    Name(String),
    Detailed(Certification),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub score: Option<String>,
}

impl CertificationEntry {
    /// Normalizes the bare-string form to the structured shape.
    pub fn normalized(&self) -> Certification {
        match self {
            CertificationEntry::Name(name) => Certification {
                name: Some(name.clone()),
                ..Certification::default()
            },
            CertificationEntry::Detailed(cert) => cert.clone(),
        }
    }
}

/// A language entry: either a bare string or `{"language": "…"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageEntry {
    Name(String),
    Detailed { language: Option<String> },
}

impl LanguageEntry {
    /// Normalizes both forms to the language string.
    pub fn normalized(&self) -> String {
        match self {
            LanguageEntry::Name(name) => name.clone(),
            LanguageEntry::Detailed { language } => language.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let json = r##"{
            "name": "Jane Doe",
            "themeColor": "#fb8500",
            "profilePicture": "",
            "workExperience": []
        }"##;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert!(record.work_experience.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: ResumeRecord = serde_json::from_str("{}").unwrap();
        assert!(record.name.is_none());
        assert!(record.education.is_empty());
        assert!(record.languages.is_empty());
    }

    #[test]
    fn test_camel_case_keys_deserialize() {
        let json = r#"{
            "contactInformation": "+33 6 00 00 00 00",
            "workExperience": [
                {"company": "Acme", "startYear": "2020-01-01", "keyAchievements": "Shipped v1"}
            ]
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.contact_information.as_deref(), Some("+33 6 00 00 00 00"));
        assert_eq!(
            record.work_experience[0].key_achievements.as_deref(),
            Some("Shipped v1")
        );
    }

    #[test]
    fn test_certification_bare_string_normalizes() {
        let entry: CertificationEntry = serde_json::from_str(r#""AWS""#).unwrap();
        let cert = entry.normalized();
        assert_eq!(cert.name.as_deref(), Some("AWS"));
        assert!(cert.issuer.is_none());
        assert!(cert.score.is_none());
    }

    #[test]
    fn test_certification_structured_form_passes_through() {
        let entry: CertificationEntry =
            serde_json::from_str(r#"{"name": "AWS", "issuer": "Amazon", "score": "900"}"#).unwrap();
        let cert = entry.normalized();
        assert_eq!(cert.name.as_deref(), Some("AWS"));
        assert_eq!(cert.issuer.as_deref(), Some("Amazon"));
        assert_eq!(cert.score.as_deref(), Some("900"));
    }

    #[test]
    fn test_language_both_forms_normalize_identically() {
        let bare: LanguageEntry = serde_json::from_str(r#""Anglais""#).unwrap();
        let structured: LanguageEntry = serde_json::from_str(r#"{"language": "Anglais"}"#).unwrap();
        assert_eq!(bare.normalized(), structured.normalized());
    }

    #[test]
    fn test_social_link_first_match_wins() {
        let record = ResumeRecord {
            social_media: vec![
                SocialLink {
                    platform: "LinkedIn".to_string(),
                    link: "https://linkedin.com/in/first".to_string(),
                },
                SocialLink {
                    platform: "LinkedIn".to_string(),
                    link: "https://linkedin.com/in/second".to_string(),
                },
            ],
            ..ResumeRecord::default()
        };
        assert_eq!(
            record.social_link("LinkedIn"),
            Some("https://linkedin.com/in/first")
        );
        assert_eq!(record.social_link("Github"), None);
    }
}
