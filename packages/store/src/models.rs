//! # Domain models for the portfolio aggregate
//!
//! Defines the data structures held by [`crate::PortfolioStore`] and rendered
//! by [`crate::export`]. These types are `Serialize + Deserialize` with
//! camelCase field names, matching the JSON document persisted under
//! `"portfolioData"` by earlier releases of the app.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`PersonalInfo`] | The singleton header record: name, title, contact details, bio, profile image URL and [`SocialLinks`]. Replaced wholesale on edit. |
//! | [`Skill`] | A named skill with a proficiency in `[0, 100]`. |
//! | [`Project`] | A portfolio project: title, description, image and link URLs, and an ordered technology list. |
//! | [`WorkExperience`] | A job entry with free-text date range and an ordered achievements list. |
//! | [`ThemeColors`] | The six hex colors that drive both the in-app preview and the exported stylesheet. |
//! | [`PortfolioData`] | The aggregate root. Exactly one instance per process, owned by the store. |
//!
//! `Skill`, `Project` and `WorkExperience` carry a `String` id that is unique
//! within its list; ids are assigned by the store, never by callers. Lists
//! preserve insertion order for display.
//!
//! `Default` for [`PortfolioData`] yields the sample portfolio shown on first
//! launch, before any user edits have been persisted.

use serde::{Deserialize, Serialize};

/// Upper bound for [`Skill::proficiency`]. The store clamps on write.
pub const MAX_PROFICIENCY: u8 = 100;

/// Fixed set of social profile URLs. Empty string means "not set".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

/// Personal header information. Singleton within [`PortfolioData`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    /// URL of the profile photo. Empty string hides the image.
    pub profile_image: String,
    pub social_links: SocialLinks,
}

/// A skill with a proficiency percentage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// 0–100. Clamped by the store on add and update.
    pub proficiency: u8,
}

/// A portfolio project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Cover image URL. Empty string hides the image.
    pub image: String,
    /// External project URL. Empty string hides the link.
    pub link: String,
    pub technologies: Vec<String>,
}

/// A work history entry. Dates are free-text ("Jan 2021", "Present").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub achievements: Vec<String>,
}

/// The six theme colors, as hex strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub card_background: String,
}

/// The aggregate root: everything the app edits, persists and exports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub work_experience: Vec<WorkExperience>,
    pub theme: ThemeColors,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: "John Doe".into(),
            title: "Full Stack Developer".into(),
            email: "john.doe@example.com".into(),
            phone: "+1 (123) 456-7890".into(),
            location: "San Francisco, CA".into(),
            bio: "Passionate developer with experience in building web and mobile applications.".into(),
            profile_image:
                "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=600"
                    .into(),
            social_links: SocialLinks {
                linkedin: "https://linkedin.com/in/johndoe".into(),
                github: "https://github.com/johndoe".into(),
                twitter: "https://twitter.com/johndoe".into(),
            },
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        // The "Indigo" preset.
        Self {
            primary: "#6366f1".into(),
            secondary: "#8b5cf6".into(),
            accent: "#ec4899".into(),
            background: "#f8fafc".into(),
            text: "#0f172a".into(),
            card_background: "#ffffff".into(),
        }
    }
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            skills: vec![
                Skill { id: "1".into(), name: "React".into(), proficiency: 90 },
                Skill { id: "2".into(), name: "JavaScript".into(), proficiency: 85 },
                Skill { id: "3".into(), name: "CSS".into(), proficiency: 80 },
                Skill { id: "4".into(), name: "Node.js".into(), proficiency: 75 },
            ],
            projects: vec![
                Project {
                    id: "1".into(),
                    title: "E-commerce Platform".into(),
                    description: "A full-featured e-commerce platform with payment integration".into(),
                    image:
                        "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=600"
                            .into(),
                    link: "https://example.com/project1".into(),
                    technologies: vec!["React".into(), "Node.js".into(), "MongoDB".into()],
                },
                Project {
                    id: "2".into(),
                    title: "Task Management App".into(),
                    description: "A productivity app for managing tasks and projects".into(),
                    image:
                        "https://images.pexels.com/photos/6956353/pexels-photo-6956353.jpeg?auto=compress&cs=tinysrgb&w=600"
                            .into(),
                    link: "https://example.com/project2".into(),
                    technologies: vec!["React Native".into(), "Firebase".into()],
                },
            ],
            work_experience: vec![
                WorkExperience {
                    id: "1".into(),
                    company: "Tech Solutions Inc.".into(),
                    position: "Senior Developer".into(),
                    start_date: "Jan 2021".into(),
                    end_date: "Present".into(),
                    description: "Leading development of web and mobile applications".into(),
                    achievements: vec![
                        "Implemented CI/CD pipeline, reducing deployment time by 40%".into(),
                        "Led a team of 5 developers on multiple client projects".into(),
                    ],
                },
                WorkExperience {
                    id: "2".into(),
                    company: "Digital Innovations".into(),
                    position: "Full Stack Developer".into(),
                    start_date: "Jun 2018".into(),
                    end_date: "Dec 2020".into(),
                    description: "Worked on various web and mobile applications".into(),
                    achievements: vec![
                        "Developed a real-time analytics dashboard for clients".into(),
                        "Optimized database queries, improving performance by 30%".into(),
                    ],
                },
            ],
            theme: ThemeColors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&PortfolioData::default()).unwrap();
        assert!(json.contains("\"personalInfo\""));
        assert!(json.contains("\"profileImage\""));
        assert!(json.contains("\"socialLinks\""));
        assert!(json.contains("\"workExperience\""));
        assert!(json.contains("\"startDate\""));
        assert!(json.contains("\"cardBackground\""));
    }

    #[test]
    fn round_trips_through_json() {
        let data = PortfolioData::default();
        let json = serde_json::to_string(&data).unwrap();
        let parsed: PortfolioData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn parses_a_legacy_camel_case_payload() {
        // Field names exactly as earlier releases persisted them.
        let raw = r##"{
            "personalInfo": {
                "name": "Jane", "title": "Dev", "email": "j@e.com",
                "phone": "1", "location": "NYC", "bio": "hi",
                "profileImage": "",
                "socialLinks": {"linkedin": "", "github": "", "twitter": ""}
            },
            "skills": [{"id": "1700000000000", "name": "Go", "proficiency": 70}],
            "projects": [],
            "workExperience": [],
            "theme": {
                "primary": "#6366f1", "secondary": "#8b5cf6", "accent": "#ec4899",
                "background": "#f8fafc", "text": "#0f172a", "cardBackground": "#ffffff"
            }
        }"##;
        let data: PortfolioData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.personal_info.name, "Jane");
        assert_eq!(data.skills[0].id, "1700000000000");
        assert_eq!(data.theme.card_background, "#ffffff");
    }
}
