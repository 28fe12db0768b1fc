//! # HTML export
//!
//! [`render_html`] is a pure mapping from a [`PortfolioData`] snapshot to a
//! self-contained HTML5 document: embedded CSS driven by the six theme colors,
//! a header with contact details and social links, then skills, projects and
//! work experience sections. No scripts, no external assets beyond the
//! user-supplied image URLs. Two calls on the same snapshot produce
//! byte-identical output.
//!
//! All user-supplied text and URLs are HTML-escaped before interpolation.

use crate::models::{PersonalInfo, PortfolioData, Project, Skill, ThemeColors, WorkExperience};

/// Render the full portfolio document.
pub fn render_html(data: &PortfolioData) -> String {
    let name = escape(&data.personal_info.name);
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{name} - Portfolio</title>\n\
         <style>\n{style}</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         {header}\
         {skills}\
         {projects}\
         {experience}\
         <footer>&copy; {year} {name}. All rights reserved.</footer>\n\
         </div>\n\
         </body>\n\
         </html>\n",
        name = name,
        style = stylesheet(&data.theme),
        header = render_header(&data.personal_info),
        skills = render_skills(&data.skills),
        projects = render_projects(&data.projects),
        experience = render_experience(&data.work_experience),
        year = footer_year(),
    )
}

/// Derive the download filename from the owner's name:
/// lower-cased, whitespace runs replaced with hyphens, `-portfolio.html`.
pub fn export_filename(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("{slug}-portfolio.html")
}

fn render_header(info: &PersonalInfo) -> String {
    let mut out = String::from("<header>\n<div class=\"profile\">\n");

    if !info.profile_image.is_empty() {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"profile-image\">\n",
            escape(&info.profile_image),
            escape(&info.name),
        ));
    }

    out.push_str("<div class=\"profile-info\">\n");
    out.push_str(&format!("<h1 class=\"name\">{}</h1>\n", escape(&info.name)));
    out.push_str(&format!("<div class=\"title\">{}</div>\n", escape(&info.title)));

    out.push_str("<div class=\"contact-info\">\n");
    for (icon, value) in [
        (PHONE_ICON, &info.phone),
        (MAIL_ICON, &info.email),
        (PIN_ICON, &info.location),
    ] {
        out.push_str(&format!(
            "<div class=\"contact-item\">{icon}<span>{}</span></div>\n",
            escape(value),
        ));
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"social-links\">\n");
    for (icon, url) in [
        (LINKEDIN_ICON, &info.social_links.linkedin),
        (GITHUB_ICON, &info.social_links.github),
        (TWITTER_ICON, &info.social_links.twitter),
    ] {
        if !url.is_empty() {
            out.push_str(&format!(
                "<a href=\"{}\" class=\"social-link\" target=\"_blank\">{icon}</a>\n",
                escape(url),
            ));
        }
    }
    out.push_str("</div>\n</div>\n</div>\n");

    out.push_str(&format!("<div class=\"bio\">{}</div>\n", escape(&info.bio)));
    out.push_str("</header>\n");
    out
}

fn render_skills(skills: &[Skill]) -> String {
    let mut out = String::from(
        "<div class=\"section\">\n<h2 class=\"section-title\">Skills</h2>\n\
         <div class=\"card\">\n<div class=\"skills-grid\">\n",
    );
    for skill in skills {
        out.push_str(&format!(
            "<div class=\"skill-item\">\n\
             <div class=\"skill-name\"><span>{name}</span>\
             <span class=\"skill-percentage\">{pct}%</span></div>\n\
             <div class=\"progress-bar\">\
             <div class=\"progress\" style=\"width: {pct}%\"></div></div>\n\
             </div>\n",
            name = escape(&skill.name),
            pct = skill.proficiency,
        ));
    }
    out.push_str("</div>\n</div>\n</div>\n");
    out
}

fn render_projects(projects: &[Project]) -> String {
    let mut out = String::from(
        "<div class=\"section\">\n<h2 class=\"section-title\">Projects</h2>\n\
         <div class=\"projects-grid\">\n",
    );
    for project in projects {
        out.push_str("<div class=\"project-card\">\n");
        if !project.image.is_empty() {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" class=\"project-image\">\n",
                escape(&project.image),
                escape(&project.title),
            ));
        }
        out.push_str("<div class=\"project-content\">\n");
        out.push_str(&format!(
            "<h3 class=\"project-title\">{}</h3>\n",
            escape(&project.title)
        ));
        out.push_str(&format!(
            "<p class=\"project-description\">{}</p>\n",
            escape(&project.description)
        ));
        if !project.technologies.is_empty() {
            out.push_str("<div class=\"technologies\">\n");
            for tech in &project.technologies {
                out.push_str(&format!(
                    "<span class=\"tech-badge\">{}</span>\n",
                    escape(tech)
                ));
            }
            out.push_str("</div>\n");
        }
        if !project.link.is_empty() {
            out.push_str(&format!(
                "<a href=\"{}\" class=\"project-link\" target=\"_blank\">View Project {EXTERNAL_ICON}</a>\n",
                escape(&project.link),
            ));
        }
        out.push_str("</div>\n</div>\n");
    }
    out.push_str("</div>\n</div>\n");
    out
}

fn render_experience(entries: &[WorkExperience]) -> String {
    let mut out = String::from(
        "<div class=\"section\">\n<h2 class=\"section-title\">Work Experience</h2>\n",
    );
    for exp in entries {
        out.push_str("<div class=\"card experience-card\">\n");
        out.push_str(&format!(
            "<h3 class=\"company-name\">{}</h3>\n",
            escape(&exp.company)
        ));
        out.push_str(&format!(
            "<div class=\"position\">{}</div>\n",
            escape(&exp.position)
        ));
        out.push_str(&format!(
            "<div class=\"date-range\">{} - {}</div>\n",
            escape(&exp.start_date),
            escape(&exp.end_date),
        ));
        out.push_str(&format!("<p>{}</p>\n", escape(&exp.description)));
        if !exp.achievements.is_empty() {
            out.push_str(
                "<div class=\"achievements\">\n\
                 <div class=\"achievements-header\">Key Achievements:</div>\n",
            );
            for achievement in &exp.achievements {
                out.push_str(&format!(
                    "<div class=\"achievement\">{}</div>\n",
                    escape(achievement)
                ));
            }
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    out
}

fn stylesheet(theme: &ThemeColors) -> String {
    format!(
        ":root {{\n\
         --primary: {};\n\
         --secondary: {};\n\
         --accent: {};\n\
         --background: {};\n\
         --text: {};\n\
         --card-bg: {};\n\
         }}\n{BASE_CSS}",
        escape(&theme.primary),
        escape(&theme.secondary),
        escape(&theme.accent),
        escape(&theme.background),
        escape(&theme.text),
        escape(&theme.card_background),
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(target_arch = "wasm32")]
fn footer_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
fn footer_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

const BASE_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
  background-color: var(--background);
  color: var(--text);
  line-height: 1.6;
}
.container { max-width: 1100px; margin: 0 auto; padding: 20px; }
header {
  background-color: var(--card-bg);
  padding: 40px 20px;
  margin-bottom: 30px;
  border-radius: 12px;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
}
.profile { display: flex; align-items: center; flex-wrap: wrap; gap: 30px; }
.profile-image { width: 120px; height: 120px; border-radius: 60px; object-fit: cover; }
.profile-info { flex: 1; }
.name { font-size: 28px; font-weight: 700; margin-bottom: 5px; }
.title { font-size: 18px; font-weight: 500; color: var(--secondary); margin-bottom: 10px; }
.contact-info { display: flex; flex-wrap: wrap; gap: 15px; margin-bottom: 15px; }
.contact-item { display: flex; align-items: center; gap: 8px; }
.social-links { display: flex; gap: 15px; margin-top: 15px; }
.social-link {
  width: 40px;
  height: 40px;
  border-radius: 20px;
  background-color: rgba(0, 0, 0, 0.05);
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--primary);
}
.bio { margin-top: 20px; max-width: 800px; }
.section { margin-bottom: 40px; }
.section-title { font-size: 24px; font-weight: 700; margin-bottom: 20px; color: var(--text); }
.card {
  background-color: var(--card-bg);
  padding: 25px;
  border-radius: 12px;
  margin-bottom: 20px;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
}
.skills-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 20px; }
.skill-item { margin-bottom: 15px; }
.skill-name { font-weight: 600; margin-bottom: 5px; display: flex; justify-content: space-between; }
.skill-percentage { color: var(--text); opacity: 0.8; }
.progress-bar { height: 8px; background-color: rgba(0, 0, 0, 0.1); border-radius: 4px; overflow: hidden; }
.progress { height: 100%; background-color: var(--primary); border-radius: 4px; }
.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 25px; }
.project-card {
  background-color: var(--card-bg);
  border-radius: 12px;
  overflow: hidden;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
}
.project-image { width: 100%; height: 180px; object-fit: cover; }
.project-content { padding: 20px; }
.project-title { font-size: 18px; font-weight: 600; margin-bottom: 10px; }
.project-description { margin-bottom: 15px; }
.technologies { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 15px; }
.tech-badge {
  padding: 5px 12px;
  background-color: rgba(99, 102, 241, 0.1);
  color: var(--primary);
  border-radius: 16px;
  font-size: 14px;
  font-weight: 500;
}
.project-link {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  color: var(--primary);
  font-weight: 500;
  text-decoration: none;
  margin-top: 10px;
}
.experience-card { margin-bottom: 25px; }
.company-name { font-size: 20px; font-weight: 600; margin-bottom: 5px; }
.position { font-size: 16px; font-weight: 500; color: var(--secondary); margin-bottom: 5px; }
.date-range { font-size: 14px; opacity: 0.8; margin-bottom: 15px; }
.achievements { margin-top: 15px; }
.achievements-header { font-weight: 600; margin-bottom: 8px; }
.achievement { padding-left: 15px; position: relative; margin-bottom: 5px; }
.achievement:before { content: \"\\2022\"; position: absolute; left: 0; }
footer { text-align: center; margin-top: 50px; padding: 20px; opacity: 0.7; font-size: 14px; }
@media (max-width: 768px) {
  .profile { flex-direction: column; align-items: flex-start; }
  .projects-grid { grid-template-columns: 1fr; }
  .skills-grid { grid-template-columns: 1fr; }
}
";

const PHONE_ICON: &str = "<svg width=\"18\" height=\"18\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"><path d=\"M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z\"></path></svg>";

const MAIL_ICON: &str = "<svg width=\"18\" height=\"18\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"><path d=\"M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z\"></path><polyline points=\"22,6 12,13 2,6\"></polyline></svg>";

const PIN_ICON: &str = "<svg width=\"18\" height=\"18\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"><path d=\"M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z\"></path><circle cx=\"12\" cy=\"10\" r=\"3\"></circle></svg>";

const LINKEDIN_ICON: &str = "<svg width=\"20\" height=\"20\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"><path d=\"M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z\"></path><rect x=\"2\" y=\"9\" width=\"4\" height=\"12\"></rect><circle cx=\"4\" cy=\"4\" r=\"2\"></circle></svg>";

const GITHUB_ICON: &str = "<svg width=\"20\" height=\"20\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"><path d=\"M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22\"></path></svg>";

const TWITTER_ICON: &str = "<svg width=\"20\" height=\"20\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"><path d=\"M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z\"></path></svg>";

const EXTERNAL_ICON: &str = "<svg width=\"16\" height=\"16\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"><path d=\"M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6\"></path><polyline points=\"15 3 21 3 21 9\"></polyline><line x1=\"10\" y1=\"14\" x2=\"21\" y2=\"3\"></line></svg>";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PortfolioData, Project, SocialLinks};

    #[test]
    fn render_is_deterministic_for_an_unchanged_snapshot() {
        let data = PortfolioData::default();
        assert_eq!(render_html(&data), render_html(&data));
    }

    #[test]
    fn theme_colors_drive_the_stylesheet() {
        let mut data = PortfolioData::default();
        data.theme.primary = "#10b981".into();
        data.theme.card_background = "#1e293b".into();
        let html = render_html(&data);
        assert!(html.contains("--primary: #10b981;"));
        assert!(html.contains("--card-bg: #1e293b;"));
    }

    #[test]
    fn project_technologies_and_link_are_rendered() {
        let mut data = PortfolioData::default();
        data.projects = vec![Project {
            id: "1".into(),
            title: "Oxide".into(),
            description: "Systems tooling".into(),
            image: String::new(),
            link: "https://example.com/oxide".into(),
            technologies: vec!["Go".into(), "Rust".into()],
        }];
        let html = render_html(&data);
        assert!(html.contains("<span class=\"tech-badge\">Go</span>"));
        assert!(html.contains("<span class=\"tech-badge\">Rust</span>"));
        assert!(html.contains("<a href=\"https://example.com/oxide\" class=\"project-link\""));
        // No image supplied, so no project <img>.
        assert!(!html.contains("class=\"project-image\""));
    }

    #[test]
    fn skill_bars_are_sized_by_proficiency() {
        let data = PortfolioData::default();
        let html = render_html(&data);
        assert!(html.contains("<span class=\"skill-percentage\">90%</span>"));
        assert!(html.contains("style=\"width: 90%\""));
    }

    #[test]
    fn empty_social_links_are_omitted() {
        let mut data = PortfolioData::default();
        data.personal_info.social_links = SocialLinks {
            linkedin: String::new(),
            github: "https://github.com/janedoe".into(),
            twitter: String::new(),
        };
        let html = render_html(&data);
        assert_eq!(html.matches("class=\"social-link\"").count(), 1);
        assert!(html.contains("href=\"https://github.com/janedoe\""));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut data = PortfolioData::default();
        data.personal_info.name = "Jane <script>alert(1)</script>".into();
        data.personal_info.bio = "Loves \"quotes\" & ampersands".into();
        let html = render_html(&data);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("Jane &lt;script&gt;"));
        assert!(html.contains("Loves &quot;quotes&quot; &amp; ampersands"));
    }

    #[test]
    fn filename_is_derived_from_the_name() {
        assert_eq!(export_filename("John Doe"), "john-doe-portfolio.html");
        assert_eq!(export_filename("Ada   Lovelace"), "ada-lovelace-portfolio.html");
        assert_eq!(export_filename("Prince"), "prince-portfolio.html");
    }
}
