mod profile;
pub use profile::ProfileView;

mod skills;
pub use skills::SkillsView;

mod projects;
pub use projects::ProjectsView;

mod experience;
pub use experience::ExperienceView;

mod theme;
pub use theme::ThemeView;

mod preview;
pub use preview::PreviewView;
