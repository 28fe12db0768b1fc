mod tab_layout;
pub use tab_layout::TabLayout;

pub use ui::views::ExperienceView as Experience;
pub use ui::views::PreviewView as Preview;
pub use ui::views::ProfileView as Profile;
pub use ui::views::ProjectsView as Projects;
pub use ui::views::SkillsView as Skills;
pub use ui::views::ThemeView as Theme;
