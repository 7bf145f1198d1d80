mod experience;
mod footer;
mod hero;
mod portfolio;
mod projects;
mod skills;
mod theme_toggle;

pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use portfolio::Portfolio;
pub use projects::Projects;
pub use skills::Skills;
pub use theme_toggle::ThemeToggle;
