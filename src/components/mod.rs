//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod shell;
mod card;
mod skill_bar;
mod project_card;
mod markdown_view;
mod sort_toggle;

pub use shell::Layout;
pub use card::{Card, TagList, BtnLink, BtnExternal};
pub use skill_bar::SkillBar;
pub use project_card::ProjectCard;
pub use markdown_view::MarkdownView;
pub use sort_toggle::SortToggle;
