//! Pages
//!
//! One component per route.

mod home;
mod certifications;
mod projects;
mod project_detail;
mod extras;
mod contact;
mod not_found;

pub use home::HomePage;
pub use certifications::CertificationsPage;
pub use projects::ProjectsPage;
pub use project_detail::ProjectDetailPage;
pub use extras::ExtrasPage;
pub use contact::ContactPage;
pub use not_found::NotFoundPage;
