//! Hash Routing
//!
//! Maps `location.hash` to a page and back.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when a project id is put into a hash path
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Certifications,
    Projects,
    /// Project detail, keyed by project id
    Project(String),
    Extras,
    Contact,
    NotFound,
}

impl Route {
    /// Parse a `location.hash` value such as `#/projects/nextcloud-pi`
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.trim_start_matches('/').trim_end_matches('/');

        let segments: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };

        match segments.as_slice() {
            [] => Route::Home,
            ["certifications"] => Route::Certifications,
            ["projects"] => Route::Projects,
            ["projects", id] if !id.is_empty() => {
                Route::Project(percent_decode_str(id).decode_utf8_lossy().into_owned())
            }
            ["extras"] => Route::Extras,
            ["contact"] => Route::Contact,
            _ => Route::NotFound,
        }
    }

    /// Canonical `href` for this route
    pub fn href(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Certifications => "#/certifications".to_string(),
            Route::Projects => "#/projects".to_string(),
            Route::Project(id) => {
                format!("#/projects/{}", utf8_percent_encode(id, SEGMENT_ENCODE_SET))
            }
            Route::Extras => "#/extras".to_string(),
            Route::Contact => "#/contact".to_string(),
            Route::NotFound => "#/404".to_string(),
        }
    }

    /// Navbar entry this route highlights
    pub fn nav_section(&self) -> Option<Route> {
        match self {
            Route::Project(_) => Some(Route::Projects),
            Route::NotFound => None,
            other => Some(other.clone()),
        }
    }
}

/// Route for a new hash, or `None` when it names the page already shown
pub fn route_change(current: &Route, hash: &str) -> Option<Route> {
    let next = Route::from_hash(hash);
    (next != *current).then_some(next)
}

/// Navbar entries in display order
pub const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::Certifications, "Certifications"),
    (Route::Projects, "Projects"),
    (Route::Extras, "Extras"),
    (Route::Contact, "Contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_variants() {
        for hash in ["", "#", "#/", "/", "#//"] {
            assert_eq!(Route::from_hash(hash), Route::Home, "hash {hash:?}");
        }
    }

    #[test]
    fn test_static_pages() {
        assert_eq!(Route::from_hash("#/certifications"), Route::Certifications);
        assert_eq!(Route::from_hash("#/projects"), Route::Projects);
        assert_eq!(Route::from_hash("#/projects/"), Route::Projects);
        assert_eq!(Route::from_hash("#extras"), Route::Extras);
        assert_eq!(Route::from_hash("#/contact"), Route::Contact);
    }

    #[test]
    fn test_project_detail() {
        assert_eq!(
            Route::from_hash("#/projects/nextcloud-pi"),
            Route::Project("nextcloud-pi".to_string())
        );
        assert_eq!(
            Route::from_hash("#/projects/home%20lab"),
            Route::Project("home lab".to_string())
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_hash("#/blog"), Route::NotFound);
        assert_eq!(Route::from_hash("#/projects/a/b"), Route::NotFound);
        assert_eq!(Route::from_hash("#/Projects"), Route::NotFound);
    }

    #[test]
    fn test_href_round_trips_through_parser() {
        let routes = [
            Route::Home,
            Route::Certifications,
            Route::Projects,
            Route::Project("home lab/2".to_string()),
            Route::Extras,
            Route::Contact,
        ];
        for route in routes {
            assert_eq!(Route::from_hash(&route.href()), route);
        }
        assert_eq!(Route::Project("a b".to_string()).href(), "#/projects/a%20b");
    }

    #[test]
    fn test_equivalent_hash_is_not_a_change() {
        assert_eq!(route_change(&Route::Projects, "#/projects/"), None);
        assert_eq!(route_change(&Route::Home, "#"), None);
        assert_eq!(
            route_change(&Route::Projects, "#/projects/nextcloud-pi"),
            Some(Route::Project("nextcloud-pi".to_string()))
        );
        assert_eq!(route_change(&Route::Contact, "#/"), Some(Route::Home));
    }

    #[test]
    fn test_detail_highlights_projects_nav() {
        assert_eq!(Route::Project("x".to_string()).nav_section(), Some(Route::Projects));
        assert_eq!(Route::Contact.nav_section(), Some(Route::Contact));
        assert_eq!(Route::NotFound.nav_section(), None);
    }
}
