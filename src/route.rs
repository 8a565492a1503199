//! Page routes and their URL paths.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Features,
    About,
    Contact,
    GetStarted,
    Explore,
    ArStudio,
    StudentDashboard,
    TeacherDashboard,
    SaveTheForest,
    NotFound(String),
}

/// Routes shown in the top navigation bar, in order.
pub const NAV_ROUTES: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::Features, "Features"),
    (Route::About, "About"),
    (Route::Contact, "Contact"),
];

impl Route {
    /// Map a location path (optionally with query/fragment) to a route.
    pub fn from_path(path: &str) -> Self {
        let bare = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = bare.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/features" => Route::Features,
            "/about" => Route::About,
            "/contact" => Route::Contact,
            "/get-started" => Route::GetStarted,
            "/explore" => Route::Explore,
            "/ar-studio" => Route::ArStudio,
            "/student-dashboard" => Route::StudentDashboard,
            "/teacher-dashboard" => Route::TeacherDashboard,
            "/save-the-forest" => Route::SaveTheForest,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Features => "/features",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::GetStarted => "/get-started",
            Route::Explore => "/explore",
            Route::ArStudio => "/ar-studio",
            Route::StudentDashboard => "/student-dashboard",
            Route::TeacherDashboard => "/teacher-dashboard",
            Route::SaveTheForest => "/save-the-forest",
            Route::NotFound(p) => p,
        }
    }

    /// Read the route from the current browser location.
    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".into());
        Self::from_path(&path)
    }

    /// Push a history entry for this route.
    pub fn push(&self) {
        let Some(win) = web_sys::window() else { return };
        match win.history() {
            Ok(history) => {
                if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(self.path())) {
                    log::warn!("pushState to {} failed: {e:?}", self.path());
                }
            }
            Err(e) => log::warn!("no history: {e:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_round_trip() {
        for route in [
            Route::Home,
            Route::Features,
            Route::About,
            Route::Contact,
            Route::GetStarted,
            Route::Explore,
            Route::ArStudio,
            Route::StudentDashboard,
            Route::TeacherDashboard,
            Route::SaveTheForest,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn trailing_slash_query_and_fragment_are_ignored() {
        assert_eq!(Route::from_path("/about/"), Route::About);
        assert_eq!(Route::from_path("/contact?ref=nav"), Route::Contact);
        assert_eq!(Route::from_path("/features#top"), Route::Features);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn unknown_paths_keep_the_original_path() {
        assert_eq!(Route::from_path("/nowhere"), Route::NotFound("/nowhere".into()));
        assert_eq!(Route::from_path("/about/team"), Route::NotFound("/about/team".into()));
    }
}
