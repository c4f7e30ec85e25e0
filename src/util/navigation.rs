//! Page paths and the navigation seam used by the session store.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Routed pages of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Register,
    Dashboard,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// Moves the browser to another page.
///
/// Any `Fn(&str)` is a navigator, so the router's navigate function can be
/// wrapped in a closure and tests can record the requested paths.
pub trait Navigator {
    fn navigate(&self, page: Page);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, page: Page) {
        self(page.path());
    }
}
