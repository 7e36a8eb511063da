//! Client Routes
//!
//! The two paths the shell knows about. Anything else is unhandled.

use std::fmt;

use crate::models::RepositoryId;

/// Path prefix of the detail page
pub const REPOSITORY_PREFIX: &str = "/repository/";

/// A page the shell can mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/repository/{id}`
    Repository(RepositoryId),
}

impl Route {
    /// Match a path against the route table
    pub fn parse(path: &str) -> Option<Route> {
        if path == "/" {
            return Some(Route::List);
        }

        let id = path.strip_prefix(REPOSITORY_PREFIX)?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Route::Repository(RepositoryId::from(id)))
    }

    /// Path to navigate to
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Repository(id) => format!("{}{}", REPOSITORY_PREFIX, id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
