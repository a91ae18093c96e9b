//! Host environment queries
//!
//! Concrete paths never read the process state directly. They ask an
//! [`Environment`] for the current and home directory, so callers can swap
//! the system lookups for fixed values.

use crate::error::{PathError, Result};

/// Supplier of the working and home directory as opaque strings
pub trait Environment {
    /// The current working directory
    ///
    /// `Ok(None)` means the host has no working-directory concept.
    fn current_dir(&self) -> Result<Option<String>>;

    /// The current user's home directory
    fn home_dir(&self) -> Result<String>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn current_dir(&self) -> Result<Option<String>> {
        (**self).current_dir()
    }

    fn home_dir(&self) -> Result<String> {
        (**self).home_dir()
    }
}

/// Lookups against the running process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    #[cfg(not(target_family = "wasm"))]
    fn current_dir(&self) -> Result<Option<String>> {
        let cwd = std::env::current_dir()
            .map_err(|e| PathError::unavailable("current directory", e.to_string()))?;
        log::debug!("current directory is {}", cwd.display());
        Ok(Some(cwd.to_string_lossy().into_owned()))
    }

    #[cfg(target_family = "wasm")]
    fn current_dir(&self) -> Result<Option<String>> {
        log::debug!("no working directory on this target");
        Ok(None)
    }

    fn home_dir(&self) -> Result<String> {
        let home = home::home_dir()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| PathError::unavailable("home directory", "not set for this user"))?;
        log::debug!("home directory is {}", home.display());
        Ok(home.to_string_lossy().into_owned())
    }
}

/// Fixed answers, for deterministic resolution
///
/// # Examples
/// ```
/// use pure_path::{Environment, FixedEnvironment};
///
/// let env = FixedEnvironment::new("/work").with_home("/home/me");
/// assert_eq!(env.current_dir().unwrap().as_deref(), Some("/work"));
/// assert_eq!(env.home_dir().unwrap(), "/home/me");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedEnvironment {
    cwd: Option<String>,
    home: Option<String>,
}

impl FixedEnvironment {
    pub fn new(cwd: impl Into<String>) -> Self {
        FixedEnvironment {
            cwd: Some(cwd.into()),
            home: None,
        }
    }

    /// An environment without a working-directory concept
    pub fn without_cwd() -> Self {
        FixedEnvironment::default()
    }

    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }
}

impl Environment for FixedEnvironment {
    fn current_dir(&self) -> Result<Option<String>> {
        Ok(self.cwd.clone())
    }

    fn home_dir(&self) -> Result<String> {
        self.home
            .clone()
            .ok_or_else(|| PathError::unavailable("home directory", "no home configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_environment() {
        let env = FixedEnvironment::new("/w").with_home("/h");
        assert_eq!(env.current_dir().unwrap(), Some("/w".to_string()));
        assert_eq!(env.home_dir().unwrap(), "/h");
    }

    #[test]
    fn test_fixed_environment_without_values() {
        let env = FixedEnvironment::without_cwd();
        assert_eq!(env.current_dir().unwrap(), None);
        assert!(matches!(
            env.home_dir(),
            Err(PathError::EnvironmentUnavailable { .. })
        ));
    }

    #[test]
    fn test_environment_by_reference() {
        let env = FixedEnvironment::new("/w");
        let by_ref: &dyn Environment = &env;
        assert_eq!(by_ref.current_dir().unwrap().as_deref(), Some("/w"));
    }

    #[test]
    #[cfg(not(target_family = "wasm"))]
    fn test_system_current_dir_matches_std() {
        let expected = std::env::current_dir().unwrap();
        let cwd = SystemEnvironment.current_dir().unwrap().unwrap();
        assert_eq!(cwd, expected.to_string_lossy());
    }
}
