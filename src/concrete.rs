//! Environment-aware paths
//!
//! [`ConcretePath`] wraps a [`PurePath`] together with an [`Environment`].
//! All pure operations are reachable through `Deref`; the methods here add
//! the ones that consult the working directory, the home directory or the
//! filesystem.

use crate::env::{Environment, SystemEnvironment};
use crate::error::{PathError, Result};
use crate::flavour::Flavour;
use crate::pure::PurePath;
use std::fmt;
use std::fs;
use std::ops::Deref;

const HOME_MARKER: char = '~';

/// A pure path plus the environment used to resolve it
///
/// # Examples
/// ```
/// use pure_path::{ConcretePath, FixedEnvironment, Flavour, PurePath};
///
/// let env = FixedEnvironment::new("/work/project");
/// let p = ConcretePath::with_env(PurePath::with_flavour(Flavour::Posix, "../lib/./a.rs"), env);
/// assert_eq!(p.resolve().unwrap().to_string(), "/work/lib/a.rs");
/// ```
#[derive(Debug, Clone)]
pub struct ConcretePath<E: Environment = SystemEnvironment> {
    pure: PurePath,
    env: E,
}

impl ConcretePath<SystemEnvironment> {
    /// Parse a path string with the native flavour against the running process
    pub fn new(path: &str) -> Self {
        ConcretePath::with_env(PurePath::new(path), SystemEnvironment)
    }
}

impl<E: Environment + Clone> ConcretePath<E> {
    pub fn with_env(pure: PurePath, env: E) -> Self {
        ConcretePath { pure, env }
    }

    /// The working directory reported by `env`
    ///
    /// # Errors
    /// Returns [`PathError::EnvironmentUnavailable`] if the lookup fails or
    /// the host has no working-directory concept.
    pub fn cwd(flavour: Flavour, env: E) -> Result<Self> {
        let cwd = env.current_dir()?.ok_or_else(|| {
            PathError::unavailable("current directory", "no working directory on this host")
        })?;
        Ok(ConcretePath::with_env(
            PurePath::with_flavour(flavour, &cwd),
            env,
        ))
    }

    /// The home directory reported by `env`
    ///
    /// # Errors
    /// Returns [`PathError::EnvironmentUnavailable`] if the lookup fails.
    pub fn home(flavour: Flavour, env: E) -> Result<Self> {
        let home = env.home_dir()?;
        Ok(ConcretePath::with_env(
            PurePath::with_flavour(flavour, &home),
            env,
        ))
    }

    pub fn as_pure(&self) -> &PurePath {
        &self.pure
    }

    pub fn into_pure(self) -> PurePath {
        self.pure
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Append a path string, keeping the environment
    pub fn join(&self, part: impl AsRef<str>) -> Self {
        self.rewrap(self.pure.join(part))
    }

    /// The parent path, keeping the environment
    pub fn parent(&self) -> Self {
        self.rewrap(self.pure.parent())
    }

    /// Make the path absolute and fold `.`/`..` lexically
    ///
    /// The target does not need to exist and symlinks are not followed. On
    /// a host without a working directory a relative path is returned
    /// unchanged.
    ///
    /// # Errors
    /// Returns [`PathError::EnvironmentUnavailable`] if the working
    /// directory lookup fails.
    pub fn resolve(&self) -> Result<Self> {
        let absolute = self.absolute()?;
        if !absolute.is_absolute() && !absolute.has_root() {
            return Ok(absolute);
        }
        Ok(self.rewrap(absolute.pure.normalize()))
    }

    /// Join a relative path onto the working directory without normalizing
    ///
    /// # Errors
    /// Returns [`PathError::EnvironmentUnavailable`] if the working
    /// directory lookup fails.
    pub fn absolute(&self) -> Result<Self> {
        if self.pure.is_absolute() {
            return Ok(self.clone());
        }

        match self.env.current_dir()? {
            Some(cwd) => {
                let base = PurePath::with_flavour(self.pure.flavour(), &cwd);
                Ok(self.rewrap(base.join_path(&self.pure)))
            }
            None => {
                log::debug!("no working directory, leaving {} relative", self.pure);
                Ok(self.clone())
            }
        }
    }

    /// Replace a leading `~` segment with the home directory
    ///
    /// # Errors
    /// Returns [`PathError::InvalidArgument`] for `~user` forms and
    /// [`PathError::EnvironmentUnavailable`] if the home lookup fails.
    ///
    /// # Examples
    /// ```
    /// use pure_path::{ConcretePath, FixedEnvironment, Flavour, PurePath};
    ///
    /// let env = FixedEnvironment::new("/").with_home("/home/me");
    /// let p = ConcretePath::with_env(PurePath::with_flavour(Flavour::Posix, "~/notes"), env);
    /// assert_eq!(p.expand_user().unwrap().to_string(), "/home/me/notes");
    /// ```
    pub fn expand_user(&self) -> Result<Self> {
        let leading = match self.pure.segments().first() {
            Some(first) if !self.pure.has_root() && self.pure.drive().is_empty() => first,
            _ => return Ok(self.clone()),
        };
        if !leading.starts_with(HOME_MARKER) {
            return Ok(self.clone());
        }
        if leading.len() > HOME_MARKER.len_utf8() {
            return Err(PathError::invalid(format!(
                "cannot expand {leading:?}: only ~ is supported, not ~user"
            )));
        }

        let home = PurePath::with_flavour(self.pure.flavour(), &self.env.home_dir()?);
        log::debug!("expanding ~ in {} to {}", self.pure, home);
        Ok(self.rewrap(home.join_all(&self.pure.segments()[1..])))
    }

    /// Whether the path names an existing filesystem entry
    pub fn exists(&self) -> bool {
        fs::metadata(self.to_string()).is_ok()
    }

    pub fn is_file(&self) -> bool {
        fs::metadata(self.to_string())
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    pub fn is_dir(&self) -> bool {
        fs::metadata(self.to_string())
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    /// Resolve through the operating system, following symlinks
    ///
    /// Unlike [`ConcretePath::resolve`] the target must exist.
    ///
    /// # Errors
    /// Returns [`PathError::Io`] if the path cannot be canonicalized.
    pub fn canonicalize(&self) -> Result<Self> {
        let absolute = self.absolute()?;
        let real = fs::canonicalize(absolute.to_string())?;
        Ok(self.rewrap(PurePath::with_flavour(
            self.pure.flavour(),
            &real.to_string_lossy(),
        )))
    }

    fn rewrap(&self, pure: PurePath) -> Self {
        ConcretePath {
            pure,
            env: self.env.clone(),
        }
    }
}

impl<E: Environment> Deref for ConcretePath<E> {
    type Target = PurePath;

    fn deref(&self) -> &PurePath {
        &self.pure
    }
}

impl<E: Environment> AsRef<PurePath> for ConcretePath<E> {
    fn as_ref(&self) -> &PurePath {
        &self.pure
    }
}

impl<E: Environment> fmt::Display for ConcretePath<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pure, f)
    }
}

impl<E: Environment> PartialEq for ConcretePath<E> {
    fn eq(&self, other: &Self) -> bool {
        self.pure == other.pure
    }
}

impl<E: Environment> PartialEq<PurePath> for ConcretePath<E> {
    fn eq(&self, other: &PurePath) -> bool {
        &self.pure == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::FixedEnvironment;
    use std::fs::File;
    use tempfile::TempDir;

    fn at(cwd: &str, path: &str) -> ConcretePath<FixedEnvironment> {
        ConcretePath::with_env(
            PurePath::with_flavour(Flavour::Posix, path),
            FixedEnvironment::new(cwd).with_home("/home/user"),
        )
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(at("/w", "a/../b").resolve().unwrap().to_string(), "/w/b");
        assert_eq!(at("/w/x", "../../..").resolve().unwrap().to_string(), "/");
        assert_eq!(at("/w", "").resolve().unwrap().to_string(), "/w");
    }

    #[test]
    fn test_resolve_absolute_ignores_cwd() {
        assert_eq!(at("/w", "/a/./b/../c").resolve().unwrap().to_string(), "/a/c");
    }

    #[test]
    fn test_resolve_does_not_require_existence() {
        let p = at("/definitely/not/here", "missing.txt");
        assert_eq!(
            p.resolve().unwrap().to_string(),
            "/definitely/not/here/missing.txt"
        );
    }

    #[test]
    fn test_resolve_without_cwd_is_unchanged() {
        let p = ConcretePath::with_env(
            PurePath::with_flavour(Flavour::Posix, "a/../b"),
            FixedEnvironment::without_cwd(),
        );
        assert_eq!(p.resolve().unwrap(), *p.as_pure());
    }

    #[test]
    fn test_resolve_windows_rooted_keeps_cwd_drive() {
        let p = ConcretePath::with_env(
            PurePath::with_flavour(Flavour::Windows, "\\tmp\\..\\x"),
            FixedEnvironment::new("D:\\work"),
        );
        assert_eq!(p.resolve().unwrap().to_string(), "D:\\x");
    }

    #[test]
    fn test_absolute_keeps_dots() {
        assert_eq!(at("/w", "a/../b").absolute().unwrap().to_string(), "/w/a/../b");
    }

    #[test]
    fn test_cwd_and_home() {
        let env = FixedEnvironment::new("/srv/app").with_home("/home/svc");
        let cwd = ConcretePath::cwd(Flavour::Posix, env.clone()).unwrap();
        assert_eq!(cwd.to_string(), "/srv/app");
        let home = ConcretePath::home(Flavour::Posix, env).unwrap();
        assert_eq!(home.join(".config").to_string(), "/home/svc/.config");
    }

    #[test]
    fn test_environment_unavailable_propagates() {
        let env = FixedEnvironment::without_cwd();
        assert!(matches!(
            ConcretePath::cwd(Flavour::Posix, env.clone()),
            Err(PathError::EnvironmentUnavailable { .. })
        ));
        assert!(matches!(
            ConcretePath::home(Flavour::Posix, env),
            Err(PathError::EnvironmentUnavailable { .. })
        ));
    }

    #[test]
    fn test_expand_user() {
        assert_eq!(at("/", "~").expand_user().unwrap().to_string(), "/home/user");
        assert_eq!(
            at("/", "~/a/b").expand_user().unwrap().to_string(),
            "/home/user/a/b"
        );
        assert_eq!(at("/", "a/~").expand_user().unwrap().to_string(), "a/~");
        assert_eq!(at("/", "/~").expand_user().unwrap().to_string(), "/~");
        assert!(matches!(
            at("/", "~bob/x").expand_user(),
            Err(PathError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_pure_operations_through_deref() {
        let p = at("/w", "docs/report.pdf");
        assert_eq!(p.name(), "report.pdf");
        assert_eq!(p.with_suffix(".bak").unwrap().to_string(), "docs/report.bak");
        assert_eq!(p.parent().to_string(), "docs");
        assert_eq!(p.parent().env(), p.env());
    }

    #[test]
    fn test_filesystem_probes() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("present.txt");
        File::create(&file_path).unwrap();

        let dir = ConcretePath::new(&temp_dir.path().to_string_lossy());
        assert!(dir.exists());
        assert!(dir.is_dir());
        assert!(!dir.is_file());

        let file = dir.join("present.txt");
        assert!(file.exists());
        assert!(file.is_file());

        let missing = dir.join("absent.txt");
        assert!(!missing.exists());
        assert!(!missing.is_file());
        assert!(!missing.is_dir());
    }

    #[test]
    fn test_canonicalize() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("sub")).unwrap();
        let canonical_root = temp_dir.path().canonicalize().unwrap();

        let dir = ConcretePath::new(&temp_dir.path().to_string_lossy());
        let via_dots = dir.join("sub").join("..");
        let resolved = via_dots.canonicalize().unwrap();
        assert_eq!(
            resolved,
            PurePath::new(&canonical_root.to_string_lossy())
        );

        assert!(matches!(
            dir.join("absent").canonicalize(),
            Err(PathError::Io { .. })
        ));
    }
}
