//! Pure path values
//!
//! [`PurePath`] is an immutable value made of a flavour, an optional drive,
//! a root flag and an ordered list of segments. Every operation here works
//! on that value alone: nothing in this module reads the filesystem or the
//! process environment.

use crate::error::{PathError, Result};
use crate::flavour::{Flavour, INTERNAL_SEP};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Div;
use std::str::FromStr;

const CUR_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// An immutable, platform-aware path
///
/// Segments are stored without separators, without empty entries and
/// without `.`. The current directory is the path with no anchor and no
/// segments; it renders as `.`.
///
/// # Examples
/// ```
/// use pure_path::{Flavour, PurePath};
///
/// let docs = PurePath::with_flavour(Flavour::Posix, "/home/user") / "docs" / "a.txt";
/// assert_eq!(docs.to_string(), "/home/user/docs/a.txt");
/// assert_eq!(docs.name(), "a.txt");
/// assert_eq!(docs.stem(), "a");
/// assert_eq!(docs.suffix(), ".txt");
/// ```
#[derive(Debug, Clone)]
pub struct PurePath {
    flavour: Flavour,
    drive: Option<String>,
    rooted: bool,
    segments: Vec<String>,
}

impl PurePath {
    /// Parse a path string using the native flavour
    pub fn new(path: &str) -> Self {
        Self::with_flavour(Flavour::native(), path)
    }

    /// Parse a path string using the given flavour
    ///
    /// Parsing never fails. Recognized separators split segments, the
    /// leading anchor is detected, and empty or `.` segments are dropped.
    /// `..` segments are kept as written.
    ///
    /// # Examples
    /// ```
    /// use pure_path::{Flavour, PurePath};
    ///
    /// let p = PurePath::with_flavour(Flavour::Posix, "a//b/./c/");
    /// assert_eq!(p.to_string(), "a/b/c");
    ///
    /// let w = PurePath::with_flavour(Flavour::Windows, "C:/Users\\me");
    /// assert_eq!(w.to_string(), "C:\\Users\\me");
    ///
    /// assert_eq!(PurePath::with_flavour(Flavour::Posix, "").to_string(), ".");
    /// ```
    pub fn with_flavour(flavour: Flavour, path: &str) -> Self {
        let internal = flavour.to_internal(path);
        let anchor = flavour.split_anchor(&internal);
        let segments = anchor
            .rest
            .split(INTERNAL_SEP)
            .filter(|s| !s.is_empty() && *s != CUR_DIR)
            .map(str::to_string)
            .collect();

        PurePath {
            flavour,
            drive: anchor.drive,
            rooted: anchor.rooted,
            segments,
        }
    }

    /// Build a path by joining each component in order
    ///
    /// # Examples
    /// ```
    /// use pure_path::{Flavour, PurePath};
    ///
    /// let p = PurePath::from_segments(Flavour::Posix, ["/usr", "local", "bin"]);
    /// assert_eq!(p.to_string(), "/usr/local/bin");
    /// ```
    pub fn from_segments<I, S>(flavour: Flavour, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::current_dir(flavour).join_all(segments)
    }

    /// The path denoting the current directory
    pub fn current_dir(flavour: Flavour) -> Self {
        PurePath {
            flavour,
            drive: None,
            rooted: false,
            segments: Vec::new(),
        }
    }

    pub fn flavour(&self) -> Flavour {
        self.flavour
    }

    /// Segments after the anchor, in path order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The drive as rendered, or an empty string
    pub fn drive(&self) -> String {
        self.drive
            .as_deref()
            .map(|d| self.flavour.to_rendered(d))
            .unwrap_or_default()
    }

    /// Whether the path has a root separator after its drive
    pub fn has_root(&self) -> bool {
        self.rooted
    }

    /// Drive and root together, as rendered
    ///
    /// # Examples
    /// ```
    /// use pure_path::{Flavour, PurePath};
    ///
    /// assert_eq!(PurePath::with_flavour(Flavour::Posix, "/etc").anchor(), "/");
    /// assert_eq!(PurePath::with_flavour(Flavour::Windows, "c:/x").anchor(), "c:\\");
    /// assert_eq!(PurePath::with_flavour(Flavour::Windows, "c:x").anchor(), "c:");
    /// assert_eq!(PurePath::with_flavour(Flavour::Posix, "x").anchor(), "");
    /// ```
    pub fn anchor(&self) -> String {
        let mut anchor = self.drive();
        if self.rooted {
            anchor.push(self.flavour.separator());
        }
        anchor
    }

    /// Whether the path is absolute under its flavour's rules
    pub fn is_absolute(&self) -> bool {
        self.flavour.is_absolute(self.drive.as_deref(), self.rooted)
    }

    /// Anchor followed by segments; the current directory yields `["."]`
    pub fn parts(&self) -> Vec<String> {
        let anchor = self.anchor();
        let mut parts = Vec::with_capacity(self.segments.len() + 1);
        if !anchor.is_empty() {
            parts.push(anchor);
        }
        parts.extend(self.segments.iter().cloned());
        if parts.is_empty() {
            parts.push(CUR_DIR.to_string());
        }
        parts
    }

    /// The final segment, or an empty string if there is none
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// The name without its final extension
    ///
    /// A leading dot does not start an extension, so `.bashrc` is its own
    /// stem.
    pub fn stem(&self) -> &str {
        split_extension(self.name()).0
    }

    /// The final extension of the name including the dot, or an empty string
    pub fn suffix(&self) -> &str {
        split_extension(self.name()).1
    }

    /// Every extension of the name, in order
    ///
    /// # Examples
    /// ```
    /// use pure_path::{Flavour, PurePath};
    ///
    /// let p = PurePath::with_flavour(Flavour::Posix, "dist/lib.tar.gz");
    /// assert_eq!(p.suffixes(), vec![".tar", ".gz"]);
    /// ```
    pub fn suffixes(&self) -> Vec<String> {
        let name = self.name();
        if name.ends_with('.') {
            return Vec::new();
        }
        name.trim_start_matches('.')
            .split('.')
            .skip(1)
            .map(|ext| format!(".{ext}"))
            .collect()
    }

    /// The path with its last segment removed
    ///
    /// The parent of an anchor, or of the current directory, is itself.
    pub fn parent(&self) -> PurePath {
        let mut parent = self.clone();
        parent.segments.pop();
        parent
    }

    /// Successive parents of this path, nearest first
    ///
    /// # Examples
    /// ```
    /// use pure_path::{Flavour, PurePath};
    ///
    /// let p = PurePath::with_flavour(Flavour::Posix, "/a/b/c");
    /// let parents: Vec<String> = p.parents().map(|p| p.to_string()).collect();
    /// assert_eq!(parents, vec!["/a/b", "/a", "/"]);
    /// ```
    pub fn parents(&self) -> Parents {
        Parents { next: self.clone() }
    }

    /// Append a path string, parsed with this path's flavour
    pub fn join(&self, part: impl AsRef<str>) -> PurePath {
        self.join_path(&PurePath::with_flavour(self.flavour, part.as_ref()))
    }

    /// Append each part in order
    pub fn join_all<I, S>(&self, parts: I) -> PurePath
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parts
            .into_iter()
            .fold(self.clone(), |acc, part| acc.join(part))
    }

    /// Append another path
    ///
    /// An absolute `other` replaces the accumulated result. Under Windows
    /// rules a different drive also replaces it, and a rooted `other`
    /// without a drive keeps this path's drive.
    ///
    /// # Examples
    /// ```
    /// use pure_path::{Flavour, PurePath};
    ///
    /// let base = PurePath::with_flavour(Flavour::Posix, "/srv/www");
    /// let etc = PurePath::with_flavour(Flavour::Posix, "/etc/hosts");
    /// assert_eq!(base.join_path(&etc), etc);
    ///
    /// let win = PurePath::with_flavour(Flavour::Windows, "C:\\a");
    /// assert_eq!(win.join("\\b").to_string(), "C:\\b");
    /// ```
    pub fn join_path(&self, other: &PurePath) -> PurePath {
        let other = if other.flavour == self.flavour {
            other.clone()
        } else {
            other.to_flavour(self.flavour)
        };

        if other.is_absolute() {
            return other;
        }

        if let Some(drive) = other.drive.as_deref() {
            if !self.same_drive(Some(drive)) {
                return other;
            }
        }

        if other.rooted {
            return PurePath {
                flavour: self.flavour,
                drive: self.drive.clone(),
                rooted: true,
                segments: other.segments,
            };
        }

        let mut joined = self.clone();
        joined.segments.extend(other.segments);
        joined
    }

    /// Replace the name
    ///
    /// # Errors
    /// Returns [`PathError::InvalidArgument`] if this path has no name, or
    /// if `name` is empty, `.`, contains a separator or carries an anchor.
    ///
    /// # Examples
    /// ```
    /// use pure_path::{Flavour, PurePath};
    ///
    /// let p = PurePath::with_flavour(Flavour::Posix, "/a/b/c.txt");
    /// assert_eq!(p.with_name("d.txt").unwrap().to_string(), "/a/b/d.txt");
    /// assert!(PurePath::with_flavour(Flavour::Posix, "/").with_name("x").is_err());
    /// ```
    pub fn with_name(&self, name: &str) -> Result<PurePath> {
        if self.name().is_empty() {
            return Err(PathError::invalid(format!(
                "{:?} has an empty name",
                self.to_string()
            )));
        }
        if name.is_empty() {
            return Err(PathError::invalid("new name must not be empty"));
        }
        if self.flavour.contains_separator(name) {
            return Err(PathError::invalid(format!(
                "new name {name:?} contains a path separator"
            )));
        }

        let parsed = PurePath::with_flavour(self.flavour, name);
        if parsed.drive.is_some() || parsed.rooted || parsed.segments.len() != 1 {
            return Err(PathError::invalid(format!("invalid name {name:?}")));
        }

        let mut renamed = self.clone();
        if let Some(last) = renamed.segments.last_mut() {
            *last = name.to_string();
        }
        Ok(renamed)
    }

    /// Replace the final extension, or remove it when `suffix` is empty
    ///
    /// # Errors
    /// Returns [`PathError::InvalidArgument`] if this path has no name, or
    /// if a non-empty `suffix` does not start with `.`, is just `.`, or
    /// contains a separator.
    pub fn with_suffix(&self, suffix: &str) -> Result<PurePath> {
        if self.flavour.contains_separator(suffix) {
            return Err(PathError::invalid(format!(
                "invalid suffix {suffix:?}: contains a path separator"
            )));
        }
        if !suffix.is_empty() && (!suffix.starts_with('.') || suffix == ".") {
            return Err(PathError::invalid(format!(
                "invalid suffix {suffix:?}: must be empty or start with '.'"
            )));
        }
        if self.name().is_empty() {
            return Err(PathError::invalid(format!(
                "{:?} has an empty name",
                self.to_string()
            )));
        }

        self.with_name(&format!("{}{}", self.stem(), suffix))
    }

    /// Replace the stem, keeping the final extension
    ///
    /// # Errors
    /// Returns [`PathError::InvalidArgument`] under the same rules as
    /// [`PurePath::with_name`], or if `stem` is empty while a suffix exists.
    pub fn with_stem(&self, stem: &str) -> Result<PurePath> {
        let suffix = self.suffix();
        if stem.is_empty() && !suffix.is_empty() {
            return Err(PathError::invalid(format!(
                "{:?} has a non-empty suffix, stem must not be empty",
                self.to_string()
            )));
        }
        self.with_name(&format!("{stem}{suffix}"))
    }

    /// Whether `base` is a leading part of this path
    pub fn is_relative_to(&self, base: &PurePath) -> bool {
        self.relative_to(base).is_ok()
    }

    /// The rest of this path after removing `base` from its front
    ///
    /// # Errors
    /// Returns [`PathError::NotRelative`] when anchors differ or `base`'s
    /// segments are not a prefix of this path's segments.
    ///
    /// # Examples
    /// ```
    /// use pure_path::{Flavour, PurePath};
    ///
    /// let p = PurePath::with_flavour(Flavour::Posix, "/a/b/c");
    /// let base = PurePath::with_flavour(Flavour::Posix, "/a");
    /// assert_eq!(p.relative_to(&base).unwrap().to_string(), "b/c");
    /// ```
    pub fn relative_to(&self, base: &PurePath) -> Result<PurePath> {
        let base = if base.flavour == self.flavour {
            base.clone()
        } else {
            base.to_flavour(self.flavour)
        };

        let prefixed = self.same_drive(base.drive.as_deref())
            && self.rooted == base.rooted
            && self.segments.starts_with(&base.segments);
        if !prefixed {
            return Err(PathError::NotRelative {
                path: self.to_string(),
                base: base.to_string(),
            });
        }

        Ok(PurePath {
            flavour: self.flavour,
            drive: None,
            rooted: false,
            segments: self.segments[base.segments.len()..].to_vec(),
        })
    }

    /// Fold `..` segments lexically
    ///
    /// `..` directly after the anchor is dropped. Leading `..` segments of
    /// an unrooted path are kept. Symlinks are not considered.
    ///
    /// # Examples
    /// ```
    /// use pure_path::{Flavour, PurePath};
    ///
    /// let p = PurePath::with_flavour(Flavour::Posix, "/a/b/../../../c");
    /// assert_eq!(p.normalize().to_string(), "/c");
    ///
    /// let r = PurePath::with_flavour(Flavour::Posix, "../a/../b");
    /// assert_eq!(r.normalize().to_string(), "../b");
    /// ```
    pub fn normalize(&self) -> PurePath {
        let mut segments: Vec<String> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            if segment != PARENT_DIR {
                segments.push(segment.clone());
                continue;
            }
            match segments.last() {
                Some(last) if last != PARENT_DIR => {
                    segments.pop();
                }
                _ if self.rooted => {}
                _ => segments.push(segment.clone()),
            }
        }

        PurePath {
            flavour: self.flavour,
            drive: self.drive.clone(),
            rooted: self.rooted,
            segments,
        }
    }

    /// Render with forward slashes regardless of flavour
    pub fn as_posix(&self) -> String {
        let mut out = self.drive.clone().unwrap_or_default();
        if self.rooted {
            out.push(INTERNAL_SEP);
        }
        out.push_str(&self.segments.join("/"));
        if out.is_empty() {
            out.push_str(CUR_DIR);
        }
        out
    }

    /// Re-parse this path under another flavour
    pub fn to_flavour(&self, flavour: Flavour) -> PurePath {
        PurePath::with_flavour(flavour, &self.as_posix())
    }

    fn same_drive(&self, other: Option<&str>) -> bool {
        match (self.drive.as_deref(), other, self.flavour) {
            (Some(a), Some(b), Flavour::Windows) => a.eq_ignore_ascii_case(b),
            (a, b, _) => a == b,
        }
    }
}

/// Split a name into stem and final extension
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 && i < name.len() - 1 => (&name[..i], &name[i..]),
        _ => (name, ""),
    }
}

/// Iterator returned by [`PurePath::parents`]
#[derive(Debug, Clone)]
pub struct Parents {
    next: PurePath,
}

impl Iterator for Parents {
    type Item = PurePath;

    fn next(&mut self) -> Option<PurePath> {
        if self.next.segments.is_empty() {
            return None;
        }
        self.next = self.next.parent();
        Some(self.next.clone())
    }
}

impl fmt::Display for PurePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.flavour.separator().to_string();
        let mut out = self.anchor();
        out.push_str(&self.segments.join(&sep));
        if out.is_empty() {
            out.push_str(CUR_DIR);
        }
        f.write_str(&out)
    }
}

impl PartialEq for PurePath {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for PurePath {}

impl Hash for PurePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl FromStr for PurePath {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(PurePath::new(s))
    }
}

impl From<&str> for PurePath {
    fn from(s: &str) -> Self {
        PurePath::new(s)
    }
}

impl From<String> for PurePath {
    fn from(s: String) -> Self {
        PurePath::new(&s)
    }
}

impl Div<&str> for &PurePath {
    type Output = PurePath;

    fn div(self, rhs: &str) -> PurePath {
        self.join(rhs)
    }
}

impl Div<&str> for PurePath {
    type Output = PurePath;

    fn div(self, rhs: &str) -> PurePath {
        self.join(rhs)
    }
}

impl Div<&PurePath> for &PurePath {
    type Output = PurePath;

    fn div(self, rhs: &PurePath) -> PurePath {
        self.join_path(rhs)
    }
}

impl Div<&PurePath> for PurePath {
    type Output = PurePath;

    fn div(self, rhs: &PurePath) -> PurePath {
        self.join_path(rhs)
    }
}
