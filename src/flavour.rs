//! Platform path rules
//!
//! A [`Flavour`] describes which characters separate segments and how the
//! leading anchor (drive and root) of a path string is recognized. It is
//! chosen once, usually with [`Flavour::native`] or [`Flavour::from_env`],
//! and carried by every path value built from it.

use crate::error::{PathError, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`Flavour::from_env`]
pub const FLAVOUR_ENV_VAR: &str = "PURE_PATH_FLAVOUR";

/// Separator used for the canonical in-memory form of every flavour
pub(crate) const INTERNAL_SEP: char = '/';

/// Separator and anchor rules of a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavour {
    /// `/` separated, single root, no drives
    Posix,
    /// `\` separated (`/` also accepted), letter drives and UNC shares
    Windows,
}

/// Leading anchor split off a path string
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Anchor<'a> {
    pub drive: Option<String>,
    pub rooted: bool,
    pub rest: &'a str,
}

impl Flavour {
    /// The flavour of the platform this crate was compiled for
    ///
    /// # Examples
    /// ```
    /// use pure_path::Flavour;
    ///
    /// if cfg!(windows) {
    ///     assert_eq!(Flavour::native(), Flavour::Windows);
    /// } else {
    ///     assert_eq!(Flavour::native(), Flavour::Posix);
    /// }
    /// ```
    pub fn native() -> Self {
        if cfg!(windows) {
            Flavour::Windows
        } else {
            Flavour::Posix
        }
    }

    /// Select the flavour from `PURE_PATH_FLAVOUR`, falling back to [`Flavour::native`]
    ///
    /// # Errors
    /// Returns [`PathError::InvalidArgument`] if the variable is set to an
    /// unrecognized value.
    pub fn from_env() -> Result<Self> {
        match env::var(FLAVOUR_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => {
                let flavour = value.parse()?;
                log::trace!("path flavour {flavour} selected by {FLAVOUR_ENV_VAR}");
                Ok(flavour)
            }
            _ => {
                let flavour = Self::native();
                log::trace!("path flavour {flavour} selected by target platform");
                Ok(flavour)
            }
        }
    }

    /// The separator used when rendering
    pub fn separator(self) -> char {
        match self {
            Flavour::Posix => '/',
            Flavour::Windows => '\\',
        }
    }

    /// Whether `c` separates segments in this flavour
    pub fn is_separator(self, c: char) -> bool {
        match self {
            Flavour::Posix => c == '/',
            Flavour::Windows => c == '/' || c == '\\',
        }
    }

    /// Whether `s` contains any separator of this flavour
    pub fn contains_separator(self, s: &str) -> bool {
        s.chars().any(|c| self.is_separator(c))
    }

    /// Whether an anchor makes a path absolute
    pub(crate) fn is_absolute(self, drive: Option<&str>, rooted: bool) -> bool {
        match self {
            Flavour::Posix => rooted,
            Flavour::Windows => drive.is_some() && rooted,
        }
    }

    /// Convert recognized separators to the internal `/`
    pub(crate) fn to_internal(self, s: &str) -> String {
        match self {
            Flavour::Posix => s.to_string(),
            Flavour::Windows => s.replace('\\', "/"),
        }
    }

    /// Convert an internally separated string to this flavour's separator
    pub(crate) fn to_rendered(self, s: &str) -> String {
        match self {
            Flavour::Posix => s.to_string(),
            Flavour::Windows => s.replace(INTERNAL_SEP, "\\"),
        }
    }

    /// Split the anchor off a string already in internal form
    pub(crate) fn split_anchor(self, s: &str) -> Anchor<'_> {
        match self {
            Flavour::Posix => Anchor {
                drive: None,
                rooted: s.starts_with(INTERNAL_SEP),
                rest: s.trim_start_matches(INTERNAL_SEP),
            },
            Flavour::Windows => split_windows_anchor(s),
        }
    }
}

fn split_windows_anchor(s: &str) -> Anchor<'_> {
    // \\server\share\rest
    if let Some(after) = s.strip_prefix("//") {
        if !after.starts_with(INTERNAL_SEP) {
            let mut pieces = after.splitn(3, INTERNAL_SEP);
            let server = pieces.next().unwrap_or("");
            let share = pieces.next().unwrap_or("");
            if !server.is_empty() && !share.is_empty() {
                let rest = pieces.next().unwrap_or("");
                return Anchor {
                    drive: Some(format!("//{server}/{share}")),
                    rooted: true,
                    rest: rest.trim_start_matches(INTERNAL_SEP),
                };
            }
        }
    }

    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let rest = &s[2..];
        return Anchor {
            drive: Some(s[..2].to_string()),
            rooted: rest.starts_with(INTERNAL_SEP),
            rest: rest.trim_start_matches(INTERNAL_SEP),
        };
    }

    Anchor {
        drive: None,
        rooted: s.starts_with(INTERNAL_SEP),
        rest: s.trim_start_matches(INTERNAL_SEP),
    }
}

impl Default for Flavour {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavour::Posix => write!(f, "posix"),
            Flavour::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Flavour {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "posix" | "unix" => Ok(Flavour::Posix),
            "windows" | "nt" => Ok(Flavour::Windows),
            other => Err(PathError::invalid(format!(
                "unknown path flavour {other:?}, expected \"posix\" or \"windows\""
            ))),
        }
    }
}
