//! # pure-path
//!
//! Cross-platform path values with a strict split between pure
//! manipulation and operations that consult the host environment.
//!
//! ## Features
//!
//! - **Pure paths**: parse, join, decompose and render without touching disk
//! - **Flavours**: POSIX and Windows rules, chosen once and carried by the value
//! - **Concrete paths**: lexical `resolve`, `~` expansion and filesystem probes
//! - **Injected environment**: working and home directory come from a trait
//!
//! ## Examples
//!
//! ### Building and decomposing paths
//!
//! ```rust
//! use pure_path::{Flavour, PurePath};
//!
//! let p = PurePath::with_flavour(Flavour::Posix, "/home/user") / "docs" / "a.txt";
//! assert_eq!(p.to_string(), "/home/user/docs/a.txt");
//! assert_eq!(p.parent().to_string(), "/home/user/docs");
//! assert_eq!(p.with_suffix(".md").unwrap().name(), "a.md");
//!
//! // An absolute part replaces everything before it
//! assert_eq!(p.join("/etc").to_string(), "/etc");
//! ```
//!
//! ### Windows rules on any host
//!
//! ```rust
//! use pure_path::{Flavour, PurePath};
//!
//! let w = PurePath::with_flavour(Flavour::Windows, "C:/Program Files\\App");
//! assert_eq!(w.to_string(), "C:\\Program Files\\App");
//! assert_eq!(w.anchor(), "C:\\");
//! assert!(w.is_absolute());
//! ```
//!
//! ### Resolving against an environment
//!
//! ```rust
//! use pure_path::{ConcretePath, FixedEnvironment, Flavour, PurePath};
//!
//! let env = FixedEnvironment::new("/srv/app");
//! let p = ConcretePath::with_env(PurePath::with_flavour(Flavour::Posix, "logs/../data"), env);
//! assert_eq!(p.resolve().unwrap().to_string(), "/srv/app/data");
//! ```

mod concrete;
mod env;
mod error;
mod flavour;
mod pure;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use concrete::ConcretePath;
pub use env::{Environment, FixedEnvironment, SystemEnvironment};
pub use error::{PathError, Result};
pub use flavour::{Flavour, FLAVOUR_ENV_VAR};
pub use pure::{Parents, PurePath};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
