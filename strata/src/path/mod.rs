//! Resolution of configured filesystem paths.
//!
//! Relative paths are anchored at the project root and `.`/`..` components
//! are resolved lexically. Symlinks are not followed; only existence is
//! checked.
//!
//! # Examples
//!
//! ```
//! use strata::path::PathResolver;
//! use std::path::PathBuf;
//!
//! let resolver = PathResolver::new("/srv/app");
//! assert_eq!(resolver.resolve("./views/../public"), PathBuf::from("/srv/app/public"));
//! assert_eq!(resolver.resolve("/var/mail"), PathBuf::from("/var/mail"));
//! ```

pub mod normalize;
pub mod resolver;

pub use resolver::PathResolver;
