//! Version arithmetic.
//!
//! A change is classified on the [`Compatibility`] lattice
//! (`SAME < PATCH < MINOR < MAJOR`) and the classification drives the next
//! [`ApiVersion`]:
//!
//! ```
//! use api_compat::version::{ApiVersion, Compatibility};
//!
//! let old: ApiVersion = "2.4.1".parse().unwrap();
//! assert_eq!(Compatibility::Minor.increment(old).to_string(), "2.5.0");
//! ```

mod compatibility;
mod number;

pub use compatibility::Compatibility;
pub use number::ApiVersion;
