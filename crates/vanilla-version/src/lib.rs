//! Strict version parsing and comparison
//!
//! Parses `MAJOR.MINOR.PATCH[-RELEASE][+METADATA]` strings where every
//! numeric component has one or two digits, and compares versions through a
//! single encoded number (`major * 10000 + minor * 100 + patch`). Release and
//! metadata are carried verbatim and never take part in ordering.
//!
//! ```
//! use vanilla_version::Version;
//!
//! let version = Version::parse("1.0.0-beta+dev").unwrap();
//! assert_eq!(version.release(), Some("beta"));
//! assert!(version.compare("0.9.0", ">").unwrap());
//! ```

mod comparator;
mod error;
mod operator;
mod version;

pub use comparator::{Comparator, VersionOperand};
pub use error::VersionError;
pub use operator::Operator;
pub use version::{encode, Version};
