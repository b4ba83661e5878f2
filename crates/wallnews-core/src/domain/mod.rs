//! Domain models for the trust feed.
//!
//! Canonical definitions for the upstream card contract:
//! - `SuperNewsCard`: one synthesized multi-source story
//! - `Source` / `CitationsMap`: publications and marker lookups
//! - `RootsCheck`: verification descriptor
//! - `Compliance`: editorial quality signal

pub mod card;
pub mod compliance;
pub mod error;
pub(crate) mod lenient;
pub mod roots_check;

pub use card::{cards_from_value, CitationsMap, Perspectives, Source, SuperNewsCard, When, Who, Why};
pub use compliance::{Compliance, ComplianceDetails};
pub use error::{CoreError, Result};
pub use roots_check::{BadgeTone, RootsCheck, RootsCheckInput, RootsStatus, FALLBACK_ICON};
