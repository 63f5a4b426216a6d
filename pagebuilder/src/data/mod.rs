//! Builder state and its persistence.
//!
//! - [`workspace`] - The authoritative page configuration and section list
//! - [`format`] - JSON/TOML encoding chosen by file extension

/// Authoritative builder state.
pub mod workspace;

/// File formats.
pub mod format;

pub use format::FileFormat;
pub use workspace::Workspace;
