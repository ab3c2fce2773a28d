//! Configuration module for farm-tracker
//!
//! - XDG-compliant path resolution
//! - User settings persistence
//! - The saved API session

pub mod paths;
pub mod session_file;
pub mod settings;

pub use paths::FarmPaths;
pub use session_file::StoredSession;
pub use settings::Settings;
