//! Domain - Plain Data Types

pub mod config;
pub mod contact;

pub use config::SiteConfig;
pub use contact::ContactMessage;
