//! Encodius Site Runtime Library
//!
//! Headless implementation of the Encodius marketing site's client-side
//! behavior: preference resolution and persistence, localization of
//! bound elements, navigation, contact form submission, and the page's
//! animation wiring over an opaque motion engine.

pub mod app;
pub mod constants;
pub mod dom;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod motion;
pub mod services;
pub mod state;
