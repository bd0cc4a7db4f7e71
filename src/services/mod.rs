//! Services - IO Seams
//!
//! The runtime's contact points with the outside world: persisted
//! preference storage, the contact-form HTTP transport, and the tokio
//! runtime bridge for timers.

pub mod contact;
pub mod executor;
pub mod storage;

pub use contact::{ContactTransport, HttpTransport, SubmitOutcome, SubmitResponse};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
