//! Effect - Deferred Work Requested by Controllers
//!
//! Controllers stay synchronous; anything that suspends (the form POST),
//! schedules (the status auto-clear) or feeds back into dispatch (a
//! programmatic scroll) is returned as an effect for the runtime to
//! execute.

use std::time::Duration;

use crate::dom::NodeId;
use crate::domain::ContactMessage;

/// Work the runtime performs on a controller's behalf
#[derive(Clone, Debug)]
pub enum Effect {
    /// POST the message and resolve the form's submission
    SubmitContact { form: NodeId, message: ContactMessage },

    /// Clear the status element after a fixed delay, regardless of any
    /// newer submission in between
    ScheduleStatusClear { status: NodeId, delay: Duration },

    /// Programmatic scroll (smooth anchor navigation)
    ScrollTo { y: f32 },
}
