//! UiEvent - Runtime Event Enum
//!
//! Everything the runtime dispatches to the feature controllers: user
//! gestures, the submit lifecycle, timer expiry and the system theme
//! signal.

use crate::dom::NodeId;
use crate::services::contact::SubmitOutcome;

/// Events fanned out to every mounted component
#[derive(Clone, Debug)]
pub enum UiEvent {
    /// Pointer click on an element
    Click { target: NodeId },

    /// Pointer entered an element
    PointerEnter { target: NodeId },

    /// Pointer left an element
    PointerLeave { target: NodeId },

    /// Pointer moved over an element (page coordinates)
    PointerMove { target: NodeId, x: f32, y: f32 },

    /// An input gained focus
    FocusGained { target: NodeId },

    /// An input lost focus
    FocusLost { target: NodeId },

    /// Viewport scrolled to this offset
    Scroll { y: f32 },

    /// A form's submit control was activated
    SubmitRequested { form: NodeId },

    /// An in-flight submission finished
    SubmitResolved { form: NodeId, outcome: SubmitOutcome },

    /// A status auto-clear timer elapsed
    StatusClearElapsed { status: NodeId },

    /// The system color-scheme preference changed
    SystemThemeChanged { dark: bool },
}

impl UiEvent {
    /// Create a click event
    pub fn click(target: NodeId) -> Self {
        Self::Click { target }
    }

    /// Create a scroll event
    pub fn scroll(y: f32) -> Self {
        Self::Scroll { y }
    }

    /// Create a pointer-move event
    pub fn pointer_move(target: NodeId, x: f32, y: f32) -> Self {
        Self::PointerMove { target, x, y }
    }
}
