//! Timeline - Sequenced Tween Configuration
//!
//! Orders a set of tweens relative to one another, mirroring the
//! entrance sequence design (each step overlapping the previous by a
//! fixed fraction of a second).

use crate::dom::NodeId;
use crate::motion::tween::Tween;

/// Where an entry starts relative to the sequence so far
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Position {
    /// After the previous entry finishes
    #[default]
    After,
    /// Overlapping the previous entry's tail by this many seconds
    Overlap(f32),
    /// At an absolute offset from the timeline start
    At(f32),
}

/// One sequenced step
#[derive(Clone, Debug)]
pub struct TimelineEntry {
    pub targets: Vec<NodeId>,
    pub tween: Tween,
    pub position: Position,
}

/// A sequenced set of tweens
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    /// Seconds before the first entry
    pub delay: f32,
    /// Extra plays after the first (-1 = forever)
    pub repeat: i32,
    /// Seconds between plays
    pub repeat_delay: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    pub fn with_repeat(mut self, count: i32, repeat_delay: f32) -> Self {
        self.repeat = count;
        self.repeat_delay = repeat_delay;
        self
    }

    /// Append a step
    pub fn to(mut self, targets: Vec<NodeId>, tween: Tween, position: Position) -> Self {
        self.entries.push(TimelineEntry {
            targets,
            tween,
            position,
        });
        self
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::tween::TweenProps;

    #[test]
    fn test_entries_keep_insertion_order() {
        let tl = Timeline::new()
            .with_delay(0.3)
            .to(vec![], Tween::to(TweenProps::new().opacity(1.0)), Position::After)
            .to(
                vec![],
                Tween::to(TweenProps::new().y(0.0)),
                Position::Overlap(0.4),
            );
        assert_eq!(tl.entries().len(), 2);
        assert_eq!(tl.entries()[1].position, Position::Overlap(0.4));
    }
}
