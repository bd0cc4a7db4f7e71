//! Recording Engine
//!
//! Wraps [`ImmediateEngine`] and logs every call, so tests can assert on
//! the animation wiring (which control pulsed, which icon rotated in)
//! while the document still reaches its end state.

use std::sync::Mutex;

use crate::dom::{Document, NodeId};
use crate::motion::{CompletionFn, ImmediateEngine, MotionEngine, Timeline, Tween, TweenProps};

/// What kind of engine call produced a record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Set,
    To,
    FromTo,
    From,
    Timeline,
}

/// One recorded engine call
#[derive(Clone, Debug)]
pub struct TweenRecord {
    pub kind: RecordKind,
    pub targets: Vec<NodeId>,
    pub tween: Option<Tween>,
    pub from: Option<TweenProps>,
}

/// Immediate engine with a call log
#[derive(Debug, Default)]
pub struct RecordingEngine {
    inner: ImmediateEngine,
    records: Mutex<Vec<TweenRecord>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, record: TweenRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }

    /// Snapshot of every recorded call
    pub fn records(&self) -> Vec<TweenRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Recorded calls that touched a target
    pub fn records_for(&self, target: NodeId) -> Vec<TweenRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.targets.contains(&target))
            .collect()
    }

    /// Drop all records
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl MotionEngine for RecordingEngine {
    fn set(&self, doc: &mut Document, targets: &[NodeId], props: &TweenProps) {
        self.record(TweenRecord {
            kind: RecordKind::Set,
            targets: targets.to_vec(),
            tween: None,
            from: Some(*props),
        });
        self.inner.set(doc, targets, props);
    }

    fn animate_to(
        &self,
        doc: &mut Document,
        targets: &[NodeId],
        tween: Tween,
        on_complete: Option<CompletionFn>,
    ) {
        self.record(TweenRecord {
            kind: RecordKind::To,
            targets: targets.to_vec(),
            tween: Some(tween.clone()),
            from: None,
        });
        // Run the completion against this engine, not the inner one, so
        // chained tweens are recorded too.
        if !tween.settles_at_start() {
            self.inner.set(doc, targets, &tween.props);
        }
        if let Some(callback) = on_complete {
            callback(doc, self);
        }
    }

    fn animate_from_to(
        &self,
        doc: &mut Document,
        targets: &[NodeId],
        from: &TweenProps,
        tween: Tween,
    ) {
        self.record(TweenRecord {
            kind: RecordKind::FromTo,
            targets: targets.to_vec(),
            tween: Some(tween.clone()),
            from: Some(*from),
        });
        self.inner.animate_from_to(doc, targets, from, tween);
    }

    fn animate_from(&self, doc: &mut Document, targets: &[NodeId], tween: Tween) {
        self.record(TweenRecord {
            kind: RecordKind::From,
            targets: targets.to_vec(),
            tween: Some(tween.clone()),
            from: None,
        });
        self.inner.animate_from(doc, targets, tween);
    }

    fn play_timeline(&self, doc: &mut Document, timeline: Timeline) {
        self.record(TweenRecord {
            kind: RecordKind::Timeline,
            targets: timeline
                .entries()
                .iter()
                .flat_map(|e| e.targets.iter().copied())
                .collect(),
            tween: None,
            from: None,
        });
        self.inner.play_timeline(doc, timeline);
    }
}
