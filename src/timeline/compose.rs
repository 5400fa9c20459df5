use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::scene::model::RenderableItem;
use serde::Serialize;

/// A scene placed on the timeline.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry<'a> {
    /// Index of the item in the composed input list.
    pub index: usize,
    /// The scene itself.
    pub item: &'a RenderableItem,
    /// First frame of the scene.
    pub start_frame: u64,
}

impl TimelineEntry<'_> {
    /// Duration in frames (always > 0 for composed entries).
    pub fn duration_frames(&self) -> u64 {
        self.item.duration().max(0) as u64
    }

    /// Half-open frame span `[start, start + duration)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(self.start_frame),
            end: FrameIndex(self.start_frame.saturating_add(self.duration_frames())),
        }
    }
}

/// Start offsets for a sequence of scenes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline<'a> {
    /// Entries with positive duration, in input order.
    pub entries: Vec<TimelineEntry<'a>>,
    /// Sum of all positive durations, in frames.
    pub total_duration: u64,
}

impl Timeline<'_> {
    /// Entry visible at `frame`, if any.
    pub fn entry_at(&self, frame: FrameIndex) -> Option<&TimelineEntry<'_>> {
        let after = self.entries.partition_point(|e| e.start_frame <= frame.0);
        let entry = self.entries.get(after.checked_sub(1)?)?;
        entry.range().contains(frame).then_some(entry)
    }

    /// Total duration in seconds at `fps`.
    pub fn duration_secs(&self, fps: Fps) -> f64 {
        fps.frames_to_secs(self.total_duration)
    }
}

/// Assign each positive-duration item a start frame from the running total.
///
/// Items with `duration <= 0` are skipped and do not shift later items. Stateless: equal input
/// always produces an equal timeline.
#[tracing::instrument(skip_all, fields(items = items.len()))]
pub fn compose(items: &[RenderableItem]) -> Timeline<'_> {
    let (entries, total_duration) = items.iter().enumerate().fold(
        (Vec::with_capacity(items.len()), 0u64),
        |(mut entries, running), (index, item)| {
            let duration = item.duration();
            if duration <= 0 {
                tracing::debug!(index, duration, kind = %item.kind(), "dropping non-positive duration item");
                return (entries, running);
            }
            entries.push(TimelineEntry {
                index,
                item,
                start_frame: running,
            });
            (entries, running.saturating_add(duration as u64))
        },
    );

    Timeline {
        entries,
        total_duration,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/compose.rs"]
mod tests;
