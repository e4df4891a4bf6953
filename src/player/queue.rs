use crate::types::TrackDescriptor;

/// Ordered play queue plus a cursor over it.
///
/// Two states: empty (no tracks, cursor unset) and positioned (non-empty,
/// cursor always a valid index). [`PlayerQueue::load`] is the only way to
/// move between them; every other transition either stays positioned or is
/// a silent no-op while empty.
#[derive(Debug, Default)]
pub struct PlayerQueue {
    tracks: Vec<TrackDescriptor>,
    cursor: Option<usize>,
}

impl PlayerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the queue wholesale. A non-empty load positions the cursor
    /// on the first track and returns it so the caller starts playback; an
    /// empty load leaves nothing to play.
    pub fn load(&mut self, tracks: Vec<TrackDescriptor>) -> Option<&TrackDescriptor> {
        self.tracks = tracks;
        self.cursor = if self.tracks.is_empty() { None } else { Some(0) };
        self.current()
    }

    /// Jumps to `index`. Out-of-range indices come from stale references,
    /// not user mistakes, so they are swallowed: queue and cursor stay
    /// unchanged and no track is returned.
    pub fn play_at(&mut self, index: usize) -> Option<&TrackDescriptor> {
        if index >= self.tracks.len() {
            return None;
        }
        self.cursor = Some(index);
        self.tracks.get(index)
    }

    /// Advances the cursor, wrapping from the last track back to the first.
    /// No-op on an empty queue.
    pub fn next(&mut self) -> Option<&TrackDescriptor> {
        if self.tracks.is_empty() {
            return None;
        }
        let index = self.cursor.map_or(0, |i| (i + 1) % self.tracks.len());
        self.cursor = Some(index);
        self.tracks.get(index)
    }

    /// Retreats the cursor, wrapping from the first track to the last.
    /// No-op on an empty queue.
    pub fn previous(&mut self) -> Option<&TrackDescriptor> {
        if self.tracks.is_empty() {
            return None;
        }
        let len = self.tracks.len();
        let index = self.cursor.map_or(0, |i| (i + len - 1) % len);
        self.cursor = Some(index);
        self.tracks.get(index)
    }

    pub fn current(&self) -> Option<&TrackDescriptor> {
        self.tracks.get(self.cursor?)
    }

    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[TrackDescriptor] {
        &self.tracks
    }
}
