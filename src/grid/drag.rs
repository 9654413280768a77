use std::ops::RangeInclusive;

/// In-progress drag across one room's row.
///
/// Indices point into the grid's current date sequence rather than at
/// dates, so the selection is meaningless once the sequence changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSelection {
    pub room_id: String,
    pub start_index: usize,
    pub end_index: usize,
}

impl DragSelection {
    pub fn new(room_id: impl Into<String>, index: usize) -> Self {
        Self {
            room_id: room_id.into(),
            start_index: index,
            end_index: index,
        }
    }

    /// `(lo, hi)` regardless of drag direction.
    pub fn bounds(&self) -> (usize, usize) {
        (
            self.start_index.min(self.end_index),
            self.start_index.max(self.end_index),
        )
    }

    pub fn normalized(&self) -> RangeInclusive<usize> {
        let (lo, hi) = self.bounds();
        lo..=hi
    }

    pub fn covers(&self, room_id: &str, index: usize) -> bool {
        self.room_id == room_id && self.normalized().contains(&index)
    }
}

/// A released drag: room plus normalized inclusive index range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommittedSelection {
    pub room_id: String,
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSelection),
}

/// Two-state drag machine: Idle and Dragging.
#[derive(Debug, Default)]
pub struct SelectionController {
    state: DragState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn active(&self) -> Option<&DragSelection> {
        match &self.state {
            DragState::Dragging(selection) => Some(selection),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active().is_some()
    }

    /// Pointer pressed on a cell. Starts a new drag anchored there.
    pub fn begin(&mut self, room_id: &str, index: usize) {
        log::debug!("Drag begin on {room_id} at {index}");
        self.state = DragState::Dragging(DragSelection::new(room_id, index));
    }

    /// Pointer moved over a cell while dragging.
    ///
    /// Only the end index moves; cells in other rooms are ignored.
    pub fn update(&mut self, room_id: &str, index: usize) {
        if let DragState::Dragging(selection) = &mut self.state {
            if selection.room_id == room_id {
                selection.end_index = index;
            }
        }
    }

    /// Pointer released. Returns the normalized range when a drag was active.
    pub fn finish(&mut self) -> Option<CommittedSelection> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(selection) => {
                let (lo, hi) = selection.bounds();
                log::debug!("Drag finished on {} at [{lo}, {hi}]", selection.room_id);
                Some(CommittedSelection {
                    room_id: selection.room_id,
                    start_index: lo,
                    end_index: hi,
                })
            }
            DragState::Idle => None,
        }
    }

    /// Pointer left the grid. Drops the drag without committing it.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            log::debug!("Drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Highlight predicate for a cell.
    pub fn is_selected(&self, room_id: &str, index: usize) -> bool {
        self.active()
            .is_some_and(|selection| selection.covers(room_id, index))
    }
}
