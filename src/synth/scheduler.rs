//! Two-slot note queue.
//!
//! The engine tracks at most two notes: the one sounding now and one waiting
//! behind it. Incoming notes always keep their start time; if that start lands
//! inside the sounding note's release, the sounding note is shortened so it
//! finishes exactly when the new one begins.

use super::note::Note;

/// Role of a slot in the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Current = 0,
    Next = 1,
}

/// What a trigger did to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Nothing was sounding; the note became current. The caller must zero
    /// the filter and oscillator before rendering it.
    Started,
    /// The note is waiting behind the current one.
    Queued {
        /// The current note's release was pulled earlier.
        truncated: bool,
        /// A previously waiting note was discarded.
        replaced: bool,
    },
}

/// Result of a current note reaching its stop time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// The waiting note became current. The filter must be zeroed.
    Promoted,
    /// Nothing was waiting; the engine is now silent.
    Silenced,
    /// There was no current note.
    Idle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoteSlots {
    slots: [Option<Note>; 2],
}

impl NoteSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&Note> {
        self.slots[slot as usize].as_ref()
    }

    pub fn current(&self) -> Option<&Note> {
        self.get(Slot::Current)
    }

    pub fn next(&self) -> Option<&Note> {
        self.get(Slot::Next)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Place a note, truncating the current note's release if the two would
    /// overlap.
    pub fn trigger(&mut self, note: Note, volume_release: f64) -> TriggerOutcome {
        let [current, next] = &mut self.slots;

        let Some(current) = current.as_mut() else {
            *current = Some(note);
            return TriggerOutcome::Started;
        };

        let replaced = next.replace(note).is_some();

        let truncated = note.start_time < current.stop_time;
        if truncated {
            current.release_time = note.start_time - volume_release;
            current.stop_time = note.start_time;
        }

        TriggerOutcome::Queued {
            truncated,
            replaced,
        }
    }

    /// Retire the current note and move the waiting note (if any) forward.
    pub fn promote(&mut self) -> Promotion {
        if self.slots[Slot::Current as usize].is_none() {
            return Promotion::Idle;
        }

        match self.slots[Slot::Next as usize].take() {
            Some(next) => {
                self.slots[Slot::Current as usize] = Some(next);
                Promotion::Promoted
            }
            None => {
                self.slots[Slot::Current as usize] = None;
                Promotion::Silenced
            }
        }
    }

    pub fn clear(&mut self) {
        self.slots = [None, None];
    }
}
