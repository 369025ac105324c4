// Purpose: note lifecycle management and the engine that renders it
// This layer sits above the dsp primitives and owns all timing

pub mod clock;
#[cfg(feature = "rtrb")]
pub mod handle;
pub mod message;
pub mod note;
pub mod scheduler;
pub mod tuba;

pub use clock::{ClockReader, DeviceClock};
#[cfg(feature = "rtrb")]
pub use handle::{SharedTuba, TubaHandle};
pub use message::{MessageReceiver, TubaMessage};
pub use note::Note;
pub use scheduler::{NoteSlots, Promotion, Slot, TriggerOutcome};
pub use tuba::Tuba;
