pub mod config;
pub mod dsp;
pub mod error;
pub mod io;
pub mod synth; // Note scheduling and the tuba engine

pub use config::{OutputMode, TubaConfig};
pub use error::{InvalidNoteError, TubaError};
#[cfg(feature = "rtrb")]
pub use synth::{SharedTuba, TubaHandle};
pub use synth::{Tuba, TubaMessage};
