pub mod error;
pub mod event;
pub mod history;

pub use error::{NetbarError, Result};
pub use event::Message;
pub use history::{History, Sample, MAX_HISTORY_LENGTH};
