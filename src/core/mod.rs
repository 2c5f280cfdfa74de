pub mod color;
pub mod constants;
pub mod cursor;
pub mod field;
pub mod portrait;
pub mod session;
pub mod spectrum;
pub mod timecode;

pub use color::*;
pub use constants::*;
pub use field::{FieldParams, ParticleField};
pub use session::{SessionAdapter, SessionConfig, SessionError, SessionEvent, VoiceSession};
pub use spectrum::{select, BarLayout, Selection};
