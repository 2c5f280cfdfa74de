pub mod pointer;
pub mod resize;

pub use pointer::{wire_field_cursor, wire_readout};
pub use resize::wire_field_resize;
