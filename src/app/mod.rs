//! Application-Layer: Strecken-Board und Export.

pub mod export;
pub mod track_board;

pub use export::{board_to_json, write_board_json};
pub use track_board::{RenewSummary, TrackBoard, TrackSlot};
