pub mod room;

pub use room::{fallback_room, Quad, RoomFace};
