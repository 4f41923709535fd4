pub mod keyboard;
pub mod scroll;
pub mod visibility;
