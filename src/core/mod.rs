pub mod accordion;
pub mod config;
pub mod constants;
pub mod counter;
pub mod decor;
pub mod filter;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod splash;
pub mod visibility;

pub use accordion::*;
pub use config::*;
pub use counter::*;
pub use decor::*;
pub use filter::*;
pub use particles::*;
pub use reveal::*;
pub use scroll::*;
pub use splash::*;
pub use visibility::*;
