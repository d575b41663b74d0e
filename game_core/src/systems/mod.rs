pub mod fouls;
pub mod input;
pub mod judge;
pub mod pitch;
pub mod swing;

pub use fouls::*;
pub use input::*;
pub use judge::*;
pub use pitch::*;
pub use swing::*;
