mod consumption;
mod house;
mod schedule;

pub use consumption::*;
pub use house::*;
pub use schedule::*;

pub type Id = i32;
