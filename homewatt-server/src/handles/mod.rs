mod consumption_handle;
mod docs_handle;
mod house_handle;

pub use consumption_handle::*;
pub use docs_handle::*;
pub use house_handle::*;
