mod consumption_service;
mod house_import_service;
mod house_loader;

pub use consumption_service::*;
pub use house_import_service::*;
pub use house_loader::*;
