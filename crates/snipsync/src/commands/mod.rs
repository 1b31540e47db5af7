mod common;
pub mod load;
pub mod restore;
pub mod save;

pub use common::CommandOptions;
pub use load::Load;
pub use restore::Restore;
pub use save::Save;
