pub mod country;
pub mod history;
pub mod snapshot;

pub use country::*;
pub use history::*;
pub use snapshot::*;
