mod identity;
mod stats;
mod tweet;
mod vocab;

pub use identity::*;
pub use stats::*;
pub use tweet::*;
pub use vocab::*;
