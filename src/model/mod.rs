mod badge;
mod badge_class;

pub use badge::*;
pub use badge_class::*;
