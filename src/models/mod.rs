pub mod skill;
pub mod narrative;
pub mod learner;

pub use skill::*;
pub use narrative::*;
pub use learner::*;
