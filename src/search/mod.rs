pub mod config;
pub use config::*;

pub mod decision;
pub use decision::*;

pub mod engine;
pub use engine::*;

pub mod estimate;
pub use estimate::*;

pub mod limit;
pub use limit::*;

pub mod outcome;
pub use outcome::*;

pub mod rollout;
pub use rollout::*;

pub mod tally;
pub use tally::*;
