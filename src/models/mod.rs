pub mod level;
pub mod counts;

pub use level::*;
pub use counts::*;
