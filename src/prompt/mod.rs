mod create_env;
mod select_env;

pub use create_env::*;
pub use select_env::*;
