mod activation;
mod error;
mod model;
mod store;
mod validate;

pub use activation::*;
pub use error::*;
pub use model::*;
pub use store::*;
pub use validate::*;
