pub mod foundation;
pub mod organisms;

pub use foundation::BaseProps;

pub use organisms::*;
