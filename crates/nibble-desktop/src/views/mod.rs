//! Application views

mod browse;
mod create;

pub use browse::Browse;
pub use create::Create;
