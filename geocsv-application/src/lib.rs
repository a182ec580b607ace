mod error;

pub mod load_addresses;
pub mod pipeline;
pub mod reopen_addresses;
pub mod session;

#[cfg(test)]
mod tests;

pub use self::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::{error::Error, Result};
    pub use geocsv_core::{entities::*, gateways::*, usecases};
}
