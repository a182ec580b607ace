mod check_schema;
mod error;
mod geocode_address;
mod map_result;
mod select_input;


pub use self::{
    check_schema::*, error::Error, geocode_address::*, map_result::*, select_input::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::GeoCodingGateway};
}
