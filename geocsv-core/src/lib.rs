pub mod gateways;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use geocsv_entities::{address::*, candidate::*, geo::*, layer::*, point::*};
}
