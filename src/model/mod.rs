//! Wire-format types shared by the HTTP layer.
//!
//! DTOs in this module define the JSON accepted and produced by the API. They
//! carry no behavior beyond serialization; conversion from domain models lives
//! in `server::model`.

pub mod api;
pub mod field;
pub mod project;
pub mod reference;
pub mod ticket;
pub mod user;
