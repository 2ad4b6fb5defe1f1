//! API Surface
//! Mission: Mocked operational endpoints for the support tool

pub mod awr;
pub mod lpn;
pub mod pick;
pub mod routes;
pub mod ticket;

pub use routes::{create_router, AppState};
