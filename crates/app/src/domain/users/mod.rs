//! Users
//!
//! Users own a cart and an order history. [`UsersService`] is where the
//! workflows that span several collections live: checkout, order removal and
//! cascading user deletion.

pub mod data;
pub mod errors;
pub mod models;
pub(crate) mod repository;
pub mod service;

pub use errors::UsersServiceError;
pub use service::*;
