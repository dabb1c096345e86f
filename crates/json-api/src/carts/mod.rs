//! Carts

pub(crate) mod errors;
mod handlers;
pub(crate) mod models;
pub(crate) mod products;

pub(crate) use handlers::*;
