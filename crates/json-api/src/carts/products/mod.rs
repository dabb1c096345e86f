//! Cart Products

mod handlers;

pub(crate) use handlers::*;
