//! Storefront application domain and persistence modules.

pub mod context;
pub mod domain;
pub mod storage;
pub mod store;

#[cfg(test)]
mod test;

mod uuids;
