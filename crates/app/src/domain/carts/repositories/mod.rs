//! Cart Repositories

mod carts;
mod products;

pub(crate) use carts::CartsRepository;
pub(crate) use products::CartProductsRepository;
