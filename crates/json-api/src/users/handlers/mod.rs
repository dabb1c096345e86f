//! User Handlers

pub(crate) mod add_cart_product;
pub(crate) mod checkout;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod empty_cart;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod orders;
pub(crate) mod remove_cart_product;
pub(crate) mod remove_order;
