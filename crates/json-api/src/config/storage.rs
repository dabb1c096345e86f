//! Storage Config

use std::path::PathBuf;

use clap::Args;

use storefront_app::storage::StoragePaths;

/// Where each collection is persisted.
///
/// Every collection defaults to `<data_dir>/<collection>.json` and can be
/// pointed elsewhere individually.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding the collection files
    #[arg(long, env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Products collection file
    #[arg(long, env = "PRODUCTS_DATA_PATH")]
    pub products_data_path: Option<PathBuf>,

    /// Carts collection file
    #[arg(long, env = "CARTS_DATA_PATH")]
    pub carts_data_path: Option<PathBuf>,

    /// Orders collection file
    #[arg(long, env = "ORDERS_DATA_PATH")]
    pub orders_data_path: Option<PathBuf>,

    /// Users collection file
    #[arg(long, env = "USERS_DATA_PATH")]
    pub users_data_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the path of every collection file.
    #[must_use]
    pub fn paths(&self) -> StoragePaths {
        let defaults = StoragePaths::in_dir(&self.data_dir);

        StoragePaths {
            products: self.products_data_path.clone().unwrap_or(defaults.products),
            carts: self.carts_data_path.clone().unwrap_or(defaults.carts),
            orders: self.orders_data_path.clone().unwrap_or(defaults.orders),
            users: self.users_data_path.clone().unwrap_or(defaults.users),
        }
    }
}
