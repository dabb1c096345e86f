use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use storefront_app::{context::AppContext, storage::StoragePaths};

mod product;
mod user;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Product(product::ProductCommand),
    User(user::UserCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Product(command) => product::run(command).await,
            Commands::User(command) => user::run(command).await,
        }
    }
}

/// Location of the collection files, shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct DataDirArgs {
    /// Directory holding products.json, carts.json, orders.json and users.json
    #[arg(long, env = "DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,
}

impl DataDirArgs {
    pub(crate) fn context(&self) -> AppContext {
        AppContext::from_paths(&StoragePaths::in_dir(&self.data_dir))
    }
}
