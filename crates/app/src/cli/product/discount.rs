use clap::Args;
use uuid::Uuid;

use crate::cli::DataDirArgs;

#[derive(Debug, Args)]
pub(crate) struct DiscountArgs {
    #[command(flatten)]
    storage: DataDirArgs,

    /// Percentage taken off each listed product's price
    #[arg(long, allow_negative_numbers = true)]
    percent: f64,

    /// Product to discount; repeat for several products
    #[arg(long = "product", required = true)]
    products: Vec<Uuid>,
}

pub(crate) async fn run(args: DiscountArgs) -> Result<(), String> {
    let count = args.products.len();

    args.storage
        .context()
        .products
        .apply_discount(
            args.percent,
            args.products.into_iter().map(Into::into).collect(),
        )
        .await
        .map_err(|error| format!("failed to apply discount: {error}"))?;

    println!("applied {}% discount to {count} product(s)", args.percent);

    Ok(())
}
