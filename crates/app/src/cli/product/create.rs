use clap::Args;
use storefront_app::domain::products::data::NewProduct;
use uuid::Uuid;

use crate::cli::DataDirArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[command(flatten)]
    storage: DataDirArgs,

    /// Product display name
    #[arg(long)]
    name: String,

    /// Unit price
    #[arg(long)]
    price: f64,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    product_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let ctx = args.storage.context();

    let product = ctx
        .products
        .create_product(NewProduct {
            uuid: args.product_uuid.map(Into::into),
            name: args.name,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_name: {}", product.name);
    println!("product_price: {}", product.price);

    Ok(())
}
