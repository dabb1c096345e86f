use clap::Args;

use crate::cli::DataDirArgs;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    storage: DataDirArgs,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let products = args
        .storage
        .context()
        .products
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in products {
        println!("product_uuid: {}", product.uuid);
        println!("product_name: {}", product.name);
        println!("product_price: {}", product.price);
        println!();
    }

    Ok(())
}
