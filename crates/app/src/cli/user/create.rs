use clap::Args;
use storefront_app::domain::users::data::NewUser;
use uuid::Uuid;

use crate::cli::DataDirArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    #[command(flatten)]
    storage: DataDirArgs,

    /// User display name
    #[arg(long)]
    name: String,

    /// Optional user UUID; generated when omitted
    #[arg(long)]
    user_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let ctx = args.storage.context();

    let user = ctx
        .users
        .create_user(NewUser {
            uuid: args.user_uuid.map(Into::into),
            name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    let cart = ctx
        .carts
        .get_cart_by_user(user.uuid)
        .await
        .map_err(|error| format!("failed to load cart: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("user_name: {}", user.name);
    println!(
        "cart_uuid: {}",
        cart.map_or_else(|| "none".to_string(), |cart| cart.uuid.to_string())
    );

    Ok(())
}
