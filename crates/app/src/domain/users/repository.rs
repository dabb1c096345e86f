//! Users Repository
//!
//! Order history edits rewrite the whole users collection.

use crate::{
    domain::{
        orders::models::{Order, OrderUuid},
        users::models::{User, UserUuid},
    },
    store::{Collection, StoreError},
};

#[derive(Debug, Clone)]
pub(crate) struct UsersRepository {
    users: Collection<User>,
}

impl UsersRepository {
    #[must_use]
    pub(crate) fn new(users: Collection<User>) -> Self {
        Self { users }
    }

    pub(crate) async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.users.read_all().await
    }

    pub(crate) async fn find_user(&self, user: UserUuid) -> Result<Option<User>, StoreError> {
        self.users.find(|u| u.uuid == user).await
    }

    pub(crate) async fn create_user(&self, user: User) -> Result<User, StoreError> {
        self.users.append(user.clone()).await?;

        Ok(user)
    }

    /// Returns `false` when the user does not exist.
    pub(crate) async fn add_order(&self, user: UserUuid, order: Order) -> Result<bool, StoreError> {
        let added = self
            .users
            .mutate(move |users| {
                let existing = users.iter_mut().find(|u| u.uuid == user)?;

                existing.orders.push(order);

                Some(())
            })
            .await?;

        Ok(added.is_some())
    }

    /// Returns `false` when neither the user nor the order in their history
    /// exists.
    pub(crate) async fn remove_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<bool, StoreError> {
        let removed = self
            .users
            .mutate(|users| {
                let existing = users.iter_mut().find(|u| u.uuid == user)?;
                let before = existing.orders.len();

                existing.orders.retain(|o| o.uuid != order);

                (existing.orders.len() != before).then_some(())
            })
            .await?;

        Ok(removed.is_some())
    }

    /// Empty when the user does not exist.
    pub(crate) async fn list_orders(&self, user: UserUuid) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .find_user(user)
            .await?
            .map(|u| u.orders)
            .unwrap_or_default())
    }

    pub(crate) async fn delete_user(&self, user: UserUuid) -> Result<bool, StoreError> {
        let removed = self
            .users
            .mutate(|users| {
                let before = users.len();

                users.retain(|u| u.uuid != user);

                (users.len() != before).then_some(())
            })
            .await?;

        Ok(removed.is_some())
    }
}
