//! User Data

use crate::domain::users::models::UserUuid;

/// New User Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Generated when omitted.
    pub uuid: Option<UserUuid>,
    pub name: String,
}
