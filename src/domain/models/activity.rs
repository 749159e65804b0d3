use serde::{Deserialize, Serialize};

use crate::domain::models::account::AccountId;

/// Coins credited to every new account.
pub const SIGNUP_BONUS_COINS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    InitialSignup,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::InitialSignup => "initial_signup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityData {
    pub coins: u32,
}

/// One row of the activity log, keyed by the account it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: AccountId,
    pub activity_type: ActivityType,
    pub activity_data: ActivityData,
}

impl ActivityRecord {
    pub fn initial_signup(id: AccountId) -> Self {
        Self {
            id,
            activity_type: ActivityType::InitialSignup,
            activity_data: ActivityData {
                coins: SIGNUP_BONUS_COINS,
            },
        }
    }
}
