//! Domain entities produced by the normalization layer.
//!
//! Every field is always populated: absent or malformed upstream values have
//! already been replaced by their documented defaults, so consumers never
//! need to null-check.  Entities derive `Serialize` and `Deserialize` so they
//! can be handed to the presentation layer as JSON unchanged.

use serde::{Deserialize, Serialize};

use crate::types::{
    CallStatus, CallType, Gender, Language, TransactionStatus, TransactionType,
};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A platform member, either a caller or a paid host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub bio: String,
    pub phone: String,
    /// URL of the profile picture, empty when none is set.
    pub profile_image: String,
    pub age: i32,
    pub gender: Gender,
    pub language: Language,
    pub interests: Vec<String>,
    pub is_online: bool,
    /// Last activity, epoch milliseconds.  Zero when never seen.
    pub last_seen: i64,
    /// Average rating left by callers.
    pub rating: f64,
    pub total_ratings: i32,
    pub coin_balance: i32,
    /// Lifetime earnings in coins.
    pub total_earnings: i32,
    pub audio_call_enabled: bool,
    pub video_call_enabled: bool,
    pub is_verified: bool,
}

// ---------------------------------------------------------------------------
// Call
// ---------------------------------------------------------------------------

/// A single audio or video call from the call history.
///
/// `other_user_*` describes whichever participant is not the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,
    pub caller_id: String,
    pub caller_name: String,
    pub caller_image: String,
    pub receiver_id: String,
    pub receiver_name: String,
    pub receiver_image: String,
    pub other_user_id: String,
    pub other_user_name: String,
    pub other_user_image: String,
    pub call_type: CallType,
    pub status: CallStatus,
    /// Call length in seconds.
    pub duration: i32,
    pub coins_spent: i32,
    pub coins_earned: i32,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub rating: f64,
}

// ---------------------------------------------------------------------------
// Coin package
// ---------------------------------------------------------------------------

/// A purchasable bundle of coins shown in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPackage {
    pub id: String,
    pub coins: i32,
    pub price: f64,
    pub original_price: f64,
    /// Discount percentage.
    pub discount: i32,
    pub is_popular: bool,
    pub is_best_value: bool,
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A wallet ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub title: String,
    /// Money amount in the payment currency.
    pub amount: f64,
    pub coins: i32,
    /// Whether coins were added to (true) or taken from (false) the wallet.
    pub is_credit: bool,
    pub status: TransactionStatus,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub payment_method: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    /// Epoch milliseconds at which the message was normalized.
    pub timestamp: i64,
    pub is_read: bool,
}

/// One row of the conversation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatConversation {
    pub user_id: String,
    pub user_name: String,
    pub user_image: String,
    pub last_message: String,
    /// Epoch milliseconds at which the conversation was normalized.
    pub last_message_time: i64,
    pub unread_count: i32,
    pub is_online: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_serializes_camel_case_with_type_key() {
        let tx = Transaction {
            id: "tx-1".to_string(),
            transaction_type: TransactionType::Gift,
            title: "Gift".to_string(),
            amount: 0.0,
            coins: 50,
            is_credit: false,
            status: TransactionStatus::Success,
            timestamp: 1_731_851_340_000,
            payment_method: String::new(),
            description: String::new(),
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "GIFT");
        assert_eq!(value["isCredit"], false);
        assert_eq!(value["paymentMethod"], "");
        assert_eq!(value["status"], "SUCCESS");
    }
}
