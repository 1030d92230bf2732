//! Transfer objects exactly as the HTTP API delivers them.
//!
//! Fields are optional wherever the backend has been seen to omit them or
//! send `null`; boolean-like fields are [`FlagValue`]s.  Names follow the
//! backend's snake_case with camelCase aliases for the older endpoints.

use serde::Deserialize;
use serde_json::Value;

use crate::coerce::FlagValue;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    #[serde(alias = "profileImage")]
    pub profile_image: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub language: Option<String>,
    pub interests: Option<Vec<String>>,
    #[serde(default, alias = "isOnline")]
    pub is_online: FlagValue,
    #[serde(alias = "lastSeen")]
    pub last_seen: Option<i64>,
    pub rating: Option<f64>,
    #[serde(alias = "totalRatings")]
    pub total_ratings: Option<i32>,
    #[serde(alias = "coinBalance")]
    pub coin_balance: Option<i32>,
    /// Sent as a decimal by the earnings service.
    #[serde(alias = "totalEarnings")]
    pub total_earnings: Option<f64>,
    #[serde(default, alias = "audioCallEnabled")]
    pub audio_call_enabled: FlagValue,
    #[serde(default, alias = "videoCallEnabled")]
    pub video_call_enabled: FlagValue,
    #[serde(default, alias = "isVerified")]
    pub is_verified: FlagValue,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CallDto {
    pub id: Option<String>,
    #[serde(alias = "callerId")]
    pub caller_id: Option<String>,
    #[serde(alias = "callerName")]
    pub caller_name: Option<String>,
    #[serde(alias = "callerImage")]
    pub caller_image: Option<String>,
    #[serde(alias = "receiverId")]
    pub receiver_id: Option<String>,
    #[serde(alias = "receiverName")]
    pub receiver_name: Option<String>,
    #[serde(alias = "receiverImage")]
    pub receiver_image: Option<String>,
    #[serde(alias = "otherUserId")]
    pub other_user_id: Option<String>,
    #[serde(alias = "otherUserName")]
    pub other_user_name: Option<String>,
    #[serde(alias = "otherUserImage")]
    pub other_user_image: Option<String>,
    #[serde(alias = "callType")]
    pub call_type: Option<String>,
    pub status: Option<String>,
    pub duration: Option<i32>,
    #[serde(alias = "coinsSpent")]
    pub coins_spent: Option<i32>,
    #[serde(alias = "coinsEarned")]
    pub coins_earned: Option<i32>,
    /// Epoch milliseconds.
    pub timestamp: Option<i64>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CoinPackageDto {
    pub id: String,
    pub coins: i32,
    pub price: f64,
    #[serde(alias = "originalPrice")]
    pub original_price: f64,
    pub discount: i32,
    #[serde(alias = "isPopular")]
    pub is_popular: bool,
    #[serde(alias = "isBestValue")]
    pub is_best_value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionDto {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub title: Option<String>,
    pub amount: f64,
    pub coins: i32,
    #[serde(default, alias = "isCredit")]
    pub is_credit: FlagValue,
    pub status: Option<String>,
    /// ISO-8601 string.
    #[serde(alias = "created_at", alias = "createdAt")]
    pub timestamp: Option<String>,
    #[serde(alias = "paymentMethod")]
    pub payment_method: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageDto {
    pub id: String,
    #[serde(alias = "senderId")]
    pub sender_id: String,
    #[serde(alias = "receiverId")]
    pub receiver_id: String,
    pub content: String,
    /// Decoded for completeness, not used by the mapper.
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default, alias = "isRead")]
    pub is_read: FlagValue,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatConversationDto {
    #[serde(alias = "userId")]
    pub user_id: String,
    #[serde(alias = "userName")]
    pub user_name: String,
    #[serde(alias = "userImage")]
    pub user_image: Option<String>,
    #[serde(alias = "lastMessage")]
    pub last_message: Option<String>,
    /// Decoded for completeness, not used by the mapper.
    #[serde(default, alias = "lastMessageTime")]
    pub last_message_time: Option<Value>,
    #[serde(alias = "unreadCount")]
    pub unread_count: Option<i32>,
    #[serde(default, alias = "isOnline")]
    pub is_online: FlagValue,
}
