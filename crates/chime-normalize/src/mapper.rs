//! Per-entity mapping from transfer objects to domain entities.
//!
//! Every mapper is total: each field either copies a present value or takes
//! its documented default, so a DTO that decoded successfully always maps.

use chime_shared::{
    Call, CallStatus, CallType, ChatConversation, CoinPackage, Gender, Language, Message,
    Transaction, TransactionStatus, TransactionType, User,
};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::coerce::{coerce_bool, narrow_to_i32};
use crate::diagnostics::{self, FallbackReason};
use crate::dto::{
    CallDto, ChatConversationDto, CoinPackageDto, MessageDto, TransactionDto, UserDto,
};
use crate::timestamp::parse_timestamp_with;

/// Conversion of a transfer object into its domain entity.
pub trait ToDomain {
    type Entity;

    /// Entity name used in logs and metric labels.
    const ENTITY: &'static str;

    /// Build the entity.  `clock` supplies "now" for time fields that fall
    /// back to the current time.
    fn to_domain<C: Clock + ?Sized>(&self, clock: &C) -> Self::Entity;
}

impl ToDomain for UserDto {
    type Entity = User;
    const ENTITY: &'static str = "user";

    fn to_domain<C: Clock + ?Sized>(&self, _clock: &C) -> User {
        User {
            id: self.id.clone(),
            username: self.username.clone().unwrap_or_default(),
            bio: self.bio.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            profile_image: self.profile_image.clone().unwrap_or_default(),
            age: self.age.unwrap_or(0),
            gender: Gender::from_token(self.gender.as_deref()),
            language: Language::from_token(self.language.as_deref()),
            interests: self.interests.clone().unwrap_or_default(),
            is_online: coerce_bool(&self.is_online, false),
            last_seen: self.last_seen.unwrap_or(0),
            rating: self.rating.unwrap_or(0.0),
            total_ratings: self.total_ratings.unwrap_or(0),
            coin_balance: self.coin_balance.unwrap_or(0),
            total_earnings: self.total_earnings.map_or(0, narrow_to_i32),
            audio_call_enabled: coerce_bool(&self.audio_call_enabled, false),
            video_call_enabled: coerce_bool(&self.video_call_enabled, false),
            is_verified: coerce_bool(&self.is_verified, false),
        }
    }
}

impl ToDomain for CallDto {
    type Entity = Call;
    const ENTITY: &'static str = "call";

    fn to_domain<C: Clock + ?Sized>(&self, clock: &C) -> Call {
        let timestamp = self.timestamp.unwrap_or_else(|| {
            debug!(call_id = ?self.id, "Call without timestamp, using current time");
            clock.now_millis()
        });

        Call {
            id: self.id.clone().unwrap_or_default(),
            caller_id: self.caller_id.clone().unwrap_or_default(),
            caller_name: self.caller_name.clone().unwrap_or_default(),
            caller_image: self.caller_image.clone().unwrap_or_default(),
            receiver_id: self.receiver_id.clone().unwrap_or_default(),
            receiver_name: self.receiver_name.clone().unwrap_or_default(),
            receiver_image: self.receiver_image.clone().unwrap_or_default(),
            other_user_id: self.other_user_id.clone().unwrap_or_default(),
            other_user_name: self.other_user_name.clone().unwrap_or_default(),
            other_user_image: self.other_user_image.clone().unwrap_or_default(),
            call_type: CallType::from_token(self.call_type.as_deref()),
            status: CallStatus::from_token(self.status.as_deref()),
            duration: self.duration.unwrap_or(0),
            coins_spent: self.coins_spent.unwrap_or(0),
            coins_earned: self.coins_earned.unwrap_or(0),
            timestamp,
            rating: self.rating.unwrap_or(0.0),
        }
    }
}

impl ToDomain for CoinPackageDto {
    type Entity = CoinPackage;
    const ENTITY: &'static str = "coin_package";

    fn to_domain<C: Clock + ?Sized>(&self, _clock: &C) -> CoinPackage {
        CoinPackage {
            id: self.id.clone(),
            coins: self.coins,
            price: self.price,
            original_price: self.original_price,
            discount: self.discount,
            is_popular: self.is_popular,
            is_best_value: self.is_best_value,
        }
    }
}

impl ToDomain for TransactionDto {
    type Entity = Transaction;
    const ENTITY: &'static str = "transaction";

    fn to_domain<C: Clock + ?Sized>(&self, clock: &C) -> Transaction {
        let transaction_type = TransactionType::from_token(self.transaction_type.as_deref());

        let timestamp = match self.timestamp.as_deref() {
            Some(raw) => parse_timestamp_with(raw, clock, Self::ENTITY),
            None => {
                warn!(
                    transaction_id = %self.id,
                    "Transaction without timestamp, using current time"
                );
                diagnostics::record_timestamp_fallback(Self::ENTITY, FallbackReason::Missing);
                clock.now_millis()
            }
        };

        Transaction {
            id: self.id.clone(),
            transaction_type,
            title: self
                .title
                .clone()
                .unwrap_or_else(|| transaction_type.default_title().to_string()),
            amount: self.amount,
            coins: self.coins,
            is_credit: coerce_bool(&self.is_credit, false),
            status: TransactionStatus::from_token(self.status.as_deref()),
            timestamp,
            payment_method: self.payment_method.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

// The chat mappers stamp records with the time they were normalized and
// drop the upstream timestamps. This is probably an oversight carried over
// from the backend contract: messages fetched together all get the same
// time and lose their real ordering.

impl ToDomain for MessageDto {
    type Entity = Message;
    const ENTITY: &'static str = "message";

    fn to_domain<C: Clock + ?Sized>(&self, clock: &C) -> Message {
        Message {
            id: self.id.clone(),
            sender_id: self.sender_id.clone(),
            receiver_id: self.receiver_id.clone(),
            content: self.content.clone(),
            // TODO: switch to the upstream timestamp once the chat API's
            // timestamp format is pinned down with the backend team.
            timestamp: clock.now_millis(),
            is_read: coerce_bool(&self.is_read, false),
        }
    }
}

impl ToDomain for ChatConversationDto {
    type Entity = ChatConversation;
    const ENTITY: &'static str = "chat_conversation";

    fn to_domain<C: Clock + ?Sized>(&self, clock: &C) -> ChatConversation {
        ChatConversation {
            user_id: self.user_id.clone(),
            user_name: self.user_name.clone(),
            user_image: self.user_image.clone().unwrap_or_default(),
            last_message: self.last_message.clone().unwrap_or_default(),
            // TODO: switch to the upstream last_message_time together with
            // the Message timestamp once the chat API's format is pinned down.
            last_message_time: clock.now_millis(),
            unread_count: self.unread_count.unwrap_or(0),
            is_online: coerce_bool(&self.is_online, false),
        }
    }
}

/// Stateless facade over [`ToDomain`] that owns the clock.
///
/// Cheap to clone and safe to share across threads; it holds nothing but the
/// clock.
#[derive(Debug, Clone, Default)]
pub struct Normalizer<C = SystemClock> {
    clock: C,
}

impl Normalizer<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Normalizer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn normalize<D: ToDomain>(&self, dto: &D) -> D::Entity {
        diagnostics::record_normalized(D::ENTITY);
        dto.to_domain(&self.clock)
    }

    /// Normalize a batch, preserving order.
    pub fn normalize_all<D: ToDomain>(&self, dtos: &[D]) -> Vec<D::Entity> {
        dtos.iter().map(|dto| self.normalize(dto)).collect()
    }
}
