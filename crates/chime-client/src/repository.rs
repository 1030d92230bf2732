//! Fetch → decode → normalize for every record type the app displays.

use chime_normalize::{
    CallDto, ChatConversationDto, Clock, CoinPackageDto, MessageDto, Normalizer, SystemClock,
    ToDomain, TransactionDto, UserDto,
};
use chime_shared::{Call, ChatConversation, CoinPackage, Message, Transaction, User};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::envelope;
use crate::error::Result;
use crate::transport::ApiTransport;

/// Data-access layer handing strict domain entities to the presentation
/// layer.
pub struct Repository<T, C = SystemClock> {
    transport: T,
    normalizer: Normalizer<C>,
    config: ClientConfig,
}

impl<T: ApiTransport> Repository<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self::with_normalizer(transport, config, Normalizer::new())
    }
}

impl<T: ApiTransport, C: Clock> Repository<T, C> {
    pub fn with_normalizer(transport: T, config: ClientConfig, normalizer: Normalizer<C>) -> Self {
        Self {
            transport,
            normalizer,
            config,
        }
    }

    pub async fn user(&self, id: &str) -> Result<User> {
        let path = self.config.endpoint(&format!("users/{id}"));
        let dto: UserDto = self.fetch(&path).await?;
        Ok(self.normalizer.normalize(&dto))
    }

    pub async fn calls(&self) -> Result<Vec<Call>> {
        let path = self.config.paged_endpoint("calls");
        self.fetch_list::<CallDto>(&path).await
    }

    pub async fn coin_packages(&self) -> Result<Vec<CoinPackage>> {
        let path = self.config.endpoint("coins/packages");
        self.fetch_list::<CoinPackageDto>(&path).await
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        let path = self.config.paged_endpoint("wallet/transactions");
        self.fetch_list::<TransactionDto>(&path).await
    }

    /// Messages exchanged with `user_id`.
    pub async fn messages(&self, user_id: &str) -> Result<Vec<Message>> {
        let path = self
            .config
            .paged_endpoint(&format!("chat/{user_id}/messages"));
        self.fetch_list::<MessageDto>(&path).await
    }

    pub async fn conversations(&self) -> Result<Vec<ChatConversation>> {
        let path = self.config.endpoint("chat/conversations");
        self.fetch_list::<ChatConversationDto>(&path).await
    }

    async fn fetch<D: DeserializeOwned>(&self, path: &str) -> Result<D> {
        let body = self.transport.get(path).await?;
        envelope::decode(&body)
    }

    async fn fetch_list<D>(&self, path: &str) -> Result<Vec<D::Entity>>
    where
        D: ToDomain + DeserializeOwned,
    {
        let dtos: Vec<D> = self.fetch(path).await?;
        let entities = self.normalizer.normalize_all(&dtos);
        debug!(path, entity = D::ENTITY, count = entities.len(), "Normalized records");
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chime_normalize::FixedClock;
    use chime_shared::{CallStatus, CallType, Gender};

    use super::*;
    use crate::error::ClientError;

    /// Answers from an in-memory map and remembers the requested paths.
    #[derive(Default)]
    struct StubTransport {
        bodies: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
    }

    impl StubTransport {
        fn with(mut self, path: &str, body: &str) -> Self {
            self.bodies.insert(path.to_string(), body.to_string());
            self
        }
    }

    #[async_trait]
    impl ApiTransport for StubTransport {
        async fn get(&self, path: &str) -> Result<String> {
            self.requested.lock().unwrap().push(path.to_string());
            self.bodies
                .get(path)
                .cloned()
                .ok_or_else(|| ClientError::Transport(format!("no stub for {path}")))
        }
    }

    fn repository(transport: StubTransport) -> Repository<StubTransport, FixedClock> {
        Repository::with_normalizer(
            transport,
            ClientConfig::default(),
            Normalizer::with_clock(FixedClock(1_000)),
        )
    }

    #[tokio::test]
    async fn test_user_is_normalized() {
        let transport = StubTransport::default().with(
            "users/u-1",
            r#"{"success": true, "data": {"id": "u-1", "gender": "Female", "is_online": "on"}}"#,
        );
        let user = repository(transport).user("u-1").await.unwrap();

        assert_eq!(user.id, "u-1");
        assert_eq!(user.gender, Gender::Female);
        assert!(user.is_online);
        assert_eq!(user.username, "");
    }

    #[tokio::test]
    async fn test_calls_request_a_page() {
        let transport = StubTransport::default().with(
            "calls?per_page=20",
            r#"{"data": [{"id": "c-1", "call_type": "VIDEO", "status": null, "timestamp": null}]}"#,
        );
        let repo = repository(transport);
        let calls = repo.calls().await.unwrap();

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].call_type, CallType::Video);
        assert_eq!(calls[0].status, CallStatus::Pending);
        assert_eq!(calls[0].timestamp, 1_000);
        assert_eq!(
            *repo.transport.requested.lock().unwrap(),
            vec!["calls?per_page=20".to_string()]
        );
    }

    #[tokio::test]
    async fn test_api_failure_is_surfaced() {
        let transport = StubTransport::default().with(
            "coins/packages",
            r#"{"success": false, "message": "Store unavailable"}"#,
        );
        let err = repository(transport).coin_packages().await.unwrap_err();

        assert!(matches!(err, ClientError::Api { .. }));
    }

    #[tokio::test]
    async fn test_record_missing_required_field_fails_decode() {
        let transport = StubTransport::default().with(
            "chat/conversations",
            r#"{"data": [{"user_name": "no id"}]}"#,
        );
        let err = repository(transport).conversations().await.unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }
}
