// src/services/chat.rs
use async_trait::async_trait;

use crate::error::AppError;

/// Interface for sending one chat prompt to an LLM and receiving the
/// reply text.
///
/// Implementors own transport, serialization, and vendor-specific API
/// details. Consumers stay decoupled from any particular provider, and
/// tests substitute a double here.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `message` as the user prompt and return the assistant's
    /// reply. `None` mirrors a request whose `message` was absent or
    /// null; it is forwarded as-is, not defaulted.
    async fn complete(&self, message: Option<&str>) -> Result<String, AppError>;
}

/// Capability to produce a configured [`ChatClient`].
///
/// [`ChatService::new`] invokes `build` exactly once and keeps the
/// resulting handle for the life of the service.
pub trait ChatClientBuilder: Send + Sync {
    fn build(&self) -> Result<Box<dyn ChatClient>, AppError>;
}

/// Bridge between the chat endpoint and the LLM provider client.
pub struct ChatService {
    client: Box<dyn ChatClient>,
}

impl ChatService {
    /// Build the client and retain it. Fails with
    /// [`AppError::Configuration`] when the builder cannot produce a
    /// client; no provider call is made in that case.
    pub fn new(builder: &dyn ChatClientBuilder) -> Result<Self, AppError> {
        let client = builder.build()?;
        Ok(Self { client })
    }

    /// Forward `message` to the retained client and hand back its reply
    /// verbatim. No trimming, no validation, no retry; a client error
    /// propagates unchanged.
    pub async fn chat(&self, message: Option<&str>) -> Result<String, AppError> {
        self.client.complete(message).await
    }
}
