use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;

use crate::domain::{errors::DomainError, ChatTurn};

/// Ordered text chunks of one streamed reply.
pub type TextStream = BoxStream<'static, Result<String, DomainError>>;

/// Opens conversational sessions on a remote model.
pub trait LlmService: Send + Sync {
    /// Starts a chat whose model-side history begins with `history`.
    fn start_chat(&self, history: Vec<ChatTurn>) -> Result<Box<dyn ChatHandle>, DomainError>;
}

/// A live conversation with the remote model.
#[async_trait]
pub trait ChatHandle: Send + Sync {
    /// Sends `prompt` and returns the reply as a stream of chunks.
    async fn send_message_stream(&mut self, prompt: &str) -> Result<TextStream, DomainError>;

    /// Appends a completed exchange to the model-side history so later turns
    /// see it.
    fn record_exchange(&mut self, prompt: &str, reply: &str);

    /// Non-streamed variant: the concatenation of every chunk.
    async fn send_message(&mut self, prompt: &str) -> Result<String, DomainError> {
        let mut stream = self.send_message_stream(prompt).await?;
        let mut reply = String::new();
        while let Some(chunk) = stream.next().await {
            reply.push_str(&chunk?);
        }
        self.record_exchange(prompt, &reply);
        Ok(reply)
    }
}
