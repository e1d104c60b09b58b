use async_trait::async_trait;
use futures::StreamExt;
use rig::agent::{Agent, MultiTurnStreamItem};
use rig::client::CompletionClient;
use rig::completion::Message as RigMessage;
use rig::providers::gemini;
use rig::streaming::{StreamedAssistantContent, StreamingChat};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::ports::{ChatHandle, LlmService, TextStream};
use crate::domain::{ChatTurn, DomainError, TurnRole};
use crate::infrastructure::config::LlmConfig;

type GeminiAgent = Agent<gemini::completion::CompletionModel>;

const CHUNK_BUFFER: usize = 32;

/// Gemini chat models through rig.
pub struct GeminiLlm {
    client: gemini::Client,
    model: String,
}

impl GeminiLlm {
    /// Builds the client from the validated configuration. A blank key or a
    /// client that cannot be constructed is a configuration error.
    pub fn new(config: &LlmConfig) -> Result<Self, DomainError> {
        if config.api_key.trim().is_empty() {
            return Err(DomainError::config("Gemini API key is empty"));
        }
        let client = gemini::Client::new(&config.api_key)
            .map_err(|e| DomainError::config(format!("cannot build Gemini client: {e}")))?;
        Ok(Self {
            client,
            model: config.model.clone(),
        })
    }
}

impl LlmService for GeminiLlm {
    #[instrument(skip(self, history), fields(model = %self.model, turns = history.len()))]
    fn start_chat(&self, history: Vec<ChatTurn>) -> Result<Box<dyn ChatHandle>, DomainError> {
        if self.model.trim().is_empty() {
            return Err(DomainError::model_init("no Gemini model configured"));
        }
        let agent = Arc::new(self.client.agent(&self.model).build());
        Ok(Box::new(GeminiChat { agent, history }))
    }
}

struct GeminiChat {
    agent: Arc<GeminiAgent>,
    history: Vec<ChatTurn>,
}

fn to_rig_message(turn: &ChatTurn) -> RigMessage {
    match turn.role {
        TurnRole::User => RigMessage::user(turn.text.clone()),
        TurnRole::Model => RigMessage::assistant(turn.text.clone()),
    }
}

#[async_trait]
impl ChatHandle for GeminiChat {
    /// Drives the rig stream on its own task and forwards text chunks in
    /// arrival order. The task stops after the first error or once the
    /// receiver is dropped.
    async fn send_message_stream(&mut self, prompt: &str) -> Result<TextStream, DomainError> {
        let history: Vec<RigMessage> = self.history.iter().map(to_rig_message).collect();
        debug!(turns = history.len(), "streaming chat request");

        let agent = self.agent.clone();
        let prompt = prompt.to_string();
        let (tx, rx) = mpsc::channel(CHUNK_BUFFER);

        tokio::spawn(async move {
            let mut stream = agent.stream_chat(prompt, history).await;
            while let Some(item) = stream.next().await {
                let chunk = match item {
                    Ok(MultiTurnStreamItem::StreamAssistantItem(StreamedAssistantContent::Text(
                        text,
                    ))) => Ok(text.text),
                    Ok(_) => continue,
                    Err(e) => Err(DomainError::stream(e.to_string())),
                };
                let failed = chunk.is_err();
                if tx.send(chunk).await.is_err() || failed {
                    break;
                }
            }
        });

        Ok(futures::stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|chunk| (chunk, rx))
        })
        .boxed())
    }

    fn record_exchange(&mut self, prompt: &str, reply: &str) {
        self.history.push(ChatTurn::user(prompt));
        self.history.push(ChatTurn::model(reply));
    }
}
