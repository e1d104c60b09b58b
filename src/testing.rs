//! In-process stand-ins for the remote model and the document parsers,
//! used by unit tests.

use async_trait::async_trait;
use futures::StreamExt;
use std::sync::{Arc, Mutex};

use crate::domain::ports::{ChatHandle, LlmService, TextExtractor, TextStream};
use crate::domain::{ChatTurn, DocumentKind, DomainError, ExtractedText, Fragment, SourceDocument};

/// What a scripted chat replies with for one prompt.
#[derive(Debug, Clone)]
pub enum Script {
    Chunks(Vec<String>),
    /// Yields the chunks, then fails mid-stream.
    FailAfter(Vec<String>, String),
}

impl Script {
    pub fn chunks(chunks: &[&str]) -> Self {
        Self::Chunks(chunks.iter().map(|c| c.to_string()).collect())
    }
}

type Responder = dyn Fn(&[ChatTurn], &str) -> Script + Send + Sync;

#[derive(Clone)]
pub struct ScriptedLlm {
    responder: Arc<Responder>,
    start_error: Option<String>,
    started: Arc<Mutex<Vec<Vec<ChatTurn>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLlm {
    pub fn new(responder: impl Fn(&[ChatTurn], &str) -> Script + Send + Sync + 'static) -> Self {
        Self {
            responder: Arc::new(responder),
            start_error: None,
            started: Arc::default(),
            prompts: Arc::default(),
        }
    }

    pub fn replying(chunks: &[&str]) -> Self {
        let script = Script::chunks(chunks);
        Self::new(move |_, _| script.clone())
    }

    pub fn failing_start(msg: &str) -> Self {
        let mut llm = Self::replying(&[]);
        llm.start_error = Some(msg.to_string());
        llm
    }

    /// Histories passed to every `start_chat` call, in order.
    pub fn started(&self) -> Vec<Vec<ChatTurn>> {
        self.started.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl LlmService for ScriptedLlm {
    fn start_chat(&self, history: Vec<ChatTurn>) -> Result<Box<dyn ChatHandle>, DomainError> {
        if let Some(msg) = &self.start_error {
            return Err(DomainError::model_init(msg.clone()));
        }
        self.started.lock().unwrap().push(history.clone());
        Ok(Box::new(ScriptedChat {
            history,
            responder: self.responder.clone(),
            prompts: self.prompts.clone(),
        }))
    }
}

struct ScriptedChat {
    history: Vec<ChatTurn>,
    responder: Arc<Responder>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ChatHandle for ScriptedChat {
    async fn send_message_stream(&mut self, prompt: &str) -> Result<TextStream, DomainError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let items: Vec<Result<String, DomainError>> = match (self.responder)(&self.history, prompt) {
            Script::Chunks(chunks) => chunks.into_iter().map(Ok).collect(),
            Script::FailAfter(chunks, error) => chunks
                .into_iter()
                .map(Ok)
                .chain(std::iter::once(Err(DomainError::stream(error))))
                .collect(),
        };
        Ok(futures::stream::iter(items).boxed())
    }

    fn record_exchange(&mut self, prompt: &str, reply: &str) {
        self.history.push(ChatTurn::user(prompt));
        self.history.push(ChatTurn::model(reply));
    }
}

/// Reads fragments straight from the document bytes: one fragment per line,
/// or a failure when the body starts with `!`.
pub struct LineExtractor;

impl TextExtractor for LineExtractor {
    fn extract(&self, document: &SourceDocument) -> Result<ExtractedText, DomainError> {
        let body = String::from_utf8_lossy(&document.bytes);
        if let Some(reason) = body.strip_prefix('!') {
            return Err(DomainError::extraction(&document.name, reason));
        }
        let fragments = body
            .lines()
            .enumerate()
            .map(|(i, line)| match document.kind {
                DocumentKind::Pdf => Fragment::page(i + 1, line),
                DocumentKind::Docx => Fragment::block(line),
            })
            .collect();
        Ok(ExtractedText::new(&document.name, document.kind, fragments))
    }
}
