//! Document-grounded chat sessions.
//!
//! A [`Workspace`] is the caller-owned state of one conversation: language,
//! loaded documents, the grounding context, the transcript and at most one
//! [`ChatSession`]. The session is keyed by the grounding fingerprint and the
//! language; any change to either, or an explicit reset, drops it together
//! with the transcript so that the next question triggers a fresh seeding.

use futures::StreamExt;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::application::services::{LoadedDocument, VisualAid, VisualAidCatalog};
use crate::application::Notice;
use crate::domain::ports::{ChatHandle, LlmService};
use crate::domain::{
    ChatTurn, DomainError, GroundingContext, Language, Localizer, MessageId, MessageRole,
    Transcript,
};

/// Appended to partial replies while the stream is still running.
pub const TYPING_MARKER: char = '▌';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Unseeded,
    Seeded,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub fingerprint: String,
    pub language: Language,
}

/// Progress of one reply, in delivery order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyEvent {
    Partial {
        text: String,
    },
    Done {
        text: String,
        visual_aid: Option<VisualAid>,
    },
    #[serde(rename = "error")]
    Failed {
        message: String,
    },
}

impl ReplyEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Partial { .. } => "partial",
            Self::Done { .. } => "done",
            Self::Failed { .. } => "error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub visual_aid: Option<VisualAid>,
}

/// Builds the priming history: system instruction, then the document
/// content, each acknowledged by a model turn.
pub fn seed_history(
    locales: &Localizer,
    lang: Language,
    grounding: &GroundingContext,
) -> Vec<ChatTurn> {
    vec![
        ChatTurn::user(locales.text(MessageId::SystemInstruction, lang)),
        ChatTurn::model(locales.text(MessageId::SeedAckRole, lang)),
        ChatTurn::user(locales.format(
            MessageId::DocumentMessage,
            lang,
            &[("content", &grounding.as_str())],
        )),
        ChatTurn::model(locales.text(MessageId::SeedAckDocument, lang)),
    ]
}

pub struct ChatSession {
    key: SessionKey,
    handle: Option<Box<dyn ChatHandle>>,
    state: SessionState,
}

impl ChatSession {
    pub fn new(key: SessionKey) -> Self {
        Self {
            key,
            handle: None,
            state: SessionState::Unseeded,
        }
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Opens the remote chat primed with the grounding context. Returns
    /// `false` without contacting the model when already seeded.
    pub fn seed(
        &mut self,
        llm: &dyn LlmService,
        locales: &Localizer,
        grounding: &GroundingContext,
    ) -> Result<bool, DomainError> {
        if self.handle.is_some() {
            return Ok(false);
        }
        let history = seed_history(locales, self.key.language, grounding);
        self.handle = Some(llm.start_chat(history)?);
        self.state = SessionState::Seeded;
        info!(
            fingerprint = %self.key.fingerprint,
            language = self.key.language.code(),
            "chat session seeded"
        );
        Ok(true)
    }

    /// Forwards `prompt` and accumulates the streamed reply. A partial view
    /// is published after every chunk.
    async fn send(
        &mut self,
        prompt: &str,
        events: Option<&mpsc::Sender<ReplyEvent>>,
    ) -> Result<String, DomainError> {
        let handle = self
            .handle
            .as_mut()
            .ok_or_else(|| DomainError::internal("chat session has not been seeded"))?;
        self.state = SessionState::Active;

        let mut stream = handle
            .send_message_stream(prompt)
            .await
            .map_err(into_stream_error)?;

        let mut reply = String::new();
        while let Some(chunk) = stream.next().await {
            reply.push_str(&chunk.map_err(into_stream_error)?);
            emit(
                events,
                ReplyEvent::Partial {
                    text: format!("{reply}{TYPING_MARKER}"),
                },
            )
            .await;
        }

        handle.record_exchange(prompt, &reply);
        Ok(reply)
    }
}

fn into_stream_error(err: DomainError) -> DomainError {
    match err {
        DomainError::Stream(_) => err,
        other => DomainError::stream(other.to_string()),
    }
}

async fn emit(events: Option<&mpsc::Sender<ReplyEvent>>, event: ReplyEvent) {
    if let Some(tx) = events {
        if tx.send(event).await.is_err() {
            debug!("reply consumer went away, continuing");
        }
    }
}

pub struct Workspace {
    id: Uuid,
    language: Language,
    documents: Vec<LoadedDocument>,
    grounding: Option<GroundingContext>,
    session: Option<ChatSession>,
    transcript: Transcript,
}

impl Workspace {
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            language,
            documents: Vec::new(),
            grounding: None,
            session: None,
            transcript: Transcript::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn documents(&self) -> &[LoadedDocument] {
        &self.documents
    }

    pub fn grounding(&self) -> Option<&GroundingContext> {
        self.grounding.as_ref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> SessionState {
        self.session
            .as_ref()
            .map_or(SessionState::Unseeded, ChatSession::state)
    }

    /// Drops the chat session and clears the transcript.
    pub fn reset(&mut self) {
        self.session = None;
        self.transcript.clear();
        debug!(workspace = %self.id, "workspace reset");
    }

    /// Returns `true` when the language changed and the session was reset.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.language == language {
            return false;
        }
        self.language = language;
        self.reset();
        true
    }

    /// Replaces the loaded document set. The session survives only when both
    /// the file list and the grounding context are identical to the current
    /// ones; renaming a file counts as a change.
    pub fn set_documents(
        &mut self,
        documents: Vec<LoadedDocument>,
        grounding: Option<GroundingContext>,
    ) -> bool {
        let changed = self.documents != documents
            || self.grounding.as_ref().map(GroundingContext::fingerprint)
                != grounding.as_ref().map(GroundingContext::fingerprint);
        self.documents = documents;
        self.grounding = grounding;
        if changed {
            self.reset();
        }
        changed
    }
}

pub struct SessionManager {
    llm: Arc<dyn LlmService>,
    locales: Arc<Localizer>,
    visual_aids: Arc<VisualAidCatalog>,
}

impl SessionManager {
    pub fn new(
        llm: Arc<dyn LlmService>,
        locales: Arc<Localizer>,
        visual_aids: Arc<VisualAidCatalog>,
    ) -> Self {
        Self {
            llm,
            locales,
            visual_aids,
        }
    }

    /// Seeds the workspace's session if needed and returns the ready notices.
    #[instrument(skip(self, workspace), fields(workspace = %workspace.id))]
    pub fn start(&self, workspace: &mut Workspace) -> Result<Vec<Notice>, DomainError> {
        self.ensure_seeded(workspace)?;

        let lang = workspace.language;
        let chars = workspace.grounding.as_ref().map_or(0, GroundingContext::char_count);
        Ok(vec![
            Notice::info(self.locales.text(MessageId::ChatbotReady, lang)),
            Notice::info(self.locales.format(
                MessageId::DocumentLength,
                lang,
                &[("count", &chars)],
            )),
        ])
    }

    fn ensure_seeded(&self, workspace: &mut Workspace) -> Result<bool, DomainError> {
        let Some(grounding) = workspace.grounding.as_ref() else {
            return Err(DomainError::NoContent);
        };
        let key = SessionKey {
            fingerprint: grounding.fingerprint().to_string(),
            language: workspace.language,
        };

        if workspace.session.as_ref().is_some_and(|s| s.key() != &key) {
            workspace.session = None;
            workspace.transcript.clear();
        }

        workspace
            .session
            .get_or_insert_with(|| ChatSession::new(key))
            .seed(self.llm.as_ref(), &self.locales, grounding)
    }

    /// Answers one question. A trimmed-empty prompt is ignored and yields
    /// `Ok(None)`. Every failure is also published as [`ReplyEvent::Failed`].
    #[instrument(skip(self, workspace, prompt, events), fields(workspace = %workspace.id))]
    pub async fn ask(
        &self,
        workspace: &mut Workspace,
        prompt: &str,
        events: Option<&mpsc::Sender<ReplyEvent>>,
    ) -> Result<Option<Reply>, DomainError> {
        if prompt.trim().is_empty() {
            return Ok(None);
        }

        match self.answer(workspace, prompt, events).await {
            Ok(reply) => Ok(Some(reply)),
            Err(e) => {
                warn!(error = %e, "question failed");
                let message = self.locales.describe(&e, workspace.language);
                emit(events, ReplyEvent::Failed { message }).await;
                Err(e)
            }
        }
    }

    async fn answer(
        &self,
        workspace: &mut Workspace,
        prompt: &str,
        events: Option<&mpsc::Sender<ReplyEvent>>,
    ) -> Result<Reply, DomainError> {
        self.ensure_seeded(workspace)?;

        // Recorded before the model call: a failed turn leaves this entry
        // without a reply.
        workspace.transcript.add_message(MessageRole::User, prompt);

        let session = workspace
            .session
            .as_mut()
            .ok_or_else(|| DomainError::internal("chat session missing after seeding"))?;
        let text = session.send(prompt, events).await?;

        workspace
            .transcript
            .add_message(MessageRole::Assistant, text.as_str());
        let visual_aid = self.visual_aids.find(&text).cloned();
        info!(
            chars = text.len(),
            visual_aid = visual_aid.as_ref().map(|a| a.label.as_str()),
            "reply completed"
        );

        emit(
            events,
            ReplyEvent::Done {
                text: text.clone(),
                visual_aid: visual_aid.clone(),
            },
        )
        .await;

        Ok(Reply { text, visual_aid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{aggregate, DocumentKind, TurnRole};
    use crate::testing::{Script, ScriptedLlm};

    fn locales() -> Arc<Localizer> {
        Arc::new(Localizer::embedded().unwrap())
    }

    fn manager(llm: &ScriptedLlm) -> SessionManager {
        SessionManager::new(
            Arc::new(llm.clone()),
            locales(),
            Arc::new(VisualAidCatalog::default()),
        )
    }

    fn workspace_with(language: Language, text: &str) -> Workspace {
        let mut ws = Workspace::new(language);
        ws.set_documents(Vec::new(), aggregate([Some(text)]));
        ws
    }

    fn document_turns(history: &[ChatTurn]) -> usize {
        history
            .iter()
            .filter(|t| t.text.contains("DOCUMENT CONTENT START"))
            .count()
    }

    #[test]
    fn test_seed_history_orders_instruction_before_document() {
        let ctx = aggregate([Some("Founded in 2010")]).unwrap();
        let history = seed_history(&locales(), Language::English, &ctx);

        assert_eq!(history.len(), 4);
        assert_eq!(history[0].role, TurnRole::User);
        assert!(history[0].text.starts_with("You are a helpful assistant."));
        assert_eq!(history[1].role, TurnRole::Model);
        assert!(history[2].text.contains("DOCUMENT CONTENT START\n\nFounded in 2010"));
        assert_eq!(history[3].role, TurnRole::Model);
    }

    #[test]
    fn test_seed_history_marathi_markers() {
        let ctx = aggregate([Some("स्थापना 2010")]).unwrap();
        let history = seed_history(&locales(), Language::Marathi, &ctx);
        assert!(history[0].text.ends_with("तुम्ही मराठी भाषेत उत्तर द्या."));
        assert!(history[2].text.starts_with("दस्तऐवज सामग्री सुरू\n\nस्थापना 2010"));
    }

    #[test]
    fn test_seed_is_idempotent() {
        let llm = ScriptedLlm::replying(&["ok"]);
        let mgr = manager(&llm);
        let mut ws = workspace_with(Language::English, "Founded in 2010");

        mgr.start(&mut ws).unwrap();
        mgr.start(&mut ws).unwrap();

        let started = llm.started();
        assert_eq!(started.len(), 1);
        assert_eq!(document_turns(&started[0]), 1);
        assert_eq!(ws.state(), SessionState::Seeded);
    }

    #[tokio::test]
    async fn test_turns_reuse_session_without_reinjection() {
        let llm = ScriptedLlm::replying(&["In ", "2010."]);
        let mgr = manager(&llm);
        let mut ws = workspace_with(Language::English, "Founded in 2010");

        mgr.ask(&mut ws, "When was it founded?", None).await.unwrap();
        mgr.ask(&mut ws, "Where?", None).await.unwrap();

        assert_eq!(llm.started().len(), 1);
        assert_eq!(llm.prompts(), vec!["When was it founded?", "Where?"]);
        assert_eq!(ws.state(), SessionState::Active);
        assert_eq!(ws.transcript().len(), 4);
    }

    #[tokio::test]
    async fn test_model_sees_previous_turns() {
        let llm = ScriptedLlm::new(|history, _| {
            Script::Chunks(vec![format!("history={}", history.len())])
        });
        let mgr = manager(&llm);
        let mut ws = workspace_with(Language::English, "text");

        let first = mgr.ask(&mut ws, "one", None).await.unwrap().unwrap();
        let second = mgr.ask(&mut ws, "two", None).await.unwrap().unwrap();

        assert_eq!(first.text, "history=4");
        assert_eq!(second.text, "history=6");
    }

    #[tokio::test]
    async fn test_blank_prompt_is_ignored() {
        let llm = ScriptedLlm::replying(&["unused"]);
        let mgr = manager(&llm);
        let mut ws = workspace_with(Language::English, "text");

        let reply = mgr.ask(&mut ws, "   \n\t", None).await.unwrap();

        assert!(reply.is_none());
        assert!(ws.transcript().is_empty());
        assert!(llm.started().is_empty());
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_streamed_reply_matches_single_response() {
        let llm = ScriptedLlm::replying(&["The company ", "was founded ", "in 2010."]);
        let mgr = manager(&llm);
        let mut ws = workspace_with(Language::English, "Founded in 2010");
        let (tx, mut rx) = mpsc::channel(16);

        let reply = mgr.ask(&mut ws, "When?", Some(&tx)).await.unwrap().unwrap();
        drop(tx);

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }

        let partials: Vec<String> = events
            .iter()
            .filter_map(|e| match e {
                ReplyEvent::Partial { text } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            partials,
            vec![
                "The company ▌",
                "The company was founded ▌",
                "The company was founded in 2010.▌"
            ]
        );
        assert!(matches!(
            events.last(),
            Some(ReplyEvent::Done { text, .. }) if text == "The company was founded in 2010."
        ));

        let mut handle = llm.start_chat(Vec::new()).unwrap();
        let whole = handle.send_message("When?").await.unwrap();
        assert_eq!(reply.text, whole);
    }

    #[tokio::test]
    async fn test_stream_failure_leaves_orphaned_user_turn() {
        let llm = ScriptedLlm::new(|_, prompt| {
            if prompt == "boom" {
                Script::FailAfter(vec!["partial ".into()], "connection reset".into())
            } else {
                Script::chunks(&["fine"])
            }
        });
        let mgr = manager(&llm);
        let mut ws = workspace_with(Language::English, "text");
        let (tx, mut rx) = mpsc::channel(16);

        let err = mgr.ask(&mut ws, "boom", Some(&tx)).await.unwrap_err();
        assert!(matches!(err, DomainError::Stream(_)));

        // Accepted behavior: the user entry stays, no assistant entry.
        assert_eq!(ws.transcript().len(), 1);
        assert_eq!(ws.transcript().messages()[0].role, MessageRole::User);

        drop(tx);
        let mut last = None;
        while let Some(event) = rx.recv().await {
            last = Some(event);
        }
        assert!(matches!(
            last,
            Some(ReplyEvent::Failed { message })
                if message == "Error during message generation: connection reset"
        ));

        // The session stays usable and the failed exchange is not in history.
        let reply = mgr.ask(&mut ws, "again", None).await.unwrap().unwrap();
        assert_eq!(reply.text, "fine");
        assert_eq!(ws.transcript().len(), 3);
        assert_eq!(llm.started().len(), 1);
    }

    #[tokio::test]
    async fn test_language_change_forces_reseed() {
        let llm = ScriptedLlm::replying(&["ok"]);
        let mgr = manager(&llm);
        let mut ws = workspace_with(Language::English, "Founded in 2010");

        mgr.ask(&mut ws, "first", None).await.unwrap();
        assert!(ws.set_language(Language::Marathi));
        assert!(ws.transcript().is_empty());
        assert_eq!(ws.state(), SessionState::Unseeded);

        mgr.ask(&mut ws, "दुसरा", None).await.unwrap();

        let started = llm.started();
        assert_eq!(started.len(), 2);
        assert!(started[1][0].text.contains("मराठी"));
        assert!(started[1][2].text.starts_with("दस्तऐवज सामग्री सुरू"));
    }

    #[tokio::test]
    async fn test_same_language_keeps_session() {
        let llm = ScriptedLlm::replying(&["ok"]);
        let mgr = manager(&llm);
        let mut ws = workspace_with(Language::English, "text");

        mgr.ask(&mut ws, "first", None).await.unwrap();
        assert!(!ws.set_language(Language::English));
        mgr.ask(&mut ws, "second", None).await.unwrap();

        assert_eq!(llm.started().len(), 1);
        assert_eq!(ws.transcript().len(), 4);
    }

    #[tokio::test]
    async fn test_document_change_forces_reseed() {
        let llm = ScriptedLlm::replying(&["ok"]);
        let mgr = manager(&llm);
        let mut ws = workspace_with(Language::English, "Revenue: $5M");

        mgr.ask(&mut ws, "first", None).await.unwrap();

        // Same content keeps the session.
        assert!(!ws.set_documents(Vec::new(), aggregate([Some("Revenue: $5M")])));
        assert_eq!(ws.transcript().len(), 2);

        assert!(ws.set_documents(Vec::new(), aggregate([Some("Founded in 2010")])));
        assert!(ws.transcript().is_empty());

        mgr.ask(&mut ws, "second", None).await.unwrap();
        let started = llm.started();
        assert_eq!(started.len(), 2);
        assert!(started[1][2].text.contains("Founded in 2010"));
        assert!(!started[1][2].text.contains("Revenue"));
    }

    #[tokio::test]
    async fn test_renamed_documents_force_reseed() {
        let llm = ScriptedLlm::replying(&["ok"]);
        let mgr = manager(&llm);
        let loaded = |name: &str| {
            vec![LoadedDocument {
                name: name.to_string(),
                kind: DocumentKind::Pdf,
            }]
        };
        let mut ws = Workspace::new(Language::English);
        ws.set_documents(loaded("report.pdf"), aggregate([Some("Revenue: $5M")]));
        mgr.ask(&mut ws, "first", None).await.unwrap();

        assert!(!ws.set_documents(loaded("report.pdf"), aggregate([Some("Revenue: $5M")])));
        assert_eq!(ws.transcript().len(), 2);

        assert!(ws.set_documents(loaded("q3-report.pdf"), aggregate([Some("Revenue: $5M")])));
        assert!(ws.transcript().is_empty());
        assert_eq!(ws.state(), SessionState::Unseeded);
        assert_eq!(ws.documents()[0].name, "q3-report.pdf");

        mgr.ask(&mut ws, "second", None).await.unwrap();
        assert_eq!(llm.started().len(), 2);
    }

    #[tokio::test]
    async fn test_reset_clears_and_reseeds() {
        let llm = ScriptedLlm::replying(&["ok"]);
        let mgr = manager(&llm);
        let mut ws = workspace_with(Language::English, "text");

        mgr.ask(&mut ws, "first", None).await.unwrap();
        ws.reset();
        assert!(ws.transcript().is_empty());
        assert_eq!(ws.state(), SessionState::Unseeded);

        mgr.ask(&mut ws, "second", None).await.unwrap();
        assert_eq!(llm.started().len(), 2);
    }

    #[tokio::test]
    async fn test_without_documents_is_no_content() {
        let llm = ScriptedLlm::replying(&["ok"]);
        let mgr = manager(&llm);
        let mut ws = Workspace::new(Language::English);

        let err = mgr.ask(&mut ws, "hello", None).await.unwrap_err();
        assert!(matches!(err, DomainError::NoContent));
        assert!(ws.transcript().is_empty());
        assert!(llm.started().is_empty());
    }

    #[tokio::test]
    async fn test_model_init_failure_offers_no_chat() {
        let llm = ScriptedLlm::failing_start("quota exceeded");
        let mgr = manager(&llm);
        let mut ws = workspace_with(Language::English, "text");

        let err = mgr.start(&mut ws).unwrap_err();
        assert!(matches!(err, DomainError::ModelInit(_)));
        assert_eq!(ws.state(), SessionState::Unseeded);

        let err = mgr.ask(&mut ws, "hello", None).await.unwrap_err();
        assert!(matches!(err, DomainError::ModelInit(_)));
        assert!(ws.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_reply_surfaces_visual_aid() {
        let llm = ScriptedLlm::replying(&["See the ", "Acme-Logo financial results"]);
        let mgr = SessionManager::new(
            Arc::new(llm.clone()),
            locales(),
            Arc::new(VisualAidCatalog::from_entries([VisualAid::new(
                "acme-logo",
                "meta_images/acme-logo.png",
            )])),
        );
        let mut ws = workspace_with(Language::English, "text");

        let reply = mgr.ask(&mut ws, "Show results", None).await.unwrap().unwrap();
        assert_eq!(reply.visual_aid.unwrap().label, "acme-logo");
    }

    /// Answers from the document turn only, with the localized sentinel when
    /// the keyword is absent.
    fn grounded_oracle(locales: Arc<Localizer>) -> ScriptedLlm {
        ScriptedLlm::new(move |history, prompt| {
            let document = &history[2].text;
            let lang = if document.starts_with("DOCUMENT CONTENT START") {
                Language::English
            } else {
                Language::Marathi
            };
            let keyword = if prompt.contains("founded") { "Founded" } else { "CEO" };
            let answer = document
                .lines()
                .find(|line| line.contains(keyword))
                .map(str::to_string)
                .unwrap_or_else(|| locales.text(MessageId::NotAvailable, lang).to_string());
            Script::Chunks(vec![answer])
        })
    }

    #[tokio::test]
    async fn test_two_document_scenario() {
        let locales = locales();
        let pdf = crate::domain::ExtractedText::new(
            "report.pdf",
            crate::domain::DocumentKind::Pdf,
            vec![crate::domain::Fragment::page(1, "Revenue: $5M")],
        );
        let docx = crate::domain::ExtractedText::new(
            "about.docx",
            crate::domain::DocumentKind::Docx,
            vec![crate::domain::Fragment::block("Founded in 2010")],
        );
        let ctx = aggregate([Some(pdf.render()), Some(docx.render())]).unwrap();
        assert!(ctx
            .as_str()
            .contains("Revenue: $5M\n\n--- End of Document Section ---\n\nFounded in 2010"));

        let llm = grounded_oracle(locales.clone());
        let mgr = SessionManager::new(
            Arc::new(llm),
            locales.clone(),
            Arc::new(VisualAidCatalog::default()),
        );
        let mut ws = Workspace::new(Language::English);
        ws.set_documents(Vec::new(), Some(ctx.clone()));

        let reply = mgr
            .ask(&mut ws, "When was the company founded?", None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reply.text, "Founded in 2010");

        let reply = mgr.ask(&mut ws, "Who is the CEO?", None).await.unwrap().unwrap();
        assert_eq!(
            reply.text,
            "The information is not available in the provided documents."
        );

        ws.set_language(Language::Marathi);
        let reply = mgr.ask(&mut ws, "Who is the CEO?", None).await.unwrap().unwrap();
        assert_eq!(reply.text, "ही माहिती प्रदान केलेल्या दस्तऐवजांमध्ये उपलब्ध नाही.");
    }
}
