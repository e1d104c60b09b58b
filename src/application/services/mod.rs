mod document;
mod session;
mod visual_aid;

pub use document::{DocumentService, IngestReport, LoadedDocument, DEFAULT_MAX_CONTEXT_CHARS};
pub use session::{
    seed_history, ChatSession, Reply, ReplyEvent, SessionKey, SessionManager, SessionState,
    Workspace, TYPING_MARKER,
};
pub use visual_aid::{VisualAid, VisualAidCatalog};
