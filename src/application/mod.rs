//! Application layer - Use cases and orchestration.
//!
//! Services here extract and aggregate documents, run grounded chat sessions
//! and match replies against visual aids. They depend on domain ports
//! (traits) rather than concrete model or parser implementations.

mod notice;
pub mod services;

pub use notice::{Notice, NoticeLevel};
pub use services::{
    DocumentService, IngestReport, LoadedDocument, Reply, ReplyEvent, SessionManager,
    SessionState, VisualAid, VisualAidCatalog, Workspace,
};
