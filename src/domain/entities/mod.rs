mod conversation;
mod document;
mod grounding;
mod language;

pub use conversation::{ChatTurn, Message, MessageRole, Transcript, TurnRole};
pub use document::{DocumentKind, ExtractedText, Fragment, SourceDocument};
pub use grounding::{aggregate, GroundingContext, SECTION_SEPARATOR};
pub use language::Language;
