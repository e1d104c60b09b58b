pub mod entities;
pub mod errors;
pub mod locale;
pub mod ports;

pub use entities::*;
pub use errors::{DomainError, Result};
pub use locale::{Localizer, MessageId};
