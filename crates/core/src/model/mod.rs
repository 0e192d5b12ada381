pub mod annotation;
pub mod name_edit;
pub mod registry;
pub mod selection;
pub mod session;
pub mod trace;

pub use annotation::{Annotation, AnnotationLog};
pub use name_edit::{NameEditBuffer, NameEdits};
pub use registry::TraceRegistry;
pub use selection::ActiveTraceSelector;
pub use session::{EventOutcome, Session};
pub use trace::Trace;
