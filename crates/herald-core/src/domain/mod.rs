//! Domain model (IDs, invocation input, completion reports, outcomes, errors).

pub mod errors;
pub mod event;
pub mod ids;
pub mod outcome;
pub mod report;

pub use self::errors::{HandlerError, ReporterError};
pub use self::event::{InvocationContext, InvocationEvent, PipelineJob};
pub use self::ids::{InvocationId, JobId};
pub use self::outcome::Outcome;
pub use self::report::{
    CompletionReport, FailureDetails, FailureType, MAX_FAILURE_MESSAGE_CHARS, failure_message,
};
