//! Session state machine for the cleaning workflow.
//!
//! One [`Session`] drives one file through Upload → Preview → Result. The
//! session owns all workflow state - stage, in-flight guard, error overlay,
//! column map, selection, generate-names flag - and nothing else mutates it.
//!
//! Network calls are sequenced as explicit pairs: a `begin_*` operation
//! validates locally, arms the single in-flight guard, and hands back a
//! request descriptor; the matching `*_finished` operation applies the
//! response. Every descriptor carries the session generation token, and a
//! response whose token is stale (the session was reset while the call was
//! outstanding) is discarded on arrival.
//!
//! The session issues no I/O itself; the caller (the GUI shell) performs
//! the described requests against `dcs-api` and feeds the results back.

pub mod error;
pub mod session;
pub mod stage;

pub use error::WorkflowError;
pub use session::{
    DownloadRequest, Generation, PreviewRequest, ProcessRequest, Session, UploadRequest,
};
pub use stage::Stage;
