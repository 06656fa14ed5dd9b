//! # weekslot
//!
//! Weekly availability picking: the user drags out time slots on a week view,
//! each new slot is merged with the ones already selected, and the resulting
//! set can be sent to a backend in one request.
//!
//! ## Modules
//!
//! - [`instant`] — week-anchored instants, parsing and labels
//! - [`interval`] — selected intervals and id sources
//! - [`store`] — insertion-ordered interval store
//! - [`merge`] — coalescing a candidate into the store
//! - [`prompt`] — injected confirm/alert dialogs
//! - [`picker`] — gesture handling and submission state
//! - [`submit`] — wire payload and the transport seam
//! - [`view`] — calendar display settings
//! - `http` — `reqwest` transport (feature `http`)
//! - [`error`] — Error types

pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod instant;
pub mod interval;
pub mod merge;
pub mod picker;
pub mod prompt;
pub mod store;
pub mod submit;
pub mod view;

pub use error::WeekSlotError;
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use instant::{parse_instant, weekly_instant};
pub use interval::{ClockIds, IdSource, Interval, IntervalId, SequentialIds};
pub use merge::{merge_candidate, MergeOutcome};
pub use picker::{SlotOutcome, SlotPicker};
pub use prompt::{AutoConfirm, Prompter, ScriptedPrompter};
pub use store::IntervalStore;
pub use submit::{SubmissionPayload, SubmitConfig, Transport, WireEvent};
pub use view::CalendarView;
