//! Request worker executing API fetches on behalf of the application.
//!
//! The application never awaits the network itself: it emits
//! `Action::PostToWorker`, and the runtime hands the message to the worker and
//! feeds the response back as an event.
//!
//! # Architecture
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: worker implementation over a [`ReactorApi`](crate::api::ReactorApi)

pub mod handler;
pub mod messages;

pub use handler::ExplorerWorker;
pub use messages::{RequestKind, TraceContext, WorkerMessage, WorkerResponse};
