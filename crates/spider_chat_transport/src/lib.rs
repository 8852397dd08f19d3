//! Spider chat transport: HTTP client for the chat backend and the handle
//! that runs requests off the UI thread.
mod backend;
mod handle;
mod types;

pub use backend::{Backend, BackendSettings, ReqwestBackend};
pub use handle::TransportHandle;
pub use types::{
    BackendRequest, ChatReply, RequestId, SpiderConfig, StatusReply, TransportError,
    TransportReply,
};
