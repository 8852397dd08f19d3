use std::sync::{mpsc, Arc};
use std::thread;

use chat_logging::{chat_debug, chat_warn};

use crate::{Backend, BackendRequest, RequestId, TransportError, TransportReply};

enum TransportCommand {
    Submit {
        request_id: RequestId,
        request: BackendRequest,
    },
}

/// Runs backend requests on a private tokio runtime.
///
/// Requests run concurrently; replies arrive on the receiver returned by
/// [`TransportHandle::new`] in completion order.
pub struct TransportHandle {
    cmd_tx: mpsc::Sender<TransportCommand>,
}

impl TransportHandle {
    pub fn new(
        backend: Arc<dyn Backend>,
    ) -> Result<(Self, mpsc::Receiver<TransportReply>), TransportError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (reply_tx, reply_rx) = mpsc::channel();
        let runtime =
            tokio::runtime::Runtime::new().map_err(|err| TransportError::Client(err.to_string()))?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let reply_tx = reply_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, reply_tx).await;
                });
            }
            chat_debug!("Transport command channel closed");
        });

        Ok((Self { cmd_tx }, reply_rx))
    }

    pub fn submit(&self, request_id: RequestId, request: BackendRequest) {
        if self
            .cmd_tx
            .send(TransportCommand::Submit {
                request_id,
                request,
            })
            .is_err()
        {
            chat_warn!("Transport thread gone; dropping request_id={}", request_id);
        }
    }
}

async fn handle_command(
    backend: &dyn Backend,
    command: TransportCommand,
    reply_tx: mpsc::Sender<TransportReply>,
) {
    match command {
        TransportCommand::Submit {
            request_id,
            request,
        } => {
            let result = execute(backend, &request).await;
            let _ = reply_tx.send(TransportReply { request_id, result });
        }
    }
}

async fn execute(
    backend: &dyn Backend,
    request: &BackendRequest,
) -> Result<String, TransportError> {
    match request {
        BackendRequest::Chat { message } => backend.chat(message).await,
        BackendRequest::StartCrawl(config) => backend.start_crawl(config).await,
        BackendRequest::StopCrawl => backend.stop_crawl().await,
        BackendRequest::UpdateKeywordMappings { body } => {
            backend.update_keyword_mappings(body).await
        }
        BackendRequest::UpdateSpiderRules { body } => backend.update_spider_rules(body).await,
    }
}
