use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Result;
use chat_logging::{chat_debug, chat_info};
use spider_chat_core::{Effect, Msg};
use spider_chat_transport::{
    Backend, BackendRequest, SpiderConfig, TransportHandle, TransportReply,
};

use super::app::AppEvent;

pub struct EffectRunner {
    transport: TransportHandle,
}

impl EffectRunner {
    /// Starts the transport and forwards its replies into the app's event channel.
    pub fn new(backend: Arc<dyn Backend>, event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (transport, replies) = TransportHandle::new(backend)?;
        thread::spawn(move || {
            for reply in replies {
                if event_tx.send(AppEvent::Backend(reply_to_msg(reply))).is_err() {
                    break;
                }
            }
            chat_debug!("Reply forwarder stopped");
        });
        Ok(Self { transport })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            let request_id = effect.request_id();
            chat_info!(
                "Submitting {:?} request_id={}",
                effect.operation(),
                request_id
            );
            self.transport.submit(request_id, to_request(effect));
        }
    }
}

fn to_request(effect: Effect) -> BackendRequest {
    match effect {
        Effect::SendChat { message, .. } => BackendRequest::Chat { message },
        Effect::StartCrawl {
            urls, description, ..
        } => BackendRequest::StartCrawl(SpiderConfig { urls, description }),
        Effect::StopCrawl { .. } => BackendRequest::StopCrawl,
        Effect::UpdateKeywordMappings { body, .. } => {
            BackendRequest::UpdateKeywordMappings { body }
        }
        Effect::UpdateSpiderRules { body, .. } => BackendRequest::UpdateSpiderRules { body },
    }
}

fn reply_to_msg(reply: TransportReply) -> Msg {
    Msg::BackendReplied {
        request_id: reply.request_id,
        result: reply.result.map_err(|err| err.to_string()),
    }
}
