use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use spider_chat_transport::{
    Backend, BackendRequest, SpiderConfig, TransportError, TransportHandle, TransportReply,
};

/// Records calls and answers with canned text; `stop_crawl` fails.
#[derive(Default)]
struct FakeBackend {
    calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl Backend for FakeBackend {
    async fn chat(&self, message: &str) -> Result<String, TransportError> {
        self.record(format!("chat:{message}"));
        Ok(format!("echo {message}"))
    }

    async fn start_crawl(&self, config: &SpiderConfig) -> Result<String, TransportError> {
        self.record(format!("start:{}:{}", config.urls.join(","), config.description));
        Ok("started".to_string())
    }

    async fn stop_crawl(&self) -> Result<String, TransportError> {
        self.record("stop".to_string());
        Err(TransportError::Network("connection refused".to_string()))
    }

    async fn update_keyword_mappings(&self, raw: &str) -> Result<String, TransportError> {
        self.record(format!("mappings:{raw}"));
        Ok("mappings ok".to_string())
    }

    async fn update_spider_rules(&self, raw: &str) -> Result<String, TransportError> {
        self.record(format!("rules:{raw}"));
        Ok("rules ok".to_string())
    }
}

fn collect(rx: &std::sync::mpsc::Receiver<TransportReply>, count: usize) -> Vec<TransportReply> {
    let mut replies: Vec<_> = (0..count)
        .map(|_| rx.recv_timeout(Duration::from_secs(5)).expect("reply"))
        .collect();
    replies.sort_by_key(|reply| reply.request_id);
    replies
}

#[test]
fn handle_routes_each_request_and_reports_by_id() {
    let backend = Arc::new(FakeBackend::default());
    let (handle, replies) = TransportHandle::new(backend.clone()).unwrap();

    handle.submit(
        1,
        BackendRequest::Chat {
            message: "hi".to_string(),
        },
    );
    handle.submit(
        2,
        BackendRequest::StartCrawl(SpiderConfig {
            urls: vec!["http://a".to_string(), "http://b".to_string()],
            description: "prices".to_string(),
        }),
    );
    handle.submit(3, BackendRequest::StopCrawl);
    handle.submit(
        4,
        BackendRequest::UpdateKeywordMappings {
            body: "{}".to_string(),
        },
    );
    handle.submit(
        5,
        BackendRequest::UpdateSpiderRules {
            body: "[]".to_string(),
        },
    );

    let replies = collect(&replies, 5);
    assert_eq!(
        replies,
        vec![
            TransportReply {
                request_id: 1,
                result: Ok("echo hi".to_string()),
            },
            TransportReply {
                request_id: 2,
                result: Ok("started".to_string()),
            },
            TransportReply {
                request_id: 3,
                result: Err(TransportError::Network("connection refused".to_string())),
            },
            TransportReply {
                request_id: 4,
                result: Ok("mappings ok".to_string()),
            },
            TransportReply {
                request_id: 5,
                result: Ok("rules ok".to_string()),
            },
        ]
    );

    let mut calls = backend.calls.lock().unwrap().clone();
    calls.sort();
    assert_eq!(
        calls,
        vec![
            "chat:hi",
            "mappings:{}",
            "rules:[]",
            "start:http://a,http://b:prices",
            "stop",
        ]
    );
}
