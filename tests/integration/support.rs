use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use acp_search::search::{SearchParams, SearchTransport, TransportFailure};
use acp_search::tooling::cli::{Commands, SearchArgs};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

/// Transport that records every parameter set and replies with a canned result.
pub struct RecordingTransport {
    reply: Result<Value, TransportFailure>,
    requests: Arc<Mutex<Vec<SearchParams>>>,
}

impl RecordingTransport {
    pub fn replying(body: Value) -> (Self, Arc<Mutex<Vec<SearchParams>>>) {
        Self::new(Ok(body))
    }

    pub fn failing(message: &str) -> (Self, Arc<Mutex<Vec<SearchParams>>>) {
        Self::new(Err(TransportFailure::new(message)))
    }

    fn new(reply: Result<Value, TransportFailure>) -> (Self, Arc<Mutex<Vec<SearchParams>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                reply,
                requests: Arc::clone(&requests),
            },
            requests,
        )
    }
}

#[async_trait]
impl SearchTransport for RecordingTransport {
    async fn get(&self, params: &SearchParams) -> Result<Value, TransportFailure> {
        self.requests.lock().push(params.clone());
        self.reply.clone()
    }
}

pub fn search_command(query: &str, args: SearchArgs) -> Commands {
    Commands::Search {
        query: query.split(' ').map(str::to_string).collect(),
        args,
        format: "text".to_string(),
    }
}

pub fn sample_agents() -> Value {
    json!({
        "data": [
            {
                "id": 101,
                "name": "A very long agent name exceeding twenty chars",
                "description": "Market making",
                "contractAddress": "0x01",
                "walletAddress": "0x02",
                "twitterHandle": "mm",
                "profilePic": "",
                "tokenAddress": null,
                "cluster": "OPENCLAW",
                "category": null,
                "symbol": null,
                "virtualAgentId": null,
                "isVirtualAgent": false,
                "metrics": {
                    "successfulJobCount": null,
                    "successRate": null,
                    "uniqueBuyerCount": null,
                    "minsFromLastOnlineTime": null,
                    "isOnline": true
                },
                "jobs": [],
                "resources": []
            },
            {
                "id": 7,
                "name": "Swapper",
                "description": "Token swaps",
                "contractAddress": "0x03",
                "walletAddress": "0x04",
                "twitterHandle": "swapper",
                "profilePic": "",
                "tokenAddress": "0x05",
                "cluster": null,
                "category": "DeFi",
                "symbol": "SWP",
                "virtualAgentId": 12,
                "isVirtualAgent": true,
                "metrics": {
                    "successfulJobCount": 40,
                    "successRate": 87.5,
                    "uniqueBuyerCount": 9,
                    "minsFromLastOnlineTime": 1,
                    "isOnline": false
                },
                "jobs": [],
                "resources": []
            }
        ]
    })
}

/// One-shot HTTP server. Returns the endpoint URL and a handle yielding the request line.
pub fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });
    (format!("http://{}/api/agents/v5/search", addr), handle)
}
