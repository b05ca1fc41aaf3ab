#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// 桩服务器收到的请求
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// 桩服务器的固定响应
#[derive(Clone)]
pub struct StubResponse {
    status: u16,
    body: String,
}

impl StubResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// 启动本地 HTTP 桩服务器
///
/// `/quiz/` 开头的路径返回 `quiz`，其余路径返回 `webhook`
pub async fn spawn_stub(quiz: StubResponse, webhook: StubResponse) -> (String, Arc<Mutex<Vec<Recorded>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorded = Arc::new(Mutex::new(Vec::new()));

    let log = Arc::clone(&recorded);
    tokio::spawn(async move {
        loop {
            let (stream, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => break,
            };
            let quiz = quiz.clone();
            let webhook = webhook.clone();
            let log = Arc::clone(&log);
            tokio::spawn(async move {
                handle_connection(stream, quiz, webhook, log).await;
            });
        }
    });

    (format!("http://{}", addr), recorded)
}

async fn handle_connection(
    mut stream: TcpStream,
    quiz: StubResponse,
    webhook: StubResponse,
    log: Arc<Mutex<Vec<Recorded>>>,
) {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();

    let mut content_length = 0;
    let mut content_type = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            if name == "content-length" {
                content_length = value.trim().parse().unwrap_or(0);
            } else if name == "content-type" {
                content_type = Some(value.trim().to_string());
            }
        }
    }

    while buffer.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }
    let body = buffer[header_end..].to_vec();

    let response = if path.starts_with("/quiz/") { quiz } else { webhook };
    log.lock().unwrap().push(Recorded {
        method,
        path,
        content_type,
        body,
    });

    let raw = format!(
        "HTTP/1.1 {} Stub\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.body.len(),
        response.body
    );
    let _ = stream.write_all(raw.as_bytes()).await;
    let _ = stream.shutdown().await;
}

pub fn question(id: &str, query: &str, answer: i64, options: &[&str]) -> Value {
    let options: Vec<_> = options
        .iter()
        .enumerate()
        .map(|(i, text)| json!({ "id": format!("opt{}", i), "text": text }))
        .collect();
    json!({
        "id": id,
        "structure": {
            "query": { "text": query },
            "answer": answer,
            "options": options
        }
    })
}

pub fn quiz_body(questions: Vec<Value>) -> String {
    json!({ "data": { "quiz": { "info": { "questions": questions } } } }).to_string()
}

pub fn sample_quiz() -> String {
    quiz_body(vec![
        question("b", "Capital of <b>France</b>?", 0, &["Paris", "London"]),
        question("a", "1+2=?", 1, &["3", "4"]),
    ])
}

/// 把配置写到临时文件，返回文件路径
pub fn write_config(name: &str, base_url: &str) -> PathBuf {
    let config = json!({
        "quiz_id": "quiz123",
        "webhook_url": format!("{}/api/webhooks/1/token", base_url),
        "webhook_name": "Quiz Bot",
        "profile_url": "https://example.com/avatar.png",
        "quiz_base_url": base_url,
        "request_timeout_secs": 5
    });
    let path = std::env::temp_dir().join(format!("{}-{}.json", name, std::process::id()));
    std::fs::write(&path, config.to_string()).unwrap();
    path
}
