use fitbot::FitBot;
use fitbot::groq::GroqAdapterBuilder;
use fitbot::groq::error::MISSING_API_KEY_MESSAGE;
use fitbot::history::History;
use fitbot::types::fragments::PERSONA_INSTRUCTION;
use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn frame(text: &str) -> String {
    format!(
        "data: {}\n\n",
        json!({"choices": [{"index": 0, "delta": {"content": text}}]})
    )
}

fn bot(server: &MockServer) -> FitBot<fitbot::groq::GroqAdapter> {
    let backend = GroqAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .build()
        .expect("adapter with key");
    FitBot::new(backend)
}

async fn mount_reply(server: &MockServer, parts: &[&str]) {
    let mut body: String = parts.iter().map(|part| frame(part)).collect();
    body.push_str("data: [DONE]\n\n");
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(body),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn sent_messages(server: &MockServer) -> Vec<Value> {
    let requests = server.received_requests().await.expect("recording enabled");
    let body: Value = requests[0].body_json().expect("json body");
    body["messages"].as_array().cloned().expect("messages array")
}

#[tokio::test]
async fn first_turn_sends_persona_then_user_message() {
    let server = MockServer::start().await;
    mount_reply(&server, &["Welcome! ", "How old are you?"]).await;
    let bot = bot(&server);

    let shown: Vec<String> = bot.respond("hi", History::default()).collect().await;

    assert_eq!(shown, vec!["Welcome! ", "Welcome! How old are you?"]);
    assert_eq!(
        sent_messages(&server).await,
        vec![
            json!({"role": "system", "content": PERSONA_INSTRUCTION}),
            json!({"role": "user", "content": "hi"}),
        ]
    );
}

#[tokio::test]
async fn turn_pair_history_is_normalized_before_sending() {
    let server = MockServer::start().await;
    mount_reply(&server, &["Noted."]).await;
    let bot = bot(&server);

    let history = History::from_json(json!([
        ["I am 30, male, 180 cm, 82 kg", "Great, what is your goal?"],
        ["", "Still there?"],
        ["muscle gain", null]
    ]))
    .expect("turn pairs");

    let shown: Vec<String> = bot.respond("budget is low", history).collect().await;
    assert_eq!(shown, vec!["Noted."]);

    let messages = sent_messages(&server).await;
    assert_eq!(
        messages[1..],
        [
            json!({"role": "user", "content": "I am 30, male, 180 cm, 82 kg"}),
            json!({"role": "assistant", "content": "Great, what is your goal?"}),
            json!({"role": "assistant", "content": "Still there?"}),
            json!({"role": "user", "content": "muscle gain"}),
            json!({"role": "user", "content": "budget is low"}),
        ]
    );
}

#[tokio::test]
async fn record_history_is_sent_unchanged() {
    let server = MockServer::start().await;
    mount_reply(&server, &["ok"]).await;
    let bot = bot(&server);

    let history = History::from_json(json!([
        {"role": "user", "content": "hello"},
        {"role": "assistant", "content": "ok"}
    ]))
    .expect("records");

    let _: Vec<String> = bot.respond("next", history).collect().await;

    let messages = sent_messages(&server).await;
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[1], json!({"role": "user", "content": "hello"}));
    assert_eq!(messages[2], json!({"role": "assistant", "content": "ok"}));
}

#[tokio::test]
async fn upstream_rejection_is_rendered_as_the_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&server)
        .await;
    let bot = bot(&server);

    let shown: Vec<String> = bot.respond("hi", History::default()).collect().await;

    assert_eq!(shown, vec!["Groq error 401: invalid api key"]);
}

#[test]
fn missing_key_is_reported_before_any_request() {
    let err = GroqAdapterBuilder::new()
        .with_api_key("")
        .build()
        .err()
        .expect("blank key rejected");

    assert_eq!(fitbot::render_error(&err), MISSING_API_KEY_MESSAGE);
}

#[tokio::test]
async fn selected_model_reaches_the_wire() {
    let server = MockServer::start().await;
    mount_reply(&server, &["fast"]).await;
    let bot = bot(&server).with_model(fitbot::model::GroqModel::Llama3_1_8bInstant);

    let _: Vec<String> = bot.respond("quick tip", History::default()).collect().await;

    let requests = server.received_requests().await.expect("recording enabled");
    let body: Value = requests[0].body_json().expect("json body");
    assert_eq!(body["model"], "llama-3.1-8b-instant");
    assert_eq!(body["stream"], true);
}

#[tokio::test]
async fn connection_lost_mid_reply_keeps_text_and_appends_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        // Consume the whole request so closing sends a clean FIN.
        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        while !request_complete(&request) {
            let n = socket.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        let body = format!("{}data: {{\"choi", frame("A"));
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: text/event-stream\r\ncontent-length: 4096\r\n\r\n{body}"
        );
        socket.write_all(response.as_bytes()).await.expect("write response");
        socket.flush().await.expect("flush");
    });

    let backend = GroqAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(format!("http://{addr}"))
        .build()
        .expect("adapter with key");
    let bot = FitBot::new(backend);

    let shown: Vec<String> = bot.respond("hi", History::default()).collect().await;

    assert_eq!(shown.len(), 2, "{shown:?}");
    assert_eq!(shown[0], "A");
    assert!(shown[1].starts_with("A\n\nError: "), "{}", shown[1]);
}

fn request_complete(request: &[u8]) -> bool {
    let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&request[..end]).to_ascii_lowercase();
    let length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    request.len() >= end + 4 + length
}
