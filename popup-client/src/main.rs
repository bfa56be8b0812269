use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

mod state;

use state::{PopupEvent, PopupState};

const SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    topic: String,
}

#[derive(Debug, Deserialize)]
struct TitlesResponse {
    titles: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
}

struct PopupClient {
    client: Client,
}

impl PopupClient {
    fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn check_server_status(&self) {
        let url = format!("{}/health", SERVER_URL);

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<HealthResponse>().await {
                    Ok(health) if health.status == "OK" => {
                        let server_time = chrono::DateTime::parse_from_rfc3339(&health.timestamp)
                            .map(|t| t.to_rfc2822())
                            .unwrap_or(health.timestamp);
                        info!("Server is healthy (server time {})", server_time);
                    }
                    Ok(health) => {
                        warn!("Server reported unexpected status: {}", health.status);
                    }
                    Err(e) => {
                        warn!("Server health response was malformed: {}", e);
                    }
                }
            }
            Ok(response) => {
                warn!("Server is not responding properly: {}", response.status());
            }
            Err(_) => {
                warn!(
                    "Cannot connect to server. Please make sure the server is running on {}",
                    SERVER_URL
                );
            }
        }
    }

    async fn generate_titles(&self, topic: &str) -> Result<Vec<String>, String> {
        let url = format!("{}/api/generate-titles", SERVER_URL);
        let request = GenerateRequest {
            topic: topic.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|_| "Cannot connect to server".to_string())?;

        if response.status().is_success() {
            let body: TitlesResponse = response
                .json()
                .await
                .map_err(|e| format!("Malformed server response: {}", e))?;
            Ok(body.titles)
        } else {
            let status = response.status();
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("Failed to generate titles: {}", status));
            Err(message)
        }
    }
}

fn render(state: &PopupState) {
    match state {
        PopupState::Idle => {
            println!("Enter a topic and press Enter to see your results here");
        }
        PopupState::Loading => {
            println!("Generating...");
        }
        PopupState::Ready(titles) => {
            for (index, title) in titles.iter().enumerate() {
                println!("{}. {}", index + 1, title);
            }
        }
        PopupState::Failed(message) => {
            println!("Error: {}", message);
            println!("Failed to generate titles. Please check if the server is running.");
        }
    }
}

async fn generate_and_render(client: &PopupClient, topic: &str, state: PopupState) -> PopupState {
    let state = state.apply(PopupEvent::Submitted);
    render(&state);

    let event = match client.generate_titles(topic).await {
        Ok(titles) => PopupEvent::Succeeded(titles),
        Err(message) => PopupEvent::Failed(message),
    };

    let state = state.apply(event);
    render(&state);
    state
}

async fn run_interactive(client: &PopupClient) {
    let stdin = io::stdin();
    let mut state = PopupState::Idle;
    render(&state);

    loop {
        print!("topic> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        }

        match line.trim() {
            "quit" | "exit" => break,
            "clear" => {
                state = state.apply(PopupEvent::Cleared);
                render(&state);
            }
            "" => {
                println!("Please enter a topic first!");
            }
            topic => {
                state = generate_and_render(client, topic, state).await;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("popup_client=info")
        .init();

    let client = PopupClient::new();

    // Warn early when the server is down; generation stays available either way
    client.check_server_status().await;

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        run_interactive(&client).await;
    } else {
        let topic = args.join(" ");
        let topic = topic.trim();

        if topic.is_empty() {
            println!("Please enter a topic first!");
            std::process::exit(1);
        }

        generate_and_render(&client, topic, PopupState::Idle).await;
    }
}
