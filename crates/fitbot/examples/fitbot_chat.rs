//! # FitBot – terminal chat
//!
//! A minimal stand-in for the chat UI: reads a line, streams the coach's
//! reply as it grows and keeps the conversation as role/content records.
//!
//! ```bash
//! export GROQ_API_KEY=gsk_…      # or put it into .env
//! RUST_LOG=fitbot=debug cargo run -p fitbot --example fitbot_chat
//! ```
//!
//! An empty line is ignored; `/quit` or end of input exits.

use std::io::{self, BufRead, Write};

use fitbot::{FitBot, generic::Message, history::History, types::input::is_blank};
use futures_util::StreamExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let bot = match FitBot::from_env() {
        Ok(bot) => bot,
        Err(err) => {
            eprintln!("{}", fitbot::render_error(&err));
            return Ok(());
        }
    };

    let mut records: Vec<Message> = Vec::new();
    let stdin = io::stdin();

    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim_end_matches(['\r', '\n']).to_owned();
        if message == "/quit" {
            break;
        }
        if is_blank(&message) {
            continue;
        }

        print!("FitBot: ");
        io::stdout().flush()?;

        let mut reply = String::new();
        {
            let stream = bot.respond(message.clone(), History::Records(records.clone()));
            futures_util::pin_mut!(stream);
            while let Some(text) = stream.next().await {
                // Every item extends the previous one; print only what is new.
                print!("{}", text.get(reply.len()..).unwrap_or(&text));
                io::stdout().flush()?;
                reply = text;
            }
        }
        println!("\n");

        records.push(Message::user(message));
        records.push(Message::assistant(reply));
    }

    Ok(())
}
