//! Terminal front-end for localchat.
//!
//! A minimal line-based shell over the chat backend: pick a model, tweak
//! generation parameters, exchange messages. One exchange at a time — the
//! loop blocks on each completion, mirroring the one-request-per-action
//! session model.

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use localchat::chat::{catalog, ChatSession};
use localchat::config;
use localchat::ollama::{ChatClient, GenerationParameters, OllamaTransport, Role};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config_path = config::find_config_path(&cwd)?;
    let params = config::load_parameters(&config_path)?;

    init_tracing(params.app.debug);
    tracing::info!(config = %config_path.display(), endpoint = %params.endpoint(), "starting localchat");

    let transport = OllamaTransport::new(params.endpoint())?;
    let mut client = ChatClient::new(transport);
    let mut session = ChatSession::new(catalog::default_model());

    println!("localchat — talking to {}", params.endpoint());
    println!("model: {}  (/help for commands)", session.model());
    print_transcript_tail(&session, 1);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["/quit"] | ["/exit"] => break,
            ["/help"] => print_help(),
            ["/models"] => {
                for model in catalog::KNOWN_MODELS {
                    let marker = if model.id == session.model() { "*" } else { " " };
                    println!("{marker} {}", model.id);
                }
            }
            ["/model", id] => {
                session.set_model(*id);
                println!("model: {id}");
            }
            ["/params"] => {
                let p = session.params();
                println!(
                    "max_tokens={} top_p={} temperature={}",
                    p.max_tokens, p.top_p, p.temperature
                );
            }
            ["/params", max_tokens, top_p, temperature] => {
                match parse_params(max_tokens, top_p, temperature) {
                    Ok(p) => {
                        session.set_params(p);
                        println!(
                            "max_tokens={} top_p={} temperature={}",
                            p.max_tokens, p.top_p, p.temperature
                        );
                    }
                    Err(e) => println!("bad parameters: {e}"),
                }
            }
            ["/clear"] => {
                session.clear();
                print_transcript_tail(&session, 1);
            }
            [cmd, ..] if cmd.starts_with('/') => {
                println!("unknown command: {cmd} (/help for commands)");
            }
            _ => {
                println!("thinking...");
                match session.send(&mut client, input).await {
                    Ok(reply) => println!("{reply}"),
                    Err(e) => println!("error: {e}"),
                }
            }
        }
    }

    Ok(())
}

/// Parse the three `/params` arguments, clamping into the documented ranges.
fn parse_params(
    max_tokens: &str,
    top_p: &str,
    temperature: &str,
) -> anyhow::Result<GenerationParameters> {
    let params = GenerationParameters {
        max_tokens: max_tokens.parse().context("max_tokens must be an integer")?,
        top_p: top_p.parse().context("top_p must be a float")?,
        temperature: temperature.parse().context("temperature must be a float")?,
    };
    Ok(params.clamped())
}

/// Print the last `n` transcript turns.
fn print_transcript_tail(session: &ChatSession, n: usize) {
    let turns = session.transcript();
    for turn in turns.iter().skip(turns.len().saturating_sub(n)) {
        let who = match turn.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        println!("[{who}] {}", turn.content);
    }
}

fn print_help() {
    println!("/models                          list selectable models");
    println!("/model <id>                      switch model");
    println!("/params [max_tokens top_p temp]  show or set generation parameters");
    println!("/clear                           reset the transcript");
    println!("/quit                            exit");
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the default level comes from
/// `app.debug` in `parameters.yml`.
fn init_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if debug { "localchat=debug" } else { "localchat=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
