use std::env;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tokio::net::TcpListener;

use speechwav::core::voices::DEFAULT_VOICE;
use speechwav::{ServerConfig, create_speech_client, generate_speech, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Handle CLI commands
    let mut args = env::args();
    let _ = args.next();
    if let Some(command) = args.next() {
        match command.as_str() {
            "synth" => {
                let mut voice = DEFAULT_VOICE.to_string();
                let mut output = PathBuf::from("speech.wav");
                let mut words: Vec<String> = Vec::new();

                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "-v" | "--voice" => {
                            voice = args
                                .next()
                                .ok_or_else(|| anyhow!("--voice requires a voice id"))?;
                        }
                        "-o" | "--output" => {
                            let path = args
                                .next()
                                .ok_or_else(|| anyhow!("--output requires a file path"))?;
                            output = PathBuf::from(path);
                        }
                        other if other.starts_with('-') => {
                            anyhow::bail!(
                                "Unknown option '{}'. Use --voice <id> or --output <file>",
                                other
                            );
                        }
                        _ => words.push(arg),
                    }
                }

                let text = words.join(" ");
                return synth(&text, &voice, &output).await;
            }
            other => {
                anyhow::bail!("Unknown command '{other}'. Supported commands: synth");
            }
        }
    }

    // Load configuration
    let config = ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;
    if config.get_api_key().is_err() {
        tracing::warn!("GEMINI_API_KEY is not set; synthesis requests will fail");
    }
    let address = config.address();
    println!("Starting server on {address}");

    // Create application state
    let app_state = AppState::new(config);

    let app = routes::api::create_api_router().with_state(app_state);

    // Create listener
    let listener = TcpListener::bind(&address).await?;

    println!("Server listening on {address}");

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}

/// Synthesize `text` once and write the WAV file to `output`.
async fn synth(text: &str, voice: &str, output: &Path) -> anyhow::Result<()> {
    let config = ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;
    let gemini_config = config.gemini_config().map_err(|e| anyhow!(e))?;
    let client = create_speech_client(gemini_config)?;

    let wav = generate_speech(client.as_ref(), text, voice).await?;
    tokio::fs::write(output, &wav)
        .await
        .map_err(|e| anyhow!("Failed to write to {}: {}", output.display(), e))?;

    tracing::info!("Wrote {} bytes to {}", wav.len(), output.display());
    println!("Audio written to {}", output.display());
    Ok(())
}
