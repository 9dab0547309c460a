#![deny(warnings)]

use anyhow::Context;
use clap::Parser;
use review_sentiment_core::config::{
    resolve_string_with_default, AppConfig, StdEnv, DEFAULT_LOG_LEVEL, DEFAULT_MODEL_PATH,
    ENV_WHISPER_MODEL_PATH,
};
use review_sentiment_core::extract::LopdfTextSource;
use review_sentiment_core::normalize::FfmpegNormalizer;
use review_sentiment_core::pipeline::{spawn_analysis, Pipeline};
use review_sentiment_core::score::SentimentIntensityScorer;
use review_sentiment_core::transcribe::WhisperTranscriber;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "review-sentiment")]
#[command(about = "Score reviews from a text, PDF, or audio file (extract->score->aggregate)")]
struct Args {
    /// Source file: .txt, .pdf, .mp3, .wav, .ogg, .aac, or .flac
    file: PathBuf,

    /// Path to the whisper.cpp model used for audio sources
    #[arg(long, env = ENV_WHISPER_MODEL_PATH)]
    model_path: Option<String>,

    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let env = StdEnv;
    let cfg = build_config(args, &env)?;

    tracing::info!(input = %cfg.input.display(), "starting analysis");

    let pipeline = Pipeline {
        pdf: LopdfTextSource,
        normalizer: FfmpegNormalizer,
        transcriber: WhisperTranscriber::new(&cfg.asr.model_path),
        scorer: SentimentIntensityScorer::new(),
    };

    let (handle, mut progress) = spawn_analysis(pipeline, cfg.input);

    // Read-only observer of the worker's progress surface.
    while let Some(update) = progress.recv().await {
        tracing::info!(
            phase = update.phase.number(),
            percent = update.percent,
            status = %update.status,
            "progress"
        );
    }

    let report = handle.await.context("analysis worker panicked")??;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn build_config(
    args: Args,
    env: &impl review_sentiment_core::config::Env,
) -> anyhow::Result<AppConfig> {
    let model_path = resolve_string_with_default(
        args.model_path,
        ENV_WHISPER_MODEL_PATH,
        env,
        DEFAULT_MODEL_PATH,
    );
    Ok(AppConfig::new(args.file, model_path)?)
}
