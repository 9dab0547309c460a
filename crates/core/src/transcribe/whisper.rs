use crate::transcribe::{load_canonical_waveform, TranscribeError, Transcriber};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::path::PathBuf;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

/// Whisper-backed speech transcriber.
///
/// The model is loaded at transcription time, not at construction, so
/// invocations that never touch audio never pay for the model file.
#[derive(Clone, Debug)]
pub struct WhisperTranscriber {
    model_path: String,
}

impl WhisperTranscriber {
    pub fn new(model_path: &str) -> Self {
        Self {
            model_path: model_path.to_owned(),
        }
    }

    fn run_model(&self, samples: &[f32]) -> Result<String, TranscribeError> {
        let ctx =
            WhisperContext::new_with_params(&self.model_path, WhisperContextParameters::default())
                .map_err(|e| TranscribeError::ModelLoad(e.to_string()))?;
        let mut state = ctx
            .create_state()
            .map_err(|e| TranscribeError::RecognitionFailed(e.to_string()))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        state
            .full(params, samples)
            .map_err(|e| TranscribeError::RecognitionFailed(e.to_string()))?;

        let mut transcript = String::new();
        for i in 0..state.full_n_segments() {
            if let Some(segment) = state.get_segment(i) {
                if !transcript.is_empty() {
                    transcript.push(' ');
                }
                transcript.push_str(segment.to_string().trim());
            }
        }
        Ok(transcript)
    }
}

impl Transcriber for WhisperTranscriber {
    fn transcribe(&self, waveform: PathBuf) -> BoxFuture<'_, Result<String, TranscribeError>> {
        let this = self.clone();
        async move {
            let samples = load_canonical_waveform(&waveform)?;
            tracing::debug!(
                waveform = %waveform.display(),
                samples = samples.len(),
                "running speech recognition"
            );
            tokio::task::spawn_blocking(move || this.run_model(&samples))
                .await
                .map_err(|e| TranscribeError::RecognitionFailed(e.to_string()))?
        }
        .boxed()
    }
}
