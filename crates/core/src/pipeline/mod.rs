use crate::classify::{aggregate, AnalysisReport};
use crate::extract::{self, ExtractError, PdfError, PdfTextSource};
use crate::format::{classify, FormatError, SourceFormat};
use crate::normalize::{AudioNormalizer, NormalizeError};
use crate::progress::{Phase, ProgressSender, ProgressUpdate};
use crate::score::SentimentIntensityScorer;
use crate::transcribe::{TranscribeError, Transcriber};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const PROGRESS_CHANNEL_CAPACITY: usize = 8;

#[derive(thiserror::Error, Debug)]
pub enum AnalyzeError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(#[from] FormatError),

    #[error("codec unavailable: {0}")]
    CodecUnavailable(String),

    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("transcription failed: {0}")]
    Transcription(#[from] TranscribeError),
}

impl From<NormalizeError> for AnalyzeError {
    fn from(err: NormalizeError) -> Self {
        match err {
            // Missing codec is a host configuration failure, kept distinct
            // from per-file extraction trouble.
            NormalizeError::CodecUnavailable(details) => AnalyzeError::CodecUnavailable(details),
            other => AnalyzeError::Extraction(ExtractError::Normalize(other)),
        }
    }
}

impl From<PdfError> for AnalyzeError {
    fn from(err: PdfError) -> Self {
        AnalyzeError::Extraction(ExtractError::Pdf(err))
    }
}

/// The full extract -> score -> aggregate pipeline over the three external
/// capabilities. All entities live for one invocation; nothing is retained
/// across runs.
pub struct Pipeline<P, N, T> {
    pub pdf: P,
    pub normalizer: N,
    pub transcriber: T,
    pub scorer: SentimentIntensityScorer,
}

impl<P, N, T> Pipeline<P, N, T>
where
    P: PdfTextSource,
    N: AudioNormalizer,
    T: Transcriber,
{
    /// Run one invocation, emitting Read and Score phase updates. The
    /// Finalize phase belongs to [`spawn_analysis`], which guarantees it on
    /// every exit path.
    pub async fn analyze(
        &self,
        source: PathBuf,
        progress: &ProgressSender,
    ) -> Result<AnalysisReport, AnalyzeError> {
        progress.send(Phase::Read, "reading source").await;
        let format = classify(&source)?;
        tracing::debug!(source = %source.display(), ?format, "source classified");
        let units = self.extract_units(source, format).await?;

        progress.send(Phase::Score, "scoring reviews").await;
        let report = aggregate(&units, &self.scorer);
        tracing::info!(
            units = units.len(),
            scored = report.labels.len(),
            "aggregation complete"
        );
        Ok(report)
    }

    async fn extract_units(
        &self,
        source: PathBuf,
        format: SourceFormat,
    ) -> Result<Vec<String>, AnalyzeError> {
        match format {
            SourceFormat::Text => Ok(extract::text_units(&source).await?),
            SourceFormat::Pdf => {
                let text = self.pdf.document_text(source).await?;
                Ok(extract::split_lines(&text))
            }
            SourceFormat::Audio(container) => {
                let waveform = if container.is_canonical() {
                    source
                } else {
                    self.normalizer.ensure_available().await?;
                    self.normalizer.normalize(source).await?
                };
                let transcript = self.transcriber.transcribe(waveform).await?;
                Ok(extract::split_sentences(&transcript))
            }
        }
    }
}

/// Spawn one dedicated background worker for a full invocation.
///
/// The worker is the sole writer of progress and of the result; the
/// returned receiver is a read-only observer surface. Whatever the outcome,
/// Finalize/100% is sent exactly once before the worker exits, and the
/// report triple is produced whole or not at all.
pub fn spawn_analysis<P, N, T>(
    pipeline: Pipeline<P, N, T>,
    source: PathBuf,
) -> (
    JoinHandle<Result<AnalysisReport, AnalyzeError>>,
    mpsc::Receiver<ProgressUpdate>,
)
where
    P: PdfTextSource + Send + Sync + 'static,
    N: AudioNormalizer + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    let (progress, rx) = ProgressSender::channel(PROGRESS_CHANNEL_CAPACITY);
    let handle = tokio::spawn(async move {
        let result = pipeline.analyze(source, &progress).await;
        let status = match &result {
            Ok(report) => format!("analysis complete: {} unit(s) scored", report.labels.len()),
            Err(e) => format!("analysis failed: {e}"),
        };
        progress.send(Phase::Finalize, status).await;
        result
    });
    (handle, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SentimentLabel;
    use crate::normalize::canonical_path;
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FakePdf {
        text: String,
    }

    impl PdfTextSource for FakePdf {
        fn document_text(&self, _path: PathBuf) -> BoxFuture<'_, Result<String, PdfError>> {
            let text = self.text.clone();
            async move { Ok(text) }.boxed()
        }
    }

    struct FakeNormalizer {
        available: bool,
        calls: Arc<AtomicUsize>,
    }

    impl FakeNormalizer {
        fn new(available: bool) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    available,
                    calls: Arc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl AudioNormalizer for FakeNormalizer {
        fn ensure_available(&self) -> BoxFuture<'_, Result<(), NormalizeError>> {
            let available = self.available;
            async move {
                if available {
                    Ok(())
                } else {
                    Err(NormalizeError::CodecUnavailable(
                        "ffmpeg executable not found".to_owned(),
                    ))
                }
            }
            .boxed()
        }

        fn normalize(&self, source: PathBuf) -> BoxFuture<'_, Result<PathBuf, NormalizeError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(canonical_path(&source)) }.boxed()
        }
    }

    struct FakeTranscriber {
        transcript: String,
    }

    impl Transcriber for FakeTranscriber {
        fn transcribe(
            &self,
            _waveform: PathBuf,
        ) -> BoxFuture<'_, Result<String, TranscribeError>> {
            let transcript = self.transcript.clone();
            async move { Ok(transcript) }.boxed()
        }
    }

    fn pipeline_with(
        pdf_text: &str,
        normalizer: FakeNormalizer,
        transcript: &str,
    ) -> Pipeline<FakePdf, FakeNormalizer, FakeTranscriber> {
        Pipeline {
            pdf: FakePdf {
                text: pdf_text.to_owned(),
            },
            normalizer,
            transcriber: FakeTranscriber {
                transcript: transcript.to_owned(),
            },
            scorer: SentimentIntensityScorer::new(),
        }
    }

    fn default_pipeline() -> Pipeline<FakePdf, FakeNormalizer, FakeTranscriber> {
        pipeline_with("", FakeNormalizer::new(true).0, "")
    }

    async fn drain(mut rx: mpsc::Receiver<ProgressUpdate>) -> Vec<ProgressUpdate> {
        let mut updates = Vec::new();
        while let Some(update) = rx.recv().await {
            updates.push(update);
        }
        updates
    }

    fn temp_text_file(tag: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "review-sentiment-pipeline-{tag}-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("write temp file");
        path
    }

    #[tokio::test]
    async fn text_file_end_to_end() {
        let path = temp_text_file("e2e", "I love this!\n\nThis is terrible.\n");

        let (handle, rx) = spawn_analysis(default_pipeline(), path.clone());
        let updates = drain(rx).await;
        let report = handle.await.expect("join").expect("analyze");

        assert_eq!(report.scores, vec![0.6, -0.6]);
        assert_eq!(
            report.labels,
            vec![SentimentLabel::Positive, SentimentLabel::Negative]
        );
        assert_eq!(report.distribution[&SentimentLabel::Positive], 1);
        assert_eq!(report.distribution[&SentimentLabel::Negative], 1);

        let phases: Vec<Phase> = updates.iter().map(|u| u.phase).collect();
        assert_eq!(phases, vec![Phase::Read, Phase::Score, Phase::Finalize]);
        assert_eq!(updates.last().unwrap().percent, 100.0);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn unsupported_extension_still_finalizes_at_one_hundred() {
        let (handle, rx) = spawn_analysis(default_pipeline(), PathBuf::from("reviews.docx"));
        let updates = drain(rx).await;
        let err = handle.await.expect("join").unwrap_err();

        assert!(matches!(err, AnalyzeError::UnsupportedFormat(_)));

        let finalizes = updates
            .iter()
            .filter(|u| u.phase == Phase::Finalize)
            .count();
        assert_eq!(finalizes, 1);
        assert_eq!(updates.last().unwrap().percent, 100.0);
        // scoring was never reached
        assert!(updates.iter().all(|u| u.phase != Phase::Score));
    }

    #[tokio::test]
    async fn pdf_with_only_empty_pages_yields_empty_distribution() {
        let pipeline = pipeline_with("", FakeNormalizer::new(true).0, "");
        let (progress, _rx) = ProgressSender::channel(PROGRESS_CHANNEL_CAPACITY);

        let report = pipeline
            .analyze(PathBuf::from("reviews.pdf"), &progress)
            .await
            .expect("analyze");

        assert!(report.scores.is_empty());
        assert!(report.labels.is_empty());
        assert!(report.distribution.is_empty());
    }

    #[tokio::test]
    async fn pdf_lines_are_scored_in_document_order() {
        let pipeline = pipeline_with(
            "Great quality.\nAwful service.",
            FakeNormalizer::new(true).0,
            "",
        );
        let (progress, _rx) = ProgressSender::channel(PROGRESS_CHANNEL_CAPACITY);

        let report = pipeline
            .analyze(PathBuf::from("reviews.pdf"), &progress)
            .await
            .expect("analyze");

        assert_eq!(
            report.labels,
            vec![SentimentLabel::Positive, SentimentLabel::Negative]
        );
    }

    #[tokio::test]
    async fn lossy_audio_is_normalized_before_transcription() {
        let (normalizer, calls) = FakeNormalizer::new(true);
        let pipeline = pipeline_with("", normalizer, "Great product. Terrible support.");
        let (progress, _rx) = ProgressSender::channel(PROGRESS_CHANNEL_CAPACITY);

        let report = pipeline
            .analyze(PathBuf::from("call.mp3"), &progress)
            .await
            .expect("analyze");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // three raw units from the naive split, trailing blank excluded
        assert_eq!(report.labels.len(), 2);
        assert_eq!(
            report.labels,
            vec![SentimentLabel::Positive, SentimentLabel::Negative]
        );
    }

    #[tokio::test]
    async fn canonical_wav_skips_the_normalizer() {
        let (normalizer, calls) = FakeNormalizer::new(true);
        let pipeline = pipeline_with("", normalizer, "Lovely.");
        let (progress, _rx) = ProgressSender::channel(PROGRESS_CHANNEL_CAPACITY);

        let report = pipeline
            .analyze(PathBuf::from("call.wav"), &progress)
            .await
            .expect("analyze");

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(report.labels, vec![SentimentLabel::Positive]);
    }

    #[tokio::test]
    async fn missing_codec_surfaces_as_codec_unavailable() {
        let (normalizer, calls) = FakeNormalizer::new(false);
        let pipeline = pipeline_with("", normalizer, "irrelevant");

        let (handle, rx) = spawn_analysis(pipeline, PathBuf::from("call.mp3"));
        let updates = drain(rx).await;
        let err = handle.await.expect("join").unwrap_err();

        assert!(matches!(err, AnalyzeError::CodecUnavailable(_)));
        // detected before any per-file normalization attempt
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(updates.last().unwrap().percent, 100.0);
    }

    #[tokio::test]
    async fn repeated_audio_runs_are_deterministic() {
        let pipeline = pipeline_with(
            "",
            FakeNormalizer::new(true).0,
            "Good sound. Bad battery. Fine otherwise.",
        );
        let (progress, _rx) = ProgressSender::channel(PROGRESS_CHANNEL_CAPACITY);

        let first = pipeline
            .analyze(PathBuf::from("call.ogg"), &progress)
            .await
            .expect("first run");
        let second = pipeline
            .analyze(PathBuf::from("call.ogg"), &progress)
            .await
            .expect("second run");

        assert_eq!(first.labels.len(), second.labels.len());
        assert_eq!(first, second);
    }
}
