// WHY: Async document loading for the CLI; documents are read whole so char offsets map onto the file
// Unreadable inputs are skipped with stats unless fail_fast is set

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for document reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for a single document read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub source: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Async reader that loads whole legal documents as UTF-8 text
pub struct AsyncDocumentReader {
    config: ReaderConfig,
}

impl AsyncDocumentReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read one document; with fail_fast off, failures come back as empty text plus stats
    pub async fn read_document<P: AsRef<Path>>(&self, path: P) -> Result<(String, ReadStats)> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of document: {}", source);

        let result = async {
            let file = File::open(path)
                .await
                .with_context(|| format!("Failed to open document {source}"))?;
            let reader = BufReader::with_capacity(self.config.buffer_size, file);
            read_all(reader)
                .await
                .with_context(|| format!("Failed to read document {source} as UTF-8"))
        }
        .await;

        self.finish(source, start_time, result)
    }

    /// Read standard input as a single document
    pub async fn read_stdin(&self) -> Result<(String, ReadStats)> {
        let start_time = std::time::Instant::now();
        let reader = BufReader::with_capacity(self.config.buffer_size, tokio::io::stdin());
        let result = read_all(reader).await.context("Failed to read standard input as UTF-8");
        self.finish("<stdin>".to_string(), start_time, result)
    }

    /// Read documents sequentially, keeping memory bounded to one document at a time
    pub async fn read_documents_batch<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<Vec<(String, ReadStats)>> {
        info!("Starting batch read of {} documents", paths.len());

        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            results.push(self.read_document(path).await?);
        }

        info!("Completed batch read of {} documents", results.len());
        Ok(results)
    }

    fn finish(
        &self,
        source: String,
        start_time: std::time::Instant,
        result: Result<String>,
    ) -> Result<(String, ReadStats)> {
        let duration_ms = start_time.elapsed().as_millis() as u64;
        match result {
            Ok(text) => {
                info!("Read {}: {} bytes in {}ms", source, text.len(), duration_ms);
                let stats = ReadStats {
                    source,
                    bytes_read: text.len() as u64,
                    duration_ms,
                    read_error: None,
                };
                Ok((text, stats))
            }
            Err(e) if self.config.fail_fast => Err(e),
            Err(e) => {
                let error_msg = format!("{e:#}");
                warn!("{}", error_msg);
                let stats = ReadStats {
                    source,
                    bytes_read: 0,
                    duration_ms,
                    read_error: Some(error_msg),
                };
                Ok((String::new(), stats))
            }
        }
    }
}

async fn read_all<R: AsyncRead + Unpin>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text).await?;
    Ok(text)
}
