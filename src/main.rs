use anyhow::{Context, Result};
use clap::Parser;
use legal_segmenter::output::{self, OutputFormat};
use legal_segmenter::reader::{AsyncDocumentReader, ReaderConfig};
use legal_segmenter::{Segmenter, SegmenterConfig};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "legal-segmenter")]
#[command(about = "Split legal text into paragraphs and sentences")]
#[command(version)]
struct Args {
    /// Documents to segment; none or "-" reads standard input
    inputs: Vec<PathBuf>,

    /// Include char offsets and tokens in the result
    #[arg(long)]
    metadata: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// JSON segmenter configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// File of extra abbreviations, one per line
    #[arg(long)]
    abbreviations: Option<PathBuf>,

    /// Use only the supplied abbreviations, skipping the built-in lists
    #[arg(long)]
    override_builtin: bool,

    /// Directory holding replacement category files (case_names.txt, months.txt, ...)
    #[arg(long)]
    resource_dir: Option<PathBuf>,

    /// Abort on first unreadable input
    #[arg(long)]
    fail_fast: bool,
}

impl Args {
    fn segmenter_config(&self) -> Result<SegmenterConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Invalid segmenter config {}", path.display()))?
            }
            None => SegmenterConfig::default(),
        };

        if let Some(path) = &self.abbreviations {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read abbreviations {}", path.display()))?;
            config.abbreviations.extend(content.lines().map(|line| line.trim().to_string()));
        }
        if self.override_builtin {
            config.override_builtin = true;
        }
        if self.resource_dir.is_some() {
            config.resource_dir = self.resource_dir.clone();
        }
        Ok(config)
    }
}

fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: stdout carries segmentation output, so JSON logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    for input in &args.inputs {
        if !is_stdin(input) && !input.exists() {
            anyhow::bail!("Input does not exist: {}", input.display());
        }
    }
    if args.inputs.iter().filter(|input| is_stdin(input)).count() > 1 {
        anyhow::bail!("Standard input (-) can only be given once");
    }

    let segmenter = Segmenter::new(args.segmenter_config()?)?;
    let reader = AsyncDocumentReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        ..Default::default()
    });

    // Inputs keep their command-line order; "-" reads stdin in place
    let mut documents = Vec::with_capacity(args.inputs.len().max(1));
    if args.inputs.is_empty() {
        documents.push(reader.read_stdin().await?);
    }
    for input in &args.inputs {
        let document = if is_stdin(input) {
            reader.read_stdin().await?
        } else {
            reader.read_document(input).await?
        };
        documents.push(document);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut total_sentences = 0;

    for (text, stats) in documents {
        if stats.read_error.is_some() {
            continue;
        }
        let result = segmenter.segment_as(&text, args.metadata || args.format == OutputFormat::Tsv);
        total_sentences += result.sentence_count();
        info!(
            source = %stats.source,
            paragraphs = result.paragraph_count(),
            sentences = result.sentence_count(),
            "Document segmented"
        );
        out.write_all(output::render(&result, args.format)?.as_bytes())?;
    }

    out.flush()?;
    info!(total_sentences, "Segmentation finished");
    Ok(())
}
