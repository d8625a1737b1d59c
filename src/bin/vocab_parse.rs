//! Vocabulary Parse CLI
//!
//! Parses sentences against a vocabulary and prints the matches as JSON.
//!
//! Usage:
//!   cargo run --features cli --bin vocab_parse -- \
//!     --vocabulary fixtures/es.json --language es --lemmatize \
//!     "Me gusta la pizza" "Nosotros hablamos mucho"
//!
//! Examples:
//!   # Batch statistics over sentences read from stdin
//!   cat sentences.txt | cargo run --features cli --bin vocab_parse -- \
//!     --vocabulary fixtures/es.json --stats
//!
//!   # Against the Postgres vocabulary table
//!   cargo run --features database,cli --bin vocab_parse -- \
//!     --database --language fr "Il y a beaucoup de monde"
//!
//!   # Inspect lemmas only
//!   cargo run --features cli --bin vocab_parse -- \
//!     --vocabulary fixtures/de.json --language de --lemmas "Du schreibst einen Brief"

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use vocab_tracker::{
    EngineConfig, InMemoryVocabularyStore, Language, VocabularyStore, VocabularyTrackingService,
};

/// Sentence-to-vocabulary matcher
#[derive(Parser, Debug)]
#[command(name = "vocab_parse")]
#[command(about = "Find vocabulary items and MWEs in sentences")]
struct Args {
    /// Sentences to parse (reads one per line from stdin when omitted)
    sentences: Vec<String>,

    /// Language code or name (es, fr, de, spanish, ...)
    #[arg(long, short = 'l', default_value = "es")]
    language: String,

    /// JSON file containing an array of vocabulary entries
    #[arg(long, short = 'v', env = "VOCAB_FILE")]
    vocabulary: Option<PathBuf>,

    /// Read vocabulary from the Postgres store (DATABASE_URL)
    #[cfg(feature = "database")]
    #[arg(long)]
    database: bool,

    /// Also resolve inflected forms to base-word matches
    #[arg(long)]
    lemmatize: bool,

    /// Print lemmas for each sentence instead of matches
    #[arg(long, conflicts_with = "stats")]
    lemmas: bool,

    /// Print batch parsing statistics instead of per-sentence results
    #[arg(long)]
    stats: bool,

    /// YAML file overriding the closed-class word tables
    #[arg(long, env = "VOCAB_BASIC_WORDS_PATH")]
    basic_words: Option<PathBuf>,
}

async fn open_store(args: &Args) -> Result<Arc<dyn VocabularyStore>> {
    #[cfg(feature = "database")]
    {
        use vocab_tracker::{PgVocabularyStore, StoreConfig};

        if args.database {
            let store = PgVocabularyStore::connect(StoreConfig::default())
                .await
                .context("connecting to vocabulary database")?;
            return Ok(Arc::new(store));
        }
    }

    let Some(path) = &args.vocabulary else {
        bail!("no vocabulary source: pass --vocabulary <FILE> or set VOCAB_FILE");
    };
    let store = InMemoryVocabularyStore::load_from_file(path)
        .with_context(|| format!("loading vocabulary from {}", path.display()))?;
    Ok(Arc::new(store))
}

fn read_sentences(args: &Args) -> Result<Vec<String>> {
    if !args.sentences.is_empty() {
        return Ok(args.sentences.clone());
    }
    let stdin = std::io::stdin();
    let mut sentences = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if !line.trim().is_empty() {
            sentences.push(line);
        }
    }
    Ok(sentences)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = EngineConfig::default();
    if let Some(path) = &args.basic_words {
        config = config.with_basic_words_path(path);
    }

    let store = open_store(&args).await?;
    let service = VocabularyTrackingService::with_config(store, config);
    let sentences = read_sentences(&args)?;

    if args.stats {
        let stats = service.parsing_stats(&sentences, &args.language).await;
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if args.lemmas {
        let language = Language::parse(&args.language)?;
        for sentence in &sentences {
            let lemmas = service.lemmatize_sentence(sentence, language).await;
            println!("{}", serde_json::to_string_pretty(&lemmas)?);
        }
        return Ok(());
    }

    for sentence in &sentences {
        let result = if args.lemmatize {
            service
                .parse_sentence_with_lemmatization(sentence.as_str(), &args.language)
                .await
        } else {
            service.parse_sentence(sentence.as_str(), &args.language).await
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
