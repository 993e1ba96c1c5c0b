//! wordpipe: tokenize a text file, print tokens or frequencies.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use wordpipe::freq;
use wordpipe::{Pipeline, PipelineConfig, StopwordSet, TokenizerStrategy};

#[derive(Parser)]
#[command(name = "wordpipe")]
#[command(about = "Tokenize a text file: split, lowercase, drop stop words")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the filtered tokens in document order.
    Tokens {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Print a JSON array instead of one token per line.
        #[arg(long)]
        json: bool,
    },

    /// Print how often each token occurs, most frequent first.
    Freq {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Only print the N most frequent tokens.
        #[arg(long, short = 'n')]
        top: Option<usize>,

        /// Print a JSON array of {token, count}.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct PipelineArgs {
    /// Text file to read (UTF-8).
    file: PathBuf,

    /// JSON pipeline config; flags below override it.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Tokenizer strategy.
    #[arg(long, short, value_enum)]
    tokenizer: Option<TokenizerStrategy>,

    /// Custom regex for the regex strategies.
    #[arg(long, short)]
    pattern: Option<String>,

    /// Stop-word file, one word per line.
    #[arg(long, short, conflicts_with = "no_stopwords")]
    stopwords: Option<PathBuf>,

    /// Keep stop words.
    #[arg(long)]
    no_stopwords: bool,

    /// Keep punctuation attached to whitespace-split tokens.
    #[arg(long)]
    keep_punctuation: bool,
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Tokens { pipeline, json } => {
            let tokens = run_pipeline(&pipeline)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                for token in tokens {
                    println!("{token}");
                }
            }
        }
        Command::Freq {
            pipeline,
            top,
            json,
        } => {
            let tokens = run_pipeline(&pipeline)?;
            let counts = top_counts(&tokens, top);
            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                for c in counts {
                    println!("{}\t{}", c.count, c.token);
                }
            }
        }
    }
    Ok(())
}

fn run_pipeline(args: &PipelineArgs) -> Result<Vec<String>, BoxError> {
    let config = build_config(args)?;
    log::info!("running {:?} pipeline on {}", config.tokenizer, args.file.display());
    let pipeline = Pipeline::new(&config)?;
    Ok(pipeline.run_file(&args.file)?)
}

/// Frequency report, cut to the `top` most frequent tokens when given.
fn top_counts(tokens: &[String], top: Option<usize>) -> Vec<freq::TokenCount> {
    let mut counts = freq::count(tokens);
    if let Some(n) = top {
        counts.truncate(n);
    }
    counts
}

fn build_config(args: &PipelineArgs) -> Result<PipelineConfig, BoxError> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(tokenizer) = args.tokenizer {
        config.tokenizer = tokenizer;
    }
    if let Some(pattern) = &args.pattern {
        config.pattern = Some(pattern.clone());
    }
    if let Some(path) = &args.stopwords {
        config.stopwords = Some(read_stopwords(path)?);
    }
    if args.no_stopwords {
        config.stopwords = Some(Vec::new());
    }
    if args.keep_punctuation {
        config.strip_punctuation = false;
    }
    Ok(config)
}

fn read_stopwords(path: &Path) -> Result<Vec<String>, BoxError> {
    let set = StopwordSet::parse(&wordpipe::load(path)?);
    log::debug!("{} stop words from {}", set.len(), path.display());
    Ok(set.iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn parse(args: &[&str]) -> PipelineArgs {
        let cli = Cli::try_parse_from(["wordpipe"].iter().chain(args)).unwrap();
        match cli.command {
            Command::Tokens { pipeline, .. } | Command::Freq { pipeline, .. } => pipeline,
        }
    }

    fn path(file: &NamedTempFile) -> &str {
        file.path().to_str().unwrap()
    }

    #[test]
    fn defaults_without_config() {
        let config = build_config(&parse(&["tokens", "in.txt"])).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn config_file_values_survive_without_flags() {
        let file = file_with(r#"{"tokenizer": "regex", "stopwords": ["fox"], "punctuation": "*"}"#);
        let config = build_config(&parse(&["tokens", "in.txt", "--config", path(&file)])).unwrap();
        assert_eq!(config.tokenizer, TokenizerStrategy::Regex);
        assert_eq!(config.stopwords, Some(vec!["fox".to_string()]));
        assert_eq!(config.punctuation.as_deref(), Some("*"));
    }

    #[test]
    fn flags_override_config_file() {
        let file = file_with(
            r#"{"tokenizer": "whitespace", "pattern": "[a-z]+", "strip_punctuation": true, "punctuation": "*"}"#,
        );
        let config = build_config(&parse(&[
            "tokens",
            "in.txt",
            "--config",
            path(&file),
            "--tokenizer",
            "regex-apostrophe",
            "--pattern",
            r"\d+",
            "--keep-punctuation",
        ]))
        .unwrap();
        assert_eq!(config.tokenizer, TokenizerStrategy::RegexApostrophe);
        assert_eq!(config.pattern.as_deref(), Some(r"\d+"));
        assert!(!config.strip_punctuation);
        assert_eq!(config.punctuation.as_deref(), Some("*"));
    }

    #[test]
    fn no_stopwords_clears_config_list() {
        let file = file_with(r#"{"stopwords": ["the", "fox"]}"#);
        let args = parse(&["tokens", "in.txt", "--config", path(&file), "--no-stopwords"]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.stopwords, Some(Vec::new()));

        let out = Pipeline::new(&config).unwrap().run_text("The fox and the dog");
        assert_eq!(out, ["the", "fox", "and", "the", "dog"]);
    }

    #[test]
    fn stopword_file_replaces_config_list() {
        let file = file_with(r#"{"stopwords": ["the"]}"#);
        let words = file_with("# animals\nFox\n\ndog\n");
        let args = parse(&["freq", "in.txt", "-c", path(&file), "-s", path(&words)]);
        let mut stopwords = build_config(&args).unwrap().stopwords.unwrap();
        stopwords.sort();
        assert_eq!(stopwords, ["dog", "fox"]);
    }

    #[test]
    fn stopword_file_conflicts_with_no_stopwords() {
        let result = Cli::try_parse_from([
            "wordpipe",
            "tokens",
            "in.txt",
            "--stopwords",
            "words.txt",
            "--no-stopwords",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_stopword_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("words.txt");
        let args = parse(&["tokens", "in.txt", "--stopwords", missing.to_str().unwrap()]);
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn top_truncates_frequency_report() {
        let tokens: Vec<String> = ["fox", "dog", "fox", "cat", "dog", "fox"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let top: Vec<(String, u32)> = top_counts(&tokens, Some(2))
            .into_iter()
            .map(|c| (c.token, c.count))
            .collect();
        assert_eq!(top, [("fox".to_string(), 3), ("dog".to_string(), 2)]);

        assert_eq!(top_counts(&tokens, None).len(), 3);
        assert_eq!(top_counts(&tokens, Some(10)).len(), 3);
        assert!(top_counts(&tokens, Some(0)).is_empty());
    }

    #[test]
    fn top_flag_parses() {
        let cli = Cli::try_parse_from(["wordpipe", "freq", "in.txt", "--top", "5"]).unwrap();
        assert!(matches!(cli.command, Command::Freq { top: Some(5), .. }));
    }
}
