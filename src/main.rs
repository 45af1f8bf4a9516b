use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use branchwise::{branch_sums, classify, classify_sparse};

#[derive(Parser, Debug)]
#[command(
    name = "branchwise",
    about = "Classify which branch of a level-order binary tree is heavier"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a sequence as Left, Right, Equal, Empty, or Root.
    Classify {
        /// Values in level order, comma or whitespace separated (e.g. "3,6,2,9,-1,10").
        values: Option<String>,
        /// Read the sequence from a file instead (whitespace separated, any line layout).
        #[arg(long, conflicts_with = "values")]
        file: Option<PathBuf>,
        /// Treat `_` entries as explicitly absent nodes.
        #[arg(long)]
        sparse: bool,
    },
    /// Print the left and right branch sums without classifying.
    Sums {
        /// Values in level order, comma or whitespace separated.
        values: Option<String>,
        /// Read the sequence from a file instead.
        #[arg(long, conflicts_with = "values")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            values,
            file,
            sparse,
        } => run_classify(values, file, sparse)?,
        Commands::Sums { values, file } => run_sums(values, file)?,
    }

    Ok(())
}

fn run_classify(values: Option<String>, file: Option<PathBuf>, sparse: bool) -> Result<()> {
    let raw = read_input(values, file)?;

    let outcome = if sparse {
        let slots = parse_sparse(&raw)?;
        classify_sparse(&slots)?
    } else {
        let parsed = parse_values(&raw)?;
        classify(&parsed)?
    };

    println!("{outcome}");
    Ok(())
}

fn run_sums(values: Option<String>, file: Option<PathBuf>) -> Result<()> {
    let raw = read_input(values, file)?;
    let parsed = parse_values(&raw)?;
    let (left, right) = branch_sums(&parsed)?;

    println!("left={left}\tright={right}");
    Ok(())
}

fn read_input(values: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (values, file) {
        (Some(raw), _) => Ok(raw),
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read values from {}", path.display())),
        (None, None) => bail!("provide a sequence inline or via --file"),
    }
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

fn parse_values(raw: &str) -> Result<Vec<f64>> {
    tokens(raw)
        .enumerate()
        .map(|(idx, token)| {
            token
                .parse::<f64>()
                .with_context(|| format!("invalid value '{}' at position {}", token, idx + 1))
        })
        .collect()
}

fn parse_sparse(raw: &str) -> Result<Vec<Option<f64>>> {
    tokens(raw)
        .enumerate()
        .map(|(idx, token)| {
            if token == "_" {
                Ok(None)
            } else {
                token
                    .parse::<f64>()
                    .map(Some)
                    .with_context(|| format!("invalid value '{}' at position {}", token, idx + 1))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        let parsed = parse_values("3, 6,2\n9 -1,10").unwrap();
        assert_eq!(parsed, vec![3.0, 6.0, 2.0, 9.0, -1.0, 10.0]);
    }

    #[test]
    fn test_parse_values_rejects_garbage() {
        let err = parse_values("1,two,3").unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn test_parse_sparse_markers() {
        let parsed = parse_sparse("1,_,2").unwrap();
        assert_eq!(parsed, vec![Some(1.0), None, Some(2.0)]);
    }
}
