use anyhow::{Context, Result, bail};
use std::path::Path;
use wordchain_core::{WordPair, WordPairRepository};
use wordchain_infrastructure::dto::WordPairsDocument;

pub async fn add(repository: &dyn WordPairRepository, first: &str, second: &str) -> Result<()> {
    let pair = parse_pair_words(first, second)?;
    repository.add_all(std::slice::from_ref(&pair)).await?;
    println!("Added: {} -> {}", pair.first_word, pair.second_word);
    Ok(())
}

pub async fn list(repository: &dyn WordPairRepository) -> Result<()> {
    let pairs = repository.list_all().await?;
    for pair in &pairs {
        println!("{} -> {}", pair.first_word, pair.second_word);
    }
    println!("{} pair(s)", pairs.len());
    Ok(())
}

pub async fn import(repository: &dyn WordPairRepository, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let pairs = if file.extension().is_some_and(|ext| ext == "toml") {
        let doc: WordPairsDocument = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", file.display()))?;
        doc.into_pairs()
    } else {
        parse_text(&content)?
    };

    let added = repository.add_all(&pairs).await?;
    println!("Imported {} pair(s) from {}", added, file.display());
    Ok(())
}

pub async fn clear(repository: &dyn WordPairRepository, yes: bool) -> Result<()> {
    if !yes {
        bail!("refusing to clear the store without --yes");
    }
    repository.clear().await?;
    println!("Cleared all pairs");
    Ok(())
}

fn parse_pair_words(first: &str, second: &str) -> Result<WordPair> {
    let (first, second) = (first.trim(), second.trim());
    if first.is_empty() || second.is_empty() {
        bail!("both words are required");
    }
    Ok(WordPair::new(first, second))
}

/// Parses one pair per line.
///
/// Accepted separators are `->`, `,`, a tab or plain whitespace. Blank lines
/// and lines starting with `#` are skipped.
pub fn parse_text(content: &str) -> Result<Vec<WordPair>> {
    let mut pairs = Vec::new();
    for (number, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = if line.contains("->") {
            line.split("->").collect()
        } else if line.contains(',') {
            line.split(',').collect()
        } else {
            line.split_whitespace().collect()
        };

        match parts.as_slice() {
            [first, second] => pairs.push(
                parse_pair_words(first, second)
                    .with_context(|| format!("line {}: {:?}", number + 1, raw))?,
            ),
            _ => bail!("line {}: expected two words, got {:?}", number + 1, raw),
        }
    }
    Ok(pairs)
}
