use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordchain_core::{ChainSampler, WordGraph, WordPairRepository, new_chain};

pub async fn run(
    repository: &dyn WordPairRepository,
    seed: Option<u64>,
    max_attempts: usize,
) -> Result<()> {
    let pairs = repository.list_all().await?;
    let sampler = ChainSampler {
        max_attempts,
        ..ChainSampler::default()
    };

    let chain = match seed {
        Some(seed) => new_chain(&pairs, sampler, &mut StdRng::seed_from_u64(seed))?,
        None => new_chain(&pairs, sampler, &mut rand::thread_rng())?,
    };

    println!("{}", chain.words().join(" -> "));
    println!("Hints: {}", chain.hints().join(", "));
    Ok(())
}

pub async fn stats(repository: &dyn WordPairRepository) -> Result<()> {
    let pairs = repository.list_all().await?;
    let graph = WordGraph::from_pairs(&pairs);
    let report = Stats::of(&graph, pairs.len());

    println!("Pairs:       {}", report.pairs);
    println!("Start words: {}", report.start_words);
    println!("Edges:       {}", report.edges);
    println!("Dead ends:   {}", report.dead_ends);
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
struct Stats {
    pairs: usize,
    start_words: usize,
    edges: usize,
    /// Successor words that have no successors of their own.
    dead_ends: usize,
}

impl Stats {
    fn of(graph: &WordGraph, pairs: usize) -> Self {
        let mut targets: Vec<&str> = graph
            .words()
            .flat_map(|w| graph.successors(w).iter().map(String::as_str))
            .filter(|t| graph.successors(t).is_empty())
            .collect();
        targets.sort_unstable();
        targets.dedup();

        Self {
            pairs,
            start_words: graph.len(),
            edges: graph.edge_count(),
            dead_ends: targets.len(),
        }
    }
}
