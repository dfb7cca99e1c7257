use std::path::PathBuf;

use bge::prelude::*;
use itertools::Itertools;
use log::info;
use serde::Serialize;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "check",
    about = "Bipartiteness check and peer recommendations for user-item interaction data"
)]
struct Opts {
    /// Interaction file (one `LEFT,RIGHT` record per line); reads stdin if omitted
    #[structopt(short = "i", long)]
    input: Option<PathBuf>,

    /// Emit recommendations for these left-category identifiers
    #[structopt(short = "r", long = "recommend")]
    recommend: Vec<String>,

    /// Write a DOT rendering of the colored graph to this path
    #[structopt(long)]
    dot: Option<PathBuf>,

    /// Print the report as JSON instead of plain text
    #[structopt(long)]
    json: bool,
}

#[derive(Serialize)]
struct Recommendation<'a> {
    vertex: &'a str,
    items: Vec<&'a str>,
}

#[derive(Serialize)]
struct Report<'a> {
    bipartite: bool,
    stats: Stats,
    partition: Option<[Vec<&'a str>; 2]>,
    recommendations: Vec<Recommendation<'a>>,
}

fn load_graph(path: &Option<PathBuf>) -> anyhow::Result<InteractionGraph> {
    if let Some(path) = path {
        Ok(InteractionGraph::try_read_interaction_file(path)?)
    } else {
        let stdin = std::io::stdin().lock();
        Ok(InteractionGraph::try_read_interactions(stdin)?)
    }
}

fn print_plain(report: &Report) {
    let stats = &report.stats;
    println!(
        "{} vertices ({} left, {} right), {} edges, mean left degree {:.2}",
        stats.number_of_vertices,
        stats.number_of_left,
        stats.number_of_right,
        stats.number_of_edges,
        stats.mean_left_degree
    );

    if let Some([class_a, class_b]) = &report.partition {
        println!("graph is bipartite");
        println!("  class A: {}", class_a.join(", "));
        println!("  class B: {}", class_b.join(", "));
    } else {
        println!("graph is NOT bipartite (odd cycle found)");
    }

    for rec in &report.recommendations {
        println!("recommendations for {}: {}", rec.vertex, rec.items.join(", "));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::from_args();

    let graph = load_graph(&opts.input)?;
    let stats = graph.stats();
    info!(
        "loaded {} vertices ({} left, {} right), {} edges",
        stats.number_of_vertices, stats.number_of_left, stats.number_of_right, stats.number_of_edges
    );

    let (bipartite, colors) = graph.is_bipartite();

    let partition = bipartite.then(|| {
        let (class_a, class_b) = graph.partition_names(&colors);
        [
            class_a.into_iter().sorted().collect_vec(),
            class_b.into_iter().sorted().collect_vec(),
        ]
    });

    if let Some(path) = &opts.dot {
        let file = std::fs::File::create(path)?;
        graph.try_write_dot(std::io::BufWriter::new(file), &colors)?;
        info!("wrote DOT rendering to {}", path.display());
    }

    let recommendations = opts
        .recommend
        .iter()
        .map(|vertex| Recommendation {
            vertex: vertex.as_str(),
            items: graph.recommend(vertex).into_iter().sorted().collect_vec(),
        })
        .collect_vec();

    let report = Report {
        bipartite,
        stats,
        partition,
        recommendations,
    };

    if opts.json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &report)?;
        println!();
    } else {
        print_plain(&report);
    }

    Ok(())
}
