mod input;

use narwhal::components::{strongly_connected_components, topological_sort};
use narwhal::graphlib::{Edge, Graph, GraphOptions};
use narwhal::max_flow::{FlowResult, MaxFlow};
use narwhal::shortest_path::{ShortestPaths, dijkstra};
use narwhal::spanning_tree::{SpanningTree, kruskal, prim, prim_from};
use serde::Serialize;
use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type Network = Graph<String, i64>;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Input(input::InputError),
    Graph(narwhal::Error),
    Json(serde_json::Error),
    EmptyGraph,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Input(err) => write!(f, "{err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::EmptyGraph => write!(f, "graph has no vertices"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<input::InputError> for CliError {
    fn from(value: input::InputError) -> Self {
        Self::Input(value)
    }
}

impl From<narwhal::Error> for CliError {
    fn from(value: narwhal::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Info,
    Matrix,
    Bfs,
    Dfs,
    Dijkstra,
    Kruskal,
    Prim,
    MaxFlow,
    Scc,
    Topo,
    Demo,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "matrix" => Ok(Self::Matrix),
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "kruskal" => Ok(Self::Kruskal),
            "prim" => Ok(Self::Prim),
            "max-flow" | "maxflow" => Ok(Self::MaxFlow),
            "scc" => Ok(Self::Scc),
            "topo" | "toposort" => Ok(Self::Topo),
            "demo" => Ok(Self::Demo),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Option<Command>,
    input: Option<String>,
    directed: bool,
    json: bool,
    pretty: bool,
    start: Option<String>,
    source: Option<String>,
    sink: Option<String>,
}

#[derive(Serialize)]
struct InfoOut<'a> {
    directed: bool,
    vertices: Vec<&'a String>,
    edges: Vec<&'a Edge<String, i64>>,
}

#[derive(Serialize)]
struct TraversalOut<'a> {
    start: &'a str,
    order: Vec<String>,
}

#[derive(Serialize)]
struct ComponentsOut {
    components: Vec<Vec<String>>,
}

#[derive(Serialize)]
struct TopoOut {
    order: Vec<String>,
}

fn usage() -> &'static str {
    "narwhal-cli\n\
\n\
USAGE:\n\
  narwhal-cli info|matrix [--directed] [--json [--pretty]] [<path>|-]\n\
  narwhal-cli bfs|dfs|dijkstra [--directed] [--start <v>] [--json [--pretty]] [<path>|-]\n\
  narwhal-cli kruskal|prim [--start <v>] [--json [--pretty]] [<path>|-]\n\
  narwhal-cli max-flow --source <v> --sink <v> [--directed] [--json [--pretty]] [<path>|-]\n\
  narwhal-cli scc|topo --directed [--json [--pretty]] [<path>|-]\n\
  narwhal-cli demo\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input holds one edge per line: `from to [weight]`. The weight defaults to 1,\n\
    `#` starts a comment, and a single token declares an isolated vertex.\n\
  - Graphs are undirected unless --directed is given.\n\
  - --start defaults to the first vertex of the input.\n\
  - Set RUST_LOG=narwhal=debug to trace the algorithms on stderr.\n\
"
}

fn flag_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<String, CliError> {
    it.next().cloned().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--directed" => args.directed = true,
            "--json" => args.json = true,
            "--pretty" => {
                args.json = true;
                args.pretty = true;
            }
            "--start" => args.start = Some(flag_value(&mut it)?),
            "--source" => args.source = Some(flag_value(&mut it)?),
            "--sink" => args.sink = Some(flag_value(&mut it)?),
            "-" if args.command.is_some() && args.input.is_none() => {
                args.input = Some(a.clone());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            other if args.command.is_none() => {
                args.command = Some(other.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            other if args.input.is_none() => args.input = Some(other.to_string()),
            _ => return Err(CliError::Usage(usage())),
        }
    }

    if args.command.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn join<T: Display>(items: impl IntoIterator<Item = T>, sep: &str) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn start_vertex(g: &Network, start: Option<String>) -> Result<String, CliError> {
    match start {
        Some(v) => Ok(v),
        None => g.vertices().next().cloned().ok_or(CliError::EmptyGraph),
    }
}

fn network(options: GraphOptions, edges: &[(&str, &str, i64)]) -> Network {
    Graph::from_edges(
        options,
        edges
            .iter()
            .map(|&(from, to, w)| (from.to_string(), to.to_string(), w)),
    )
}

fn print_info(g: &Network) {
    let arrow = if g.is_directed() { "->" } else { "--" };
    println!("directed: {}", g.is_directed());
    println!("vertices ({}): {}", g.vertex_count(), join(g.vertices(), " "));
    println!("edges ({}):", g.edge_count());
    for e in g.edges() {
        println!("  {} {arrow} {} ({})", e.from, e.to, e.weight);
    }
}

fn print_matrix(g: &Network) {
    let m = g.adjacency_matrix();
    println!("  {}", join(&m.vertices, " "));
    for (v, row) in m.rows() {
        println!("{v} {}", join(row, " "));
    }
}

fn print_shortest_paths(sp: &ShortestPaths<String, i64>) {
    let mut rows: Vec<(&String, Option<i64>)> = sp.distances().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));
    for (v, d) in rows {
        match (d, sp.path(v)) {
            (Some(d), Some(path)) => {
                println!("To {v}: Distance = {d}, Path = {}", join(path, " -> "))
            }
            _ => println!("To {v}: No path exists"),
        }
    }
}

fn print_tree(tree: &SpanningTree<String, i64>) {
    for e in &tree.edges {
        println!("  {} - {} ({})", e.from, e.to, e.weight);
    }
    println!("Total weight: {}", tree.total_weight);
    if !tree.unreached.is_empty() {
        println!("Unreached: {}", join(&tree.unreached, " "));
    }
    if tree.component_count > 1 {
        println!("Trees in forest: {}", tree.component_count);
    }
}

fn print_flow(r: &FlowResult<String, i64>) {
    println!("Maximum flow: {}", r.value);
    println!("Flows:");
    for (u, v, f) in r.network.positive() {
        println!("  {u} -> {v}: {f}");
    }
    println!("Minimum cut (capacity {}):", r.cut_capacity());
    for e in &r.min_cut {
        println!("  {} -> {} ({})", e.from, e.to, e.weight);
    }
}

fn print_components(components: &[Vec<String>]) {
    for (i, c) in components.iter().enumerate() {
        println!("Component {}: {}", i + 1, join(c, " -> "));
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let Some(command) = args.command else {
        return Err(CliError::Usage(usage()));
    };
    if command == Command::Demo {
        return demo();
    }

    let text = read_input(args.input.as_deref())?;
    let options = if args.directed {
        GraphOptions::directed()
    } else {
        GraphOptions::undirected()
    };
    let g = input::parse_edge_list(&text, options)?;
    tracing::debug!(
        vertices = g.vertex_count(),
        edges = g.edge_count(),
        directed = g.is_directed(),
        "graph loaded"
    );

    match command {
        Command::Info => {
            if args.json {
                let out = InfoOut {
                    directed: g.is_directed(),
                    vertices: g.vertices().collect(),
                    edges: g.edges().collect(),
                };
                write_json(&out, args.pretty)?;
            } else {
                print_info(&g);
            }
        }
        Command::Matrix => {
            if args.json {
                write_json(&g.adjacency_matrix(), args.pretty)?;
            } else {
                print_matrix(&g);
            }
        }
        Command::Bfs | Command::Dfs => {
            let start = start_vertex(&g, args.start)?;
            let order = if command == Command::Bfs {
                g.bfs(&start)?
            } else {
                g.dfs(&start)?
            };
            if args.json {
                let out = TraversalOut {
                    start: &start,
                    order,
                };
                write_json(&out, args.pretty)?;
            } else {
                println!("{}", join(&order, " -> "));
            }
        }
        Command::Dijkstra => {
            let start = start_vertex(&g, args.start)?;
            let sp = dijkstra(&g, &start)?;
            if args.json {
                write_json(&sp, args.pretty)?;
            } else {
                print_shortest_paths(&sp);
            }
        }
        Command::Kruskal | Command::Prim => {
            let tree = match (command, &args.start) {
                (Command::Kruskal, _) => kruskal(&g)?,
                (_, Some(start)) => prim_from(&g, start)?,
                (_, None) => prim(&g)?,
            };
            if args.json {
                write_json(&tree, args.pretty)?;
            } else {
                print_tree(&tree);
            }
        }
        Command::MaxFlow => {
            let (Some(source), Some(sink)) = (&args.source, &args.sink) else {
                return Err(CliError::Usage(usage()));
            };
            let result = MaxFlow::new(&g)?.ford_fulkerson(source, sink)?;
            if args.json {
                write_json(&result, args.pretty)?;
            } else {
                print_flow(&result);
            }
        }
        Command::Scc => {
            let components = strongly_connected_components(&g);
            if args.json {
                write_json(&ComponentsOut { components }, args.pretty)?;
            } else {
                print_components(&components);
            }
        }
        Command::Topo => {
            let order = topological_sort(&g)?;
            if args.json {
                write_json(&TopoOut { order }, args.pretty)?;
            } else {
                println!("{}", join(&order, " -> "));
            }
        }
        Command::Demo => demo()?,
    }
    Ok(())
}

/// Walks through every algorithm on small hand-built graphs.
fn demo() -> Result<(), CliError> {
    println!("Creating a directed graph...");
    let g = network(
        GraphOptions::directed(),
        &[
            ("A", "B", 4),
            ("A", "C", 2),
            ("B", "C", 1),
            ("B", "D", 5),
            ("C", "D", 8),
            ("C", "E", 10),
            ("D", "E", 2),
            ("E", "D", 7),
        ],
    );
    println!("\nGraph Information:");
    print_info(&g);
    println!("\nAdjacency Matrix:");
    print_matrix(&g);
    let a = "A".to_string();
    println!("\nBFS starting from vertex 'A':");
    println!("{}", join(g.bfs(&a)?, " -> "));
    println!("\nDFS starting from vertex 'A':");
    println!("{}", join(g.dfs(&a)?, " -> "));
    println!("\nDijkstra's Shortest Paths from vertex 'A':");
    print_shortest_paths(&dijkstra(&g, &a)?);

    println!("\nExample 1: Finding Strongly Connected Components");
    println!("{}", "-".repeat(50));
    let sccs = network(
        GraphOptions::directed(),
        &[
            ("A", "B", 1),
            ("B", "C", 1),
            ("C", "A", 1),
            ("B", "D", 1),
            ("D", "E", 1),
            ("E", "F", 1),
            ("F", "D", 1),
            ("G", "F", 1),
            ("G", "H", 1),
            ("H", "I", 1),
            ("I", "J", 1),
            ("J", "G", 1),
        ],
    );
    print_components(&strongly_connected_components(&sccs));

    println!("\nExample 2: Topological Sort");
    println!("{}", "-".repeat(50));
    let dag = network(
        GraphOptions::directed(),
        &[
            ("A", "B", 1),
            ("A", "C", 1),
            ("B", "D", 1),
            ("C", "D", 1),
            ("D", "E", 1),
            ("E", "F", 1),
            ("G", "E", 1),
        ],
    );
    println!("{}", join(topological_sort(&dag)?, " -> "));

    println!("\nExample 3: Graph with Cycles");
    println!("{}", "-".repeat(50));
    let cyclic = network(
        GraphOptions::directed(),
        &[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)],
    );
    match topological_sort(&cyclic) {
        Ok(order) => println!("{}", join(order, " -> ")),
        Err(err) => println!("Topological sort not possible: {err}"),
    }

    println!("\nMinimum Spanning Tree");
    println!("{}", "-".repeat(50));
    let weighted = network(
        GraphOptions::undirected(),
        &[
            ("A", "B", 4),
            ("A", "C", 2),
            ("B", "C", 1),
            ("B", "D", 5),
            ("C", "D", 8),
            ("C", "E", 10),
            ("D", "E", 2),
            ("E", "F", 5),
            ("D", "F", 6),
            ("B", "F", 2),
        ],
    );
    println!("Kruskal:");
    print_tree(&kruskal(&weighted)?);
    println!("Prim:");
    print_tree(&prim(&weighted)?);

    println!("\nMaximum Flow from S to T");
    println!("{}", "-".repeat(50));
    let flow = network(
        GraphOptions::directed(),
        &[
            ("S", "A", 10),
            ("S", "B", 8),
            ("A", "C", 4),
            ("A", "D", 2),
            ("B", "C", 9),
            ("B", "D", 9),
            ("C", "T", 10),
            ("D", "T", 10),
        ],
    );
    let result = MaxFlow::new(&flow)?.ford_fulkerson(&"S".to_string(), &"T".to_string())?;
    print_flow(&result);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err @ (CliError::Usage(_) | CliError::Input(_))) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
