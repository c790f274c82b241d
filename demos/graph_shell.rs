//! An interactive shell for building and querying a graph.
//!
//! Usage:
//!   cargo run --example graph_shell
//!   cargo run --example graph_shell -- --directed --verbose
//!   printf 'vertex A\nvertex B\nedge A B 3\nshow\n' | cargo run --example graph_shell
//!
//! Type `help` at the prompt for the list of commands.

use std::io::{self, BufRead, Write};

use clap::Parser;
use weighted_graph::{Graph, GraphError, Weight, tracing_support::init_logging};

/// Build a weighted graph one command at a time and run searches on it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start with a directed graph instead of an undirected one
    #[arg(long)]
    directed: bool,

    /// Log every mutation at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Keep vertices and edges when `mode` switches directedness
    #[arg(long)]
    keep_on_mode_switch: bool,
}

const HELP: &str = "\
commands:
  vertex A               add a vertex
  remove-vertex A        remove a vertex and its edges
  edge A B [WEIGHT]      add or replace an edge (weight defaults to 1)
  remove-edge A B        remove an edge
  adjacent A             list the targets of A's edges
  weight A B             show the weight of the edge from A to B
  dfs A | bfs A          traverse from A
  path A B               shortest path from A to B
  mode directed|undirected
  clear                  remove everything
  show                   print the graph
  components             list connected components
  help | quit";

/// The outcome of a command that did not fail.
enum Outcome {
    Continue,
    Quit,
}

#[derive(Debug)]
enum CommandError {
    Usage(&'static str),
    Unknown(String),
    BadWeight(String),
    Graph(GraphError),
}

impl From<GraphError> for CommandError {
    fn from(err: GraphError) -> Self {
        CommandError::Graph(err)
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(usage) => write!(f, "usage: {usage}"),
            CommandError::Unknown(command) => {
                write!(f, "unknown command '{command}' (try 'help')")
            }
            CommandError::BadWeight(text) => write!(f, "'{text}' is not a valid weight"),
            CommandError::Graph(err) => write!(f, "{err}"),
        }
    }
}

struct Shell {
    graph: Graph<String>,
    keep_on_mode_switch: bool,
}

impl Shell {
    fn run_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            return Ok(Outcome::Continue);
        };
        let graph = &mut self.graph;
        match (command, args) {
            ("vertex", [v]) => graph.add_vertex(v.to_string())?,
            ("vertex", _) => return Err(CommandError::Usage("vertex A")),
            ("remove-vertex", [v]) => graph.remove_vertex(&v.to_string())?,
            ("remove-vertex", _) => return Err(CommandError::Usage("remove-vertex A")),
            ("edge", [a, b]) => graph.add_unit_edge(&a.to_string(), &b.to_string())?,
            ("edge", [a, b, w]) => {
                let weight: Weight = w.parse().map_err(|_| CommandError::BadWeight(w.to_string()))?;
                if weight < 0 {
                    return Err(CommandError::BadWeight(w.to_string()));
                }
                graph.add_edge(&a.to_string(), &b.to_string(), weight)?
            }
            ("edge", _) => return Err(CommandError::Usage("edge A B [WEIGHT]")),
            ("remove-edge", [a, b]) => graph.remove_edge(&a.to_string(), &b.to_string())?,
            ("remove-edge", _) => return Err(CommandError::Usage("remove-edge A B")),
            ("adjacent", [v]) => println!("{}", graph.get_adjacent(&v.to_string())?.join(" ")),
            ("adjacent", _) => return Err(CommandError::Usage("adjacent A")),
            ("weight", [a, b]) => match graph.get_edge_weight(&a.to_string(), &b.to_string()) {
                Some(weight) => println!("{weight}"),
                None => println!("no edge"),
            },
            ("weight", _) => return Err(CommandError::Usage("weight A B")),
            ("dfs", [v]) => println!("{}", graph.dfs(&v.to_string())?.join(" ")),
            ("dfs", _) => return Err(CommandError::Usage("dfs A")),
            ("bfs", [v]) => println!("{}", graph.bfs(&v.to_string())?.join(" ")),
            ("bfs", _) => return Err(CommandError::Usage("bfs A")),
            ("path", [a, b]) => match graph.shortest_path(&a.to_string(), &b.to_string())? {
                Some(path) => println!("{} (cost {})", path.vertices().join(" -> "), path.cost()),
                None => println!("no path"),
            },
            ("path", _) => return Err(CommandError::Usage("path A B")),
            ("mode", [mode]) => {
                let directed = match *mode {
                    "directed" => true,
                    "undirected" => false,
                    _ => return Err(CommandError::Usage("mode directed|undirected")),
                };
                self.graph = if self.keep_on_mode_switch {
                    self.graph.copy_with_directedness(directed)
                } else {
                    Graph::new(directed)
                };
            }
            ("mode", _) => return Err(CommandError::Usage("mode directed|undirected")),
            ("clear", []) => graph.clear(),
            ("show", []) => print!("{graph}"),
            ("components", []) => print_components(graph),
            ("help", _) => println!("{HELP}"),
            ("quit" | "exit", _) => return Ok(Outcome::Quit),
            _ => return Err(CommandError::Unknown(command.to_string())),
        }
        Ok(Outcome::Continue)
    }
}

#[cfg(feature = "pathfinding")]
fn print_components(graph: &Graph<String>) {
    let mut components: Vec<Vec<String>> = if graph.is_directed() {
        graph.strongly_connected_components()
    } else {
        graph
            .connected_components()
            .into_iter()
            .map(|component| component.into_iter().collect())
            .collect()
    };
    for component in &mut components {
        component.sort();
    }
    components.sort();
    for component in components {
        println!("{{{}}}", component.join(", "));
    }
}

#[cfg(not(feature = "pathfinding"))]
fn print_components(_graph: &Graph<String>) {
    println!("components require the 'pathfinding' feature");
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut shell = Shell {
        graph: Graph::new(args.directed),
        keep_on_mode_switch: args.keep_on_mode_switch,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        let _ = stdout.flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Failed to read stdin: {err}");
                break;
            }
        }
        match shell.run_line(&line) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => break,
            Err(err) => println!("error: {err}"),
        }
    }
}
