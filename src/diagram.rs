/* Illustrative transition diagram. Every token becomes one edge leaving the start state: valid
 * tokens go to the accept state, invalid ones to the error sink. Nothing is simulated, the graph
 * only pictures the classification that already happened. */

use crate::analysis::Token;
use color_eyre::eyre::{Report, Result};
use log::{info, warn};
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::prelude::StableGraph;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// File the diagram is written to when no other path is given
pub const DEFAULT_DIAGRAM_FILE: &str = "diagrama_transiciones.dot";

/// Edge colours, picked by token position modulo the palette length
pub const PALETTE: [&str; 6] = ["blue", "orange", "green", "purple", "brown", "cyan"];

const SUMMARY_LABEL: &str = "Keyword, Identifier, Number, Operator";

const SUMMARY_COLOR: &str = "gray";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Start,
    Accept,
    Error,
}

impl State {
    /// Node identifier used in the DOT output
    pub fn name(&self) -> &'static str {
        match self {
            State::Start => "S0",
            State::Accept => "S1",
            State::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    label: String,
    color: &'static str,
    emphasized: bool,
}

impl Transition {
    pub fn get_label(&self) -> &str {
        &self.label
    }

    pub fn get_color(&self) -> &'static str {
        self.color
    }
}

/// List of possible errors while producing or rendering a diagram
#[derive(Debug)]
pub enum DiagramError {
    /// The Graphviz `dot` executable could not be started
    GraphvizNotFound,
    /// Graphviz ran but exited with a failure, carries its stderr
    RenderFailed(String),
    /// The requested output format is not a plain Graphviz format name
    InvalidFormat(String),
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::GraphvizNotFound => write!(
                f,
                "Error: Graphviz dot executable not found! Install graphviz to render diagrams"
            ),
            DiagramError::RenderFailed(stderr) => {
                write!(f, "Error: Graphviz failed to render the diagram! {}", stderr)
            }
            DiagramError::InvalidFormat(format) => {
                write!(f, "Error: {} is not a valid Graphviz output format!", format)
            }
        }
    }
}

impl std::error::Error for DiagramError {}

pub struct TransitionDiagram {
    graph: StableGraph<State, Transition>,
    caption: Vec<String>,
}

impl TransitionDiagram {
    /// Build the diagram for the tokens, in the order given
    pub fn new(tokens: &[Token]) -> Self {
        let mut graph = StableGraph::new();

        let start = graph.add_node(State::Start);
        let accept = graph.add_node(State::Accept);
        let error = graph.add_node(State::Error);

        graph.add_edge(
            start,
            accept,
            Transition {
                label: SUMMARY_LABEL.to_string(),
                color: SUMMARY_COLOR,
                emphasized: false,
            },
        );

        let mut caption: Vec<String> = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            let target = if token.get_category().is_valid() {
                accept
            } else {
                error
            };

            graph.add_edge(
                start,
                target,
                Transition {
                    label: token.get_token().to_string(),
                    color: PALETTE[index % PALETTE.len()],
                    emphasized: true,
                },
            );

            caption.push(format!("{} => {}", token.get_token(), token.get_category()));
        }

        TransitionDiagram { graph, caption }
    }

    pub fn get_graph(&self) -> &StableGraph<State, Transition> {
        &self.graph
    }

    /// Transitions in insertion order, the summary edge first
    pub fn transitions(&self) -> Vec<(State, State, &Transition)> {
        self.graph
            .edge_indices()
            .filter_map(|edge_idx: EdgeIndex| {
                let (from, to): (NodeIndex, NodeIndex) = self.graph.edge_endpoints(edge_idx)?;
                Some((self.graph[from], self.graph[to], &self.graph[edge_idx]))
            })
            .collect()
    }

    /// Write the diagram in DOT syntax
    pub fn write_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "digraph automata {{")?;
        writeln!(out, "    rankdir=LR;")?;
        writeln!(out, "    size=\"10,5\";")?;
        writeln!(
            out,
            "    node [shape = circle, style=filled, fillcolor=white];"
        )?;

        let start = State::Start.name();
        let accept = State::Accept.name();
        let error = State::Error.name();

        writeln!(out, "    {start} [label=\"{start}\"]")?;
        writeln!(out, "    {accept} [label=\"{accept}\"]")?;
        writeln!(
            out,
            "    {error} [shape=doublecircle, color=red, fillcolor=mistyrose, label=\"{error}\"]"
        )?;
        writeln!(
            out,
            "    {accept} [shape=doublecircle, color=green, fillcolor=lightgreen]"
        )?;

        for (from, to, transition) in self.transitions() {
            let label = escape(&transition.label);
            if transition.emphasized {
                writeln!(
                    out,
                    "    {} -> {} [label=\"{}\", color={}, penwidth=2.0]",
                    from.name(),
                    to.name(),
                    label,
                    transition.color
                )?;
            } else {
                writeln!(
                    out,
                    "    {} -> {} [label=\"{}\", color={}]",
                    from.name(),
                    to.name(),
                    label,
                    transition.color
                )?;
            }
        }

        writeln!(out, "    labelloc=\"t\";")?;
        writeln!(out, "    label=\"Processed tokens: ")?;
        for line in self.caption.iter() {
            writeln!(out, "  {}\\n", escape(line))?;
        }
        writeln!(out, "\";")?;
        writeln!(out, "}}")?;

        Ok(())
    }

    /// Write the diagram to `file_path`, replacing whatever was there
    pub fn save(&self, file_path: &Path) -> Result<()> {
        let file = File::create(file_path)?;
        let mut writer = BufWriter::new(file);

        self.write_dot(&mut writer)?;
        writer.flush()?;

        info!("Transition diagram saved as {}", file_path.display());
        Ok(())
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render a DOT file with Graphviz into `<dot file stem>.<format>` next to it and return the path
/// of the image.
pub fn render(dot_path: &Path, format: &str) -> Result<PathBuf> {
    if format.is_empty() || !format.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        return Err(Report::new(DiagramError::InvalidFormat(format.to_string())));
    }

    let image_path = dot_path.with_extension(format);

    let output = Command::new("dot")
        .arg(format!("-T{}", format))
        .arg(dot_path)
        .arg("-o")
        .arg(&image_path)
        .output();

    let output = match output {
        Ok(output) => output,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!("Graphviz dot executable is not on the PATH");
            return Err(Report::new(DiagramError::GraphvizNotFound));
        }
        Err(err) => return Err(Report::new(err)),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Report::new(DiagramError::RenderFailed(stderr)));
    }

    info!("Diagram rendered as {}", image_path.display());
    Ok(image_path)
}
