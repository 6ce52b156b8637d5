//! Project ecology map
//!
//! Projects are nodes, coloured by the high-stress flag; non-neutral
//! off-diagonal impact cells are directed edges. Rendered as Graphviz DOT.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use ppa_core::{DashboardRow, Impact, ImpactMatrix};
use std::collections::HashMap;
use std::fmt;

/// Fill colour for high-stress projects
pub const HIGH_STRESS_FILL: &str = "#E74C3C";
/// Fill colour for every other project
pub const HEALTHY_FILL: &str = "#3498DB";
/// Synergy edge colour
pub const SYNERGY_COLOR: &str = "#2ECC71";
/// Conflict edge colour
pub const CONFLICT_COLOR: &str = "#E74C3C";

/// Legend shown next to the map
pub const SYSTEM_KEY: [(&str, &str); 4] = [
    ("Blue Box", "Healthy Project"),
    ("Red Box", "High Stress Project"),
    ("Green Line", "Synergy"),
    ("Red Dashed Line", "Conflict"),
];

/// A project node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    /// Project name, also the node label
    pub name: String,
    /// Stress above the session threshold
    pub high_stress: bool,
}

impl ProjectNode {
    /// Fill colour keyed by the high-stress flag
    #[inline]
    #[must_use]
    pub fn fill_color(&self) -> &'static str {
        if self.high_stress {
            HIGH_STRESS_FILL
        } else {
            HEALTHY_FILL
        }
    }
}

/// Stroke for one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeStyle {
    /// Line colour
    pub color: &'static str,
    /// Dashed rather than solid
    pub dashed: bool,
}

impl EdgeStyle {
    /// Style for an impact value; neutral cells have none
    #[must_use]
    pub fn for_impact(impact: Impact) -> Option<Self> {
        match impact {
            Impact::Synergy => Some(Self {
                color: SYNERGY_COLOR,
                dashed: false,
            }),
            Impact::Conflict => Some(Self {
                color: CONFLICT_COLOR,
                dashed: true,
            }),
            Impact::Neutral => None,
        }
    }
}

/// Directed graph of projects and their influences
#[derive(Debug, Clone, Default)]
pub struct EcologyMap {
    graph: DiGraph<ProjectNode, Impact>,
}

impl EcologyMap {
    /// Build from dashboard rows and the impact matrix
    ///
    /// Matrix cells naming a project without a row are skipped.
    #[must_use]
    pub fn build(rows: &[DashboardRow], matrix: &ImpactMatrix) -> Self {
        let mut graph = DiGraph::with_capacity(rows.len(), 0);
        let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(rows.len());

        for row in rows {
            let node = graph.add_node(ProjectNode {
                name: row.name.clone(),
                high_stress: row.high_stress,
            });
            index.insert(row.name.as_str(), node);
        }

        for edge in matrix.edges() {
            match (index.get(edge.source), index.get(edge.target)) {
                (Some(&from), Some(&to)) => {
                    graph.add_edge(from, to, edge.impact);
                }
                _ => tracing::warn!(
                    from = edge.source,
                    to = edge.target,
                    "Impact cell names an unknown project, skipped"
                ),
            }
        }

        Self { graph }
    }

    /// Number of project nodes
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of influence edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &ProjectNode> {
        self.graph.node_weights()
    }

    /// `(source, target, impact)` triples
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Impact)> {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].name.as_str(),
                self.graph[e.target()].name.as_str(),
                *e.weight(),
            )
        })
    }

    /// Number of synergy edges
    #[must_use]
    pub fn synergy_count(&self) -> usize {
        self.graph
            .edge_weights()
            .filter(|w| **w == Impact::Synergy)
            .count()
    }

    /// Number of conflict edges
    #[must_use]
    pub fn conflict_count(&self) -> usize {
        self.graph
            .edge_weights()
            .filter(|w| **w == Impact::Conflict)
            .count()
    }

    /// Graphviz DOT source
    #[must_use]
    pub fn to_dot(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EcologyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, "    rankdir=LR;")?;
        writeln!(f, "    bgcolor=\"transparent\";")?;

        for node in self.nodes() {
            let id = quote(&node.name);
            writeln!(
                f,
                "    {id} [label={id}, style=filled, fillcolor=\"{}\", fontcolor=white, shape=box];",
                node.fill_color()
            )?;
        }

        for (source, target, impact) in self.edges() {
            let Some(style) = EdgeStyle::for_impact(impact) else {
                continue;
            };
            write!(
                f,
                "    {} -> {} [color=\"{}\", penwidth=2",
                quote(source),
                quote(target),
                style.color
            )?;
            if style.dashed {
                write!(f, ", style=dashed")?;
            }
            writeln!(f, "];")?;
        }

        writeln!(f, "}}")
    }
}

fn quote(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 2);
    out.push('"');
    for c in id.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
