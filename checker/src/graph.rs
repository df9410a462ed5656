//! Bipartite symptom → disease graph.
//!
//! Symptoms sit in the left column, matched disease SQFs in the right one, and
//! an edge joins a prime to every SQF it divides.

use crate::{Encoding, Prime, Sqf};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

const ROW_HEIGHT: f64 = 64.0;
const TOP: f64 = 80.0;
const LEFT_X: f64 = 320.0;
const RIGHT_X: f64 = 640.0;
const WIDTH: f64 = 1000.0;
const NODE_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    /// Prime for symptom nodes, SQF for disease nodes.
    pub value: Sqf,
    /// One entry per line.
    pub label: Vec<String>,
    /// Column: 0 for symptoms, 1 for diseases.
    pub x: u8,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub symptom: usize,
    pub disease: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLayout {
    pub symptoms: Vec<GraphNode>,
    pub diseases: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphLayout {
    /// Lay out `primes` against `matched_sqfs`. Both are deduplicated and sorted;
    /// returns `None` if either side is empty.
    pub fn build(primes: &[Prime], matched_sqfs: &[Sqf], encoding: &Encoding) -> Option<Self> {
        let primes: BTreeSet<Prime> = primes.iter().copied().collect();
        let sqfs: BTreeSet<Sqf> = matched_sqfs.iter().copied().collect();
        if primes.is_empty() || sqfs.is_empty() {
            return None;
        }

        let symptoms: Vec<GraphNode> = primes
            .iter()
            .enumerate()
            .map(|(y, &p)| GraphNode {
                value: Sqf::from(p),
                label: vec![format!("{} ({p})", encoding.symptom_of(p).unwrap_or("?"))],
                x: 0,
                y,
            })
            .collect();
        let diseases: Vec<GraphNode> = sqfs
            .iter()
            .enumerate()
            .map(|(y, &sqf)| {
                let mut label: Vec<String> = match encoding.diseases_with(sqf) {
                    [] => vec!["?".to_string()],
                    names => names.to_vec(),
                };
                label.push(format!("(SQF: {sqf})"));
                GraphNode { value: sqf, label, x: 1, y }
            })
            .collect();

        let mut edges = Vec::new();
        for (i, s) in symptoms.iter().enumerate() {
            for (j, d) in diseases.iter().enumerate() {
                if s.value != 0 && d.value % s.value == 0 {
                    edges.push(GraphEdge { symptom: i, disease: j });
                }
            }
        }
        Some(Self { symptoms, diseases, edges })
    }

    pub fn rows(&self) -> usize {
        self.symptoms.len().max(self.diseases.len())
    }

    pub fn svg(&self) -> Svg<'_> {
        Svg(self)
    }

    pub fn to_svg(&self) -> String {
        self.svg().to_string()
    }
}

/// Standalone SVG rendering of a [`GraphLayout`].
pub struct Svg<'a>(&'a GraphLayout);

fn row_y(y: usize) -> f64 {
    TOP + y as f64 * ROW_HEIGHT
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        let height = TOP + graph.rows() as f64 * ROW_HEIGHT + 40.0;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{height}" viewBox="0 0 {WIDTH} {height}" font-family="sans-serif">"#
        )?;
        writeln!(
            f,
            r#"<text x="{}" y="32" text-anchor="middle" font-size="18">Symptom (Prime) -&gt; Disease (SQF) Connections</text>"#,
            WIDTH / 2.0
        )?;

        for edge in &graph.edges {
            let (s, d) = (&graph.symptoms[edge.symptom], &graph.diseases[edge.disease]);
            writeln!(
                f,
                r#"<line x1="{LEFT_X}" y1="{}" x2="{RIGHT_X}" y2="{}" stroke="grey" stroke-width="1" stroke-opacity="0.7"/>"#,
                row_y(s.y),
                row_y(d.y)
            )?;
        }

        for node in &graph.symptoms {
            write_node(f, node, LEFT_X, "skyblue", "end", LEFT_X - 2.0 * NODE_RADIUS)?;
        }
        for node in &graph.diseases {
            write_node(f, node, RIGHT_X, "lightcoral", "start", RIGHT_X + 2.0 * NODE_RADIUS)?;
        }

        writeln!(
            f,
            r#"<text x="{LEFT_X}" y="{}" text-anchor="middle" font-size="13">Input Symptoms</text>"#,
            height - 12.0
        )?;
        writeln!(
            f,
            r#"<text x="{RIGHT_X}" y="{}" text-anchor="middle" font-size="13">Potential Conditions</text>"#,
            height - 12.0
        )?;
        write!(f, "</svg>")
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &GraphNode, cx: f64, fill: &str, anchor: &str, text_x: f64) -> fmt::Result {
    let cy = row_y(node.y);
    writeln!(f, r#"<circle cx="{cx}" cy="{cy}" r="{NODE_RADIUS}" fill="{fill}" stroke="black"/>"#)?;
    // center multi-line labels on the node
    let first = cy - (node.label.len() as f64 - 1.0) * 6.5;
    write!(f, r#"<text x="{text_x}" y="{first}" text-anchor="{anchor}" dominant-baseline="middle" font-size="11">"#)?;
    for (i, line) in node.label.iter().enumerate() {
        let dy = if i == 0 { 0.0 } else { 13.0 };
        write!(f, r#"<tspan x="{text_x}" dy="{dy}">{}</tspan>"#, escape_xml(line))?;
    }
    writeln!(f, "</text>")
}

pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
