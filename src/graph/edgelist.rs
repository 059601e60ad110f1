//! Plain-text edge lists: one `u v [weight]` record per line.
//!
//! Blank lines and `#` comments are skipped and duplicate edges are ignored.
//! Node ids must cover `0..n` with every id touched by at least one edge;
//! the node count is then one past the largest id.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{NwiError, Result};

use super::types::{Graph, Topology, DEFAULT_WEIGHT};

/// Parses an edge list held in memory.
///
/// # Examples
///
/// ```
/// use nwi_vns::graph::{parse_edge_list, Topology};
///
/// let graph = parse_edge_list("0 1\n1 2\n# chord\n2 0 2.5\n").unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// ```
pub fn parse_edge_list(text: &str) -> Result<Graph> {
    let mut records = Vec::new();
    let mut ids = BTreeSet::new();
    // largest id and the first line it appears on
    let mut max_id: Option<(usize, usize)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.len() < 2 || fields.len() > 3 {
            return Err(NwiError::EdgeList {
                line,
                message: format!("expected `u v [weight]`, got {} field(s)", fields.len()),
            });
        }
        let u = parse_node(fields[0], line)?;
        let v = parse_node(fields[1], line)?;
        let weight = match fields.get(2) {
            Some(w) => w.parse::<f64>().map_err(|_| NwiError::EdgeList {
                line,
                message: format!("invalid weight `{w}`"),
            })?,
            None => DEFAULT_WEIGHT,
        };
        if u == v {
            return Err(NwiError::EdgeList {
                line,
                message: format!("self-loop on node {u}"),
            });
        }
        let top = u.max(v);
        if max_id.map_or(true, |(m, _)| top > m) {
            max_id = Some((top, line));
        }
        ids.insert(u);
        ids.insert(v);
        records.push((line, u, v, weight));
    }

    let node_count = match max_id {
        Some((max, line)) => {
            // ids are distinct, so they fill 0..=max exactly when max == len - 1
            if max != ids.len() - 1 {
                let missing = ids
                    .iter()
                    .enumerate()
                    .find(|&(expected, &id)| id != expected)
                    .map_or(ids.len(), |(expected, _)| expected);
                return Err(NwiError::EdgeList {
                    line,
                    message: format!(
                        "node ids must be 0..{}; id {missing} has no incident edge",
                        ids.len()
                    ),
                });
            }
            ids.len()
        }
        None => 0,
    };
    let mut graph = Graph::new(node_count);
    for (line, u, v, weight) in records {
        graph
            .add_weighted_edge(u, v, weight)
            .map_err(|e| NwiError::EdgeList {
                line,
                message: e.to_string(),
            })?;
    }
    log::debug!(
        "parsed edge list: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads and parses an edge-list file.
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    parse_edge_list(&text)
}

fn parse_node(field: &str, line: usize) -> Result<usize> {
    field.parse::<usize>().map_err(|_| NwiError::EdgeList {
        line,
        message: format!("invalid node id `{field}`"),
    })
}
