//! Edge-list input: one `from to [weight]` per line.
//!
//! Fields are whitespace-separated and the weight defaults to `1`. `#` starts a comment that
//! runs to the end of the line. A line holding a single token declares an isolated vertex.

use narwhal::graphlib::{Graph, GraphOptions};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    /// 1-based.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for InputError {}

pub fn parse_edge_list(text: &str, options: GraphOptions) -> Result<Graph<String, i64>, InputError> {
    let mut g: Graph<String, i64> = Graph::new(options);
    for (ix, raw) in text.lines().enumerate() {
        let line = raw.split_once('#').map_or(raw, |(head, _)| head);
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => {}
            [v] => {
                g.add_vertex(v.to_string());
            }
            [from, to] => {
                g.add_unweighted_edge(from.to_string(), to.to_string());
            }
            [from, to, weight] => {
                let weight = weight.parse::<i64>().map_err(|_| InputError {
                    line: ix + 1,
                    message: format!("invalid weight {weight:?}"),
                })?;
                g.add_edge(from.to_string(), to.to_string(), weight);
            }
            _ => {
                return Err(InputError {
                    line: ix + 1,
                    message: format!("expected `from to [weight]`, found {} fields", fields.len()),
                });
            }
        }
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_blank_lines_and_default_weights() {
        let text = "# header\n\nA B 4\nB C   # weight defaults to 1\nZ\n";
        let g = parse_edge_list(text, GraphOptions::directed()).unwrap();
        assert_eq!(g.vertex_list(), ["A", "B", "C", "Z"]);
        let weights: Vec<i64> = g.edges().map(|e| e.weight).collect();
        assert_eq!(weights, [4, 1]);
        assert!(g.neighbors(&"Z".to_string()).unwrap().next().is_none());
    }

    #[test]
    fn bad_weight_reports_its_line() {
        let err = parse_edge_list("A B 1\nB C x\n", GraphOptions::undirected()).unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.to_string(), "input line 2: invalid weight \"x\"");
    }

    #[test]
    fn too_many_fields_is_rejected() {
        let err = parse_edge_list("A B 1 2\n", GraphOptions::undirected()).unwrap_err();
        assert_eq!(err.line, 1);
    }
}
