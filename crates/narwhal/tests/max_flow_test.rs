use narwhal::graphlib::{Error, Graph, GraphOptions};
use narwhal::max_flow::{AugmentingPath, FlowResult, MaxFlow};

fn simple_network() -> Graph<&'static str, i64> {
    Graph::from_edges(
        GraphOptions::directed(),
        [
            ("S", "A", 10),
            ("S", "B", 8),
            ("A", "C", 4),
            ("A", "D", 2),
            ("B", "C", 9),
            ("B", "D", 9),
            ("C", "T", 10),
            ("D", "T", 10),
        ],
    )
}

fn antiparallel_network() -> Graph<&'static str, i64> {
    Graph::from_edges(
        GraphOptions::directed(),
        [
            ("S", "A", 16),
            ("S", "B", 13),
            ("A", "B", 10),
            ("A", "C", 12),
            ("B", "A", 4),
            ("B", "C", 14),
            ("B", "D", 9),
            ("C", "D", 7),
            ("C", "T", 20),
            ("D", "C", 6),
            ("D", "T", 4),
        ],
    )
}

fn run(g: &Graph<&'static str, i64>, s: &'static str, t: &'static str) -> FlowResult<&'static str, i64> {
    MaxFlow::new(g).unwrap().ford_fulkerson(&s, &t).unwrap()
}

fn assert_valid_flow(g: &Graph<&'static str, i64>, r: &FlowResult<&'static str, i64>, s: &str, t: &str) {
    let m = MaxFlow::new(g).unwrap();
    for (u, v, f) in r.network.iter() {
        assert!(f >= 0, "{u}->{v} carries negative flow");
        let cap = m.residual_capacity(u, v).unwrap();
        assert!(f <= cap, "{u}->{v} carries {f} over capacity {cap}");
    }
    for v in g.vertices() {
        if *v == s || *v == t {
            continue;
        }
        assert_eq!(r.network.inflow(v), r.network.outflow(v), "conservation at {v}");
    }
    assert_eq!(r.network.outflow(&s) - r.network.inflow(&s), r.value);
    assert_eq!(r.network.inflow(&t) - r.network.outflow(&t), r.value);
    assert_eq!(r.cut_capacity(), r.value);
}

#[test]
fn simple_network_has_max_flow_14() {
    let g = simple_network();
    let r = run(&g, "S", "T");
    assert_eq!(r.value, 14);
    assert_valid_flow(&g, &r, "S", "T");

    assert_eq!(r.network.flow(&"S", &"A"), 6);
    assert_eq!(r.network.flow(&"S", &"B"), 8);
    assert_eq!(r.source_side, vec!["S", "A"]);
    let cut: Vec<(&str, &str)> = r.min_cut.iter().map(|e| (e.from, e.to)).collect();
    assert_eq!(cut, vec![("S", "B"), ("A", "C"), ("A", "D")]);
}

#[test]
fn antiparallel_network_has_max_flow_23() {
    let g = antiparallel_network();
    let r = run(&g, "S", "T");
    assert_eq!(r.value, 23);
    assert_valid_flow(&g, &r, "S", "T");
}

#[test]
fn first_augmenting_path_is_a_shortest_residual_path() {
    let g = simple_network();
    let mf = MaxFlow::new(&g).unwrap();
    assert_eq!(
        mf.bfs_augmenting_path(&"S", &"T"),
        Some(AugmentingPath {
            path: vec!["S", "A", "C", "T"],
            bottleneck: 4,
        })
    );
    assert_eq!(mf.bfs_augmenting_path(&"T", &"S"), None);
    assert_eq!(mf.bfs_augmenting_path(&"S", &"nowhere"), None);
}

#[test]
fn residual_graph_seeds_synthetic_reverse_entries() {
    let g = simple_network();
    let mf = MaxFlow::new(&g).unwrap();
    assert_eq!(mf.residual_capacity(&"S", &"A"), Some(10));
    assert_eq!(mf.residual_capacity(&"A", &"S"), Some(0));
    assert_eq!(mf.residual_capacity(&"S", &"T"), None);
}

#[test]
fn real_reverse_edges_keep_their_capacity() {
    let g: Graph<&str, i64> =
        Graph::from_edges(GraphOptions::directed(), [("A", "B", 10), ("B", "A", 4)]);
    let mf = MaxFlow::new(&g).unwrap();
    assert_eq!(mf.residual_capacity(&"A", &"B"), Some(10));
    assert_eq!(mf.residual_capacity(&"B", &"A"), Some(4));

    assert_eq!(run(&g, "A", "B").value, 10);
    assert_eq!(run(&g, "B", "A").value, 4);
}

#[test]
fn parallel_edges_add_their_capacities() {
    let g: Graph<&str, i64> =
        Graph::from_edges(GraphOptions::directed(), [("S", "T", 3), ("S", "T", 4)]);
    let r = run(&g, "S", "T");
    assert_eq!(r.value, 7);
    assert_eq!(r.network.flow(&"S", &"T"), 7);
    assert_eq!(r.cut_capacity(), 7);
}

#[test]
fn flow_is_cancelled_when_a_later_path_reroutes_it() {
    // BFS takes S-A-D-T first, which blocks both remaining routes until the A-D flow is
    // pushed back.
    let g: Graph<&str, i64> = Graph::from_edges(
        GraphOptions::directed(),
        [
            ("S", "A", 1),
            ("S", "B", 1),
            ("A", "D", 1),
            ("A", "C", 1),
            ("B", "D", 1),
            ("D", "T", 1),
            ("C", "E", 1),
            ("E", "T", 1),
        ],
    );
    let r = run(&g, "S", "T");
    assert_eq!(r.value, 2);
    assert_eq!(r.network.flow(&"A", &"D"), 0);
    assert_eq!(r.network.flow(&"B", &"D"), 1);
    assert_eq!(r.network.flow(&"A", &"C"), 1);
    assert_valid_flow(&g, &r, "S", "T");
}

#[test]
fn undirected_edges_carry_capacity_both_ways() {
    let g: Graph<&str, i64> = Graph::from_edges(
        GraphOptions::undirected(),
        [("S", "A", 5), ("A", "T", 3), ("T", "S", 1)],
    );
    let r = run(&g, "S", "T");
    assert_eq!(r.value, 4);
    assert_eq!(r.cut_capacity(), 4);
}

#[test]
fn disconnected_sink_yields_zero_flow() {
    let mut g = simple_network();
    g.add_vertex("Z");
    let r = run(&g, "S", "Z");
    assert_eq!(r.value, 0);
    assert!(r.network.positive().next().is_none());
    assert!(r.min_cut.is_empty());
}

#[test]
fn invalid_endpoints_are_errors() {
    let g = simple_network();
    assert!(matches!(
        MaxFlow::new(&g).unwrap().ford_fulkerson(&"S", &"Q"),
        Err(Error::MissingVertex { .. })
    ));
    assert!(matches!(
        MaxFlow::new(&g).unwrap().ford_fulkerson(&"S", &"S"),
        Err(Error::SameSourceAndSink { .. })
    ));
}

#[test]
fn negative_capacities_are_rejected() {
    let mut g = simple_network();
    g.add_edge("C", "D", -1);
    assert!(matches!(
        MaxFlow::new(&g),
        Err(Error::NegativeWeight { .. })
    ));
}

#[test]
fn capacities_past_the_weight_range_are_rejected() {
    let parallel: Graph<&str, u8> = Graph::from_edges(
        GraphOptions::directed(),
        [("S", "T", 200), ("S", "T", 100)],
    );
    assert_eq!(
        MaxFlow::new(&parallel).err(),
        Some(Error::WeightOverflow {
            from: "\"S\"".into(),
            to: "\"T\"".into()
        })
    );

    // The residual entry A -> B can grow to 200 + 100.
    let antiparallel: Graph<&str, u8> = Graph::from_edges(
        GraphOptions::directed(),
        [("A", "B", 200), ("B", "A", 100)],
    );
    assert!(matches!(
        MaxFlow::new(&antiparallel),
        Err(Error::WeightOverflow { .. })
    ));
}

#[test]
fn flow_value_past_the_weight_range_is_an_error() {
    let wide = |c: u8| -> Graph<&'static str, u8> {
        Graph::from_edges(
            GraphOptions::directed(),
            [("S", "A", c), ("S", "B", c), ("A", "T", c), ("B", "T", c)],
        )
    };

    let g = wide(100);
    assert_eq!(MaxFlow::new(&g).unwrap().ford_fulkerson(&"S", &"T").unwrap().value, 200);

    let g = wide(200);
    assert_eq!(
        MaxFlow::new(&g).unwrap().ford_fulkerson(&"S", &"T").err(),
        Some(Error::WeightOverflow {
            from: "\"S\"".into(),
            to: "\"T\"".into()
        })
    );
}
