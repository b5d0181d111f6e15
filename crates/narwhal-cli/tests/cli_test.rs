use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> String {
    let path = repo_root().join("fixtures").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path.to_string_lossy().into_owned()
}

fn cli() -> Command {
    Command::cargo_bin("narwhal-cli").expect("narwhal-cli binary")
}

fn stdout_of(args: &[&str]) -> String {
    let out = cli().args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf-8 stdout")
}

fn json_of(args: &[&str]) -> serde_json::Value {
    let out = cli().args(args).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("stdout is JSON")
}

#[test]
fn dijkstra_prints_distances_and_paths() {
    let classic = fixture("classic.txt");
    let out = stdout_of(&["dijkstra", "--directed", "--start", "A", &classic]);
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        [
            "To A: Distance = 0, Path = A",
            "To B: Distance = 4, Path = A -> B",
            "To C: Distance = 2, Path = A -> C",
            "To D: Distance = 9, Path = A -> B -> D",
            "To E: Distance = 11, Path = A -> B -> D -> E",
        ]
    );
}

#[test]
fn traversals_default_to_the_first_vertex() {
    let classic = fixture("classic.txt");
    assert_eq!(stdout_of(&["bfs", "--directed", &classic]).trim(), "A -> B -> C -> D -> E");
    assert_eq!(stdout_of(&["dfs", "--directed", &classic]).trim(), "A -> B -> C -> D -> E");
}

#[test]
fn matrix_json_lists_sorted_vertices() {
    let classic = fixture("classic.txt");
    let v = json_of(&["matrix", "--directed", "--json", &classic]);
    assert_eq!(v["vertices"], serde_json::json!(["A", "B", "C", "D", "E"]));
    assert_eq!(v["cells"][0], serde_json::json!([0, 4, 2, 0, 0]));
    assert_eq!(v["cells"][4][3], 7);
}

#[test]
fn kruskal_and_prim_agree_on_total_weight() {
    let mst = fixture("mst.txt");
    let k = json_of(&["kruskal", "--json", &mst]);
    let p = json_of(&["prim", "--json", &mst]);
    assert_eq!(k["total_weight"], 12);
    assert_eq!(p["total_weight"], 12);
    assert_eq!(k["edges"].as_array().map(Vec::len), Some(5));
    assert!(stdout_of(&["kruskal", &mst]).contains("Total weight: 12"));
}

#[test]
fn max_flow_reports_value_and_cut() {
    let flow = fixture("flow.txt");
    let out = stdout_of(&["max-flow", "--directed", "--source", "S", "--sink", "T", &flow]);
    assert!(out.starts_with("Maximum flow: 14\n"), "{out}");
    assert!(out.contains("Minimum cut (capacity 14):"), "{out}");

    let v = json_of(&[
        "max-flow", "--directed", "--source", "S", "--sink", "T", "--json", &flow,
    ]);
    assert_eq!(v["value"], 14);
    assert_eq!(v["source_side"], serde_json::json!(["S", "A"]));
    assert_eq!(v["network"]["S"]["A"], 6);
}

#[test]
fn scc_and_topo_on_directed_inputs() {
    let v = json_of(&["scc", "--directed", "--json", &fixture("scc.txt")]);
    assert_eq!(
        v["components"],
        serde_json::json!([["G", "J", "I", "H"], ["A", "C", "B"], ["D", "F", "E"]])
    );

    let out = stdout_of(&["topo", "--directed", &fixture("dag.txt")]);
    assert_eq!(out.trim(), "G -> A -> C -> B -> D -> E -> F");
}

#[test]
fn topo_on_a_cycle_fails_with_status_1() {
    let assert = cli()
        .args(["topo", "--directed", fixture("cyclic.txt").as_str()])
        .assert()
        .code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("cycle"), "{stderr}");
}

#[test]
fn reads_edges_from_stdin() {
    let out = cli()
        .args(["info", "-"])
        .write_stdin("X Y 3\nY Z\nW\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).expect("utf-8 stdout");
    assert!(out.contains("vertices (4): X Y Z W"), "{out}");
    assert!(out.contains("X -- Y (3)"), "{out}");
    assert!(out.contains("Y -- Z (1)"), "{out}");
}

#[test]
fn malformed_input_is_a_usage_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("bad.txt");
    fs::write(&path, "A B 1\nB C heavy\n").expect("write input");

    let assert = cli()
        .args(["info", path.to_string_lossy().as_ref()])
        .assert()
        .code(2);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("input line 2"), "{stderr}");
}

#[test]
fn argument_errors_exit_with_status_2() {
    cli().assert().code(2);
    cli().args(["frobnicate"]).assert().code(2);
    cli()
        .args(["max-flow", "--source", "S", fixture("flow.txt").as_str()])
        .assert()
        .code(2);
}

#[test]
fn unknown_start_vertex_exits_with_status_1() {
    let assert = cli()
        .args(["dijkstra", "--start", "Q", fixture("classic.txt").as_str()])
        .assert()
        .code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("\"Q\""), "{stderr}");
}

#[test]
fn demo_walks_through_every_algorithm() {
    let out = stdout_of(&["demo"]);
    assert!(out.contains("To E: Distance = 11, Path = A -> B -> D -> E"));
    assert!(out.contains("Component 1: G -> J -> I -> H"));
    assert!(out.contains("G -> A -> C -> B -> D -> E -> F"));
    assert!(out.contains("Topological sort not possible"));
    assert!(out.contains("Total weight: 12"));
    assert!(out.contains("Maximum flow: 14"));
}
