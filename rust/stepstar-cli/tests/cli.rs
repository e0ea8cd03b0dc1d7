use std::io::Write;

use clap::Parser;
use stepstar_cli::{run, Args};
use stepstar_core::GridPos;
use tempfile::NamedTempFile;

fn grid_file(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

fn args(file: &NamedTempFile, extra: &[&str]) -> Args {
    let path = file.path().to_str().unwrap().to_string();
    let mut argv = vec!["stepstar", "--grid", path.as_str()];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

const WALLED: &str = r#"{"width":5,"height":5,"obstacles":[[1,0],[1,1],[1,2],[1,3],[3,4]]}"#;

#[test]
fn plain_output_lists_the_route() {
    let file = grid_file(WALLED);
    let report = run(&args(&file, &["--start", "0,0", "--goal", "4,4"])).unwrap();
    assert!(report.result.is_found());
    assert_eq!(
        report.text,
        "cost 7 (expanded 8): (0,0) -> (0,1) -> (0,2) -> (0,3) -> (1,4) -> (2,3) -> (3,3) -> (4,4)\n"
    );
}

#[test]
fn json_output_is_a_path_result() {
    let file = grid_file(WALLED);
    let report = run(&args(&file, &["--start", "0,0", "--goal", "4,4", "--json"])).unwrap();
    let v: serde_json::Value = serde_json::from_str(&report.text).unwrap();
    assert_eq!(v["cost"], 7);
    assert_eq!(v["path"][4], serde_json::json!([1, 4]));
}

#[test]
fn draw_marks_route_on_ascii_grid() {
    let file = grid_file("...\n##.\n...\n");
    let report = run(&args(&file, &["--start", "0,0", "--goal", "0,2", "--movement", "cardinal", "--heuristic", "manhattan", "--draw"])).unwrap();
    let drawing: Vec<&str> = report.text.lines().take(3).collect();
    assert_eq!(drawing, vec!["S**", "##*", "G**"]);
    assert_eq!(report.result.cost, 6);
}

#[test]
fn boxed_in_start_reports_no_route() {
    let file = grid_file(".#.\n##.\n...\n");
    let report = run(&args(&file, &["--start", "0,0", "--goal", "2,2"])).unwrap();
    assert!(!report.result.is_found());
    assert_eq!(report.text, "no route: no-path (expanded 1)\n");
}

#[test]
fn expansion_limit_is_passed_through() {
    let file = grid_file(WALLED);
    let report = run(&args(&file, &["--start", "0,0", "--goal", "4,4", "--max-expansions", "3"])).unwrap();
    assert_eq!(report.result.reason.as_deref(), Some("expansion-limit"));
    assert_eq!(report.result.expanded, 3);
}

#[test]
fn rejects_out_of_bounds_start_and_bad_arguments() {
    let file = grid_file(WALLED);
    let err = run(&args(&file, &["--start", "-1,0", "--goal", "4,4"])).err().unwrap();
    assert!(err.to_string().contains("start (-1,0)"));

    let path = file.path().to_str().unwrap();
    assert!(Args::try_parse_from(["stepstar", "--grid", path, "--start", "zero", "--goal", "1,1"]).is_err());
    assert!(Args::try_parse_from(["stepstar", "--grid", path, "--start", "0,0", "--goal", "1,1", "--heuristic", "taxicab"]).is_err());
}

#[test]
fn missing_grid_file_has_context() {
    let parsed = Args::try_parse_from(["stepstar", "--grid", "/definitely/not/here.json", "--start", "0,0", "--goal", "1,1"]).unwrap();
    assert_eq!(parsed.start, GridPos::new(0, 0));
    let err = run(&parsed).err().unwrap();
    assert!(format!("{err:#}").contains("loading grid /definitely/not/here.json"));
}
