use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const REPORT: &str = "\
OPR241                    STORE ORDER WORKSHEET                      Page:    1
Store Number: 4521 SPRINGFIELD           Order Number: 778899
DC#: 12 CENTRAL DC
Date: 05/01/2024                         Time: 14:30
--------------------------------------------------------------------------------
Dept: 040 DAIRY              Sub-Dept: 010 MILK
222222 WHOLE MILK GALLON              R      6    2  ______
Dept: 010 GROCERY            Sub-Dept: 020 CANNED GOODS
123456 CANNED BEANS                   U M   12    4  ______
123 WIDGET                                   5    2
123456 TRUNCATED ROW
";

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_worksheet")
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write test file");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run worksheet")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path must be valid UTF-8")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout must be valid JSON")
}

#[test]
fn parse_file_outputs_sorted_worksheet_json() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "report.txt", REPORT);

    let output = run(&["parse-file", "--input", path_arg(&input)]);
    assert!(output.status.success(), "parse-file should succeed");

    let json = stdout_json(&output);
    assert_eq!(json["header"]["storeNumber"], "4521");
    assert_eq!(json["header"]["dcName"], "CENTRAL DC");
    assert_eq!(json["departments"][0]["deptNumber"], "010");
    assert_eq!(json["departments"][1]["deptNumber"], "040");

    let items = &json["departments"][0]["subDepartments"][0]["items"];
    assert_eq!(items[0]["sku"], "123456");
    assert_eq!(items[0]["icons"], serde_json::json!(["U", "M"]));
    assert_eq!(items[1]["sku"], "000123");
    assert_eq!(json["summary"]["totalCases"], 23);
}

#[test]
fn parse_file_with_report_includes_diagnostics() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "report.txt", REPORT);

    let output = run(&["parse-file", "--input", path_arg(&input), "--with-report"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["worksheet"]["summary"]["itemCount"], 3);
    assert_eq!(json["report"]["unmatched_item_count"], 1);
    assert_eq!(
        json["report"]["unmatched_lines"],
        serde_json::json!(["123456 TRUNCATED ROW"])
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("did not match the item row layout"),
        "warnings should be logged to stderr, got: {stderr}"
    );
}

#[test]
fn parse_file_table_format_renders_sections() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "report.txt", REPORT);

    let output = run(&["parse-file", "--input", path_arg(&input), "--format", "table"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Store: 4521 - SPRINGFIELD"));
    assert!(stdout.contains("DEPT 010 - GROCERY"));
    assert!(stdout.contains("SUB DEPT 020 - CANNED GOODS"));
    assert!(stdout.contains("CANNED BEANS"));
}

#[test]
fn parse_file_honors_config_noise_markers() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "report.txt", REPORT);
    let config = write_file(
        &dir,
        "config.yaml",
        "version: \"1.0\"\nnoise:\n  extra_markers:\n    - WIDGET\n",
    );

    let output = run(&[
        "parse-file",
        "--input",
        path_arg(&input),
        "--config",
        path_arg(&config),
    ]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["summary"]["itemCount"], 2);
}

#[test]
fn parse_file_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "report.txt", REPORT);
    let config = write_file(&dir, "config.yaml", "version: \"\"\n");

    let output = run(&[
        "parse-file",
        "--input",
        path_arg(&input),
        "--config",
        path_arg(&config),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Failed to load config"));
}

#[test]
fn parse_file_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");

    let output = run(&["parse-file", "--input", path_arg(&missing)]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Failed to read"));
}

#[test]
fn parse_stdin_reads_report() {
    let mut child = Command::new(bin())
        .args(["parse-stdin", "--format", "yaml"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn worksheet");

    child
        .stdin
        .take()
        .expect("stdin must be piped")
        .write_all(REPORT.as_bytes())
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to wait on worksheet");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("deptName: GROCERY"));
    assert!(stdout.contains("orderNumber: '778899'"));
}

#[test]
fn header_command_prints_header_only() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "report.txt", REPORT);

    let output = run(&["header", "--input", path_arg(&input)]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["orderNumber"], "778899");
    assert_eq!(json["date"], "05/01/2024");
    assert_eq!(json["time"], "14:30");
    assert!(json.get("departments").is_none());
}

#[test]
fn header_command_rejects_text_formats() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "report.txt", REPORT);

    let output = run(&["header", "--input", path_arg(&input), "--format", "table"]);
    assert!(!output.status.success());
}

#[test]
fn validate_accepts_parser_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "report.txt", REPORT);

    let parsed = run(&["parse-file", "--input", path_arg(&input)]);
    assert!(parsed.status.success());
    let json_path = dir.path().join("worksheet.json");
    fs::write(&json_path, &parsed.stdout).unwrap();

    let output = run(&["validate", path_arg(&json_path)]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Validated 1 worksheet file(s)."));
}

#[test]
fn validate_reports_out_of_order_departments() {
    let dir = TempDir::new().unwrap();
    let worksheet = serde_json::json!({
        "header": {},
        "departments": [
            { "deptNumber": "040", "deptName": "DAIRY", "subDepartments": [] },
            { "deptNumber": "010", "deptName": "GROCERY", "subDepartments": [] }
        ],
        "summary": {
            "departmentCount": 2,
            "subDepartmentCount": 0,
            "itemCount": 0,
            "totalCases": 0
        }
    });
    let path = write_file(
        &dir,
        "bad.json",
        &serde_json::to_string_pretty(&worksheet).unwrap(),
    );

    let output = run(&["validate", path_arg(&path)]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation error"));
}
