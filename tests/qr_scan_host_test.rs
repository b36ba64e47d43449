//! Terminal host: argument handling and printed output

mod common;

use std::io::Cursor;

use common::{assert_link, assert_unrecognized};
use qrguard::classifier::messages;
use qrguard::host::{parse_args, run, Invocation};
use qrguard::{Config, Error, Locale, OutputFormat, ScanResult, Verdict};

fn invocation(list: &[&str]) -> Invocation {
    parse_args(list.iter().map(|s| s.to_string()), Config::default()).unwrap()
}

fn run_to_string(invocation: &Invocation, stdin: &str) -> (usize, String) {
    let mut out = Vec::new();
    let count = run(invocation, Cursor::new(stdin.as_bytes()), &mut out).unwrap();
    (count, String::from_utf8(out).unwrap())
}

#[test]
fn test_json_output_is_one_result_per_line() {
    let inv = invocation(&["https://example.com/path", "hello world"]);
    let (count, out) = run_to_string(&inv, "");
    assert_eq!(count, 2);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: ScanResult = serde_json::from_str(lines[0]).unwrap();
    assert_link(&first, Verdict::Safe, "example.com");
    let second: ScanResult = serde_json::from_str(lines[1]).unwrap();
    assert_unrecognized(&second);

    let json: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(json["isLink"], true);
    assert_eq!(json["verdict"], "safe");
}

#[test]
fn test_text_output_prints_summary() {
    let inv = invocation(&["--text", "--locale", "es", "http://Example.COM"]);
    let (_, out) = run_to_string(&inv, "");

    assert!(out.contains("[WARNING] Posible enlace sospechoso"));
    assert!(out.contains("Dominio: example.com"));
    assert!(out.contains(messages::review_hint(Locale::Es)));
}

#[test]
fn test_stdin_lines_used_without_payload_args() {
    let inv = invocation(&["--json"]);
    let (count, out) = run_to_string(&inv, "https://a.example\nplain text\n\n");
    assert_eq!(count, 3);

    let verdicts: Vec<Verdict> = out
        .lines()
        .map(|line| serde_json::from_str::<ScanResult>(line).unwrap().verdict())
        .collect();
    assert_eq!(
        verdicts,
        vec![Verdict::Safe, Verdict::Unrecognized, Verdict::Unrecognized]
    );
}

#[test]
fn test_payload_args_ignore_stdin() {
    let inv = invocation(&["--", "--text"]);
    assert_eq!(inv.config.output, OutputFormat::Json);
    let (count, out) = run_to_string(&inv, "https://ignored.example\n");
    assert_eq!(count, 1);
    assert!(!out.contains("ignored.example"));
}

#[test]
fn test_locale_without_value_is_rejected() {
    let err = parse_args(vec!["--locale".to_string()], Config::default()).unwrap_err();
    assert!(matches!(err, Error::Usage(_)));
}
