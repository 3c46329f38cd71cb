use std::fs;
use std::path::PathBuf;

use tally_engine::amount::Amount;
use tally_engine::balance::NetBalance;
use tally_engine::report::{ReportWriter, SettlementRecord};
use tally_engine::transfers::Transfer;

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn record(id: &str) -> SettlementRecord {
    SettlementRecord {
        record_id: id.to_string(),
        tournament_id: "t1".to_string(),
        balances: vec![
            NetBalance {
                participant_id: "p1".into(),
                total_won: Amount::from_cents(6_667),
                total_lost: Amount::ZERO,
            },
            NetBalance {
                participant_id: "p2".into(),
                total_won: Amount::ZERO,
                total_lost: Amount::from_cents(6_667),
            },
        ],
        transfers: vec![Transfer {
            from: "p2".into(),
            to: "p1".into(),
            amount: Amount::from_cents(6_667),
        }],
        ts: None,
        meta: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("settlement_log");
    let _ = fs::remove_file(&path);
    let mut writer = ReportWriter::open(&path).expect("open writer");
    writer.write(&record("20250102-000001")).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn sequential_ids_increment() {
    let mut writer = ReportWriter::with_seq_for_test("20251231");
    assert_eq!(writer.next_id(), "20251231-000001");
    assert_eq!(writer.next_id(), "20251231-000002");
}

#[test]
fn missing_timestamp_is_injected_on_write() {
    let path = tmp_path("settlement_ts");
    let _ = fs::remove_file(&path);
    let mut writer = ReportWriter::open(&path).expect("open writer");
    writer.write(&record("20250102-000001")).expect("write");
    let text = fs::read_to_string(&path).expect("read file");
    let parsed: SettlementRecord = serde_json::from_str(text.trim()).expect("parse line");
    assert!(parsed.ts.is_some());
    assert_eq!(parsed.record_id, "20250102-000001");
}

#[test]
fn open_appends_to_an_existing_log() {
    let path = tmp_path("settlement_append");
    let _ = fs::remove_file(&path);
    {
        let mut writer = ReportWriter::open(&path).expect("open writer");
        writer.write(&record("20250102-000001")).expect("write");
    }
    {
        let mut writer = ReportWriter::open(&path).expect("reopen writer");
        writer.write(&record("20250102-000002")).expect("write");
    }
    let text = fs::read_to_string(&path).expect("read file");
    assert_eq!(text.lines().count(), 2);
}
