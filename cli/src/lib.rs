use std::collections::HashMap;
use std::io::Write;

use clap::{Parser, Subcommand};

pub mod config;
pub mod input;
pub mod ui;

use tally_engine::balance::{compute_balances, BalanceSheet};
use tally_engine::report::{ReportWriter, SettlementRecord};
use tally_engine::transfers::{minimize_debts, Transfer};

use input::{load_tournament, Tournament};

/// Runs the CLI with provided args, writing to the given writers.
/// Returns the intended process exit code.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let parsed = TallyCli::try_parse_from(&argv);
    match parsed {
        Err(_) => {
            let _ = writeln!(out, "Tally settlement CLI\n");
            let _ = writeln!(out, "Usage: tally <command> [options]\n");
            let _ = writeln!(out, "Commands:");
            for c in ["settle", "balances", "transfers", "check", "cfg"] {
                let _ = writeln!(out, "  {}", c);
            }
            let _ = writeln!(out, "\nOptions:\n  -h, --help     Show this help");
            0
        }
        Ok(cli) => match cli.cmd {
            Commands::Cfg => cmd_cfg(out, err),
            Commands::Settle { input, report } => cmd_settle(&input, report.as_deref(), out, err),
            Commands::Balances { input } => cmd_balances(&input, out, err),
            Commands::Transfers { input } => cmd_transfers(&input, out, err),
            Commands::Check { input } => cmd_check(&input, out, err),
        },
    }
}

#[derive(Parser, Debug)]
#[command(name = "tally", author = "Tally", version, about = "Tally settlement CLI", disable_help_flag = true)]
struct TallyCli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Settle { #[arg(long)] input: String, #[arg(long)] report: Option<String> },
    Balances { #[arg(long)] input: String },
    Transfers { #[arg(long)] input: String },
    Check { #[arg(long)] input: String },
    Cfg,
}

fn cmd_cfg(out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match config::load() {
        Ok(cfg) => {
            let rendered = serde_json::to_string_pretty(&cfg).expect("serialize");
            let _ = writeln!(out, "{}", rendered);
            0
        }
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            2
        }
    }
}

fn cmd_settle(input: &str, report: Option<&str>, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return 2;
        }
    };
    let tournament = match load_tournament(input) {
        Ok(t) => t,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return 2;
        }
    };

    let sheet = compute_balances(&tournament.participants, &tournament.wagers);
    let transfers = minimize_debts(&sheet.balances);

    if cfg.json {
        let _ = writeln!(out, "{}", render_json(&tournament, &sheet, &transfers));
    } else {
        let _ = ui::write_balances(out, &tournament, &sheet, &cfg.currency);
        let _ = ui::write_transfers(out, &tournament, &transfers, &cfg.currency);
    }

    if let Some(path) = report.map(str::to_string).or(cfg.report) {
        if let Err(e) = append_record(&path, &tournament, &sheet, &transfers) {
            let _ = ui::write_error(err, &e.to_string());
            return 1;
        }
        let _ = writeln!(out, "settlement recorded to {}", path);
    }
    0
}

fn cmd_balances(input: &str, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    with_snapshot(input, out, err, |tournament, cfg, out| {
        let sheet = compute_balances(&tournament.participants, &tournament.wagers);
        ui::write_balances(out, tournament, &sheet, &cfg.currency)
    })
}

fn cmd_transfers(input: &str, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    with_snapshot(input, out, err, |tournament, cfg, out| {
        let sheet = compute_balances(&tournament.participants, &tournament.wagers);
        let transfers = minimize_debts(&sheet.balances);
        ui::write_transfers(out, tournament, &transfers, &cfg.currency)
    })
}

/// Recomputes the settlement and verifies its invariants against the
/// snapshot: zero-sum nets, transfers that square every balance, and the
/// greedy sweep's transfer-count bound.
fn cmd_check(input: &str, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let tournament = match load_tournament(input) {
        Ok(t) => t,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return 2;
        }
    };

    let sheet = compute_balances(&tournament.participants, &tournament.wagers);
    let transfers = minimize_debts(&sheet.balances);

    let mut failures = Vec::new();
    let total: i64 = sheet.balances.iter().map(|b| b.net().cents()).sum();
    if total != 0 {
        failures.push(format!("net balances sum to {} cents, expected 0", total));
    }

    let mut remaining: HashMap<&str, i64> = sheet
        .balances
        .iter()
        .map(|b| (b.participant_id.as_str(), b.net().cents()))
        .collect();
    for t in &transfers {
        *remaining.entry(t.from.as_str()).or_insert(0) += t.amount.cents();
        *remaining.entry(t.to.as_str()).or_insert(0) -= t.amount.cents();
    }
    for (id, cents) in &remaining {
        if *cents != 0 {
            failures.push(format!("transfers leave {} {} cents out of balance", id, cents));
        }
    }

    let out_of_balance = sheet.balances.iter().filter(|b| b.net().cents() != 0).count();
    if transfers.len() > out_of_balance.saturating_sub(1) {
        failures.push(format!(
            "{} transfers for {} unsettled participants",
            transfers.len(),
            out_of_balance
        ));
    }

    for s in &sheet.skipped {
        let _ = writeln!(out, "skipped wager {}: {}", s.wager_id, s.reason);
    }

    if failures.is_empty() {
        let _ = writeln!(
            out,
            "check passed: {} participants, {} transfers",
            sheet.balances.len(),
            transfers.len()
        );
        0
    } else {
        for f in &failures {
            let _ = ui::write_error(err, f);
        }
        1
    }
}

fn with_snapshot(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
    body: impl FnOnce(&Tournament, &config::Config, &mut dyn Write) -> std::io::Result<()>,
) -> i32 {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return 2;
        }
    };
    match load_tournament(input) {
        Ok(tournament) => {
            let _ = body(&tournament, &cfg, out);
            0
        }
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            2
        }
    }
}

fn render_json(tournament: &Tournament, sheet: &BalanceSheet, transfers: &[Transfer]) -> String {
    let balances: Vec<serde_json::Value> = sheet
        .balances
        .iter()
        .map(|b| {
            serde_json::json!({
                "participant_id": b.participant_id,
                "total_won": b.total_won,
                "total_lost": b.total_lost,
                "net": b.net(),
            })
        })
        .collect();
    let payload = serde_json::json!({
        "tournament_id": tournament.id,
        "balances": balances,
        "transfers": transfers,
        "skipped": sheet.skipped.iter().map(|s| s.wager_id.clone()).collect::<Vec<_>>(),
    });
    serde_json::to_string_pretty(&payload).expect("serialize")
}

fn append_record(
    path: &str,
    tournament: &Tournament,
    sheet: &BalanceSheet,
    transfers: &[Transfer],
) -> std::io::Result<()> {
    let mut writer = ReportWriter::open(path)?;
    let record = SettlementRecord {
        record_id: writer.next_id(),
        tournament_id: tournament.id.clone(),
        balances: sheet.balances.clone(),
        transfers: transfers.to_vec(),
        ts: None,
        meta: None,
    };
    writer.write(&record)
}
