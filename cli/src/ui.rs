use std::io::Write;

use tally_engine::balance::BalanceSheet;
use tally_engine::transfers::Transfer;

use crate::input::Tournament;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

pub fn write_balances(
    out: &mut dyn Write,
    tournament: &Tournament,
    sheet: &BalanceSheet,
    currency: &str,
) -> std::io::Result<()> {
    for b in &sheet.balances {
        writeln!(
            out,
            "{:<20} won {}{}  lost {}{}  net {}{}",
            tournament.display_name(&b.participant_id),
            currency,
            b.total_won,
            currency,
            b.total_lost,
            currency,
            b.net(),
        )?;
    }
    for s in &sheet.skipped {
        writeln!(out, "skipped wager {}: {}", s.wager_id, s.reason)?;
    }
    Ok(())
}

pub fn write_transfers(
    out: &mut dyn Write,
    tournament: &Tournament,
    transfers: &[Transfer],
    currency: &str,
) -> std::io::Result<()> {
    if transfers.is_empty() {
        return writeln!(out, "all square, nothing to transfer");
    }
    for t in transfers {
        writeln!(
            out,
            "{} pays {} {}{}",
            tournament.display_name(&t.from),
            tournament.display_name(&t.to),
            currency,
            t.amount,
        )?;
    }
    Ok(())
}
