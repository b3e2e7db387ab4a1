//! Accounts command - list saved accounts without opening a session

use anyhow::Result;
use bankline_core::{AccountSummary, LoadSource};
use colored::Colorize;

use super::{get_context, GlobalArgs};
use crate::output;

pub fn run(args: &GlobalArgs, json: bool) -> Result<()> {
    let ctx = get_context(args)?;
    let summaries = ctx.bank_service.store().summaries();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if let LoadSource::Fresh(reason) = ctx.bank_service.loaded_from() {
        output::info(
            &mut std::io::stdout(),
            &format!("No saved accounts at {} ({})", ctx.data_path().display(), reason),
        )?;
        return Ok(());
    }

    println!("{}", "Saved Accounts".bold());
    println!("{}", render_table(&summaries));
    Ok(())
}

fn render_table(summaries: &[AccountSummary]) -> String {
    let mut table = output::create_table();
    table.set_header(vec!["Account", "Holder", "Balance", "Transactions"]);
    for summary in summaries {
        table.add_row(vec![
            summary.account_number.clone(),
            summary.holder_name.clone(),
            format!("{:.2}", summary.balance),
            summary.transactions.to_string(),
        ]);
    }
    table.to_string()
}
