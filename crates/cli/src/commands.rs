//! CLI command handlers

use anyhow::Context;
use multisig_events::{verify_chain, EventReader, WalletEvent};
use multisig_wallet::WalletConfig;
use std::io::Write;
use std::path::Path;

/// Validate a config file and print the resulting owner set
pub fn check_config(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let config = WalletConfig::from_json_file(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let registry = config.build_registry()?;

    writeln!(
        out,
        "✅ Config valid: {}-of-{}",
        registry.quorum(),
        registry.owners().len()
    )?;
    for owner in registry.owners() {
        writeln!(out, "   {}", owner)?;
    }

    Ok(())
}

/// Print events from a log directory, optionally filtered by action index
pub fn inspect(log: &Path, action: Option<u64>, out: &mut impl Write) -> anyhow::Result<()> {
    let records = EventReader::from_directory(log).read_all()?;
    tracing::debug!(records = records.len(), path = %log.display(), "Loaded event log");

    for record in records
        .iter()
        .filter(|r| action.is_none() || r.event.action_index() == action)
    {
        writeln!(
            out,
            "#{:<5} {}  {}",
            record.sequence,
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            describe(&record.event)
        )?;
    }

    Ok(())
}

/// Verify the hash chain. Returns false if the chain is broken.
pub fn audit(log: &Path, out: &mut impl Write) -> anyhow::Result<bool> {
    let records = EventReader::from_directory(log).read_all()?;

    match verify_chain(&records) {
        Ok(()) => {
            writeln!(out, "✅ Hash chain verified ({} events)", records.len())?;
            Ok(true)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Event log failed verification");
            writeln!(out, "❌ Hash chain broken: {}", e)?;
            Ok(false)
        }
    }
}

fn describe(event: &WalletEvent) -> String {
    match event {
        WalletEvent::Deposited {
            sender,
            amount,
            new_balance,
        } => format!("Deposited   {} from {} (balance {})", amount, sender, new_balance),
        WalletEvent::Proposed {
            proposer,
            action_index,
            target,
            value,
            payload,
        } => format!(
            "Proposed    action {} by {}: {} to {} data {}",
            action_index, proposer, value, target, payload
        ),
        WalletEvent::Confirmed {
            owner,
            action_index,
        } => format!("Confirmed   action {} by {}", action_index, owner),
        WalletEvent::Revoked {
            owner,
            action_index,
        } => format!("Revoked     action {} by {}", action_index, owner),
        WalletEvent::Executed {
            executor,
            action_index,
        } => format!("Executed    action {} by {}", action_index, executor),
    }
}
