use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use prop_settle::config::Config;
use prop_settle::engine::resolve_settlement;
use prop_settle::feed::{BetRecord, FileSource, SnapshotSource};
use prop_settle::report;
use std::path::Path;
use std::time::Duration;

/// Evaluate every record at `now` and print the table. Malformed records
/// are logged and skipped rather than aborting the run.
fn print_report(records: &[BetRecord], now: DateTime<Utc>, config: &Config) {
    println!("{}", report::render_header());
    let mut skipped = 0usize;
    for record in records {
        let info = match record.time_info(now) {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!("skipping record: {:#}", e);
                skipped += 1;
                continue;
            }
        };
        let result = resolve_settlement(
            &info,
            record.final_value,
            Some(record.line),
            record.bet_side(),
            &config.status,
        );
        println!("{}", report::render_row(record, &result));
    }
    if skipped > 0 {
        println!("  ({skipped} malformed record(s) skipped, see prop-settle.log)");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let log_file = std::fs::File::create("prop-settle.log")?;
    tracing_subscriber::fmt()
        .with_env_filter("prop_settle=info")
        .with_writer(log_file)
        .init();

    let mut snapshot_arg: Option<String> = None;
    let mut now_arg: Option<String> = None;
    let mut watch_mode = false;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--watch" => watch_mode = true,
            "--now" => now_arg = args.next(),
            _ => snapshot_arg = Some(arg),
        }
    }

    let config = Config::load_or_default(Path::new("config.toml"))?;
    let snapshot_path = snapshot_arg.unwrap_or_else(|| config.report.snapshot_path.clone());

    println!();
    println!("  prop-settle v0.1.0");
    println!("  ==================");
    println!();
    println!("  Snapshot: {snapshot_path}");

    let mut source = FileSource::new(&snapshot_path);

    if watch_mode {
        if now_arg.is_some() {
            anyhow::bail!("--now only applies to one-shot runs; --watch uses the live clock");
        }
        let interval_s = config.report.refresh_interval_s.max(1);
        println!("  Watching every {interval_s}s (Ctrl-C to stop)");
        println!();
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_s));
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match source.fetch().await {
                        Ok(records) => {
                            println!();
                            print_report(&records, Utc::now(), &config);
                        }
                        Err(e) => tracing::error!("snapshot fetch failed: {:#}", e),
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::debug!("shutting down");
                    break;
                }
            }
        }
    } else {
        let now = match &now_arg {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("unparseable --now value: {raw:?}"))?
                .with_timezone(&Utc),
            None => Utc::now(),
        };
        println!("  Evaluated at: {}", now.to_rfc3339());
        println!();
        let records = source.fetch().await?;
        print_report(&records, now, &config);
    }

    Ok(())
}
