use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use emv_tlv::tag_name;
use emv_transaction::{mask_pan, process_transaction, CardRecord};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod gateway;
mod logger;

use gateway::HttpGateway;
use logger::JsonLogger;

#[derive(Parser)]
#[command(name = "emv-processor")]
#[command(about = "EMV Transaction Processor - decode, validate and authorize BER-TLV card data")]
#[command(version)]
struct Args {
    /// Base URL of the acquirer authorization service
    #[arg(long, default_value = "http://localhost:8080")]
    acquirer_url: String,

    /// Path of the append-only JSON transaction log
    #[arg(long, default_value = "transactions.json")]
    log_file: PathBuf,
}

fn main() {
    // Initialize tracing subscriber with environment-based filtering
    // Set RUST_LOG=debug for detailed logs; default: info level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let gateway = match HttpGateway::new(args.acquirer_url) {
        Ok(g) => g,
        Err(err) => {
            eprintln!("Failed to create acquirer gateway: {}", err);
            return;
        }
    };
    let logger = JsonLogger::new(args.log_file);

    println!("EMV Transaction Processor");
    println!("=========================");
    println!("Enter TLV hex data (or 'exit' to quit)");
    println!("Example: 5A0845395787636214865F2404251200009F340400000000");
    println!();

    let stdin = io::stdin();
    loop {
        print!("TLV> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("Failed to read input: {}", err);
                break;
            }
        }

        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        if raw == "exit" || raw == "quit" {
            println!("Goodbye!");
            break;
        }

        // A bad transaction never terminates the loop
        if let Err(err) = process_line(raw, &gateway, &logger) {
            println!("Error: {}\n", err);
        }
    }
}

/// Decode, validate, authorize and log one line of TLV hex input.
fn process_line(raw: &str, gateway: &HttpGateway, logger: &JsonLogger) -> anyhow::Result<()> {
    let data = hex::decode(raw).map_err(|err| anyhow::anyhow!("invalid hex data: {}", err))?;

    let records = emv_tlv::decode(&data)?;

    println!("\nDecoded {} record(s):", records.len());
    for record in &records {
        println!(
            "  [{}] {}: {}",
            record.tag_hex(),
            tag_name(&record.tag),
            record.value_hex()
        );
    }

    let card = CardRecord::from_records(&records)?;
    let result = process_transaction(&card, Local::now().date_naive(), gateway)?;

    info!(
        "transaction processed: pan={}, approved={}",
        mask_pan(&result.pan),
        result.approved
    );

    // A failed log write is a warning, not a failed transaction
    if let Err(err) = logger.log(&result) {
        warn!("failed to log transaction: {}", err);
    }

    println!("\n========== TRANSACTION RESULT ==========");
    println!(
        "Status: {}",
        if result.approved { "APPROVED" } else { "REJECTED" }
    );
    println!("Message: {}", result.message);
    println!("PAN: {}", result.pan);
    println!("Expiry Date: {}", result.expiry.format("%m/%Y"));
    println!("CVM: {}", result.cvm);
    println!("Timestamp: {}", result.timestamp.format("%Y-%m-%d %H:%M:%S"));
    println!("========================================\n");

    Ok(())
}
