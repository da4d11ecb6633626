use hermes_client::{ClientConfig, UdpRequester};
use hermes_runner::{BatchSession, Repl, TestScript};
use std::net::SocketAddr;
use std::time::Duration;

fn print_help() {
    eprintln!(
        r#"Hermes - matching engine smoke-test client

USAGE:
    hermes [MODE] [OPTIONS]

MODES:
    batch               Run a test-case script against the engine (default)
    repl                Interactive single-order prompt

OPTIONS:
    --addr <HOST:PORT>  Engine endpoint (default: 127.0.0.1:8080)
    --script <PATH>     JSON script for batch mode (default: built-in smoke set)
    --timeout-ms <MS>   Bound the wait for each reply (default: 5000 in batch
                        mode; unbounded in repl mode)
    --out <PATH>        Batch report file (default: test_results.txt)
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter

EXAMPLES:
    # Fire the built-in smoke set at a local engine
    hermes batch

    # Interactive prompt against a remote engine, bounded waits
    hermes repl --addr 10.0.0.7:8080 --timeout-ms 2000
"#
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Batch,
    Repl,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut mode = Mode::Batch;
    let mut addr: SocketAddr = ClientConfig::default().endpoint;
    let mut script_path: Option<String> = None;
    let mut timeout_ms: Option<u64> = None;
    let mut out_path = "test_results.txt".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "batch" => mode = Mode::Batch,
            "repl" => mode = Mode::Repl,
            "--addr" => {
                i += 1;
                addr = args.get(i).ok_or("--addr requires a value")?.parse()?;
            }
            "--script" => {
                i += 1;
                script_path = Some(args.get(i).ok_or("--script requires a value")?.clone());
            }
            "--timeout-ms" => {
                i += 1;
                timeout_ms = Some(args.get(i).ok_or("--timeout-ms requires a value")?.parse()?);
            }
            "--out" => {
                i += 1;
                out_path = args.get(i).ok_or("--out requires a value")?.clone();
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {other}\n");
                print_help();
                std::process::exit(2);
            }
        }
        i += 1;
    }

    // Batch runs get a bounded wait by default so a dead engine cannot hang
    // the script; the prompt keeps the protocol's unbounded receive unless
    // asked otherwise.
    let mut config = ClientConfig::new(addr);
    match (timeout_ms, mode) {
        (Some(ms), _) => config = config.with_recv_timeout(Duration::from_millis(ms)),
        (None, Mode::Batch) => config = config.with_recv_timeout(Duration::from_millis(5000)),
        (None, Mode::Repl) => {}
    }

    log::info!("engine endpoint: {addr}");
    let requester = UdpRequester::new(config);

    match mode {
        Mode::Batch => {
            let script = match script_path {
                Some(path) => TestScript::from_file(path)?,
                None => TestScript::smoke(),
            };

            let report = BatchSession::new(requester).run(&script).await;
            report.save(&out_path)?;

            println!(
                "script '{}': {} sent, {} replied, {} rejected, {} failed",
                report.script_name, report.sent, report.replied, report.rejected, report.failed,
            );
            println!("report written to {out_path}");

            if !report.transport_clean() {
                std::process::exit(1);
            }
        }
        Mode::Repl => {
            println!("Hermes interactive prompt - orders are");
            println!("<orderId> <side> <price> <quantity> <timestamp> <traderId> <isMarketOrder>");
            println!("type 'shutdown' to stop the engine, 'exit' to leave");
            Repl::new(requester).run().await?;
        }
    }

    Ok(())
}
