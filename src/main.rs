use clap::Parser;
use lotkeeper::application::service::{CommandOutcome, ParkingService};
use lotkeeper::domain::lot::ParkingLot;
use lotkeeper::interfaces::csv::command_reader::CommandReader;
use lotkeeper::interfaces::csv::status_writer::{ReportFormat, StatusWriter};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command script CSV file (op, vehicle, category, plan, method, amount)
    input: PathBuf,

    /// Number of car spots
    #[arg(long, default_value_t = 3)]
    cars: usize,

    /// Number of bike spots
    #[arg(long, default_value_t = 2)]
    bikes: usize,

    /// Number of truck spots
    #[arg(long, default_value_t = 1)]
    trucks: usize,

    /// Output format for status reports
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    format: ReportFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let service = ParkingService::new(ParkingLot::new(cli.cars, cli.bikes, cli.trucks));

    let stdout = io::stdout();
    let mut writer = StatusWriter::new(stdout.lock(), cli.format);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command in reader.commands() {
        let command = match command {
            Ok(command) => command,
            Err(e) => {
                eprintln!("Error reading command: {}", e);
                continue;
            }
        };

        match service.execute(command).await {
            Ok(CommandOutcome::Parked { id, slot }) => {
                eprintln!("Vehicle with ID {} parked successfully at spot {}", id, slot);
            }
            Ok(CommandOutcome::Unparked(unparked)) => {
                eprintln!(
                    "Vehicle with ID {} has been unparked from spot {} (fee {}, change {})",
                    unparked.vehicle.id(),
                    unparked.slot,
                    unparked.fee,
                    unparked.change
                );
            }
            Ok(CommandOutcome::Status(status)) => {
                writer.write_status(&status).into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error processing command: {}", e);
            }
        }
    }

    let status = service.status().await;
    writer.write_status(&status).into_diagnostic()?;

    Ok(())
}
