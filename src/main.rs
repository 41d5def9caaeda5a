use std::sync::Arc;

use burger_kiosk::{
    config::{init_tracing, Args},
    dashboard::dashboard_task,
    input::{input_task, Command},
    KioskError, Kiosk,
};
use clap::Parser;
use tokio::{io::BufReader, sync::mpsc};
use tracing::{error, info};


#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), KioskError> {
    let args = Args::parse();
    init_tracing(&args.log);

    let catalog = args.load_catalog().inspect_err(|err| error!(%err, "startup failed"))?;
    info!(entries = catalog.len(), "catalog ready");

    let mut kiosk = Kiosk::new(Arc::new(catalog), args.receipt_numbers());

    // Dashboard follows the kiosk through its subscription
    let events_rx = kiosk.subscribe();
    let dashboard = tokio::spawn(dashboard_task(
        events_rx,
        kiosk.snapshot(),
        args.debounce(),
        std::io::stdout(),
    ));

    let (commands_tx, mut commands_rx) = mpsc::channel::<Command>(32);
    let input = tokio::spawn(input_task(BufReader::new(tokio::io::stdin()), commands_tx));

    while let Some(command) = commands_rx.recv().await {
        match command {
            Command::Kiosk(action) => {
                kiosk.dispatch(action);
            }
            Command::Quit => break,
        }
    }

    // Dropping the kiosk closes the dashboard's channel
    drop(kiosk);
    let _ = dashboard.await;

    // The reader stops on its own after `q` or EOF
    if let Ok(Err(err)) = input.await {
        error!(%err, "input failed");
        return Err(err);
    }

    info!("kiosk closed");
    Ok(())
}
