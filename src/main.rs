mod app_system;
mod clients;
mod device;
mod domain;
mod inventory;
mod machine;
mod messages;
mod shell;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info};

use crate::app_system::{setup_tracing, VendingSystem};
use crate::device::ConsoleDevice;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting vending machine");

    let system = VendingSystem::new();
    let device = ConsoleDevice::new();

    if let Err(e) = shell::run(&system.machine_client, &device).await {
        error!(error = %e, "Shell stopped with error");
    }

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Vending machine stopped");
    Ok(())
}
