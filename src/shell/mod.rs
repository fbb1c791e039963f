//! The interactive shell: reads one command per iteration, forwards it to
//! the machine client, and renders the outcome on the device.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::clients::MachineClient;
use crate::device::DeviceOutput;
use crate::domain::Denomination;
use crate::machine::{Refund, VendError};

/// One parsed user command. `Quit` is a signal to the driver; neither the
/// shell nor the core ever terminates the process itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    InsertCoin(Denomination),
    Purchase(u32),
    Refund,
    Quit,
}

/// Maps raw input to a command. Malformed or non-numeric input is `None`;
/// the caller drops it and re-prompts, so it never reaches the machine.
pub fn parse_command(input: &str) -> Option<Command> {
    let code: u32 = input.trim().parse().ok()?;

    let command = match code {
        0 => Command::Quit,
        1..=5 => Command::InsertCoin(Denomination::ALL[(code - 1) as usize]),
        99 => Command::Refund,
        id => Command::Purchase(id),
    };
    Some(command)
}

/// Drives one command through the client and renders the outcome. Every
/// machine outcome maps to exactly one device call, issued only after the
/// machine has already mutated its state.
pub async fn dispatch<D: DeviceOutput>(
    client: &MachineClient,
    device: &D,
    command: Command,
) -> Result<(), VendError> {
    match command {
        Command::InsertCoin(denomination) => {
            client.insert_coin(denomination).await?;
            device.coin_accepted().await;
        }
        Command::Refund => match client.request_refund().await? {
            Refund::Returned(amount) => {
                device
                    .show_message("RETURNING CHANGE...", Some(&amount.to_string()))
                    .await;
            }
            Refund::NothingToRefund => {
                device.show_message("NOTHING TO REFUND", None).await;
            }
        },
        Command::Purchase(product_id) => match client.request_purchase(product_id).await {
            Ok(dispensed) => {
                device.dispense(&dispensed.product_name).await;
            }
            Err(VendError::UnknownProduct(_)) => {
                device.show_message("ERROR", Some("Unknown product id")).await;
            }
            Err(VendError::OutOfStock(name)) => {
                device.show_message("OUT OF STOCK", Some(&name)).await;
            }
            Err(VendError::InsufficientCredit { missing }) => {
                device
                    .show_message("INSUFFICIENT CREDIT", Some(&format!("Missing: {missing}")))
                    .await;
            }
            Err(e) => return Err(e),
        },
        // Handled by the run loop; nothing to render.
        Command::Quit => {}
    }

    Ok(())
}

/// Read-dispatch-render loop. Returns when the user enters the quit code or
/// input closes; actual process shutdown belongs to the caller.
pub async fn run<D: DeviceOutput>(client: &MachineClient, device: &D) -> Result<(), VendError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let view = client.snapshot().await?;
        device.show_catalog(&view).await;

        let Ok(Some(line)) = lines.next_line().await else {
            debug!("Input stream closed");
            return Ok(());
        };

        match parse_command(&line) {
            Some(Command::Quit) => {
                device.show_message("GOODBYE", None).await;
                return Ok(());
            }
            Some(command) => dispatch(client, device, command).await?,
            None => debug!(input = %line, "Ignoring unrecognized input"),
        }
    }
}
