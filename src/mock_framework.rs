//! # Mock Framework
//!
//! Utilities for testing the client in isolation.
//!
//! Use [`create_mock_client`] to get a client and the raw request receiver.
//! Then use helpers like [`expect_purchase`] to assert behavior.

use tokio::sync::{mpsc, oneshot};

use crate::clients::MachineClient;
use crate::domain::{Denomination, Money};
use crate::machine::{Dispensed, Refund, VendError};
use crate::messages::MachineRequest;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// To test client wiring we don't want to spin up a full `MachineService`.
/// The mock client sends messages to a channel we control; the test inspects
/// the messages arriving on that channel, asserts they are correct, and
/// answers them by hand, simulating the service's behavior deterministically.
pub fn create_mock_client(buffer_size: usize) -> (MachineClient, mpsc::Receiver<MachineRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MachineClient::new(sender), receiver)
}

/// Helper to verify that the next message is an InsertCoin request
pub async fn expect_insert_coin(
    receiver: &mut mpsc::Receiver<MachineRequest>,
) -> Option<(Denomination, oneshot::Sender<Result<Money, VendError>>)> {
    match receiver.recv().await {
        Some(MachineRequest::InsertCoin {
            denomination,
            respond_to,
        }) => Some((denomination, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Purchase request
pub async fn expect_purchase(
    receiver: &mut mpsc::Receiver<MachineRequest>,
) -> Option<(u32, oneshot::Sender<Result<Dispensed, VendError>>)> {
    match receiver.recv().await {
        Some(MachineRequest::Purchase {
            product_id,
            respond_to,
        }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Refund request
pub async fn expect_refund(
    receiver: &mut mpsc::Receiver<MachineRequest>,
) -> Option<oneshot::Sender<Result<Refund, VendError>>> {
    match receiver.recv().await {
        Some(MachineRequest::Refund { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_client_round_trips_a_purchase() {
        let (client, mut receiver) = create_mock_client(10);

        let purchase_task = tokio::spawn(async move { client.request_purchase(12).await });

        let (product_id, responder) = expect_purchase(&mut receiver)
            .await
            .expect("Expected Purchase request");
        assert_eq!(product_id, 12);

        responder
            .send(Ok(Dispensed {
                product_name: "Mineral Water".to_string(),
                price: Money::from_cents(80),
                remaining_credit: Money::from_cents(70),
            }))
            .unwrap();

        let dispensed = purchase_task.await.unwrap().unwrap();
        assert_eq!(dispensed.product_name, "Mineral Water");
        assert_eq!(dispensed.remaining_credit, Money::from_cents(70));
    }

    #[tokio::test]
    async fn mock_client_round_trips_coin_and_refund() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move {
            let total = client.insert_coin(Denomination::TwoEuros).await?;
            let refund = client.request_refund().await?;
            Ok::<_, VendError>((total, refund))
        });

        let (denomination, responder) = expect_insert_coin(&mut receiver)
            .await
            .expect("Expected InsertCoin request");
        assert_eq!(denomination, Denomination::TwoEuros);
        responder.send(Ok(Money::from_cents(200))).unwrap();

        let responder = expect_refund(&mut receiver)
            .await
            .expect("Expected Refund request");
        responder
            .send(Ok(Refund::Returned(Money::from_cents(200))))
            .unwrap();

        let (total, refund) = task.await.unwrap().unwrap();
        assert_eq!(total, Money::from_cents(200));
        assert_eq!(refund, Refund::Returned(Money::from_cents(200)));
    }

    #[tokio::test]
    async fn mock_client_surfaces_service_errors() {
        let (client, mut receiver) = create_mock_client(10);

        let purchase_task = tokio::spawn(async move { client.request_purchase(99).await });

        let (product_id, responder) = expect_purchase(&mut receiver)
            .await
            .expect("Expected Purchase request");
        responder.send(Err(VendError::UnknownProduct(product_id))).unwrap();

        let err = purchase_task.await.unwrap().unwrap_err();
        assert_eq!(err, VendError::UnknownProduct(99));
    }

    #[tokio::test]
    async fn dropped_service_maps_to_channel_closed() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let err = client.insert_coin(Denomination::OneEuro).await.unwrap_err();
        assert!(matches!(err, VendError::ChannelClosed(_)));
    }
}
