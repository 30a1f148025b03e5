//! # Mock Framework
//!
//! [`MockClient<T>`] hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of expectations instead of an actor. Use it to test code that sits
//! *around* a client (error mapping, orchestration) without spawning actors.
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **State** | none, canned replies | real store |
//! | **Error injection** | `return_err` | needs a state that fails |
//! | **Use case** | client wrappers | the actor itself, full system |
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Bin { id: u32 }
//! #[derive(Debug)] struct BinCreate;
//! #[derive(Debug)] struct BinUpdate;
//! #[derive(Debug)] enum BinAction {}
//! #[derive(Debug, thiserror::Error)] #[error("bin error")] struct BinError;
//!
//! #[async_trait]
//! impl ActorEntity for Bin {
//!     type Id = u32; type Create = BinCreate; type Update = BinUpdate;
//!     type Action = BinAction; type ActionResult = (); type Context = (); type Error = BinError;
//!     fn from_create_params(id: u32, _: BinCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: BinUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: BinAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Bin>::new();
//!     mock.expect_get(7).return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().get(7).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For tests that need to inspect the exact payload a client sent, use
//! [`create_mock_client`] with [`expect_create`] / [`expect_action`] and answer by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List(Result<Vec<T>, FrameworkError>),
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Create(_) => "create",
            Expectation::Get { .. } => "get",
            Expectation::List(_) => "list",
            Expectation::Update { .. } => "update",
            Expectation::Delete { .. } => "delete",
            Expectation::Action { .. } => "action",
        }
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::List { .. } => "list",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Delete { .. } => "delete",
        ResourceRequest::Action { .. } => "action",
    }
}

type Shared<V> = Arc<Mutex<V>>;

fn lock<V>(shared: &Shared<V>) -> MutexGuard<'_, V> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Answers `respond_to` when the requested id matches, otherwise records a mismatch
/// and drops the responder (the caller sees `ActorDropped`).
fn reply_for<Id: PartialEq + std::fmt::Display, R>(
    kind: &str,
    requested: Id,
    expected: Id,
    respond_to: oneshot::Sender<Result<R, FrameworkError>>,
    response: Result<R, FrameworkError>,
    mismatches: &Shared<Vec<String>>,
) {
    if requested == expected {
        let _ = respond_to.send(response);
    } else {
        lock(mismatches).push(format!("{kind}: expected id {expected}, got {requested}"));
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. Requests that arrive
/// out of order, for a different id, or after the queue is empty are recorded and
/// reported by [`verify`](MockClient::verify).
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Shared<VecDeque<Expectation<T>>>,
    mismatches: Shared<Vec<String>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Shared<VecDeque<Expectation<T>>> = Arc::default();
        let mismatches: Shared<Vec<String>> = Arc::default();

        let queue = expectations.clone();
        let failures = mismatches.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => reply_for("get", id, expected, respond_to, response, &failures),
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => reply_for("update", id, expected, respond_to, response, &failures),
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => reply_for("delete", id, expected, respond_to, response, &failures),
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => reply_for("action", id, expected, respond_to, response, &failures),
                    (request, expectation) => {
                        let expected = expectation.as_ref().map_or("nothing", Expectation::kind);
                        lock(&failures).push(format!(
                            "unexpected {} request (expected {expected})",
                            request_kind(&request)
                        ));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn expect<R: 'static>(
        &mut self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            make: Box::new(make),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.expect(Expectation::Create)
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.expect(move |response| Expectation::Get { id, response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.expect(Expectation::List)
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.expect(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.expect(move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation for `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.expect(move |response| Expectation::Action { id, response })
    }

    /// Panics unless every expectation was consumed by a matching request.
    pub fn verify(&self) {
        let failures = lock(&self.mismatches);
        if !failures.is_empty() {
            panic!("Mock received mismatched requests: {failures:?}");
        }
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Completes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Shared<VecDeque<Expectation<T>>>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        lock(&self.expectations).push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client together with the receiving end of its channel.
///
/// Nothing answers automatically: pull requests with [`expect_create`] or
/// [`expect_action`], assert on the payload, then reply through the returned sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        label: String,
    }

    #[derive(Debug)]
    struct ShelfUpdate;

    #[derive(Debug)]
    enum ShelfAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("shelf error")]
    struct ShelfError;

    #[async_trait]
    impl ActorEntity for Shelf {
        type Id = u32;
        type Create = ShelfCreate;
        type Update = ShelfUpdate;
        type Action = ShelfAction;
        type ActionResult = ();
        type Context = ();
        type Error = ShelfError;

        fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _: ShelfUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: ShelfAction, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn shelf(id: u32, label: &str) -> Shelf {
        Shelf {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_channel_create() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(ShelfCreate {
                    label: "A1".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "A1");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(shelf(1, "A1")));
        mock.expect_list().return_ok(vec![shelf(1, "A1"), shelf(2, "B2")]);
        mock.expect_update(1).return_ok(shelf(1, "A9"));
        mock.expect_delete(2).return_ok(());

        let client = mock.client();
        let id = client
            .create(ShelfCreate {
                label: "A1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(client.get(1).await.unwrap(), Some(shelf(1, "A1")));
        assert_eq!(client.list().await.unwrap().len(), 2);
        assert_eq!(client.update(1, ShelfUpdate).await.unwrap().label, "A9");
        client.delete(2).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_wrong_id_is_reported() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }

    #[tokio::test]
    #[should_panic(expected = "1 remaining")]
    async fn test_unmet_expectation_panics() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_list().return_ok(Vec::new());
        mock.verify();
    }
}
