//! Delivery of envelopes to a Flume agent's HTTP source
//!
//! Every call to [`FlumeForward::deliver`] performs exactly one POST. Nothing is retried,
//! batched or buffered: the caller gets a [`DeliveryOutcome`] and the event is dropped.
//!
//! # Example
//!
//! ```rust,no_run
//! # use flume_relay::config::Config;
//! # use flume_relay::envelope::{Envelope, EventType};
//! # use flume_relay::exporters::flume_forward::FlumeForward;
//! #
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let forwarder = FlumeForward::try_new(&Config::default())?;
//! let envelope = Envelope::build(serde_json::json!({"level": "INFO"}), EventType::BackendLog);
//! let outcome = forwarder.deliver(&envelope).await;
//! println!("delivered: {}", outcome.is_success());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod outcome;

pub use client::FlumeForward;
pub use error::{FlumeForwardError, FlumeForwardResult};
pub use outcome::DeliveryOutcome;
