//! Outbound notification for Trove.
//!
//! The dispatcher turns a validated order or wish into a formatted,
//! escaped text message and delivers it to the operator's messaging
//! channel. Delivery failures are reported, never raised: the caller
//! gets a [`DeliveryReport`] either way and decides whether a failed
//! notification should block its own flow.
//!
//! The crate also carries the image-hosting client the admin panel uses
//! to turn uploads into hosted URLs.

mod config;
mod dispatcher;
mod error;
mod escape;
mod image_host;
mod message;
mod transport;

pub use config::{ImageHostConfig, NotifyConfig};
pub use dispatcher::{DeliveryReport, Dispatcher, Notification};
pub use error::NotifyError;
pub use escape::escape_markdown;
pub use image_host::{HostedImage, ImageHostClient};
pub use message::{render_order, render_wish};
pub use transport::{ApiAck, HttpTransport, OutboundMessage, Transport, TransportError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        DeliveryReport, Dispatcher, HostedImage, ImageHostClient, ImageHostConfig, Notification,
        NotifyConfig, NotifyError,
    };
}
