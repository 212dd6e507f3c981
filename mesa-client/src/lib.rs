//! Mesa Client - typed API client for the Mesa server
//!
//! Provides an explicit [`Session`] context (no ambient credential storage),
//! per-resource API calls, response-shape normalization, and the client-local
//! [`OrderDraft`] builder for composing orders before submission.
//!
//! # Example
//!
//! ```ignore
//! use mesa_client::{ClientConfig, MesaClient, OrderDraft};
//!
//! let mut client = MesaClient::new(&ClientConfig::new("http://localhost:3000"))?;
//! client.login("admin", "admin").await?;
//!
//! let products = client.products().await?;
//! let mut draft = OrderDraft::new(table_id);
//! draft.add_item(&products, &products[0].id, 2, None)?;
//! let order = client.submit_draft(&mut draft).await?;
//! ```

pub mod client;
pub mod config;
pub mod draft;
pub mod error;
pub mod format;
pub mod normalize;
pub mod session;

pub use client::MesaClient;
pub use config::ClientConfig;
pub use draft::{DraftError, DraftItem, OrderDraft};
pub use error::{ClientError, ClientResult};
pub use session::Session;
