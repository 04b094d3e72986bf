//! Typed Rust client for the Timeweb Cloud HTTP API.
//!
//! The crate is layered: a domain layer of validated input types, a schemas
//! layer of response models, a transport layer describing requests, and a
//! client layer that puts them on the wire. Inputs are checked locally and
//! every violation is reported at once; nothing reaches the network until a
//! request is valid.
//!
//! ```rust,no_run
//! use twcloud::{Client, CreateServer, ServerHardware};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), twcloud::Error> {
//!     let client = Client::new(std::env::var("TIMEWEB_TOKEN").unwrap())?;
//!     let request = CreateServer::builder("web-1", 79, 200, ServerHardware::Preset(1631))
//!         .comment("primary web node")
//!         .build()?;
//!     let created = client.servers().create(&request).await?;
//!     println!("server {} is {:?}", created.server.id, created.server.status);
//!     Ok(())
//! }
//! ```
//!
//! A synchronous mirror of the client lives in [`blocking`] behind the
//! `blocking` cargo feature.
#![forbid(unsafe_code)]

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod domain;
mod error;
pub mod schemas;
mod transport;

pub use client::{Client, ClientBuilder};
pub use domain::{
    AllowedCountries, AllowedIps, BalancerRuleSpec, Configurator, CreateApiKey, CreateBalancer,
    CreateBucket, CreateCluster, CreateDatabase, CreateDedicatedServer, CreateImage,
    CreateMailbox, CreateProject, CreateServer, CreateSshKey, DbConfig, DnsRecordSpec,
    DnsRecordType, PaymentPeriod, Period, ProjectResourceKind, ServerAction, ServerHardware,
    UpdateBalancer, UpdateBucket, UpdateDatabase, UpdateMailbox, UpdateProject, UpdateServer,
    UpdateSshKey, ValidationError, Violation, WorkerGroup,
};
pub use error::{ApiFailure, Error, TransportError};
pub use transport::{Method, RequestDescriptor};
