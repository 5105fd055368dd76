//! # Shmtel Channel
//!
//! Configuration-driven access to POSIX shared-memory telemetry regions.
//!
//! The platform creates and sizes each region and publishes fixed-layout
//! records into it. This crate only attaches to existing regions: a
//! [`ChannelTable`] names each region with its size and owning [`Role`], and
//! a [`Channel`] maps one region at a time for snapshot reads and
//! role-checked writes.
//!
//! ```text
//!  channels.toml ──► ChannelTable ──► Channel::open(name, role)
//!                                        │
//!                          shm_open(O_RDWR) + mmap(size)
//!                                        │
//!              read() / read_record::<R>() │ write() / write_record(&r)
//! ```
//!
//! ## Error handling
//!
//! Every operation returns [`ChannelResult`]. [`ChannelError::category`]
//! splits failures into configuration, resource, state and codec classes so
//! a poll loop can decide whether to skip a cycle or give up. Nothing
//! retries internally.

#![warn(missing_docs)]

pub mod channel;
pub mod config;
pub mod error;
pub mod role;

pub use channel::Channel;
pub use config::{ChannelSpec, ChannelTable, ConfigError};
pub use error::{ChannelError, ChannelResult, ErrorCategory};
pub use role::Role;
