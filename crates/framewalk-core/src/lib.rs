//! Allocation-free network frame parsing and in-place mutation.
//!
//! This crate implements the receive-path core: a forward-only [`Cursor`]
//! over a fixed-capacity [`Frame`], bounds-checked decoders for the
//! Ethernet/VLAN/IPv4/IPv6/ICMP header chain, incremental one's-complement
//! checksum arithmetic, and the in-place mutation primitives built on top
//! of them (endpoint swaps, TTL decrement, VLAN tag push/pop, ICMP echo
//! turnaround).
//!
//! Nothing here allocates or loops over input-controlled bounds: the only
//! data-dependent iteration is the VLAN stack walk, capped at
//! [`constants::VLAN_MAX_DEPTH`].

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constants;
pub mod csum;
pub mod cursor;
pub mod error;
pub mod frame;
pub mod mutate;
pub mod types;
pub mod wire;

pub use cursor::Cursor;
pub use error::FrameError;
pub use frame::Frame;
pub use types::{InvalidLength, MacAddr, VlanTci};
