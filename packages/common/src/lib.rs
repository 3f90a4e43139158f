//! Common - Shared Interfaces for the Token Pool Contracts
//!
//! This package provides the message types a token pool uses to talk to its
//! collaborators: the router that authorizes ramps and the risk management
//! network (RMN) that can curse a chain.

pub mod rmn;
pub mod router;

pub use rmn::{IsCursedResponse, RmnQueryMsg};
pub use router::{IsOffRampResponse, OnRampResponse, RouterQueryMsg};
