//! # appconfig-resource-id
//!
//! Typed resource IDs for Azure App Configuration management API paths.
//!
//! ## Design Principles
//!
//! - An ID is an immutable value holding one string per hierarchy level
//! - Every ID type is defined by a constant segment schema, shared by the
//!   formatter and both parsers
//! - Formatting is infallible; parsing is strict by default and reports the
//!   first segment it could not satisfy
//! - Fixed segments may be matched case-insensitively; values never are
//!
//! ## ID Format
//!
//! IDs are `/`-prefixed, `/`-delimited paths alternating fixed segments and
//! caller-supplied values:
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.AppConfiguration/configurationStores/{configStoreName}/privateLinkResources/{groupName}
//! ```
//!
//! ```
//! use appconfig_resource_id::PrivateLinkResourceId;
//!
//! let id = PrivateLinkResourceId::new("sub1", "rg1", "store1", "group1");
//! let parsed = PrivateLinkResourceId::parse(&id.id()).unwrap();
//! assert_eq!(parsed, id);
//! ```

mod error;
mod macros;
pub mod schema;
mod types;

pub use error::{IdError, SegmentFault};
pub use schema::{Casing, Segment};
pub use types::*;
