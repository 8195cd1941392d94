/*-------------------------------------------------------------------------------------------------
  aztagpolicy Library
-------------------------------------------------------------------------------------------------*/

//! Download the Azure IP Ranges and Service Tags dataset, select a service tag by name,
//! and render the tag's address prefixes into a Terraform ACL allow-list policy
//! document.

pub mod core;

/*--------------------------------------------------------------------------------------
  Library Interface
--------------------------------------------------------------------------------------*/

pub use crate::core::client::{get_service_tags, Client, ClientBuilder};
pub use crate::core::errors::{Error, Result};
pub use crate::core::match_policy::MatchPolicy;
pub use crate::core::render::acl_policies;
pub use crate::core::service_tags::{ServiceTag, ServiceTags};
