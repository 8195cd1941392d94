/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod client;
pub mod errors;
pub mod json;
pub mod link;
pub mod match_policy;
pub mod render;
pub mod service_tags;
