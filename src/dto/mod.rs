//! DTO modules that bridge the list engine and services with renderers.

pub mod list;
pub mod pipeline;
