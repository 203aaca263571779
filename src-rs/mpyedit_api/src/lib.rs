#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! MicroPython API catalogs and board compatibility checks for the editor

mod catalog;
mod compat;
mod node;
mod surface;
mod words;

pub use catalog::ApiCatalog;
pub use compat::is_api_used_compatible;
pub use node::ApiNode;
pub use surface::{base_catalog, extra_catalog, full_catalog};
pub use words::{base_api, compatible_api, full_api};

pub use mpyedit_board::{Capability, UnrecognizedBoard};
