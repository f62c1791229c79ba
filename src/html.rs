//! HTML processing utilities
//!
//! This module provides the read-only queries run against BLFS pages:
//!
//! - Extracting the page title and `pre.userinput` command blocks
//! - Discovering package page links on a chapter index
//! - Writing a package page in the plain-text output format

mod extraction;

pub use extraction::{
    extract_package_links, extract_title, extract_user_input_blocks, write_package,
};
