//! xmlb: a composable builder for well-formed XML documents
//!
//! This crate provides functionality to:
//! - Seed a fragment, optionally with an XML declaration
//! - Add tags, attributes, CDATA sections, comments and nested blocks
//! - Thread failures through the pipeline as values, first failure wins
//! - Finalize the fragment into a string
//!
//! New markup is placed before what is already accumulated, so siblings come
//! out in the reverse of the order they were added.
//!
//! # Examples
//! ```
//! use xmlb::{block_tag, end_xml, new, tag, Result};
//!
//! fn example() -> Result<()> {
//!     let owner = block_tag(new(), "owner", tag(new(), "email", "e@x.com"));
//!     assert_eq!(end_xml(owner)?, "<owner>\n<email>e@x.com</email>\n</owner>\n");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod attribute;
pub mod builder;
pub mod document;
pub mod error;
pub mod fragment;

// Re-exports
pub use attribute::{render_options, Opt};
pub use builder::{
    block_comment, block_tag, cdata_tag, comment, option_block_tag, option_content_tag,
    option_tag, tag, Builder,
};
pub use document::{end_xml, new, new_advanced_document, new_document, Declaration};
pub use error::{BuilderError, Result};
pub use fragment::{Fragment, Outcome};
