//! Scoped HTML tag building for formkit
//!
//! This crate provides the markup layer the form inputs are built on:
//! - [`Markup`] for text that is already escaped, and [`Content`] for element bodies
//! - [`Attributes`] maps with left-to-right merging
//! - the [`ElementRenderer`] primitive and its default [`HtmlRenderer`]
//! - [`TagBuilder`], a nested builder that flushes each element once its
//!   subtree is complete

pub mod attributes;
pub mod builder;
pub mod element;
pub mod error;
pub mod markup;

pub use attributes::{AttrValue, Attributes};
pub use builder::TagBuilder;
pub use element::{ElementRenderer, FORM_ELEMENTS, HtmlRenderer, VOID_ELEMENTS};
pub use error::{RenderError, RenderResult};
pub use markup::{Content, Markup, html_escape};
