//! # formstyle-markup - HTML fragment model for control rewriting
//!
//! A deliberately small HTML fragment parser and serializer. It turns a
//! snippet of markup (usually one form control, sometimes wrapped in a
//! container) into a tree of [`Node`]s, lets callers locate and replace
//! elements, and writes a single element subtree back out.
//!
//! Parsing is lenient in the ways rendered HTML tends to need:
//!
//! - Unquoted and valueless attributes (`value=Send`, `disabled`)
//! - Void elements without a closing slash (`<input ...>`)
//! - Unmatched or mismatched end tags are tolerated, not rejected
//! - Tag and attribute names are case-insensitive (stored lower-cased)
//!
//! Attribute values and text keep their source escaping byte-for-byte, so
//! a parse/serialize round trip never double-escapes entities. Values set
//! through the API are escaped on the way in.
//!
//! ## Example
//!
//! ```rust
//! use formstyle_markup::{Element, Fragment, Node};
//!
//! let mut fragment = Fragment::parse(r#"<p><input type="text" name="q"></p>"#).unwrap();
//! let path = fragment.find(|el| el.name() == "input").unwrap();
//!
//! let mut label = Element::new("span");
//! label.push_child(Node::text("search"));
//! fragment.replace(&path, Node::Element(label));
//!
//! assert_eq!(fragment.to_html(), "<p><span>search</span></p>");
//! ```

mod error;
mod node;
mod parse;

pub use error::ParseError;
pub use node::{Attribute, Element, Fragment, Node, NodePath, VOID_ELEMENTS};
