//! Lenient fragment parsing on top of `quick-xml`.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ParseError;
use crate::node::{Attribute, Element, Fragment, Node};

impl Fragment {
    /// Parses an HTML fragment.
    ///
    /// Declarations, processing instructions and doctypes are dropped.
    /// Elements still open at the end of input are closed implicitly.
    ///
    /// A `<` that cannot start a tag (`1 < 2`) is read as text, as browsers
    /// do, and serializes back as `&lt;`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the tokenizer cannot read the input at
    /// all, e.g. a tag left unclosed at end of input. Positions count from
    /// the start of the input after stray `<` characters are escaped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formstyle_markup::Fragment;
    ///
    /// let fragment = Fragment::parse("<input type=submit value='Send'>").unwrap();
    /// let input = fragment.nodes()[0].as_element().unwrap();
    /// assert_eq!(input.get_attribute("value").as_deref(), Some("Send"));
    /// ```
    pub fn parse(markup: &str) -> Result<Self, ParseError> {
        let markup = escape_stray_angles(markup);
        let mut reader = Reader::from_str(&markup);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        let mut tree = TreeBuilder::default();

        loop {
            let position = reader.buffer_position() as usize;
            match reader.read_event() {
                Ok(Event::Start(start)) => tree.open(element_from_start(&start, position)?),
                Ok(Event::Empty(start)) => {
                    tree.push(Node::Element(element_from_start(&start, position)?))
                }
                Ok(Event::End(end)) => {
                    let name = String::from_utf8_lossy(end.name().as_ref()).to_ascii_lowercase();
                    tree.close(&name);
                }
                Ok(Event::Text(text)) => {
                    tree.push(Node::Text(String::from_utf8_lossy(&text).into_owned()))
                }
                Ok(Event::CData(data)) => {
                    tree.push(Node::text(&String::from_utf8_lossy(&data)))
                }
                Ok(Event::Comment(comment)) => {
                    tree.push(Node::Comment(String::from_utf8_lossy(&comment).into_owned()))
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    return Err(ParseError::Syntax {
                        position,
                        message: err.to_string(),
                    })
                }
            }
        }

        Ok(Fragment {
            nodes: tree.finish(),
        })
    }
}

/// Whether the `<` at `index` can open a tag, comment or declaration.
fn opens_markup(bytes: &[u8], index: usize) -> bool {
    matches!(bytes.get(index + 1), Some(b) if b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?'))
}

/// Rewrites every `<` outside comments that cannot open markup as `&lt;`.
fn escape_stray_angles(markup: &str) -> Cow<'_, str> {
    let bytes = markup.as_bytes();
    if !(0..bytes.len()).any(|i| bytes[i] == b'<' && !opens_markup(bytes, i)) {
        return Cow::Borrowed(markup);
    }

    let mut out = String::with_capacity(markup.len() + 8);
    let mut rest = markup;
    while let Some(at) = rest.find('<') {
        let (before, tail) = rest.split_at(at);
        out.push_str(before);
        if tail.starts_with("<!--") {
            let end = tail.find("-->").map_or(tail.len(), |end| end + 3);
            out.push_str(&tail[..end]);
            rest = &tail[end..];
        } else if opens_markup(tail.as_bytes(), 0) {
            out.push('<');
            rest = &tail[1..];
        } else {
            out.push_str("&lt;");
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

// An unquoted value directly followed by `/>` loses the slash: quick-xml
// ends the tag there, so `value=Send/>` reads as `Send` where browsers
// read `Send/`. Quote such values in source markup.
fn element_from_start(start: &BytesStart<'_>, position: usize) -> Result<Element, ParseError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(&name);

    let mut attributes = start.html_attributes();
    attributes.with_checks(false);
    for attr in attributes {
        let attr = attr.map_err(|err| ParseError::Attribute {
            position,
            message: err.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_ascii_lowercase();
        // First occurrence wins, as in browsers.
        if element.has_attribute(&key) {
            continue;
        }
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        element.attributes.push(Attribute::from_raw(&key, raw));
    }

    Ok(element)
}

/// Stack of open elements; closed elements attach to their parent.
#[derive(Default)]
struct TreeBuilder {
    roots: Vec<Node>,
    open: Vec<Element>,
}

impl TreeBuilder {
    fn push(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn open(&mut self, element: Element) {
        if element.is_void() {
            self.push(Node::Element(element));
        } else {
            self.open.push(element);
        }
    }

    /// Closes up to and including the innermost open element named `name`.
    /// End tags with no matching open element are ignored.
    fn close(&mut self, name: &str) {
        if !self.open.iter().any(|el| el.name == name) {
            return;
        }
        while let Some(element) = self.open.pop() {
            let matched = element.name == name;
            self.push(Node::Element(element));
            if matched {
                break;
            }
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while let Some(element) = self.open.pop() {
            self.push(Node::Element(element));
        }
        self.roots
    }
}
