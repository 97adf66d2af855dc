//! Fragment tree types and serialization.

use std::borrow::Cow;

use quick_xml::escape::{escape, partial_escape, unescape};

/// Elements that never have content or an end tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A single `name="value"` pair on an element.
///
/// The value is held exactly as it appeared in the source (entities and
/// all). Use [`Attribute::value`] for the decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    raw: String,
}

impl Attribute {
    /// Creates an attribute from an unescaped value.
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            raw: escape(value).into_owned(),
        }
    }

    /// Creates an attribute from already-escaped source text.
    pub fn from_raw(name: &str, raw: impl Into<String>) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            raw: raw.into(),
        }
    }

    /// Lower-cased attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value as written in the source markup.
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    /// The decoded value.
    ///
    /// Entities the XML unescaper does not know (HTML named entities such
    /// as `&nbsp;`) leave the value as written.
    pub fn value(&self) -> Cow<'_, str> {
        unescape(&self.raw).unwrap_or(Cow::Borrowed(self.raw.as_str()))
    }

    /// Appends unescaped text to the value, leaving existing source text as is.
    pub fn append_value(&mut self, value: &str) {
        self.raw.push_str(&escape(value));
    }

    fn write(&self, out: &mut String) {
        out.push(' ');
        out.push_str(&self.name);
        out.push_str("=\"");
        // Values lifted from single-quoted source may carry bare double quotes.
        out.push_str(&self.raw.replace('"', "&quot;"));
        out.push('"');
    }
}

/// An element with its attributes (in source order) and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    /// Creates an empty element. The name is lower-cased.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Lower-cased tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether this is a void element (see [`VOID_ELEMENTS`]).
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }

    /// Looks up an attribute by name, case-insensitively.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    /// Decoded value of the named attribute, if present.
    pub fn get_attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        self.attribute(name).map(Attribute::value)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Sets an attribute from an unescaped value.
    ///
    /// An existing attribute of the same name is overwritten in place, so
    /// attribute order is preserved; otherwise the attribute is appended.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.put_attribute(Attribute::new(name, value));
    }

    /// Inserts a prepared attribute with the same in-place semantics as
    /// [`Element::set_attribute`].
    pub fn put_attribute(&mut self, attribute: Attribute) {
        match self
            .attributes
            .iter_mut()
            .find(|existing| existing.name == attribute.name)
        {
            Some(existing) => *existing = attribute,
            None => self.attributes.push(attribute),
        }
    }

    /// Removes and returns the named attribute.
    pub fn remove_attribute(&mut self, name: &str) -> Option<Attribute> {
        let index = self
            .attributes
            .iter()
            .position(|attr| attr.name.eq_ignore_ascii_case(name))?;
        Some(self.attributes.remove(index))
    }

    pub fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Concatenated decoded text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(&self.children, &mut text);
        text
    }

    /// Serializes this element and its subtree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for attr in &self.attributes {
            attr.write(out);
        }
        out.push('>');

        if self.is_void() && self.children.is_empty() {
            return;
        }

        for child in &self.children {
            child.write(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

/// A node in a parsed fragment.
///
/// Text and comment payloads hold source text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    /// A text node from unescaped content.
    pub fn text(content: &str) -> Self {
        Node::Text(partial_escape(content).into_owned())
    }

    /// A text node carrying an attribute's value as content.
    ///
    /// Entity references in the value stay as written; only the angle
    /// brackets that attribute values may contain unescaped are encoded.
    pub fn text_from_attribute(attribute: &Attribute) -> Self {
        Node::Text(attribute.raw.replace('<', "&lt;").replace('>', "&gt;"))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write(out),
            Node::Text(raw) => out.push_str(raw),
            Node::Comment(raw) => {
                out.push_str("<!--");
                out.push_str(raw);
                out.push_str("-->");
            }
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Element(element) => collect_text(&element.children, out),
            Node::Text(raw) => match unescape(raw) {
                Ok(text) => out.push_str(&text),
                Err(_) => out.push_str(raw),
            },
            Node::Comment(_) => {}
        }
    }
}

/// Location of a node inside a [`Fragment`]: child indices from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Number of ancestors plus one; a top-level node has depth 1.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// A parsed sequence of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub(crate) nodes: Vec<Node>,
}

impl Fragment {
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds the first element, in document order, matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<NodePath>
    where
        P: Fn(&Element) -> bool,
    {
        let mut path = Vec::new();
        if find_in(&self.nodes, &predicate, &mut path) {
            Some(NodePath(path))
        } else {
            None
        }
    }

    /// Counts the elements matching `predicate`.
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Element) -> bool,
    {
        count_in(&self.nodes, &predicate)
    }

    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        let (last, parents) = path.0.split_last()?;
        let mut siblings = &self.nodes;
        for &index in parents {
            siblings = &siblings.get(index)?.as_element()?.children;
        }
        siblings.get(*last)
    }

    pub fn element(&self, path: &NodePath) -> Option<&Element> {
        self.get(path)?.as_element()
    }

    /// Puts `node` where the node at `path` was, returning the old node.
    ///
    /// Returns `None` (and leaves the fragment untouched) when the path
    /// does not resolve.
    pub fn replace(&mut self, path: &NodePath, node: Node) -> Option<Node> {
        let (last, parents) = path.0.split_last()?;
        let mut siblings = &mut self.nodes;
        for &index in parents {
            siblings = match siblings.get_mut(index)? {
                Node::Element(element) => &mut element.children,
                _ => return None,
            };
        }
        let slot = siblings.get_mut(*last)?;
        Some(std::mem::replace(slot, node))
    }

    /// Serializes every top-level node.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write(&mut out);
        }
        out
    }
}

fn find_in<P>(nodes: &[Node], predicate: &P, path: &mut Vec<usize>) -> bool
where
    P: Fn(&Element) -> bool,
{
    for (index, node) in nodes.iter().enumerate() {
        if let Node::Element(element) = node {
            path.push(index);
            if predicate(element) || find_in(&element.children, predicate, path) {
                return true;
            }
            path.pop();
        }
    }
    false
}

fn count_in<P>(nodes: &[Node], predicate: &P) -> usize
where
    P: Fn(&Element) -> bool,
{
    nodes
        .iter()
        .filter_map(Node::as_element)
        .map(|element| usize::from(predicate(element)) + count_in(&element.children, predicate))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Element {
        let mut el = Element::new("BUTTON");
        el.set_attribute("type", "submit");
        el.set_attribute("class", "btn");
        el.push_child(Node::text("Go"));
        el
    }

    #[test]
    fn test_element_name_lowercased() {
        assert_eq!(button().name(), "button");
    }

    #[test]
    fn test_set_attribute_keeps_position() {
        let mut el = button();
        el.set_attribute("type", "reset");
        let names: Vec<_> = el.attributes().iter().map(Attribute::name).collect();
        assert_eq!(names, vec!["type", "class"]);
        assert_eq!(el.get_attribute("type").as_deref(), Some("reset"));
    }

    #[test]
    fn test_set_attribute_appends_new() {
        let mut el = button();
        el.set_attribute("id", "go");
        assert_eq!(el.attributes().last().map(Attribute::name), Some("id"));
    }

    #[test]
    fn test_attribute_lookup_case_insensitive() {
        let el = button();
        assert!(el.has_attribute("CLASS"));
    }

    #[test]
    fn test_remove_attribute() {
        let mut el = button();
        let removed = el.remove_attribute("class").unwrap();
        assert_eq!(removed.raw_value(), "btn");
        assert!(!el.has_attribute("class"));
        assert!(el.remove_attribute("class").is_none());
    }

    #[test]
    fn test_attribute_new_escapes() {
        let attr = Attribute::new("data-x", r#"a "b" & c"#);
        assert_eq!(attr.raw_value(), "a &quot;b&quot; &amp; c");
        assert_eq!(attr.value(), r#"a "b" & c"#);
    }

    #[test]
    fn test_append_value_escapes_only_new_text() {
        let mut attr = Attribute::from_raw("class", "a&amp;b");
        attr.append_value(r#" x"y"#);
        assert_eq!(attr.raw_value(), "a&amp;b x&quot;y");
    }

    #[test]
    fn test_attribute_value_unknown_entity_kept() {
        let attr = Attribute::from_raw("value", "Send&nbsp;now");
        assert_eq!(attr.value(), "Send&nbsp;now");
    }

    #[test]
    fn test_element_to_html() {
        assert_eq!(
            button().to_html(),
            r#"<button type="submit" class="btn">Go</button>"#
        );
    }

    #[test]
    fn test_void_element_has_no_end_tag() {
        let mut el = Element::new("input");
        el.set_attribute("type", "submit");
        assert_eq!(el.to_html(), r#"<input type="submit">"#);
    }

    #[test]
    fn test_raw_double_quote_escaped_on_write() {
        let mut el = Element::new("input");
        el.put_attribute(Attribute::from_raw("onclick", r#"go("x")"#));
        assert_eq!(el.to_html(), r#"<input onclick="go(&quot;x&quot;)">"#);
    }

    #[test]
    fn test_text_from_attribute_encodes_brackets_only() {
        let attr = Attribute::from_raw("value", "a<b &amp; c");
        assert_eq!(
            Node::text_from_attribute(&attr),
            Node::Text("a&lt;b &amp; c".to_string())
        );
    }

    #[test]
    fn test_text_content_decodes() {
        let mut el = Element::new("p");
        el.push_child(Node::Text("Fish &amp; ".to_string()));
        let mut inner = Element::new("b");
        inner.push_child(Node::text("Chips"));
        el.push_child(Node::Element(inner));
        el.push_child(Node::Comment("ignored".to_string()));
        assert_eq!(el.text_content(), "Fish & Chips");
    }

    #[test]
    fn test_fragment_find_and_replace_nested() {
        let mut wrapper = Element::new("div");
        wrapper.push_child(Node::text("before"));
        wrapper.push_child(Node::Element(button()));
        let mut fragment = Fragment::from_nodes(vec![Node::Element(wrapper)]);

        let path = fragment.find(|el| el.name() == "button").unwrap();
        assert_eq!(path.indices(), &[0, 1]);
        assert_eq!(path.depth(), 2);

        let old = fragment.replace(&path, Node::text("gone")).unwrap();
        assert!(old.as_element().is_some());
        assert_eq!(fragment.to_html(), "<div>beforegone</div>");
    }

    #[test]
    fn test_fragment_find_none() {
        let fragment = Fragment::from_nodes(vec![Node::text("plain")]);
        assert!(fragment.find(|_| true).is_none());
    }

    #[test]
    fn test_fragment_replace_bad_path() {
        let mut fragment = Fragment::from_nodes(vec![Node::text("plain")]);
        let path = NodePath(vec![0, 3]);
        assert!(fragment.replace(&path, Node::text("x")).is_none());
        assert_eq!(fragment.to_html(), "plain");
    }

    #[test]
    fn test_fragment_count() {
        let mut wrapper = Element::new("div");
        wrapper.push_child(Node::Element(button()));
        wrapper.push_child(Node::Element(button()));
        let fragment = Fragment::from_nodes(vec![Node::Element(wrapper)]);
        assert_eq!(fragment.count(|el| el.name() == "button"), 2);
        assert_eq!(fragment.count(|_| true), 3);
    }
}
