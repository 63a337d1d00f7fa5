use pagecraft_document::FieldId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual page node
///
/// Both render surfaces consume this tree; nothing here is tied to a real
/// DOM. Attribute and style maps are ordered so serialized output is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// HTML-ish element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<Node>,
        /// Field identifier for editable units (rendered as `data-field`)
        #[serde(skip_serializing_if = "Option::is_none")]
        field: Option<String>,
    },

    /// Text node
    Text { content: String },
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
            field: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    /// Merge `(css-name, value)` pairs into the inline style map.
    pub fn with_style_pairs(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        if let Node::Element { ref mut styles, .. } = self {
            for (key, value) in pairs {
                styles.insert(key.to_string(), value);
            }
        }
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        if let Node::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<Node>) -> Self {
        if let Node::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(Node::text(content))
    }

    pub fn with_field(mut self, id: &FieldId) -> Self {
        if let Node::Element { ref mut field, .. } = self {
            *field = Some(id.to_string());
        }
        self
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Node::Element { field, .. } => field.as_deref(),
            Node::Text { .. } => None,
        }
    }

    /// Depth-first search for the editable unit carrying `id`.
    pub fn find_field_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.field() == Some(id) {
            return Some(self);
        }
        match self {
            Node::Element { children, .. } => {
                children.iter_mut().find_map(|c| c.find_field_mut(id))
            }
            Node::Text { .. } => None,
        }
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        if let Node::Element { attributes, .. } = self {
            attributes.insert(key.into(), value.into());
        }
    }

    /// Serialize the tree to HTML text for the preview surface.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text { content } => out.push_str(&escape(content)),
            Node::Element {
                tag,
                attributes,
                styles,
                children,
                field,
            } => {
                out.push('<');
                out.push_str(tag);

                if let Some(id) = field {
                    out.push_str(" data-field=\"");
                    out.push_str(&escape(id));
                    out.push('"');
                }
                for (key, value) in attributes {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    out.push_str(&escape(value));
                    out.push('"');
                }
                if !styles.is_empty() {
                    out.push_str(" style=\"");
                    let mut first = true;
                    for (key, value) in styles {
                        if !first {
                            out.push(' ');
                        }
                        first = false;
                        out.push_str(key);
                        out.push_str(": ");
                        out.push_str(&escape(value));
                        out.push(';');
                    }
                    out.push('"');
                }

                if is_void(tag) {
                    out.push_str(" />");
                    return;
                }

                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input")
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
