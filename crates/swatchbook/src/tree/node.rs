//! Typed token tree nodes.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// A leaf design token: one value plus its free-text type tag.
///
/// The value is either a literal (`"#1369e9"`, `"16px"`) or an alias
/// reference written as `{dot.delimited.path}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Raw value as written in the export.
    pub value: String,
    /// Type tag such as `color`, `dimension`, `spacing` or `borderRadius`.
    #[serde(rename = "type")]
    pub token_type: String,
    /// Optional free-text description carried by some exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Token {
    /// Creates a token without a description.
    pub fn new(value: impl Into<String>, token_type: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            token_type: token_type.into(),
            description: None,
        }
    }

    /// Attaches a description, returning the updated token for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` if the raw value is an alias reference.
    pub fn is_alias(&self) -> bool {
        crate::alias::is_alias(&self.value)
    }

    fn from_map(map: &Map<String, Value>) -> Option<Self> {
        let (value, token_type) = match (map.get("value"), map.get("type")) {
            (Some(value), Some(token_type)) => (value, token_type),
            _ => (map.get("$value")?, map.get("$type")?),
        };

        let description = map
            .get("description")
            .or_else(|| map.get("$description"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self {
            value: scalar_text(value),
            token_type: scalar_text(token_type),
            description,
        })
    }
}

/// A node of the token tree.
///
/// Groups keep the key order of the source document, so every "first" and
/// "encounter order" rule downstream is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenNode {
    /// A leaf token.
    Token(Token),
    /// A mapping from key to further nodes.
    Group(IndexMap<String, TokenNode>),
    /// Anything that is neither a token nor a mapping (strings, numbers,
    /// arrays, null). Traversal treats it as a dead end.
    Unparseable(Value),
}

impl TokenNode {
    /// Converts raw JSON into a typed node.
    ///
    /// An object carrying both `value` and `type` (or `$value` and `$type`)
    /// is a token; any other object is a group; everything else is
    /// [`TokenNode::Unparseable`]. This never fails.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => match Token::from_map(map) {
                Some(token) => TokenNode::Token(token),
                None => TokenNode::Group(
                    map.iter()
                        .map(|(key, child)| (key.clone(), TokenNode::from_value(child)))
                        .collect(),
                ),
            },
            other => TokenNode::Unparseable(other.clone()),
        }
    }

    /// Creates an empty group.
    pub fn empty() -> Self {
        TokenNode::Group(IndexMap::new())
    }

    /// Returns `true` if this node is a leaf token.
    pub fn is_token(&self) -> bool {
        matches!(self, TokenNode::Token(_))
    }

    /// Returns the token if this node is a leaf.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            TokenNode::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Returns the children if this node is a group.
    pub fn as_group(&self) -> Option<&IndexMap<String, TokenNode>> {
        match self {
            TokenNode::Group(children) => Some(children),
            _ => None,
        }
    }

    /// Looks up a direct child by key. Non-groups have no children.
    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.as_group().and_then(|children| children.get(key))
    }

    /// Iterates direct children in document order. Empty for non-groups.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TokenNode)> {
        self.as_group()
            .into_iter()
            .flat_map(|children| children.iter().map(|(key, node)| (key.as_str(), node)))
    }
}

impl Default for TokenNode {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&Value> for TokenNode {
    fn from(value: &Value) -> Self {
        TokenNode::from_value(value)
    }
}

impl From<Value> for TokenNode {
    fn from(value: Value) -> Self {
        TokenNode::from_value(&value)
    }
}

impl From<Token> for TokenNode {
    fn from(token: Token) -> Self {
        TokenNode::Token(token)
    }
}

/// Returns `true` iff the node is a leaf token.
pub fn is_token(node: &TokenNode) -> bool {
    node.is_token()
}

/// Renders a JSON value as token text.
///
/// Composite values (typography objects, shadow lists) are kept as compact
/// JSON so they still round-trip through search and export.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        composite => composite.to_string(),
    }
}
