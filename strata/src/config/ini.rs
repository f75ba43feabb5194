//! INI parsing into a nested configuration tree.
//!
//! The dialect supported here:
//!
//! ```ini
//! ; comments start with ';' or '#'
//! NODE_ENV = development
//!
//! [http]
//! port = 8080
//!
//! [a.b.c]          ; dotted headers nest sections
//! flag             ; a bare key is `true`
//! hosts[] = one    ; `key[]` appends to an array
//! hosts[] = two
//! quoted = "keeps ; and # literally"
//! ```
//!
//! Values are kept as strings apart from `true`, `false` and `null`; numeric
//! coercion belongs to the validator.

use std::fmt;

use serde_json::{Map, Value};

/// A parsed configuration tree: string keys to JSON-like values.
pub type ConfigTree = Map<String, Value>;

/// A syntax error at a specific line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong with the line.
    pub message: String,
}

impl ParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse INI text into a [`ConfigTree`].
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed section headers, lines without a
/// key, unterminated quotes, and keys that collide with sections.
///
/// # Examples
///
/// ```
/// use strata::config::ini;
/// use serde_json::json;
///
/// let tree = ini::parse("[http]\nport = 8080\n").unwrap();
/// assert_eq!(tree["http"], json!({"port": "8080"}));
/// ```
pub fn parse(contents: &str) -> Result<ConfigTree, ParseError> {
    let mut root = ConfigTree::new();
    let mut section: Vec<String> = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            section = parse_section_header(rest).map_err(|m| ParseError::new(line_no, m))?;
            table_at(&mut root, &section).map_err(|m| ParseError::new(line_no, m))?;
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim().to_string(), parse_value(value.trim())),
            None => (strip_comment(line), Ok(Value::Bool(true))),
        };
        let value = value.map_err(|m| ParseError::new(line_no, m))?;

        if key.is_empty() {
            return Err(ParseError::new(line_no, "missing key before '='"));
        }

        let table = table_at(&mut root, &section).map_err(|m| ParseError::new(line_no, m))?;
        assign(table, &key, value).map_err(|m| ParseError::new(line_no, m))?;
    }

    log::debug!("parsed {} top-level configuration keys", root.len());
    Ok(root)
}

/// Split a header body (everything after `[`) into section segments.
fn parse_section_header(rest: &str) -> Result<Vec<String>, String> {
    let Some(end) = rest.find(']') else {
        return Err("unterminated section header".to_string());
    };

    let trailing = rest[end + 1..].trim_start();
    if !trailing.is_empty() && !trailing.starts_with(';') && !trailing.starts_with('#') {
        return Err(format!("unexpected text after section header: {trailing}"));
    }

    let name = rest[..end].trim();
    if name.is_empty() {
        return Err("empty section name".to_string());
    }

    name.split('.')
        .map(|segment| {
            let segment = segment.trim();
            if segment.is_empty() {
                Err(format!("empty segment in section name [{name}]"))
            } else {
                Ok(segment.to_string())
            }
        })
        .collect()
}

/// Walk (creating as needed) the nested table addressed by `path`.
fn table_at<'a>(root: &'a mut ConfigTree, path: &[String]) -> Result<&'a mut ConfigTree, String> {
    let mut current = root;
    for segment in path {
        let entry = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        current = match entry {
            Value::Object(table) => table,
            _ => {
                return Err(format!(
                    "section [{}] conflicts with an existing value '{segment}'",
                    path.join(".")
                ))
            }
        };
    }
    Ok(current)
}

fn assign(table: &mut ConfigTree, key: &str, value: Value) -> Result<(), String> {
    if let Some(name) = key.strip_suffix("[]") {
        let name = name.trim();
        if name.is_empty() {
            return Err("missing key before '[]'".to_string());
        }
        return match table
            .entry(name.to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            Value::Array(items) => {
                items.push(value);
                Ok(())
            }
            _ => Err(format!("'{name}' is already set and is not an array")),
        };
    }

    if matches!(table.get(key), Some(Value::Object(_))) {
        return Err(format!("'{key}' conflicts with a section of the same name"));
    }
    // Repeated keys: the last assignment wins.
    table.insert(key.to_string(), value);
    Ok(())
}

fn parse_value(raw: &str) -> Result<Value, String> {
    if let Some(quote) = raw.chars().next().filter(|c| *c == '"' || *c == '\'') {
        let inner = &raw[1..];
        let Some(end) = inner.find(quote) else {
            return Err("unterminated quoted value".to_string());
        };
        let trailing = inner[end + 1..].trim_start();
        if !trailing.is_empty() && !trailing.starts_with(';') && !trailing.starts_with('#') {
            return Err(format!("unexpected text after quoted value: {trailing}"));
        }
        return Ok(Value::String(inner[..end].to_string()));
    }

    let value = strip_comment(raw);
    Ok(match value.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => Value::String(value),
    })
}

/// Cut an unquoted value at its first unescaped `;` or `#`.
fn strip_comment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some(';' | '#')) => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            ';' | '#' => break,
            _ => out.push(c),
        }
    }
    out.trim_end().to_string()
}
