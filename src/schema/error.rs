use std::fmt;

/// One step of a JSON path into a candidate object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaPathElem {
    /// Object key.
    Field(String),
    /// Array index.
    Index(usize),
}

/// An authored item, a resolved item or the theme failed the scene schema registry.
///
/// Always fatal for the load or compile that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Index of the template item, when raised during a compile.
    pub item: Option<usize>,
    /// Path of the offending field, relative to the item.
    pub path: Vec<SchemaPathElem>,
    /// Human-readable reason.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            item: None,
            path: path.to_vec(),
            message: message.into(),
        }
    }

    pub(crate) fn root(message: impl Into<String>) -> Self {
        Self::at(&[], message)
    }

    /// Attach the template item index.
    pub fn at_item(mut self, item: usize) -> Self {
        self.item = Some(item);
        self
    }

    /// Name of the innermost object key on the path.
    pub fn field(&self) -> Option<&str> {
        self.path.iter().rev().find_map(|p| match p {
            SchemaPathElem::Field(name) => Some(name.as_str()),
            SchemaPathElem::Index(_) => None,
        })
    }

    /// Path rendered as `$.items[2].images[1]`.
    pub fn path_string(&self) -> String {
        let mut s = String::from("$");
        if let Some(i) = self.item {
            s.push_str(".items[");
            s.push_str(&i.to_string());
            s.push(']');
        }
        for p in &self.path {
            match p {
                SchemaPathElem::Field(name) => {
                    s.push('.');
                    s.push_str(name);
                }
                SchemaPathElem::Index(i) => {
                    s.push('[');
                    s.push_str(&i.to_string());
                    s.push(']');
                }
            }
        }
        s
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path_string(), self.message)
    }
}

impl std::error::Error for ValidationError {}
