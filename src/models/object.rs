// file: src/models/object.rs
// description: documented api symbol entries and their kind metadata
// reference: sphinx domain object inventory

use serde::{Deserialize, Serialize};

/// Wire form of one object: `[document index, kind code, priority, anchor]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord(pub usize, pub u32, pub i32, pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectPriority {
    Important,
    Default,
    Unimportant,
    Hidden,
    Other(i32),
}

impl ObjectPriority {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ObjectPriority::Important,
            1 => ObjectPriority::Default,
            2 => ObjectPriority::Unimportant,
            -1 => ObjectPriority::Hidden,
            other => ObjectPriority::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectPriority::Important => "important",
            ObjectPriority::Default => "default",
            ObjectPriority::Unimportant => "unimportant",
            ObjectPriority::Hidden => "hidden",
            ObjectPriority::Other(_) => "other",
        }
    }
}

/// Kind metadata joined from `objtypes` and `objnames`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectKind {
    pub code: u32,
    /// `domain:role`, e.g. `py:method`.
    pub qualified: String,
    pub domain: String,
    pub role: String,
    pub label: String,
}

impl ObjectKind {
    pub fn matches(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.qualified.to_lowercase() == filter
            || self.role.to_lowercase() == filter
            || self.label.to_lowercase() == filter
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEntry {
    pub prefix: String,
    pub name: String,
    pub doc: usize,
    pub kind_code: u32,
    pub priority: i32,
    pub anchor: String,
}

impl ObjectEntry {
    pub fn from_record(prefix: &str, name: &str, record: &ObjectRecord) -> Self {
        Self {
            prefix: prefix.to_string(),
            name: name.to_string(),
            doc: record.0,
            kind_code: record.1,
            priority: record.2,
            anchor: record.3.clone(),
        }
    }

    pub fn fullname(&self) -> String {
        if self.prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.prefix, self.name)
        }
    }

    pub fn priority(&self) -> ObjectPriority {
        ObjectPriority::from_code(self.priority)
    }

    /// Fragment locating the object on its page. An empty anchor stands for
    /// the full name, `-` for `<role>-<full name>`.
    pub fn resolve_anchor(&self, kind: Option<&ObjectKind>) -> String {
        match self.anchor.as_str() {
            "" => self.fullname(),
            "-" => match kind {
                Some(kind) => format!("{}-{}", kind.role, self.fullname()),
                None => self.fullname(),
            },
            other => other.to_string(),
        }
    }
}
