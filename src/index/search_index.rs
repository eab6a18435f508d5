// file: src/index/search_index.rs
// description: typed search index with key-based lookups
// reference: sphinx html builder searchindex format

use crate::error::Result;
use crate::models::{Document, ObjectEntry, ObjectKind, ObjectRecord, Postings};
use crate::parser::TermNormalizer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub type PostingMap = BTreeMap<String, Postings>;
pub type ObjectMap = BTreeMap<String, BTreeMap<String, ObjectRecord>>;
pub type KindTypes = BTreeMap<String, String>;
pub type KindNames = BTreeMap<String, (String, String, String)>;

static NO_POSTINGS: PostingMap = BTreeMap::new();
static NO_OBJECTS: ObjectMap = BTreeMap::new();
static NO_KIND_TYPES: KindTypes = BTreeMap::new();
static NO_KIND_NAMES: KindNames = BTreeMap::new();

/// The generated index, field for field. Fields this crate does not model
/// (`envversion`, `alltitles`, ...) are kept in `extra` so writing the index
/// back never loses data. Optional tables stay absent on output when they
/// were absent on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub docnames: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filenames: Option<Vec<String>>,
    pub titles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<PostingMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titleterms: Option<PostingMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<ObjectMap>,
    /// Kind code to `domain:role`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objtypes: Option<KindTypes>,
    /// Kind code to `[domain, role, label]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objnames: Option<KindNames>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub documents: usize,
    pub terms: usize,
    pub title_terms: usize,
    pub postings: usize,
    pub object_prefixes: usize,
    pub objects: usize,
    pub object_kinds: usize,
}

impl IndexStats {
    pub fn format(&self) -> String {
        format!(
            "documents: {}\nterms: {} ({} postings)\ntitle terms: {}\nobjects: {} under {} prefixes\nobject kinds: {}",
            self.documents,
            self.terms,
            self.postings,
            self.title_terms,
            self.objects,
            self.object_prefixes,
            self.object_kinds
        )
    }
}

impl SearchIndex {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn len(&self) -> usize {
        self.docnames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docnames.is_empty()
    }

    pub fn filenames(&self) -> &[String] {
        self.filenames.as_deref().unwrap_or_default()
    }

    pub fn terms(&self) -> &PostingMap {
        self.terms.as_ref().unwrap_or(&NO_POSTINGS)
    }

    pub fn title_terms(&self) -> &PostingMap {
        self.titleterms.as_ref().unwrap_or(&NO_POSTINGS)
    }

    pub fn object_map(&self) -> &ObjectMap {
        self.objects.as_ref().unwrap_or(&NO_OBJECTS)
    }

    pub fn objtypes(&self) -> &KindTypes {
        self.objtypes.as_ref().unwrap_or(&NO_KIND_TYPES)
    }

    pub fn objnames(&self) -> &KindNames {
        self.objnames.as_ref().unwrap_or(&NO_KIND_NAMES)
    }

    pub fn document(&self, index: usize) -> Option<Document> {
        let docname = self.docnames.get(index)?;
        Some(Document::new(
            index,
            docname.clone(),
            self.filenames().get(index).cloned().unwrap_or_default(),
            self.titles.get(index).cloned().unwrap_or_default(),
        ))
    }

    pub fn documents(&self) -> impl Iterator<Item = Document> + '_ {
        (0..self.docnames.len()).filter_map(|i| self.document(i))
    }

    pub fn find_document(&self, docname: &str) -> Option<Document> {
        let index = self.docnames.iter().position(|d| d == docname)?;
        self.document(index)
    }

    /// Pages containing `token`. Absent tokens and out-of-range postings
    /// yield nothing.
    pub fn lookup_term(&self, token: &str) -> Vec<usize> {
        self.lookup_in(self.terms(), token)
    }

    pub fn lookup_title_term(&self, token: &str) -> Vec<usize> {
        self.lookup_in(self.title_terms(), token)
    }

    fn lookup_in(&self, map: &PostingMap, token: &str) -> Vec<usize> {
        let Some(token) = TermNormalizer::new().normalize(token) else {
            return Vec::new();
        };

        map.get(&token)
            .map(|postings| {
                postings
                    .to_sorted()
                    .into_iter()
                    .filter(|&doc| doc < self.docnames.len())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every object in (prefix, name) order.
    pub fn objects(&self) -> impl Iterator<Item = ObjectEntry> + '_ {
        self.object_map().iter().flat_map(|(prefix, members)| {
            members
                .iter()
                .map(move |(name, record)| ObjectEntry::from_record(prefix, name, record))
        })
    }

    /// Resolve a dotted full name. Top-level entries such as modules live
    /// under the empty prefix.
    pub fn object(&self, fullname: &str) -> Option<ObjectEntry> {
        if let Some((prefix, name)) = fullname.rsplit_once('.')
            && let Some(record) = self.object_map().get(prefix).and_then(|m| m.get(name))
        {
            return Some(ObjectEntry::from_record(prefix, name, record));
        }

        self.object_map()
            .get("")
            .and_then(|m| m.get(fullname))
            .map(|record| ObjectEntry::from_record("", fullname, record))
    }

    pub fn object_kind(&self, code: u32) -> Option<ObjectKind> {
        let key = code.to_string();
        let qualified = self.objtypes().get(&key)?;
        let (domain, role, label) = match self.objnames().get(&key) {
            Some((domain, role, label)) => (domain.clone(), role.clone(), label.clone()),
            None => {
                let (domain, role) = qualified
                    .split_once(':')
                    .unwrap_or(("", qualified.as_str()));
                (domain.to_string(), role.to_string(), qualified.clone())
            }
        };

        Some(ObjectKind {
            code,
            qualified: qualified.clone(),
            domain,
            role,
            label,
        })
    }

    pub fn object_kinds(&self) -> Vec<ObjectKind> {
        self.objtypes()
            .keys()
            .filter_map(|key| key.parse::<u32>().ok())
            .filter_map(|code| self.object_kind(code))
            .collect()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.docnames.len(),
            terms: self.terms().len(),
            title_terms: self.title_terms().len(),
            postings: self.terms().values().map(Postings::len).sum(),
            object_prefixes: self.object_map().len(),
            objects: self.object_map().values().map(|m| m.len()).sum(),
            object_kinds: self.objtypes().len(),
        }
    }
}
