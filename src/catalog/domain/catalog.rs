use crate::shared::error::TevCatError;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::fmt;

/// Catalog value object - a named grouping of sources such as
/// "Default Catalog" or "Source Candidates"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    id: i64,
    name: String,
    description: String,
    role_id: String,
    public: String,
}

impl Catalog {
    pub fn new(id: i64, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            role_id: "-1".to_string(),
            public: "1".to_string(),
        }
    }

    /// Attaches the raw `role_id` and `public` columns as published.
    pub fn with_access(mut self, role_id: String, public: String) -> Self {
        self.role_id = role_id;
        self.public = public;
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn role_id(&self) -> &str {
        &self.role_id
    }

    pub fn public(&self) -> &str {
        &self.public
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name:\t{}", self.name)?;
        write!(f, "Description:\t{}", self.description)
    }
}

/// Catalogs keyed by id, iterated in id order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    catalogs: BTreeMap<i64, Catalog>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a catalog under its own id, replacing any catalog with that key.
    pub fn insert(&mut self, catalog: Catalog) {
        self.insert_at(catalog.id(), catalog);
    }

    /// Adds a catalog under `key`, which may differ from the record's own id.
    pub fn insert_at(&mut self, key: i64, catalog: Catalog) {
        self.catalogs.insert(key, catalog);
    }

    /// Looks up a catalog by id.
    ///
    /// # Errors
    /// `TevCatError::UnknownCatalog` when no catalog has this id.
    pub fn get(&self, id: i64) -> Result<&Catalog> {
        self.catalogs
            .get(&id)
            .ok_or_else(|| TevCatError::UnknownCatalog { id }.into())
    }

    pub fn contains(&self, id: i64) -> bool {
        self.catalogs.contains_key(&id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Catalog> {
        self.catalogs.values().find(|c| c.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.values()
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

impl FromIterator<Catalog> for CatalogIndex {
    fn from_iter<I: IntoIterator<Item = Catalog>>(iter: I) -> Self {
        let mut index = Self::new();
        for catalog in iter {
            index.insert(catalog);
        }
        index
    }
}
