// 📇 Person Registry - one id-keyed store per person kind
//
// Iteration follows insertion order. Re-adding an id replaces the stored
// person but keeps its original position.

use indexmap::IndexMap;

use super::person::Person;

// ============================================================================
// PERSON REGISTRY
// ============================================================================

/// Registry of all known persons of one kind (patients, dentists or hygienists)
#[derive(Debug, Clone)]
pub struct PersonRegistry<P> {
    persons: IndexMap<String, P>,
}

impl<P> PersonRegistry<P>
where
    P: Person + Clone,
{
    /// Create an empty registry
    pub fn new() -> Self {
        PersonRegistry {
            persons: IndexMap::new(),
        }
    }

    /// Insert a person, overwriting any existing entry with the same id
    pub fn add(&mut self, person: P) {
        self.persons.insert(person.id().to_string(), person);
    }

    /// Find person by id
    pub fn get_by_id(&self, id: &str) -> Option<P> {
        self.persons.get(id).cloned()
    }

    /// All persons matching the predicate, in registry order
    pub fn find_by<F>(&self, predicate: F) -> Vec<P>
    where
        F: Fn(&P) -> bool,
    {
        self.persons
            .values()
            .filter(|p| predicate(*p))
            .cloned()
            .collect()
    }

    pub fn all(&self) -> Vec<P> {
        self.persons.values().cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.persons.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

impl<P> Default for PersonRegistry<P>
where
    P: Person + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
