//! GraphQL query documents and variable building.

use serde_json::{Value, json};

/// Listing query. All filter values are passed through as-is; the upstream
/// treats an empty string as "no filter".
pub const CHARACTERS_QUERY: &str = "\
query GetCharacters($page: Int!, $gender: String, $searchQuery: String, $species: String) {
  characters(page: $page, filter: { gender: $gender, name: $searchQuery, species: $species }) {
    results {
      id
      name
      gender
      species
      image
    }
    info {
      count
      pages
      next
      prev
    }
  }
}";

/// Detail query, keyed by the opaque character id from the route.
pub const CHARACTER_QUERY: &str = "\
query GetCharacter($id: ID!) {
  character(id: $id) {
    id
    name
    gender
    species
    image
    status
    location {
      name
    }
    created
  }
}";

/// Identity of one listing fetch: the page number plus all active filter
/// values. Two keys comparing equal describe the same request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub page: u32,
    pub gender: String,
    pub species: String,
    pub search: String,
}

impl QueryKey {
    /// Builds the variables object for [`CHARACTERS_QUERY`].
    pub fn variables(&self) -> Value {
        json!({
            "page": self.page,
            "gender": self.gender,
            "searchQuery": self.search,
            "species": self.species,
        })
    }
}

/// Builds the variables object for [`CHARACTER_QUERY`].
pub fn character_variables(id: &str) -> Value {
    json!({ "id": id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_reflect_all_filter_values() {
        let key = QueryKey {
            page: 1,
            gender: "Female".to_string(),
            species: "Human".to_string(),
            search: String::new(),
        };

        let vars = key.variables();
        assert_eq!(vars["page"], 1);
        assert_eq!(vars["gender"], "Female");
        assert_eq!(vars["searchQuery"], "");
        assert_eq!(vars["species"], "Human");
    }

    #[test]
    fn keys_compare_by_value() {
        let a = QueryKey {
            page: 3,
            gender: String::new(),
            species: String::new(),
            search: "rick".to_string(),
        };
        let b = a.clone();
        assert_eq!(a, b);

        let c = QueryKey { page: 4, ..a.clone() };
        assert_ne!(a, c);
    }

    #[test]
    fn character_variables_carry_the_id() {
        assert_eq!(character_variables("999"), serde_json::json!({ "id": "999" }));
    }
}
