//! Data model for the upstream character API.
//!
//! Mirrors the two query shapes the remote source exposes:
//! - `characters(page, filter)` — paginated summaries for the listing view
//! - `character(id)` — full record for the detail view

pub mod query;

pub use query::QueryKey;

use serde::Deserialize;

/// Listing fields of a character, as returned inside `characters.results`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CharacterSummary {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub species: String,
    pub image: String,
}

/// Pagination metadata from `characters.info`.
///
/// `next`/`prev` are null at the first/last page respectively.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<u32>,
    pub prev: Option<u32>,
}

/// One page of the character listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CharacterPage {
    pub results: Vec<CharacterSummary>,
    pub info: PageInfo,
}

/// Full character record for the detail view.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CharacterDetail {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub species: String,
    pub image: String,
    pub status: String,
    pub location: Location,
    /// Creation timestamp as an ISO-8601 string, reformatted at render time.
    pub created: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct CharactersData {
    characters: CharacterPage,
}

#[derive(Debug, Deserialize)]
struct CharacterData {
    character: Option<CharacterDetail>,
}

/// Decodes the `data` object of a `GetCharacters` response.
pub fn decode_characters(data: serde_json::Value) -> Result<CharacterPage, serde_json::Error> {
    let data: CharactersData = serde_json::from_value(data)?;
    Ok(data.characters)
}

/// Decodes the `data` object of a `GetCharacter` response.
///
/// Returns `None` when the upstream reports a null character (absent id).
pub fn decode_character(
    data: serde_json::Value,
) -> Result<Option<CharacterDetail>, serde_json::Error> {
    let data: CharacterData = serde_json::from_value(data)?;
    Ok(data.character)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_characters_page() {
        let data = json!({
            "characters": {
                "results": [
                    {
                        "id": "1",
                        "name": "Rick Sanchez",
                        "gender": "Male",
                        "species": "Human",
                        "image": "https://example.com/1.jpeg"
                    }
                ],
                "info": { "count": 826, "pages": 42, "next": 2, "prev": null }
            }
        });

        let page = decode_characters(data).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "Rick Sanchez");
        assert_eq!(page.info.pages, 42);
        assert_eq!(page.info.next, Some(2));
        assert_eq!(page.info.prev, None);
    }

    #[test]
    fn decodes_empty_results_with_page_info() {
        let data = json!({
            "characters": {
                "results": [],
                "info": { "count": 0, "pages": 1, "next": null, "prev": null }
            }
        });

        let page = decode_characters(data).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.info.pages, 1);
    }

    #[test]
    fn decodes_full_character() {
        let data = json!({
            "character": {
                "id": "2",
                "name": "Morty Smith",
                "gender": "Male",
                "species": "Human",
                "image": "https://example.com/2.jpeg",
                "status": "Alive",
                "location": { "name": "Citadel of Ricks" },
                "created": "2017-11-04T18:50:21.651Z"
            }
        });

        let character = decode_character(data).unwrap().unwrap();
        assert_eq!(character.name, "Morty Smith");
        assert_eq!(character.location.name, "Citadel of Ricks");
        assert_eq!(character.created, "2017-11-04T18:50:21.651Z");
    }

    #[test]
    fn null_character_decodes_to_none() {
        let data = json!({ "character": null });
        assert_eq!(decode_character(data).unwrap(), None);
    }
}
