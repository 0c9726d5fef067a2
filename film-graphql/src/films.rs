//! Response shapes of the film operations. Every field is nullable upstream.

use serde::{Deserialize, Serialize};

/// `data` payload of the `AllFilms` operation
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllFilmsData {
    pub all_films: Option<FilmsConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FilmsConnection {
    pub films: Option<Vec<Option<FilmSummary>>>,
}

/// A film as shown in the list view
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmSummary {
    pub id: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub director: Option<String>,
    pub species_connection: Option<SpeciesConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SpeciesConnection {
    pub species: Option<Vec<Option<Species>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Species {
    pub name: Option<String>,
}

impl FilmSummary {
    /// Names of the species appearing in the film, in response order
    pub fn species_names(&self) -> Vec<&str> {
        self.species_connection
            .iter()
            .filter_map(|connection| connection.species.as_ref())
            .flatten()
            .flatten()
            .filter_map(|species| species.name.as_deref())
            .collect()
    }
}

/// `data` payload of the `Film` operation
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FilmData {
    pub film: Option<Film>,
}

/// A film as shown in the detail view
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub title: Option<String>,
    pub director: Option<String>,
    pub producers: Option<Vec<Option<String>>>,
    pub release_date: Option<String>,
    pub opening_crawl: Option<String>,
}

impl Film {
    /// Producers joined for display
    pub fn producers_display(&self) -> String {
        self.producers
            .iter()
            .flatten()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
