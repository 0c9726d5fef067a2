//! Catalog of the GraphQL operations this crate knows how to run.

/// Every film with the fields needed by the list view
pub const ALL_FILMS_QUERY: &str = r#"query AllFilms {
  allFilms {
    films {
      id
      title
      releaseDate
      director
      speciesConnection {
        species {
          name
        }
      }
    }
  }
}
"#;

/// A single film by its global id
pub const FILM_QUERY: &str = r#"query Film($id: ID) {
  film(id: $id) {
    title
    director
    producers
    releaseDate
    openingCrawl
  }
}
"#;

/// The closed set of known operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AllFilms,
    Film,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::AllFilms, Operation::Film];

    /// Operation name as written in the document
    pub const fn name(self) -> &'static str {
        match self {
            Operation::AllFilms => "AllFilms",
            Operation::Film => "Film",
        }
    }

    /// Query document text
    pub const fn document(self) -> &'static str {
        match self {
            Operation::AllFilms => ALL_FILMS_QUERY,
            Operation::Film => FILM_QUERY,
        }
    }

    /// Variables the operation declares
    pub const fn variable_names(self) -> &'static [&'static str] {
        match self {
            Operation::AllFilms => &[],
            Operation::Film => &["id"],
        }
    }

    /// Look an operation up by its exact document text.
    ///
    /// Text that is not byte-for-byte one of the catalog documents yields `None`.
    pub fn from_source(source: &str) -> Option<Operation> {
        Self::ALL.into_iter().find(|op| op.document() == source)
    }

    /// Look an operation up by name
    pub fn from_name(name: &str) -> Option<Operation> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
