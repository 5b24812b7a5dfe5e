use std::fmt;

use serde::{Deserialize, Serialize};

/// Genres with their own templates and rewrite phrase banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Thriller,
    Horror,
    Drama,
    Comedy,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Action,
    Romance,
    Fantasy,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Thriller,
        Genre::Horror,
        Genre::Drama,
        Genre::Comedy,
        Genre::SciFi,
        Genre::Action,
        Genre::Romance,
        Genre::Fantasy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Genre::Thriller => "Thriller",
            Genre::Horror => "Horror",
            Genre::Drama => "Drama",
            Genre::Comedy => "Comedy",
            Genre::SciFi => "Sci-Fi",
            Genre::Action => "Action",
            Genre::Romance => "Romance",
            Genre::Fantasy => "Fantasy",
        }
    }

    /// Case-insensitive lookup. Returns `None` for genres outside the catalog,
    /// which callers treat as "use the generic strategy".
    pub fn parse(raw: &str) -> Option<Genre> {
        let key = raw.trim().to_lowercase();
        match key.as_str() {
            "thriller" => Some(Genre::Thriller),
            "horror" => Some(Genre::Horror),
            "drama" => Some(Genre::Drama),
            "comedy" => Some(Genre::Comedy),
            "sci-fi" | "scifi" | "sci fi" | "science fiction" | "science-fiction" | "sf" => {
                Some(Genre::SciFi)
            }
            "action" => Some(Genre::Action),
            "romance" => Some(Genre::Romance),
            "fantasy" => Some(Genre::Fantasy),
            _ => None,
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
