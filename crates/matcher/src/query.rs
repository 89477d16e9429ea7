//! Query tokenizing.
//!
//! A query is split on whitespace. Tokens containing a colon are field
//! tokens (`director:Nolan`, `genre:"Drama"`); everything else is matched
//! fuzzily against the title.

/// One classified query token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    /// `field:value`, split at the first colon, surrounding quotes removed
    Field { field: String, value: String },
    /// Lowercased free text matched against the title
    Title(String),
}

impl QueryToken {
    pub fn parse(token: &str) -> Self {
        match token.split_once(':') {
            Some((field, value)) => {
                // A lone `"` counts as both the opening and closing quote
                let value = if value.starts_with('"') && value.ends_with('"') {
                    let inner = &value[1..];
                    inner.strip_suffix('"').unwrap_or(inner)
                } else {
                    value
                };
                QueryToken::Field {
                    field: field.to_string(),
                    value: value.to_string(),
                }
            }
            None => QueryToken::Title(token.to_lowercase()),
        }
    }
}

/// Split a raw query into classified tokens.
pub fn tokenize(query: &str) -> Vec<QueryToken> {
    query.split_whitespace().map(QueryToken::parse).collect()
}
