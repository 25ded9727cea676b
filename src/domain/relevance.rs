use super::NewsRecord;

/// Location terms; a relevant record names at least one
pub const GEOGRAPHY_TERMS: &[&str] = &["scotland", "scottish"];

/// Sector terms; a relevant record names at least one
pub const TOPIC_TERMS: &[&str] = &[
    "offshore wind",
    "floating wind",
    "wind farm",
    "windfarm",
    "turbine",
    "renewable",
    "hydrogen",
    "grid",
    "energy",
    "subsea",
];

/// Keyword co-occurrence predicate: geography AND topic, case-insensitive.
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    geography: Vec<String>,
    topics: Vec<String>,
}

impl RelevanceFilter {
    pub fn new<G, T>(geography: G, topics: T) -> Self
    where
        G: IntoIterator,
        G::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        Self {
            geography: geography
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            topics: topics
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_relevant(&self, record: &NewsRecord) -> bool {
        let haystack = format!("{} {} {}", record.title, record.snippet, record.source).to_lowercase();

        self.geography.iter().any(|term| haystack.contains(term.as_str()))
            && self.topics.iter().any(|term| haystack.contains(term.as_str()))
    }
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self::new(GEOGRAPHY_TERMS, TOPIC_TERMS)
    }
}
