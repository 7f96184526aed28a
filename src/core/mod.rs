pub mod activities;
pub mod anomalies;
pub mod locations;
pub mod summary;
pub mod training;
pub mod travel;
pub mod trends;

/// Case-insensitive substring match of `category` against any of `keywords`.
pub(crate) fn category_matches(category: &str, keywords: &[&str]) -> bool {
    let cat = category.to_lowercase();
    keywords.iter().any(|k| cat.contains(&k.to_lowercase()))
}
