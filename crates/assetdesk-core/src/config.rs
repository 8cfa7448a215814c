/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field names map to upper-case
/// env vars (`database_url` ← `DATABASE_URL`). Use `#[serde(default = ...)]`
/// for optional settings.
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// Load from the process environment, reporting the first missing or
    /// malformed variable.
    fn try_from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Load from an explicit set of `(name, value)` pairs.
    fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(pairs)
    }
}
