use regex::Regex;
use thiserror::Error;
use twox_hash::XxHash64;

/// Seed tokens that are not integers must look like a mission codename.
const SEED_WORD: &str = r"^[A-Za-z][A-Za-z0-9_-]{0,31}$";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed `{0}` is neither an integer nor a codename")]
    Unrecognized(String),
    #[error("no seeds given")]
    Empty,
}

/// A resolved seed and the token it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedInfo {
    pub seed: u64,
    pub codename: Option<String>,
}

impl SeedInfo {
    #[must_use]
    pub const fn from_numeric(seed: u64) -> Self {
        Self {
            seed,
            codename: None,
        }
    }

    /// Hash a codename into a seed. Case-insensitive.
    #[must_use]
    pub fn from_codename(codename: &str) -> Self {
        let normalized = codename.to_ascii_lowercase();
        Self {
            seed: XxHash64::oneshot(0, normalized.as_bytes()),
            codename: Some(codename.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.codename
            .as_ref()
            .map_or_else(|| self.seed.to_string(), |code| format!("{code} ({})", self.seed))
    }
}

fn is_codename(token: &str) -> bool {
    Regex::new(SEED_WORD)
        .map(|re| re.is_match(token))
        .unwrap_or(false)
}

/// Resolve CLI seed tokens. Integers are taken as-is, codenames are hashed.
///
/// # Errors
///
/// Fails on the first token that is neither, or when nothing remains.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<SeedInfo>, SeedError> {
    let mut seeds = Vec::new();
    for token in tokens {
        if token.is_empty() {
            continue;
        }
        if let Ok(value) = token.parse::<u64>() {
            seeds.push(SeedInfo::from_numeric(value));
        } else if let Ok(value) = token.parse::<i64>() {
            seeds.push(SeedInfo::from_numeric(value.unsigned_abs()));
        } else if is_codename(token) {
            seeds.push(SeedInfo::from_codename(token));
        } else {
            return Err(SeedError::Unrecognized(token.clone()));
        }
    }
    if seeds.is_empty() {
        return Err(SeedError::Empty);
    }
    seeds.dedup_by_key(|info| info.seed);
    Ok(seeds)
}
