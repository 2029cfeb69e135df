use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Remote artwork lookup provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverProvider {
    /// The iTunes Search API
    Itunes,
    /// Remote lookup disabled
    None,
}

impl FromStr for CoverProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "itunes" => Ok(Self::Itunes),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown cover provider '{other}' (expected 'itunes' or 'none')"
            )),
        }
    }
}

impl fmt::Display for CoverProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Itunes => write!(f, "itunes"),
            Self::None => write!(f, "none"),
        }
    }
}

/// How much detail the shownotes carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Bare episode title only
    Title,
    /// Full metadata line list plus attachments
    Full,
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "full" => Ok(Self::Full),
            other => Err(format!(
                "unknown shownotes mode '{other}' (expected 'title' or 'full')"
            )),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// Which attachment kinds get inlined into the shownotes HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineMode {
    /// Links only, no inline sections
    None,
    /// Inline image attachments
    Images,
    /// Inline image and text attachments
    All,
}

impl FromStr for InlineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "images" => Ok(Self::Images),
            "all" => Ok(Self::All),
            other => Err(format!(
                "unknown inline mode '{other}' (expected 'none', 'images' or 'all')"
            )),
        }
    }
}

impl fmt::Display for InlineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Images => write!(f, "images"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Settings for cover artwork resolution
#[derive(Debug, Clone)]
pub struct CoverConfig {
    /// Master toggle for remote cover fetching
    pub fetch_enabled: bool,
    /// Which remote lookup provider to use
    pub provider: CoverProvider,
    /// Country code passed to the search provider
    pub country: String,
    /// How long a cached cover stays fresh
    pub ttl_days: u64,
    /// Hard timeout for search and download requests
    pub timeout_ms: u64,
    /// Directory holding cached cover files
    pub cache_dir: PathBuf,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            fetch_enabled: true,
            provider: CoverProvider::Itunes,
            country: "us".to_string(),
            ttl_days: 30,
            timeout_ms: 10_000,
            cache_dir: PathBuf::from(".covers"),
        }
    }
}

/// Settings for shownotes rendering
#[derive(Debug, Clone)]
pub struct ShownotesConfig {
    /// Verbosity of the generated shownotes
    pub verbosity: Verbosity,
    /// Which attachment kinds to inline into the HTML
    pub inline_attachments: InlineMode,
    /// Maximum number of characters of sidecar text to inline
    pub max_inline_chars: usize,
}

impl Default for ShownotesConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Full,
            inline_attachments: InlineMode::None,
            max_inline_chars: 2000,
        }
    }
}

/// Immutable configuration snapshot threaded through every entry point
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub covers: CoverConfig,
    pub shownotes: ShownotesConfig,
}
