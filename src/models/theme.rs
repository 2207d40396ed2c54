#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Theme {
    #[default]
    Standard,
    Dark,
    Light,
    Contrast,
}

impl Theme {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Contrast => "contrast",
        }
    }

    pub(crate) fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "contrast" | "high-contrast" => Some(Self::Contrast),
            _ => None,
        }
    }

    /// Unknown names fall back to `Standard` so a stale preference never breaks loading.
    pub(crate) fn parse(s: &str) -> Self {
        Self::from_name(s).unwrap_or_default()
    }

    pub(crate) fn all() -> &'static [Theme] {
        &[Self::Standard, Self::Dark, Self::Light, Self::Contrast]
    }

    pub(crate) fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
