//! Local UI chrome state for the dashboard.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (which tool is showing) out of panel request
//! state, so switching tabs never disturbs an in-flight request.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tool shown in the dashboard body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolTab {
    #[default]
    Domain,
    Keywords,
    Audit,
    History,
}

impl ToolTab {
    pub const ALL: [Self; 4] = [Self::Domain, Self::Keywords, Self::Audit, Self::History];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Domain => "Domain Overview",
            Self::Keywords => "Keyword Research",
            Self::Audit => "Site Audit",
            Self::History => "History",
        }
    }

    /// Parse the `?tool=` query value used for deep links.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "domain" => Some(Self::Domain),
            "keywords" => Some(Self::Keywords),
            "audit" => Some(Self::Audit),
            "history" => Some(Self::History),
            _ => None,
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Keywords => "keywords",
            Self::Audit => "audit",
            Self::History => "history",
        }
    }
}

/// Dashboard UI state.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tool: ToolTab,
}
