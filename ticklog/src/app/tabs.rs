//! Tab bar.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Screens reachable from the tab bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Live wall clock.
    Clock,
    /// Start/stop/reset stopwatch.
    Stopwatch,
    /// Static settings and about text.
    Settings,
    /// Completed sessions, newest first.
    Log,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Clock, Self::Stopwatch, Self::Settings, Self::Log];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Stopwatch => "stopwatch",
            Self::Settings => "settings",
            Self::Log => "log",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Clock => "Clock",
            Self::Stopwatch => "Stopwatch",
            Self::Settings => "Settings",
            Self::Log => "Log",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Clock => "◷",
            Self::Stopwatch => "⏱",
            Self::Settings => "⚙",
            Self::Log => "☰",
        }
    }

    /// Parse a tab name typed at the prompt.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "clock" | "time" => Some(Self::Clock),
            "stopwatch" | "timer" | "sw" => Some(Self::Stopwatch),
            "settings" | "about" => Some(Self::Settings),
            "log" | "sessions" | "history" => Some(Self::Log),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render the tab bar with `active` highlighted.
pub fn render_tab_bar(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|&tab| {
            if tab == active {
                format!("[{} {}]", tab.icon(), tab.title())
            } else {
                format!(" {} {} ", tab.icon(), tab.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
