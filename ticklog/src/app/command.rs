//! Commands accepted at the interactive prompt.

use std::str::FromStr;

use super::tabs::Tab;
use crate::error::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Reset,
    Show(Tab),
    Export,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let lowered = line.trim().to_lowercase();
        let mut words = lowered.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };

        match head {
            "start" | "go" => Ok(Self::Start),
            "stop" | "pause" => Ok(Self::Stop),
            "reset" => Ok(Self::Reset),
            "export" | "json" => Ok(Self::Export),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            "tab" => {
                let name = words.next().ok_or(CommandError::MissingTab)?;
                Tab::from_str(name)
                    .map(Self::Show)
                    .ok_or_else(|| CommandError::UnknownTab(name.to_string()))
            }
            other => Tab::from_str(other)
                .map(Self::Show)
                .ok_or_else(|| CommandError::Unknown(line.trim().to_string())),
        }
    }
}
