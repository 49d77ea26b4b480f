//! Enums shared across the launch pipeline

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Playable StarCraft II race
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Zerg,
    Protoss,
    Terran,
}

impl Race {
    /// Lowercase name as the game client expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Zerg => "zerg",
            Race::Protoss => "protoss",
            Race::Terran => "terran",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zerg" => Ok(Race::Zerg),
            "protoss" => Ok(Race::Protoss),
            "terran" => Ok(Race::Terran),
            other => Err(format!(
                "invalid race '{other}' (expected: zerg, protoss, terran)"
            )),
        }
    }
}

/// Match style selecting how the two sides are controlled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    /// Both sides are RL agents
    AgentVsAgent,
    /// Side 0 is an RL agent, side 1 a scripted bot
    AgentVsBot,
    /// Side 0 is an RL agent, side 1 the human at the keyboard
    HumanVsAgent,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::AgentVsAgent => "agent_vs_agent",
            GameType::AgentVsBot => "agent_vs_bot",
            GameType::HumanVsAgent => "human_vs_agent",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agent_vs_agent" => Ok(GameType::AgentVsAgent),
            "agent_vs_bot" => Ok(GameType::AgentVsBot),
            "human_vs_agent" => Ok(GameType::HumanVsAgent),
            other => Err(format!(
                "invalid game type '{other}' (expected: agent_vs_agent, agent_vs_bot, human_vs_agent)"
            )),
        }
    }
}

/// Compute backend the inference stack runs on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Device {
    Cpu,
    Cuda,
    Mps,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Cpu => "cpu",
            Device::Cuda => "cuda",
            Device::Mps => "mps",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named position in the model-resolution pipeline, independent of
/// which match side ultimately uses it
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSlot {
    Model1,
    Model2,
}

impl ModelSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSlot::Model1 => "model1",
            ModelSlot::Model2 => "model2",
        }
    }
}

impl fmt::Display for ModelSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_round_trip() {
        for race in [Race::Zerg, Race::Protoss, Race::Terran] {
            assert_eq!(race.as_str().parse::<Race>().unwrap(), race);
        }
    }

    #[test]
    fn test_race_rejects_unknown() {
        assert!("random".parse::<Race>().is_err());
    }

    #[test]
    fn test_game_type_round_trip() {
        for gt in [
            GameType::AgentVsAgent,
            GameType::AgentVsBot,
            GameType::HumanVsAgent,
        ] {
            assert_eq!(gt.as_str().parse::<GameType>().unwrap(), gt);
        }
    }

    #[test]
    fn test_serde_names_match_cli_names() {
        let json = serde_json::to_string(&GameType::HumanVsAgent).unwrap();
        assert_eq!(json, "\"human_vs_agent\"");
        let json = serde_json::to_string(&Device::Mps).unwrap();
        assert_eq!(json, "\"mps\"");
    }
}
