//! Match mode resolver - derive who plays on each side
//!
//! A one-shot classification over the game type:
//! - agent_vs_agent: both sides are agents named after their model files
//! - agent_vs_bot: side 1 is a scripted-bot difficulty identifier
//! - human_vs_agent: side 1 is the literal "human"
//!
//! Side 1 of agent_vs_bot and human_vs_agent never resolves to a file.

use std::path::Path;

use applestar_core::{GameType, ModelSlot, Race};

/// Difficulty used when --model2 does not name a bot level
pub const DEFAULT_BOT_LEVEL: &str = "bot10";

/// Participants of one match
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchPlan {
    /// Side 0 and side 1 identities, order-significant
    pub identities: [String; 2],
    /// Which model slots are agent-controlled
    pub agent_slots: Vec<ModelSlot>,
}

/// File name up to the first dot, matching the runner's identity format
fn base_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
        .split('.')
        .next()
        .unwrap_or("")
        .to_string()
}

/// Derive the match participants
///
/// `model2_arg` is the raw --model2 argument, used only for bot-level
/// detection; the resolved `model2` path supplies agent identities.
pub fn derive(
    game_type: GameType,
    model1: &Path,
    model2: &Path,
    model2_arg: Option<&str>,
) -> MatchPlan {
    match game_type {
        GameType::AgentVsAgent => MatchPlan {
            identities: [base_name(model1), base_name(model2)],
            agent_slots: vec![ModelSlot::Model1, ModelSlot::Model2],
        },
        GameType::AgentVsBot => {
            let bot_level = match model2_arg {
                Some(arg) if arg.contains("bot") => arg.to_string(),
                _ => DEFAULT_BOT_LEVEL.to_string(),
            };
            MatchPlan {
                identities: [base_name(model1), bot_level],
                agent_slots: vec![ModelSlot::Model1],
            }
        }
        GameType::HumanVsAgent => MatchPlan {
            identities: [base_name(model1), "human".to_string()],
            agent_slots: vec![ModelSlot::Model1],
        },
    }
}

/// Apply the caller's race selection to the configured race pair
///
/// The override always writes side 1's slot, whichever side the configured
/// player actually occupies; side 0 keeps the base configuration's value.
pub fn apply_race_override(configured: &[Race], race: Race) -> [Race; 2] {
    let side0 = configured.first().copied().unwrap_or(Race::Zerg);
    [side0, race]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn model(name: &str) -> PathBuf {
        PathBuf::from("/models").join(name)
    }

    #[test]
    fn test_agent_vs_agent_uses_both_base_names() {
        let plan = derive(
            GameType::AgentVsAgent,
            &model("foo.pth"),
            &model("bar.pth"),
            Some("bar"),
        );
        assert_eq!(plan.identities, ["foo".to_string(), "bar".to_string()]);
        assert_eq!(plan.agent_slots, vec![ModelSlot::Model1, ModelSlot::Model2]);
    }

    #[test]
    fn test_base_name_stops_at_first_dot() {
        let plan = derive(
            GameType::AgentVsAgent,
            &model("sl_model.v2.pth"),
            &model("bar.pth"),
            None,
        );
        assert_eq!(plan.identities[0], "sl_model");
    }

    #[test]
    fn test_bot_level_taken_from_argument_containing_bot() {
        let plan = derive(
            GameType::AgentVsBot,
            &model("foo.pth"),
            &model("bot7.pth"),
            Some("bot7"),
        );
        assert_eq!(plan.identities, ["foo".to_string(), "bot7".to_string()]);
        assert_eq!(plan.agent_slots, vec![ModelSlot::Model1]);
    }

    #[test]
    fn test_bot_level_defaults_without_bot_substring() {
        let plan = derive(
            GameType::AgentVsBot,
            &model("foo.pth"),
            &model("myagent.pth"),
            Some("myagent"),
        );
        assert_eq!(plan.identities[1], DEFAULT_BOT_LEVEL);
    }

    #[test]
    fn test_bot_level_defaults_without_argument() {
        let plan = derive(GameType::AgentVsBot, &model("foo.pth"), &model("bar.pth"), None);
        assert_eq!(plan.identities[1], DEFAULT_BOT_LEVEL);
    }

    #[test]
    fn test_human_vs_agent_side_one_is_human() {
        let plan = derive(
            GameType::HumanVsAgent,
            &model("rl_model.pth"),
            &model("rl_model.pth"),
            None,
        );
        assert_eq!(plan.identities, ["rl_model".to_string(), "human".to_string()]);
        assert_eq!(plan.agent_slots, vec![ModelSlot::Model1]);
    }

    #[test]
    fn test_race_override_writes_side_one_only() {
        let races = apply_race_override(&[Race::Zerg, Race::Zerg], Race::Protoss);
        assert_eq!(races, [Race::Zerg, Race::Protoss]);

        // Side 0 keeps whatever the base configuration supplied
        let races = apply_race_override(&[Race::Terran, Race::Zerg], Race::Protoss);
        assert_eq!(races, [Race::Terran, Race::Protoss]);
    }

    #[test]
    fn test_race_override_tolerates_short_configured_list() {
        let races = apply_race_override(&[], Race::Terran);
        assert_eq!(races, [Race::Zerg, Race::Terran]);
    }
}
