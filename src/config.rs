use std::env;

use dotenv::dotenv;
use keyring::Entry;

use crate::common::ApiKey;

pub static KEYRING_INFO: &'static [&str] = &["com.wizstaff.ethica", "openrouter"];

pub static DEFAULT_MODEL: &str = "google/gemini-1.5-pro";

#[derive(Clone)]
pub struct TeamMember {
    pub name: String,
    pub id: String,
}

// read once at startup, never mutated afterwards
#[derive(Clone)]
pub struct AdvisorConfig {
    pub owner: String,
    pub team: Vec<TeamMember>,
    pub model: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            owner: "Harshvardhan Singh".to_string(),
            team: vec![
                TeamMember { name: "Harshvardhan".into(), id: "12303425".into() },
                TeamMember { name: "Sarthak".into(), id: "12303986".into() },
                TeamMember { name: "Prakhar".into(), id: "12313487".into() },
            ],
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AdvisorConfig {
    pub fn with_model(model: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(model) = model {
            config.model = model;
        }
        config
    }
}

/// Retrieves the OpenRouter API key, checking the environment first and the
/// system keyring second. Returns an unset [`ApiKey`] if neither has one;
/// the caller decides how to surface that.
pub fn load_api_key() -> ApiKey {
    let mut api_key = ApiKey::default();

    dotenv().ok();

    if let Ok(env_key) = env::var("OPENROUTER_API_KEY") {
        api_key.key = env_key.into();
        api_key.is_set = true;
        return api_key;
    }

    if let Ok(entry) = Entry::new(KEYRING_INFO[0], KEYRING_INFO[1]) {
        match entry.get_password() {
            Ok(retrieved) => {
                log::info!("API key retrieved from the system keyring");
                api_key.key = retrieved.into();
                api_key.is_set = true;
            },
            Err(error) => {
                log::info!("No API key in the system keyring: {}", error);
            },
        }
    } else {
        log::warn!("Failed to access the system keyring to get the API key.");
    }

    api_key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_lists_three_team_members_in_order() {
        let config = AdvisorConfig::default();
        let names: Vec<&str> = config.team.iter()
            .map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Harshvardhan", "Sarthak", "Prakhar"]);
        assert_eq!(config.team[0].id, "12303425");
    }

    #[test]
    fn model_override_replaces_default() {
        let config = AdvisorConfig::with_model(
            Some("anthropic/claude-sonnet-4".to_string()));
        assert_eq!(config.model, "anthropic/claude-sonnet-4");

        let config = AdvisorConfig::with_model(None);
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
