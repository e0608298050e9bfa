use crate::config::AdvisorConfig;

// questions about who built the app are answered locally, never dispatched
static OWNERSHIP_KEYWORDS: &[&str] = &[
    "who is your owner", "who made you", "who created you",
    "who developed you", "who is your developer",
    "who built you", "your developer", "your creator",
    "who programmed you", "your owner",
];

static ABOUT_KEYWORDS: &[&str] = &[
    "about", "about this app", "about you", "team members",
    "developers", "creators", "team info", "team details",
    "who made this app", "tell me about",
];

/// What the caller should do with a submitted query.
pub enum Action {
    /// Empty or refused input, no visible effect
    Ignore,
    /// Answered from the static table, deliver immediately
    EmitLocal(String),
    /// Forward the trimmed query to the remote model
    Dispatch(String),
}

/// The synchronous front of the coordinator: trims input and routes it to
/// either the static answer table or the remote model. Performs no I/O; the
/// caller echoes the raw query into the transcript before acting on the
/// returned [`Action`].
pub struct Gate {
    config: AdvisorConfig,
}

impl Gate {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn submit(&self, raw: &str) -> Action {
        let question = raw.trim();
        if question.is_empty() {
            return Action::Ignore;
        }

        let lower = question.to_lowercase();

        // ownership keywords take priority over the broader "about" set
        if OWNERSHIP_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return Action::EmitLocal(self.owner_answer());
        }

        if ABOUT_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return Action::EmitLocal(self.team_answer());
        }

        Action::Dispatch(question.to_string())
    }

    fn owner_answer(&self) -> String {
        format!("I was developed by {}. I'm here to help you learn ethics!",
                self.config.owner)
    }

    fn team_answer(&self) -> String {
        let mut info = String::from(
            "This app was developed by the following team members:\n\n");
        for member in &self.config.team {
            info.push_str(&format!("- {} - {}\n", member.name, member.id));
        }
        info.push_str("\nThis application helps you learn ethics with \
            responses in Hinglish or English.");
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> Gate {
        Gate::new(AdvisorConfig::default())
    }

    #[test]
    fn ownership_question_is_answered_locally() {
        for question in ["who is your owner", "Who MADE you?",
                "tell me please, who created you"] {
            match gate().submit(question) {
                Action::EmitLocal(answer) => {
                    assert!(answer.contains("Harshvardhan Singh"),
                        "missing owner in: {}", answer);
                }
                _ => panic!("expected EmitLocal for {:?}", question),
            }
        }
    }

    #[test]
    fn about_question_lists_team_in_configured_order() {
        let Action::EmitLocal(answer) = gate().submit("team details") else {
            panic!("expected EmitLocal");
        };
        let pos = |needle: &str| answer.find(needle)
            .unwrap_or_else(|| panic!("missing {:?} in {}", needle, answer));
        assert!(pos("Harshvardhan - 12303425") < pos("Sarthak - 12303986"));
        assert!(pos("Sarthak - 12303986") < pos("Prakhar - 12313487"));
    }

    #[test]
    fn empty_and_whitespace_input_is_ignored() {
        assert!(matches!(gate().submit(""), Action::Ignore));
        assert!(matches!(gate().submit("   \t\n"), Action::Ignore));
    }

    #[test]
    fn other_questions_are_dispatched_trimmed() {
        match gate().submit("  What is utilitarianism?  ") {
            Action::Dispatch(query) => {
                assert_eq!(query, "What is utilitarianism?");
            }
            _ => panic!("expected Dispatch"),
        }
    }

    #[test]
    fn ownership_wins_over_about() {
        // "tell me about your creator" matches both tables
        match gate().submit("tell me about your creator") {
            Action::EmitLocal(answer) => {
                assert!(answer.contains("I was developed by"));
            }
            _ => panic!("expected EmitLocal"),
        }
    }
}
