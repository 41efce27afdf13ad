use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    UserInteraction,
    BackendLog,
    TestLog,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::UserInteraction => "user_interaction",
            EventType::BackendLog => "backend_log",
            EventType::TestLog => "test_log",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
