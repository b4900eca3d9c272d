//! Trigger configuration records
//!
//! The persisted shape a filter expression travels in. Scheduling,
//! approval routing and prioritization are handled by the surrounding
//! automation service; this crate stores their fields and answers the
//! "should this trigger fire for this event" question.

use crate::error::Result;
use crate::evaluator::evaluate;
use crate::payload::Payload;
use propflow_core::FilterExpression;
use serde::{Deserialize, Serialize};

/// Event class a trigger listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    Create,
    Update,
    Delete,
    Schedule,
}

impl TriggerType {
    /// Field suggestions for the condition editor's datalist.
    ///
    /// Update events expose changed values under `new.` / `old.`
    /// prefixes; create and delete events use unprefixed fields.
    /// Schedule triggers carry no event payload.
    pub fn field_hints(&self) -> &'static [&'static str] {
        match self {
            TriggerType::Create => &["stage", "status", "price", "source", "assigned_to"],
            TriggerType::Update => &[
                "new.stage",
                "old.stage",
                "new.status",
                "old.status",
                "new.price",
                "old.price",
                "new.assigned_to",
            ],
            TriggerType::Delete => &["stage", "status", "assigned_to"],
            TriggerType::Schedule => &[],
        }
    }
}

/// One stored automation trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Display name
    pub name: String,

    /// Event class this trigger listens to
    pub trigger_type: TriggerType,

    /// Cron expression for schedule triggers; opaque to this crate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// Fired actions wait for manual approval
    #[serde(default)]
    pub requires_approval: bool,

    /// Relative ordering among triggers firing on the same event
    #[serde(default)]
    pub priority: i32,

    /// Inactive triggers never fire
    #[serde(default = "default_active")]
    pub active: bool,

    /// Filter over event payloads; empty matches every event
    #[serde(default)]
    pub conditions: FilterExpression,
}

fn default_active() -> bool {
    true
}

impl TriggerConfig {
    /// Create an active trigger with no conditions
    pub fn new(name: &str, trigger_type: TriggerType) -> Self {
        Self {
            name: name.to_string(),
            trigger_type,
            schedule: None,
            requires_approval: false,
            priority: 0,
            active: true,
            conditions: FilterExpression::new(),
        }
    }

    /// Set the condition filter
    pub fn with_conditions(mut self, conditions: FilterExpression) -> Self {
        self.conditions = conditions;
        self
    }

    /// Set the cron schedule
    pub fn with_schedule(mut self, schedule: &str) -> Self {
        self.schedule = Some(schedule.to_string());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Require manual approval before actions run
    pub fn requires_approval(mut self, requires: bool) -> Self {
        self.requires_approval = requires;
        self
    }

    /// Activate or deactivate
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Whether this trigger fires for the given event payload.
    ///
    /// Inactive triggers never fire; an empty condition set fires on
    /// every event of the trigger's type.
    pub fn should_fire(&self, payload: &Payload) -> bool {
        if !self.active {
            tracing::debug!("trigger '{}' is inactive, skipping", self.name);
            return false;
        }
        evaluate(&self.conditions, payload)
    }

    /// Parse a stored configuration record
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for persistence
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
