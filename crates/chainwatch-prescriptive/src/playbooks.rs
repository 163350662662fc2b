//! Response playbooks keyed by event type.

use std::fmt;

/// A fixed four-step response plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Playbook {
    Weather,
    Demand,
    Route,
    Supplier,
    Contingency,
}

impl Playbook {
    /// Keyword match order. First hit wins.
    const KEYWORDS: [(&'static str, Playbook); 4] = [
        ("weather", Playbook::Weather),
        ("demand", Playbook::Demand),
        ("route", Playbook::Route),
        ("supplier", Playbook::Supplier),
    ];

    /// Pick the playbook whose keyword appears in `event_type`, ignoring case.
    pub fn select(event_type: &str) -> Self {
        let lowered = event_type.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, playbook)| *playbook)
            .unwrap_or(Playbook::Contingency)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Demand => "demand",
            Self::Route => "route",
            Self::Supplier => "supplier",
            Self::Contingency => "contingency",
        }
    }

    pub fn steps(self) -> [&'static str; 4] {
        match self {
            Self::Weather => [
                "Activate alternative transportation routes around the affected area",
                "Increase safety stock at distribution centers near the affected region",
                "Deploy the emergency response team to monitor conditions",
                "Notify affected customers of possible delivery delays",
            ],
            Self::Demand => [
                "Reallocate inventory from low-demand locations",
                "Apply dynamic pricing to balance the demand surge",
                "Scale up fulfillment capacity at nearby distribution centers",
                "Request expedited deliveries from key suppliers",
            ],
            Self::Route => [
                "Switch affected shipments to dynamic routing",
                "Engage an alternate logistics partner for blocked lanes",
                "Send updated delivery estimates to affected stores",
                "Route replenishment through the backup distribution center",
            ],
            Self::Supplier => [
                "Activate a backup supplier for the affected items",
                "Negotiate expedited production with remaining suppliers",
                "Reallocate existing inventory to priority locations",
                "Communicate expected supply gaps to store managers",
            ],
            Self::Contingency => [
                "Assess the scope of the disruption across the network",
                "Activate the standard contingency plan",
                "Monitor affected locations for further changes",
                "Review inventory buffers at impacted sites",
            ],
        }
    }

    pub fn details(self) -> Vec<String> {
        self.steps().iter().map(|s| (*s).to_string()).collect()
    }
}

impl fmt::Display for Playbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
