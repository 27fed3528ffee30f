//! Business entity and its onboarding metadata

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sector::Sector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessSize {
    Micro,
    Small,
    Medium,
    Large,
}

impl BusinessSize {
    pub fn name(&self) -> &'static str {
        match self {
            BusinessSize::Micro => "Micro (1-9 employees)",
            BusinessSize::Small => "Small (10-49 employees)",
            BusinessSize::Medium => "Medium (50-249 employees)",
            BusinessSize::Large => "Large (250+ employees)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UkNation {
    England,
    Scotland,
    Wales,
    NorthernIreland,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Inactive,
    Active,
    Cancelled,
}

/// A registered business. Changing `sector` must be followed by a checklist
/// resync so the compliance item set matches the new industry profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub sector: Sector,
    pub size: BusinessSize,
    pub nation: UkNation,
    pub subscription_status: SubscriptionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_wire_shape() {
        let business = Business {
            id: Uuid::nil(),
            name: "Bright Smiles Dental".to_string(),
            sector: Sector::Dental,
            size: BusinessSize::Micro,
            nation: UkNation::Wales,
            subscription_status: SubscriptionStatus::Active,
        };
        let json: serde_json::Value = serde_json::to_value(&business).unwrap();
        assert_eq!(json["sector"], "dental");
        assert_eq!(json["nation"], "wales");
        assert_eq!(json["subscription_status"], "active");
    }
}
