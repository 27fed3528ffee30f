pub mod catalogue;
pub mod item;
pub mod report;
pub mod sector;
pub mod types;
pub mod workforce;

pub use catalogue::{
    ComplianceItemTemplate, IndustryProfile, ItemType, RequirementTemplate, ReviewCycle,
};
pub use item::{ComplianceItem, ItemStatus};
pub use report::{
    CategoryBreakdown, ComplianceScore, ComplianceSummary, ExpiringEntry, OverdueEntry,
    OverviewReport, StatusLabel,
};
pub use sector::{Sector, UnknownSector};
pub use types::{Business, BusinessSize, SubscriptionStatus, UkNation};
pub use workforce::{Employee, EmployeeRequirement, RequirementState, RequirementStatus};
