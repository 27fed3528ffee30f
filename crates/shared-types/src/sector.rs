//! UK business sector enumeration
//!
//! Every sector a business can select at onboarding. Each variant knows its
//! stable string id (used on the wire and as the catalogue lookup key), its
//! display name, its broad industry grouping, and its primary regulator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UK small-business sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    // Healthcare & Medical
    Dental,
    Healthcare,
    CareHome,
    Veterinary,
    Pharmacy,
    Optician,
    Physiotherapy,
    MentalHealth,
    // Construction & Trades
    Construction,
    Electrical,
    Plumbing,
    Roofing,
    // Hospitality & Food
    Hospitality,
    Restaurant,
    Pub,
    Catering,
    Takeaway,
    // Retail, Personal Services & Leisure
    Retail,
    Salon,
    BarberHairdresser,
    TattooStudio,
    PiercingStudio,
    MicrobladingPmu,
    AestheticsClinic,
    Gym,
    // Education & Childcare
    Education,
    Nursery,
    Tuition,
    // Professional Services
    Office,
    Accountancy,
    Legal,
    EstateAgent,
    Recruitment,
    // Other
    Cleaning,
    Security,
    Transport,
    MotorTrade,
    Agriculture,
    Manufacturing,
    Warehouse,
    Charity,
}

impl Sector {
    /// Stable string id, identical to the serde wire form
    pub fn id(&self) -> &'static str {
        match self {
            Sector::Dental => "dental",
            Sector::Healthcare => "healthcare",
            Sector::CareHome => "care_home",
            Sector::Veterinary => "veterinary",
            Sector::Pharmacy => "pharmacy",
            Sector::Optician => "optician",
            Sector::Physiotherapy => "physiotherapy",
            Sector::MentalHealth => "mental_health",
            Sector::Construction => "construction",
            Sector::Electrical => "electrical",
            Sector::Plumbing => "plumbing",
            Sector::Roofing => "roofing",
            Sector::Hospitality => "hospitality",
            Sector::Restaurant => "restaurant",
            Sector::Pub => "pub",
            Sector::Catering => "catering",
            Sector::Takeaway => "takeaway",
            Sector::Retail => "retail",
            Sector::Salon => "salon",
            Sector::BarberHairdresser => "barber_hairdresser",
            Sector::TattooStudio => "tattoo_studio",
            Sector::PiercingStudio => "piercing_studio",
            Sector::MicrobladingPmu => "microblading_pmu",
            Sector::AestheticsClinic => "aesthetics_clinic",
            Sector::Gym => "gym",
            Sector::Education => "education",
            Sector::Nursery => "nursery",
            Sector::Tuition => "tuition",
            Sector::Office => "office",
            Sector::Accountancy => "accountancy",
            Sector::Legal => "legal",
            Sector::EstateAgent => "estate_agent",
            Sector::Recruitment => "recruitment",
            Sector::Cleaning => "cleaning",
            Sector::Security => "security",
            Sector::Transport => "transport",
            Sector::MotorTrade => "motor_trade",
            Sector::Agriculture => "agriculture",
            Sector::Manufacturing => "manufacturing",
            Sector::Warehouse => "warehouse",
            Sector::Charity => "charity",
        }
    }

    /// Display name shown in the onboarding wizard
    pub fn name(&self) -> &'static str {
        match self {
            Sector::Dental => "Dental Practice",
            Sector::Healthcare => "Healthcare Provider",
            Sector::CareHome => "Care Home",
            Sector::Veterinary => "Veterinary Practice",
            Sector::Pharmacy => "Pharmacy",
            Sector::Optician => "Optician / Optometrist",
            Sector::Physiotherapy => "Physiotherapy / Sports Therapy",
            Sector::MentalHealth => "Mental Health Services",
            Sector::Construction => "Construction",
            Sector::Electrical => "Electrical Contractor",
            Sector::Plumbing => "Plumbing & Heating",
            Sector::Roofing => "Roofing Contractor",
            Sector::Hospitality => "Hotel / B&B",
            Sector::Restaurant => "Restaurant / Cafe",
            Sector::Pub => "Pub / Bar",
            Sector::Catering => "Catering Services",
            Sector::Takeaway => "Takeaway / Fast Food",
            Sector::Retail => "Retail Shop",
            Sector::Salon => "Hair / Beauty Salon",
            Sector::BarberHairdresser => "Barber / Hairdresser",
            Sector::TattooStudio => "Tattoo Artist / Studio",
            Sector::PiercingStudio => "Piercing Studio",
            Sector::MicrobladingPmu => "Microblading / PMU",
            Sector::AestheticsClinic => "Aesthetics Clinic",
            Sector::Gym => "Gym / Fitness Centre",
            Sector::Education => "School / College",
            Sector::Nursery => "Nursery / Childcare",
            Sector::Tuition => "Tuition Centre",
            Sector::Office => "Office / Professional Services",
            Sector::Accountancy => "Accountancy Practice",
            Sector::Legal => "Legal Practice",
            Sector::EstateAgent => "Estate Agency",
            Sector::Recruitment => "Recruitment Agency",
            Sector::Cleaning => "Cleaning Services",
            Sector::Security => "Security Services",
            Sector::Transport => "Transport / Logistics",
            Sector::MotorTrade => "Motor Trade / Garage",
            Sector::Agriculture => "Farm / Agriculture",
            Sector::Manufacturing => "Manufacturing",
            Sector::Warehouse => "Warehouse / Distribution",
            Sector::Charity => "Charity / Non-Profit",
        }
    }

    /// Broad industry grouping used for marketing-site filtering
    pub fn industry(&self) -> &'static str {
        match self {
            Sector::Dental
            | Sector::Healthcare
            | Sector::CareHome
            | Sector::Veterinary
            | Sector::Pharmacy
            | Sector::Optician
            | Sector::Physiotherapy
            | Sector::MentalHealth => "Healthcare",
            Sector::Construction | Sector::Electrical | Sector::Plumbing | Sector::Roofing => {
                "Construction"
            }
            Sector::Hospitality
            | Sector::Restaurant
            | Sector::Pub
            | Sector::Catering
            | Sector::Takeaway => "Hospitality",
            Sector::Retail => "Retail",
            Sector::Salon
            | Sector::BarberHairdresser
            | Sector::TattooStudio
            | Sector::PiercingStudio
            | Sector::MicrobladingPmu
            | Sector::AestheticsClinic => "Personal Services",
            Sector::Gym => "Leisure",
            Sector::Education | Sector::Nursery | Sector::Tuition => "Education",
            Sector::Office
            | Sector::Accountancy
            | Sector::Legal
            | Sector::EstateAgent
            | Sector::Recruitment => "Professional Services",
            Sector::Cleaning | Sector::Security => "Services",
            Sector::Transport => "Transport",
            Sector::MotorTrade => "Automotive",
            Sector::Agriculture => "Agriculture",
            Sector::Manufacturing => "Manufacturing",
            Sector::Warehouse => "Logistics",
            Sector::Charity => "Third Sector",
        }
    }

    /// Primary regulator for businesses in this sector
    pub fn regulator(&self) -> &'static str {
        match self {
            Sector::Dental | Sector::Healthcare | Sector::CareHome | Sector::MentalHealth => "CQC",
            Sector::Veterinary => "RCVS",
            Sector::Pharmacy => "GPhC",
            Sector::Optician => "GOC",
            Sector::Physiotherapy => "HCPC",
            Sector::Construction | Sector::Roofing => "HSE",
            Sector::Electrical => "HSE/NICEIC",
            Sector::Plumbing => "HSE/Gas Safe",
            Sector::Hospitality => "EHO",
            Sector::Restaurant | Sector::Catering | Sector::Takeaway => "EHO/FSA",
            Sector::Pub => "EHO/Licensing",
            Sector::Retail | Sector::MotorTrade | Sector::EstateAgent => "Trading Standards",
            Sector::Salon
            | Sector::BarberHairdresser
            | Sector::TattooStudio
            | Sector::PiercingStudio
            | Sector::MicrobladingPmu => "EHO",
            Sector::AestheticsClinic => "JCCP/CQC",
            Sector::Gym | Sector::Agriculture | Sector::Manufacturing | Sector::Warehouse => "HSE",
            Sector::Education | Sector::Nursery | Sector::Tuition => "Ofsted",
            Sector::Office => "HSE/ICO",
            Sector::Accountancy => "ICAEW/ACCA",
            Sector::Legal => "SRA",
            Sector::Recruitment => "ICO/HMRC",
            Sector::Cleaning => "HSE",
            Sector::Security => "SIA",
            Sector::Transport => "DVSA",
            Sector::Charity => "Charity Commission",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error for unrecognised sector ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSector(pub String);

impl fmt::Display for UnknownSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sector id: {}", self.0)
    }
}

impl std::error::Error for UnknownSector {}

impl FromStr for Sector {
    type Err = UnknownSector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dental" => Ok(Sector::Dental),
            "healthcare" => Ok(Sector::Healthcare),
            "care_home" => Ok(Sector::CareHome),
            "veterinary" => Ok(Sector::Veterinary),
            "pharmacy" => Ok(Sector::Pharmacy),
            "optician" => Ok(Sector::Optician),
            "physiotherapy" => Ok(Sector::Physiotherapy),
            "mental_health" => Ok(Sector::MentalHealth),
            "construction" => Ok(Sector::Construction),
            "electrical" => Ok(Sector::Electrical),
            "plumbing" => Ok(Sector::Plumbing),
            "roofing" => Ok(Sector::Roofing),
            "hospitality" => Ok(Sector::Hospitality),
            "restaurant" => Ok(Sector::Restaurant),
            "pub" => Ok(Sector::Pub),
            "catering" => Ok(Sector::Catering),
            "takeaway" => Ok(Sector::Takeaway),
            "retail" => Ok(Sector::Retail),
            "salon" => Ok(Sector::Salon),
            "barber_hairdresser" => Ok(Sector::BarberHairdresser),
            "tattoo_studio" => Ok(Sector::TattooStudio),
            "piercing_studio" => Ok(Sector::PiercingStudio),
            "microblading_pmu" => Ok(Sector::MicrobladingPmu),
            "aesthetics_clinic" => Ok(Sector::AestheticsClinic),
            "gym" => Ok(Sector::Gym),
            "education" => Ok(Sector::Education),
            "nursery" => Ok(Sector::Nursery),
            "tuition" => Ok(Sector::Tuition),
            "office" => Ok(Sector::Office),
            "accountancy" => Ok(Sector::Accountancy),
            "legal" => Ok(Sector::Legal),
            "estate_agent" => Ok(Sector::EstateAgent),
            "recruitment" => Ok(Sector::Recruitment),
            "cleaning" => Ok(Sector::Cleaning),
            "security" => Ok(Sector::Security),
            "transport" => Ok(Sector::Transport),
            "motor_trade" => Ok(Sector::MotorTrade),
            "agriculture" => Ok(Sector::Agriculture),
            "manufacturing" => Ok(Sector::Manufacturing),
            "warehouse" => Ok(Sector::Warehouse),
            "charity" => Ok(Sector::Charity),
            other => Err(UnknownSector(other.to_string())),
        }
    }
}
