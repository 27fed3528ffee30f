//! The versioned catalogue of industry profiles
//!
//! A catalogue is built once at startup and passed into the engine as a
//! value. Scoring and checklist derivation never consult global state, so two
//! engines holding different catalogue versions can run side by side during a
//! rollout.

use std::collections::BTreeMap;

use tracing::warn;

use shared_types::{ComplianceItemTemplate, IndustryProfile, RequirementTemplate, Sector};

use crate::industries;

/// Immutable set of industry profiles plus fallback templates for sectors
/// without a dedicated definition.
#[derive(Debug, Clone)]
pub struct Catalogue {
    version: String,
    profiles: BTreeMap<Sector, IndustryProfile>,
    fallback_items: Vec<ComplianceItemTemplate>,
    fallback_requirements: Vec<RequirementTemplate>,
}

impl Catalogue {
    /// Build a catalogue from explicit profiles. Test fixtures use this to
    /// pin down small, known template sets.
    pub fn new(
        version: &str,
        profiles: Vec<IndustryProfile>,
        fallback_items: Vec<ComplianceItemTemplate>,
        fallback_requirements: Vec<RequirementTemplate>,
    ) -> Self {
        Catalogue {
            version: version.to_string(),
            profiles: profiles.into_iter().map(|p| (p.sector, p)).collect(),
            fallback_items,
            fallback_requirements,
        }
    }

    /// The built-in catalogue covering every sector with a dedicated profile,
    /// with the generic small-business templates as fallback.
    pub fn builtin() -> Self {
        Catalogue::new(
            "2025.2",
            vec![
                industries::tattoo_studio::profile(),
                industries::piercing_studio::profile(),
                industries::microblading_pmu::profile(),
                industries::aesthetics_clinic::profile(),
                industries::barber_hairdresser::profile(),
                industries::salon::profile(),
                industries::dental::profile(),
                industries::healthcare::profile(),
                industries::care_home::profile(),
                industries::veterinary::profile(),
                industries::construction::profile(),
                industries::hospitality::profile(),
                industries::restaurant::profile(),
                industries::retail::profile(),
                industries::education::profile(),
                industries::nursery::profile(),
                industries::office::profile(),
                industries::cleaning::profile(),
                industries::security::profile(),
            ],
            industries::default::item_templates(),
            industries::default::requirement_templates(),
        )
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Look up the profile for a sector. Sectors without a dedicated profile
    /// get one materialised from the fallback templates, labelled with the
    /// sector that was asked for.
    pub fn profile(&self, sector: Sector) -> IndustryProfile {
        match self.profiles.get(&sector) {
            Some(profile) => profile.clone(),
            None => {
                warn!(sector = sector.id(), "no dedicated profile, using fallback");
                IndustryProfile::new(
                    sector,
                    self.fallback_items.clone(),
                    self.fallback_requirements.clone(),
                )
            }
        }
    }

    pub fn has_dedicated_profile(&self, sector: Sector) -> bool {
        self.profiles.contains_key(&sector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_covers_body_art_sectors() {
        let catalogue = Catalogue::builtin();
        for sector in [
            Sector::TattooStudio,
            Sector::PiercingStudio,
            Sector::MicrobladingPmu,
            Sector::AestheticsClinic,
            Sector::BarberHairdresser,
        ] {
            assert!(
                catalogue.has_dedicated_profile(sector),
                "missing profile for {sector}"
            );
            assert_eq!(catalogue.profile(sector).sector, sector);
        }
    }

    #[test]
    fn test_service_sectors_have_dedicated_profiles() {
        let catalogue = Catalogue::builtin();
        for sector in [
            Sector::Salon,
            Sector::Restaurant,
            Sector::Retail,
            Sector::Veterinary,
            Sector::Education,
            Sector::Cleaning,
            Sector::Security,
        ] {
            assert!(
                catalogue.has_dedicated_profile(sector),
                "missing profile for {sector}"
            );
        }
    }

    #[test]
    fn test_salon_staff_carry_sector_specific_requirements() {
        let catalogue = Catalogue::builtin();
        let salon = catalogue.profile(Sector::Salon);
        let types: Vec<&str> = salon
            .requirement_templates
            .iter()
            .map(|t| t.requirement_type.as_str())
            .collect();

        // Not the generic baseline: salon staff need hygiene and chemical
        // handling certificates on top of it
        assert!(types.contains(&"infection_control"));
        assert!(types.contains(&"coshh"));
        assert!(types.contains(&"nvq_qualification"));

        let security = catalogue.profile(Sector::Security);
        assert!(security
            .requirement_templates
            .iter()
            .any(|t| t.requirement_type == "sia_licence"));
    }

    #[test]
    fn test_unlisted_sector_falls_back() {
        let catalogue = Catalogue::builtin();
        assert!(!catalogue.has_dedicated_profile(Sector::Gym));
        let profile = catalogue.profile(Sector::Gym);
        assert_eq!(profile.sector, Sector::Gym);
        assert!(profile.has_template("health_safety_policy"));
        assert!(profile.has_template("fire_risk_assessment"));
    }

    #[test]
    fn test_builtin_profiles_are_nonempty() {
        let catalogue = Catalogue::builtin();
        for (_, profile) in &catalogue.profiles {
            assert!(!profile.item_templates.is_empty(), "{}", profile.name);
            assert!(
                !profile.requirement_templates.is_empty(),
                "{}",
                profile.name
            );
        }
        assert_eq!(catalogue.version(), "2025.2");
    }
}
