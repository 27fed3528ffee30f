//! Industry-specific compliance profiles
//!
//! Each module defines the catalogue profile for one UK sector: the document
//! checklist a business in that sector must hold and the certifications its
//! employees must keep current. Content reflects the relevant regulator's
//! published requirements (CQC, EHO, HSE, Ofsted).
//!
//! Sectors without a dedicated module are served by the `default` templates.

pub mod aesthetics_clinic;
pub mod barber_hairdresser;
pub mod care_home;
pub mod cleaning;
pub mod construction;
pub mod default;
pub mod dental;
pub mod education;
pub mod healthcare;
pub mod hospitality;
pub mod microblading_pmu;
pub mod nursery;
pub mod office;
pub mod piercing_studio;
pub mod restaurant;
pub mod retail;
pub mod salon;
pub mod security;
pub mod tattoo_studio;
pub mod veterinary;
