//! Rule table for the recommendation engine.
//!
//! Each general rule is a unit struct implementing [`Rule`]: a trigger
//! predicate over [`Signals`] plus a function producing the scored
//! recommendation(s). Terminal tracks (M.Tech, ITI) and the fallback are
//! plain functions because they are never evaluated as part of the table.
//!
//! # General Rules (evaluation order)
//!
//! | Rule            | Fires when | Score |
//! |-----------------|------------|-------|
//! | `software-eng`  | math background, CS/elec stream, or `tech` interest | 75 +15 (10th maths) +20 (CS) +10 (`code`), cap 99 |
//! | `electrical-eng`| EEE or Electrician | 95 (80 via MPC + `tech`) |
//! | `vlsi-embedded` | ECE or EEE | 98 ECE, 90 EEE |
//! | `mechanical-eng`| mech stream, or MPC + `tech` | 90 |
//! | `chemical-eng`  | MPC + (`med` or `tech`) | 75 |
//! | `doctor-neet`   | science background, MBBS, or `med` | 70 +20 (10th science) +25 (BiPC), cap 99 |
//! | `ca-finance`    | commerce background, BBA, or `biz` | 70 +20 (10th maths/MEC/CEC) +10 (accounting), cap 98 |
//! | `civil-services`| social background, English, B.A, `law`, or CIVIL | 75 +25 (10th social), 85 if CIVIL, cap 99 |

use crate::recommendation::Recommendation;
use crate::types::{Domain, Stream};

use super::signals::Signals;

// ============================================================================
// Content Cards
// ============================================================================

/// Static content of a recommendation, scored at evaluation time.
///
/// Variants of one rule share an `id` and are written with struct update
/// syntax over the base card.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub domain: Domain,
    pub exams: &'static [&'static str],
    pub roadmap: &'static [&'static str],
    pub salary: &'static str,
}

impl Card {
    pub fn scored(&self, score: u8) -> Recommendation {
        Recommendation {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            match_score: score.min(crate::recommendation::MAX_SCORE),
            domain: self.domain,
            exams: self.exams.iter().map(|e| e.to_string()).collect(),
            roadmap: self.roadmap.iter().map(|m| m.to_string()).collect(),
            salary_potential: self.salary.to_string(),
        }
    }
}

/// A general-track rule
pub trait Rule: Sync {
    /// Recommendation id this rule emits (for tracing and tests)
    fn id(&self) -> &'static str;

    /// Whether the rule fires for this profile
    fn applies(&self, signals: &Signals) -> bool;

    /// Scored recommendations; only called when `applies` is true.
    /// May be empty when no sub-rule matches.
    fn recommend(&self, signals: &Signals) -> Vec<Recommendation>;

    /// `recommend` if the rule fires, otherwise nothing
    fn evaluate(&self, signals: &Signals) -> Vec<Recommendation> {
        if self.applies(signals) {
            self.recommend(signals)
        } else {
            Vec::new()
        }
    }
}

/// General rules in evaluation order
pub static GENERAL_RULES: &[&dyn Rule] = &[
    &SoftwareRule,
    &ElectricalRule,
    &MechanicalRule,
    &ChemicalRule,
    &MedicalRule,
    &CommerceRule,
    &CivilServicesRule,
];

fn bonus(condition: bool, points: u8) -> u8 {
    if condition { points } else { 0 }
}

// ============================================================================
// Terminal Tracks
// ============================================================================

pub const RESEARCH_SCIENTIST: Card = Card {
    id: "research-scientist",
    title: "R&D Engineer / Scientist",
    description: "Lead research initiatives and develop cutting-edge technologies.",
    domain: Domain::Tech,
    exams: &["CSIR NET", "Gate Score", "PhD Entrances"],
    roadmap: &["Publish Papers", "Join R&D Labs (ISRO/DRDO/Google)", "PhD (Optional)"],
    salary: "Very High",
};

pub const PROFESSOR: Card = Card {
    id: "professor",
    title: "Assistant Professor",
    description: "Academic career in top universities and engineering colleges.",
    domain: Domain::Government,
    exams: &["UGC NET", "State SET"],
    roadmap: &["Assistant Professor", "PhD", "Associate Professor"],
    salary: "High",
};

pub const TECH_ARCHITECT: Card = Card {
    id: "tech-architect",
    title: "Senior Solutions Architect",
    description: "Design complex systems and lead technical teams in MNCs.",
    domain: Domain::Tech,
    exams: &["AWS Certified Solutions Architect", "Google Cloud Architect"],
    roadmap: &["Gain Industry Exp", "System Design Mastery", "Leadership Roles"],
    salary: "Very High",
};

pub const ELECTRICAL_TECH: Card = Card {
    id: "electrical-tech",
    title: "Certified Electrician / Lineman",
    description: "Government jobs in Railways/Electricity boards or private contracting.",
    domain: Domain::CoreEngineering,
    exams: &["ALP (Railways)", "State Electricity Board Exams"],
    roadmap: &["Apprenticeship (NAC)", "Junior Technician", "Senior Technician"],
    salary: "Medium",
};

pub const MECH_TECH: Card = Card {
    id: "mech-tech",
    title: "Mechanical Technician / Fitter",
    description: "Maintenance and operations in manufacturing plants (BHEL, NTPC).",
    domain: Domain::CoreEngineering,
    exams: &["DRDO CEPTAM", "ISRO Technician"],
    roadmap: &["Apprenticeship", "Industrial Training", "Technician Grade"],
    salary: "Medium",
};

pub const COMPUTER_OPERATOR: Card = Card {
    id: "comp-op",
    title: "Computer Operator / Data Entry",
    description: "IT support and data operations roles.",
    domain: Domain::Tech,
    exams: &["SSC CHSL", "State Govt Exams"],
    roadmap: &["Advanced Excel/Typing", "Polytechnic Diploma (Lateral Entry)"],
    salary: "Medium",
};

pub const LATERAL_DIPLOMA: Card = Card {
    id: "lateral-diploma",
    title: "Lateral Entry Diploma (Polytechnic)",
    description: "Upgrade your qualification to Diploma (Direct 2nd Year).",
    domain: Domain::CoreEngineering,
    exams: &["ECET (Lateral)"],
    roadmap: &["Join Diploma", "B.Tech (Lateral)", "Engineer"],
    salary: "High",
};

pub const POLYTECHNIC: Card = Card {
    id: "polytechnic",
    title: "Polytechnic Diploma / Skill Certs",
    description: "Technical education or specialized skill certification.",
    domain: Domain::CoreEngineering,
    exams: &["POLYCET"],
    roadmap: &["Join Diploma (3 Years)", "Lateral Entry to B.Tech"],
    salary: "Medium",
};

/// Recommendations every M.Tech profile receives
pub fn mtech_core() -> Vec<Recommendation> {
    vec![RESEARCH_SCIENTIST.scored(95), PROFESSOR.scored(85)]
}

pub fn tech_architect() -> Recommendation {
    TECH_ARCHITECT.scored(90)
}

/// The single trade recommendation for an ITI profile.
///
/// Groups are checked electrical, then mechanical, then computing; the
/// first match wins.
pub fn iti_trade(signals: &Signals) -> Option<Recommendation> {
    if signals.elec_like {
        Some(ELECTRICAL_TECH.scored(95))
    } else if signals.mech_like {
        Some(MECH_TECH.scored(95))
    } else if signals.cs_like {
        Some(COMPUTER_OPERATOR.scored(90))
    } else {
        None
    }
}

pub fn lateral_diploma() -> Recommendation {
    LATERAL_DIPLOMA.scored(80)
}

/// Emitted only when nothing else produced a recommendation
pub fn fallback() -> Recommendation {
    POLYTECHNIC.scored(85)
}

// ============================================================================
// General Rules
// ============================================================================

const SOFTWARE: Card = Card {
    id: "software-eng",
    title: "Software Engineer / Architect",
    description: "Design and build intelligent software systems and applications.",
    domain: Domain::Tech,
    exams: &["JEE Mains/Adv", "GATE (CSE)", "Coding Interviews"],
    roadmap: &["Strong DSA", "System Design", "Full Stack / ML Projects"],
    salary: "Very High",
};

const SOFTWARE_FROM_TENTH: Card = Card {
    description: "Ideal next step: Choose MPC in Intermediate, then B.Tech.",
    roadmap: &["Join Intermediate (MPC)", "Prepare for JEE", "B.Tech CSE/IT"],
    ..SOFTWARE
};

/// Software engineering, or AI/data science for AI & ML students
pub struct SoftwareRule;

impl Rule for SoftwareRule {
    fn id(&self) -> &'static str {
        SOFTWARE.id
    }

    fn applies(&self, s: &Signals) -> bool {
        s.math_background || s.cs_like || s.elec_like || s.has_interest("tech")
    }

    fn recommend(&self, s: &Signals) -> Vec<Recommendation> {
        let from_tenth = s.is(Stream::SscMath);
        let score = 75
            + bonus(from_tenth, 15)
            + bonus(s.cs_like, 20)
            + bonus(s.has_interest("code"), 10);

        let mut card = if from_tenth { SOFTWARE_FROM_TENTH } else { SOFTWARE };
        if s.is(Stream::AiMl) {
            card.title = "AI Engineer / Data Scientist";
        }
        vec![card.scored(score.min(99))]
    }
}

const POWER_SYSTEMS: Card = Card {
    id: "electrical-eng",
    title: "Electrical Engineer / Power Systems",
    description: "Design electrical systems, power grids, and renewable energy solutions.",
    domain: Domain::CoreEngineering,
    exams: &["GATE (EE)", "ESE (IES)", "PSU Exams"],
    roadmap: &[
        "B.Tech EEE",
        "Projects in Power Electronics",
        "GATE Preparation",
        "PSU Jobs",
    ],
    salary: "High",
};

const VLSI_EMBEDDED: Card = Card {
    id: "vlsi-embedded",
    title: "VLSI / Embedded Systems Engineer",
    description: "Design microchips, processors, and embedded IoT systems.",
    domain: Domain::Tech,
    exams: &["GATE (EC)", "Company Tests (Intel/Qualcomm)"],
    roadmap: &["Master Verilog/VHDL", "Embedded C", "M.Tech for specialized roles"],
    salary: "High",
};

/// Power systems and VLSI/embedded. EEE triggers both sub-rules.
pub struct ElectricalRule;

impl Rule for ElectricalRule {
    fn id(&self) -> &'static str {
        POWER_SYSTEMS.id
    }

    fn applies(&self, s: &Signals) -> bool {
        s.elec_like || (s.is(Stream::Mpc) && s.has_interest("tech"))
    }

    fn recommend(&self, s: &Signals) -> Vec<Recommendation> {
        let mut recs = Vec::new();

        if s.is_any(&[Stream::Eee, Stream::ItiElectrician]) {
            let score = if s.elec_like { 95 } else { 80 };
            recs.push(POWER_SYSTEMS.scored(score));
        }

        if s.is_any(&[Stream::Ece, Stream::Eee]) {
            let score = if s.is(Stream::Ece) { 98 } else { 90 };
            recs.push(VLSI_EMBEDDED.scored(score));
        }

        recs
    }
}

const MECHANICAL: Card = Card {
    id: "mechanical-eng",
    title: "Mechanical / Robotics Engineer",
    description: "Design automated systems, EVs, and machinery.",
    domain: Domain::CoreEngineering,
    exams: &["GATE (ME)", "ISRO Centralize Recruitment"],
    roadmap: &[
        "B.Tech Mechanical",
        "CAD/CFD Software Mastery",
        "Internships at ISRO/DRDO/Auto Giants",
        "R&D Roles",
    ],
    salary: "High",
};

pub struct MechanicalRule;

impl Rule for MechanicalRule {
    fn id(&self) -> &'static str {
        MECHANICAL.id
    }

    fn applies(&self, s: &Signals) -> bool {
        s.mech_like || (s.is(Stream::Mpc) && s.has_interest("tech"))
    }

    fn recommend(&self, _s: &Signals) -> Vec<Recommendation> {
        vec![MECHANICAL.scored(90)]
    }
}

const CHEMICAL: Card = Card {
    id: "chemical-eng",
    title: "Chemical Process Engineer",
    description: "Work in Oil & Gas, Pharma, or Sustainable Energy sectors.",
    domain: Domain::CoreEngineering,
    exams: &["GATE (CH)", "PSU Recruitment"],
    roadmap: &["B.Tech Chemical", "Process Simulation", "Plant Design Projects"],
    salary: "High",
};

pub struct ChemicalRule;

impl Rule for ChemicalRule {
    fn id(&self) -> &'static str {
        CHEMICAL.id
    }

    fn applies(&self, s: &Signals) -> bool {
        s.is(Stream::Mpc) && (s.has_interest("med") || s.has_interest("tech"))
    }

    fn recommend(&self, _s: &Signals) -> Vec<Recommendation> {
        vec![CHEMICAL.scored(75)]
    }
}

const MEDICAL: Card = Card {
    id: "doctor-neet",
    title: "Doctor (MBBS) / Medical",
    description: "Clinical practice and patient care.",
    domain: Domain::Medical,
    exams: &["NEET-UG"],
    roadmap: &["NEET-PG", "Specialization"],
    salary: "High",
};

const MEDICAL_FROM_TENTH: Card = Card {
    description: "Ideal next step: Choose BiPC in Intermediate to pursue Medicine.",
    roadmap: &["Join Intermediate (BiPC)", "Crack NEET-UG", "MBBS (5.5 yrs)"],
    ..MEDICAL
};

pub struct MedicalRule;

impl Rule for MedicalRule {
    fn id(&self) -> &'static str {
        MEDICAL.id
    }

    fn applies(&self, s: &Signals) -> bool {
        s.science_background || s.is(Stream::Mbbs) || s.has_interest("med")
    }

    fn recommend(&self, s: &Signals) -> Vec<Recommendation> {
        let from_tenth = s.is(Stream::SscScience);
        let score = 70 + bonus(from_tenth, 20) + bonus(s.is(Stream::Bipc), 25);

        let card = if from_tenth { MEDICAL_FROM_TENTH } else { MEDICAL };
        vec![card.scored(score.min(99))]
    }
}

const COMMERCE: Card = Card {
    id: "ca-finance",
    title: "Chartered Accountant / MBA",
    description: "Expert in finance, audit, strategy, and business management.",
    domain: Domain::Business,
    exams: &["CA Foundation", "CAT", "GMAT"],
    roadmap: &["Professional Certifications (CA/CFA)", "Top Tier MBA"],
    salary: "Very High",
};

pub struct CommerceRule;

impl Rule for CommerceRule {
    fn id(&self) -> &'static str {
        COMMERCE.id
    }

    fn applies(&self, s: &Signals) -> bool {
        s.commerce_background || s.is(Stream::Bba) || s.has_interest("biz")
    }

    fn recommend(&self, s: &Signals) -> Vec<Recommendation> {
        let score = 70
            + bonus(s.is_any(&[Stream::SscMath, Stream::Mec, Stream::Cec]), 20)
            + bonus(s.has_skill("Accounting"), 10);
        vec![COMMERCE.scored(score.min(98))]
    }
}

const CIVIL_SERVICES: Card = Card {
    id: "civil-services",
    title: "Civil Services (IAS/IPS)",
    description: "Administrative roles serving the nation.",
    domain: Domain::Government,
    exams: &["UPSC CSE", "GATE (Civil)"],
    roadmap: &["Degree", "UPSC Prelims", "Mains"],
    salary: "High Perks",
};

const CIVIL_ENGINEERING: Card = Card {
    title: "Civil Engineer / Govt Services",
    description: "Infrastructure projects and public works.",
    salary: "High",
    ..CIVIL_SERVICES
};

const SOCIAL_ROADMAP: &[&str] = &["Join HEC/CEC/MEC", "Bachelor Degree (BA/B.Sc)", "UPSC Prep"];

/// Civil services, or civil engineering framing for CIVIL students
pub struct CivilServicesRule;

impl Rule for CivilServicesRule {
    fn id(&self) -> &'static str {
        CIVIL_SERVICES.id
    }

    fn applies(&self, s: &Signals) -> bool {
        s.social_background
            || s.is_any(&[Stream::SscEnglish, Stream::Ba])
            || s.has_interest("law")
            || s.civil_like
    }

    fn recommend(&self, s: &Signals) -> Vec<Recommendation> {
        let from_social = s.is(Stream::SscSocial);
        // CIVIL overrides the additive score
        let score = if s.civil_like { 85 } else { 75 + bonus(from_social, 25) };

        let mut card = if s.civil_like { CIVIL_ENGINEERING } else { CIVIL_SERVICES };
        if from_social {
            card.roadmap = SOCIAL_ROADMAP;
        }
        vec![card.scored(score.min(99))]
    }
}
