//! Static deck content
//!
//! Presentation constants for every section. None of these figures are
//! computed; they are shown as-is.

use strum::{AsRefStr, Display, EnumIter, EnumString};

pub const COMPANY: &str = "TumorTarget AI";
pub const TAGLINE: &str = "Revolutionizing Cancer Treatment with AI-Powered Probiotics";
pub const AWARD: &str = "Winner: MIT Innovation Challenge 2024";

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const HERO_STATS: [Stat; 4] = [
    Stat {
        label: "Patent Applications",
        value: "12+",
    },
    Stat {
        label: "Efficacy Rate",
        value: "94.7%",
    },
    Stat {
        label: "Lives Impacted",
        value: "50K+",
    },
    Stat {
        label: "Global Reach",
        value: "25 Countries",
    },
];

// -----------------------------------------------------------------------------
// Technology
// -----------------------------------------------------------------------------

pub struct Phase {
    pub name: &'static str,
    pub description: &'static str,
}

pub const PHASES: [Phase; 5] = [
    Phase {
        name: "Ingestion",
        description: "Capsule travels through digestive system",
    },
    Phase {
        name: "Bloodstream Entry",
        description: "Controlled release into circulation",
    },
    Phase {
        name: "Tumor Detection",
        description: "AI sensors identify cancer biomarkers",
    },
    Phase {
        name: "Targeted Deployment",
        description: "Probiotics released at tumor site",
    },
    Phase {
        name: "Elimination",
        description: "Coordinated attack destroys cancer cells",
    },
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Technology {
    Capsule,
    Ai,
    Targeting,
    Probiotics,
}

impl Technology {
    pub fn title(&self) -> &'static str {
        match self {
            Technology::Capsule => "Smart Capsule Design",
            Technology::Ai => "AI Detection Engine",
            Technology::Targeting => "Precision Targeting",
            Technology::Probiotics => "Engineered Probiotics",
        }
    }

    pub fn features(&self) -> [&'static str; 4] {
        match self {
            Technology::Capsule => [
                "pH-responsive polymer coating",
                "Biodegradable nanostructure",
                "Temperature-stable storage",
                "Controlled release mechanism",
            ],
            Technology::Ai => [
                "Real-time biomarker analysis",
                "Machine learning tumor classification",
                "Predictive targeting algorithms",
                "Adaptive treatment optimization",
            ],
            Technology::Targeting => [
                "Molecular-level recognition",
                "Multi-modal sensor array",
                "GPS-like tumor navigation",
                "Selective cell destruction",
            ],
            Technology::Probiotics => [
                "Genetically modified bacteria",
                "Tumor-specific cytotoxins",
                "Self-destruct mechanisms",
                "Immune system enhancement",
            ],
        }
    }
}

// -----------------------------------------------------------------------------
// Clinical data
// -----------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Dataset {
    Efficacy,
    CancerTypes,
    SideEffects,
}

impl Dataset {
    pub fn title(&self) -> &'static str {
        match self {
            Dataset::Efficacy => "Treatment Efficacy Over Time",
            Dataset::CancerTypes => "Efficacy by Cancer Type",
            Dataset::SideEffects => "Safety Profile - Side Effects",
        }
    }
}

pub struct EfficacyPoint {
    pub month: &'static str,
    pub traditional: f64,
    pub tumor_target: f64,
}

pub const EFFICACY: [EfficacyPoint; 4] = [
    EfficacyPoint {
        month: "Month 1",
        traditional: 45.0,
        tumor_target: 78.0,
    },
    EfficacyPoint {
        month: "Month 3",
        traditional: 52.0,
        tumor_target: 85.0,
    },
    EfficacyPoint {
        month: "Month 6",
        traditional: 58.0,
        tumor_target: 91.0,
    },
    EfficacyPoint {
        month: "Month 12",
        traditional: 61.0,
        tumor_target: 94.7,
    },
];

pub struct CancerType {
    pub name: &'static str,
    pub efficacy: f64,
    pub patients: u64,
}

pub const CANCER_TYPES: [CancerType; 5] = [
    CancerType {
        name: "Breast Cancer",
        efficacy: 96.2,
        patients: 1250,
    },
    CancerType {
        name: "Lung Cancer",
        efficacy: 93.8,
        patients: 980,
    },
    CancerType {
        name: "Colorectal",
        efficacy: 95.1,
        patients: 750,
    },
    CancerType {
        name: "Prostate",
        efficacy: 97.3,
        patients: 650,
    },
    CancerType {
        name: "Pancreatic",
        efficacy: 89.4,
        patients: 420,
    },
];

pub struct SideEffect {
    pub name: &'static str,
    pub percent: u64,
}

pub const SIDE_EFFECTS: [SideEffect; 4] = [
    SideEffect {
        name: "None",
        percent: 78,
    },
    SideEffect {
        name: "Mild",
        percent: 18,
    },
    SideEffect {
        name: "Moderate",
        percent: 3,
    },
    SideEffect {
        name: "Severe",
        percent: 1,
    },
];

// -----------------------------------------------------------------------------
// AI engine
// -----------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum AiModel {
    Detection,
    Targeting,
    Monitoring,
}

impl AiModel {
    pub fn title(&self) -> &'static str {
        match self {
            AiModel::Detection => "Tumor Detection AI",
            AiModel::Targeting => "Precision Targeting",
            AiModel::Monitoring => "Treatment Monitoring",
        }
    }

    pub fn accuracy(&self) -> &'static str {
        match self {
            AiModel::Detection => "99.2%",
            AiModel::Targeting => "97.8%",
            AiModel::Monitoring => "98.5%",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AiModel::Detection => "Deep learning model trained on 2.3M medical images",
            AiModel::Targeting => "Reinforcement learning for optimal probiotic deployment",
            AiModel::Monitoring => "Continuous learning from patient responses",
        }
    }

    pub fn features(&self) -> [&'static str; 4] {
        match self {
            AiModel::Detection => [
                "Multi-modal imaging analysis",
                "Real-time biomarker detection",
                "Early-stage tumor identification",
                "False positive rate: 0.3%",
            ],
            AiModel::Targeting => [
                "Dynamic route optimization",
                "Tissue-specific targeting",
                "Minimal collateral damage",
                "Adaptive dosing algorithms",
            ],
            AiModel::Monitoring => [
                "Real-time efficacy tracking",
                "Predictive outcome modeling",
                "Personalized adjustments",
                "Safety alert systems",
            ],
        }
    }
}

pub const AI_STATIC_STATS: [Stat; 4] = [
    Stat {
        label: "Processing Speed",
        value: "2.3ms",
    },
    Stat {
        label: "Active Models",
        value: "12",
    },
    Stat {
        label: "Data Points",
        value: "847K",
    },
    Stat {
        label: "Accuracy",
        value: "99.2%",
    },
];

// -----------------------------------------------------------------------------
// Monitoring
// -----------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum AlertKind {
    Success,
    Info,
    Warning,
}

pub struct Alert {
    pub kind: AlertKind,
    pub message: &'static str,
    pub time: &'static str,
}

pub const ALERTS: [Alert; 3] = [
    Alert {
        kind: AlertKind::Success,
        message: "Probiotic deployment successful",
        time: "2 min ago",
    },
    Alert {
        kind: AlertKind::Info,
        message: "Tumor markers decreasing",
        time: "5 min ago",
    },
    Alert {
        kind: AlertKind::Warning,
        message: "Slight temperature elevation detected",
        time: "12 min ago",
    },
];

// -----------------------------------------------------------------------------
// Market
// -----------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum MarketMetric {
    Market,
    Revenue,
    Impact,
}

pub struct Segment {
    pub name: &'static str,
    pub value: &'static str,
    pub percent: u16,
}

pub struct MarketFigure {
    pub title: &'static str,
    pub value: &'static str,
    pub growth: &'static str,
    pub description: &'static str,
    pub breakdown: [Segment; 4],
}

impl MarketMetric {
    pub fn figure(&self) -> MarketFigure {
        match self {
            MarketMetric::Market => MarketFigure {
                title: "Total Addressable Market",
                value: "$240B",
                growth: "+12.4% CAGR",
                description: "Global cancer therapeutics market by 2030",
                breakdown: [
                    Segment {
                        name: "Targeted Therapy",
                        value: "$89B",
                        percent: 37,
                    },
                    Segment {
                        name: "Immunotherapy",
                        value: "$72B",
                        percent: 30,
                    },
                    Segment {
                        name: "Precision Medicine",
                        value: "$48B",
                        percent: 20,
                    },
                    Segment {
                        name: "Digital Health",
                        value: "$31B",
                        percent: 13,
                    },
                ],
            },
            MarketMetric::Revenue => MarketFigure {
                title: "Revenue Projections",
                value: "$2.8B",
                growth: "+340% by 2028",
                description: "Projected annual revenue at scale",
                breakdown: [
                    Segment {
                        name: "Treatment Licenses",
                        value: "$1.2B",
                        percent: 43,
                    },
                    Segment {
                        name: "AI Platform SaaS",
                        value: "$0.8B",
                        percent: 29,
                    },
                    Segment {
                        name: "Monitoring Services",
                        value: "$0.5B",
                        percent: 18,
                    },
                    Segment {
                        name: "Research Partnerships",
                        value: "$0.3B",
                        percent: 10,
                    },
                ],
            },
            MarketMetric::Impact => MarketFigure {
                title: "Lives Impacted",
                value: "2.5M",
                growth: "+500K annually",
                description: "Patients treated by 2030",
                breakdown: [
                    Segment {
                        name: "Breast Cancer",
                        value: "850K",
                        percent: 34,
                    },
                    Segment {
                        name: "Lung Cancer",
                        value: "625K",
                        percent: 25,
                    },
                    Segment {
                        name: "Colorectal",
                        value: "500K",
                        percent: 20,
                    },
                    Segment {
                        name: "Other Types",
                        value: "525K",
                        percent: 21,
                    },
                ],
            },
        }
    }
}

pub const ADVANTAGES: [(&str, &str); 4] = [
    ("First-Mover Advantage", "12+ patents filed, 3+ years ahead of competition"),
    ("Superior Efficacy", "94.7% success rate vs 61% traditional therapy"),
    ("Cost Effectiveness", "78% reduction in treatment costs"),
    ("Global Scalability", "Platform ready for worldwide deployment"),
];

pub const PARTNERS: [(&str, &str); 4] = [
    ("Mayo Clinic", "Clinical Partner"),
    ("Pfizer", "Pharma Alliance"),
    ("Google Health", "AI Partnership"),
    ("FDA", "Regulatory"),
];

// -----------------------------------------------------------------------------
// Team
// -----------------------------------------------------------------------------

pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub expertise: &'static str,
    pub education: &'static str,
}

pub const TEAM: [Member; 4] = [
    Member {
        name: "Dr. Sarah Chen",
        role: "CEO & Co-Founder",
        expertise: "Oncology & Bioengineering",
        education: "MD/PhD Harvard Medical School",
    },
    Member {
        name: "Dr. Michael Rodriguez",
        role: "CTO & Co-Founder",
        expertise: "AI/ML & Computational Biology",
        education: "PhD Computer Science MIT",
    },
    Member {
        name: "Dr. Emily Watson",
        role: "Chief Medical Officer",
        expertise: "Clinical Trials & Regulatory",
        education: "MD Johns Hopkins, MBA Wharton",
    },
    Member {
        name: "Dr. James Kim",
        role: "Head of AI Research",
        expertise: "Machine Learning & Computer Vision",
        education: "PhD Stanford AI Lab",
    },
];

/// (name, role, affiliation)
pub const ADVISORS: [(&str, &str, &str); 4] = [
    ("Dr. Jennifer Doudna", "CRISPR Pioneer, Nobel Laureate", "UC Berkeley"),
    ("Dr. Eric Topol", "Digital Medicine Expert", "Scripps Research"),
    ("Reid Hoffman", "Tech Entrepreneur", "Greylock Partners"),
    ("Dr. Mary-Claire King", "Genetics Pioneer", "University of Washington"),
];

/// (name, amount, stage)
pub const INVESTORS: [(&str, &str, &str); 4] = [
    ("Andreessen Horowitz", "$50M Series B", "Lead Investor"),
    ("GV (Google Ventures)", "$25M Series A", "Strategic"),
    ("Johnson & Johnson Innovation", "$15M Seed", "Corporate VC"),
    ("Khosla Ventures", "$10M Pre-Seed", "Early Believer"),
];
