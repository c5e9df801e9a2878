// SPDX-License-Identifier: PMPL-1.0-or-later

//! Authored dimension and scenario content.
//!
//! Each entry is a compile-time static row; the catalog turns them into
//! descriptors once at startup.

use crate::types::{DimensionKey, EverydayContext};

pub(crate) struct DimensionEntry {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub column_key: DimensionKey,
    pub description: &'static str,
    pub example: &'static str,
    pub low_pole: &'static str,
    pub high_pole: &'static str,
    pub contexts: &'static [(&'static str, &'static str, &'static str)],
}

impl DimensionEntry {
    pub fn everyday_contexts(&self) -> Vec<EverydayContext> {
        self.contexts
            .iter()
            .map(|&(context, low, high)| EverydayContext { context, low, high })
            .collect()
    }
}

// ─── Dimensions, in display order ───────────────────────────────────

pub(crate) const DIMENSIONS: &[DimensionEntry] = &[
    DimensionEntry {
        name: "Power Distance",
        icon: "📏",
        color: "#4B9CD3",
        column_key: DimensionKey::PowerDistance,
        description: "This dimension expresses the degree to which the less powerful members of a society accept and expect that power is distributed unequally.",
        example: "In high power distance cultures, employees may hesitate to contradict their bosses directly, leading to top-down decision-making.",
        low_pole: "Low Power Distance",
        high_pole: "High Power Distance",
        contexts: &[
            (
                "Workplace",
                "Employees feel comfortable challenging their boss's ideas in meetings.",
                "Employees wait for explicit instructions from managers before taking action.",
            ),
            (
                "Family",
                "Parents encourage children to participate in family decisions.",
                "Children are expected to obey parents without question.",
            ),
            (
                "Education",
                "Students address professors by first name and freely contribute to discussions.",
                "Students stand when the professor enters and only speak when called upon.",
            ),
        ],
    },
    DimensionEntry {
        name: "Individualism vs Collectivism",
        icon: "👥",
        color: "#FF6B6B",
        column_key: DimensionKey::Individualism,
        description: "This dimension deals with the degree of interdependence a society maintains among its members. Individualistic cultures value independence and self-reliance, while collectivist cultures emphasize group cohesion.",
        example: "In individualistic societies, personal achievements are celebrated, whereas in collectivist cultures, group harmony is paramount.",
        low_pole: "Collectivism",
        high_pole: "Individualism",
        contexts: &[
            (
                "Housing",
                "Multiple generations live together in the same household.",
                "Young adults move out as soon as they can afford their own place.",
            ),
            (
                "Career",
                "Staying loyal to one company for entire career, even if better opportunities exist elsewhere.",
                "Frequently changing jobs to advance personal career goals.",
            ),
            (
                "Success",
                "Group harmony and collective accomplishments are valued above personal success.",
                "Personal achievements and individual recognition are celebrated.",
            ),
        ],
    },
    DimensionEntry {
        name: "Masculinity vs Femininity",
        icon: "⚖️",
        color: "#88D498",
        column_key: DimensionKey::Masculinity,
        description: "This dimension contrasts a preference for achievement, assertiveness, and material success (masculinity) with a preference for cooperation, modesty, and quality of life (femininity).",
        example: "In masculine cultures, competition and assertiveness are rewarded, while in feminine cultures, quality of life and cooperation are prioritized.",
        low_pole: "Femininity",
        high_pole: "Masculinity",
        contexts: &[
            (
                "Work-Life Balance",
                "Leaving work on time to spend time with family is respected and encouraged.",
                "Working overtime to get ahead is admired and expected.",
            ),
            (
                "School",
                "Being average is acceptable; cooperation and social skills are emphasized.",
                "Being the best student is extremely important; competition is intense.",
            ),
            (
                "Conflict Resolution",
                "Conflicts are resolved through compromise and negotiation.",
                "Conflicts are resolved through competition and assertiveness.",
            ),
        ],
    },
    DimensionEntry {
        name: "Uncertainty Avoidance",
        icon: "🎲",
        color: "#FFD166",
        column_key: DimensionKey::UncertaintyAvoidance,
        description: "The extent to which members of a culture feel threatened by ambiguous or unknown situations, leading to the establishment of strict rules and policies.",
        example: "Cultures with high uncertainty avoidance may rely heavily on established procedures to manage the unpredictability of life.",
        low_pole: "Low Uncertainty Avoidance",
        high_pole: "High Uncertainty Avoidance",
        contexts: &[
            (
                "Planning",
                "Spontaneous meetups with flexible or no specific plans.",
                "Detailed agendas and schedules for social gatherings.",
            ),
            (
                "Rules",
                "Figuring things out by trial and error is expected and enjoyed.",
                "Detailed instructions for using everyday products.",
            ),
            (
                "Careers",
                "Being comfortable with changing careers or working in emerging fields.",
                "Choosing stable careers with clear progression paths.",
            ),
        ],
    },
    DimensionEntry {
        name: "Long-Term Orientation",
        icon: "⏳",
        color: "#A64AC9",
        column_key: DimensionKey::LongTermOrientation,
        description: "This reflects a society’s time horizon. Cultures with a long-term orientation plan for the future and value perseverance, whereas short-term oriented cultures emphasize traditions and the current social hierarchy.",
        example: "Long-term oriented cultures invest in education and long-term planning, whereas short-term oriented cultures often focus on immediate results.",
        low_pole: "Short-Term Orientation",
        high_pole: "Long-Term Orientation",
        contexts: &[
            (
                "Financial",
                "Spending money to enjoy the present moment.",
                "Saving a significant portion of income for future needs.",
            ),
            (
                "Education",
                "Focusing on subjects that have immediate practical applications.",
                "Studying for years to develop skills that will be useful long-term.",
            ),
            (
                "Business",
                "Focusing on quarterly profits and short-term results.",
                "Companies investing in long-term research with no immediate returns.",
            ),
        ],
    },
    DimensionEntry {
        name: "Indulgence vs Restraint",
        icon: "🎭",
        color: "#F25F5C",
        column_key: DimensionKey::Indulgence,
        description: "This dimension measures the extent to which societies allow relatively free gratification of basic human drives versus suppressing them through strict social norms.",
        example: "Indulgent societies encourage enjoying life and leisure, while restrained cultures tend to enforce strict codes of behavior.",
        low_pole: "Restraint",
        high_pole: "Indulgence",
        contexts: &[
            (
                "Leisure",
                "Leisure time is limited and governed by strict social norms.",
                "Regular social gatherings, parties, and recreational activities.",
            ),
            (
                "Food",
                "Eating viewed primarily as necessary nutrition rather than pleasure.",
                "Eating out frequently and enjoying diverse culinary experiences.",
            ),
            (
                "Expression",
                "Controlling emotional expressions and maintaining a reserved demeanor.",
                "Freely expressing emotions and opinions in public.",
            ),
        ],
    },
];

// ─── Scenarios, in display order ────────────────────────────────────

pub(crate) const SCENARIOS: &[(&str, &[&str])] = &[
    (
        "Negotiating a Business Deal",
        &[
            "Clearly outline expectations.",
            "Emphasize long-term benefits.",
            "Build trust through personal rapport.",
            "Clarify ambiguous points early.",
            "Provide detailed background information.",
            "Focus on mutual benefits.",
            "Encourage open discussion.",
            "Use visual aids to support points.",
            "Confirm decisions in writing.",
            "Ask clarifying questions.",
        ],
    ),
    (
        "Team Collaboration Meeting",
        &[
            "Encourage equal participation.",
            "Rotate leadership roles.",
            "Set clear meeting objectives.",
            "Acknowledge every input.",
            "Summarize key points frequently.",
            "Use breakout sessions.",
            "Foster an inclusive environment.",
            "Rotate speaking opportunities.",
            "Provide positive feedback.",
            "Keep the tone collaborative.",
        ],
    ),
    (
        "Performance Review Discussion",
        &[
            "Highlight individual achievements.",
            "Provide constructive criticism.",
            "Discuss future career goals.",
            "Offer actionable feedback.",
            "Recognize efforts and improvements.",
            "Encourage self-assessment.",
            "Set clear performance targets.",
            "Incorporate peer reviews.",
            "Emphasize professional growth.",
            "Celebrate successes.",
        ],
    ),
];
