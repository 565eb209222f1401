use crate::config::SchoolConfig;

// static copy for the home and about pages
//
// text may contain {school}, {location} and {founded} placeholders, filled in
// from the site config by fill()

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoreValue {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub qualification: &'static str,
    pub emoji: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
}

pub fn fill(template: &str, school: &SchoolConfig) -> String {
    template
        .replace("{school}", &school.name)
        .replace("{location}", &school.location)
        .replace("{founded}", &school.established.to_string())
}

// milestones alternate sides down the timeline, starting on the left
pub fn timeline_side(index: usize) -> Side {
    if index % 2 == 0 { Side::Left } else { Side::Right }
}

pub const TRUST_PILLS: &[&str] = &[
    "CBSE Affiliated",
    "1:8 Teacher Ratio",
    "Secure CCTV Campus",
    "Montessori Inspired",
];

pub const KEYWORDS: &[&str] = &[
    "Best preschool in {location}",
    "Luxury preschool Mumbai",
    "Montessori preschool {location}",
    "CBSE preschool near me",
];

pub const MENU_TAGS: &[&str] = &["Montessori", "CCTV Safe", "1:8 Ratio"];

pub const HERO_SUBTITLE: &str = "A thoughtfully crafted early learning environment in {location}, \
designed to nurture curiosity, confidence and joyful growth while building strong academic \
and emotional foundations.";

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "15+", label: "Years of Excellence", icon: Some("🏛️") },
    Stat { value: "2,400+", label: "Happy Alumni", icon: Some("🌱") },
    Stat { value: "98%", label: "Parent Satisfaction", icon: Some("⭐") },
    Stat { value: "Top 3", label: "In {location}", icon: Some("🏆") },
];

pub const CORE_VALUES: &[CoreValue] = &[
    CoreValue {
        icon: "🌱",
        title: "Child-Led Learning",
        description: "We follow the child's curiosity, not a rigid schedule. Every child's learning journey is unique and we honour that.",
    },
    CoreValue {
        icon: "🤝",
        title: "Trust & Transparency",
        description: "Parents are partners. We share daily updates, maintain open communication and welcome you into our classroom anytime.",
    },
    CoreValue {
        icon: "🧠",
        title: "Holistic Development",
        description: "Cognitive, emotional, social and physical growth. We nurture the whole child, not just academic readiness.",
    },
    CoreValue {
        icon: "🎨",
        title: "Creative Freedom",
        description: "Art, music, drama and imaginative play are not extras, they are the curriculum. Creativity is intelligence having fun.",
    },
    CoreValue {
        icon: "🛡️",
        title: "Safety Above All",
        description: "CCTV-monitored campus, verified staff, secure entry and a zero-tolerance policy on any form of harm or humiliation.",
    },
    CoreValue {
        icon: "🌍",
        title: "Inclusive Community",
        description: "Every background, ability and learning style is celebrated. Diversity is our greatest strength and we teach children to cherish it.",
    },
];

pub const MISSION: &str = "To give every child a joyful, safe and stimulating first school, \
where curiosity is followed rather than corrected and every milestone is celebrated.";

pub const VISION: &str = "A generation of confident, kind and curious learners who carry \
the love of discovery they found at {school} into everything they do.";

pub const PHILOSOPHY_PILLS: &[&str] = &["Montessori", "Play-Based", "Reggio Inspired"];

pub const FOUNDER_QUOTE: &str = "I wanted to build a school I wished existed when I was a child.";

pub const FOUNDER_STORY: &[&str] = &[
    "After two decades in childhood education across Mumbai and Pune, our founder returned \
to {location} with one dream: to create a preschool that felt less like a classroom and more \
like a second home, warm, stimulating and deeply respectful of every child's pace.",
    "Every corner of {school} was designed with care, from the sensory gardens to the reading \
nooks, so that the space itself became a teacher. Today, over 2,400 children have called this \
place their first school.",
];

pub const FOUNDER_CREDENTIALS: &[&str] = &[
    "B.Ed, Mumbai University",
    "M.Ed in Early Childhood",
    "Montessori Certified (AMI)",
    "20+ Years Teaching",
];

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "'10",
        title: "The First Bell",
        description: "{school} opens its doors in {location} with 18 children, 2 teachers and one boundless dream.",
    },
    Milestone {
        year: "'13",
        title: "Montessori Certification",
        description: "Our full teaching team completed AMI Montessori certification, among the first preschools in {location} to do so.",
    },
    Milestone {
        year: "'16",
        title: "New Campus & Sensory Garden",
        description: "We moved to our purpose-built campus featuring a sensory garden designed for preschool-aged children.",
    },
    Milestone {
        year: "'19",
        title: "1,000 Alumni Milestone",
        description: "Our 1,000th graduate walked across the stage, many returning with their own children a decade later.",
    },
    Milestone {
        year: "'22",
        title: "CCTV & Smart Safety System",
        description: "Installed a complete 24/7 monitored security ecosystem, giving parents real-time peace of mind.",
    },
    Milestone {
        year: "'25",
        title: "{location}'s #1 Preschool",
        description: "Ranked the most trusted preschool in {location} by a third-party parent survey, with a 98% satisfaction rate.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Mr. Hitesh Patel",
        role: "Founder & Director",
        qualification: "M.Ed · AMI Montessori · 20+ years experience",
        emoji: "👩‍🏫",
    },
    TeamMember {
        name: "Ms. Ananya Kulkarni",
        role: "Head of Curriculum",
        qualification: "B.Ed, Pune University · Child Psychology Diploma",
        emoji: "📖",
    },
    TeamMember {
        name: "Mr. Rohan Desai",
        role: "Movement & Yoga",
        qualification: "Certified Children's Yoga Instructor · 8 years",
        emoji: "🧘",
    },
    TeamMember {
        name: "Ms. Shruti Patil",
        role: "Art & Music Lead",
        qualification: "Fine Arts, Sir J.J. School · Carnatic Music Graduate",
        emoji: "🎨",
    },
];

pub const TEAM_STATS: &[Stat] = &[
    Stat { value: "25", label: "Dedicated Staff", icon: None },
    Stat { value: "1:8", label: "Teacher–Child Ratio", icon: None },
    Stat { value: "40hrs", label: "Annual Training", icon: None },
    Stat { value: "100%", label: "Degree Holders", icon: None },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn placeholders_are_filled() {
        let config = SiteConfig::default();
        let text = fill(MILESTONES[0].description, &config.school);

        assert!(text.starts_with("My Little Steps Preschool opens its doors in Ambarnath"));
        assert!(!text.contains('{'));
        assert_eq!(fill("since {founded}", &config.school), "since 2010");
    }

    #[test]
    fn every_template_resolves() {
        let config = SiteConfig::default();
        let templates = MILESTONES
            .iter()
            .flat_map(|m| [m.title, m.description])
            .chain(HERO_STATS.iter().map(|s| s.label))
            .chain(FOUNDER_STORY.iter().copied())
            .chain(KEYWORDS.iter().copied())
            .chain([HERO_SUBTITLE, MISSION, VISION]);

        for t in templates {
            let filled = fill(t, &config.school);
            assert!(!filled.contains('{'), "unfilled placeholder in {t}");
        }
    }

    #[test]
    fn timeline_alternates() {
        let sides: Vec<_> = (0..4).map(timeline_side).collect();
        assert_eq!(sides, vec![Side::Left, Side::Right, Side::Left, Side::Right]);
    }

    #[test]
    fn six_core_values() {
        assert_eq!(CORE_VALUES.len(), 6);
    }
}
