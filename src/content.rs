//! Static page content and mock data. Nothing here is ever written.

pub struct LeaderboardEntry {
    pub name: &'static str,
    pub class: &'static str,
    pub score: u32,
    pub avatar: &'static str,
}

pub const FOREST_LEADERBOARD: [LeaderboardEntry; 5] = [
    LeaderboardEntry { name: "Sarah Green", class: "Class 5", score: 850, avatar: "🌟" },
    LeaderboardEntry { name: "Alex Forest", class: "Class 4", score: 720, avatar: "🌲" },
    LeaderboardEntry { name: "Emma Nature", class: "Class 3", score: 680, avatar: "🌱" },
    LeaderboardEntry { name: "Max Earth", class: "Class 5", score: 650, avatar: "🌍" },
    LeaderboardEntry { name: "Lily Bloom", class: "Class 2", score: 540, avatar: "🌸" },
];

/// Title + description + a highlight stat, used by the feature and value grids.
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub stat: &'static str,
}

pub const FEATURES: [Card; 4] = [
    Card {
        icon: "🎮",
        title: "Gamified Learning",
        description: "Turn environmental education into an engaging adventure with points, levels, and achievements.",
        stat: "50+ Mini Games",
    },
    Card {
        icon: "📚",
        title: "Interactive Modules",
        description: "Comprehensive lessons covering climate change, sustainability, and eco-friendly practices.",
        stat: "200+ Lessons",
    },
    Card {
        icon: "📈",
        title: "Progress Tracking",
        description: "Monitor your learning journey with detailed analytics and personalized insights.",
        stat: "Real-time Analytics",
    },
    Card {
        icon: "🎁",
        title: "Rewards System",
        description: "Earn eco-badges, certificates, and real-world rewards for your environmental achievements.",
        stat: "100+ Rewards",
    },
];

pub const HERO_HIGHLIGHTS: [Card; 3] = [
    Card { icon: "🏆", title: "Gamified", description: "Turn education into adventure with points, levels, and eco-achievements.", stat: "" },
    Card { icon: "🎯", title: "Track Impact", description: "Monitor your environmental impact with detailed analytics and insights.", stat: "" },
    Card { icon: "⭐", title: "Rewards", description: "Unlock eco-badges, certificates, and real-world environmental rewards.", stat: "" },
];

/// (name, percent complete)
pub const SAMPLE_PROGRESS: [(&str, u32); 4] = [
    ("Tree Planter", 85),
    ("Energy Saver", 72),
    ("Recycling Pro", 94),
    ("Climate Champion", 68),
];

pub const VALUES: [Card; 4] = [
    Card { icon: "🌍", title: "Environmental Impact", description: "We believe education is the key to creating lasting environmental change.", stat: "" },
    Card { icon: "💚", title: "Passionate Learning", description: "Making environmental education engaging and accessible to everyone.", stat: "" },
    Card { icon: "💡", title: "Innovation", description: "Using cutting-edge technology to revolutionize how we learn about sustainability.", stat: "" },
    Card { icon: "🤝", title: "Community", description: "Building a global community of environmentally conscious learners.", stat: "" },
];

/// (value, label)
pub const ABOUT_STATS: [(&str, &str); 4] = [
    ("50K+", "Students Educated"),
    ("200+", "Courses Available"),
    ("95%", "Completion Rate"),
    ("40+", "Countries Reached"),
];

pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel { icon: "✉️", title: "Email Us", description: "Get in touch with our team", value: "hello@ecolearn.com", href: "mailto:hello@ecolearn.com" },
    ContactChannel { icon: "💬", title: "Live Chat", description: "Chat with our support team", value: "Available 24/7", href: "#" },
    ContactChannel { icon: "📞", title: "Call Us", description: "Speak directly with our team", value: "+1 (555) 123-4567", href: "tel:+15551234567" },
    ContactChannel { icon: "📍", title: "Visit Us", description: "Our headquarters", value: "San Francisco, CA", href: "#" },
];

/// (question, answer)
pub const FAQS: [(&str, &str); 3] = [
    ("How does the gamification work?", "Our platform uses points, badges, and leaderboards to make learning engaging and fun."),
    ("Is EcoLearn suitable for all ages?", "Yes! We offer content tailored for different age groups, from elementary to adult learners."),
    ("Do you offer institutional licenses?", "Absolutely! We provide special pricing for schools, universities, and organizations."),
];

// ---------------- Student dashboard -----------------
pub struct StudentProfile {
    pub name: &'static str,
    pub institution: &'static str,
    pub total_points: u32,
    pub today_points: u32,
    pub courses_completed: u32,
    pub games_finished: u32,
    pub institution_position: u32,
    pub global_position: u32,
    pub level: u32,
    pub next_level_points: u32,
    /// (bar percent, caption) for the institution and global ranking cards.
    pub institution_standing: (u32, &'static str),
    pub global_standing: (u32, &'static str),
}

pub const STUDENT: StudentProfile = StudentProfile {
    name: "Alex Johnson",
    institution: "Green Valley High School",
    total_points: 2847,
    today_points: 85,
    courses_completed: 8,
    games_finished: 15,
    institution_position: 3,
    global_position: 247,
    level: 12,
    next_level_points: 153,
    institution_standing: (75, "Top 10% of your school"),
    global_standing: (45, "Top 25% globally"),
};

pub struct RankedStudent {
    pub rank: u32,
    pub name: &'static str,
    pub points: u32,
    pub avatar: &'static str,
    pub is_current_user: bool,
}

pub const INSTITUTION_LEADERBOARD: [RankedStudent; 5] = [
    RankedStudent { rank: 1, name: "Sarah Chen", points: 3245, avatar: "👩", is_current_user: false },
    RankedStudent { rank: 2, name: "Mike Rodriguez", points: 2956, avatar: "👨", is_current_user: false },
    RankedStudent { rank: 3, name: "Alex Johnson", points: 2847, avatar: "🧑", is_current_user: true },
    RankedStudent { rank: 4, name: "Emma Wilson", points: 2634, avatar: "👩", is_current_user: false },
    RankedStudent { rank: 5, name: "David Kim", points: 2489, avatar: "👨", is_current_user: false },
];

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub points: u32,
}

pub const RECENT_ACHIEVEMENTS: [Achievement; 3] = [
    Achievement { title: "Tree Planter", description: "Completed Forest Conservation module", icon: "🌳", points: 50 },
    Achievement { title: "Ocean Guardian", description: "Finished Marine Biology course", icon: "🌊", points: 75 },
    Achievement { title: "Energy Saver", description: "Scored 100% in Renewable Energy quiz", icon: "⚡", points: 25 },
];

// ---------------- Teacher dashboard -----------------
pub struct TeacherProfile {
    pub name: &'static str,
    pub institution: &'static str,
    pub students_count: u32,
    pub classes_count: u32,
    pub institution_rank: u32,
}

pub const TEACHER: TeacherProfile = TeacherProfile {
    name: "Dr. Sarah Miller",
    institution: "Green Valley High School",
    students_count: 120,
    classes_count: 5,
    institution_rank: 2,
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StudentStatus {
    Active,
    NeedsAttention,
}

pub struct ClassStudent {
    pub name: &'static str,
    pub points: u32,
    pub level: u32,
    pub progress: u32,
    pub status: StudentStatus,
}

pub const MY_STUDENTS: [ClassStudent; 5] = [
    ClassStudent { name: "Alex Johnson", points: 2847, level: 12, progress: 85, status: StudentStatus::Active },
    ClassStudent { name: "Emma Wilson", points: 2634, level: 11, progress: 78, status: StudentStatus::Active },
    ClassStudent { name: "David Kim", points: 2489, level: 10, progress: 92, status: StudentStatus::Active },
    ClassStudent { name: "Sofia Martinez", points: 2156, level: 9, progress: 65, status: StudentStatus::NeedsAttention },
    ClassStudent { name: "Ryan Chen", points: 1934, level: 8, progress: 71, status: StudentStatus::Active },
];

pub struct RankedSchool {
    pub rank: u32,
    pub school: &'static str,
    pub avg_points: u32,
    pub students: u32,
    pub is_current_school: bool,
}

pub const SCHOOL_RANKING: [RankedSchool; 5] = [
    RankedSchool { rank: 1, school: "Eco Academy", avg_points: 3245, students: 150, is_current_school: false },
    RankedSchool { rank: 2, school: "Green Valley High School", avg_points: 2956, students: 200, is_current_school: true },
    RankedSchool { rank: 3, school: "Nature's Way School", avg_points: 2847, students: 175, is_current_school: false },
    RankedSchool { rank: 4, school: "Earth Science Institute", avg_points: 2634, students: 190, is_current_school: false },
    RankedSchool { rank: 5, school: "Sustainable Learning Center", avg_points: 2489, students: 140, is_current_school: false },
];

pub struct GlobalStudent {
    pub rank: u32,
    pub name: &'static str,
    pub school: &'static str,
    pub points: u32,
    pub is_my_student: bool,
}

pub const TOP_GLOBAL_STUDENTS: [GlobalStudent; 5] = [
    GlobalStudent { rank: 1, name: "Maya Patel", school: "Eco Academy", points: 4567, is_my_student: false },
    GlobalStudent { rank: 2, name: "James Liu", school: "Nature's Way School", points: 4234, is_my_student: false },
    GlobalStudent { rank: 3, name: "Zara Ahmed", school: "Earth Science Institute", points: 3987, is_my_student: false },
    GlobalStudent { rank: 4, name: "Carlos Rodriguez", school: "Sustainable Learning", points: 3845, is_my_student: false },
    GlobalStudent { rank: 5, name: "Alex Johnson", school: "Green Valley High", points: 3678, is_my_student: true },
];

// ---------------- Explore nature -----------------
pub struct Identification {
    pub common_name: &'static str,
    pub species: &'static str,
    pub confidence: u32,
    pub family: &'static str,
    pub habitat: &'static str,
    pub conservation: &'static str,
    pub facts: [&'static str; 3],
}

pub const MOCK_IDENTIFICATION: Identification = Identification {
    common_name: "White Oak",
    species: "Quercus alba",
    confidence: 92,
    family: "Fagaceae",
    habitat: "Deciduous forests, parks",
    conservation: "Least Concern",
    facts: [
        "Can live over 300 years",
        "Produces acorns that feed wildlife",
        "Important for carbon sequestration",
    ],
};

/// (name, species, emoji)
pub const RECENT_DISCOVERIES: [(&str, &str, &str); 3] = [
    ("Red Maple", "Acer rubrum", "🍁"),
    ("Blue Jay", "Cyanocitta cristata", "🐦"),
    ("Sunflower", "Helianthus annuus", "🌻"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboards_are_sorted_best_first() {
        assert!(FOREST_LEADERBOARD.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(INSTITUTION_LEADERBOARD.windows(2).all(|w| w[0].points >= w[1].points));
        assert!(TOP_GLOBAL_STUDENTS.windows(2).all(|w| w[0].points >= w[1].points));
    }

    #[test]
    fn exactly_one_highlighted_row_per_table() {
        assert_eq!(INSTITUTION_LEADERBOARD.iter().filter(|s| s.is_current_user).count(), 1);
        assert_eq!(SCHOOL_RANKING.iter().filter(|s| s.is_current_school).count(), 1);
        assert_eq!(TOP_GLOBAL_STUDENTS.iter().filter(|s| s.is_my_student).count(), 1);
    }
}
