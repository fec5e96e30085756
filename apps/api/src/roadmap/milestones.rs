//! Static career-preparation milestone script, keyed by 1-based semester
//! number. The tasks ramp from orientation in semester 1 to job offers and
//! graduation in semester 8.

const SEMESTER_1: &[&str] = &[
    "Attend college orientation and academic advising",
    "Join 1-2 clubs related to your interests",
    "Set up your LinkedIn profile",
    "Explore career options through informational interviews",
];

const SEMESTER_2: &[&str] = &[
    "Build a personal portfolio website or GitHub profile",
    "Attend career fairs to learn about opportunities",
    "Complete a beginner-level online course or certification",
];

const SEMESTER_3: &[&str] = &[
    "Apply for summer internships or research positions",
    "Develop a personal project to showcase your skills",
    "Network with upperclassmen in your field",
];

const SEMESTER_4: &[&str] = &[
    "Complete your first internship or research project",
    "Update your resume and portfolio with summer experience",
    "Attend technical workshops or bootcamps",
];

const SEMESTER_5: &[&str] = &[
    "Take on leadership roles in clubs or organizations",
    "Apply for competitive internships at target companies",
    "Contribute to open-source projects",
];

const SEMESTER_6: &[&str] = &[
    "Complete a significant technical project or capstone",
    "Prepare for technical interviews (LeetCode, etc.)",
    "Attend company recruiting events",
];

const SEMESTER_7: &[&str] = &[
    "Begin full-time job search and interview prep",
    "Network with alumni in your target industry",
    "Prepare your final portfolio and demo reel",
];

const SEMESTER_8: &[&str] = &[
    "Secure full-time job offers or grad school admission",
    "Complete capstone project and graduate",
    "Transition planning and relocation if needed",
];

const FALLBACK: &str = "Focus on academic excellence and skill development";

/// Milestones for a 1-based semester number. Numbers outside 1-8 get a
/// single generic milestone rather than an error.
pub fn milestones_for(semester_number: usize) -> Vec<String> {
    let set = match semester_number {
        1 => SEMESTER_1,
        2 => SEMESTER_2,
        3 => SEMESTER_3,
        4 => SEMESTER_4,
        5 => SEMESTER_5,
        6 => SEMESTER_6,
        7 => SEMESTER_7,
        8 => SEMESTER_8,
        _ => return vec![FALLBACK.to_string()],
    };
    set.iter().map(|m| m.to_string()).collect()
}
