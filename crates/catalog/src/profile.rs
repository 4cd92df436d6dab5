//! Owner profile shown on the home, about and contact pages.

use std::sync::OnceLock;

use shared::domain::{ContactInfo, Profile, ProfileEntry, Skill, SkillLevel};

#[derive(Debug, Clone)]
pub struct ProfileContent {
    pub profile: Profile,
    pub about_intro: String,
    pub hero_technologies: Vec<Skill>,
    pub technologies: Vec<Skill>,
    pub languages: Vec<Skill>,
    pub expertise: Vec<String>,
    pub education: Vec<ProfileEntry>,
    pub experience: Vec<ProfileEntry>,
    pub certifications: Vec<String>,
}

pub fn content() -> &'static ProfileContent {
    static CONTENT: OnceLock<ProfileContent> = OnceLock::new();
    CONTENT.get_or_init(build)
}

fn skills(entries: &[(&str, SkillLevel)]) -> Vec<Skill> {
    entries
        .iter()
        .map(|(name, level)| Skill {
            name: name.to_string(),
            level: *level,
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn build() -> ProfileContent {
    use SkillLevel::{Expert, Fluent, Intermediate, Native};

    ProfileContent {
        profile: Profile {
            name: "Jule Ethan E. Fontanilla".to_string(),
            headline: "Full-Stack Web Developer".to_string(),
            summary: "Information Technology graduate specializing in web development with expertise in JavaScript, PHP, MySQL, and HTML/CSS, skilled in building scalable full-stack applications and troubleshooting technical issues.".to_string(),
            contact: ContactInfo {
                email: "juleethan@gmail.com".to_string(),
                phone: "+639193694589".to_string(),
                location: "Agoo, La Union".to_string(),
                github_url: "https://github.com/ithereforedontknow".to_string(),
            },
        },
        about_intro: "Information Technology graduate specializing in web development with expertise in JavaScript, PHP, MySQL, and HTML/CSS.".to_string(),
        hero_technologies: skills(&[
            ("React", Intermediate),
            ("JavaScript", Intermediate),
            ("PHP", Intermediate),
            ("MySQL", Intermediate),
            ("HTML/CSS", Expert),
        ]),
        technologies: skills(&[
            ("HTML", Expert),
            ("CSS", Expert),
            ("JavaScript", Intermediate),
            ("PHP", Intermediate),
            ("MySQL", Intermediate),
            ("React", Intermediate),
        ]),
        languages: skills(&[("English", Fluent), ("Tagalog", Native)]),
        expertise: strings(&[
            "Web Development",
            "Database Management",
            "Hardware Troubleshooting",
            "Technical Support",
            "Full-Stack Development",
            "Problem Solving",
        ]),
        education: vec![ProfileEntry {
            title: "Bachelor of Science in Information Technology".to_string(),
            subtitle: "Saint Louis College".to_string(),
            location: "La Union, Philippines".to_string(),
            date: "2021 - 2025".to_string(),
            description: Some("Specialized in web development with focus on full-stack applications, database management, and software engineering principles.".to_string()),
            items: strings(&[
                "Graduated with honors",
                "Capstone project: Online Vehicle Management System",
                "Active member of IT student organization",
            ]),
            tags: strings(&["Web Development", "Database Management", "Software Engineering"]),
        }],
        experience: vec![ProfileEntry {
            title: "Intern".to_string(),
            subtitle: "COMELEC - Agoo".to_string(),
            location: "Agoo, La Union".to_string(),
            date: "Feb 2025 - May 2025".to_string(),
            description: None,
            items: strings(&[
                "Created spreadsheets for data management using Microsoft Excel",
                "Performed hardware troubleshooting and repairs",
                "Managed data entry and document processing",
                "Assisted visitors and provided technical support",
            ]),
            tags: strings(&["Data Management", "Technical Support", "Hardware Troubleshooting"]),
        }],
        certifications: strings(&[
            "Certificate of Participation in the 'La Union Cybersecurity Conference X Chapter Activation'",
            "Certificate of Participation in the Personality Development Seminar",
            "Certificate of Participation in the Team Building Workshop",
            "Certificate of Participation in the Seminar Workshop in Office Productivity Tools",
            "Certificate of Participation in the Anti – Sexual Harassment Seminar",
        ]),
    }
}
