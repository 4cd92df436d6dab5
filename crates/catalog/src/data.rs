use shared::domain::{Project, ProjectDetail, ProjectId};

struct ProjectSeed {
    id: &'static str,
    title: &'static str,
    category: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    role: &'static str,
    stack: &'static str,
    year: &'static str,
    featured: bool,
}

struct DetailSeed {
    id: &'static str,
    title: &'static str,
    category: &'static str,
    description: &'static str,
    full_description: &'static str,
    year: &'static str,
    role: &'static str,
    technologies: &'static [&'static str],
    features: &'static [&'static str],
    challenges: &'static [&'static str],
    outcomes: &'static [&'static str],
    live_url: Option<&'static str>,
    github_url: Option<&'static str>,
    images: &'static [&'static str],
}

const PROJECTS: &[ProjectSeed] = &[
    ProjectSeed {
        id: "vehicle-management",
        title: "Online Vehicle Management for Universal Leaf Philippines, Inc.",
        category: "Capstone Project",
        description: "Led the full-stack development of an Online Vehicle Management System capstone project, delivering a functional web application for efficient vehicle logistics and data management.",
        technologies: &["HTML", "CSS", "JavaScript", "PHP", "MySQL"],
        role: "Lead Developer",
        stack: "Full-Stack",
        year: "2025",
        featured: true,
    },
    ProjectSeed {
        id: "dental-records",
        title: "Patient Dental Records Management System",
        category: "Web Application",
        description: "Led a project demonstrating advanced proficiency in full-stack web development with HTML, CSS, JavaScript, PHP, and MySQL to streamline patient data and treatment history.",
        technologies: &["HTML", "CSS", "JavaScript", "PHP", "MySQL"],
        role: "Lead Developer",
        stack: "Full-Stack",
        year: "2024",
        featured: false,
    },
    ProjectSeed {
        id: "spillthebeans",
        title: "SpillTheBeans - Social Media Web App",
        category: "React Application",
        description: "A project demonstrating advanced proficiency in full-stack web development with React, Tailwind CSS, and Appwrite (BaaS).",
        technologies: &["React", "Tailwind CSS", "JavaScript", "Appwrite"],
        role: "Full-Stack Developer",
        stack: "Full-Stack",
        year: "2025",
        featured: true,
    },
    ProjectSeed {
        id: "music.me",
        title: "music.me - Music Recommendation App",
        category: "React Application",
        description: "A music recommendation app built with React, Tailwind CSS, and JavaScript.",
        technologies: &["React", "Tailwind CSS", "JavaScript"],
        role: "Frontend Developer",
        stack: "Frontend",
        year: "2026",
        featured: true,
    },
];

const DETAILS: &[DetailSeed] = &[
    DetailSeed {
        id: "vehicle-management",
        title: "Online Vehicle Management for Universal Leaf Philippines, Inc.",
        category: "Capstone Project",
        description: "Led the full-stack development of an Online Vehicle Management System capstone project, delivering a functional web application for efficient vehicle logistics and data management.",
        full_description: "This capstone project involved designing and implementing a comprehensive vehicle management system for Universal Leaf Philippines, Inc. The system streamlines vehicle logistics, maintenance scheduling, fuel tracking, and driver assignment through an intuitive web interface. Built with modern web technologies, it features role-based access control, real-time tracking, and automated reporting capabilities.",
        year: "2025",
        role: "Lead Developer & Project Manager",
        technologies: &["HTML", "CSS", "JavaScript", "PHP", "MySQL"],
        features: &[
            "Real-time vehicle tracking and monitoring",
            "Automated maintenance scheduling and alerts",
            "Fuel consumption tracking and reporting",
            "Driver assignment and management system",
            "Role-based access control (Admin, Manager, Staff)",
            "Automated report generation (PDF/Excel)",
        ],
        challenges: &[
            "Integrating real-time GPS tracking with existing fleet systems",
            "Ensuring data security and user authentication",
            "Optimizing database queries for large datasets",
            "Creating responsive design for mobile field staff",
        ],
        outcomes: &[
            "Reduced vehicle downtime by 30% through preventive maintenance",
            "Improved fuel efficiency tracking by 25%",
            "Streamlined reporting process from days to hours",
            "Enhanced data accuracy and accessibility",
        ],
        live_url: None,
        github_url: None,
        images: &[
            "https://images.unsplash.com/photo-1611224923853-80b023f02d71?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
            "https://images.unsplash.com/photo-1551650975-87deedd944c3?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        ],
    },
    DetailSeed {
        id: "dental-records",
        title: "Patient Dental Records Management System",
        category: "Web Application",
        description: "Led a project demonstrating advanced proficiency in full-stack web development to streamline patient data and treatment history.",
        full_description: "A comprehensive dental clinic management system designed to digitize patient records, appointment scheduling, and treatment history. The application features patient portals, dentist dashboards, and administrative controls to optimize clinic operations and improve patient care coordination.",
        year: "2024",
        role: "Full-Stack Developer",
        technologies: &["HTML", "CSS", "JavaScript", "PHP", "MySQL"],
        features: &[
            "Digital patient records with medical history",
            "Appointment scheduling and calendar management",
            "Treatment planning and progress tracking",
            "Billing and invoicing system",
            "Patient portal for appointment requests",
            "Dentist dashboard for patient management",
        ],
        challenges: &[
            "Ensuring HIPAA-compliant data security",
            "Creating intuitive UI for non-technical medical staff",
            "Integrating calendar and scheduling features",
            "Managing complex patient-dentist relationships",
        ],
        outcomes: &[
            "Reduced paper-based record keeping by 95%",
            "Improved appointment efficiency by 40%",
            "Enhanced patient satisfaction through portal access",
            "Streamlined billing and payment processes",
        ],
        live_url: None,
        github_url: None,
        images: &[
            "https://images.unsplash.com/photo-1588776814546-1ffcf47267a5?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
            "https://images.unsplash.com/photo-1551601651-2a8555f1a136?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        ],
    },
    DetailSeed {
        id: "spillthebeans",
        title: "SpillTheBeans - Social Media Web App",
        category: "Full-Stack React Application",
        description: "A project demonstrating advanced proficiency in full-stack web development with React, Tailwind CSS, and Appwrite (BaaS).",
        full_description: "A modern social media platform for coffee enthusiasts to share reviews, discover cafes, and connect with fellow coffee lovers. Built with React for the frontend and Appwrite as a backend-as-a-service solution, featuring real-time updates, user authentication, and interactive cafe reviews.",
        year: "2024",
        role: "Full-Stack Developer",
        technologies: &["React", "Tailwind CSS", "JavaScript", "Appwrite", "Node.js"],
        features: &[
            "User authentication and profile management",
            "Cafe discovery and review system",
            "Real-time notifications and updates",
            "Interactive rating and commenting system",
            "Mobile-responsive design",
            "Image upload and management",
        ],
        challenges: &[
            "Implementing real-time features with Appwrite",
            "Creating responsive design for mobile users",
            "Managing user-generated content and reviews",
            "Optimizing performance with React hooks",
        ],
        outcomes: &[
            "Successfully deployed full-stack application",
            "Implemented secure user authentication",
            "Created engaging user experience with animations",
            "Demonstrated proficiency in modern web technologies",
        ],
        live_url: None,
        github_url: None,
        images: &[
            "https://images.unsplash.com/photo-1498804103079-a6351b050096?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
            "https://images.unsplash.com/photo-1514432324607-a09d9b4aefdd?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        ],
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(crate) fn projects() -> Vec<Project> {
    PROJECTS
        .iter()
        .map(|seed| Project {
            id: ProjectId::from(seed.id),
            title: seed.title.to_string(),
            category: seed.category.to_string(),
            description: seed.description.to_string(),
            technologies: owned(seed.technologies),
            role: seed.role.to_string(),
            stack: seed.stack.to_string(),
            year: seed.year.to_string(),
            featured: seed.featured,
        })
        .collect()
}

pub(crate) fn details() -> Vec<ProjectDetail> {
    DETAILS
        .iter()
        .map(|seed| ProjectDetail {
            id: ProjectId::from(seed.id),
            title: seed.title.to_string(),
            category: seed.category.to_string(),
            description: seed.description.to_string(),
            full_description: seed.full_description.to_string(),
            year: seed.year.to_string(),
            role: seed.role.to_string(),
            technologies: owned(seed.technologies),
            features: owned(seed.features),
            challenges: owned(seed.challenges),
            outcomes: owned(seed.outcomes),
            live_url: seed.live_url.map(str::to_string),
            github_url: seed.github_url.map(str::to_string),
            images: owned(seed.images),
        })
        .collect()
}
