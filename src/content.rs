pub const OWNER_NAME: &str = "Nilaksh Aggarwal";
pub const EMAIL: &str = "nilakshaggarwal1407@gmail.com";
pub const PHONE: &str = "+91 9518007106";
pub const PHONE_LINK: &str = "tel:+919518007106";
pub const LOCATION: &str = "Mohali, Punjab, India";
pub const LINKEDIN_URL: &str = "https://in.linkedin.com/in/nilaksh-aggarwal-537435205";
pub const WHATSAPP_URL: &str = "https://wa.me/919518007106";

pub const HERO_ROLES: &[&str] = &[
    "Software Engineer",
    ".NET Core Developer",
    "React.js Developer",
    "Full Stack Developer",
    "Problem Solver",
];

pub const HERO_BLURB: &str = "I have 2+ years of experience in software development, specializing in .NET Core, JavaScript, and React Native. I'm passionate about creating innovative solutions and breaking through every barrier with my problem-solving attitude.";

pub struct NavLink {
    pub name: &'static str,
    pub section: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

/// Section anchors in page order.
pub const SECTIONS: &[&str] = &[
    "hero",
    "about",
    "skills",
    "experience",
    "projects",
    "education",
    "achievements",
    "contact",
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", section: "hero" },
    NavLink { name: "About", section: "about" },
    NavLink { name: "Skills", section: "skills" },
    NavLink { name: "Experience", section: "experience" },
    NavLink { name: "Projects", section: "projects" },
    NavLink { name: "Education", section: "education" },
    NavLink { name: "Achievements", section: "achievements" },
    NavLink { name: "Contact", section: "contact" },
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I have 2+ years of experience in software development and specialize in the areas of .NET Core, JavaScript, and React Native. My professional knowledge and problem-solving attitude help me to break through every barrier.",
    "I would like to work in a place where I can improve my knowledge and contribute to meaningful projects. I have developed applications for Legal Firms, Fleet Management, EOS, Political Campaign management, and Project Management Tools.",
    "Currently working at Ginilytics IT Solution as a Software Engineer, where I use industry-leading tools such as Git and CI/CD pipelines to streamline development and ensure high-quality outcomes.",
];

pub const STRENGTHS: &[&str] = &[
    "Always ready for change",
    "Decision making quality",
    "Dedication to work",
    "Keeping a friendly environment among everyone",
];

pub const HOBBIES: &[&str] = &["Cricket", "Listening Music", "Chess"];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { number: "2+", label: "Years Experience", description: "Professional web development" },
    Stat { number: "3+", label: "Projects Completed", description: "Across various domains" },
    Stat { number: "1st", label: "Prize Winner", description: "Technical Quiz Competition" },
    Stat { number: "100%", label: "Dedication", description: "To quality and excellence" },
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Backend Technologies",
        skills: &[
            Skill { name: ".NET Core", level: 90 },
            Skill { name: "C#", level: 85 },
            Skill { name: "MVC", level: 80 },
            Skill { name: "Entity Framework", level: 85 },
            Skill { name: "Dapper", level: 75 },
        ],
    },
    SkillCategory {
        title: "Frontend Technologies",
        skills: &[
            Skill { name: "React.js", level: 85 },
            Skill { name: "React Native", level: 80 },
            Skill { name: "Next.js", level: 75 },
            Skill { name: "JavaScript", level: 90 },
            Skill { name: "TypeScript", level: 70 },
        ],
    },
    SkillCategory {
        title: "Database & Tools",
        skills: &[
            Skill { name: "SQL", level: 85 },
            Skill { name: "Git", level: 90 },
            Skill { name: "Visual Studio", level: 85 },
            Skill { name: "VS Code", level: 90 },
            Skill { name: "CI/CD", level: 75 },
        ],
    },
];

pub const OTHER_TECHNOLOGIES: &[&str] = &[
    "RESTful APIs",
    "Microservices",
    "Agile/Scrum",
    "Third-party Integrations",
    "Google Ads API",
    "Facebook Marketing API",
    "Bandwidth API",
    "Authorize.net",
    "GoHighLevel",
    "Inflatable Office",
    "Twilio",
    "Infobip",
    "Stripe",
    "Cross-platform Development",
    "Performance Optimization",
];

pub struct Job {
    pub company: &'static str,
    pub location: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCE: Job = Job {
    company: "Ginilytics IT Solution Pvt. Limited",
    location: "Mohali",
    position: "Software Engineer",
    duration: "January 2023 – Present",
    description: "I currently work at Ginilytics IT Solution as a Software Engineer, where I use industry-leading tools such as Git and CI/CD pipelines to streamline development and ensure high-quality outcomes. My role involves crafting custom solutions that are precisely aligned with our clients' unique needs.",
    responsibilities: &[
        "Develop features laid out in Sprint planning sessions",
        "Update project status to Project Manager and Tech Lead",
        "Estimate time requirements for task delivery",
        "Work independently with direct client communication",
        "Deploy applications to staging and production environments",
        "Lead end-to-end development of complex applications",
        "Handle core integrations and system design",
        "Guide development teams to deliver robust, scalable solutions",
    ],
    technologies: &[
        ".NET Core",
        "React.js",
        "Next.js",
        "React Native",
        "JavaScript",
        "SQL",
        "Git",
        "CI/CD",
    ],
};

pub const EXPERIENCE_STATS: &[Stat] = &[
    Stat { number: "2+", label: "Years Experience", description: "" },
    Stat { number: "3+", label: "Projects Delivered", description: "" },
    Stat { number: "3", label: "Major Applications", description: "" },
    Stat { number: "100%", label: "Client Satisfaction", description: "" },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub responsibilities: &'static [&'static str],
    pub category: &'static str,
    pub status: &'static str,
    pub year: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Metric Hub",
        description: "A mobile marketing analytics app where users connect platforms like Google Ads, Meta Ads, Analytics, and GoHighLevel to track KPIs such as ad spend, revenue, clicks, and impressions in one unified dashboard.",
        long_description: "Metric Hub consolidates marketing data from multiple platforms into a single, comprehensive dashboard. Built with React Native and .NET Core, it provides real-time insights and analytics for marketing professionals.",
        technologies: &[
            "React Native",
            ".NET Core",
            "Google Ads API",
            "Facebook Marketing API",
            "GoHighLevel API",
            "Inflatable Office API",
            "Stripe",
        ],
        features: &[
            "Multi-platform integration",
            "Real-time KPI tracking",
            "Unified analytics dashboard",
            "Custom reporting tools",
            "Mobile-first design",
            "Data visualization charts",
        ],
        responsibilities: &[
            "Led end-to-end development",
            "Handled core integrations and system design",
            "Guided development team",
            "Delivered robust, scalable solution",
        ],
        category: "Analytics",
        status: "Completed",
        year: "2025",
    },
    Project {
        title: "Nexus",
        description: "A political campaign management application for US political candidates to register, import contact lists, manage them by tags, send bulk messages, and conduct surveys via SMS and MMS.",
        long_description: "Nexus is a comprehensive political campaign management platform that enables politicians to effectively manage their campaigns through contact management, bulk messaging, and survey capabilities.",
        technologies: &["Next.js", ".NET Core", "Bandwidth API", "Authorize.net"],
        features: &[
            "Contact list import and management",
            "Tag-based contact organization",
            "Bulk SMS/MMS messaging",
            "Survey creation and management",
            "Campaign analytics dashboard",
            "Payment processing integration",
        ],
        responsibilities: &[
            "Independent development and client communication",
            "Requirements analysis and implementation",
            "Deployment to staging and production environments",
        ],
        category: "Political",
        status: "Completed",
        year: "2024",
    },
    Project {
        title: "Avita Transportation",
        description: "A transportation automation solution for a medical clinic that manages transport facilities for elderly patients. The solution automates pick-up and drop-off scheduling, replacing manual spreadsheet management with a robust, scalable system.",
        long_description: "This comprehensive solution transformed how the medical clinic manages transportation services. Previously managed manually using spreadsheets and phone calls, the new system provides automated scheduling, real-time tracking, and efficient resource management.",
        technologies: &[".NET Core", "React.js", "SQL Server", "Entity Framework"],
        features: &[
            "Automated scheduling system",
            "Real-time vehicle tracking",
            "Patient management dashboard",
            "Driver assignment optimization",
            "Reporting and analytics",
        ],
        responsibilities: &[
            "Develop features laid out in Sprint planning",
            "Update project status to Project Manager",
            "Estimate delivery timelines for tasks",
        ],
        category: "Healthcare",
        status: "Completed",
        year: "2023",
    },
];

pub struct Degree {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub in_progress: bool,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

impl Degree {
    pub fn status(&self) -> &'static str {
        if self.in_progress {
            "In Progress"
        } else {
            "Completed"
        }
    }
}

pub const EDUCATION: &[Degree] = &[
    Degree {
        degree: "Master of Computer Applications (MCA)",
        institution: "Amity University Online",
        location: "Noida, Uttar Pradesh, India",
        duration: "July 2024 – July 2026",
        in_progress: true,
        description: "Pursuing advanced studies in computer applications with focus on modern software development practices and emerging technologies.",
        highlights: &["Blockchain", "Software Engineering", "Database Management", "Web Technologies"],
    },
    Degree {
        degree: "Bachelor of Computer Applications (BCA)",
        institution: "Tilak Raj Chadha Institute of Management & Technology",
        location: "Yamuna Nagar, Haryana, India",
        duration: "July 2020 – June 2023",
        in_progress: false,
        description: "Comprehensive undergraduate program covering fundamental and advanced concepts in computer science and applications.",
        highlights: &["Programming Fundamentals", "Data Structures", "Database Systems", "Software Development"],
    },
    Degree {
        degree: "Higher Secondary (12th)",
        institution: "SD Public School",
        location: "Jagadhari, Haryana, India",
        duration: "April 2019 - April 2020",
        in_progress: false,
        description: "Completed higher secondary education with focus on science and mathematics.",
        highlights: &["Mathematics", "Accounts", "Business Studies", "Economics"],
    },
    Degree {
        degree: "Senior Secondary (10th)",
        institution: "New Happy Public School",
        location: "Bilaspur, Haryana, India",
        duration: "April 2017 - April 2018",
        in_progress: false,
        description: "Foundation education with strong academic performance.",
        highlights: &["Core Subjects", "Mathematics", "Science", "English"],
    },
];

pub struct Achievement {
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
    pub year: &'static str,
    pub category: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "1st Prize in Technical Quiz",
        organization: "Tilak Raj Chadha Institute of Management and Technology",
        description: "Won first place in the technical quiz competition, demonstrating strong knowledge in computer science fundamentals and problem-solving skills.",
        year: "2022",
        category: "Academic Excellence",
    },
    Achievement {
        title: "0 to 100 Web Development Course",
        organization: "by Harkirat Singh",
        description: "Successfully completed comprehensive full-stack web development training covering modern technologies, best practices, and industry standards.",
        year: "2024",
        category: "Professional Development",
    },
    Achievement {
        title: "Software Engineer at Ginilytics",
        organization: "Ginilytics IT Solution Pvt. Limited",
        description: "Joined as a Software Engineer, delivering client solutions across healthcare, politics, and analytics.",
        year: "2023",
        category: "Career Milestone",
    },
    Achievement {
        title: "Multi-Domain Project Leadership",
        organization: "Various Client Projects",
        description: "Led development of applications across healthcare, political campaign management, and marketing analytics domains.",
        year: "2024-2025",
        category: "Leadership",
    },
];

pub const GROWTH_STATEMENT: &str = "I believe in continuous learning and improvement. Currently pursuing my MCA degree while working professionally, I'm always looking for new challenges and opportunities to expand my technical expertise and contribute to innovative projects. My goal is to become a technology leader who can drive digital transformation and create meaningful impact through software solutions.";

pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Email",
        value: EMAIL,
        link: "mailto:nilakshaggarwal1407@gmail.com",
    },
    ContactChannel {
        title: "Phone",
        value: PHONE,
        link: PHONE_LINK,
    },
    ContactChannel {
        title: "Location",
        value: LOCATION,
        link: "#",
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "LinkedIn", url: LINKEDIN_URL },
    SocialLink { name: "WhatsApp", url: WHATSAPP_URL },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_section_ids_unique() {
        let ids: HashSet<_> = SECTIONS.iter().collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn test_nav_links_resolve() {
        for link in NAV_LINKS {
            assert!(
                SECTIONS.contains(&link.section),
                "nav link {} points nowhere",
                link.name
            );
        }
        assert_eq!(NAV_LINKS[1].href(), "#about");
    }

    #[test]
    fn test_skill_levels_in_range() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!(skill.level <= 100, "{} is over 100", skill.name);
            }
        }
    }

    #[test]
    fn test_education_status() {
        let in_progress = EDUCATION.iter().filter(|d| d.in_progress).count();
        assert_eq!(in_progress, 1);
        assert_eq!(EDUCATION[0].status(), "In Progress");
        assert_eq!(EDUCATION[1].status(), "Completed");
    }

    #[test]
    fn test_contact_channels() {
        assert!(CONTACT_CHANNELS[0].link.starts_with("mailto:"));
        assert!(CONTACT_CHANNELS[1].link.starts_with("tel:"));
        assert!(HERO_ROLES.iter().all(|r| !r.is_empty()));
    }
}
