//! Static profile content shown on the home, about and companies pages.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub header: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Company {
    /// Anchor id on the companies page, filled into the companies link view.
    pub slug: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub tag: &'static str,
    pub from: &'static str,
    pub till: &'static str,
    pub website: Option<&'static str>,
    pub is_featured: bool,
    pub color: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
    pub social: Vec<SocialLink>,
}

/// One entry of the "My Passions" list.
#[derive(Debug, Clone, Serialize)]
pub struct Passion {
    pub title: &'static str,
    pub comment: &'static str,
}

/// Text of the about page.
#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub who_i_am: &'static str,
    pub statement: &'static str,
    pub passions: Vec<Passion>,
}

/// A headed group of skills inside a tab.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub header: &'static str,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillTab {
    pub title: &'static str,
    pub color: &'static str,
    pub groups: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub handle: &'static str,
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub skills: Vec<&'static str>,
    pub social: Vec<SocialLink>,
    pub companies: Vec<Company>,
    pub about: About,
    pub skillsets: Vec<SkillTab>,
}

impl Profile {
    /// The site owner's profile.
    pub fn load() -> Self {
        Self {
            handle: "iamevaristus",
            name: "Evaristus Adimonyemma",
            headline: "Entrepreneur, CEO, and Software Engineer",
            tagline: "with love for tech, music and basketball",
            skills: vec![
                "JavaScript", "Music", "React", "Piano", "TypeScript", "Basketball", "Flutter",
                "Java", "SQL",
            ],
            social: social_links(),
            companies: vec![Company {
                slug: "serchservice",
                name: "Serchservice Inc.",
                position: "CEO & Founder",
                tag: "Service, simplified",
                from: "15th August, 2022",
                till: "Present",
                website: Some("https://www.serchservice.com"),
                is_featured: true,
                color: "#050404",
                description: "Serchservice is a platform revolutionizing how users tackle \
                    unplanned disruptions. It connects users to vetted artisans for quick \
                    solutions, offers video-guided DIY support, and enables referral-based \
                    sharing of trusted providers, ensuring reliability and convenience.",
                logo: "https://chxpalpeslofqzeulcjr.supabase.co/storage/v1/object/public/serch/logo/AppLogo.png",
                social: company_links(),
            }],
            about: about(),
            skillsets: skillsets(),
        }
    }

    /// Companies listed under "Featured Companies" on the home page.
    pub fn featured_companies(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter().filter(|c| c.is_featured)
    }
}

fn about() -> About {
    About {
        who_i_am: "Hi, I’m Evaristus Adimonyemma, a CEO, entrepreneur, software engineer, \
            and music enthusiast who thrives on creating and inspiring. Whether I’m leading a \
            team, designing scalable software solutions, or conducting a choir, I bring passion \
            and dedication to everything I do, and inspire growth in every project I undertake.",
        statement: "In everything, I do what I must to build and create things that the \
            audience can relate to.",
        passions: vec![
            Passion {
                title: "Building Scalable Products",
                comment: "I specialize in crafting software solutions that solve real-world \
                    problems while prioritizing efficiency and scalability",
            },
            Passion {
                title: "Music composition, arrangement and conduction",
                comment: "Writing, arranging, and conducting for choirs and orchestras is my \
                    creative outlet. Music allows me to blend structure with artistic freedom, \
                    much like engineering.",
            },
            Passion {
                title: "Basketball",
                comment: "When I’m not coding or composing, you’ll find me on the court. \
                    Basketball teaches me teamwork, strategy, and focus, skills I carry into \
                    my professional life.",
            },
        ],
    }
}

fn group(header: &'static str, items: &[&'static str]) -> SkillGroup {
    SkillGroup {
        header,
        items: items.to_vec(),
    }
}

fn skillsets() -> Vec<SkillTab> {
    vec![
        SkillTab {
            title: "Programming Skills",
            color: "#002DA9FF",
            groups: vec![
                group(
                    "Languages",
                    &[
                        "JavaScript", "Java", "Dart", "Python", "HTML", "CSS", "TypeScript",
                        "Kotlin", "SQL",
                    ],
                ),
                group(
                    "Frameworks & Libraries",
                    &[
                        "ReactJS", "Flutter", "Node.js", "Express.js", "Spring Boot", "Redux",
                        "Jest", "Tailwind CSS",
                    ],
                ),
                group(
                    "Tools & Platforms",
                    &[
                        "Git", "GitHub", "Docker", "Kubernetes", "Firebase", "Supabase",
                        "PostgreSQL", "MySQL", "MongoDB", "Google Cloud", "AWS", "Azure",
                    ],
                ),
            ],
        },
        SkillTab {
            title: "Music Skills",
            color: "#1F00A9FF",
            groups: vec![
                group(
                    "Composing & Arranging",
                    &["Choir Arrangements", "Orchestral Compositions", "Film Scoring"],
                ),
                group("Instruments", &["Piano", "Violin", "Guitar", "Drums"]),
                group(
                    "Conducting",
                    &["Choir Conducting", "Orchestra Conducting", "Band Conducting"],
                ),
            ],
        },
        SkillTab {
            title: "Soft Skills",
            color: "#0038A9FF",
            groups: vec![
                group("Leadership", &["Team Leadership", "Project Management", "Mentorship"]),
                group(
                    "Communication",
                    &["Public Speaking", "Technical Writing", "Conflict Resolution"],
                ),
                group(
                    "Creativity & Problem Solving",
                    &["Innovative Thinking", "Critical Analysis", "Design Thinking"],
                ),
            ],
        },
        SkillTab {
            title: "Interests",
            color: "#1400A9FF",
            groups: vec![
                group("Sports", &["Basketball", "Table Tennis", "Chess"]),
                group("Entertainment", &["Movies", "TV Shows"]),
                group(
                    "Technology",
                    &["AI & Machine Learning", "Blockchain", "IoT (Internet of Things)"],
                ),
                group("Personal Growth", &["Reading", "Writing Blogs", "Traveling"]),
            ],
        },
    ]
}

fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            header: "LinkedIn",
            icon: "ion:logo-linkedin",
            path: "https://www.linkedin.com/in/iamevaristus",
        },
        SocialLink {
            header: "Instagram",
            icon: "basil:instagram-solid",
            path: "https://www.instagram.com/iamevaristus",
        },
        SocialLink {
            header: "X",
            icon: "line-md:twitter-x",
            path: "https://www.x.com/iamevaristus",
        },
        SocialLink {
            header: "YouTube",
            icon: "line-md:youtube-filled",
            path: "https://www.youtube.com/@iamevaristus",
        },
        SocialLink {
            header: "TikTok",
            icon: "line-md:tiktok",
            path: "https://www.tiktok.com/@iamevaristus",
        },
    ]
}

fn company_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            header: "LinkedIn",
            icon: "ion:logo-linkedin",
            path: "https://www.linkedin.com/company/serchservice",
        },
        SocialLink {
            header: "Instagram",
            icon: "basil:instagram-solid",
            path: "https://www.instagram.com/serchservice",
        },
        SocialLink {
            header: "X",
            icon: "line-md:twitter-x",
            path: "https://www.x.com/serchservice",
        },
        SocialLink {
            header: "YouTube",
            icon: "line-md:youtube-filled",
            path: "https://www.youtube.com/@serchservice",
        },
        SocialLink {
            header: "TikTok",
            icon: "line-md:tiktok",
            path: "https://www.tiktok.com/@serchservice",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_content() {
        let profile = Profile::load();
        assert_eq!(profile.social.len(), 5);
        assert_eq!(profile.featured_companies().count(), 1);
        assert!(profile.social.iter().all(|s| s.path.starts_with("https://")));
    }

    #[test]
    fn test_about_passions() {
        let about = Profile::load().about;
        assert!(about.who_i_am.starts_with("Hi, I’m Evaristus Adimonyemma"));
        let titles: Vec<&str> = about.passions.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "Building Scalable Products",
                "Music composition, arrangement and conduction",
                "Basketball",
            ]
        );
    }

    #[test]
    fn test_skillset_tabs() {
        let tabs = Profile::load().skillsets;
        let titles: Vec<&str> = tabs.iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Programming Skills", "Music Skills", "Soft Skills", "Interests"]);
        assert!(tabs.iter().all(|t| !t.groups.is_empty()));

        let languages = &tabs[0].groups[0];
        assert_eq!(languages.header, "Languages");
        assert_eq!(languages.items.len(), 9);
    }
}
