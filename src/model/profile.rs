//! Profile content model.
//!
//! The whole site's content lives in one `Profile` value: the hero
//! headline and skill categories on the home page, the about-page card
//! strip, and the categorized project cards. A built-in profile ships
//! with the binary; `--content <file.toml>` replaces it wholesale.

use crate::model::card::Card;
use serde::Deserialize;

/// One skill category on the home page (title plus a list of items).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    /// Category heading, e.g. "Frontend".
    pub title: String,
    /// Items listed under the heading.
    pub items: Vec<String>,
}

/// A named group of project cards on the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectCategory {
    /// Category heading, e.g. "Python".
    pub name: String,
    /// Cards shown in this category's strip, in display order.
    pub cards: Vec<Card>,
}

/// Root content value for the whole application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Display name of the profile owner.
    pub owner: String,

    /// One-line self description under the hero headline.
    pub tagline: String,

    /// Repository URL surfaced in the navigation bar.
    #[serde(default)]
    pub repo_url: Option<String>,

    /// Skill categories on the home page.
    #[serde(default)]
    pub skills: Vec<SkillCategory>,

    /// Cards for the about-page strip, in display order.
    #[serde(default)]
    pub about: Vec<Card>,

    /// Project categories, in display order.
    #[serde(default)]
    pub projects: Vec<ProjectCategory>,
}

impl Profile {
    /// The content compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            owner: "Ritonis".to_string(),
            tagline: "a full-stack web developer.".to_string(),
            repo_url: Some("https://github.com/ritonis/profile-v3".to_string()),
            skills: vec![
                SkillCategory {
                    title: "Frontend".to_string(),
                    items: strings(&["React", "NextJS", "Chakra-UI", "TailwindCSS"]),
                },
                SkillCategory {
                    title: "Backend".to_string(),
                    items: strings(&["Django", "Flask", "FastAPI"]),
                },
                SkillCategory {
                    title: "Design".to_string(),
                    items: strings(&["Figma", "Lunacy"]),
                },
                SkillCategory {
                    title: "Server".to_string(),
                    items: strings(&["Nginx", "Ubuntu Server", "Arch Linux", "Docker", "PM2"]),
                },
            ],
            about: vec![
                Card::new(
                    "Introduction",
                    "I'm living in South Korea, learning web development skills. \
                     Currently, I mainly write my apps in Python & TypeScript (or JavaScript).",
                ),
                Card::new(
                    "My Skill",
                    "Mainly using Python & TypeScript (or JavaScript). Since I fell in love \
                     with frontend frameworks, I use TypeScript a lot.",
                ),
            ],
            projects: vec![
                ProjectCategory {
                    name: "Python".to_string(),
                    cards: vec![
                        Card::new(
                            "Nyanlang",
                            "Esoteric programming language made by me. Highly inspired by the \
                             Brainfuck programming language.",
                        )
                        .with_subtitle("Esoteric Programming Language")
                        .with_source("https://github.com/nyanlang/nyanlang")
                        .with_demo("https://nyanlang.org"),
                        Card::new(
                            "DodgeGame",
                            "Dodge game made for a school festival. The leaderboard API backend \
                             is included in this project repository.",
                        )
                        .with_subtitle("Simple DodgeGame & Backend")
                        .with_source("https://github.com/ritonis/dodgegame"),
                        Card::new(
                            "Simple Calculator",
                            "Simple calculator GUI written in Python and the Pygame library.",
                        )
                        .with_subtitle("Simple Calculator using Pygame")
                        .with_source("https://github.com/ritonis/simple-calculator"),
                        Card::new(
                            "StDict Word DB",
                            "Word database project using the Standard Korean Dictionary OpenAPI.",
                        )
                        .with_subtitle("Word Database Project")
                        .with_source("https://github.com/ritonis/stdict_word_db"),
                    ],
                },
                ProjectCategory {
                    name: "JS/TS".to_string(),
                    cards: vec![Card::new(
                        "Nyanlang VSCode",
                        "Nyanlang extension for Visual Studio Code. Supports file icons and \
                         syntax highlighting; a language server is planned.",
                    )
                    .with_subtitle("VSCode Extension for Nyanlang")
                    .with_source("https://github.com/nyanlang/nyanlang-vscode-ext")
                    .with_demo("https://nyanlang.org")],
                },
                ProjectCategory {
                    name: "Web".to_string(),
                    cards: vec![
                        Card::new(
                            "Nyanlang Web",
                            "Website for the Nyanlang project. Only the frontend lives in this \
                             repository; the playground backend is private.",
                        )
                        .with_subtitle("Web Documentation & Playground for Nyanlang")
                        .with_source("https://github.com/nyanlang/nyanlang-web")
                        .with_demo("https://nyanlang.org"),
                        Card::new(
                            "DodgeGame Leaderboard",
                            "Leaderboard web page for the DodgeGame project, reading game data \
                             from the API backend and displaying it in the frontend.",
                        )
                        .with_subtitle("Leaderboard Frontend for DodgeGame")
                        .with_source("https://github.com/ritonis/dodge-game-leaderboard"),
                        Card::new(
                            "SchoolTime",
                            "Web app for Korean school timetables & cafeteria menus. Written in \
                             Django; currently a dead project.",
                        )
                        .with_subtitle("Web App for Korean School Timetable & Cafeteria Menu")
                        .with_source("https://github.com/ritonis/schooltime"),
                        Card::new(
                            "Profile v2",
                            "Profile & portfolio web page, version 2. Written in NextJS and \
                             Chakra-UI with the App Directory feature.",
                        )
                        .with_subtitle("Profile & Portfolio Version 2")
                        .with_source("https://github.com/ritonis/portfolio-v2")
                        .with_demo("https://v2.ritonis.me"),
                        Card::new(
                            "Profile v3",
                            "Current version of the profile & portfolio page. Written in React, \
                             Chakra-UI, and React Router.",
                        )
                        .with_subtitle("Current version of Profile & Portfolio")
                        .with_source("https://github.com/ritonis/profile-v3")
                        .with_demo("https://ritonis.me"),
                    ],
                },
            ],
        }
    }

    /// Cards for the project category at `index`, or an empty slice when
    /// out of bounds.
    pub fn project_cards(&self, index: usize) -> &[Card] {
        self.projects.get(index).map(|c| c.cards.as_slice()).unwrap_or(&[])
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
