use askama_axum::Template;
use axum::response::{IntoResponse, Response};

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub link_label: &'static str,
}

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsPage {
    projects: Vec<Project>,
}

pub async fn projects() -> Response {
    ProjectsPage {
        projects: project_list(),
    }
    .into_response()
}

fn project_list() -> Vec<Project> {
    vec![
        Project {
            name: "LearnArena",
            description: "Take courses in computer programming, data science, and philosophy. \
                Earn a return on your investment in each course by placing highly in your class.",
            url: "https://learnarena.com/",
            link_label: "learnarena.com",
        },
        Project {
            name: "MW Website Design",
            description: "Website design & development company specializing in digital \
                marketing for resorts and hotels with a focus on simplicity.",
            url: "https://webdesign.mascolo.co/",
            link_label: "webdesign.mascolo.co",
        },
        Project {
            name: "AI Dungeon Master",
            description: "A web application that uses artificial intelligence to dynamically \
                generate encounters for a Dungeons & Dragons campaign.",
            url: "/articles/ai-dungeon-master-next13",
            link_label: "Read more",
        },
        Project {
            name: "Crossplay Photo Share",
            description: "React Native app that solves the perennial problem of sharing \
                high-resolution photos between iOS and Android devices.",
            url: "/articles/expo-crossplay-photo-share",
            link_label: "Read more",
        },
        Project {
            name: "More to come",
            description: "Working on compiling some more of my work here!",
            url: "#",
            link_label: "Stay tuned",
        },
    ]
}
