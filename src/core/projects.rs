use crate::core::constants::{MODAL_CLOSE_SEC, MODAL_OPEN_DELAY_SEC};
use fnv::FnvHashMap;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
}

pub const PROJECTS: &[(&str, ProjectRecord)] = &[
    (
        "WeatherApp",
        ProjectRecord {
            title: "WeatherApp",
            description: "A futuristic weather dashboard that visualizes real-time data using holographic charts and particle effects.",
            tech: &["React", "OpenWeatherMap API", "Chart.js", "Anime.js"],
            features: &[
                "Real-time temperature tracking",
                "Interactive 3D globe",
                "Severe weather alerts",
                "Historical data analysis",
            ],
        },
    ),
    (
        "EduVision",
        ProjectRecord {
            title: "EduVision",
            description: "An AI-powered OCR platform that converts handwritten notes into digital text with high accuracy.",
            tech: &["Python", "TensorFlow", "Tesseract OCR", "Flask"],
            features: &[
                "Handwriting recognition",
                "Multi-language support",
                "Cloud storage integration",
                "Export to PDF/Word",
            ],
        },
    ),
    (
        "E-Commerce",
        ProjectRecord {
            title: "Exclusive E-commerce",
            description: "A premium shopping platform featuring 3D product previews and a seamless checkout experience.",
            tech: &["Next.js", "Three.js", "Stripe", "Tailwind CSS"],
            features: &[
                "3D Product Viewer",
                "AR Try-on",
                "Secure Payment Gateway",
                "User Personalization",
            ],
        },
    ),
    (
        "DataBreach",
        ProjectRecord {
            title: "Data Breach Checker",
            description: "A security tool that allows users to verify if their email addresses have been compromised in known data breaches.",
            tech: &["Node.js", "HaveIBeenPwned API", "Express", "Security"],
            features: &[
                "Instant Breach Check",
                "Password Strength Analyzer",
                "Security Tips",
                "Dark Web Monitoring",
            ],
        },
    ),
    (
        "SkillSync",
        ProjectRecord {
            title: "SkillSync",
            description: "A collaborative learning platform connecting developers for peer-to-peer mentorship and skill exchange.",
            tech: &["Vue.js", "Firebase", "WebRTC", "Socket.io"],
            features: &[
                "Real-time Code Pairing",
                "Video Chat",
                "Skill Matching Algorithm",
                "Community Forums",
            ],
        },
    ),
];

/// Id → record lookup over a static table.
pub struct ProjectTable {
    by_id: FnvHashMap<&'static str, &'static ProjectRecord>,
}

impl ProjectTable {
    pub fn new(entries: &'static [(&'static str, ProjectRecord)]) -> Self {
        let by_id = entries.iter().map(|(id, rec)| (*id, rec)).collect();
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'static ProjectRecord> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for ProjectTable {
    fn default() -> Self {
        Self::new(PROJECTS)
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Modal body markup for a project.
pub fn render_modal_body(rec: &ProjectRecord) -> String {
    let tech = rec
        .tech
        .iter()
        .map(|t| format!("<span class=\"tech-chip\">{}</span>", escape_html(t)))
        .collect::<String>();
    let features = rec
        .features
        .iter()
        .map(|f| format!("<li>{}</li>", escape_html(f)))
        .collect::<String>();
    format!(
        "<h2 class=\"modal-title\">{}</h2>\
         <p class=\"modal-desc\">{}</p>\
         <div class=\"modal-block\"><h3>Tech Stack</h3><div class=\"tech-list\">{}</div></div>\
         <div class=\"modal-block\"><h3>Key Features</h3><ul class=\"feature-list\">{}</ul></div>\
         <div class=\"modal-actions\"><button class=\"launch-btn\">LAUNCH PROJECT</button></div>",
        escape_html(rec.title),
        escape_html(rec.description),
        tech,
        features
    )
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalState {
    Closed,
    Opening { id: String, remaining_sec: f32 },
    Open { id: String },
    Closing { id: String, remaining_sec: f32 },
}

/// DOM work the view has to carry out, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalCommand {
    Mount { html: String },
    Unhide,
    FadeIn,
    FadeOut,
    Hide,
}

pub type ModalCommands = SmallVec<[ModalCommand; 2]>;

pub struct ModalController {
    table: ProjectTable,
    state: ModalState,
}

impl ModalController {
    pub fn new(table: ProjectTable) -> Self {
        Self {
            table,
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    /// Unknown ids leave the state untouched and return no commands.
    pub fn open(&mut self, id: &str) -> ModalCommands {
        let Some(rec) = self.table.get(id) else {
            log::warn!("[modal] unknown project '{}'", id);
            return SmallVec::new();
        };
        log::info!("[modal] open {}", id);
        self.state = ModalState::Opening {
            id: id.to_string(),
            remaining_sec: MODAL_OPEN_DELAY_SEC,
        };
        smallvec![
            ModalCommand::Mount {
                html: render_modal_body(rec),
            },
            ModalCommand::Unhide,
        ]
    }

    pub fn close(&mut self) -> ModalCommands {
        let id = match &self.state {
            ModalState::Opening { id, .. } | ModalState::Open { id } => id.clone(),
            ModalState::Closed | ModalState::Closing { .. } => return SmallVec::new(),
        };
        log::info!("[modal] close {}", id);
        self.state = ModalState::Closing {
            id,
            remaining_sec: MODAL_CLOSE_SEC,
        };
        smallvec![ModalCommand::FadeOut]
    }

    pub fn tick(&mut self, dt_sec: f32) -> ModalCommands {
        let dt_sec = dt_sec.max(0.0);
        match &mut self.state {
            ModalState::Opening { id, remaining_sec } => {
                *remaining_sec -= dt_sec;
                if *remaining_sec <= 0.0 {
                    let id = std::mem::take(id);
                    self.state = ModalState::Open { id };
                    return smallvec![ModalCommand::FadeIn];
                }
            }
            ModalState::Closing { remaining_sec, .. } => {
                *remaining_sec -= dt_sec;
                if *remaining_sec <= 0.0 {
                    self.state = ModalState::Closed;
                    return smallvec![ModalCommand::Hide];
                }
            }
            ModalState::Closed | ModalState::Open { .. } => {}
        }
        SmallVec::new()
    }
}
