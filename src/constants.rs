// DOM wiring constants: element ids, selectors and page copy.
// Physics and timing tuning lives in `core::constants`.

// Scroll content
pub const CONTENT_ID: &str = "content";

// Background canvas and cursor
pub const BG_CANVAS_ID: &str = "bg-canvas";
pub const CURSOR_ID: &str = "cursor";
pub const FOLLOWER_ID: &str = "cursor-follower";
pub const COORDS_ID: &str = "coords";

// Hero
pub const HERO_TITLE_ID: &str = "hero-title";
pub const HERO_SUBTITLE_ID: &str = "hero-subtitle";
pub const BOOT_TEXT_ID: &str = "boot-text";
pub const ENTER_BTN_ID: &str = "enter-btn";
pub const CUBE_SELECTOR: &str = ".cube-container";
pub const HERO_TITLE_TEXT: &str = "ADITH";
pub const HERO_SUBTITLE_TEXT: &str = "CREATIVE TECHNOLOGIST";

// Skills
pub const SKILLS_CONTAINER_ID: &str = "skills-container";
pub const SKILLS_CANVAS_ID: &str = "skills-canvas";
pub const SOLAR_SYSTEM_ID: &str = "solar-system";
pub const SKILL_NODE_CLASS: &str = "skill-node";
pub const SKILL_NODE_HOVER_SCALE: f32 = 1.2;
pub const ORBIT_PATH_CLASS: &str = "absolute border border-neon-blue/20 rounded-full";
pub const PLANET_CLASS: &str = "absolute w-10 h-10 bg-black border border-neon-blue rounded-full flex items-center justify-center text-[8px] font-mono text-neon-blue shadow-[0_0_10px_rgba(0,243,255,0.5)] cursor-pointer hover:bg-neon-blue hover:text-black transition-colors z-10 text-center leading-tight";

// Projects
pub const PROJECTS_SECTION_ID: &str = "projects";
pub const CAROUSEL_ID: &str = "project-carousel";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const PROJECT_ID_ATTR: &str = "data-project";
pub const MODAL_ID: &str = "project-modal";
pub const MODAL_BODY_ID: &str = "modal-body";
pub const MODAL_CONTENT_ID: &str = "modal-content";
pub const MODAL_CLOSE_ID: &str = "modal-close";

// Experience timeline
pub const EXPERIENCE_ID: &str = "experience";
pub const TIMELINE_PROGRESS_ID: &str = "timeline-progress";
pub const TIMELINE_ITEM_SELECTOR: &str = ".timeline-item";
pub const TIMELINE_ITEM_STAGGER_SEC: f32 = 0.3;
pub const TIMELINE_HIDDEN_CLASSES: [&str; 2] = ["opacity-0", "translate-y-10"];

// Reveal targets
pub const REVEAL_SELECTOR: &str = ".project-card, .section-title";

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_LINK_SELECTOR: &str = "nav a";
pub const SECTION_SELECTOR: &str = "section";
pub const NAV_ACTIVE_CLASS: &str = "text-neon-cyan";
pub const NAV_IDLE_CLASS: &str = "text-gray-300";
pub const NAVBAR_SOLID_CLASSES: [&str; 2] = ["bg-dark-bg/90", "shadow-lg"];

// Contact
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const EMITTER_SELECTOR: &str = ".particle-emitter";
pub const TRANSMITTING_HTML: &str =
    "<span class=\"relative z-10\">TRANSMITTING...</span><div class=\"absolute inset-0 bg-neon-purple w-full\"></div>";
pub const SENT_HTML: &str =
    "<span class=\"relative z-10\">TRANSMISSION SENT</span><div class=\"absolute inset-0 bg-green-500 w-full\"></div>";
pub const BURST_RGB: [u8; 3] = [176, 38, 255]; // neon purple
pub const SPARK_RGB: [u8; 3] = [0, 243, 255]; // neon blue

// Generic classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const FADED_CLASS: &str = "opacity-0";
pub const MODAL_SMALL_CLASS: &str = "scale-95";
pub const MODAL_FULL_CLASS: &str = "scale-100";

// Wheel deltas in line/page mode are converted to pixels
pub const WHEEL_LINE_PX: f32 = 16.0;
