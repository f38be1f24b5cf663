// Shared scroll/physics tuning constants used by the pure core.

// Proxy scroll
pub const SCROLL_LERP: f32 = 0.1; // fraction of the remaining gap closed per frame
pub const SCROLL_SNAP_EPSILON: f32 = 0.1; // gap below which current snaps to target
pub const SKEW_INTENSITY: f32 = 0.15; // degrees of skewY per px of scroll velocity

// Particle field
pub const PARTICLE_COUNT: usize = 150;
pub const PARTICLE_RGB: [u8; 3] = [0, 243, 255]; // #00f3ff
pub const PARTICLE_MAX_RADIUS: f32 = 2.0;
pub const PARTICLE_SPEED_SPAN: f32 = 0.5; // velocity components drawn from [-span/2, span/2)
pub const REPEL_RADIUS: f32 = 150.0; // pointer repulsion radius (px)
pub const REPEL_DAMPING: f32 = 0.5; // scales the repulsion impulse
pub const CONNECTION_DIST: f32 = 100.0; // max distance for a connection line (px)
pub const CONNECTION_WIDTH: f32 = 0.5;

// Skill network
pub const NETWORK_NODE_SIZE: f32 = 100.0; // node box size; nodes bounce inside (bounds - size)
pub const NETWORK_LINK_DIST: f32 = 200.0;
pub const NETWORK_LINK_RGB: [u8; 3] = [168, 85, 247];
pub const NETWORK_LINK_ALPHA: f32 = 0.2;

// Solar system
pub const ORBIT_RADIUS_STEP: f32 = 40.0;
pub const ORBIT_BASE_PERIOD_SEC: f32 = 10.0;
pub const ORBIT_PERIOD_STEP_SEC: f32 = 2.0;
pub const ORBIT_HOVER_TIME_SCALE: f32 = 0.1; // global time scale while a planet is hovered
pub const ORBIT_HOVER_PLANET_SCALE: f32 = 2.0;
pub const ORBIT_HOVER_SCALE_SEC: f32 = 0.3;

// Scroll spy
pub const SPY_SECTION_LEAD: f32 = 1.0 / 3.0; // section becomes current this fraction of its height early
pub const NAVBAR_SOLID_OFFSET: f32 = 50.0;

// Triggers
pub const REVEAL_START_FRACTION: f32 = 0.8; // "top 80%": element top crosses 80% of the viewport
pub const REVEAL_DURATION_SEC: f32 = 1.0;
pub const SCRUB_SMOOTHING_SEC: f32 = 1.0;
pub const CARD_MAX_TILT_DEG: f32 = 45.0;

// Text scramble
pub const SCRAMBLE_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";
pub const SCRAMBLE_INTERVAL_SEC: f32 = 0.03;
pub const SCRAMBLE_STEPS_PER_CHAR: u32 = 3; // intervals per revealed character
pub const HERO_TITLE_DELAY_SEC: f32 = 0.5;

// Boot sequence
pub const BOOT_LINE_INTERVAL_SEC: f32 = 0.8;
pub const BOOT_REVEAL_DELAY_SEC: f32 = 0.5; // after the last line slot
pub const BOOT_REVEAL_DURATION_SEC: f32 = 1.0;
pub const BOOT_REVEAL_STAGGER_SEC: f32 = 0.3;
pub const BOOT_REVEAL_RISE_PX: f32 = 20.0;

// Hero intro
pub const HERO_TITLE_FADE_SEC: f32 = 0.1;
pub const HERO_CUBE_FADE_SEC: f32 = 1.0;
pub const HERO_CUBE_OVERLAP_SEC: f32 = 0.5; // cube fade starts this long before the title fade ends

// Modal
pub const MODAL_OPEN_DELAY_SEC: f32 = 0.01;
pub const MODAL_CLOSE_SEC: f32 = 0.3;

// Contact form
pub const TRANSMIT_SEC: f32 = 1.5;
pub const SENT_HOLD_SEC: f32 = 3.0;
pub const BURST_COUNT: usize = 30;
pub const BURST_SPREAD: f32 = 200.0;
pub const BURST_DURATION_SEC: f32 = 1.0;
pub const SPARK_SPREAD: f32 = 50.0;
pub const SPARK_DURATION_SEC: f32 = 0.5;

// Cursor
pub const CURSOR_TAU_SEC: f32 = 0.1;
pub const FOLLOWER_TAU_SEC: f32 = 0.3;
pub const CURSOR_HALF_SIZE: f32 = 8.0;
pub const FOLLOWER_HALF_SIZE: f32 = 20.0;
pub const COORDS_INTERVAL_SEC: f32 = 0.1;
