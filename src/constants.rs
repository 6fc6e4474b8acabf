/// Scene layout and styling for the canvas frontend.
///
/// World units match the animation core: the card sits at the origin facing
/// +Z and the camera starts 5 units in front of it.

// DOM
pub const CANVAS_ID: &str = "card-canvas";
pub const MESSAGE_TEXT_ID: &str = "card-text";

// Assets
pub const BACKGROUND_SRC: &str = "assets/paisaje.jpg";
pub const MESSAGE_SRC: &str = "assets/tarjeta.png";

// Card body (front face of a 5 x 3 x 0.05 box)
pub const CARD_HALF_WIDTH: f32 = 2.5;
pub const CARD_HALF_HEIGHT: f32 = 1.5;
pub const CARD_FRONT_Z: f32 = 0.025;

// Flap: triangle hinged along the top edge of the card
pub const FLAP_BASE_HALF_WIDTH: f32 = 2.5;
pub const FLAP_HEIGHT: f32 = 2.0;
pub const FLAP_HINGE: [f32; 3] = [0.0, 1.5, 0.025];

// Wax seal
pub const SEAL_RADIUS: f32 = 0.4;
pub const SEAL_CENTER: [f32; 3] = [-0.023, -0.3, 0.1];
pub const SEAL_SEGMENTS: usize = 29;

// Message paper (rounded rectangle floating in front of the card)
pub const PAPER_WIDTH: f32 = 4.0;
pub const PAPER_HEIGHT: f32 = 2.0;
pub const PAPER_CORNER_RADIUS: f32 = 0.3;
pub const PAPER_Z: f32 = 1.1;
pub const PAPER_CORNER_SEGMENTS: usize = 6;

// Particles
pub const PARTICLE_SIZE: f32 = 0.5; // world units, attenuated by distance
pub const PARTICLE_OPACITY: f32 = 0.1;
pub const PARTICLE_MIN_PX: f32 = 0.5;

// Background image is drawn slightly oversized so parallax never exposes an edge
pub const BACKGROUND_OVERSCAN: f32 = 1.02;

// Colors
pub const CLEAR_COLOR: &str = "#1a1020";
pub const CARD_COLOR: &str = "#ffc0cb";
pub const CARD_EDGE_COLOR: &str = "#e6a5b4";
pub const FLAP_COLOR: &str = "#f7b6c4";
pub const FLAP_EDGE_COLOR: &str = "#cc8899";
pub const SEAL_COLOR: &str = "#8b0000";
pub const SEAL_RIM_COLOR: &str = "#5e0000";
pub const PAPER_COLOR: &str = "#fffaf3";
pub const PARTICLE_CORE_COLOR: &str = "rgba(255, 215, 0, 1)";
pub const PARTICLE_GLOW_COLOR: &str = "rgba(255, 215, 0, 0.45)";

pub const FLAP_EDGE_WIDTH_PX: f64 = 2.0;
