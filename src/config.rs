
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Set at build time (`CONTACT_ENDPOINT=/api/contact trunk build`) to send the
/// contact form to a real backend instead of the simulated one.
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("CONTACT_ENDPOINT").filter(|path| !path.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    pub char_interval_ms: u32,
    pub line_pause_ms: u32,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            char_interval_ms: 50,
            line_pause_ms: 500,
        }
    }
}

// Terminal
pub const LATE_LINE_DELAY_MS: u32 = 5_000;
pub const TERMINAL_VIEW_MARGIN: &str = "-100px";

// Contact form
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2_000;
pub const SUCCESS_RESET_MS: u32 = 3_000;

// Navbar / hero
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
pub const FLOATING_ICON_COUNT: usize = 15;
pub const HERO_PARALLAX_SCROLL: (f64, f64) = (0.0, 500.0);
pub const HERO_PARALLAX_OFFSET: (f64, f64) = (0.0, 200.0);

// Manifesto marquee, in percent of its own width
pub const MARQUEE_TOP_SHIFT: (f64, f64) = (0.0, -20.0);
pub const MARQUEE_BOTTOM_SHIFT: (f64, f64) = (-20.0, 0.0);
