//! Layout dimension constants for the text window.
//!
//! Values are pixels at the reference 2160x1080 display.

/// Gap between the window edge and the text area / button.
pub const MARGIN: f32 = 8.0;

/// Extra horizontal gap between the button and the right margin.
pub const SPACING: f32 = 12.0;

/// Font size of the displayed text.
pub const FONT_SIZE: f32 = 64.0;

/// Vertical distance between consecutive display lines.
pub const LINE_HEIGHT: f32 = 72.0;

/// Width of the action button.
pub const BUTTON_WIDTH: f32 = 290.0;

/// Height of the action button.
pub const BUTTON_HEIGHT: f32 = 160.0;

/// Space kept free on the right of the text for the scroll bar.
pub const TEXT_INSET: f32 = 20.0;

/// Action button label on desktop hosts.
pub const EXIT_LABEL: &str = "Exit";

/// Action button label on embedded devices.
pub const REBOOT_LABEL: &str = "Reboot";
