// Wheel geometry. Widths are degrees and must sum to 360.
pub const WHEEL_WIDTHS: [f64; 6] = [30.0, 40.0, 50.0, 60.0, 80.0, 100.0];
pub const WHEEL_COLORS: [&str; 6] = [
    "#0077b6", // Navy Blue
    "#00b4d8", // Bright Turquoise
    "#48cae4", // Light Blue
    "#90e0ef", // Aqua Blue
    "#80ed99", // Mint Green
    "#38b000", // Vibrant Green
];
pub const LIGHT_TEXT_COLOR: &str = "#FFFFFF";
pub const DARK_TEXT_COLOR: &str = "#005A9E";
pub const WHEEL_RADIUS: f64 = 150.0;
pub const FULL_CIRCLE: f64 = 360.0;

// Spin animation
pub const SPIN_DURATION_MS: u32 = 5000;
pub const SUBMIT_DISPLAY_MS: u32 = 2000;
pub const MIN_REVOLUTIONS: f64 = 5.0;
pub const EXTRA_REVOLUTIONS: f64 = 5.0;

// Seasonal pre-order
pub const DELIVERY_FEE: f64 = 2.0;
pub const MIN_NAME_LENGTH: usize = 2;

// Fallbacks used when a bundle omits a message
pub const NAME_REQUIRED_ERROR: &str = "Name is required";
pub const EMAIL_REQUIRED_ERROR: &str = "Email is required";
pub const INVALID_EMAIL_ERROR: &str = "Invalid email format";
pub const PHONE_REQUIRED_ERROR: &str = "Phone number is required";
pub const INVALID_PHONE_ERROR: &str = "Invalid phone number (8-15 digits, optional +)";
