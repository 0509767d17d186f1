use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00eb743b);
pub const SECONDARY: Color = Color::from_u32(0x00353070);
pub const NEUTRAL: Color = Color::from_u32(0x00505050);
pub const BACKGROUND: Color = Color::from_u32(0x00101014);
pub const SURFACE: Color = Color::from_u32(0x001c1c24);
pub const ACCENT: Color = Color::from_u32(0x00f0c0a0);
pub const ERROR: Color = Color::from_u32(0x00e05555);
