use ratatui::prelude::Color;

// Catppuccin Mocha, the subset the viewer draws with
pub const MANTLE: Color = Color::Rgb(24, 24, 37);
pub const SURFACE0: Color = Color::Rgb(49, 50, 68);
pub const SURFACE1: Color = Color::Rgb(69, 71, 90);
pub const SURFACE2: Color = Color::Rgb(88, 91, 112);
pub const OVERLAY0: Color = Color::Rgb(108, 112, 134);
pub const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
pub const TEXT: Color = Color::Rgb(205, 214, 244);
pub const RED: Color = Color::Rgb(243, 139, 168);
pub const GREEN: Color = Color::Rgb(166, 227, 161);
pub const YELLOW: Color = Color::Rgb(249, 226, 175);
pub const BLUE: Color = Color::Rgb(137, 180, 250);
pub const TEAL: Color = Color::Rgb(148, 226, 213);
pub const MAUVE: Color = Color::Rgb(203, 166, 247);
