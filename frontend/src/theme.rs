//! App theme: colors and spacing. Light/dark selected at runtime.

#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#2563EB";
    pub const LIGHT_BACKGROUND: &'static str = "#F3F4F6";
    pub const LIGHT_SURFACE: &'static str = "#FFFFFF";
    pub const LIGHT_ON_SURFACE: &'static str = "#111827";
    pub const LIGHT_MUTED: &'static str = "#6B7280";
    pub const LIGHT_BORDER: &'static str = "#D1D5DB";
    pub const LIGHT_SUCCESS: &'static str = "#16A34A";
    pub const LIGHT_ERROR: &'static str = "#DC2626";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#60A5FA";
    pub const DARK_BACKGROUND: &'static str = "#111827";
    pub const DARK_SURFACE: &'static str = "#1F2937";
    pub const DARK_ON_SURFACE: &'static str = "#F9FAFB";
    pub const DARK_MUTED: &'static str = "#9CA3AF";
    pub const DARK_BORDER: &'static str = "#374151";
    pub const DARK_SUCCESS: &'static str = "#4ADE80";
    pub const DARK_ERROR: &'static str = "#F87171";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn background(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_BACKGROUND
        } else {
            Self::LIGHT_BACKGROUND
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn muted(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_MUTED
        } else {
            Self::LIGHT_MUTED
        }
    }
    pub fn border(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_BORDER
        } else {
            Self::LIGHT_BORDER
        }
    }
    pub fn success(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SUCCESS
        } else {
            Self::LIGHT_SUCCESS
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }
}

/// Resolved colors for one mode, so components take a single value instead of `is_dark` everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub on_surface: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

impl Palette {
    pub fn new(is_dark: bool) -> Self {
        Self {
            primary: AppColors::primary(is_dark),
            background: AppColors::background(is_dark),
            surface: AppColors::surface(is_dark),
            on_surface: AppColors::on_surface(is_dark),
            muted: AppColors::muted(is_dark),
            border: AppColors::border(is_dark),
            success: AppColors::success(is_dark),
            error: AppColors::error(is_dark),
        }
    }

    pub fn input_style(&self) -> String {
        format!(
            "width: 100%; padding: 10px 12px; border-radius: 8px; border: 1px solid {}; background: transparent; color: {}; box-sizing: border-box;",
            self.border, self.on_surface
        )
    }

    pub fn primary_button_style(&self) -> String {
        format!(
            "padding: 10px 16px; border-radius: 8px; background: {}; color: #FFFFFF; font-weight: 600; border: none; cursor: pointer;",
            self.primary
        )
    }

    pub fn secondary_button_style(&self) -> String {
        format!(
            "padding: 10px 16px; border-radius: 8px; background: transparent; color: {}; border: 1px solid {}; cursor: pointer;",
            self.on_surface, self.border
        )
    }

    pub fn danger_button_style(&self) -> String {
        format!(
            "padding: 8px 12px; border-radius: 8px; background: {}; color: #FFFFFF; border: none; cursor: pointer;",
            self.error
        )
    }
}

pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const XL: &'static str = "32px";
    pub const CARD_PADDING: &'static str = "20px";
    pub const SCREEN_PADDING: &'static str = "24px";
    pub const CONTENT_MAX_WIDTH: &'static str = "1100px";
}
