use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

use facegate_core::screen::outcome::Tone;

use crate::settings::Appearance;

const THEME_NAME: &str = "FaceGate";

/// Picks the palette for the current settings. `System` asks the OS each
/// time, so the app follows a live dark-mode switch.
pub fn resolve_theme(appearance: Appearance, high_contrast: bool) -> Theme {
    let dark = match appearance {
        Appearance::Dark => true,
        Appearance::Light => false,
        Appearance::System => system_prefers_dark(),
    };
    Theme::custom(THEME_NAME, palette(dark, high_contrast))
}

fn palette(dark: bool, high_contrast: bool) -> Palette {
    match (dark, high_contrast) {
        (true, false) => Palette {
            background: color!(0x17, 0x1a, 0x1f),
            text: color!(0xd6, 0xda, 0xe0),
            primary: color!(0x2f, 0xb5, 0xa8),
            success: color!(0x4c, 0xc9, 0x6f),
            warning: color!(0xf2, 0xb8, 0x3a),
            danger: color!(0xf0, 0x5d, 0x5e),
        },
        (false, false) => Palette {
            background: color!(0xf4, 0xf6, 0xf8),
            text: color!(0x1a, 0x1e, 0x24),
            primary: color!(0x12, 0x8c, 0x80),
            success: color!(0x2e, 0x9d, 0x52),
            warning: color!(0xc7, 0x84, 0x06),
            danger: color!(0xd6, 0x33, 0x3a),
        },
        (true, true) => Palette {
            background: Color::BLACK,
            text: Color::WHITE,
            primary: color!(0x3d, 0xe0, 0xd0),
            success: color!(0x5c, 0xf0, 0x7e),
            warning: color!(0xff, 0xd6, 0x0a),
            danger: color!(0xff, 0x5c, 0x5c),
        },
        (false, true) => Palette {
            background: Color::WHITE,
            text: Color::BLACK,
            primary: color!(0x00, 0x5f, 0x57),
            success: color!(0x1b, 0x6e, 0x34),
            warning: color!(0x8a, 0x4b, 0x00),
            danger: color!(0xb0, 0x00, 0x12),
        },
    }
}

/// Secondary text (hints, file labels).
pub fn tertiary_color(theme: &Theme) -> Color {
    Color {
        a: 0.55,
        ..theme.palette().text
    }
}

/// Card background, one step off the window background.
pub fn surface_color(theme: &Theme) -> Color {
    theme.extended_palette().background.weak.color
}

pub fn tone_color(theme: &Theme, tone: Tone) -> Color {
    let palette = theme.palette();
    match tone {
        Tone::Success => palette.success,
        Tone::Failure => palette.danger,
        Tone::Busy => tertiary_color(theme),
    }
}

#[cfg(target_os = "macos")]
fn system_prefers_dark() -> bool {
    // Only set when dark mode is on.
    command_output("defaults", &["read", "-g", "AppleInterfaceStyle"])
        .map(|out| out.trim().eq_ignore_ascii_case("dark"))
        .unwrap_or(true)
}

#[cfg(target_os = "windows")]
fn system_prefers_dark() -> bool {
    const KEY: &str = r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";
    command_output("reg", &["query", KEY, "/v", "AppsUseLightTheme"])
        .map(|out| out.contains("0x0"))
        .unwrap_or(true)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn system_prefers_dark() -> bool {
    true
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_contrast_uses_pure_black_and_white() {
        assert_eq!(palette(true, true).background, Color::BLACK);
        assert_eq!(palette(false, true).background, Color::WHITE);
    }

    #[test]
    fn test_failure_tone_uses_danger_color() {
        let theme = resolve_theme(Appearance::Light, false);
        assert_eq!(tone_color(&theme, Tone::Failure), theme.palette().danger);
        assert_eq!(tone_color(&theme, Tone::Success), theme.palette().success);
    }
}
