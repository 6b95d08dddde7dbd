use std::time::Duration;

use iced::border::Border;
use iced::widget::{button, mouse_area};
use iced::{Color, Element, Theme};
use iced_anim::transition::Easing;
use iced_anim::AnimationBuilder;

use crate::theme::{surface_color, tertiary_color};

const CORNER_RADIUS: f32 = 8.0;
const ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Outlined button for secondary actions (browse, cancel, save).
pub fn secondary_button<'a, Message: Clone + 'a>(
    content: impl Fn() -> Element<'a, Message> + 'a,
    on_press: Option<Message>,
    hovered: bool,
    on_hover: impl Fn(bool) -> Message + 'a,
    padding: [u16; 2],
) -> Element<'a, Message> {
    let target = if hovered && on_press.is_some() { 1.0_f32 } else { 0.0 };

    let animated: Element<'a, Message> = AnimationBuilder::new(target, move |t: f32| {
        let hover_amount = t.clamp(0.0, 1.0);
        let btn: Element<'a, Message> = button(content())
            .on_press_maybe(on_press.clone())
            .padding(padding)
            .style(move |theme: &Theme, status: button::Status| match status {
                button::Status::Pressed => styled(theme, 1.0, false),
                button::Status::Disabled => styled(theme, 0.0, true),
                _ => styled(theme, hover_amount, false),
            })
            .into();
        btn
    })
    .animation(Easing::EASE_OUT.with_duration(ANIMATION_DURATION))
    .into();

    mouse_area(animated)
        .on_enter(on_hover(true))
        .on_exit(on_hover(false))
        .into()
}

fn styled(theme: &Theme, hover_amount: f32, disabled: bool) -> button::Style {
    let surface = surface_color(theme);
    let bg = lerp_color(surface, surface_alt_color(theme), hover_amount);
    let border = lerp_color(border_color(theme), tertiary_color(theme), hover_amount);
    let text = Color {
        a: if disabled { 0.3 } else { 0.7 },
        ..theme.palette().text
    };

    button::Style {
        background: Some(bg.into()),
        text_color: text,
        border: Border {
            color: border,
            width: 1.0,
            radius: CORNER_RADIUS.into(),
        },
        ..button::Style::default()
    }
}

fn surface_alt_color(theme: &Theme) -> Color {
    let p = theme.palette();
    let luma = p.background.r * 0.299 + p.background.g * 0.587 + p.background.b * 0.114;
    let shift = if luma > 0.5 { -0.06 } else { 0.12 };
    Color {
        r: (p.background.r + shift).clamp(0.0, 1.0),
        g: (p.background.g + shift).clamp(0.0, 1.0),
        b: (p.background.b + shift).clamp(0.0, 1.0),
        a: 1.0,
    }
}

fn border_color(theme: &Theme) -> Color {
    Color {
        a: 0.15,
        ..theme.palette().text
    }
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}
