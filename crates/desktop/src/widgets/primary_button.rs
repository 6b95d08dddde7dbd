use std::time::Duration;

use iced::border::Border;
use iced::widget::{button, container, mouse_area};
use iced::{Color, Element, Length, Padding, Shadow, Theme, Vector};
use iced_anim::transition::Easing;
use iced_anim::AnimationBuilder;

const RADIUS: f32 = 10.0;
const LIFT: f32 = 1.0;
const ANIMATION: Duration = Duration::from_millis(180);

/// Resting and hovered looks; the animation interpolates between them.
struct Look {
    darken: f32,
    shadow_alpha: f32,
    shadow_blur: f32,
}

const REST: Look = Look {
    darken: 0.0,
    shadow_alpha: 0.22,
    shadow_blur: 8.0,
};

const HOVER: Look = Look {
    darken: 0.06,
    shadow_alpha: 0.35,
    shadow_blur: 14.0,
};

/// Full-width call-to-action. `on_press: None` renders it disabled and
/// freezes the hover animation.
pub fn primary_button_fill<'a, Message: Clone + 'a>(
    content: impl Fn() -> Element<'a, Message> + 'a,
    on_press: Option<Message>,
    hovered: bool,
    on_hover: impl Fn(bool) -> Message + 'a,
    padding: [u16; 2],
) -> Element<'a, Message> {
    let target = if hovered && on_press.is_some() { 1.0_f32 } else { 0.0 };

    let animated: Element<'a, Message> = AnimationBuilder::new(target, move |t: f32| {
        let t = t.clamp(0.0, 1.0);
        let btn = button(content())
            .on_press_maybe(on_press.clone())
            .padding(padding)
            .width(Length::Fill)
            .style(move |theme: &Theme, status: button::Status| {
                let accent = theme.extended_palette().primary.base.color;
                match status {
                    button::Status::Disabled => disabled_style(accent),
                    button::Status::Pressed => active_style(accent, 1.0),
                    _ => active_style(accent, t),
                }
            });

        // Trade top padding for bottom padding so the button floats up.
        let lifted: Element<'a, Message> = container(btn)
            .padding(Padding {
                top: LIFT * (1.0 - t),
                bottom: LIFT * t,
                ..Padding::ZERO
            })
            .into();
        lifted
    })
    .animates_layout(true)
    .animation(Easing::EASE_OUT.with_duration(ANIMATION))
    .into();

    mouse_area(animated)
        .on_enter(on_hover(true))
        .on_exit(on_hover(false))
        .into()
}

fn active_style(accent: Color, t: f32) -> button::Style {
    let mix = |rest: f32, hover: f32| rest + (hover - rest) * t;
    let shift = mix(REST.darken, HOVER.darken);

    button::Style {
        background: Some(
            Color {
                r: (accent.r - shift).max(0.0),
                g: (accent.g - shift).max(0.0),
                b: (accent.b - shift).max(0.0),
                a: 1.0,
            }
            .into(),
        ),
        text_color: Color::WHITE,
        border: Border {
            radius: RADIUS.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color {
                a: mix(REST.shadow_alpha, HOVER.shadow_alpha),
                ..accent
            },
            offset: Vector::new(0.0, 3.0),
            blur_radius: mix(REST.shadow_blur, HOVER.shadow_blur),
        },
        ..button::Style::default()
    }
}

fn disabled_style(accent: Color) -> button::Style {
    button::Style {
        background: Some(Color { a: 0.45, ..accent }.into()),
        text_color: Color { a: 0.8, ..Color::WHITE },
        border: Border {
            radius: RADIUS.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
