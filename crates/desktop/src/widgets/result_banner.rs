use iced::border::Border;
use iced::widget::{button, container, row, text};
use iced::{Color, Element, Length, Theme};

use facegate_core::screen::outcome::Banner;

use crate::app::{scaled, Message};
use crate::theme::tone_color;

/// The single result line under a form, tinted by outcome.
pub fn result_banner<'a>(fs: f32, banner: Banner, theme: &Theme) -> Element<'a, Message> {
    let accent = tone_color(theme, banner.tone);

    container(text(banner.text).size(scaled(14.0, fs)).color(accent))
        .padding([10, 14])
        .width(Length::Fill)
        .style(move |_theme: &Theme| tinted(accent))
        .into()
}

/// Inline validation notice; replaces a blocking alert.
pub fn notice<'a>(fs: f32, message: &str, on_dismiss: Message, theme: &Theme) -> Element<'a, Message> {
    let accent = theme.palette().warning;

    container(
        row![
            text(message.to_string())
                .size(scaled(13.0, fs))
                .color(accent)
                .width(Length::Fill),
            button(text("Dismiss").size(scaled(12.0, fs)))
                .on_press(on_dismiss)
                .style(button::text),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center),
    )
    .padding([6, 14])
    .width(Length::Fill)
    .style(move |_theme: &Theme| tinted(accent))
    .into()
}

fn tinted(accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color { a: 0.10, ..accent })),
        border: Border {
            color: Color { a: 0.35, ..accent },
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}
