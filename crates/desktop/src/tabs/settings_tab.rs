use iced::widget::{button, checkbox, column, pick_list, row, slider, text, text_input, Space};
use iced::{Element, Theme};

use crate::app::{scaled, Message};
use crate::settings::{Appearance, Settings};
use crate::theme::tertiary_color;

pub fn view<'a>(
    settings: &Settings,
    backend_url_draft: &str,
    active_url: Option<&str>,
    backend_error: Option<&str>,
    theme: &Theme,
) -> Element<'a, Message> {
    let fs = settings.font_scale;
    let tertiary = tertiary_color(theme);

    let active = match active_url {
        Some(url) => format!("Connected to {url}"),
        None => "No backend configured".to_string(),
    };

    let mut backend = column![
        text("Backend").size(scaled(16.0, fs)),
        Space::new().height(8),
        row![
            text_input("Leave empty for the default", backend_url_draft)
                .on_input(Message::BackendUrlChanged)
                .on_submit(Message::ApplyBackendUrl)
                .size(scaled(13.0, fs))
                .padding([6, 10]),
            button(text("Apply").size(scaled(13.0, fs)))
                .on_press(Message::ApplyBackendUrl)
                .padding([6, 14]),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center),
        Space::new().height(6),
        text(active).size(scaled(12.0, fs)).color(tertiary),
    ];
    if let Some(error) = backend_error {
        backend = backend.push(
            text(error.to_string())
                .size(scaled(12.0, fs))
                .color(theme.palette().danger),
        );
    }

    column![
        backend,
        Space::new().height(20),
        text("Theme").size(scaled(16.0, fs)),
        Space::new().height(8),
        row![
            text("Mode").size(scaled(13.0, fs)),
            pick_list(Appearance::ALL, Some(settings.appearance), |a| {
                Message::AppearanceChanged(a)
            })
            .text_size(scaled(13.0, fs)),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
        Space::new().height(12),
        checkbox(settings.high_contrast)
            .label("High contrast")
            .on_toggle(Message::HighContrastChanged)
            .text_size(scaled(13.0, fs)),
        Space::new().height(20),
        text("Font size").size(scaled(16.0, fs)),
        Space::new().height(8),
        row![
            slider(0.8..=1.5, settings.font_scale, Message::FontScaleChanged).step(0.05),
            text(format!("{:.0}%", settings.font_scale * 100.0)).size(scaled(13.0, fs)),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    ]
    .spacing(0)
    .into()
}
