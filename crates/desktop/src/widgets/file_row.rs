use std::path::PathBuf;

use iced::widget::{column, container, row, text, Space};
use iced::{Color, Element, Length, Theme};

use crate::app::{scaled, Control, Message};
use crate::theme::{surface_color, tertiary_color};
use crate::widgets::secondary_button::secondary_button;

const CORNER_RADIUS: f32 = 12.0;

pub fn file_row<'a>(
    fs: f32,
    label: &str,
    paths: &[PathBuf],
    on_browse: Option<Message>,
    hovered: bool,
    theme: &Theme,
) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);
    let surface = surface_color(theme);
    let border = Color {
        a: if hovered { 0.18 } else { 0.10 },
        ..theme.palette().text
    };

    let display_text: Element<'a, Message> = if paths.is_empty() {
        text("No file selected")
            .size(scaled(16.0, fs))
            .color(tertiary)
            .into()
    } else {
        text(file_names(paths))
            .size(scaled(16.0, fs))
            .font(iced::Font {
                weight: iced::font::Weight::Medium,
                ..iced::Font::DEFAULT
            })
            .into()
    };

    let browse_label = if paths.is_empty() { "Browse" } else { "Change" };
    let btn = secondary_button(
        move || text(browse_label).size(scaled(14.0, fs)).into(),
        on_browse,
        hovered,
        |h| Message::Hover(Control::Browse, h),
        [6, 14],
    );

    let label_text = text(label.to_uppercase())
        .size(scaled(12.0, fs))
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..iced::Font::DEFAULT
        })
        .color(tertiary);

    let info = column![label_text, Space::new().height(2), display_text].width(Length::Fill);

    container(row![info, btn].spacing(8).align_y(iced::Alignment::Center))
        .padding([14, 16])
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface)),
            border: iced::border::Border {
                color: border,
                width: 1.0,
                radius: CORNER_RADIUS.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn file_names(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| p.display().to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}
