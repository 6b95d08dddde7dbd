pub mod about_tab;
pub mod masking_tab;
pub mod register_tab;
pub mod settings_tab;
pub mod verify_tab;

use iced::widget::{column, row, text, text_input, Column, Space};
use iced::{Color, Element, Length, Theme};

use facegate_core::screen::form::Form;
use facegate_core::screen::route::Route;
use facegate_core::screen::screen_state::ScreenState;

use crate::app::{scaled, Control, Message};
use crate::theme::tertiary_color;
use crate::widgets::primary_button::primary_button_fill;
use crate::widgets::result_banner::{notice, result_banner};
use crate::widgets::secondary_button::secondary_button;

/// Rendering context shared by the form tabs.
#[derive(Clone, Copy)]
pub struct Frame<'t> {
    pub fs: f32,
    pub hovered: Option<Control>,
    pub theme: &'t Theme,
    /// False while the backend URL is unusable; submitting is disabled.
    pub connected: bool,
}

impl Frame<'_> {
    pub fn is_hovered(&self, control: Control) -> bool {
        self.hovered == Some(control)
    }

    pub fn tertiary(&self) -> Color {
        tertiary_color(self.theme)
    }
}

fn heading<'a>(frame: Frame<'_>, route: Route, hint: &'a str) -> Element<'a, Message> {
    column![
        text(route.title())
            .size(scaled(20.0, frame.fs))
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
        Space::new().height(4),
        text(hint).size(scaled(13.0, frame.fs)).color(frame.tertiary()),
    ]
    .into()
}

/// The submit message, or `None` while submitting is unavailable. Shared by
/// the button and Enter in the user ID field.
fn submit_message<F: Form>(frame: Frame<'_>, route: Route, state: &ScreenState<F>) -> Option<Message> {
    (state.can_submit() && frame.connected).then_some(Message::Submit(route))
}

fn user_id_input<'a, F: Form>(
    frame: Frame<'_>,
    route: Route,
    state: &ScreenState<F>,
    value: &str,
) -> Element<'a, Message> {
    text_input("User ID", value)
        .on_input(move |value| Message::UserIdChanged(route, value))
        .on_submit_maybe(submit_message(frame, route, state))
        .size(scaled(15.0, frame.fs))
        .padding([10, 12])
        .into()
}

/// Submit button (disabled and relabelled while a request is in flight)
/// plus a cancel button while busy.
fn submit_row<'a, F: Form>(
    frame: Frame<'_>,
    route: Route,
    state: &ScreenState<F>,
    label: &'static str,
) -> Element<'a, Message> {
    let fs = frame.fs;
    let busy = state.is_busy();
    let caption = if busy { F::BUSY_LABEL } else { label };
    let on_press = submit_message(frame, route, state);

    let submit = primary_button_fill(
        move || {
            text(caption)
                .size(scaled(15.0, fs))
                .width(Length::Fill)
                .align_x(iced::Alignment::Center)
                .into()
        },
        on_press,
        frame.is_hovered(Control::Submit),
        |h| Message::Hover(Control::Submit, h),
        [12, 24],
    );

    if !busy {
        return submit;
    }

    let cancel = secondary_button(
        move || text("Cancel").size(scaled(14.0, fs)).into(),
        Some(Message::Cancel(route)),
        frame.is_hovered(Control::Cancel),
        |h| Message::Hover(Control::Cancel, h),
        [12, 18],
    );
    row![submit, cancel]
        .spacing(8)
        .align_y(iced::Alignment::Center)
        .into()
}

/// Notice slot and result banner, in that order. At most one banner.
fn status<'a, F: Form>(frame: Frame<'_>, route: Route, state: &ScreenState<F>) -> Column<'a, Message> {
    let mut col = Column::new().spacing(8);
    if !frame.connected {
        col = col.push(
            text("The backend URL is invalid. Fix it in Settings.")
                .size(scaled(13.0, frame.fs))
                .color(frame.theme.palette().danger),
        );
    }
    if let Some(message) = state.notice() {
        col = col.push(notice(frame.fs, message, Message::DismissNotice(route), frame.theme));
    }
    if let Some(banner) = state.banner() {
        col = col.push(result_banner(frame.fs, banner, frame.theme));
    }
    col
}
