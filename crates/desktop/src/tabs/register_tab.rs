use iced::widget::{column, text, Space};
use iced::Element;

use facegate_core::registration::registration_form::RegistrationForm;
use facegate_core::screen::route::Route;
use facegate_core::screen::screen_state::ScreenState;
use facegate_core::shared::constants::MAX_REGISTRATION_IMAGES;

use crate::app::{scaled, Control, Message};
use crate::tabs::{heading, status, submit_row, user_id_input, Frame};
use crate::widgets::file_row::file_row;

const ROUTE: Route = Route::Register;

pub fn view<'a>(frame: Frame<'_>, state: &ScreenState<RegistrationForm>) -> Element<'a, Message> {
    let form = &state.form;

    let mut content = column![
        heading(
            frame,
            ROUTE,
            "Enroll a user with one or more clear photos of their face."
        ),
        Space::new().height(16),
        user_id_input(frame, ROUTE, state, &form.user_id),
        Space::new().height(12),
        file_row(
            frame.fs,
            "Face images",
            &form.images,
            Some(Message::SelectImages(ROUTE)),
            frame.is_hovered(Control::Browse),
            frame.theme,
        ),
    ];

    if form.images.len() > MAX_REGISTRATION_IMAGES {
        content = content.push(
            text(format!(
                "Only the first {MAX_REGISTRATION_IMAGES} faces are used for the enrollment."
            ))
            .size(scaled(12.0, frame.fs))
            .color(frame.theme.palette().warning),
        );
    }

    content
        .push(Space::new().height(16))
        .push(submit_row(frame, ROUTE, state, "Register"))
        .push(Space::new().height(12))
        .push(status(frame, ROUTE, state))
        .into()
}
