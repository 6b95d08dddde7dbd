use std::slice;

use iced::widget::{column, container, image, Space};
use iced::{ContentFit, Element, Length};

use facegate_core::screen::route::Route;
use facegate_core::screen::screen_state::ScreenState;
use facegate_core::verification::verification_form::VerificationForm;

use crate::app::{Control, Message};
use crate::tabs::{heading, status, submit_row, user_id_input, Frame};
use crate::widgets::file_row::file_row;

const ROUTE: Route = Route::Verify;
const PREVIEW_HEIGHT: f32 = 220.0;

pub fn view<'a>(frame: Frame<'_>, state: &ScreenState<VerificationForm>) -> Element<'a, Message> {
    let form = &state.form;
    let selected = form.image.as_ref().map(slice::from_ref).unwrap_or_default();

    let mut content = column![
        heading(frame, ROUTE, "Check whether a photo shows the registered user."),
        Space::new().height(16),
        user_id_input(frame, ROUTE, state, &form.user_id),
        Space::new().height(12),
        file_row(
            frame.fs,
            "Photo",
            selected,
            Some(Message::SelectImages(ROUTE)),
            frame.is_hovered(Control::Browse),
            frame.theme,
        ),
    ];

    if let Some(path) = &form.image {
        content = content.push(Space::new().height(12)).push(
            container(
                image(image::Handle::from_path(path))
                    .content_fit(ContentFit::Contain)
                    .height(PREVIEW_HEIGHT),
            )
            .center_x(Length::Fill),
        );
    }

    content
        .push(Space::new().height(16))
        .push(submit_row(frame, ROUTE, state, "Verify"))
        .push(Space::new().height(12))
        .push(status(frame, ROUTE, state))
        .into()
}
