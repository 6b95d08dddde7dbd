use std::slice;

use iced::widget::{column, container, image, pick_list, row, text, Space};
use iced::{ContentFit, Element, Length};

use facegate_core::masking::mask_type::MaskType;
use facegate_core::masking::masked_image::MaskedImage;
use facegate_core::masking::masking_form::MaskingForm;
use facegate_core::screen::route::Route;
use facegate_core::screen::screen_state::ScreenState;

use crate::app::{scaled, Control, Message};
use crate::tabs::{heading, status, submit_row, user_id_input, Frame};
use crate::widgets::file_row::file_row;
use crate::widgets::secondary_button::secondary_button;

const ROUTE: Route = Route::Masking;
const PREVIEW_HEIGHT: f32 = 260.0;

pub fn view<'a>(
    frame: Frame<'_>,
    state: &ScreenState<MaskingForm>,
    preview: Option<&image::Handle>,
    save_status: Option<&str>,
) -> Element<'a, Message> {
    let fs = frame.fs;
    let form = &state.form;
    let selected = form.image.as_ref().map(slice::from_ref).unwrap_or_default();

    let mask_picker = row![
        text("Mask").size(scaled(13.0, fs)),
        pick_list(MaskType::ALL, Some(form.mask_type), Message::MaskTypeChanged)
            .text_size(scaled(13.0, fs)),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let mut content = column![
        heading(
            frame,
            ROUTE,
            "Hide the registered user's face in a photo."
        ),
        Space::new().height(16),
        user_id_input(frame, ROUTE, state, &form.user_id),
        Space::new().height(12),
        file_row(
            fs,
            "Photo",
            selected,
            Some(Message::SelectImages(ROUTE)),
            frame.is_hovered(Control::Browse),
            frame.theme,
        ),
        Space::new().height(12),
        mask_picker,
        Space::new().height(16),
        submit_row(frame, ROUTE, state, "Apply mask"),
        Space::new().height(12),
        status(frame, ROUTE, state),
    ];

    if let Some(masked) = state.outcome().success() {
        content = content
            .push(Space::new().height(12))
            .push(result_view(frame, masked, preview, save_status));
    }

    content.into()
}

fn result_view<'a>(
    frame: Frame<'_>,
    masked: &MaskedImage,
    preview: Option<&image::Handle>,
    save_status: Option<&str>,
) -> Element<'a, Message> {
    let fs = frame.fs;

    let picture: Element<'a, Message> = match preview {
        Some(handle) => container(
            image(handle.clone())
                .content_fit(ContentFit::Contain)
                .height(PREVIEW_HEIGHT),
        )
        .center_x(Length::Fill)
        .into(),
        None => text("Preview unavailable; open the image in a browser instead.")
            .size(scaled(12.0, fs))
            .color(frame.tertiary())
            .into(),
    };

    let save = secondary_button(
        move || text("Save\u{2026}").size(scaled(14.0, fs)).into(),
        masked.bytes.is_some().then_some(Message::SaveMaskedImage),
        frame.is_hovered(Control::Save),
        |h| Message::Hover(Control::Save, h),
        [8, 16],
    );
    let open = secondary_button(
        move || text("Open in browser").size(scaled(14.0, fs)).into(),
        Some(Message::OpenMaskedImage),
        frame.is_hovered(Control::Open),
        |h| Message::Hover(Control::Open, h),
        [8, 16],
    );

    let mut col = column![
        picture,
        Space::new().height(8),
        text(masked.url.to_string())
            .size(scaled(12.0, fs))
            .color(frame.tertiary()),
        Space::new().height(8),
        row![save, open].spacing(8),
    ];
    if let Some(line) = save_status {
        col = col.push(Space::new().height(6)).push(
            text(line.to_string())
                .size(scaled(12.0, fs))
                .color(frame.tertiary()),
        );
    }
    col.into()
}
