use iced::widget::{column, text, Space};
use iced::Element;

use facegate_core::shared::constants::BACKEND_URL_ENV;

use crate::app::{scaled, Message};

pub fn view(fs: f32) -> Element<'static, Message> {
    let version = env!("CARGO_PKG_VERSION");

    column![
        text("FaceGate").size(scaled(22.0, fs)),
        Space::new().height(4),
        text(format!("Version {version}")).size(scaled(13.0, fs)),
        Space::new().height(12),
        text(
            "Registers, verifies and masks faces through a FaceGate service. \
             Photos are uploaded to the configured backend; nothing is \
             analysed on this machine."
        )
        .size(scaled(13.0, fs)),
        Space::new().height(12),
        text(format!(
            "The backend can also be set with the {BACKEND_URL_ENV} environment variable."
        ))
        .size(scaled(13.0, fs)),
    ]
    .spacing(0)
    .into()
}
