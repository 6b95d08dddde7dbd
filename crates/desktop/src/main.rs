mod app;
mod settings;
mod tabs;
mod theme;
mod widgets;
mod workers;

use app::{App, Tab};

fn main() -> iced::Result {
    env_logger::init();

    // Optional start screen, e.g. `facegate-desktop /masking`.
    let start = Tab::from_start_arg(std::env::args().nth(1).as_deref());

    iced::application(move || App::new(start), App::update, App::view)
        .title("FaceGate")
        .theme(App::theme)
        .subscription(App::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(640.0, 720.0),
            icon: load_icon(),
            ..Default::default()
        })
        .run()
}

fn load_icon() -> Option<iced::window::Icon> {
    let icon_bytes = include_bytes!("../assets/icon.png");
    let img = image::load_from_memory(icon_bytes).ok()?.into_rgba8();
    let (w, h) = img.dimensions();
    iced::window::icon::from_rgba(img.into_raw(), w, h).ok()
}
