use std::path::PathBuf;
use std::time::Duration;

use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use facegate_core::masking::mask_type::MaskType;
use facegate_core::masking::masked_image::MaskedImage;
use facegate_core::masking::masking_form::MaskingForm;
use facegate_core::registration::receipt::Registration;
use facegate_core::registration::registration_form::RegistrationForm;
use facegate_core::screen::form::Form;
use facegate_core::screen::route::Route;
use facegate_core::screen::screen_state::ScreenState;
use facegate_core::screen::submission::Submission;
use facegate_core::shared::config::BackendConfig;
use facegate_core::shared::constants::IMAGE_EXTENSIONS;
use facegate_core::verification::verdict::Verdict;
use facegate_core::verification::verification_form::VerificationForm;

use crate::settings::{Appearance, Settings};
use crate::tabs::{self, Frame};
use crate::theme;
use crate::workers::submit_worker;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Register,
    Verify,
    Masking,
    Settings,
    About,
}

impl Tab {
    const ALL: &[Tab] = &[
        Tab::Register,
        Tab::Verify,
        Tab::Masking,
        Tab::Settings,
        Tab::About,
    ];

    fn label(self) -> &'static str {
        match self {
            Tab::Register => "Register",
            Tab::Verify => "Verify",
            Tab::Masking => "Masking",
            Tab::Settings => "Settings",
            Tab::About => "About",
        }
    }

    /// Start tab from the first command-line argument. Unknown paths open
    /// registration.
    pub fn from_start_arg(arg: Option<&str>) -> Tab {
        match arg {
            Some(path) => Route::from_path(path).map(Tab::from).unwrap_or_else(|| {
                log::warn!("Unknown screen '{path}', opening registration");
                Tab::Register
            }),
            None => Tab::Register,
        }
    }

    /// The screen shown by this tab, if it is one of the form screens.
    pub fn route(self) -> Option<Route> {
        match self {
            Tab::Register => Some(Route::Register),
            Tab::Verify => Some(Route::Verify),
            Tab::Masking => Some(Route::Masking),
            Tab::Settings | Tab::About => None,
        }
    }
}

impl From<Route> for Tab {
    fn from(route: Route) -> Self {
        match route {
            Route::Register => Tab::Register,
            Route::Verify => Tab::Verify,
            Route::Masking => Tab::Masking,
        }
    }
}

/// Controls with a hover animation. Only one tab is visible at a time, so
/// one slot per kind is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Submit,
    Cancel,
    Browse,
    Save,
    Open,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    UserIdChanged(Route, String),
    SelectImages(Route),
    ImagesSelected(Route, Vec<PathBuf>),
    MaskTypeChanged(MaskType),
    Submit(Route),
    Cancel(Route),
    DismissNotice(Route),
    PollSubmissions,
    SaveMaskedImage,
    SaveTargetSelected(Option<PathBuf>),
    OpenMaskedImage,
    Hover(Control, bool),
    BackendUrlChanged(String),
    ApplyBackendUrl,
    AppearanceChanged(Appearance),
    HighContrastChanged(bool),
    FontScaleChanged(f32),
    PollSystemTheme,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    active_tab: Tab,
    pub settings: Settings,
    backend: Option<BackendConfig>,
    backend_error: Option<String>,
    backend_url_draft: String,
    register: ScreenState<RegistrationForm>,
    verify: ScreenState<VerificationForm>,
    masking: ScreenState<MaskingForm>,
    register_job: Option<Submission<Registration>>,
    verify_job: Option<Submission<Verdict>>,
    masking_job: Option<Submission<MaskedImage>>,
    masked_preview: Option<image::Handle>,
    save_status: Option<String>,
    hovered: Option<Control>,
}

impl App {
    pub fn new(start: Tab) -> (Self, Task<Message>) {
        (Self::with_settings(start, Settings::load()), Task::none())
    }

    fn with_settings(start: Tab, settings: Settings) -> Self {
        let (backend, backend_error) = match connect(settings.backend_override()) {
            Ok(backend) => (Some(backend), None),
            Err(e) => {
                log::error!("{e}");
                (None, Some(e))
            }
        };

        Self {
            active_tab: start,
            backend_url_draft: settings.backend_url.clone(),
            settings,
            backend,
            backend_error,
            register: ScreenState::default(),
            verify: ScreenState::default(),
            masking: ScreenState::default(),
            register_job: None,
            verify_job: None,
            masking_job: None,
            masked_preview: None,
            save_status: None,
            hovered: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                if tab != self.active_tab {
                    if let Some(route) = self.active_tab.route() {
                        self.abandon(route);
                    }
                    self.active_tab = tab;
                    self.hovered = None;
                }
            }
            Message::UserIdChanged(route, value) => match route {
                Route::Register => self.register.form.user_id = value,
                Route::Verify => self.verify.form.user_id = value,
                Route::Masking => self.masking.form.user_id = value,
            },
            Message::SelectImages(route) => {
                return Task::perform(pick_images(route == Route::Register), move |paths| {
                    Message::ImagesSelected(route, paths)
                });
            }
            Message::ImagesSelected(_, paths) if paths.is_empty() => {}
            Message::ImagesSelected(route, paths) => match route {
                Route::Register => self.register.form.images = paths,
                Route::Verify => self.verify.form.image = paths.into_iter().next(),
                Route::Masking => self.masking.form.image = paths.into_iter().next(),
            },
            Message::MaskTypeChanged(mask_type) => {
                self.masking.form.mask_type = mask_type;
            }
            Message::Submit(route) => self.submit(route),
            Message::Cancel(route) => self.abandon(route),
            Message::DismissNotice(route) => match route {
                Route::Register => self.register.dismiss_notice(),
                Route::Verify => self.verify.dismiss_notice(),
                Route::Masking => self.masking.dismiss_notice(),
            },
            Message::PollSubmissions => {
                drain(&mut self.register, &mut self.register_job);
                drain(&mut self.verify, &mut self.verify_job);
                if drain(&mut self.masking, &mut self.masking_job) {
                    self.masked_preview = self
                        .masking
                        .outcome()
                        .success()
                        .and_then(|masked| masked.bytes.clone())
                        .map(image::Handle::from_bytes);
                }
            }
            Message::SaveMaskedImage => {
                if let Some(masked) = self.masking.outcome().success() {
                    let name = masked.download_name().to_string();
                    return Task::perform(
                        async move {
                            rfd::AsyncFileDialog::new()
                                .set_title("Save masked image")
                                .add_filter("PNG image", &["png"])
                                .set_file_name(name)
                                .save_file()
                                .await
                                .map(|h| h.path().to_path_buf())
                        },
                        Message::SaveTargetSelected,
                    );
                }
            }
            Message::SaveTargetSelected(Some(path)) => {
                if let Some(masked) = self.masking.outcome().success() {
                    self.save_status = Some(match masked.save_to(&path) {
                        Ok(()) => format!("Saved to {}", path.display()),
                        Err(e) => {
                            log::warn!("{e}");
                            format!("Could not save: {e}")
                        }
                    });
                }
            }
            Message::SaveTargetSelected(None) => {}
            Message::OpenMaskedImage => {
                if let Some(masked) = self.masking.outcome().success() {
                    if let Err(e) = open::that(masked.url.as_str()) {
                        log::warn!("Could not open {}: {e}", masked.url);
                    }
                }
            }
            Message::Hover(control, true) => self.hovered = Some(control),
            Message::Hover(control, false) => {
                if self.hovered == Some(control) {
                    self.hovered = None;
                }
            }
            Message::BackendUrlChanged(value) => {
                self.backend_url_draft = value;
            }
            Message::ApplyBackendUrl => {
                let draft = self.backend_url_draft.trim().to_string();
                match connect((!draft.is_empty()).then_some(draft.as_str())) {
                    Ok(backend) => {
                        self.backend = Some(backend);
                        self.backend_error = None;
                        self.settings.backend_url = draft;
                        self.settings.save();
                    }
                    Err(e) => {
                        log::warn!("{e}");
                        self.backend_error = Some(e);
                    }
                }
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::HighContrastChanged(enabled) => {
                self.settings.high_contrast = enabled;
                self.settings.save();
            }
            Message::FontScaleChanged(scale) => {
                self.settings.font_scale = scale;
                self.settings.save();
            }
            Message::PollSystemTheme => {
                // Theme is resolved fresh in theme() on every render,
                // so just requesting a redraw is enough.
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;
        let theme = self.theme();

        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let label = text(tab.label()).size(scaled(13.0, fs));
                let btn = button(label)
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        let frame = Frame {
            fs,
            hovered: self.hovered,
            theme: &theme,
            connected: self.backend.is_some(),
        };

        let content: Element<'_, Message> = match self.active_tab {
            Tab::Register => tabs::register_tab::view(frame, &self.register),
            Tab::Verify => tabs::verify_tab::view(frame, &self.verify),
            Tab::Masking => tabs::masking_tab::view(
                frame,
                &self.masking,
                self.masked_preview.as_ref(),
                self.save_status.as_deref(),
            ),
            Tab::Settings => tabs::settings_tab::view(
                &self.settings,
                &self.backend_url_draft,
                self.backend.as_ref().map(|c| c.base_url().as_str()),
                self.backend_error.as_deref(),
                &theme,
            ),
            Tab::About => tabs::about_tab::view(fs),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        column![tab_bar, tab_content]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance, self.settings.high_contrast)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();
        if self.register_job.is_some() || self.verify_job.is_some() || self.masking_job.is_some() {
            subscriptions.push(iced::time::every(POLL_INTERVAL).map(|_| Message::PollSubmissions));
        }
        if self.settings.appearance == Appearance::System {
            subscriptions
                .push(iced::time::every(Duration::from_secs(2)).map(|_| Message::PollSystemTheme));
        }
        Subscription::batch(subscriptions)
    }

    fn submit(&mut self, route: Route) {
        if !self.can_submit(route) {
            log::debug!("Ignoring submit on {route:?} while unavailable");
            return;
        }
        let Some(config) = self.backend.clone() else {
            return;
        };
        // Replacing a job drops the old handle, which cancels it.
        match route {
            Route::Register => {
                if let Some((ticket, request)) = self.register.submit() {
                    self.register_job = Some(submit_worker::register(config, ticket, request));
                }
            }
            Route::Verify => {
                if let Some((ticket, request)) = self.verify.submit() {
                    self.verify_job = Some(submit_worker::verify(config, ticket, request));
                }
            }
            Route::Masking => {
                if let Some((ticket, request)) = self.masking.submit() {
                    self.masked_preview = None;
                    self.save_status = None;
                    self.masking_job = Some(submit_worker::mask(config, ticket, request));
                }
            }
        }
    }

    /// Mirrors the enabled state of the submit button; Enter in the user ID
    /// field goes through the same check.
    pub fn can_submit(&self, route: Route) -> bool {
        let idle = match route {
            Route::Register => self.register.can_submit(),
            Route::Verify => self.verify.can_submit(),
            Route::Masking => self.masking.can_submit(),
        };
        idle && self.backend.is_some()
    }

    /// Drops the in-flight request of a screen; its result is never shown.
    fn abandon(&mut self, route: Route) {
        match route {
            Route::Register => {
                self.register_job = None;
                self.register.cancel();
            }
            Route::Verify => {
                self.verify_job = None;
                self.verify.cancel();
            }
            Route::Masking => {
                self.masking_job = None;
                if self.masking.cancel() {
                    self.masked_preview = None;
                }
            }
        }
    }
}

/// Applies a finished submission to its screen. Returns whether anything changed.
fn drain<F: Form>(state: &mut ScreenState<F>, job: &mut Option<Submission<F::Success>>) -> bool {
    let Some(submission) = job.as_ref() else {
        return false;
    };
    let Some(result) = submission.poll() else {
        return false;
    };
    let applied = state.resolve(submission.ticket(), result);
    *job = None;
    applied
}

fn connect(explicit: Option<&str>) -> Result<BackendConfig, String> {
    let config = BackendConfig::resolve(explicit).map_err(|e| e.to_string())?;
    log::info!("Backend: {}", config.base_url());
    Ok(config)
}

async fn pick_images(multiple: bool) -> Vec<PathBuf> {
    let dialog = rfd::AsyncFileDialog::new()
        .set_title(if multiple {
            "Select face images"
        } else {
            "Select image"
        })
        .add_filter("Images", IMAGE_EXTENSIONS);

    let handles = if multiple {
        dialog.pick_files().await.unwrap_or_default()
    } else {
        dialog.pick_file().await.into_iter().collect()
    };
    handles.into_iter().map(|h| h.path().to_path_buf()).collect()
}

/// Scale a base font size by the user's font_scale setting.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}
