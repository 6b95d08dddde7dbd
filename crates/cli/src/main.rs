use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use facegate_core::backend::domain::backend_error::BackendError;
use facegate_core::backend::domain::face_backend::FaceBackend;
use facegate_core::backend::infrastructure::http_face_backend::HttpFaceBackend;
use facegate_core::masking::mask_face_use_case::MaskFaceUseCase;
use facegate_core::masking::mask_type::MaskType;
use facegate_core::masking::masking_form::MaskingForm;
use facegate_core::registration::register_face_use_case::RegisterFaceUseCase;
use facegate_core::registration::registration_form::RegistrationForm;
use facegate_core::screen::form::Form;
use facegate_core::screen::outcome::Tone;
use facegate_core::screen::screen_state::ScreenState;
use facegate_core::shared::config::BackendConfig;
use facegate_core::shared::image_file::has_image_extension;
use facegate_core::verification::verification_form::VerificationForm;
use facegate_core::verification::verify_face_use_case::VerifyFaceUseCase;

/// Register, verify and mask faces through a FaceGate backend.
#[derive(Parser)]
#[command(name = "facegate")]
struct Cli {
    /// Backend base URL (overrides FACEGATE_BACKEND_URL; default http://127.0.0.1:8000).
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Request timeout in seconds (default: HTTP client default).
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a user's face from one or more images.
    Register {
        /// User identifier.
        #[arg(long)]
        user_id: String,

        /// Face images (the service averages up to five).
        images: Vec<PathBuf>,
    },

    /// Check whether an image shows the registered user.
    Verify {
        /// User identifier.
        #[arg(long)]
        user_id: String,

        /// Image to verify.
        image: Option<PathBuf>,
    },

    /// Obscure the registered user's face in an image.
    Mask {
        /// User identifier.
        #[arg(long)]
        user_id: String,

        /// Mask style: black, bear, tiger, koala or blur.
        #[arg(long, default_value = "black")]
        mask_type: String,

        /// Image containing the face.
        image: Option<PathBuf>,

        /// Save the masked image here (a directory gets masked_image.png).
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = BackendConfig::resolve(cli.backend_url.as_deref())?
        .with_timeout(cli.timeout.map(Duration::from_secs));
    log::info!("Backend: {}", config.base_url());
    let backend: Arc<dyn FaceBackend> = Arc::new(HttpFaceBackend::new(config)?);

    match cli.command {
        Command::Register { user_id, images } => {
            let use_case = RegisterFaceUseCase::new(backend);
            let registration = submit(RegistrationForm { user_id, images }, |request| {
                use_case.execute(request)
            })?;
            if let Some(path) = registration.embedding_path {
                log::info!("Embedding stored at {path}");
            }
        }
        Command::Verify { user_id, image } => {
            let use_case = VerifyFaceUseCase::new(backend);
            submit(VerificationForm { user_id, image }, |request| {
                use_case.execute(request)
            })?;
        }
        Command::Mask {
            user_id,
            mask_type,
            image,
            output,
        } => {
            let form = MaskingForm {
                user_id,
                image,
                mask_type: mask_type.parse()?,
            };
            let use_case = MaskFaceUseCase::new(backend).with_download(output.is_some());
            let masked = submit(form, |request| use_case.execute(request))?;
            println!("{}", masked.url);
            if let Some(output) = output {
                let dest = output_path(&output, masked.download_name());
                masked.save_to(&dest)?;
                log::info!("Output written to {}", dest.display());
            }
        }
    }

    Ok(())
}

/// Runs one collect → validate → submit → render cycle and prints the result.
fn submit<F>(
    form: F,
    execute: impl FnOnce(&F::Request) -> Result<F::Success, BackendError>,
) -> Result<F::Success, Box<dyn std::error::Error>>
where
    F: Form,
    F::Success: Clone,
{
    let mut screen = ScreenState::new(form);
    let Some((ticket, request)) = screen.submit() else {
        let notice = screen.notice().unwrap_or("invalid input").to_string();
        return Err(notice.into());
    };

    eprintln!("{}", F::BUSY_LABEL);
    screen.resolve(ticket, execute(&request));

    if let Some(banner) = screen.banner() {
        if banner.tone == Tone::Failure {
            return Err(banner.text.into());
        }
        println!("{}", banner.text);
    }
    screen
        .outcome()
        .success()
        .cloned()
        .ok_or_else(|| F::FAILURE_MESSAGE.into())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.timeout == Some(0) {
        return Err("Timeout must be at least 1 second".into());
    }
    match &cli.command {
        Command::Register { images, .. } => {
            for image in images {
                check_image(image)?;
            }
        }
        Command::Verify { image, .. } => {
            if let Some(image) = image {
                check_image(image)?;
            }
        }
        Command::Mask {
            mask_type, image, ..
        } => {
            mask_type.parse::<MaskType>()?;
            if let Some(image) = image {
                check_image(image)?;
            }
        }
    }
    Ok(())
}

fn check_image(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("Input file not found: {}", path.display()).into());
    }
    if !has_image_extension(path) {
        log::warn!("{} does not look like an image file", path.display());
    }
    Ok(())
}

fn output_path(output: &Path, default_name: &str) -> PathBuf {
    if output.is_dir() {
        output.join(default_name)
    } else {
        output.to_path_buf()
    }
}
