use clap::Parser;
use resumetr::{
    configuration::ExportConfiguration, error::ContextError, profile::UserProfile,
    style::StyleName, DocumentAssembler,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CliArguments {
    /// The plain-text resume
    #[arg(
        short = 'r',
        long = "resume",
        value_name = "text_file",
        required_unless_present = "list_styles"
    )]
    resume_path: Option<PathBuf>,
    /// The JSON user profile
    #[arg(
        short = 'p',
        long = "profile",
        value_name = "json_file",
        required_unless_present = "list_styles"
    )]
    profile_path: Option<PathBuf>,
    #[arg(short = 's', long = "style", value_name = "style_name")]
    style_name: Option<String>,
    #[arg(short = 'c', long = "configuration", value_name = "json_file")]
    configuration_path: Option<PathBuf>,
    #[arg(short = 'o', long = "output-directory", value_name = "directory")]
    output_directory: Option<PathBuf>,
    /// Print the names of the available styles and exit
    #[arg(long = "list-styles")]
    list_styles: bool,
}

fn main() {
    if let Err(error) = fallible_main() {
        log::error!("{}", error);
        std::process::exit(1);
    }
}

fn fallible_main() -> Result<(), ContextError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let arguments = CliArguments::parse();
    log::debug!("{:?}", arguments);

    if arguments.list_styles {
        for style_name in StyleName::ALL {
            println!("{}", style_name);
        }
        return Ok(());
    }

    let configuration = match &arguments.configuration_path {
        Some(configuration_path) => ExportConfiguration::from_path(configuration_path)?,
        None => ExportConfiguration::default(),
    };
    let (Some(resume_path), Some(profile_path)) = (&arguments.resume_path, &arguments.profile_path)
    else {
        return Err(ContextError::with_context(
            "Both a resume and a profile are needed to export a resume",
        ));
    };

    let resume_text = std::fs::read_to_string(resume_path).map_err(|error| {
        ContextError::with_error(format!("Unable to read the resume {:?}", resume_path), &error)
    })?;
    let user_profile = UserProfile::from_path(profile_path)?;
    let style_name = arguments
        .style_name
        .clone()
        .unwrap_or_else(|| configuration.default_style.clone());
    let output_directory = arguments
        .output_directory
        .clone()
        .unwrap_or_else(|| configuration.output_directory.clone());

    let exported_document =
        DocumentAssembler::new(configuration).export_pdf(&resume_text, &user_profile, &style_name)?;
    exported_document.save_to(&output_directory)?;

    Ok(())
}
