use crate::cli::{args::ConfigAction, global::GlobalArgs};
use base64url_cookie::Settings;

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { json } => handle_show(json, settings),
        ConfigAction::Path => handle_path(),
    }
}

fn handle_show(json: bool, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
    } else {
        print!("{}", settings.to_toml()?);
    }
    Ok(())
}

fn handle_path() -> Result<(), Box<dyn std::error::Error>> {
    match Settings::user_config_path() {
        Some(path) => println!("user:  {}", path.display()),
        None => println!("user:  (no config directory on this platform)"),
    }
    println!("local: {}", Settings::local_config_path().display());
    Ok(())
}
