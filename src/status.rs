// Status display: shows effective configuration and existing badge files.

use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::output::format_bytes;

/// Display configuration and output file status to the terminal.
/// Secrets are only ever reported as set or unset.
pub fn show(config: &Config) {
    println!("Author: {}", config.author_id);

    let key_state = if config.serpapi_key.is_some() {
        "set".green()
    } else {
        "not set".red()
    };
    println!("SerpApi key: {} ({})", key_state, config.serpapi_url);

    match config.pushplus_token {
        Some(_) => println!("Notifications: PushPlus ({})", config.pushplus_url),
        None => {
            println!("Notifications: off");
            println!("  Set PUSHPLUS_TOKEN to enable them");
        }
    }

    let style = &config.badge_style;
    println!(
        "Badge: {} via {} (logo {}, colors {}/{}, style {})",
        style.label, config.shields_url, style.logo, style.label_color, style.color, style.style
    );
    println!("PNG scale: {}x", config.png_scale);

    print_file("SVG", &config.svg_path());
    print_file("PNG", &config.png_path());

    if config.serpapi_key.is_none() {
        println!("\nSet SERPAPI_API_KEY, then run `scholar-badge update`.");
    }
}

fn print_file(kind: &str, path: &Path) {
    match std::fs::metadata(path) {
        Ok(meta) => println!("{kind}: {} ({})", path.display(), format_bytes(meta.len())),
        Err(_) => println!("{kind}: {} (not generated yet)", path.display()),
    }
}

/// Report a configuration that failed to load.
pub fn show_invalid(err: &anyhow::Error) {
    println!("Configuration: {}", "invalid".red());
    println!("  {err:#}");
    println!("\nFix the variable above (see .env.example), then run `scholar-badge status` again.");
}
