use crate::{
    banner::{Banner, BannerLevel},
    models::TutoringSession,
    shell::{MenuItem, Output},
};

use colored::Colorize;

/// Print shell output to stdout
pub fn render(outputs: &[Output]) {
    for output in outputs {
        match output {
            Output::Heading(text) => println!("{}", text.bright_magenta().bold()),
            Output::Banner(banner) => println!("{}", banner_line(banner)),
            Output::Menu {
                items,
                authenticated,
            } => render_menu(items, *authenticated),
            Output::Sessions(sessions) => render_sessions(sessions),
        }
    }
}

fn banner_line(banner: &Banner) -> String {
    match banner.level {
        BannerLevel::Success => format!("✔ {}", banner.text).green().to_string(),
        BannerLevel::Info => format!("ℹ {}", banner.text).cyan().to_string(),
        BannerLevel::Warning => format!("⚠ {}", banner.text).yellow().to_string(),
        BannerLevel::Error => format!("✘ {}", banner.text).red().to_string(),
    }
}

fn render_menu(items: &[MenuItem], authenticated: bool) {
    println!("{}", "Menu".bold());
    for item in items {
        println!(
            "  {:<14} {}",
            item.usage().bright_cyan(),
            item.describe(authenticated).bright_black()
        );
    }
    println!(
        "  {:<14} {}",
        "help".bright_cyan(),
        "Show this menu".bright_black()
    );
    println!("  {:<14} {}", "quit".bright_cyan(), "Exit".bright_black());
}

fn render_sessions(sessions: &[TutoringSession]) {
    if sessions.is_empty() {
        println!("{}", "No tutoring sessions to show.".bright_black());
        return;
    }

    for session in sessions {
        println!(
            "{} {} {}  {}",
            format!("#{}", session.id).bright_cyan(),
            session.fecha,
            session.hora,
            session.titulo.bold()
        );
        if !session.profesor.is_empty() {
            println!("    Instructor: {}", session.profesor);
        }
        if !session.descripcion.is_empty() {
            println!("    {}", session.descripcion.bright_black());
        }
    }
}
