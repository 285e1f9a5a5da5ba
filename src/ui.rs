use crate::charset::{CharsetSpec, MAX_PASSWORD_LENGTH};
use crate::export::{self, DEFAULT_EXPORT_FILE};
use crate::generator;
use crate::strength::{self, Strength};
use anyhow::{Context, Result};
use console::Style;
use std::io::{self, Write};
use std::path::Path;
use zeroize::Zeroizing;

pub const VARIANT_COUNT: usize = 5;

pub const MIN_PROMPT_LENGTH: usize = 8;
pub const MAX_PROMPT_LENGTH: usize = MAX_PASSWORD_LENGTH;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support { ("✓", "✗") } else { ("+", "-") }
}

fn strength_style(strength: Strength, color_support: bool) -> Style {
    if !color_support {
        return Style::new();
    }
    match strength {
        Strength::VeryWeak | Strength::Weak => Style::new().red(),
        Strength::Moderate => Style::new().yellow(),
        Strength::Strong | Strength::VeryStrong => Style::new().green(),
    }
}

/// Interprets a yes/no answer; empty or unrecognized input falls back
/// to `default`.
pub fn parse_yes_no(input: &str, default: bool) -> bool {
    match input.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

fn read_line() -> Result<Option<String>> {
    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    let hint = if default { " [Y/n]" } else { " [y/N]" };
    print!("{prompt}{hint}: ");
    io::stdout().flush()?;

    match read_line()? {
        Some(input) => Ok(parse_yes_no(&input, default)),
        None => Ok(default),
    }
}

/// Re-prompts until a numeric length within the displayed range is given.
/// Returns None on end of input.
pub fn prompt_length() -> Result<Option<usize>> {
    loop {
        print!("Enter the desired password length ({MIN_PROMPT_LENGTH}-{MAX_PROMPT_LENGTH}): ");
        io::stdout().flush()?;

        let Some(input) = read_line()? else {
            return Ok(None);
        };

        match input.parse::<usize>() {
            Ok(length) if (MIN_PROMPT_LENGTH..=MAX_PROMPT_LENGTH).contains(&length) => {
                return Ok(Some(length));
            }
            Ok(_) => println!(
                "Password length must be between {MIN_PROMPT_LENGTH} and {MAX_PROMPT_LENGTH} characters."
            ),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// Asks for the four charset flags. If everything is declined, falls
/// back to all classes enabled so the charset invariant always holds
/// before the core is invoked.
pub fn prompt_charset() -> Result<CharsetSpec> {
    println!("\nPassword Composition Options:");
    println!("(Press Enter for default 'yes' or type 'n' for no)");

    let spec = CharsetSpec {
        uppercase: prompt_yes_no("Include uppercase letters (A-Z)?", true)?,
        lowercase: prompt_yes_no("Include lowercase letters (a-z)?", true)?,
        digits: prompt_yes_no("Include digits (0-9)?", true)?,
        symbols: prompt_yes_no("Include symbols (!@#$%^&*)?", true)?,
    };

    if !spec.any_enabled() {
        println!("\nAt least one character type must be selected!");
        println!("Defaulting to include all character types.");
        return Ok(CharsetSpec::all());
    }

    Ok(spec)
}

fn prompt_variant_choice(count: usize) -> Result<Option<usize>> {
    loop {
        print!("\nSelect a password for analysis (1-{count}): ");
        io::stdout().flush()?;

        let Some(input) = read_line()? else {
            return Ok(None);
        };

        match input.parse::<usize>() {
            Ok(choice) if (1..=count).contains(&choice) => return Ok(Some(choice - 1)),
            _ => println!("Please enter a number between 1 and {count}."),
        }
    }
}

pub fn display_banner(options: &DisplayOptions) {
    if options.quiet {
        return;
    }
    let rule = "=".repeat(50);
    println!("{rule}");
    println!("        SECUREPASS GENERATOR");
    println!("     Strong Password Generator");
    println!("{rule}");
    println!();
    println!("Welcome to SecurePass Generator!");
    println!("Create strong, secure passwords for all your accounts.");
}

fn display_section(title: &str, options: &DisplayOptions) {
    if options.quiet {
        return;
    }
    let rule = "=".repeat(50);
    println!("\n{rule}");
    println!("{title}");
    println!("{rule}");
}

pub fn display_analysis(password: &str, options: &DisplayOptions) {
    let analysis = strength::analyze(password);
    let report = analysis.report;

    let (check_ok, check_no) = get_status_symbols(options.unicode_support);
    let style = strength_style(report.strength, options.color_support);

    display_section("PASSWORD ANALYSIS", options);
    println!("Length:              {} characters", report.length);
    println!("Character pool size: {}", report.pool_size);
    println!(
        "Estimated entropy:   {} bits",
        style.apply_to(format!("{:.1}", report.entropy_bits))
    );
    println!("Strength:            {}", style.apply_to(report.strength));
    println!();
    println!("Character types used:");

    let class_line = |used: bool, name: &str| {
        let mark = if used { check_ok } else { check_no };
        println!("  [{mark}] {name}");
    };
    class_line(analysis.classes.lowercase, "Lowercase letters");
    class_line(analysis.classes.uppercase, "Uppercase letters");
    class_line(analysis.classes.digits, "Digits");
    class_line(analysis.classes.symbols, "Symbols");
}

pub fn display_security_tips(options: &DisplayOptions) {
    display_section("PASSWORD SECURITY TIPS", options);
    let tips = [
        "Never reuse passwords across multiple accounts",
        "Use a password manager to store your passwords securely",
        "Enable two-factor authentication when available",
        "Change passwords regularly, especially for important accounts",
        "Never share your passwords with others",
        "Avoid using personal information in passwords",
        "Use different passwords for work and personal accounts",
    ];
    for tip in tips {
        println!("* {tip}");
    }
    println!();
}

/// Narrows a variant list to the chosen password when one was picked.
fn passwords_to_save(
    passwords: &[Zeroizing<String>],
    selected: Option<usize>,
) -> &[Zeroizing<String>] {
    match selected {
        Some(index) => std::slice::from_ref(&passwords[index]),
        None => passwords,
    }
}

/// Export failures are reported but never abort: the password is already
/// on screen, so the user loses nothing.
fn offer_save(passwords: &[Zeroizing<String>], prompt: &str) -> Result<()> {
    if !prompt_yes_no(prompt, false)? {
        return Ok(());
    }

    match export::export_to_file(Path::new(DEFAULT_EXPORT_FILE), passwords) {
        Ok(()) => println!("Password saved to {DEFAULT_EXPORT_FILE}"),
        Err(e) => eprintln!("Error saving password: {e}"),
    }
    Ok(())
}

fn generate_single(options: &DisplayOptions) -> Result<()> {
    display_section("SINGLE PASSWORD GENERATION", options);

    let Some(length) = prompt_length()? else {
        return Ok(());
    };
    let spec = prompt_charset()?;

    let pool = spec.build().context("Failed to build character pool")?;
    let password = generator::sample(&pool, length).context("Failed to generate password")?;

    if options.quiet {
        println!("{}", &*password);
    } else {
        display_section("GENERATED PASSWORD", options);
        println!("Your password: {}", &*password);
        display_analysis(&password, options);
    }

    offer_save(std::slice::from_ref(&password), "\nSave password to file?")
}

fn generate_variants(options: &DisplayOptions) -> Result<()> {
    display_section("MULTIPLE PASSWORD OPTIONS", options);

    let Some(length) = prompt_length()? else {
        return Ok(());
    };
    let spec = prompt_charset()?;

    let pool = spec.build().context("Failed to build character pool")?;
    let passwords = generator::sample_many(&pool, length, VARIANT_COUNT)
        .context("Failed to generate passwords")?;

    display_section("PASSWORD OPTIONS", options);
    for (i, password) in passwords.iter().enumerate() {
        println!("{}. {}", i + 1, &**password);
    }

    let mut selected = None;
    if !options.quiet {
        if let Some(choice) = prompt_variant_choice(passwords.len())? {
            println!("\nSelected password: {}", &*passwords[choice]);
            display_analysis(&passwords[choice], options);
            selected = Some(choice);
        }
    }

    let prompt = if selected.is_some() {
        "\nSave selected password to file?"
    } else {
        "\nSave password to file?"
    };
    offer_save(passwords_to_save(&passwords, selected), prompt)
}

/// The interactive request/response loop. Each iteration runs one menu
/// action to completion; EOF on stdin exits cleanly.
pub fn main_menu(options: &DisplayOptions) -> Result<()> {
    loop {
        display_section("MAIN MENU", options);
        println!("1. Generate a single password");
        println!("2. Generate multiple password options");
        println!("3. View security tips");
        println!("4. Exit");

        print!("\nSelect an option (1-4): ");
        io::stdout().flush()?;

        let Some(choice) = read_line()? else {
            println!();
            return Ok(());
        };

        match choice.as_str() {
            "1" => generate_single(options)?,
            "2" => generate_variants(options)?,
            "3" => display_security_tips(options),
            "4" => {
                println!("\nThank you for using SecurePass Generator!");
                println!("Stay secure!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please select 1-4."),
        }
    }
}
