// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
                       _                   _ _
  _ __ ___   ___  __ _| |_ __ ___   __ _(_) |
 | '_ ` _ \ / _ \/ _` | | '_ ` _ \ / _` | | |
 | | | | | |  __/ (_| | | | | | | | (_| | | |
 |_| |_| |_|\___|\__,_|_|_| |_| |_|\__,_|_|_|

    Personalized Recipes, Delivered by Email
"#;
    println!("{}", banner);
}
