//! The `mathquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("mathquiz.toml").exists() {
        println!("mathquiz.toml already exists, skipping.");
    } else {
        std::fs::write("mathquiz.toml", SAMPLE_CONFIG)?;
        println!("Created mathquiz.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust mathquiz.toml if your school uses different timings");
    println!("  2. Preview a question set: mathquiz generate --answers");
    println!("  3. Start a test: mathquiz take");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mathquiz configuration

# Questions per difficulty tier. Easy uses + and - on 1..=25,
# hard uses + - * / on 1..=50.
easy_questions = 10
hard_questions = 10

# Test duration in minutes, and extra time for a learning difficulty.
base_minutes = 45
accommodation_minutes = 15

# Where tutor reports are written.
output_dir = "."

# Inclusive upper bounds of each result band; above merit_max is Distinction.
[bands]
fail_max = 4
pass_max = 10
merit_max = 15
"#;
