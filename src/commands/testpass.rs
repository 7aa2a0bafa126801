use anyhow::Result;

use rpwgen::meter::render_meter;
use rpwgen::passgen::assess_password_strength;
use rpwgen::strength::classify;

pub fn test_password(password: &str, show_meter: bool) -> Result<()> {
    let length = password.chars().count();
    if show_meter {
        println!("Length {}: {}", length, render_meter(length));
    } else {
        println!("Length {}: {}", length, classify(length));
    }

    let report = assess_password_strength(password);
    println!("Estimated strength: {} (score: {}/4)", report.rating, report.score);
    if !report.feedback.is_empty() {
        println!("Suggestions: {}", report.feedback);
    }
    Ok(())
}

pub fn classify_length(length: usize) -> Result<()> {
    println!("{}", render_meter(length));
    Ok(())
}
