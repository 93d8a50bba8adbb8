//! Basic Example - frames, alignment and styles
//!
//! This example demonstrates basic usage of spark-frame:
//! - Creating a frame with the default glyphs
//! - Placing text on rows with different alignments
//! - Switching to a preset and a custom style
//! - Handling a placement error without exiting
//!
//! Run with: cargo run --example basic
//! Logs: RUST_LOG=spark_frame=debug cargo run --example basic

use spark_frame::{Alignment, BorderStyle, Frame, StyleSet, print_frame};
use tracing_subscriber::EnvFilter;

fn main() -> spark_frame::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("=== spark-frame Basic Example ===\n");

    let mut frame = Frame::new(4, 10)?;
    frame.place(1, "test", Alignment::default())?;
    frame.place(2, "test1", Alignment::default())?;
    print_frame(&frame)?;
    frame.write_summary(&mut std::io::stdout())?;

    println!("\nAlignments (rounded):");
    let mut aligned = Frame::with_style(3, 14, BorderStyle::Rounded.into())?;
    aligned.place(0, "left", "left".parse()?)?;
    aligned.place(1, "center", "center".parse()?)?;
    aligned.place(2, "right", "right".parse()?)?;
    print_frame(&aligned)?;

    println!("\nCustom style:");
    let ascii = StyleSet::custom([
        ("horizontal", "-"),
        ("vertical", "|"),
        ("top-left", "+"),
        ("top-right", "+"),
        ("bottom-left", "+"),
        ("bottom-right", "+"),
    ])?;
    aligned.set_style(ascii);
    print_frame(&aligned)?;

    println!("\nInvalid placement:");
    if let Err(err) = frame.place(0, "much too long for this frame", Alignment::Left) {
        println!("  error: {err}");
    }
    if let Err(err) = frame.place(9, "x", Alignment::Left) {
        println!("  error: {err}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
