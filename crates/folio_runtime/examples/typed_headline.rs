//! Minimal page: loading overlay plus a typed headline
//!
//! Builds a six-node document by hand, wires up just two effects and
//! advances the virtual clock, printing a snapshot every half second.
//! Shows the polled-timer model without the full demo portfolio.

use std::time::Duration;

use folio_core::dom::Document;
use folio_core::time::SessionClock;
use folio_fx::{LoadingSequencer, TypingEffect};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== folio: typed headline demo ===\n");

    println!("1. Building a minimal document...");
    let mut doc = Document::new();
    let root = doc.root();

    let screen = doc.create_element("div");
    doc.append_child(root, screen)?;
    doc.set_id(screen, "loadingScreen");
    let progress = doc.create_element("div");
    doc.append_child(screen, progress)?;
    doc.set_id(progress, "loadingProgress");
    let percentage = doc.create_element("span");
    doc.append_child(screen, percentage)?;
    doc.set_id(percentage, "loadingPercentage");

    let content = doc.create_element("main");
    doc.append_child(root, content)?;
    doc.set_id(content, "mainContent");
    let headline = doc.create_element("h1");
    doc.append_child(content, headline)?;
    doc.add_class(headline, "typing-text");
    doc.set_text(headline, "folio runtime");
    println!("   ✓ {} nodes\n", doc.node_count());

    println!("2. Running the virtual clock for 4 seconds...");
    let mut clock = SessionClock::new();
    let mut loading = LoadingSequencer::new(&doc, clock.now());
    let mut typing = TypingEffect::new(&mut doc, clock.now());

    let step = Duration::from_millis(50);
    for _ in 0..80 {
        let now = clock.advance(step);
        if let Some(loading) = &mut loading {
            loading.update(&mut doc, now);
        }
        if let Some(typing) = &mut typing {
            typing.update(&mut doc, now);
        }
        if now.as_millis() % 500 == 0 {
            let percent = doc.text(percentage).unwrap_or("");
            let typed = doc.text(headline).unwrap_or("");
            println!("   t={:>4}ms  loading {:>4}  \"{}\"", now.as_millis(), percent, typed);
        }
    }

    println!("\n3. Final state:");
    let hidden = doc.style(screen, "display") == Some("none");
    println!("   ✓ overlay hidden: {hidden}");
    println!("   ✓ headline: \"{}\"", doc.text(headline).unwrap_or(""));
    let blinking = typing.as_ref().is_some_and(|t| t.is_blinking());
    println!("   ✓ caret blinking: {blinking}");

    Ok(())
}
