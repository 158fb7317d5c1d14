//! Demo portfolio document
//!
//! Builds the single-page markup every subsystem resolves against:
//! fixed navbar with hamburger menu, loading overlay, hero with typed
//! headline and particle container, then about / skills / projects /
//! contact sections carrying the reveal, counter and skill-bar hooks.
//!
//! Vertical geometry is assigned up front so scroll probes and
//! viewport intersection have real offsets to work with.

use folio_core::dom::{Document, NodeId};

const HERO_HEADLINE: &str = "Hello, I'm Jordan Reyes";

/// (id, top, height) for each page section, top to bottom.
const SECTIONS: [(&str, f32, f32); 5] = [
    ("home", 0.0, 800.0),
    ("about", 800.0, 700.0),
    ("skills", 1500.0, 650.0),
    ("projects", 2150.0, 900.0),
    ("contact", 3050.0, 600.0),
];

pub fn build_portfolio() -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    build_navbar(&mut doc, root);
    build_loading_overlay(&mut doc, root);

    let main = attach(&mut doc, root, "main");
    doc.set_id(main, "mainContent");

    build_hero(&mut doc, main);
    build_about(&mut doc, main);
    build_skills(&mut doc, main);
    build_projects(&mut doc, main);
    build_contact(&mut doc, main);

    doc
}

fn build_navbar(doc: &mut Document, root: NodeId) {
    let navbar = attach(doc, root, "nav");
    doc.set_id(navbar, "navbar");
    doc.set_offsets(navbar, 0.0, 70.0);

    let hamburger = attach(doc, navbar, "div");
    doc.set_id(hamburger, "hamburger");
    doc.add_class(hamburger, "hamburger");
    for _ in 0..3 {
        let bar = attach(doc, hamburger, "span");
        doc.add_class(bar, "bar");
    }

    let menu = attach(doc, navbar, "ul");
    doc.set_id(menu, "nav-menu");
    doc.add_class(menu, "nav-menu");
    for (id, _, _) in SECTIONS {
        nav_link(doc, menu, id);
    }
}

fn nav_link(doc: &mut Document, menu: NodeId, section_id: &str) {
    let item = attach(doc, menu, "li");
    let link = attach(doc, item, "a");
    doc.add_class(link, "nav-link");
    doc.set_attr(link, "href", format!("#{section_id}"));
    // "home" -> "Home"
    let mut label = String::from(section_id);
    label[..1].make_ascii_uppercase();
    doc.set_text(link, label);
}

fn build_loading_overlay(doc: &mut Document, root: NodeId) {
    let screen = attach(doc, root, "div");
    doc.set_id(screen, "loadingScreen");

    let bar = attach(doc, screen, "div");
    doc.add_class(bar, "loading-bar");
    let progress = attach(doc, bar, "div");
    doc.set_id(progress, "loadingProgress");

    let percentage = attach(doc, screen, "span");
    doc.set_id(percentage, "loadingPercentage");
    doc.set_text(percentage, "0%");
}

fn build_hero(doc: &mut Document, main: NodeId) {
    let home = section(doc, main, 0);

    let background = attach(doc, home, "div");
    doc.set_id(background, "asciiBackground");
    doc.set_offsets(background, 0.0, 800.0);

    let headline = attach(doc, home, "h1");
    doc.add_class(headline, "typing-text");
    doc.set_text(headline, HERO_HEADLINE);
    doc.set_offsets(headline, 300.0, 60.0);

    let indicator = attach(doc, home, "div");
    doc.add_class(indicator, "scroll-indicator");
    doc.set_offsets(indicator, 700.0, 40.0);
}

fn build_about(doc: &mut Document, main: NodeId) {
    let about = section(doc, main, 1);

    reveal_block(doc, about, "fade-in", 850.0, 300.0);

    let stats = attach(doc, about, "div");
    doc.add_class(stats, "about-stats");
    doc.set_offsets(stats, 1250.0, 80.0);
    for target in ["42", "12", "150"] {
        let stat = attach(doc, stats, "span");
        doc.add_class(stat, "stat-number");
        doc.set_attr(stat, "data-target", target);
        doc.set_text(stat, "0");
        doc.set_offsets(stat, 1250.0, 60.0);
    }
}

fn build_skills(doc: &mut Document, main: NodeId) {
    let skills = section(doc, main, 2);

    let left = reveal_block(doc, skills, "slide-in-left", 1550.0, 250.0);
    skill_bar(doc, left, "92", 1600.0);
    skill_bar(doc, left, "85", 1680.0);

    let right = reveal_block(doc, skills, "slide-in-right", 1850.0, 250.0);
    skill_bar(doc, right, "70", 1900.0);
}

fn build_projects(doc: &mut Document, main: NodeId) {
    let projects = section(doc, main, 3);
    reveal_block(doc, projects, "fade-in", 2200.0, 400.0);
    reveal_block(doc, projects, "fade-in", 2650.0, 350.0);
}

fn build_contact(doc: &mut Document, main: NodeId) {
    let contact = section(doc, main, 4);
    reveal_block(doc, contact, "fade-in", 3100.0, 300.0);
}

fn section(doc: &mut Document, main: NodeId, index: usize) -> NodeId {
    let (id, top, height) = SECTIONS[index];
    let node = attach(doc, main, "section");
    doc.set_id(node, id);
    doc.set_offsets(node, top, height);
    node
}

fn reveal_block(doc: &mut Document, parent: NodeId, class: &str, top: f32, height: f32) -> NodeId {
    let block = attach(doc, parent, "div");
    doc.add_class(block, class);
    doc.set_offsets(block, top, height);
    block
}

fn skill_bar(doc: &mut Document, parent: NodeId, progress: &str, top: f32) {
    let bar = attach(doc, parent, "div");
    doc.add_class(bar, "skill-progress");
    doc.set_attr(bar, "data-progress", progress);
    doc.set_offsets(bar, top, 20.0);
}

fn attach(doc: &mut Document, parent: NodeId, tag: &str) -> NodeId {
    let node = doc.create_element(tag);
    doc.append_child(parent, node)
        .expect("freshly created nodes always attach");
    node
}
