//! Help rendering with termimad

use termimad::crossterm::style::{Attribute, Color::*};
use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print markdown styled when colours are wanted, plain otherwise
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        skin().print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Bold cyan title, yellow option names
fn skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Blue);
    skin.inline_code.set_fg(Yellow);
    skin.bold.add_attr(Attribute::Bold);
    skin
}
