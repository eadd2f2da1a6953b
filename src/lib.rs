#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

pub fn get_line(source: &str, line_number: u32) -> Option<&str> {
    if line_number == 0 {
        return None;
    }

    source.lines().nth(line_number as usize - 1)
}


pub fn display_error(error: &Error, file_name: &str, source: &str) {
    /*
        Error: message
        -> strategy.pine
           |
        20 | plot(#)
           | -----^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file_name);

    // Configuration errors carry no source position
    let line_text = match get_line(source, position.line) {
        Some(line) => line,
        None => return,
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
