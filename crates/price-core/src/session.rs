//! Line-oriented interactive search session

use crate::search::{render_hits, SearchResult};
use crate::store::PriceList;
use std::io::{self, BufRead, Write};

/// Help line shown before every prompt
pub const HELP: &str = "(q, exit) quit";

/// One parsed line of operator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line
    Empty,
    /// `q` or `exit`
    Quit,
    /// Anything else, lowercased and trimmed
    Search(String),
}

/// Interpret one input line
pub fn parse_command(line: &str) -> Command {
    let text = line.to_lowercase();
    let text = text.trim();

    match text {
        "" => Command::Empty,
        "q" | "exit" => Command::Quit,
        _ => Command::Search(text.to_string()),
    }
}

/// What happened during a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Queries that were executed
    pub searches: usize,
    /// Queries that matched nothing
    pub empty_searches: usize,
}

/// Prompt for queries until the operator quits or input ends
pub fn run_session<R: BufRead, W: Write>(
    list: &PriceList,
    mut input: R,
    mut output: W,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut buf = Vec::new();

    loop {
        write!(output, "\n{}\nEnter search text: ", HELP)?;
        output.flush()?;

        // Raw bytes so a line that is not UTF-8 cannot end the session
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match parse_command(&line) {
            Command::Empty => writeln!(output, "Error! Enter text to search for.")?,
            Command::Quit => break,
            Command::Search(query) => {
                summary.searches += 1;
                match list.find_text(&query) {
                    SearchResult::NoResults => {
                        summary.empty_searches += 1;
                        writeln!(output, "No results found.")?;
                    }
                    SearchResult::Found(hits) => write!(output, "{}", render_hits(&hits))?,
                }
            }
        }
    }

    Ok(summary)
}
