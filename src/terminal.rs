//! The toy command interpreter hosted in the bottom panel.
//!
//! Commands never fail the process: unknown input is reported as an output
//! line and navigation targets that resolve to nothing fall through to the
//! routing layer as raw paths.

pub const PROMPT: &str = "portfolio@guest:~$";

const WELCOME: &str = "Welcome to the portfolio terminal. Type \"help\" to get started.";

/// Page aliases accepted by `open`/`goto`/`cd`.
const ALIASES: &[(&str, &str)] = &[
    ("home", "/"),
    ("/", "/"),
    ("projects", "/projects"),
    ("about", "/about"),
    ("contact", "/contact"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// An echoed input line, prompt included.
    Input(String),
    Output(String),
}

impl Line {
    pub fn text(&self) -> &str {
        match self {
            Line::Input(text) | Line::Output(text) => text,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Line::Input(_))
    }
}

/// Scrollback plus command dispatch. Navigation is requested back to the
/// caller; the interpreter itself never touches the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    lines: Vec<Line>,
}

impl Default for Terminal {
    fn default() -> Self {
        Self {
            lines: vec![Line::Output(WELCOME.to_string())],
        }
    }
}

impl Terminal {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Run one command line. Returns the path to navigate to, if the
    /// command asked for navigation.
    pub fn run(&mut self, input: &str) -> Option<String> {
        let trimmed = input.trim();
        self.lines.push(Line::Input(format!("{PROMPT} {trimmed}")));

        let mut words = trimmed.split_whitespace();
        let name = words.next()?;
        let arg = words.collect::<Vec<_>>().join(" ");

        match name.to_lowercase().as_str() {
            "help" => {
                self.emit("Available commands:");
                self.emit("  help               Show this help");
                self.emit("  ls                 List pages");
                self.emit("  open <page>        Open a page (home, projects, about, contact)");
                self.emit("  goto <page>        Same as open");
                self.emit("  cd <page>          Same as open");
                self.emit("  clear              Clear the terminal");
                None
            }
            "clear" => {
                self.lines.clear();
                None
            }
            "ls" => {
                let pages: Vec<&str> = ALIASES
                    .iter()
                    .filter(|(alias, _)| *alias != "/")
                    .map(|(alias, _)| *alias)
                    .collect();
                self.emit(pages.join("  "));
                None
            }
            "open" | "goto" | "cd" => {
                let target = if arg.is_empty() {
                    "home".to_string()
                } else {
                    arg.to_lowercase()
                };
                // Unresolved targets are treated as raw paths; the routing
                // layer renders not-found for them.
                let path = ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == target)
                    .map(|(_, path)| (*path).to_string())
                    .unwrap_or(target);
                self.emit(format!("Opened {path}"));
                Some(path)
            }
            _ => {
                self.emit(format!("Command not found: {name}"));
                None
            }
        }
    }

    /// Ctrl+C: drop the pending input and note the interrupt.
    pub fn interrupt(&mut self) {
        self.emit("^C");
    }

    fn emit(&mut self, text: impl Into<String>) {
        self.lines.push(Line::Output(text.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs(terminal: &Terminal) -> Vec<&str> {
        terminal
            .lines()
            .iter()
            .filter(|line| !line.is_input())
            .map(Line::text)
            .collect()
    }

    #[test]
    fn test_starts_with_welcome_line() {
        let terminal = Terminal::default();
        assert_eq!(terminal.lines().len(), 1);
        assert!(terminal.lines()[0].text().contains("help"));
    }

    #[test]
    fn test_input_is_echoed_with_prompt() {
        let mut terminal = Terminal::default();
        terminal.run("help");
        let echoed = terminal
            .lines()
            .iter()
            .find(|line| line.is_input())
            .expect("echoed input line");
        assert_eq!(echoed.text(), format!("{PROMPT} help"));
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut terminal = Terminal::default();
        terminal.run("help");
        let text = outputs(&terminal).join("\n");
        for command in ["help", "ls", "open", "goto", "cd", "clear"] {
            assert!(text.contains(command), "missing {command} in help");
        }
    }

    #[test]
    fn test_ls_lists_pages_without_slash_alias() {
        let mut terminal = Terminal::default();
        terminal.run("ls");
        let last = terminal.lines().last().expect("output");
        assert_eq!(last.text(), "home  projects  about  contact");
    }

    #[test]
    fn test_open_resolves_alias() {
        let mut terminal = Terminal::default();
        assert_eq!(terminal.run("open projects").as_deref(), Some("/projects"));
        assert_eq!(terminal.run("goto about").as_deref(), Some("/about"));
        assert_eq!(terminal.run("cd contact").as_deref(), Some("/contact"));
    }

    #[test]
    fn test_open_without_argument_goes_home() {
        let mut terminal = Terminal::default();
        assert_eq!(terminal.run("open").as_deref(), Some("/"));
    }

    #[test]
    fn test_open_is_case_insensitive() {
        let mut terminal = Terminal::default();
        assert_eq!(terminal.run("OPEN Projects").as_deref(), Some("/projects"));
    }

    #[test]
    fn test_open_unknown_target_falls_back_to_raw_path() {
        let mut terminal = Terminal::default();
        assert_eq!(terminal.run("open xyz").as_deref(), Some("xyz"));
        let last = terminal.lines().last().expect("output");
        assert_eq!(last.text(), "Opened xyz");
    }

    #[test]
    fn test_unknown_command_is_reported_inline() {
        let mut terminal = Terminal::default();
        assert_eq!(terminal.run("frobnicate now"), None);
        let last = terminal.lines().last().expect("output");
        assert_eq!(last.text(), "Command not found: frobnicate");
    }

    #[test]
    fn test_blank_input_only_echoes() {
        let mut terminal = Terminal::default();
        let before = terminal.lines().len();
        assert_eq!(terminal.run("   "), None);
        assert_eq!(terminal.lines().len(), before + 1);
    }

    #[test]
    fn test_clear_empties_scrollback() {
        let mut terminal = Terminal::default();
        terminal.run("help");
        terminal.run("clear");
        assert!(terminal.lines().is_empty());
    }

    #[test]
    fn test_interrupt_prints_caret_c() {
        let mut terminal = Terminal::default();
        terminal.interrupt();
        assert_eq!(terminal.lines().last().map(Line::text), Some("^C"));
    }
}
