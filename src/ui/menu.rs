use crate::app::NavigationEntry;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    DisplayHistory,
    Back,
    Forward,
    Visit,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::DisplayHistory,
        MenuAction::Back,
        MenuAction::Forward,
        MenuAction::Visit,
        MenuAction::Quit,
    ];

    /// Maps a menu selection (`"1"` to `"5"`) to its action.
    pub fn parse(selection: &str) -> Option<Self> {
        match selection.trim() {
            "1" => Some(MenuAction::DisplayHistory),
            "2" => Some(MenuAction::Back),
            "3" => Some(MenuAction::Forward),
            "4" => Some(MenuAction::Visit),
            "5" => Some(MenuAction::Quit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::DisplayHistory => "Display Browser History",
            MenuAction::Back => "Go Back",
            MenuAction::Forward => "Go Forward",
            MenuAction::Visit => "Visit Site",
            MenuAction::Quit => "Quit",
        }
    }
}

pub fn render_menu<W: Write>(out: &mut W, current: Option<&NavigationEntry>) -> io::Result<()> {
    writeln!(out, "Welcome to the Browser History Simulator")?;
    writeln!(out)?;
    writeln!(out, "Current Website:")?;
    match current {
        Some(entry) => writeln!(out, "{}", entry)?,
        None => writeln!(out, "No current page")?,
    }
    writeln!(out, "What would you like to do?")?;
    for (i, action) in MenuAction::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, action.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(MenuAction::parse("1"), Some(MenuAction::DisplayHistory));
        assert_eq!(MenuAction::parse(" 2 "), Some(MenuAction::Back));
        assert_eq!(MenuAction::parse("3"), Some(MenuAction::Forward));
        assert_eq!(MenuAction::parse("4"), Some(MenuAction::Visit));
        assert_eq!(MenuAction::parse("5"), Some(MenuAction::Quit));
        assert_eq!(MenuAction::parse("6"), None);
        assert_eq!(MenuAction::parse("back"), None);
        assert_eq!(MenuAction::parse(""), None);
    }

    #[test]
    fn test_render_menu_without_page() {
        let mut out = Vec::new();
        render_menu(&mut out, None).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Welcome to the Browser History Simulator\n"));
        assert!(text.contains("Current Website:\nNo current page\n"));
        assert!(text.ends_with("4. Visit Site\n5. Quit\n"));
    }

    #[test]
    fn test_render_menu_with_page() {
        let entry = NavigationEntry::new("a.com", 100);
        let mut out = Vec::new();
        render_menu(&mut out, Some(&entry)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(&format!("Current Website:\n{}\n", entry)));
    }
}
