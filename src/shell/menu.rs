//! Main menu

/// Menu text shown before every choice
pub const MENU: &str = "\nPersonal Expense Tracker — Menu\n\
1) Add expense\n\
2) List recent expenses\n\
3) Show monthly summary\n\
4) Show category summary\n\
5) Show highest / lowest spending\n\
6) Search by text (category or description)\n\
7) Export CSV copy\n\
0) Exit\n";

/// An action picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    MonthlySummary,
    CategorySummary,
    Extremes,
    Search,
    Export,
    Exit,
}

impl MenuChoice {
    /// Parse the user's menu input
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::MonthlySummary),
            "4" => Some(Self::CategorySummary),
            "5" => Some(Self::Extremes),
            "6" => Some(Self::Search),
            "7" => Some(Self::Export),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Export));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("add"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_menu_lists_every_option() {
        assert!(MENU.starts_with("\nPersonal Expense Tracker — Menu\n1) Add expense\n"));
        assert!(MENU.ends_with("7) Export CSV copy\n0) Exit\n"));
        assert_eq!(MENU.lines().count(), 10);
    }
}
