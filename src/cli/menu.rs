use std::str::FromStr;

/// メニュー本文（選択肢の番号は固定）
pub const MENU: &str = " Library Management System \n\
1. Add Member\n\
2. Issue Book\n\
3. Return Book\n\
4. Display Borrowed Books\n\
5. Calculate Fine\n\
6. Exit";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

/// メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddMember,
    IssueBook,
    ReturnBook,
    DisplayBorrowedBooks,
    CalculateFine,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddMember),
            "2" => Ok(MenuChoice::IssueBook),
            "3" => Ok(MenuChoice::ReturnBook),
            "4" => Ok(MenuChoice::DisplayBorrowedBooks),
            "5" => Ok(MenuChoice::CalculateFine),
            "6" => Ok(MenuChoice::Exit),
            other => Err(format!("Invalid menu choice: {}", other)),
        }
    }
}
