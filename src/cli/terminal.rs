use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// 行単位の対話入出力
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 1行出力する
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// プロンプトを出して1行読む
    ///
    /// 前後の空白を取り除いた行を返す。入力の終端では`None`。
    /// UTF-8として不正なバイトは置換文字に変換する。
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_trimmed_line() {
        let mut term = Terminal::new(Cursor::new("  Science Fiction \n"), Vec::new());

        let answer = term.prompt("Genre: ").unwrap();

        assert_eq!(answer.as_deref(), Some("Science Fiction"));
        assert_eq!(String::from_utf8(term.into_output()).unwrap(), "Genre: ");
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let mut term = Terminal::new(Cursor::new(b"Jane \xff\xfe\nnext\n".to_vec()), Vec::new());

        let answer = term.prompt("Enter Name: ").unwrap();

        assert_eq!(answer.as_deref(), Some("Jane \u{FFFD}\u{FFFD}"));
        assert_eq!(term.prompt("> ").unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_prompt_returns_none_at_end_of_input() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());

        assert_eq!(term.prompt("> ").unwrap(), None);
    }
}
