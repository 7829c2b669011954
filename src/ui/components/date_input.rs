use chrono::{Datelike, NaiveDate};
use crossterm::event::KeyCode;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DatePart {
    Year,
    Month,
    Day,
}

impl DatePart {
    fn width(self) -> usize {
        match self {
            DatePart::Year => 4,
            DatePart::Month | DatePart::Day => 2,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            DatePart::Year => "[YYYY]",
            DatePart::Month => "[MM]",
            DatePart::Day => "[DD]",
        }
    }
}

/// Keyboard editing of a calendar date, one part at a time.
///
/// Digits accumulate into a buffer for the current part; once the buffer is
/// as wide as the part it is applied if the resulting date exists, and
/// discarded otherwise.
pub struct DateInputState {
    pub date: NaiveDate,
    pub editing: bool,
    pub date_part: DatePart,
    buffer: String,
}

impl DateInputState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            editing: false,
            date_part: DatePart::Year,
            buffer: String::new(),
        }
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
        self.date_part = DatePart::Year;
        self.buffer.clear();
    }

    pub fn next_date_part(&mut self) {
        self.date_part = match self.date_part {
            DatePart::Year => DatePart::Month,
            DatePart::Month => DatePart::Day,
            DatePart::Day => DatePart::Year,
        };
        self.buffer.clear();
    }

    pub fn previous_date_part(&mut self) {
        self.date_part = match self.date_part {
            DatePart::Year => DatePart::Day,
            DatePart::Month => DatePart::Year,
            DatePart::Day => DatePart::Month,
        };
        self.buffer.clear();
    }

    pub fn handle_input(&mut self, key: KeyCode) {
        if !self.editing {
            return;
        }

        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.buffer.push(c);
                if self.buffer.len() == self.date_part.width() {
                    if let Some(date) = self.apply_buffer() {
                        self.date = date;
                    }
                    self.buffer.clear();
                }
            }
            KeyCode::Backspace => {
                self.buffer.pop();
            }
            KeyCode::Right => self.next_date_part(),
            KeyCode::Left => self.previous_date_part(),
            _ => {}
        }
    }

    fn apply_buffer(&self) -> Option<NaiveDate> {
        let value: u32 = self.buffer.parse().ok()?;
        let (year, month, day) = (self.date.year(), self.date.month(), self.date.day());
        match self.date_part {
            DatePart::Year if (1900..=2100).contains(&value) => {
                NaiveDate::from_ymd_opt(value as i32, month, day)
            }
            DatePart::Month => NaiveDate::from_ymd_opt(year, value, day),
            DatePart::Day => NaiveDate::from_ymd_opt(year, month, value),
            _ => None,
        }
    }

    pub fn display(&self) -> String {
        let year = format!("{:04}", self.date.year());
        let month = format!("{:02}", self.date.month());
        let day = format!("{:02}", self.date.day());
        if !self.editing {
            return format!("{year}-{month}-{day}");
        }

        let marker = if self.buffer.is_empty() {
            self.date_part.placeholder().to_string()
        } else {
            format!("[{}]", self.buffer)
        };
        match self.date_part {
            DatePart::Year => format!("{year}{marker}-{month}-{day}"),
            DatePart::Month => format!("{year}-{month}{marker}-{day}"),
            DatePart::Day => format!("{year}-{month}-{day}{marker}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(date: NaiveDate) -> DateInputState {
        let mut state = DateInputState::new(date);
        state.set_editing(true);
        state
    }

    fn type_digits(state: &mut DateInputState, digits: &str) {
        for c in digits.chars() {
            state.handle_input(KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_a_full_part_updates_the_date() {
        let mut state = editing(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        type_digits(&mut state, "2025");
        state.handle_input(KeyCode::Right);
        type_digits(&mut state, "07");
        state.handle_input(KeyCode::Right);
        type_digits(&mut state, "04");

        assert_eq!(state.date, NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
    }

    #[test]
    fn impossible_dates_are_discarded() {
        let mut state = editing(NaiveDate::from_ymd_opt(2023, 2, 10).unwrap());
        state.handle_input(KeyCode::Left);
        type_digits(&mut state, "30");
        assert_eq!(state.date, NaiveDate::from_ymd_opt(2023, 2, 10).unwrap());

        state.handle_input(KeyCode::Left);
        type_digits(&mut state, "13");
        assert_eq!(state.date.month(), 2);
    }

    #[test]
    fn display_marks_the_part_being_edited() {
        let mut state = editing(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(state.display(), "2024[YYYY]-01-05");

        state.handle_input(KeyCode::Right);
        state.handle_input(KeyCode::Char('1'));
        assert_eq!(state.display(), "2024-01[1]-05");

        state.set_editing(false);
        assert_eq!(state.display(), "2024-01-05");
    }

    #[test]
    fn input_is_ignored_unless_editing() {
        let mut state = DateInputState::new(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        type_digits(&mut state, "1999");
        assert_eq!(state.date.year(), 2024);
    }
}
