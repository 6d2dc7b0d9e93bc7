use std::fmt::{self, Display};
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use passgen::CharacterClass;

/// Print every character class, in alphabet order, alongside its characters.
pub(crate) fn display_classes(output: impl Write) -> io::Result<()> {
    struct ClassRow {
        class: CharacterClass,
        size: String,
    }

    impl TableDisplay for ClassRow {
        fn columns() -> usize {
            3
        }

        fn column_name(column_index: usize) -> &'static str {
            match column_index {
                0 => "Character type",
                1 => "Size",
                2 => "Characters",
                _ => unreachable!(),
            }
        }

        fn item(&self, column_index: usize) -> &str {
            match column_index {
                0 => self.class.label(),
                1 => &self.size,
                2 => self.class.characters(),
                _ => unreachable!(),
            }
        }
    }

    let rows = CharacterClass::ALL
        .into_iter()
        .map(|class| ClassRow {
            class,
            size: class.characters().chars().count().to_string(),
        })
        .collect::<Vec<_>>();
    display_table(&rows, output)
}

pub fn display_table<ItemType: TableDisplay>(
    rows: &[ItemType],
    mut output: impl Write,
) -> io::Result<()> {
    let column_count = ItemType::columns();
    let mut column_widths = (0..column_count)
        .map(|column_index| ItemType::column_name(column_index).width())
        .collect::<Vec<_>>();

    for row in rows {
        for (column_index, width) in column_widths.iter_mut().enumerate() {
            *width = std::cmp::max(row.item(column_index).width(), *width);
        }
    }

    output_row(&mut output, column_count, |column_index| {
        Padded(
            ItemType::column_name(column_index),
            column_widths[column_index],
        )
    })?;
    output_row(&mut output, column_count, |column_index| {
        Divider(column_widths[column_index])
    })?;
    for row in rows {
        output_row(&mut output, column_count, |column_index| {
            Padded(row.item(column_index), column_widths[column_index])
        })?;
    }

    Ok(())
}

pub trait TableDisplay {
    fn columns() -> usize;
    fn column_name(column_index: usize) -> &'static str;
    fn item(&self, column_index: usize) -> &str;
}

fn output_row<F, D>(mut output: impl Write, column_count: usize, get_column_display: F) -> io::Result<()>
where
    D: Display,
    F: Fn(usize) -> D,
{
    for column_index in 0..column_count {
        if column_index != 0 {
            write!(&mut output, "  ")?;
        }
        write!(&mut output, "{}", get_column_display(column_index))?;
    }
    writeln!(&mut output)?;
    Ok(())
}

struct Divider(usize);

impl Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            write!(f, "─")?;
        }
        Ok(())
    }
}

/// Left-aligns a cell, padding it to a display width (which may differ from its byte length).
struct Padded<'a>(&'a str, usize);

impl Display for Padded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = self.1.saturating_sub(self.0.width());
        write!(f, "{}", self.0)?;
        for _ in 0..padding {
            write!(f, " ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::display_classes;

    #[test]
    fn lists_every_class() {
        let mut out = Vec::new();
        display_classes(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        // Header, divider, then one row per class.
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Character type"));
        assert!(lines[2].starts_with("Numbers"));
        assert!(lines[2].contains("0123456789"));
        assert!(out.contains("ABCDEFGHIJKLMNOPQRSTUVWXYZ"));
        assert!(out.contains("~!@#$%^&*-_:;,.?"));
    }

    #[test]
    fn columns_line_up() {
        let mut out = Vec::new();
        display_classes(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let header = out.lines().next().unwrap();
        let size_col = header.find("Size").unwrap();
        for line in out.lines().skip(2) {
            let size = &line[size_col..size_col + 2];
            assert!(size.trim().parse::<usize>().is_ok(), "line: {:?}", line);
        }
    }
}
